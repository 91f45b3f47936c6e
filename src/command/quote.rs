//! POSIX shell quoting for command tokens
//!
//! Tokens made only of "safe" characters are left bare so the emitted command
//! stays readable; everything else is wrapped in single quotes. A single quote
//! inside the value is written as `'"'"'` (close, double-quoted quote, reopen).

/// Quote a string so a POSIX shell reads it back as exactly one argument
pub fn quote(value: &str) -> String {
    if value.is_empty() {
        return "''".to_string();
    }

    if value.bytes().all(is_safe_byte) {
        return value.to_string();
    }

    format!("'{}'", value.replace('\'', "'\"'\"'"))
}

fn is_safe_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(b, b'_' | b'@' | b'%' | b'+' | b'=' | b':' | b',' | b'.' | b'/' | b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_values_stay_bare() {
        assert_eq!(quote("2020"), "2020");
        assert_eq!(quote("MOOD=x"), "MOOD=x");
        assert_eq!(quote("song.wave"), "song.wave");
        assert_eq!(quote("/tmp/cover.jpg"), "/tmp/cover.jpg");
    }

    #[test]
    fn test_empty_value_is_quoted_pair() {
        assert_eq!(quote(""), "''");
    }

    #[test]
    fn test_spaces_and_pipes_are_wrapped() {
        assert_eq!(quote("A B"), "'A B'");
        assert_eq!(quote("3||||/tmp/cover.jpg"), "'3||||/tmp/cover.jpg'");
    }

    #[test]
    fn test_single_quote_is_escaped() {
        assert_eq!(quote("don't"), "'don'\"'\"'t'");
    }

    #[test]
    fn test_non_ascii_is_wrapped() {
        // Safe set is ASCII only
        assert_eq!(quote("Björk"), "'Björk'");
    }

    #[cfg(unix)]
    #[test]
    fn test_round_trip_through_sh() {
        use std::process::Command;

        let samples = [
            "plain",
            "A B",
            "",
            "it's",
            "''",
            "a|b|c",
            "KEY=value with spaces",
            "back\\slash",
            "$HOME `whoami` $(id)",
            "\"double\" and 'single'",
            "semi;colon & amp > redirect < in",
            "glob * ? [abc]",
            "tab\there\nnewline",
            "Sigur Rós — ( ) { } ~ # !",
        ];

        for sample in samples {
            let script = format!("printf '%s' {}", quote(sample));
            let output = Command::new("sh")
                .arg("-c")
                .arg(&script)
                .output()
                .expect("Failed to run sh");

            assert!(output.status.success(), "sh failed for {:?}", sample);
            assert_eq!(
                String::from_utf8_lossy(&output.stdout),
                sample,
                "Round trip mismatch for script {:?}",
                script
            );
        }
    }
}

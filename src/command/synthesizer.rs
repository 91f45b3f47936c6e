//! Metadata to encoder argument compiler
//!
//! The build engine re-runs a rule whenever its command text changes, so the
//! argument order must depend only on metadata content. Every branch is walked
//! in ascending key order and the branches are always visited in the same
//! sequence: common tags, extended comments, pictures.

use super::mapping::ParameterMap;
use super::quote::quote;
use crate::metadata::MetadataView;

/// Encoder flag vocabulary used by the synthesizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderVocabulary {
    /// Common tag name -> dedicated flag
    pub tag_parameters: ParameterMap,
    /// Comment key -> dedicated flag
    pub comment_parameters: ParameterMap,
    /// Flag taking a free-form `KEY=VALUE` comment
    pub comment_flag: String,
    /// Flag taking a pipe-delimited picture spec
    pub picture_flag: String,
}

/// Turns a metadata view into encoder argument tokens
#[derive(Debug, Clone, Copy)]
pub struct CommandSynthesizer<'a> {
    vocabulary: &'a EncoderVocabulary,
}

impl<'a> CommandSynthesizer<'a> {
    pub fn new(vocabulary: &'a EncoderVocabulary) -> Self {
        Self { vocabulary }
    }

    /// Build the shell-quoted argument tokens for `metadata`
    ///
    /// The result excludes the program name, global flags and the trailing
    /// `-- <input> <output>` positionals.
    pub fn synthesize(&self, metadata: MetadataView<'_>) -> Vec<String> {
        let mut tokens = Vec::new();
        self.push_common_tags(&metadata, &mut tokens);
        self.push_comments(&metadata, &mut tokens);
        self.push_pictures(&metadata, &mut tokens);
        tokens
    }

    fn push_common_tags(&self, metadata: &MetadataView<'_>, tokens: &mut Vec<String>) {
        let Some(common) = metadata.common_tags() else {
            return;
        };

        // Only tags with a shortcut flag are emitted; the table iterates sorted.
        for (tag, flag) in self.vocabulary.tag_parameters.iter() {
            if let Some(value) = common.get(tag) {
                tokens.push(flag.to_string());
                tokens.push(quote(value));
            }
        }
    }

    fn push_comments(&self, metadata: &MetadataView<'_>, tokens: &mut Vec<String>) {
        let Some(comments) = metadata.vorbis_comments() else {
            return;
        };

        for (key, value) in comments {
            match self.vocabulary.comment_parameters.get(key) {
                Some(flag) => {
                    tokens.push(flag.to_string());
                    tokens.push(quote(value));
                }
                None => {
                    log::debug!(
                        "No shortcut for comment {:?}, using {}",
                        key,
                        self.vocabulary.comment_flag
                    );
                    tokens.push(self.vocabulary.comment_flag.clone());
                    tokens.push(quote(&format!("{}={}", key, value)));
                }
            }
        }
    }

    fn push_pictures(&self, metadata: &MetadataView<'_>, tokens: &mut Vec<String>) {
        let Some(pictures) = metadata.pictures() else {
            return;
        };

        for (picture_type, picture) in pictures {
            // <type>|<mime>|<description>|<dimensions>|<path>; mime and dimensions are left
            // for the encoder to detect.
            let spec = [
                picture_type.to_string().as_str(),
                "",
                picture.description_or_default(),
                "",
                picture.path.as_str(),
            ]
            .join("|");

            tokens.push(self.vocabulary.picture_flag.clone());
            tokens.push(quote(&spec));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::opusenc_vocabulary;
    use crate::metadata::Metadata;
    use crate::test_fixtures::MetadataBuilder;

    fn synthesize(metadata: &Metadata) -> Vec<String> {
        let vocabulary = opusenc_vocabulary();
        CommandSynthesizer::new(&vocabulary).synthesize(metadata.view())
    }

    #[test]
    fn test_empty_metadata_produces_no_tokens() {
        assert!(synthesize(&Metadata::default()).is_empty());

        let vocabulary = opusenc_vocabulary();
        let tokens = CommandSynthesizer::new(&vocabulary).synthesize(MetadataView::empty());
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_common_tags_sorted_and_unmapped_dropped() {
        let metadata = MetadataBuilder::new()
            .common("title", "Song")
            .common("genre", "Rock")
            .common("album", "Record")
            .common("track number", "4")
            .common("artist", "Band")
            .build();

        assert_eq!(
            synthesize(&metadata),
            vec![
                "--album", "Record", "--artist", "Band", "--title", "Song", "--tracknumber", "4",
            ]
        );
    }

    #[test]
    fn test_comments_all_emitted_in_key_order() {
        let metadata = MetadataBuilder::new()
            .comment("MOOD", "x")
            .comment("DATE", "2020")
            .comment("ALBUMARTIST", "Various Artists")
            .build();

        assert_eq!(
            synthesize(&metadata),
            vec![
                "--comment",
                "'ALBUMARTIST=Various Artists'",
                "--date",
                "2020",
                "--comment",
                "MOOD=x",
            ]
        );
    }

    #[test]
    fn test_comment_keys_are_case_sensitive() {
        let metadata = MetadataBuilder::new()
            .comment("date", "1999")
            .comment("DATE", "2020")
            .build();

        // Uppercase sorts first; lowercase has no shortcut
        assert_eq!(
            synthesize(&metadata),
            vec!["--date", "2020", "--comment", "date=1999"]
        );
    }

    #[test]
    fn test_picture_spec_shape() {
        let metadata = MetadataBuilder::new().picture(3, "/tmp/cover.jpg", None).build();
        assert_eq!(
            synthesize(&metadata),
            vec!["--picture", "'3||||/tmp/cover.jpg'"]
        );
    }

    #[test]
    fn test_pictures_sorted_numerically_with_description() {
        let metadata = MetadataBuilder::new()
            .picture(10, "/art/band.png", Some("Band"))
            .picture(3, "/art/front.jpg", Some("Front cover"))
            .picture(4, "/art/back.jpg", None)
            .build();

        assert_eq!(
            synthesize(&metadata),
            vec![
                "--picture",
                "'3||Front cover||/art/front.jpg'",
                "--picture",
                "'4||||/art/back.jpg'",
                "--picture",
                "'10||Band||/art/band.png'",
            ]
        );
    }

    #[test]
    fn test_empty_values_are_still_emitted() {
        let metadata = MetadataBuilder::new()
            .common("title", "")
            .comment("DATE", "")
            .comment("NOTE", "")
            .build();

        assert_eq!(
            synthesize(&metadata),
            vec!["--title", "''", "--date", "''", "--comment", "NOTE="]
        );
    }

    #[test]
    fn test_branch_order_is_fixed() {
        let metadata = MetadataBuilder::new()
            .picture(3, "c.jpg", None)
            .comment("DATE", "2020")
            .common("title", "T")
            .build();

        assert_eq!(
            synthesize(&metadata),
            vec!["--title", "T", "--date", "2020", "--picture", "'3||||c.jpg'"]
        );
    }

    #[test]
    fn test_construction_order_does_not_change_output() {
        let forward = MetadataBuilder::new()
            .common("artist", "A")
            .common("title", "T")
            .comment("DATE", "2020")
            .comment("MOOD", "x")
            .comment("GENRE", "y")
            .picture(3, "front.jpg", None)
            .picture(4, "back.jpg", Some("Back"))
            .build();

        let reversed = MetadataBuilder::new()
            .picture(4, "back.jpg", Some("Back"))
            .picture(3, "front.jpg", None)
            .comment("GENRE", "y")
            .comment("MOOD", "x")
            .comment("DATE", "2020")
            .common("title", "T")
            .common("artist", "A")
            .build();

        let first = synthesize(&forward);
        assert_eq!(first, synthesize(&forward), "Repeated calls must agree");
        assert_eq!(first, synthesize(&reversed));
    }

    #[test]
    fn test_metacharacters_in_values_are_quoted() {
        let metadata = MetadataBuilder::new()
            .comment("LYRICS", "it's $5 | \"quoted\"")
            .build();

        assert_eq!(
            synthesize(&metadata),
            vec!["--comment", "'LYRICS=it'\"'\"'s $5 | \"quoted\"'"]
        );
    }
}

//! Build rules handed to the incremental build engine
//!
//! A rule is a plain value: declared inputs, a command, declared outputs. The
//! engine hashes the command to decide whether outputs are stale, so nothing
//! non-deterministic may ever end up in it.

use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::command::quote;

/// One unit of build work
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    pub inputs: Vec<String>,
    /// Program, global flags and shell-quoted arguments, in order
    pub command: Vec<String>,
    pub outputs: Vec<String>,
}

impl Rule {
    /// The command as a single shell line
    pub fn command_line(&self) -> String {
        self.command.join(" ")
    }

    /// Render as a tup rule: `: inputs |> command |> outputs`
    ///
    /// File names containing whitespace are double-quoted and `%` in the command
    /// is written as `%%`, since tup reads it as a flag marker. `command` itself
    /// is left as is.
    pub fn to_tup(&self) -> String {
        format!(
            ": {} |> {} |> {}",
            tup_file_list(&self.inputs),
            self.command_line().replace('%', "%%"),
            tup_file_list(&self.outputs)
        )
    }

    /// Short hash identifying this exact rule
    pub fn fingerprint(&self) -> String {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        format!("{:016x}", hasher.finish())
    }
}

/// Space-separated tup file list; names with whitespace are double-quoted
fn tup_file_list(names: &[String]) -> String {
    names
        .iter()
        .map(|name| {
            if name.chars().any(char::is_whitespace) {
                format!("\"{}\"", name)
            } else {
                name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Wraps synthesized arguments into a complete rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBuilder {
    program: String,
    /// Opaque build-environment flag token, passed through untouched
    flags_placeholder: String,
    /// Extension appended to the source basename, without the dot
    output_extension: String,
}

impl RuleBuilder {
    pub fn new(
        program: impl Into<String>,
        flags_placeholder: impl Into<String>,
        output_extension: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            flags_placeholder: flags_placeholder.into(),
            output_extension: output_extension.into(),
        }
    }

    /// Output path for a source basename
    pub fn output_name(&self, source_basename: &str) -> String {
        format!("{}.{}", source_basename, self.output_extension)
    }

    /// Assemble the rule: `<program> <flags> <arguments...> -- <input> <output>`
    pub fn build(&self, source_name: &str, source_basename: &str, arguments: Vec<String>) -> Rule {
        let output_name = self.output_name(source_basename);

        let mut command = Vec::with_capacity(arguments.len() + 5);
        command.push(self.program.clone());
        command.push(self.flags_placeholder.clone());
        command.extend(arguments);
        command.push("--".to_string());
        command.push(quote(source_name));
        command.push(quote(&output_name));

        Rule {
            inputs: vec![source_name.to_string()],
            command,
            outputs: vec![output_name],
        }
    }
}

/// Render rules as the body of a Tupfile
pub fn render_tupfile(rules: &[Rule]) -> String {
    let mut out = String::new();
    for rule in rules {
        out.push_str(&rule.to_tup());
        out.push('\n');
    }
    out
}

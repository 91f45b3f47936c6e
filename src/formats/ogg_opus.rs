//! Ogg Opus target, encoded with `opusenc`

use super::Format;
use crate::command::{CommandSynthesizer, EncoderVocabulary, ParameterMap};
use crate::metadata::Metadata;
use crate::rule::{Rule, RuleBuilder};
use crate::settings::EncoderSettings;

const SUPPORTED_EXTENSIONS: &[&str] = &["wave"];
const SUPPORTED_TRANSFORMATIONS: &[&str] = &[];
const OUTPUT_EXTENSION: &str = "opus";

/// opusenc flag vocabulary
///
/// opusenc has shortcut flags for a handful of common tags and for the DATE
/// comment. Every other comment goes through `--comment KEY=VALUE`.
pub fn opusenc_vocabulary() -> EncoderVocabulary {
    EncoderVocabulary {
        tag_parameters: ParameterMap::new([
            ("album", "--album"),
            ("artist", "--artist"),
            ("title", "--title"),
            ("track number", "--tracknumber"),
        ]),
        comment_parameters: ParameterMap::new([("DATE", "--date")]),
        comment_flag: "--comment".to_string(),
        picture_flag: "--picture".to_string(),
    }
}

/// Converts `.wave` sources to `.opus`
#[derive(Debug, Clone)]
pub struct OggOpus {
    vocabulary: EncoderVocabulary,
    rule_builder: RuleBuilder,
}

impl OggOpus {
    pub fn new(settings: &EncoderSettings) -> Self {
        Self {
            vocabulary: opusenc_vocabulary(),
            rule_builder: RuleBuilder::new(
                settings.program.as_str(),
                settings.flags_placeholder.as_str(),
                OUTPUT_EXTENSION,
            ),
        }
    }

    pub fn vocabulary(&self) -> &EncoderVocabulary {
        &self.vocabulary
    }
}

impl Default for OggOpus {
    fn default() -> Self {
        Self::new(&EncoderSettings::default())
    }
}

impl Format for OggOpus {
    fn name(&self) -> &'static str {
        "ogg-opus"
    }

    fn supported_extensions(&self) -> &[&'static str] {
        SUPPORTED_EXTENSIONS
    }

    fn supported_transformations(&self) -> &[&'static str] {
        SUPPORTED_TRANSFORMATIONS
    }

    fn process(
        &self,
        metadata: &Metadata,
        source_basename: &str,
        source_name: &str,
        transformations: &[String],
    ) -> Result<Rule, String> {
        self.check_transformations(transformations)?;

        let arguments = CommandSynthesizer::new(&self.vocabulary).synthesize(metadata.view());
        let rule = self.rule_builder.build(source_name, source_basename, arguments);

        log::debug!("{} -> {} [{}]", source_name, rule.outputs.join(" "), rule.fingerprint());
        Ok(rule)
    }
}

//! mustup-opus - Ogg Opus format plugin for the mustup build tool
//!
//! Turns a source file's extracted metadata into a deterministic `opusenc`
//! invocation wrapped in a tup build rule. Nothing here runs the encoder;
//! the build engine executes and caches the rules.

pub mod command;
pub mod discovery;
pub mod formats;
pub mod logging;
pub mod metadata;
pub mod rule;
pub mod settings;

mod test_fixtures;

pub use formats::{Format, FormatRegistry, OggOpus};
pub use metadata::{Metadata, MetadataView};
pub use rule::{render_tupfile, Rule, RuleBuilder};
pub use settings::EncoderSettings;

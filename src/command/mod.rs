//! Encoder command-line construction
//!
//! Maps metadata onto encoder flags and quotes every value so the resulting
//! tokens can be pasted into a shell command line unchanged.

mod mapping;
mod quote;
mod synthesizer;

pub use mapping::ParameterMap;
pub use quote::quote;
pub use synthesizer::{CommandSynthesizer, EncoderVocabulary};

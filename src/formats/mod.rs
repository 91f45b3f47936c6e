//! Format plugins and the registry that routes sources to them

mod ogg_opus;

pub use ogg_opus::{opusenc_vocabulary, OggOpus};

use std::path::Path;

use crate::metadata::Metadata;
use crate::rule::Rule;
use crate::settings::EncoderSettings;

/// A conversion target
///
/// Implementations are pure: `process` performs no I/O and keeps no state, so
/// one instance can serve any number of sources concurrently.
pub trait Format: Send + Sync {
    /// Short identifier used in logs and errors
    fn name(&self) -> &'static str;

    /// Source extensions this format claims, lowercase and without the dot
    fn supported_extensions(&self) -> &[&'static str];

    /// Transformation names this format can apply
    fn supported_transformations(&self) -> &[&'static str];

    /// Produce the build rule converting one source file
    fn process(
        &self,
        metadata: &Metadata,
        source_basename: &str,
        source_name: &str,
        transformations: &[String],
    ) -> Result<Rule, String>;

    /// Whether `extension` (with or without a leading dot) is claimed, case-insensitively
    fn claims_extension(&self, extension: &str) -> bool {
        let extension = extension.trim_start_matches('.').to_lowercase();
        self.supported_extensions().iter().any(|e| *e == extension)
    }

    /// Reject transformations this format does not support
    fn check_transformations(&self, transformations: &[String]) -> Result<(), String> {
        let supported = self.supported_transformations();
        let unsupported: Vec<&str> = transformations
            .iter()
            .map(String::as_str)
            .filter(|t| !supported.iter().any(|s| s == t))
            .collect();

        if unsupported.is_empty() {
            Ok(())
        } else {
            Err(format!(
                "Format {} does not support transformations: {}",
                self.name(),
                unsupported.join(", ")
            ))
        }
    }
}

/// Formats keyed by the source extensions they claim
pub struct FormatRegistry {
    formats: Vec<Box<dyn Format>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        Self { formats: Vec::new() }
    }

    /// Registry with every built-in format
    pub fn with_defaults(settings: &EncoderSettings) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(OggOpus::new(settings)));
        registry
    }

    /// Add a format; earlier registrations win when extensions overlap
    pub fn register(&mut self, format: Box<dyn Format>) {
        log::debug!(
            "Registered format {} for .{}",
            format.name(),
            format.supported_extensions().join(", .")
        );
        self.formats.push(format);
    }

    /// Format claiming `extension`, if any
    pub fn for_extension(&self, extension: &str) -> Option<&dyn Format> {
        self.formats
            .iter()
            .find(|f| f.claims_extension(extension))
            .map(|f| &**f)
    }

    /// Format claiming the extension of `path`, if any
    pub fn for_path(&self, path: &Path) -> Option<&dyn Format> {
        let extension = path.extension()?.to_str()?;
        self.for_extension(extension)
    }

    pub fn formats(&self) -> impl Iterator<Item = &dyn Format> {
        self.formats.iter().map(|f| &**f)
    }

    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults(&EncoderSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_routes_wave() {
        let registry = FormatRegistry::default();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.for_extension("wave").map(|f| f.name()), Some("ogg-opus"));
        assert_eq!(registry.for_extension(".wave").map(|f| f.name()), Some("ogg-opus"));
        assert_eq!(registry.for_extension("WAVE").map(|f| f.name()), Some("ogg-opus"));
    }

    #[test]
    fn test_unclaimed_extensions() {
        let registry = FormatRegistry::default();
        assert!(registry.for_extension("wav").is_none());
        assert!(registry.for_extension("flac").is_none());
        assert!(registry.for_extension("").is_none());
    }

    #[test]
    fn test_for_path() {
        let registry = FormatRegistry::default();
        assert!(registry.for_path(Path::new("music/song.wave")).is_some());
        assert!(registry.for_path(Path::new("music/song.json")).is_none());
        assert!(registry.for_path(Path::new("music/song")).is_none());
    }

    #[test]
    fn test_empty_registry() {
        let registry = FormatRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.for_extension("wave").is_none());
        assert_eq!(registry.formats().count(), 0);
    }

    #[test]
    fn test_check_transformations() {
        let format = OggOpus::default();
        assert!(format.check_transformations(&[]).is_ok());

        let err = format
            .check_transformations(&["crop".to_string(), "resize".to_string()])
            .unwrap_err();
        assert_eq!(err, "Format ogg-opus does not support transformations: crop, resize");
    }
}

//! Source metadata as produced by the tag extractor
//!
//! The structure is nested and every level is optional:
//!
//! ```json
//! {
//!   "tags": {
//!     "common": { "title": "A B", "track number": "3" },
//!     "Vorbis": { "DATE": "2020", "MOOD": "x" }
//!   },
//!   "pictures": {
//!     "APIC": { "3": { "path": "cover.jpg", "description": "Front" } }
//!   }
//! }
//! ```

mod view;

pub use view::MetadataView;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Picture-type code as used by ID3 APIC frames (3 = front cover)
pub type PictureType = u8;

/// Extracted metadata for one source file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pictures: Option<Pictures>,
}

/// Tag branches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tags {
    /// Well-known tags keyed by normalized name (album, artist, title, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common: Option<BTreeMap<String, String>>,

    /// Free-form Vorbis comments keyed by comment name
    #[serde(rename = "Vorbis", default, skip_serializing_if = "Option::is_none")]
    pub vorbis: Option<BTreeMap<String, String>>,
}

/// Picture branches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pictures {
    #[serde(rename = "APIC", default, skip_serializing_if = "Option::is_none")]
    pub apic: Option<BTreeMap<PictureType, Picture>>,
}

/// An embedded picture already extracted to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Metadata {
    /// Parse metadata from a JSON document
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse metadata: {}", e))
    }

    /// Load metadata from a JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read metadata file {}: {}", path.display(), e))?;

        serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse metadata file {}: {}", path.display(), e))
    }

    /// Load the sidecar metadata file if it exists, otherwise empty metadata
    pub fn load_optional(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            log::debug!("No metadata at {}, using empty metadata", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn view(&self) -> MetadataView<'_> {
        MetadataView::new(Some(self))
    }
}

impl Picture {
    /// Description, or the empty string when none was recorded
    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

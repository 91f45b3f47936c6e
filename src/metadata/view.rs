use std::collections::BTreeMap;

use super::{Metadata, Picture, PictureType};

/// Read-only access to the branches the encoder cares about
///
/// Each accessor walks the optional chain and returns `None` as soon as a
/// level is missing. A missing branch simply means there is nothing to emit.
#[derive(Debug, Clone, Copy)]
pub struct MetadataView<'a> {
    metadata: Option<&'a Metadata>,
}

impl<'a> MetadataView<'a> {
    pub fn new(metadata: Option<&'a Metadata>) -> Self {
        Self { metadata }
    }

    /// View over no metadata at all
    pub fn empty() -> Self {
        Self { metadata: None }
    }

    /// `tags.common`
    pub fn common_tags(&self) -> Option<&'a BTreeMap<String, String>> {
        self.metadata?.tags.as_ref()?.common.as_ref()
    }

    /// `tags.Vorbis`
    pub fn vorbis_comments(&self) -> Option<&'a BTreeMap<String, String>> {
        self.metadata?.tags.as_ref()?.vorbis.as_ref()
    }

    /// `pictures.APIC`
    pub fn pictures(&self) -> Option<&'a BTreeMap<PictureType, Picture>> {
        self.metadata?.pictures.as_ref()?.apic.as_ref()
    }
}

//! Test fixtures for command synthesis tests
//!
//! Builders for metadata documents, so tests can state only the fields they
//! care about and vary construction order freely.

#![cfg(test)]

use std::collections::BTreeMap;

use crate::metadata::{Metadata, Picture, PictureType, Pictures, Tags};

/// Incrementally assembles a `Metadata` value
///
/// Branches are only created when something is added to them, so an unused
/// branch stays absent rather than empty.
#[derive(Debug, Default)]
pub struct MetadataBuilder {
    common: Option<BTreeMap<String, String>>,
    vorbis: Option<BTreeMap<String, String>>,
    pictures: Option<BTreeMap<PictureType, Picture>>,
}

impl MetadataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn common(mut self, tag: &str, value: &str) -> Self {
        self.common
            .get_or_insert_with(BTreeMap::new)
            .insert(tag.to_string(), value.to_string());
        self
    }

    pub fn comment(mut self, key: &str, value: &str) -> Self {
        self.vorbis
            .get_or_insert_with(BTreeMap::new)
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn picture(
        mut self,
        picture_type: PictureType,
        path: &str,
        description: Option<&str>,
    ) -> Self {
        self.pictures.get_or_insert_with(BTreeMap::new).insert(
            picture_type,
            Picture {
                path: path.to_string(),
                description: description.map(str::to_string),
            },
        );
        self
    }

    pub fn build(self) -> Metadata {
        let tags = if self.common.is_some() || self.vorbis.is_some() {
            Some(Tags {
                common: self.common,
                vorbis: self.vorbis,
            })
        } else {
            None
        };

        Metadata {
            tags,
            pictures: self.pictures.map(|apic| Pictures { apic: Some(apic) }),
        }
    }
}

//! Digital object record.
//!
//! # Invariants
//! - `file_versions` keeps source order; empty `file_uri` values are kept here
//!   and filtered only when a normalized view is produced.

use super::{null_as_default, Record, RecordKind};
use serde::{Deserialize, Serialize};

/// Digitized surrogate with one or more file versions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigitalObject {
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub jsonmodel_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub digital_object_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub publish: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub file_versions: Vec<FileVersion>,
}

/// One stored rendition of a digital object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileVersion {
    #[serde(deserialize_with = "null_as_default")]
    pub file_uri: String,
    #[serde(deserialize_with = "null_as_default")]
    pub use_statement: String,
    #[serde(deserialize_with = "null_as_default")]
    pub publish: bool,
}

impl FileVersion {
    pub fn new(file_uri: impl Into<String>) -> Self {
        Self {
            file_uri: file_uri.into(),
            ..Self::default()
        }
    }
}

impl DigitalObject {
    pub fn new(uri: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            title: title.into(),
            jsonmodel_type: RecordKind::DigitalObject.as_str().to_string(),
            ..Self::default()
        }
    }
}

impl Record for DigitalObject {
    const KIND: RecordKind = RecordKind::DigitalObject;

    fn uri(&self) -> &str {
        &self.uri
    }

    fn title(&self) -> &str {
        &self.title
    }
}

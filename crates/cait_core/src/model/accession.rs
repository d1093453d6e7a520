//! Accession record.
//!
//! # Responsibility
//! - Decode the intake record and its embedded reference lists.
//!
//! # Invariants
//! - `extents`, `instances` and every reference list keep source order.
//! - Reference containers are typed ([`RecordRef`], [`Instance`]) and never
//!   re-interpreted after decoding.

use super::reference::{Instance, RecordRef};
use super::{null_as_default, Record, RecordKind};
use serde::{Deserialize, Serialize};

/// Archival intake record describing a body of received material.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Accession {
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub jsonmodel_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub condition_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub accession_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_by: String,
    #[serde(deserialize_with = "null_as_default")]
    pub create_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_modified_by: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user_mtime: String,
    #[serde(deserialize_with = "null_as_default")]
    pub extents: Vec<Extent>,
    #[serde(deserialize_with = "null_as_default")]
    pub instances: Vec<Instance>,
    #[serde(deserialize_with = "null_as_default")]
    pub subjects: Vec<RecordRef>,
    #[serde(deserialize_with = "null_as_default")]
    pub related_resources: Vec<RecordRef>,
    #[serde(deserialize_with = "null_as_default")]
    pub related_accessions: Vec<RecordRef>,
    #[serde(deserialize_with = "null_as_default")]
    pub linked_agents: Vec<RecordRef>,
}

/// Physical extent statement of an accession.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Extent {
    #[serde(deserialize_with = "null_as_default")]
    pub number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub extent_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub physical_details: String,
}

impl Extent {
    pub fn new(physical_details: impl Into<String>) -> Self {
        Self {
            physical_details: physical_details.into(),
            ..Self::default()
        }
    }
}

impl Accession {
    pub fn new(uri: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            title: title.into(),
            jsonmodel_type: RecordKind::Accession.as_str().to_string(),
            ..Self::default()
        }
    }
}

impl Record for Accession {
    const KIND: RecordKind = RecordKind::Accession;

    fn uri(&self) -> &str {
        &self.uri
    }

    fn title(&self) -> &str {
        &self.title
    }
}

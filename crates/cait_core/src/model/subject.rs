//! Subject record.

use super::{null_as_default, Record, RecordKind};
use serde::{Deserialize, Serialize};

/// Controlled-vocabulary topical term referenced by accessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subject {
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub jsonmodel_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(deserialize_with = "null_as_default")]
    pub publish: bool,
}

impl Subject {
    pub fn new(uri: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            title: title.into(),
            jsonmodel_type: RecordKind::Subject.as_str().to_string(),
            ..Self::default()
        }
    }
}

impl Record for Subject {
    const KIND: RecordKind = RecordKind::Subject;

    fn uri(&self) -> &str {
        &self.uri
    }

    fn title(&self) -> &str {
        &self.title
    }
}

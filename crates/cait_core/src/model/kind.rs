//! Record kind discriminator and header projection.

use super::null_as_default;
use serde::{Deserialize, Serialize};

/// Known values of the `jsonmodel_type` discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Accession,
    Subject,
    DigitalObject,
}

impl RecordKind {
    /// Returns the wire value used in `jsonmodel_type`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accession => "accession",
            Self::Subject => "subject",
            Self::DigitalObject => "digital_object",
        }
    }

    /// Parses an exact `jsonmodel_type` value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "accession" => Some(Self::Accession),
            "subject" => Some(Self::Subject),
            "digital_object" => Some(Self::DigitalObject),
            _ => None,
        }
    }
}

/// Minimal projection of any record, read while walking a record tree.
///
/// Extra fields in the document are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordHeader {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
    #[serde(deserialize_with = "null_as_default")]
    pub jsonmodel_type: String,
}

impl RecordHeader {
    /// Returns the decoded kind, or `None` for absent or unknown values.
    pub fn kind(&self) -> Option<RecordKind> {
        RecordKind::parse(&self.jsonmodel_type)
    }

    /// Returns whether this header describes a record of `kind`.
    pub fn is_kind(&self, kind: RecordKind) -> bool {
        self.kind() == Some(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::{RecordHeader, RecordKind};

    #[test]
    fn kind_parse_is_exact() {
        assert_eq!(RecordKind::parse("accession"), Some(RecordKind::Accession));
        assert_eq!(RecordKind::parse("Accession"), None);
        assert_eq!(RecordKind::parse(" accession"), None);
        assert_eq!(
            RecordKind::parse(RecordKind::DigitalObject.as_str()),
            Some(RecordKind::DigitalObject)
        );
    }

    #[test]
    fn header_tolerates_missing_and_null_fields() {
        let header: RecordHeader =
            serde_json::from_str(r#"{"uri": "/a/1", "title": null, "extents": []}"#).unwrap();
        assert_eq!(header.uri, "/a/1");
        assert_eq!(header.title, "");
        assert_eq!(header.kind(), None);
        assert!(!header.is_kind(RecordKind::Accession));
    }
}

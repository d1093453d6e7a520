//! Archival record model decoded from exported JSON documents.
//!
//! # Responsibility
//! - Define the record shapes read from disk (subjects, digital objects,
//!   accessions) and the minimal header projection used for indexing.
//! - Decode loosely-typed reference containers once, at parse time.
//!
//! # Invariants
//! - Every record is identified by its `uri` string.
//! - Absent or `null` fields decode to their empty value; a present field of
//!   the wrong JSON type is a parse failure.

pub mod accession;
pub mod digital_object;
pub mod kind;
pub mod reference;
pub mod subject;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

pub use kind::{RecordHeader, RecordKind};

/// Common accessors for records that can be loaded from a record directory.
pub trait Record: DeserializeOwned {
    /// Record kind expected in `jsonmodel_type`.
    const KIND: RecordKind;

    fn uri(&self) -> &str;
    fn title(&self) -> &str;
}

/// Decodes one record document, which must be a JSON object.
///
/// Derived struct decoding also accepts sequences by field position; a
/// top-level array or scalar is rejected here instead.
pub fn from_json_object<T: DeserializeOwned>(src: &[u8]) -> serde_json::Result<T> {
    let fields = serde_json::from_slice::<Map<String, Value>>(src)?;
    serde_json::from_value(Value::Object(fields))
}

/// Decodes `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::{from_json_object, RecordHeader};

    #[test]
    fn record_documents_must_be_objects() {
        let header: RecordHeader =
            from_json_object(br#"{"title": "T", "uri": "/x", "jsonmodel_type": "accession"}"#)
                .unwrap();
        assert_eq!(header.uri, "/x");

        assert!(from_json_object::<RecordHeader>(br#"["T", "/x", "accession"]"#).is_err());
        assert!(from_json_object::<RecordHeader>(b"[]").is_err());
        assert!(from_json_object::<RecordHeader>(b"null").is_err());
    }
}

//! Reference containers embedded in records.
//!
//! Source documents carry references as loosely-typed objects
//! (`{"ref": "/subjects/1", ...}`). They are decoded once into typed structs;
//! members that do not have the expected shape are kept in `extra` and read as
//! "no reference" instead of failing the enclosing record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const REF_KEY: &str = "ref";
const DIGITAL_OBJECT_KEY: &str = "digital_object";

/// A `{ "ref": <uri>, ... }` container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct RecordRef {
    /// Referenced URI; `None` when `ref` is absent or not a string.
    pub uri: Option<String>,
    /// Remaining members of the container, kept verbatim.
    pub extra: Map<String, Value>,
}

impl RecordRef {
    /// Creates a container pointing at `uri`.
    pub fn to(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            extra: Map::new(),
        }
    }

    /// Returns the referenced URI, if any.
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }
}

impl From<Map<String, Value>> for RecordRef {
    fn from(mut map: Map<String, Value>) -> Self {
        let uri = match map.remove(REF_KEY) {
            Some(Value::String(uri)) => Some(uri),
            Some(other) => {
                map.insert(REF_KEY.to_string(), other);
                None
            }
            None => None,
        };
        Self { uri, extra: map }
    }
}

impl From<RecordRef> for Map<String, Value> {
    fn from(value: RecordRef) -> Self {
        let mut map = value.extra;
        if let Some(uri) = value.uri {
            map.insert(REF_KEY.to_string(), Value::String(uri));
        }
        map
    }
}

/// One entry of an accession's `instances` list.
///
/// An instance may or may not point at a digital object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Instance {
    /// Present when the instance carries a `digital_object` object.
    pub digital_object: Option<RecordRef>,
    pub extra: Map<String, Value>,
}

impl Instance {
    /// Creates an instance that references the digital object at `uri`.
    pub fn digital_object(uri: impl Into<String>) -> Self {
        Self {
            digital_object: Some(RecordRef::to(uri)),
            extra: Map::new(),
        }
    }

    /// Returns the referenced digital-object URI, if any.
    pub fn digital_object_uri(&self) -> Option<&str> {
        self.digital_object.as_ref().and_then(RecordRef::uri)
    }
}

impl From<Map<String, Value>> for Instance {
    fn from(mut map: Map<String, Value>) -> Self {
        let digital_object = match map.remove(DIGITAL_OBJECT_KEY) {
            Some(Value::Object(inner)) => Some(RecordRef::from(inner)),
            Some(other) => {
                map.insert(DIGITAL_OBJECT_KEY.to_string(), other);
                None
            }
            None => None,
        };
        Self {
            digital_object,
            extra: map,
        }
    }
}

impl From<Instance> for Map<String, Value> {
    fn from(value: Instance) -> Self {
        let mut map = value.extra;
        if let Some(reference) = value.digital_object {
            map.insert(
                DIGITAL_OBJECT_KEY.to_string(),
                Value::Object(reference.into()),
            );
        }
        map
    }
}

//! Flat-file record store.
//!
//! # Responsibility
//! - Read record directories (one JSON document per file) into memory.
//! - Report failures with the offending path attached.
//!
//! # Invariants
//! - Loads are all-or-nothing: any unreadable or malformed file fails the call.
//! - Nothing is cached; every call re-reads the directory.

mod loader;

use crate::model::digital_object::DigitalObject;
use crate::model::subject::Subject;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub use loader::{
    load_accessions, load_digital_objects, load_digital_objects_by_uri, load_records,
    load_records_by_uri, load_subjects, load_subjects_by_uri,
};

/// Subjects keyed by URI.
pub type SubjectMap = HashMap<String, Subject>;
/// Digital objects keyed by URI.
pub type DigitalObjectMap = HashMap<String, DigitalObject>;

pub type StoreResult<T> = Result<T, StoreError>;

/// Record directory load failure.
#[derive(Debug)]
pub enum StoreError {
    /// Directory or file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// File content is not valid JSON for the expected record shape.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Returns the directory or file the failure refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "can't read {}: {source}", path.display()),
            Self::Parse { path, source } => {
                write!(f, "can't parse {}: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

//! Browsable title index over accession records.
//!
//! # Responsibility
//! - Walk a record tree and keep accession headers.
//! - Order them by title (URI breaks ties) and link neighbours.
//!
//! # Invariants
//! - Per-file read/parse failures never abort the walk.
//! - A walk that yields zero accessions fails with [`IndexError::Empty`].
//! - Building performs no logging of its own; progress goes to an
//!   [`IndexObserver`].

mod observer;
mod title_index;

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub use observer::{IndexEvent, IndexObserver, LogObserver, NoopObserver, SkipReason};
pub use title_index::{
    build_accession_title_index, build_accession_title_index_with, sort_key, KEY_SEPARATOR,
};

pub type IndexResult<T> = Result<T, IndexError>;

/// Title index build failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// No accession record was found under `root`.
    Empty { root: PathBuf },
}

impl Display for IndexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty { root } => {
                write!(f, "no accession titles found under {}", root.display())
            }
        }
    }
}

impl Error for IndexError {}

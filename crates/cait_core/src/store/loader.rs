//! Directory loaders for subjects, digital objects and accessions.
//!
//! Every immediate entry of the directory is treated as one record document;
//! entries are processed in file-name order so sequence results are stable.

use super::{DigitalObjectMap, StoreError, StoreResult, SubjectMap};
use crate::model::accession::Accession;
use crate::model::digital_object::DigitalObject;
use crate::model::subject::Subject;
use crate::model::{from_json_object, Record};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Loads every subject document under `dir` in file-name order.
pub fn load_subjects(dir: impl AsRef<Path>) -> StoreResult<Vec<Subject>> {
    load_records(dir)
}

/// Loads subjects under `dir` keyed by URI.
pub fn load_subjects_by_uri(dir: impl AsRef<Path>) -> StoreResult<SubjectMap> {
    load_records_by_uri(dir)
}

/// Loads every digital-object document under `dir` in file-name order.
pub fn load_digital_objects(dir: impl AsRef<Path>) -> StoreResult<Vec<DigitalObject>> {
    load_records(dir)
}

/// Loads digital objects under `dir` keyed by URI.
pub fn load_digital_objects_by_uri(dir: impl AsRef<Path>) -> StoreResult<DigitalObjectMap> {
    load_records_by_uri(dir)
}

/// Loads every accession document under `dir` in file-name order.
pub fn load_accessions(dir: impl AsRef<Path>) -> StoreResult<Vec<Accession>> {
    load_records(dir)
}

/// Loads all records of type `T` found directly under `dir`.
///
/// # Errors
/// - [`StoreError::Io`] naming `dir` when the directory cannot be listed.
/// - [`StoreError::Io`] naming the file when one entry cannot be read.
/// - [`StoreError::Parse`] naming the file when one entry is not valid JSON
///   for `T`.
pub fn load_records<T: Record>(dir: impl AsRef<Path>) -> StoreResult<Vec<T>> {
    let dir = dir.as_ref();
    let started_at = Instant::now();

    let records = list_entries(dir)?
        .iter()
        .map(|path| read_record::<T>(path))
        .collect::<StoreResult<Vec<T>>>()?;

    info!(
        "event=store_load module=store status=ok kind={} dir={} count={} duration_ms={}",
        T::KIND.as_str(),
        dir.display(),
        records.len(),
        started_at.elapsed().as_millis()
    );
    Ok(records)
}

/// Loads all records of type `T` found directly under `dir`, keyed by URI.
///
/// When two files share a URI, the later file in name order wins.
pub fn load_records_by_uri<T: Record>(dir: impl AsRef<Path>) -> StoreResult<HashMap<String, T>> {
    let dir = dir.as_ref();
    let mut by_uri = HashMap::new();

    // Why: records arrive in file-name order, so plain insert lets the later
    // file replace the earlier one deterministically.
    for record in load_records::<T>(dir)? {
        let uri = record.uri().to_string();
        if by_uri.insert(uri.clone(), record).is_some() {
            warn!(
                "event=store_duplicate_uri module=store status=replaced kind={} dir={} uri={}",
                T::KIND.as_str(),
                dir.display(),
                uri
            );
        }
    }

    Ok(by_uri)
}

fn list_entries(dir: &Path) -> StoreResult<Vec<PathBuf>> {
    let io_error = |source| StoreError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        entries.push(entry.map_err(io_error)?.path());
    }
    // Why: read_dir order is platform dependent; loaders promise file-name order
    // and duplicate URIs resolve to the later name.
    entries.sort();
    Ok(entries)
}

fn read_record<T: Record>(path: &Path) -> StoreResult<T> {
    let src = fs::read(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let record = from_json_object::<T>(&src).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "event=store_read module=store status=ok kind={} path={} uri={} title={}",
        T::KIND.as_str(),
        path.display(),
        record.uri(),
        record.title()
    );
    Ok(record)
}

//! Accession title index construction.
//!
//! Built in two phases: headers are collected and sorted into plain entries,
//! then every [`NavElementView`] is produced fully linked from its sorted
//! neighbours.

use super::observer::{IndexEvent, IndexObserver, LogObserver, SkipReason};
use super::{IndexError, IndexResult};
use crate::model::{from_json_object, RecordHeader, RecordKind};
use crate::view::nav::{NavElementView, NavView, TitleIndex};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Joins title and URI in the sort key.
pub const KEY_SEPARATOR: &str = "|";

const JSON_SUFFIX: &str = ".json";

/// Sortable key of one record: title, separator, URI.
///
/// URIs are unique, so keys are unique and order ties on title by URI.
pub fn sort_key(title: &str, uri: &str) -> String {
    format!("{title}{KEY_SEPARATOR}{uri}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct IndexEntry {
    key: String,
    label: String,
    uri: String,
}

impl IndexEntry {
    fn from_header(header: RecordHeader) -> Self {
        Self {
            key: sort_key(&header.title, &header.uri),
            label: header.title,
            uri: header.uri,
        }
    }
}

/// Builds the accession title index for `root`, reporting progress to the
/// `log` facade.
pub fn build_accession_title_index(root: impl AsRef<Path>) -> IndexResult<TitleIndex> {
    build_accession_title_index_with(root, &mut LogObserver)
}

/// Builds the accession title index for `root`.
///
/// Every `*.json` file under `root` is parsed as a [`RecordHeader`]; only
/// records whose `jsonmodel_type` is exactly `accession` are indexed.
///
/// # Errors
/// - [`IndexError::Empty`] when no accession is found, including when `root`
///   does not exist or holds no JSON files.
pub fn build_accession_title_index_with(
    root: impl AsRef<Path>,
    observer: &mut dyn IndexObserver,
) -> IndexResult<TitleIndex> {
    let root = root.as_ref();
    observer.on_event(&IndexEvent::Started {
        root: root.to_path_buf(),
    });

    let mut entries = collect_entries(root, observer);
    if entries.is_empty() {
        return Err(IndexError::Empty {
            root: root.to_path_buf(),
        });
    }

    entries.sort_by(|left, right| left.key.cmp(&right.key));
    observer.on_event(&IndexEvent::Sorted {
        count: entries.len(),
    });

    let index = TitleIndex::from_sorted(link_entries(&entries));
    observer.on_event(&IndexEvent::Linked { count: index.len() });
    Ok(index)
}

fn collect_entries(root: &Path, observer: &mut dyn IndexObserver) -> Vec<IndexEntry> {
    let mut by_uri: HashMap<String, IndexEntry> = HashMap::new();

    for item in WalkDir::new(root).sort_by_file_name() {
        let entry = match item {
            Ok(entry) => entry,
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                observer.on_event(&IndexEvent::Skipped {
                    path,
                    reason: SkipReason::Walk(err.to_string()),
                });
                continue;
            }
        };

        if entry.file_type().is_dir() || !entry.file_name().to_string_lossy().ends_with(JSON_SUFFIX)
        {
            continue;
        }

        let path = entry.into_path();
        let Some(header) = read_header(&path, observer) else {
            continue;
        };
        if !header.is_kind(RecordKind::Accession) {
            observer.on_event(&IndexEvent::Skipped {
                path,
                reason: SkipReason::Kind(header.jsonmodel_type),
            });
            continue;
        }

        // Why: the walk is sorted by file name, so a repeated URI resolves to the
        // later file and each URI keeps exactly one nav element.
        let uri = header.uri.clone();
        let replaced = by_uri
            .insert(uri.clone(), IndexEntry::from_header(header))
            .is_some();
        let event = if replaced {
            IndexEvent::Replaced { path, uri }
        } else {
            IndexEvent::Recorded { path, uri }
        };
        observer.on_event(&event);
    }

    by_uri.into_values().collect()
}

fn read_header(path: &Path, observer: &mut dyn IndexObserver) -> Option<RecordHeader> {
    let src = match fs::read(path) {
        Ok(src) => src,
        Err(err) => {
            observer.on_event(&IndexEvent::Skipped {
                path: path.to_path_buf(),
                reason: SkipReason::Read(err.to_string()),
            });
            return None;
        }
    };

    match from_json_object::<RecordHeader>(&src) {
        Ok(header) => Some(header),
        Err(err) => {
            observer.on_event(&IndexEvent::Skipped {
                path: path.to_path_buf(),
                reason: SkipReason::Parse(err.to_string()),
            });
            None
        }
    }
}

fn link_entries(sorted: &[IndexEntry]) -> NavView {
    sorted
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            let prev = position.checked_sub(1).and_then(|at| sorted.get(at));
            let next = sorted.get(position + 1);
            NavElementView {
                this_label: entry.label.clone(),
                this_uri: entry.uri.clone(),
                prev_uri: prev.map(|p| p.uri.clone()).unwrap_or_default(),
                prev_label: prev.map(|p| p.label.clone()).unwrap_or_default(),
                next_uri: next.map(|n| n.uri.clone()).unwrap_or_default(),
                next_label: next.map(|n| n.label.clone()).unwrap_or_default(),
                weight: position,
            }
        })
        .collect()
}

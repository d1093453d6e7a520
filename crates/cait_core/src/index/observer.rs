//! Progress events emitted while building a title index.

use log::{debug, info, warn};
use std::path::PathBuf;

/// Why a walked path did not contribute an index entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Directory entry could not be visited.
    Walk(String),
    /// File could not be read.
    Read(String),
    /// File is not a JSON object with the header fields.
    Parse(String),
    /// Record is not an accession; carries the `jsonmodel_type` value.
    Kind(String),
}

/// One step of a title index build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexEvent {
    Started { root: PathBuf },
    Recorded { path: PathBuf, uri: String },
    Skipped { path: PathBuf, reason: SkipReason },
    /// A later file carried an already recorded URI and replaced it.
    Replaced { path: PathBuf, uri: String },
    Sorted { count: usize },
    Linked { count: usize },
}

/// Receiver of index build events.
///
/// Closures taking `&IndexEvent` implement this trait.
pub trait IndexObserver {
    fn on_event(&mut self, event: &IndexEvent);
}

impl<F> IndexObserver for F
where
    F: FnMut(&IndexEvent),
{
    fn on_event(&mut self, event: &IndexEvent) {
        self(event)
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl IndexObserver for NoopObserver {
    fn on_event(&mut self, _event: &IndexEvent) {}
}

/// Forwards events to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl IndexObserver for LogObserver {
    fn on_event(&mut self, event: &IndexEvent) {
        match event {
            IndexEvent::Started { root } => info!(
                "event=title_index module=index status=start root={}",
                root.display()
            ),
            IndexEvent::Recorded { path, uri } => debug!(
                "event=title_index_record module=index status=ok path={} uri={}",
                path.display(),
                uri
            ),
            IndexEvent::Skipped {
                path,
                reason: SkipReason::Kind(kind),
            } => debug!(
                "event=title_index_record module=index status=ignored path={} kind={}",
                path.display(),
                kind
            ),
            IndexEvent::Skipped { path, reason } => {
                let (error_code, error) = match reason {
                    SkipReason::Walk(message) => ("walk_failed", message),
                    SkipReason::Read(message) => ("read_failed", message),
                    SkipReason::Parse(message) => ("parse_failed", message),
                    SkipReason::Kind(message) => ("unexpected_kind", message),
                };
                warn!(
                    "event=title_index_record module=index status=skipped path={} error_code={} error={}",
                    path.display(),
                    error_code,
                    error
                );
            }
            IndexEvent::Replaced { path, uri } => warn!(
                "event=title_index_record module=index status=replaced path={} uri={}",
                path.display(),
                uri
            ),
            IndexEvent::Sorted { count } => {
                info!("event=title_index_sort module=index status=ok count={count}")
            }
            IndexEvent::Linked { count } => {
                info!("event=title_index module=index status=ok count={count}")
            }
        }
    }
}

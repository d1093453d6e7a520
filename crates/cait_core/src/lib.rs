//! Core domain logic for cait.
//! Loads archival records from flat JSON exports, resolves accession
//! references into display views and builds the browsable title index.

pub mod index;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod view;

pub use index::{
    build_accession_title_index, build_accession_title_index_with, IndexError, IndexEvent,
    IndexObserver, IndexResult, LogObserver, NoopObserver, SkipReason,
};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LogTarget};
pub use model::accession::{Accession, Extent};
pub use model::digital_object::{DigitalObject, FileVersion};
pub use model::reference::{Instance, RecordRef};
pub use model::subject::Subject;
pub use model::{from_json_object, Record, RecordHeader, RecordKind};
pub use service::view_service::AccessionViewService;
pub use store::{
    load_accessions, load_digital_objects, load_digital_objects_by_uri, load_subjects,
    load_subjects_by_uri, DigitalObjectMap, StoreError, StoreResult, SubjectMap,
};
pub use view::{
    normalize_accession, render_nav, render_title_index, NavElementView, NavView,
    NormalizedAccessionView, NormalizedDigitalObjectView, TitleIndex,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

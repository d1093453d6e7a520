//! Accession view use-case service.
//!
//! # Responsibility
//! - Load subject and digital-object lookup maps once.
//! - Normalize single accessions or whole accession directories against them.
//!
//! # Invariants
//! - Lookup maps are never mutated after construction.
//! - Directory loads keep the store's all-or-nothing error policy.

use crate::model::accession::Accession;
use crate::store::{
    load_accessions, load_digital_objects_by_uri, load_subjects_by_uri, DigitalObjectMap,
    StoreResult, SubjectMap,
};
use crate::view::accession::{normalize_accession, NormalizedAccessionView};
use log::info;
use std::path::Path;

/// Normalizes accessions against preloaded subjects and digital objects.
#[derive(Debug, Clone, Default)]
pub struct AccessionViewService {
    subjects: SubjectMap,
    digital_objects: DigitalObjectMap,
}

impl AccessionViewService {
    /// Creates a service over already-loaded lookup maps.
    pub fn new(subjects: SubjectMap, digital_objects: DigitalObjectMap) -> Self {
        Self {
            subjects,
            digital_objects,
        }
    }

    /// Loads both lookup maps from their record directories.
    ///
    /// # Errors
    /// Returns the first store failure of either directory.
    pub fn from_dirs(
        subjects_dir: impl AsRef<Path>,
        digital_objects_dir: impl AsRef<Path>,
    ) -> StoreResult<Self> {
        let subjects = load_subjects_by_uri(subjects_dir)?;
        let digital_objects = load_digital_objects_by_uri(digital_objects_dir)?;
        Ok(Self::new(subjects, digital_objects))
    }

    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    pub fn digital_object_count(&self) -> usize {
        self.digital_objects.len()
    }

    /// Builds the normalized view of one accession.
    pub fn normalize(&self, accession: &Accession) -> NormalizedAccessionView {
        normalize_accession(accession, &self.subjects, &self.digital_objects)
    }

    /// Loads every accession under `accessions_dir` and normalizes it.
    ///
    /// Views are returned in accession file-name order.
    pub fn normalize_dir(
        &self,
        accessions_dir: impl AsRef<Path>,
    ) -> StoreResult<Vec<NormalizedAccessionView>> {
        let accessions_dir = accessions_dir.as_ref();
        let views = load_accessions(accessions_dir)?
            .iter()
            .map(|accession| self.normalize(accession))
            .collect::<Vec<_>>();
        info!(
            "event=normalize_dir module=service status=ok dir={} count={}",
            accessions_dir.display(),
            views.len()
        );
        Ok(views)
    }
}

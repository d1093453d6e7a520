//! Normalized accession and digital-object views.
//!
//! # Invariants
//! - Reference resolution is a best-effort join: references missing from the
//!   lookup maps are dropped from the view, never reported as errors.
//! - Resolved entries keep the order of the source lists.

use crate::model::accession::Accession;
use crate::model::digital_object::DigitalObject;
use crate::model::reference::RecordRef;
use crate::store::{DigitalObjectMap, SubjectMap};
use log::debug;
use serde::{Deserialize, Serialize};

/// Digital object flattened for templating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedDigitalObjectView {
    pub uri: String,
    pub title: String,
    pub publish: bool,
    /// Non-empty file-version URIs in source order.
    #[serde(default)]
    pub file_uris: Vec<String>,
}

/// Accession with subject and digital-object references resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizedAccessionView {
    pub uri: String,
    pub title: String,
    pub content_description: String,
    pub condition_description: String,
    /// Titles of resolved subjects.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subjects: Vec<String>,
    /// Physical-details statements of each extent.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extents: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related_resources: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related_accessions: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub digital_objects: Vec<NormalizedDigitalObjectView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub linked_agents: Vec<String>,
    pub accession_date: String,
    pub created_by: String,
    pub created: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_modified_by: String,
    pub last_modified: String,
}

impl DigitalObject {
    /// Projects this digital object into its display view.
    pub fn normalize_view(&self) -> NormalizedDigitalObjectView {
        NormalizedDigitalObjectView {
            uri: self.uri.clone(),
            title: self.title.clone(),
            publish: self.publish,
            file_uris: self
                .file_versions
                .iter()
                .filter(|version| !version.file_uri.is_empty())
                .map(|version| version.file_uri.clone())
                .collect(),
        }
    }
}

impl Accession {
    /// Resolves this accession against the lookup maps.
    ///
    /// See [`normalize_accession`].
    pub fn normalize_view(
        &self,
        subjects: &SubjectMap,
        digital_objects: &DigitalObjectMap,
    ) -> NormalizedAccessionView {
        normalize_accession(self, subjects, digital_objects)
    }
}

/// Builds the flattened view of `accession`.
///
/// Scalar fields are copied verbatim. Instance and subject references that do
/// not resolve in the supplied maps are skipped.
pub fn normalize_accession(
    accession: &Accession,
    subjects: &SubjectMap,
    digital_objects: &DigitalObjectMap,
) -> NormalizedAccessionView {
    let resolved_objects = accession
        .instances
        .iter()
        .filter_map(|instance| instance.digital_object_uri())
        .filter_map(|uri| {
            let found = digital_objects.get(uri);
            if found.is_none() {
                log_unresolved(&accession.uri, "digital_object", uri);
            }
            found
        })
        .map(DigitalObject::normalize_view)
        .collect();

    let subject_titles = accession
        .subjects
        .iter()
        .filter_map(RecordRef::uri)
        .filter_map(|uri| {
            let found = subjects.get(uri);
            if found.is_none() {
                log_unresolved(&accession.uri, "subject", uri);
            }
            found
        })
        .map(|subject| subject.title.clone())
        .collect();

    NormalizedAccessionView {
        uri: accession.uri.clone(),
        title: accession.title.clone(),
        content_description: accession.content_description.clone(),
        condition_description: accession.condition_description.clone(),
        subjects: subject_titles,
        extents: accession
            .extents
            .iter()
            .map(|extent| extent.physical_details.clone())
            .collect(),
        related_resources: ref_uris(&accession.related_resources),
        related_accessions: ref_uris(&accession.related_accessions),
        digital_objects: resolved_objects,
        linked_agents: ref_uris(&accession.linked_agents),
        accession_date: accession.accession_date.clone(),
        created_by: accession.created_by.clone(),
        created: accession.create_time.clone(),
        last_modified_by: accession.last_modified_by.clone(),
        last_modified: accession.user_mtime.clone(),
    }
}

fn ref_uris(refs: &[RecordRef]) -> Vec<String> {
    refs.iter()
        .filter_map(RecordRef::uri)
        .map(str::to_string)
        .collect()
}

fn log_unresolved(accession_uri: &str, kind: &str, uri: &str) {
    debug!(
        "event=normalize_unresolved module=view status=skipped accession={} kind={} ref={}",
        accession_uri, kind, uri
    );
}

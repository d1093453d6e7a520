//! Display-ready projections of records.
//!
//! # Responsibility
//! - Flatten accession references into self-contained views.
//! - Hold navigation elements of the browsable title index and render them.
//!
//! # Invariants
//! - Views own copies of scalar data and never point back into the store.
//! - Views are fully built on construction and not mutated afterwards.

pub mod accession;
pub mod nav;
pub mod render;

pub use accession::{normalize_accession, NormalizedAccessionView, NormalizedDigitalObjectView};
pub use nav::{NavElementView, NavView, TitleIndex};
pub use render::{render_nav, render_title_index};

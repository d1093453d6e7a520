//! Core use-case services.
//!
//! # Responsibility
//! - Combine store loads and view normalization into caller-level APIs.
//! - Keep CLI and presentation layers unaware of directory loading details.

pub mod view_service;

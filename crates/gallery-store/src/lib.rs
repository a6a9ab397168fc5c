//! Gallery Store
//!
//! Validates raw fixture records and serves them from immutable in-memory
//! stores.
//!
//! # Overview
//!
//! - **SchemaValidator**: raw JSON to typed [`Project`]/[`Transcript`]
//! - **ProjectStore** / **TranscriptStore**: the query services
//! - **FixtureLoader**: reads `<slug>.json` files from disk
//! - **audit**: cross-store consistency report
//!
//! # Example
//!
//! ```rust
//! use gallery_store::{validate_project, ValidationErrorKind};
//! use serde_json::json;
//!
//! let err = validate_project(&json!({ "title": "No slug" })).unwrap_err();
//! assert_eq!(err.kind(), ValidationErrorKind::MissingField);
//! assert_eq!(err.field(), "slug");
//! ```
//!
//! [`Project`]: gallery_contracts::Project
//! [`Transcript`]: gallery_contracts::Transcript

pub mod error;
pub mod fixtures;
pub mod integrity;
pub mod project_store;
pub mod transcript_store;
pub mod validation;

// Re-exports
pub use error::{Result, StoreError};
pub use fixtures::{Fixture, FixtureLoader};
pub use integrity::{audit, IntegrityIssue};
pub use project_store::ProjectStore;
pub use transcript_store::TranscriptStore;
pub use validation::{
    validate_project, validate_transcript, SchemaValidator, ValidationError, ValidationErrorKind,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for loading and querying the catalog
    pub use crate::{
        FixtureLoader, ProjectStore, SchemaValidator, StoreError, TranscriptStore,
        ValidationError,
    };
    pub use gallery_contracts::prelude::*;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

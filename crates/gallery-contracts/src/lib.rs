//! Gallery Contracts
//!
//! Domain types shared by every gallery crate.
//!
//! # Overview
//!
//! - **Project**: a portfolio item with classification, metadata and content
//! - **Transcript** / **Message**: the human/AI conversation behind a project
//! - **Wing** / **WingRegistry**: the five categories and their display metadata
//! - **ProjectService** / **TranscriptService**: async query seams
//!
//! # Example
//!
//! ```rust
//! use gallery_contracts::{Wing, WingRegistry};
//!
//! let registry = WingRegistry::builtin();
//! assert_eq!(registry.config(Wing::Music).name, "Music");
//! assert!(registry.get("sculpture").is_err());
//! ```

#![warn(missing_docs)]

pub mod project;
pub mod service;
pub mod transcript;
pub mod wing;

// Re-exports
pub use project::{AiSource, ParseEnumError, ProcessTag, Project};
pub use service::{ProjectService, TranscriptService};
pub use transcript::{Message, Speaker, Transcript};
pub use wing::{UnknownWing, Wing, WingConfig, WingRegistry};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with gallery data
    pub use crate::{
        AiSource, Message, ProcessTag, Project, ProjectService, Speaker, Transcript,
        TranscriptService, Wing, WingConfig, WingRegistry,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

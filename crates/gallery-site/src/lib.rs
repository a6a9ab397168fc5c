//! Gallery Site
//!
//! Configuration, logging and page loads for the portfolio gallery.
//!
//! # Example
//!
//! ```rust,no_run
//! use gallery_site::{Gallery, SiteConfig};
//!
//! # async fn run() -> gallery_site::Result<()> {
//! let gallery = Gallery::load(&SiteConfig::default()).await?;
//! let page = gallery.wing_page("music").await;
//! assert!(page.is_ok());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod gallery;
pub mod pages;
pub mod telemetry;

// Re-exports
pub use config::{LogConfig, LogFormat, SiteConfig};
pub use error::{PageError, Result, SiteError};
pub use format::{date_label, format_date};
pub use gallery::Gallery;
pub use pages::{ProjectPage, TranscriptPage, WingPage};
pub use telemetry::init_tracing;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

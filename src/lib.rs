//! # keywatch
//!
//! A single-shot CI helper that detects whether a set of watched configuration
//! keys changed between two versions of a YAML document.
//!
//! ## Overview
//!
//! `keywatch` loads two versions of a configuration document (`old` and
//! `new`), reads a watch list of dotted key paths from the environment,
//! resolves each path against both documents, and reports which paths'
//! values differ. The outcome is appended as a single `no_change=true|false`
//! line to a pipeline-provided output file.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use keywatch::prelude::*;
//!
//! # fn example() -> keywatch::error::Result<()> {
//! let settings = Settings::from_env()?;
//! let old = keywatch::document::load(&settings.old_path)?;
//! let new = keywatch::document::load(&settings.new_path)?;
//!
//! let changes = keywatch::diff::diff(&old, &new, &settings.watch_list);
//! keywatch::report::write_outcome(&settings.output_path, !changes.has_changes())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Behavior
//!
//! - A path that does not resolve on one side compares as "absent", which is
//!   distinct from an explicit `null` value.
//! - An empty or unset watch list performs zero checks and always reports
//!   `no_change=true`.
//! - Missing document files and a malformed watch list are fatal; a document
//!   that parses to null is treated as an empty mapping.

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod diff;
pub mod document;
pub mod error;
pub mod report;
pub mod resolve;
pub mod settings;
pub mod watch;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::diff::{Change, ChangeSet, diff};
    pub use crate::error::{KeywatchError, Result};
    pub use crate::resolve::{Resolved, resolve};
    pub use crate::settings::Settings;
    pub use crate::watch::WatchList;
}

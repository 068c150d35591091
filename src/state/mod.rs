//! Persistent version store.
//!
//! This module provides the on-disk store for resume projects: discovery
//! of the store root, global config, per-project state, version IDs, and
//! atomic JSON persistence.

mod atomic;
pub mod config;
pub mod locate;
pub mod project;
pub mod store;
pub mod version_id;

pub use config::{GlobalConfig, CONFIG_SCHEMA_VERSION};
pub use locate::{locate_store, STORE_DIR};
pub use project::{DerivationOp, ProjectState, VersionEntry, VersionSource, PROJECT_SCHEMA_VERSION};
pub use store::{
    validate_project_name, Store, CONFIG_FILE, EXTRACTED_TEXT_FILE, PROJECT_FILE, RESUME_FILE,
};
pub use version_id::{is_valid_version_id, next_version_id, parse_version_id, version_dir_name};

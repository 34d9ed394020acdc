//! Extension catalog view-model synchronizer
//!
//! This crate handles:
//! - Combining the three live extension sources (installed, untrusted,
//!   available) into one grouped, sorted presentation list
//! - Debouncing bursts of source emissions
//! - Tracking per-package install/update progress
//! - Forwarding install/uninstall/trust/refresh commands to the extension
//!   manager

pub mod builder;
pub mod manager;
pub mod prefs;
pub mod sink;
pub mod synchronizer;

pub use builder::build_catalog;
pub use manager::{ExtensionManagerService, InstallProgress};
pub use prefs::{InMemoryPreferences, PreferenceStore};
pub use sink::CatalogSink;
pub use synchronizer::{CatalogSynchronizer, DEBOUNCE_WINDOW};

//! Catalog snapshot and presentation types

use serde::{Deserialize, Serialize};

use super::{AvailableExtension, Extension, InstallStep, InstalledExtension, UntrustedExtension};

/// Display label of the group holding installed and untrusted extensions
pub const INSTALLED_GROUP_LABEL: &str = "Installed";

/// The latest known triple of extension lists at a point in time
///
/// Each list is a semantic set keyed by package name: sources never emit two
/// records with the same package name within one list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub installed: Vec<InstalledExtension>,
    pub untrusted: Vec<UntrustedExtension>,
    pub available: Vec<AvailableExtension>,
}

/// A labeled section boundary in the presentation list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupHeader {
    /// Display label ("Installed" or a language display name)
    pub label: String,

    /// Number of items in the group
    pub size: usize,
}

/// One row of the rendered catalog
///
/// Wraps an extension record, the header of the group it belongs to, and the
/// current install step if an install or update is in flight for its package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub extension: Extension,
    pub header: GroupHeader,
    pub install_step: Option<InstallStep>,
}

//! Extension record types
//!
//! An extension is an installable content-source plugin in one of three
//! states: installed on the device, installed but untrusted (signature not
//! yet accepted), or available from the remote repository. Records are
//! immutable per snapshot and replaced wholesale whenever their source emits.

use serde::{Deserialize, Serialize};

/// An extension installed on the device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledExtension {
    /// Unique package name
    pub pkg_name: String,

    /// Human-readable extension name
    pub name: String,

    /// Installed version
    pub version: String,

    /// Language code of the content source ("all" for multi-language)
    pub lang: String,

    /// A newer version is available from the repository
    #[serde(default)]
    pub has_update: bool,

    /// The extension is no longer listed in the repository
    #[serde(default)]
    pub obsolete: bool,
}

/// An installed extension whose signature has not been trusted yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UntrustedExtension {
    /// Unique package name
    pub pkg_name: String,

    /// Human-readable extension name
    pub name: String,

    /// Installed version
    pub version: String,

    /// Hash of the signing certificate, shown to the user when trusting
    pub signature_hash: String,
}

/// An extension available from the remote repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableExtension {
    /// Unique package name
    pub pkg_name: String,

    /// Human-readable extension name
    pub name: String,

    /// Version offered by the repository
    pub version: String,

    /// Language code of the content source ("all" for multi-language)
    pub lang: String,
}

/// An extension record in any of its three states
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Extension {
    Installed(InstalledExtension),
    Untrusted(UntrustedExtension),
    Available(AvailableExtension),
}

impl Extension {
    /// Unique package name of the wrapped record
    pub fn pkg_name(&self) -> &str {
        match self {
            Extension::Installed(ext) => &ext.pkg_name,
            Extension::Untrusted(ext) => &ext.pkg_name,
            Extension::Available(ext) => &ext.pkg_name,
        }
    }

    /// Human-readable extension name
    pub fn name(&self) -> &str {
        match self {
            Extension::Installed(ext) => &ext.name,
            Extension::Untrusted(ext) => &ext.name,
            Extension::Available(ext) => &ext.name,
        }
    }

    /// Language code, if the state carries one (untrusted records do not)
    pub fn lang(&self) -> Option<&str> {
        match self {
            Extension::Installed(ext) => Some(&ext.lang),
            Extension::Untrusted(_) => None,
            Extension::Available(ext) => Some(&ext.lang),
        }
    }
}

/// A discrete stage in an install or update operation's lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallStep {
    Pending,
    Downloading,
    Installing,
    Installed,
    Failed,
}

impl InstallStep {
    /// Whether this step ends the operation
    pub fn is_terminal(self) -> bool {
        matches!(self, InstallStep::Installed | InstallStep::Failed)
    }
}

impl std::fmt::Display for InstallStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstallStep::Pending => write!(f, "pending"),
            InstallStep::Downloading => write!(f, "downloading"),
            InstallStep::Installing => write!(f, "installing"),
            InstallStep::Installed => write!(f, "installed"),
            InstallStep::Failed => write!(f, "failed"),
        }
    }
}

//! Extension manager collaborator contract

use anyhow::Result;
use async_trait::async_trait;
use hondana_core::types::{AvailableExtension, InstallStep, InstalledExtension, UntrustedExtension};
use tokio::sync::{mpsc, watch};

/// Stream of discrete install steps for one in-flight operation
///
/// The sender side is dropped when the operation terminates, whether it ended
/// in `Installed`, `Failed`, or cancellation.
pub type InstallProgress = mpsc::Receiver<InstallStep>;

/// Extension management service consumed by the catalog synchronizer
///
/// The three list sources are independent: each may emit a new full list at
/// any time, with no ordering guarantee relative to the others. Lists never
/// contain two records with the same package name.
#[async_trait]
pub trait ExtensionManagerService: Send + Sync {
    /// Live list of extensions installed on the device
    fn installed_extensions(&self) -> watch::Receiver<Vec<InstalledExtension>>;

    /// Live list of installed extensions whose signature is not trusted
    fn untrusted_extensions(&self) -> watch::Receiver<Vec<UntrustedExtension>>;

    /// Live list of extensions available from the remote repository
    fn available_extensions(&self) -> watch::Receiver<Vec<AvailableExtension>>;

    /// Start installing an available extension
    async fn install(&self, extension: &AvailableExtension) -> Result<InstallProgress>;

    /// Start updating an installed extension to its repository version
    async fn update(&self, extension: &InstalledExtension) -> Result<InstallProgress>;

    /// Uninstall by package name
    async fn uninstall(&self, pkg_name: &str) -> Result<()>;

    /// Trust the signing certificate with the given hash
    async fn trust_signature(&self, signature_hash: &str) -> Result<()>;

    /// Re-fetch the available extension list from the remote repository
    async fn refresh(&self) -> Result<()>;
}

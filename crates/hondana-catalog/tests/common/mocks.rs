//! Hand-rolled stubs for the synchronizer's collaborators
//!
//! The extension manager stub exposes real watch/mpsc channels so tests can
//! drive emissions and install progress without any process or network side
//! effects.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use hondana_catalog::{CatalogSink, ExtensionManagerService, InstallProgress};
use hondana_core::types::{
    AvailableExtension, CatalogItem, InstallStep, InstalledExtension, UntrustedExtension,
};
use hondana_core::Error;
use tokio::sync::{mpsc, watch};

/// Extension manager stub backed by live channels
pub struct StubExtensionManager {
    /// Sender kept droppable so tests can simulate a closing source
    installed_tx: Mutex<Option<watch::Sender<Vec<InstalledExtension>>>>,
    installed_rx: watch::Receiver<Vec<InstalledExtension>>,
    untrusted_tx: watch::Sender<Vec<UntrustedExtension>>,
    available_tx: watch::Sender<Vec<AvailableExtension>>,
    /// Scripted install streams keyed by package name
    install_streams: Mutex<HashMap<String, InstallProgress>>,
    refresh_count: AtomicUsize,
    uninstalled: Mutex<Vec<String>>,
    trusted: Mutex<Vec<String>>,
}

impl Default for StubExtensionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl StubExtensionManager {
    pub fn new() -> Self {
        let (installed_tx, installed_rx) = watch::channel(Vec::new());
        let (untrusted_tx, _) = watch::channel(Vec::new());
        let (available_tx, _) = watch::channel(Vec::new());
        Self {
            installed_tx: Mutex::new(Some(installed_tx)),
            installed_rx,
            untrusted_tx,
            available_tx,
            install_streams: Mutex::new(HashMap::new()),
            refresh_count: AtomicUsize::new(0),
            uninstalled: Mutex::new(Vec::new()),
            trusted: Mutex::new(Vec::new()),
        }
    }

    /// Emit a new installed-extension list
    pub fn emit_installed(&self, list: Vec<InstalledExtension>) {
        if let Some(tx) = self.installed_tx.lock().unwrap().as_ref() {
            let _ = tx.send(list);
        }
    }

    /// Emit a new untrusted-extension list
    pub fn emit_untrusted(&self, list: Vec<UntrustedExtension>) {
        self.untrusted_tx.send_replace(list);
    }

    /// Emit a new available-extension list
    pub fn emit_available(&self, list: Vec<AvailableExtension>) {
        self.available_tx.send_replace(list);
    }

    /// Drop the installed-source sender, ending that source
    pub fn close_installed_source(&self) {
        self.installed_tx.lock().unwrap().take();
    }

    /// Script the progress stream returned by the next install/update of
    /// `pkg_name`; the returned sender drives the steps.
    pub fn script_install(&self, pkg_name: &str) -> mpsc::Sender<InstallStep> {
        let (tx, rx) = mpsc::channel(16);
        self.install_streams
            .lock()
            .unwrap()
            .insert(pkg_name.to_string(), rx);
        tx
    }

    pub fn refresh_count(&self) -> usize {
        self.refresh_count.load(Ordering::Relaxed)
    }

    pub fn uninstalled(&self) -> Vec<String> {
        self.uninstalled.lock().unwrap().clone()
    }

    pub fn trusted(&self) -> Vec<String> {
        self.trusted.lock().unwrap().clone()
    }

    fn take_stream(&self, pkg_name: &str) -> Result<InstallProgress> {
        self.install_streams
            .lock()
            .unwrap()
            .remove(pkg_name)
            .ok_or_else(|| {
                Error::UnknownExtension {
                    pkg_name: pkg_name.to_string(),
                }
                .into()
            })
    }
}

#[async_trait]
impl ExtensionManagerService for StubExtensionManager {
    fn installed_extensions(&self) -> watch::Receiver<Vec<InstalledExtension>> {
        self.installed_rx.clone()
    }

    fn untrusted_extensions(&self) -> watch::Receiver<Vec<UntrustedExtension>> {
        self.untrusted_tx.subscribe()
    }

    fn available_extensions(&self) -> watch::Receiver<Vec<AvailableExtension>> {
        self.available_tx.subscribe()
    }

    async fn install(&self, extension: &AvailableExtension) -> Result<InstallProgress> {
        self.take_stream(&extension.pkg_name)
    }

    async fn update(&self, extension: &InstalledExtension) -> Result<InstallProgress> {
        self.take_stream(&extension.pkg_name)
    }

    async fn uninstall(&self, pkg_name: &str) -> Result<()> {
        self.uninstalled.lock().unwrap().push(pkg_name.to_string());
        Ok(())
    }

    async fn trust_signature(&self, signature_hash: &str) -> Result<()> {
        self.trusted.lock().unwrap().push(signature_hash.to_string());
        Ok(())
    }

    async fn refresh(&self) -> Result<()> {
        self.refresh_count.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

/// Sink recording every published list
#[derive(Default)]
pub struct RecordingSink {
    renders: Mutex<Vec<Vec<CatalogItem>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_count(&self) -> usize {
        self.renders.lock().unwrap().len()
    }

    pub fn renders(&self) -> Vec<Vec<CatalogItem>> {
        self.renders.lock().unwrap().clone()
    }

    pub fn last_render(&self) -> Option<Vec<CatalogItem>> {
        self.renders.lock().unwrap().last().cloned()
    }
}

impl CatalogSink for RecordingSink {
    fn render(&self, items: Vec<CatalogItem>) {
        self.renders.lock().unwrap().push(items);
    }
}

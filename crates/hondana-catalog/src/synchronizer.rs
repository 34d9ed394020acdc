//! Catalog synchronizer
//!
//! Subscribes to the three live extension sources, coalesces bursts of
//! emissions with a quiet window, rebuilds the grouped presentation list,
//! tracks per-package install progress, and publishes through the display
//! sink.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use hondana_core::lang::LanguageResolver;
use hondana_core::types::{
    AvailableExtension, CatalogItem, CatalogSnapshot, InstallStep, InstalledExtension,
};
use hondana_core::Error;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::builder::build_catalog;
use crate::manager::{ExtensionManagerService, InstallProgress};
use crate::prefs::PreferenceStore;
use crate::sink::CatalogSink;

/// Quiet window for coalescing bursts of source emissions
///
/// Worst-case staleness of the published list equals this window.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(100);

/// Retained output list and install-progress map
///
/// Guarded together: a progress patch must never interleave with a recompute
/// half-way through its read-modify-write.
#[derive(Default)]
struct CatalogState {
    items: Vec<CatalogItem>,
    progress: HashMap<String, InstallStep>,
}

impl CatalogState {
    /// Replace the one item matching `pkg_name` with a progress-annotated
    /// copy and return the full list for republishing. Grouping is untouched.
    fn patch_progress(&mut self, pkg_name: &str, step: InstallStep) -> Option<Vec<CatalogItem>> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.extension.pkg_name() == pkg_name)?;
        item.install_step = Some(step);
        Some(self.items.clone())
    }
}

/// Combines the installed, untrusted and available extension sources into
/// one sorted, grouped catalog list and keeps it current.
pub struct CatalogSynchronizer {
    manager: Arc<dyn ExtensionManagerService>,
    preferences: Arc<dyn PreferenceStore>,
    sink: Arc<dyn CatalogSink>,
    state: Arc<Mutex<CatalogState>>,
    recompute_task: Mutex<Option<JoinHandle<hondana_core::Result<()>>>>,
    progress_tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl CatalogSynchronizer {
    /// Start the synchronizer: request a fresh available-extension fetch and
    /// spawn the recompute loop.
    pub async fn start(
        manager: Arc<dyn ExtensionManagerService>,
        preferences: Arc<dyn PreferenceStore>,
        resolver: Arc<dyn LanguageResolver>,
        sink: Arc<dyn CatalogSink>,
    ) -> Self {
        if let Err(err) = manager.refresh().await {
            warn!("initial available-extension refresh failed: {err:#}");
        }

        let state = Arc::new(Mutex::new(CatalogState::default()));
        let task = tokio::spawn(Self::run(
            Arc::clone(&manager),
            Arc::clone(&preferences),
            resolver,
            Arc::clone(&sink),
            Arc::clone(&state),
        ));
        info!("catalog synchronizer started");

        Self {
            manager,
            preferences,
            sink,
            state,
            recompute_task: Mutex::new(Some(task)),
            progress_tasks: Mutex::new(Vec::new()),
        }
    }

    /// Recompute loop: debounce source emissions, rebuild, publish.
    ///
    /// Ends with `Error::SourceClosed` when any upstream source drops its
    /// sender; per the surrounding lifecycle policy the error is surfaced
    /// through [`CatalogSynchronizer::join`], not retried here.
    async fn run(
        manager: Arc<dyn ExtensionManagerService>,
        preferences: Arc<dyn PreferenceStore>,
        resolver: Arc<dyn LanguageResolver>,
        sink: Arc<dyn CatalogSink>,
        state: Arc<Mutex<CatalogState>>,
    ) -> hondana_core::Result<()> {
        let mut installed_rx = manager.installed_extensions();
        let mut untrusted_rx = manager.untrusted_extensions();
        let mut available_rx = manager.available_extensions();

        loop {
            // Quiet window: absorb emissions until none arrives for
            // DEBOUNCE_WINDOW; only the final combination is recomputed.
            loop {
                tokio::select! {
                    _ = sleep(DEBOUNCE_WINDOW) => break,
                    changed = installed_rx.changed() => {
                        changed.map_err(|_| Error::SourceClosed { source_name: "installed" })?
                    }
                    changed = untrusted_rx.changed() => {
                        changed.map_err(|_| Error::SourceClosed { source_name: "untrusted" })?
                    }
                    changed = available_rx.changed() => {
                        changed.map_err(|_| Error::SourceClosed { source_name: "available" })?
                    }
                }
            }

            let snapshot = CatalogSnapshot {
                installed: installed_rx.borrow_and_update().clone(),
                untrusted: untrusted_rx.borrow_and_update().clone(),
                available: available_rx.borrow_and_update().clone(),
            };
            let enabled_languages = preferences.enabled_languages();

            {
                let mut guard = state.lock().await;
                let items = build_catalog(
                    &snapshot,
                    &guard.progress,
                    &enabled_languages,
                    resolver.as_ref(),
                );
                guard.items = items;
                debug!(
                    installed = snapshot.installed.len(),
                    untrusted = snapshot.untrusted.len(),
                    available = snapshot.available.len(),
                    rows = guard.items.len(),
                    "catalog recomputed"
                );
                // Published under the state lock so recomputes and progress
                // patches reach the sink in state order; the retained list,
                // not a pre-lock local, is what goes out.
                sink.render(guard.items.clone());
            }

            // Park until the next emission, then debounce again.
            tokio::select! {
                changed = installed_rx.changed() => {
                    changed.map_err(|_| Error::SourceClosed { source_name: "installed" })?
                }
                changed = untrusted_rx.changed() => {
                    changed.map_err(|_| Error::SourceClosed { source_name: "untrusted" })?
                }
                changed = available_rx.changed() => {
                    changed.map_err(|_| Error::SourceClosed { source_name: "available" })?
                }
            }
        }
    }

    /// Start installing an available extension and track its progress
    pub async fn install(&self, extension: &AvailableExtension) -> Result<()> {
        let progress = self.manager.install(extension).await?;
        self.track_progress(extension.pkg_name.clone(), progress)
            .await;
        Ok(())
    }

    /// Start updating an installed extension and track its progress
    pub async fn update(&self, extension: &InstalledExtension) -> Result<()> {
        let progress = self.manager.update(extension).await?;
        self.track_progress(extension.pkg_name.clone(), progress)
            .await;
        Ok(())
    }

    /// Uninstall by package name; the removal surfaces through the next
    /// installed-source emission, not through local state.
    pub async fn uninstall(&self, pkg_name: &str) -> Result<()> {
        self.manager.uninstall(pkg_name).await
    }

    /// Trust the signing certificate with the given hash
    pub async fn trust_signature(&self, signature_hash: &str) -> Result<()> {
        self.manager.trust_signature(signature_hash).await
    }

    /// Re-fetch the available extension list from the remote repository
    pub async fn refresh(&self) -> Result<()> {
        self.manager.refresh().await
    }

    /// Number of installed extensions with a pending update
    pub fn extension_updates_count(&self) -> u32 {
        self.preferences.extension_updates_count()
    }

    /// Whether extension updates are checked automatically
    pub fn auto_update_check(&self) -> bool {
        self.preferences.auto_update_check()
    }

    /// The currently retained catalog list
    pub async fn current_catalog(&self) -> Vec<CatalogItem> {
        self.state.lock().await.items.clone()
    }

    /// Consume a progress stream on its own task: record each step in the
    /// progress map, patch the affected item, republish; drop the map entry
    /// when the stream terminates, whatever the final step was.
    async fn track_progress(&self, pkg_name: String, mut progress: InstallProgress) {
        let state = Arc::clone(&self.state);
        let sink = Arc::clone(&self.sink);

        let handle = tokio::spawn(async move {
            while let Some(step) = progress.recv().await {
                debug!(pkg_name = %pkg_name, step = %step, "install step");
                let mut guard = state.lock().await;
                guard.progress.insert(pkg_name.clone(), step);
                // Rendering stays inside the lock, same as the recompute
                // path, so the sink sees publishes in state order.
                if let Some(items) = guard.patch_progress(&pkg_name, step) {
                    sink.render(items);
                }
            }
            state.lock().await.progress.remove(&pkg_name);
            debug!(pkg_name = %pkg_name, "install progress stream closed");
        });

        let mut tasks = self.progress_tasks.lock().await;
        tasks.retain(|task| !task.is_finished());
        tasks.push(handle);
    }

    /// Wait for the recompute loop to finish
    ///
    /// Returns only when an upstream source closes (the error names which
    /// one) or after [`CatalogSynchronizer::close`].
    pub async fn join(&self) -> hondana_core::Result<()> {
        let task = self.recompute_task.lock().await.take();
        match task {
            Some(handle) => match handle.await {
                Ok(result) => result,
                Err(err) if err.is_cancelled() => Ok(()),
                Err(err) => std::panic::resume_unwind(err.into_panic()),
            },
            None => Ok(()),
        }
    }

    /// End the synchronizer's lifecycle: cancel the recompute loop and any
    /// in-flight progress consumers, releasing their channel subscriptions.
    pub async fn close(&self) {
        if let Some(task) = self.recompute_task.lock().await.take() {
            task.abort();
        }
        for task in self.progress_tasks.lock().await.drain(..) {
            task.abort();
        }
        info!("catalog synchronizer closed");
    }
}

//! Reader preferences consumed at recompute time

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::RwLock;

/// Read-only preference surface for the catalog synchronizer
///
/// Values are read fresh at every recompute; they may change between
/// recomputes without notifying the synchronizer.
pub trait PreferenceStore: Send + Sync {
    /// Language codes the reader has enabled for browsing
    fn enabled_languages(&self) -> HashSet<String>;

    /// Number of installed extensions with a pending update
    fn extension_updates_count(&self) -> u32;

    /// Whether extension updates are checked automatically
    fn auto_update_check(&self) -> bool;
}

/// In-memory preference store
///
/// The surrounding application owns persistence; this store only mirrors the
/// current values for the synchronizer to read.
#[derive(Debug)]
pub struct InMemoryPreferences {
    enabled_languages: RwLock<HashSet<String>>,
    extension_updates_count: AtomicU32,
    auto_update_check: AtomicBool,
}

impl Default for InMemoryPreferences {
    fn default() -> Self {
        Self::new(["all", "en"])
    }
}

impl InMemoryPreferences {
    /// Create a store with the given enabled language codes
    pub fn new<I, S>(enabled_languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled_languages: RwLock::new(
                enabled_languages.into_iter().map(Into::into).collect(),
            ),
            extension_updates_count: AtomicU32::new(0),
            auto_update_check: AtomicBool::new(true),
        }
    }

    /// Replace the enabled language set
    pub fn set_enabled_languages<I, S>(&self, languages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut guard = self.enabled_languages.write().unwrap();
        *guard = languages.into_iter().map(Into::into).collect();
    }

    /// Update the pending-update counter
    pub fn set_extension_updates_count(&self, count: u32) {
        self.extension_updates_count.store(count, Ordering::Relaxed);
    }

    /// Toggle automatic update checking
    pub fn set_auto_update_check(&self, enabled: bool) {
        self.auto_update_check.store(enabled, Ordering::Relaxed);
    }
}

impl PreferenceStore for InMemoryPreferences {
    fn enabled_languages(&self) -> HashSet<String> {
        self.enabled_languages.read().unwrap().clone()
    }

    fn extension_updates_count(&self) -> u32 {
        self.extension_updates_count.load(Ordering::Relaxed)
    }

    fn auto_update_check(&self) -> bool {
        self.auto_update_check.load(Ordering::Relaxed)
    }
}

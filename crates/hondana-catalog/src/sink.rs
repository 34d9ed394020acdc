//! Display collaborator contract

use hondana_core::types::CatalogItem;

/// Receives the fully built presentation list for rendering
///
/// Called only from the synchronizer's publish path, one call per recompute
/// or progress patch. Implementations own the hand-off to the UI execution
/// context; the synchronizer never calls concurrently with itself.
pub trait CatalogSink: Send + Sync {
    /// Render the ordered catalog list
    fn render(&self, items: Vec<CatalogItem>);
}

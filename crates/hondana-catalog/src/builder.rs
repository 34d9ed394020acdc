//! Pure catalog recompute
//!
//! Builds the grouped, sorted presentation list from a snapshot, the current
//! install-progress map, and the enabled-language set. Given identical
//! inputs the output is item-for-item identical.

use std::collections::{BTreeMap, HashMap, HashSet};

use hondana_core::lang::{LanguageResolver, ALL_LANGUAGES};
use hondana_core::types::{
    AvailableExtension, CatalogItem, CatalogSnapshot, Extension, GroupHeader, InstallStep,
    INSTALLED_GROUP_LABEL,
};

/// Build the ordered presentation list for one snapshot
///
/// Ordering:
/// 1. One "Installed" group (if non-empty): installed extensions sorted by
///    has-update first, then non-obsolete first, then package name; followed
///    by untrusted extensions sorted by package name.
/// 2. Available extensions not already installed or untrusted, restricted to
///    enabled languages (plus the "all" sentinel), grouped by resolved
///    language display name with groups in ascending label order and items
///    in package-name order.
///
/// Installed and available items are annotated with the current install step
/// from `progress`; untrusted items never carry progress.
pub fn build_catalog(
    snapshot: &CatalogSnapshot,
    progress: &HashMap<String, InstallStep>,
    enabled_languages: &HashSet<String>,
    resolver: &dyn LanguageResolver,
) -> Vec<CatalogItem> {
    let mut installed = snapshot.installed.clone();
    installed.sort_by(|a, b| {
        (!a.has_update, a.obsolete, a.pkg_name.as_str())
            .cmp(&(!b.has_update, b.obsolete, b.pkg_name.as_str()))
    });

    let mut untrusted = snapshot.untrusted.clone();
    untrusted.sort_by(|a, b| a.pkg_name.cmp(&b.pkg_name));

    let taken: HashSet<&str> = snapshot
        .installed
        .iter()
        .map(|ext| ext.pkg_name.as_str())
        .chain(snapshot.untrusted.iter().map(|ext| ext.pkg_name.as_str()))
        .collect();

    let mut available: Vec<AvailableExtension> = snapshot
        .available
        .iter()
        .filter(|ext| !taken.contains(ext.pkg_name.as_str()))
        .filter(|ext| ext.lang == ALL_LANGUAGES || enabled_languages.contains(&ext.lang))
        .cloned()
        .collect();
    available.sort_by(|a, b| a.pkg_name.cmp(&b.pkg_name));

    let mut items = Vec::with_capacity(installed.len() + untrusted.len() + available.len());

    if !installed.is_empty() || !untrusted.is_empty() {
        let header = GroupHeader {
            label: INSTALLED_GROUP_LABEL.to_string(),
            size: installed.len() + untrusted.len(),
        };
        for ext in installed {
            let install_step = progress.get(&ext.pkg_name).copied();
            items.push(CatalogItem {
                extension: Extension::Installed(ext),
                header: header.clone(),
                install_step,
            });
        }
        // Untrusted entries never surface install progress
        for ext in untrusted {
            items.push(CatalogItem {
                extension: Extension::Untrusted(ext),
                header: header.clone(),
                install_step: None,
            });
        }
    }

    // Items were pre-sorted by package name, so each group stays sorted
    let mut by_language: BTreeMap<String, Vec<AvailableExtension>> = BTreeMap::new();
    for ext in available {
        by_language
            .entry(resolver.display_name(&ext.lang))
            .or_default()
            .push(ext);
    }

    for (label, group) in by_language {
        let header = GroupHeader {
            label,
            size: group.len(),
        };
        for ext in group {
            let install_step = progress.get(&ext.pkg_name).copied();
            items.push(CatalogItem {
                extension: Extension::Available(ext),
                header: header.clone(),
                install_step,
            });
        }
    }

    items
}

//! Extension record builders for tests

use hondana_core::types::{AvailableExtension, InstalledExtension, UntrustedExtension};

pub fn installed(pkg: &str, has_update: bool, obsolete: bool) -> InstalledExtension {
    InstalledExtension {
        pkg_name: pkg.to_string(),
        name: pkg.to_string(),
        version: "1.0.0".to_string(),
        lang: "en".to_string(),
        has_update,
        obsolete,
    }
}

pub fn untrusted(pkg: &str) -> UntrustedExtension {
    UntrustedExtension {
        pkg_name: pkg.to_string(),
        name: pkg.to_string(),
        version: "1.0.0".to_string(),
        signature_hash: "cafebabe".to_string(),
    }
}

pub fn available(pkg: &str, lang: &str) -> AvailableExtension {
    AvailableExtension {
        pkg_name: pkg.to_string(),
        name: pkg.to_string(),
        version: "1.0.0".to_string(),
        lang: lang.to_string(),
    }
}

//! Localization query engine
//!
//! Holds the parsed tables for all loaded resources plus the active
//! language, and serves lookups with fallback-to-key behavior. Reload
//! swaps a fully built table in under one write lock, so readers on other
//! threads (or interleaved in the same frame) never see a half-populated
//! resource.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::parser::{parse_resource, LoadReport, ResourceTable};

/// Multi-resource translation index with a mutable active language.
///
/// Lookups never fail: an unknown resource, key, or language falls back to
/// returning the key unchanged.
pub struct LocalizationTable {
    resources: RwLock<HashMap<String, ResourceTable>>,
    active_language: RwLock<String>,
}

impl LocalizationTable {
    /// Create an empty table with the given initial language code
    pub fn new(initial_language: &str) -> Self {
        Self {
            resources: RwLock::new(HashMap::new()),
            active_language: RwLock::new(initial_language.to_string()),
        }
    }

    /// Load (or fully replace) one resource from its raw text.
    ///
    /// The replacement table is built before any lock is taken; the swap
    /// itself is a single map insert under the write lock. Malformed text
    /// leaves the resource loaded but empty.
    pub fn load(&self, resource_name: &str, text: &str) -> LoadReport {
        let (table, report) = parse_resource(resource_name, text);
        self.resources
            .write()
            .insert(resource_name.to_string(), table);
        log::info!(
            "Loaded localization resource '{}': {} languages, {} entries",
            resource_name,
            report.languages,
            report.entries
        );
        report
    }

    /// Fully replace a resource's prior entries
    pub fn reload(&self, resource_name: &str, text: &str) -> LoadReport {
        self.load(resource_name, text)
    }

    /// Change the active language.
    ///
    /// A code no loaded resource supports keeps the previous language and
    /// returns false.
    pub fn set_language(&self, code: &str) -> bool {
        let supported = self
            .resources
            .read()
            .values()
            .any(|table| table.supports(code));
        if supported {
            *self.active_language.write() = code.to_string();
            true
        } else {
            log::warn!(
                "Language '{}' is not supported by any loaded resource; keeping '{}'",
                code,
                self.active_language.read()
            );
            false
        }
    }

    /// The currently active language code
    pub fn current_language(&self) -> String {
        self.active_language.read().clone()
    }

    /// Look up the translated text for a key in the active language.
    ///
    /// Returns the key unchanged when the resource, key, or language is
    /// unknown.
    pub fn localized_text(&self, resource_name: &str, key: &str) -> String {
        let language = self.active_language.read().clone();
        let resources = self.resources.read();
        match resources
            .get(resource_name)
            .and_then(|table| table.get(&language, key))
        {
            Some(text) => text.to_string(),
            None => {
                log::warn!(
                    "No translation for key '{}' in resource '{}' (language '{}')",
                    key,
                    resource_name,
                    language
                );
                key.to_string()
            }
        }
    }

    /// Header-order language codes for a resource, empty if not loaded
    pub fn supported_languages(&self, resource_name: &str) -> Vec<String> {
        self.resources
            .read()
            .get(resource_name)
            .map(|table| table.languages().to_vec())
            .unwrap_or_default()
    }

    /// Check whether a resource has been loaded
    pub fn is_loaded(&self, resource_name: &str) -> bool {
        self.resources.read().contains_key(resource_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    const SAMPLE: &str = "Key,en,es\nGREETING,Hello,Hola\nFAREWELL,Bye\\nSee you,Adios";

    fn sample_table() -> LocalizationTable {
        let table = LocalizationTable::new("en");
        table.load("ui", SAMPLE);
        table
    }

    #[test]
    fn test_lookup_in_active_language() {
        let table = sample_table();
        assert!(table.set_language("es"));
        assert_eq!(table.localized_text("ui", "GREETING"), "Hola");

        assert!(table.set_language("en"));
        assert_eq!(table.localized_text("ui", "FAREWELL"), "Bye\nSee you");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        let table = sample_table();
        assert_eq!(table.localized_text("ui", "UNKNOWN"), "UNKNOWN");
        table.set_language("es");
        assert_eq!(table.localized_text("ui", "UNKNOWN"), "UNKNOWN");
    }

    #[test]
    fn test_unknown_resource_falls_back_to_key() {
        let table = sample_table();
        assert_eq!(table.localized_text("missing", "GREETING"), "GREETING");
    }

    #[test]
    fn test_unknown_language_keeps_previous() {
        let table = sample_table();
        table.set_language("es");
        assert!(!table.set_language("xx"));
        assert_eq!(table.current_language(), "es");
        assert_eq!(table.localized_text("ui", "GREETING"), "Hola");
    }

    #[test]
    fn test_supported_languages_in_header_order() {
        let table = sample_table();
        assert_eq!(table.supported_languages("ui"), ["en", "es"]);
        assert!(table.supported_languages("missing").is_empty());
    }

    #[test]
    fn test_reload_fully_replaces() {
        let table = sample_table();
        table.reload("ui", "Key,en\nGREETING,Hi there");
        assert_eq!(table.localized_text("ui", "GREETING"), "Hi there");
        // FAREWELL was dropped by the reload, so it falls back to the key
        assert_eq!(table.localized_text("ui", "FAREWELL"), "FAREWELL");
        assert_eq!(table.supported_languages("ui"), ["en"]);
    }

    #[test]
    fn test_malformed_reload_leaves_resource_empty() {
        let table = sample_table();
        let report = table.reload("ui", "Key,en\n");
        assert_eq!(report.entries, 0);
        assert!(table.is_loaded("ui"));
        assert_eq!(table.localized_text("ui", "GREETING"), "GREETING");
    }

    #[test]
    fn test_reload_is_atomic_for_concurrent_readers() {
        let table = Arc::new(LocalizationTable::new("en"));
        table.load("ui", "Key,en\nSTATE,old");

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let table = Arc::clone(&table);
                std::thread::spawn(move || {
                    for _ in 0..2000 {
                        let text = table.localized_text("ui", "STATE");
                        // A half-populated table would fall back to the key
                        assert!(text == "old" || text == "new", "saw '{}'", text);
                    }
                })
            })
            .collect();

        for i in 0..500 {
            let value = if i % 2 == 0 { "new" } else { "old" };
            table.reload("ui", &format!("Key,en\nSTATE,{}", value));
        }

        for reader in readers {
            reader.join().unwrap();
        }
    }
}

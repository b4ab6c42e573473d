//! Resource text parsing
//!
//! Turns raw `Key,<lang1>,<lang2>,...` delimited text into a per-language
//! lookup table. Splitting is on the comma character only; there is no
//! quoted-field support.

use std::collections::HashMap;

/// Parsed translations for one named resource.
///
/// The header row defines the universe of language codes for the resource;
/// `languages` preserves header order.
#[derive(Debug, Clone, Default)]
pub struct ResourceTable {
    languages: Vec<String>,
    entries: HashMap<String, HashMap<String, String>>,
}

impl ResourceTable {
    /// Language codes in header order
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Check whether a language code appears in the header
    pub fn supports(&self, code: &str) -> bool {
        self.languages.iter().any(|c| c == code)
    }

    /// Look up the translated text for a (language, key) pair
    pub fn get(&self, language: &str, key: &str) -> Option<&str> {
        self.entries
            .get(language)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    /// True when no header was parsed (empty or malformed source)
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Outcome of loading one resource
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of language columns in the header
    pub languages: usize,
    /// Number of distinct (key, language) entries loaded
    pub entries: usize,
    /// Rows skipped because they had fewer than 2 fields
    pub skipped_rows: usize,
    /// Entries that overwrote an earlier row with the same key
    pub duplicate_keys: usize,
}

/// Parse one resource's full text into a table.
///
/// Malformed input never fails hard: short rows are skipped, duplicate keys
/// keep the later row, and a source with fewer than 2 usable lines produces
/// an empty table. Everything noteworthy is logged and counted in the report.
pub(crate) fn parse_resource(name: &str, text: &str) -> (ResourceTable, LoadReport) {
    let lines: Vec<&str> = text.split('\n').filter(|l| !l.trim().is_empty()).collect();
    if lines.len() < 2 {
        log::warn!(
            "Localization resource '{}' is empty or malformed ({} usable lines)",
            name,
            lines.len()
        );
        return (ResourceTable::default(), LoadReport::default());
    }

    // Header: key-column label first, then one code per language column
    let languages: Vec<String> = lines[0]
        .split(',')
        .skip(1)
        .map(|code| code.trim().to_string())
        .collect();
    if languages.is_empty() {
        log::warn!("Localization resource '{}' declares no language columns", name);
        return (ResourceTable::default(), LoadReport::default());
    }

    let mut entries: HashMap<String, HashMap<String, String>> = languages
        .iter()
        .map(|code| (code.clone(), HashMap::new()))
        .collect();

    let mut report = LoadReport {
        languages: languages.len(),
        ..LoadReport::default()
    };

    for line in &lines[1..] {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 2 {
            log::warn!("Skipping malformed row in '{}': {}", name, line.trim());
            report.skipped_rows += 1;
            continue;
        }

        let key = fields[0].trim().to_string();
        if fields.len() > languages.len() + 1 {
            log::warn!(
                "Row '{}' in '{}' has {} translation fields for {} languages; extras ignored",
                key,
                name,
                fields.len() - 1,
                languages.len()
            );
        }

        for (code, field) in languages.iter().zip(fields[1..].iter()) {
            let value = decode_field(field);
            // Headers with a repeated code collapse into one table, so the
            // entry map is keyed by code rather than column index.
            if let Some(table) = entries.get_mut(code) {
                if table.insert(key.clone(), value).is_some() {
                    log::warn!(
                        "Duplicate key '{}' for language '{}' in '{}'; keeping the later row",
                        key,
                        code,
                        name
                    );
                    report.duplicate_keys += 1;
                } else {
                    report.entries += 1;
                }
            }
        }
    }

    (ResourceTable { languages, entries }, report)
}

/// Trim a raw field and decode the literal `\n` escape to a real newline.
/// No other escape sequences are supported.
fn decode_field(raw: &str) -> String {
    raw.trim().replace("\\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_languages_in_order() {
        let (table, report) = parse_resource("ui", "Key,en,es,fr\nGREETING,Hello,Hola,Salut");
        assert_eq!(table.languages(), ["en", "es", "fr"]);
        assert_eq!(report.languages, 3);
        assert_eq!(report.entries, 3);
    }

    #[test]
    fn test_lookup_parsed_entries() {
        let (table, _) = parse_resource("ui", "Key,en,es\nGREETING,Hello,Hola");
        assert_eq!(table.get("en", "GREETING"), Some("Hello"));
        assert_eq!(table.get("es", "GREETING"), Some("Hola"));
        assert_eq!(table.get("en", "MISSING"), None);
        assert_eq!(table.get("de", "GREETING"), None);
    }

    #[test]
    fn test_decodes_newline_escape() {
        let (table, _) = parse_resource("ui", "Key,en\nFAREWELL,Bye\\nSee you");
        assert_eq!(table.get("en", "FAREWELL"), Some("Bye\nSee you"));
    }

    #[test]
    fn test_trims_fields_and_crlf() {
        let (table, _) = parse_resource("ui", "Key, en ,es\r\nGREETING, Hello , Hola \r\n");
        assert_eq!(table.languages(), ["en", "es"]);
        assert_eq!(table.get("en", "GREETING"), Some("Hello"));
        assert_eq!(table.get("es", "GREETING"), Some("Hola"));
    }

    #[test]
    fn test_skips_short_rows() {
        let (table, report) = parse_resource("ui", "Key,en\nJUSTAKEY\nGREETING,Hello");
        assert_eq!(report.skipped_rows, 1);
        assert_eq!(report.entries, 1);
        assert_eq!(table.get("en", "GREETING"), Some("Hello"));
        assert_eq!(table.get("en", "JUSTAKEY"), None);
    }

    #[test]
    fn test_duplicate_key_last_write_wins() {
        let (table, report) = parse_resource(
            "ui",
            "Key,en,es\nGREETING,Hello,Hola\nGREETING,Hi,Buenas",
        );
        assert_eq!(table.get("en", "GREETING"), Some("Hi"));
        assert_eq!(table.get("es", "GREETING"), Some("Buenas"));
        assert_eq!(report.duplicate_keys, 2);
        assert_eq!(report.entries, 2);
    }

    #[test]
    fn test_too_few_lines_yields_empty() {
        let (table, report) = parse_resource("ui", "Key,en\n");
        assert!(table.is_empty());
        assert_eq!(report, LoadReport::default());

        let (table, report) = parse_resource("ui", "");
        assert!(table.is_empty());
        assert_eq!(report, LoadReport::default());
    }

    #[test]
    fn test_extra_fields_ignored() {
        let (table, report) = parse_resource("ui", "Key,en\nGREETING,Hello,whoops,extra");
        assert_eq!(table.get("en", "GREETING"), Some("Hello"));
        assert_eq!(report.entries, 1);
    }

    #[test]
    fn test_missing_trailing_fields() {
        // Row covers only the first language; the second language has no entry
        let (table, report) = parse_resource("ui", "Key,en,es\nFAREWELL,Bye");
        assert_eq!(table.get("en", "FAREWELL"), Some("Bye"));
        assert_eq!(table.get("es", "FAREWELL"), None);
        assert_eq!(report.entries, 1);
    }
}

//! Highlighter coordinator
//!
//! Owns a pattern catalog, maps file extensions to language identifiers,
//! and drives the per-line pipeline over whole documents.

use std::collections::HashMap;
use std::path::Path;

use crate::builtin;
use crate::catalog::PatternCatalog;

use super::render::render_body;

/// Coordinates language lookup and document highlighting
///
/// The catalog is immutable once the highlighter is built, so a single
/// highlighter can serve any number of documents, concurrently if desired.
pub struct Highlighter {
    /// The pattern catalog backing every run
    catalog: PatternCatalog,
    /// Extension to language identifier mapping
    extension_map: HashMap<String, String>,
}

impl Highlighter {
    /// Create a highlighter from a loaded catalog
    ///
    /// The extension map is built from each entry's `extensions` key
    /// (a `|`-separated list carried in the definition source).
    pub fn new(catalog: PatternCatalog) -> Self {
        let mut extension_map = HashMap::new();

        for entry in catalog.entries() {
            if let Some(extensions) = entry.extra.get("extensions") {
                for ext in extensions.split('|').map(str::trim) {
                    if !ext.is_empty() {
                        extension_map.insert(ext.to_lowercase(), entry.language.clone());
                    }
                }
            }
        }

        Self { catalog, extension_map }
    }

    /// Create a highlighter from the builtin definition source
    pub fn with_defaults() -> Self {
        Self::new(PatternCatalog::parse(&builtin::default_source()))
    }

    /// Get the backing catalog
    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// Detect a language identifier from a filename's extension
    pub fn detect_language(&self, path: &Path) -> Option<&str> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        self.extension_map.get(&ext).map(String::as_str)
    }

    /// Highlight a whole document
    ///
    /// An unknown language identifier renders with the default entry:
    /// comments still highlight, nothing else does.
    pub fn highlight(&self, language_id: &str, text: &str) -> String {
        render_body(self.catalog.get(language_id), text)
    }

    /// List defined languages, sorted
    pub fn list_languages(&self) -> Vec<&str> {
        let mut names: Vec<_> = self
            .catalog
            .entries()
            .map(|entry| entry.language.as_str())
            .collect();
        names.sort_unstable();
        names
    }
}

//! Pattern catalog loaded from a definition source
//!
//! The definition source is plain text organized into `[language]` sections
//! of `key = value` lines:
//!
//! ```text
//! [python]
//! keywords = def|return|if|else
//! operators = + | - | = | ==
//! literals = \d+ | "[^"]*"
//! comments = #.*
//! ```
//!
//! List values are `|`-split with each piece trimmed. Section names and keys
//! are case-insensitive. Stray lines are skipped rather than rejected, so a
//! definition source with junk in it still loads.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::Result;

/// Comment pattern applied when a language does not define one: a `#`
/// prefix marker followed by anything.
const DEFAULT_COMMENT_PATTERN: &str = "#.*";

/// The pattern bundle for one language
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// Lowercased language identifier this entry was defined under
    pub language: String,
    /// Exact-match keyword candidates
    pub keywords: HashSet<String>,
    /// Exact-match operator candidates
    pub operators: HashSet<String>,
    /// Literal patterns, each compiled to match a full atom
    pub literals: Vec<Regex>,
    /// Comment pattern, compiled to match from the start of a line
    comment: Regex,
    /// Unrecognized keys, stored verbatim for forward compatibility
    pub extra: HashMap<String, String>,
}

impl CatalogEntry {
    /// Create an empty entry with the default comment pattern
    fn empty(language: &str) -> Self {
        Self {
            language: language.to_string(),
            keywords: HashSet::new(),
            operators: HashSet::new(),
            literals: Vec::new(),
            comment: compile_prefix(DEFAULT_COMMENT_PATTERN).unwrap(),
            extra: HashMap::new(),
        }
    }

    /// Test whether an atom's full text matches any literal pattern
    pub fn matches_literal(&self, text: &str) -> bool {
        self.literals.iter().any(|re| re.is_match(text))
    }

    /// Test whether a whole line (ending already stripped) is a comment
    ///
    /// The comment pattern must match from the start of the content.
    pub fn is_comment_line(&self, content: &str) -> bool {
        self.comment.is_match(content)
    }
}

/// Per-language pattern catalog
///
/// Built once from a definition source and immutable afterwards, so one
/// catalog can back any number of concurrent highlighting runs.
#[derive(Debug)]
pub struct PatternCatalog {
    entries: HashMap<String, CatalogEntry>,
    default: CatalogEntry,
}

impl PatternCatalog {
    /// Parse a catalog from definition source text
    ///
    /// This is a pure function of the text: no caching, no global state.
    /// Malformed lines are skipped, never fatal.
    pub fn parse(source: &str) -> Self {
        let mut entries: HashMap<String, CatalogEntry> = HashMap::new();
        let mut current: Option<String> = None;

        for line in source.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
                let name = name.trim().to_lowercase();
                entries
                    .entry(name.clone())
                    .or_insert_with(|| CatalogEntry::empty(&name));
                current = Some(name);
                continue;
            }

            let Some(section) = current.as_deref() else {
                log::debug!("skipping line outside any section: {line:?}");
                continue;
            };

            let Some((key, value)) = line.split_once('=') else {
                log::debug!("skipping malformed line in [{section}]: {line:?}");
                continue;
            };
            let key = key.trim().to_lowercase();
            let value = value.trim();

            let entry = entries
                .get_mut(section)
                .expect("section entry inserted at header");

            match key.as_str() {
                "keywords" => entry.keywords.extend(split_list(value).map(String::from)),
                "operators" => entry.operators.extend(split_list(value).map(String::from)),
                "literals" => {
                    for pattern in split_list(value) {
                        match compile_full(pattern) {
                            Some(re) => entry.literals.push(re),
                            None => {
                                log::warn!("skipping literal pattern {pattern:?} in [{section}]")
                            }
                        }
                    }
                }
                "comments" => match compile_prefix(value) {
                    Some(re) => entry.comment = re,
                    None => log::warn!("skipping comment pattern {value:?} in [{section}]"),
                },
                _ => {
                    entry.extra.insert(key, value.to_string());
                }
            }
        }

        Self {
            entries,
            default: CatalogEntry::empty(""),
        }
    }

    /// Load a catalog from a definition source file
    ///
    /// An unreadable file is a hard error; a readable file always produces
    /// a catalog, however malformed its contents.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Ok(Self::parse(&source))
    }

    /// Look up the entry for a language identifier
    ///
    /// Unknown languages resolve to the default entry (empty sets, no
    /// literal patterns, `#.*` comments); lookup never fails.
    pub fn get(&self, language_id: &str) -> &CatalogEntry {
        self.entries
            .get(&language_id.to_lowercase())
            .unwrap_or(&self.default)
    }

    /// Check whether a language is defined in this catalog
    pub fn contains(&self, language_id: &str) -> bool {
        self.entries.contains_key(&language_id.to_lowercase())
    }

    /// Iterate over all defined entries
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }
}

/// Split a `|`-delimited list value, trimming each piece
fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split('|').map(str::trim).filter(|piece| !piece.is_empty())
}

/// Compile a pattern to match a full atom text
fn compile_full(pattern: &str) -> Option<Regex> {
    Regex::new(&format!("^(?:{pattern})$")).ok()
}

/// Compile a pattern to match from the start of a line
fn compile_prefix(pattern: &str) -> Option<Regex> {
    Regex::new(&format!("^(?:{pattern})")).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SOURCE: &str = r#"
[Python]
keywords = def | return|if
operators = + | = | ==
literals = \d+ | "[^"]*"
comments = #.*
extensions = py | pyw

[asm]
keywords = mov|add
comments = ;.*
"#;

    #[test]
    fn test_parse_sections() {
        let catalog = PatternCatalog::parse(SOURCE);

        assert!(catalog.contains("python"));
        assert!(catalog.contains("asm"));
        assert!(!catalog.contains("ruby"));
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let catalog = PatternCatalog::parse(SOURCE);

        // Section was declared as [Python]; lookup is case-insensitive too
        assert!(catalog.get("PYTHON").keywords.contains("def"));
        assert!(catalog.get("Python").keywords.contains("if"));
    }

    #[test]
    fn test_list_values_trimmed() {
        let catalog = PatternCatalog::parse(SOURCE);
        let entry = catalog.get("python");

        assert!(entry.keywords.contains("def"));
        assert!(entry.keywords.contains("return"));
        assert!(entry.operators.contains("+"));
        assert!(entry.operators.contains("=="));
        assert_eq!(entry.literals.len(), 2);
    }

    #[test]
    fn test_literal_full_match() {
        let catalog = PatternCatalog::parse(SOURCE);
        let entry = catalog.get("python");

        assert!(entry.matches_literal("42"));
        assert!(entry.matches_literal("\"hi\""));
        // Full match only, not substring
        assert!(!entry.matches_literal("x42"));
        assert!(!entry.matches_literal("42x"));
    }

    #[test]
    fn test_comment_pattern() {
        let catalog = PatternCatalog::parse(SOURCE);

        assert!(catalog.get("python").is_comment_line("# note"));
        assert!(!catalog.get("python").is_comment_line("x = 1 # note"));
        assert!(catalog.get("asm").is_comment_line("; note"));
        assert!(!catalog.get("asm").is_comment_line("# note"));
    }

    #[test]
    fn test_unknown_keys_kept_verbatim() {
        let catalog = PatternCatalog::parse(SOURCE);
        let entry = catalog.get("python");

        assert_eq!(entry.extra.get("extensions").map(String::as_str), Some("py | pyw"));
    }

    #[test]
    fn test_unknown_language_gets_default_entry() {
        let catalog = PatternCatalog::parse(SOURCE);
        let entry = catalog.get("mystery");

        assert!(entry.keywords.is_empty());
        assert!(entry.operators.is_empty());
        assert!(entry.literals.is_empty());
        assert!(entry.is_comment_line("# default marker"));
        assert!(!entry.is_comment_line("code"));
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let source = "stray before any section\n[lang]\nkeywords = a|b\nno equals here\n= empty key\n";
        let catalog = PatternCatalog::parse(source);
        let entry = catalog.get("lang");

        assert_eq!(entry.keywords.len(), 2);
        // "= empty key" has an '=' with an empty key; it lands in extra
        assert_eq!(entry.extra.get("").map(String::as_str), Some("empty key"));
    }

    #[test]
    fn test_bad_literal_pattern_skipped() {
        let source = "[lang]\nliterals = \\d+ | ( | [a-z]+\n";
        let catalog = PatternCatalog::parse(source);
        let entry = catalog.get("lang");

        // The unclosed group is dropped, the other two survive
        assert_eq!(entry.literals.len(), 2);
        assert!(entry.matches_literal("7"));
        assert!(entry.matches_literal("abc"));
    }

    #[test]
    fn test_section_without_comments_uses_default() {
        let source = "[lang]\nkeywords = k\n";
        let catalog = PatternCatalog::parse(source);

        assert!(catalog.get("lang").is_comment_line("# still a comment"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[toy]\nkeywords = begin|end\n").unwrap();

        let catalog = PatternCatalog::load(file.path()).unwrap();
        assert!(catalog.get("toy").keywords.contains("begin"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.defs");

        assert!(PatternCatalog::load(&missing).is_err());
    }
}

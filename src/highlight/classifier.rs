//! Atom classifier
//!
//! Assigns each atom a highlight category by consulting the catalog entry
//! for the atom's language. Classification is a pure function of the atom
//! and the entry.

use crate::catalog::CatalogEntry;

use super::atom::{Atom, AtomKind, Category};
use super::tokenizer::tokenize;

/// An atom together with its assigned category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedAtom<'a> {
    /// The underlying atom
    pub atom: Atom<'a>,
    /// The highlight category
    pub category: Category,
}

/// Classify one atom against a catalog entry
///
/// Whitespace is never classified. Comment atoms are always `comment`.
/// Everything else is checked in fixed priority order: keyword first, then
/// operator, then literal patterns; keyword wins when a catalog lists the
/// same text under more than one intent.
pub fn classify(atom: &Atom<'_>, entry: &CatalogEntry) -> Category {
    match atom.kind {
        AtomKind::Whitespace => Category::Default,
        AtomKind::Comment => Category::Comment,
        _ => {
            if entry.keywords.contains(atom.text) {
                Category::Keyword
            } else if entry.operators.contains(atom.text) {
                Category::Operator
            } else if entry.matches_literal(atom.text) {
                Category::Literal
            } else {
                Category::Default
            }
        }
    }
}

/// Tokenize and classify one line of content
///
/// Runs the whole-line comment precheck first: when the entry's comment
/// pattern matches from the start of the content, the entire line becomes a
/// single comment atom and the per-atom scan is skipped.
pub fn classify_line<'a>(entry: &CatalogEntry, content: &'a str) -> Vec<ClassifiedAtom<'a>> {
    let atoms = if !content.is_empty() && entry.is_comment_line(content) {
        vec![Atom::new(AtomKind::Comment, content)]
    } else {
        tokenize(content)
    };

    atoms
        .into_iter()
        .map(|atom| ClassifiedAtom {
            category: classify(&atom, entry),
            atom,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PatternCatalog;

    fn python_catalog() -> PatternCatalog {
        PatternCatalog::parse(
            "[python]\n\
             keywords = def|return\n\
             operators = = | ( | ) | :\n\
             literals = \\d+ | \\d+\\.\\d+ | \"[^\"]*\"\n\
             comments = #.*\n",
        )
    }

    fn categories<'a>(entry: &CatalogEntry, content: &'a str) -> Vec<(&'a str, Category)> {
        classify_line(entry, content)
            .into_iter()
            .map(|c| (c.atom.text, c.category))
            .collect()
    }

    #[test]
    fn test_keyword_scenario() {
        let catalog = python_catalog();
        let entry = catalog.get("python");

        let classified = categories(entry, "def f(): return 1");
        assert_eq!(
            classified,
            vec![
                ("def", Category::Keyword),
                (" ", Category::Default),
                ("f", Category::Default),
                ("():", Category::Default),
                (" ", Category::Default),
                ("return", Category::Keyword),
                (" ", Category::Default),
                ("1", Category::Literal),
            ]
        );
    }

    #[test]
    fn test_operator_listed() {
        let catalog = python_catalog();
        let entry = catalog.get("python");

        // "=" is listed; a maximal run that is not listed stays default
        assert_eq!(classify(&Atom::new(AtomKind::Operator, "="), entry), Category::Operator);
        assert_eq!(classify(&Atom::new(AtomKind::Operator, "():"), entry), Category::Default);
    }

    #[test]
    fn test_keyword_beats_literal() {
        let catalog = PatternCatalog::parse(
            "[odd]\nkeywords = 42\nliterals = \\d+\ncomments = #.*\n",
        );
        let entry = catalog.get("odd");

        // Same text listed as keyword and matching a literal pattern:
        // keyword wins
        assert_eq!(classify(&Atom::new(AtomKind::Number, "42"), entry), Category::Keyword);
        assert_eq!(classify(&Atom::new(AtomKind::Number, "7"), entry), Category::Literal);
    }

    #[test]
    fn test_string_literal_raw_text_match() {
        let catalog = python_catalog();
        let entry = catalog.get("python");

        // Literal patterns match the raw atom text, quotes included
        assert_eq!(
            classify(&Atom::new(AtomKind::String, "\"abc\""), entry),
            Category::Literal
        );
        // Unterminated string: no literal pattern accepts it
        assert_eq!(
            classify(&Atom::new(AtomKind::String, "\"abc"), entry),
            Category::Default
        );
    }

    #[test]
    fn test_comment_precheck() {
        let catalog = python_catalog();
        let entry = catalog.get("python");

        let classified = categories(entry, "# full line comment");
        assert_eq!(classified, vec![("# full line comment", Category::Comment)]);
    }

    #[test]
    fn test_trailing_comment() {
        let catalog = python_catalog();
        let entry = catalog.get("python");

        let classified = categories(entry, "x = 1 # note");
        assert_eq!(
            classified,
            vec![
                ("x", Category::Default),
                (" ", Category::Default),
                ("=", Category::Operator),
                (" ", Category::Default),
                ("1", Category::Literal),
                (" ", Category::Default),
                ("# note", Category::Comment),
            ]
        );
    }

    #[test]
    fn test_default_language_safety() {
        let catalog = python_catalog();
        let entry = catalog.get("no-such-language");

        for (text, category) in categories(entry, "def f(): return 1") {
            assert_eq!(category, Category::Default, "atom {text:?} was marked");
        }
        // The default comment pattern still applies
        assert_eq!(
            categories(entry, "# comment"),
            vec![("# comment", Category::Comment)]
        );
        assert_eq!(
            categories(entry, "x = 1 # tail").last().copied(),
            Some(("# tail", Category::Comment))
        );
    }

    #[test]
    fn test_classification_idempotent() {
        let catalog = python_catalog();
        let entry = catalog.get("python");
        let atom = Atom::new(AtomKind::Word, "def");

        assert_eq!(classify(&atom, entry), classify(&atom, entry));
    }
}

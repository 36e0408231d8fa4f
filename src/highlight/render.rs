//! Line renderer and document assembler
//!
//! Reassembles classified atoms into marked-up text. Marked atoms are
//! wrapped in `<span class='CATEGORY'>` markers; whitespace, unmarked atoms,
//! and line endings pass through byte-for-byte, so stripping the markers
//! reproduces the input exactly.

use crate::catalog::CatalogEntry;
use crate::line::split_lines;

use super::classifier::{classify_line, ClassifiedAtom};

/// Render one line of classified atoms, then append its ending verbatim
///
/// Atom text is inserted into the markup verbatim: markup-significant
/// characters in the input are not escaped. Embedders that feed hostile
/// input into an HTML context must escape upstream.
pub fn render_line(atoms: &[ClassifiedAtom<'_>], ending: &str) -> String {
    let mut out = String::new();

    for classified in atoms {
        if classified.category.is_marked() {
            out.push_str("<span class='");
            out.push_str(classified.category.name());
            out.push_str("'>");
            out.push_str(classified.atom.text);
            out.push_str("</span>");
        } else {
            out.push_str(classified.atom.text);
        }
    }

    out.push_str(ending);
    out
}

/// Highlight a whole document body against one catalog entry
///
/// Splits the text into lines, runs the per-line pipeline on each, and
/// concatenates the rendered lines in order.
pub fn render_body(entry: &CatalogEntry, text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for line in split_lines(text) {
        let atoms = classify_line(entry, line.content);
        out.push_str(&render_line(&atoms, line.ending));
    }

    out
}

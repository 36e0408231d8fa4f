//! Line tokenizer
//!
//! Splits one line of content into an ordered sequence of atoms. The scan
//! walks a byte cursor left to right and takes the longest match among the
//! atom kinds at each position, in fixed precedence: whitespace, string,
//! number, word, operator run, `#`-comment. Characters outside every kind
//! become one-character operator atoms, so the atoms always cover the whole
//! line.

use super::atom::{Atom, AtomKind};

/// Characters that form operator/punctuation runs
///
/// A maximal run over this set is a single atom; it is never split into
/// known multi-character operators.
const OPERATOR_CHARS: &str = "+-*/%=<>!&|^~()[]{},:;.?@";

/// Split line content (ending already stripped) into atoms
pub fn tokenize(content: &str) -> Vec<Atom<'_>> {
    let mut atoms = Vec::new();
    let mut pos = 0;

    while pos < content.len() {
        let rest = &content[pos..];
        let ch = rest.chars().next().expect("cursor is on a char boundary");

        let (kind, len) = if ch == ' ' || ch == '\t' {
            (AtomKind::Whitespace, scan_while(rest, |c| c == ' ' || c == '\t'))
        } else if ch == '"' || ch == '\'' {
            (AtomKind::String, scan_string(rest, ch))
        } else if ch.is_ascii_digit() {
            (AtomKind::Number, scan_number(rest))
        } else if ch == '_' || ch.is_alphabetic() {
            (AtomKind::Word, scan_while(rest, |c| c == '_' || c.is_alphanumeric()))
        } else if ch == '#' {
            // Trailing comment: consumes the remainder of the line
            (AtomKind::Comment, rest.len())
        } else if OPERATOR_CHARS.contains(ch) {
            (AtomKind::Operator, scan_while(rest, |c| OPERATOR_CHARS.contains(c)))
        } else {
            // Unrecognized character: one-character operator atom
            (AtomKind::Operator, ch.len_utf8())
        };

        atoms.push(Atom::new(kind, &content[pos..pos + len]));
        pos += len;
    }

    atoms
}

/// Length in bytes of the run at the start of `text` matching `pred`
fn scan_while(text: &str, pred: impl Fn(char) -> bool) -> usize {
    text.chars()
        .take_while(|&c| pred(c))
        .map(char::len_utf8)
        .sum()
}

/// Length of a quoted string starting at `text`
///
/// A backslash protects the following character from terminating the
/// string. An unterminated string extends to the end of the line.
fn scan_string(text: &str, quote: char) -> usize {
    let mut chars = text.char_indices().skip(1);

    while let Some((i, c)) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if c == quote {
            return i + c.len_utf8();
        }
    }

    text.len()
}

/// Length of a numeric literal starting at `text`
///
/// Digits, optionally a decimal point followed by more digits. No exponent
/// and no sign; signs are tokenized as operator atoms.
fn scan_number(text: &str) -> usize {
    let digits = scan_while(text, |c| c.is_ascii_digit());
    let rest = &text[digits..];

    let mut chars = rest.chars();
    if chars.next() == Some('.') && chars.next().is_some_and(|c| c.is_ascii_digit()) {
        let fraction = scan_while(&rest[1..], |c| c.is_ascii_digit());
        digits + 1 + fraction
    } else {
        digits
    }
}

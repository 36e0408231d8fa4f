//! Line representation and splitting
//!
//! A line is the text content before its line ending plus the exact ending
//! byte sequence that followed it. Endings are carried through the pipeline
//! untouched: they are never matched against patterns and are re-emitted
//! verbatim, so output reassembles byte-for-byte.

/// A single line of input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Text content before the line ending
    pub content: &'a str,
    /// The exact ending: "\r\n", "\n", "\r", or "" for a final line
    /// without a trailing newline
    pub ending: &'a str,
}

impl<'a> Line<'a> {
    /// Create a line from content and ending slices
    pub fn new(content: &'a str, ending: &'a str) -> Self {
        Self { content, ending }
    }

    /// Check if the line has no content (it may still have an ending)
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Split text into lines, preserving each line's exact ending
///
/// All three newline conventions are recognized ("\r\n", "\n", "\r").
/// Concatenating `content` and `ending` of every line in order reproduces
/// the input exactly.
pub fn split_lines(text: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(Line::new(&text[start..i], &text[i..i + 1]));
                i += 1;
                start = i;
            }
            b'\r' => {
                let end = if bytes.get(i + 1) == Some(&b'\n') { i + 2 } else { i + 1 };
                lines.push(Line::new(&text[start..i], &text[i..end]));
                i = end;
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < text.len() {
        lines.push(Line::new(&text[start..], ""));
    }

    lines
}

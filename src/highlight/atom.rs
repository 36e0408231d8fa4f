//! Atom and category model
//!
//! An atom is a maximal contiguous substring of one line, classified into a
//! lexical kind by the tokenizer. A category is the highlight classification
//! the classifier assigns to an atom.

/// Lexical kinds produced by the tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomKind {
    /// Run of spaces and tabs
    Whitespace,
    /// Quoted string, delimiters included
    String,
    /// Numeric literal (digits, optional decimal part)
    Number,
    /// Identifier-shaped word
    Word,
    /// Run of operator and punctuation characters
    Operator,
    /// `#` through end of line
    Comment,
}

/// One atom of a line
///
/// `text` is an exact substring of the line including any matched
/// delimiters and excluding the line ending. The atoms of a line partition
/// its content completely: no characters are dropped or duplicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Atom<'a> {
    /// Lexical kind
    pub kind: AtomKind,
    /// Exact substring of the line
    pub text: &'a str,
}

impl<'a> Atom<'a> {
    /// Create a new atom
    pub fn new(kind: AtomKind, text: &'a str) -> Self {
        Self { kind, text }
    }
}

/// Highlight categories assigned by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Listed in the catalog's keyword set
    Keyword,
    /// Listed in the catalog's operator set
    Operator,
    /// Full match of a catalog literal pattern
    Literal,
    /// Comment atom or whole comment line
    Comment,
    /// No marker; rendered verbatim
    Default,
}

impl Category {
    /// Get the marker name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::Operator => "operator",
            Category::Literal => "literal",
            Category::Comment => "comment",
            Category::Default => "none",
        }
    }

    /// Parse a category from its marker name (for theme loading)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "keyword" => Some(Category::Keyword),
            "operator" => Some(Category::Operator),
            "literal" => Some(Category::Literal),
            "comment" => Some(Category::Comment),
            "none" => Some(Category::Default),
            _ => None,
        }
    }

    /// Whether atoms of this category are wrapped in a marker
    pub fn is_marked(&self) -> bool {
        !matches!(self, Category::Default)
    }
}

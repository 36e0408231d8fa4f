//! hilite - a configurable lexical highlighter
//!
//! Given source text and a per-language pattern catalog (keywords,
//! operators, literal patterns, comment pattern), hilite splits each line
//! into lexical atoms, classifies every atom into a highlight category, and
//! re-emits the text with category markers. Whitespace and line endings are
//! preserved byte-for-byte; languages absent from the catalog render with
//! comment highlighting only, never an error.
//!
//! The core pipeline is pure and synchronous. File I/O, the CLI, and the
//! HTML page wrapper are thin collaborators around it:
//!
//! ```
//! use hilite::{Highlighter, PatternCatalog};
//!
//! let catalog = PatternCatalog::parse(
//!     "[python]\nkeywords = def|return\nliterals = \\d+\ncomments = #.*\n",
//! );
//! let highlighter = Highlighter::new(catalog);
//!
//! let body = highlighter.highlight("python", "def f(): return 1\n");
//! assert!(body.contains("<span class='keyword'>def</span>"));
//! ```

pub mod builtin;
pub mod catalog;
pub mod error;
pub mod highlight;
pub mod html;
pub mod line;
pub mod theme;

pub use catalog::{CatalogEntry, PatternCatalog};
pub use error::{HighlightError, Result};
pub use highlight::{Atom, AtomKind, Category, ClassifiedAtom, Highlighter};
pub use line::{split_lines, Line};
pub use theme::Theme;

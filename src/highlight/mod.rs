//! Lexical highlighting pipeline
//!
//! This module holds the core pipeline:
//! - Atom and category model
//! - Tokenizer (one line into atoms)
//! - Classifier (atoms into highlight categories)
//! - Line renderer and document assembler
//! - Highlighter coordinator

mod atom;
mod classifier;
mod manager;
mod render;
mod tokenizer;

pub use atom::{Atom, AtomKind, Category};
pub use classifier::{classify, classify_line, ClassifiedAtom};
pub use manager::Highlighter;
pub use render::{render_body, render_line};
pub use tokenizer::tokenize;

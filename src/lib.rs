//! Lists function and class definitions in source files, with line ranges.
//!
//! Parsing and pattern matching are done by tree-sitter; this crate maps file
//! extensions to grammars, runs one fixed query per grammar, walks directories,
//! and renders the result as a JSON report keyed by file path.

pub mod cli;
pub mod extractor;
pub mod types;
pub mod walker;

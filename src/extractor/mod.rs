pub mod languages;
pub mod queries;

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;
use tree_sitter::{Node, Parser, Query, QueryCursor, StreamingIterator};

use crate::types::{Definition, DefinitionKind, Entry};

use languages::Grammar;
use queries::query_source;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// No grammar could be bound to the linked tree-sitter runtime.
    #[error("tree-sitter runtime unavailable")]
    ParserUnavailable,

    #[error("invalid {grammar} query: {source}")]
    Query {
        grammar: &'static str,
        #[source]
        source: tree_sitter::QueryError,
    },
}

struct Loaded {
    parser: Parser,
    query: Query,
}

/// Extracts function and class definitions from source files using tree-sitter.
#[derive(Default)]
pub struct Extractor {
    /// Parser and compiled query per grammar; `None` when the grammar cannot extract.
    loaded: HashMap<Grammar, Option<Loaded>>,
}

impl Extractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract definitions from a file on disk.
    ///
    /// Grammars without a query (C, C++) and unavailable grammars yield an empty
    /// list without touching the file. A read failure becomes a single error entry.
    pub fn extract_file(&mut self, path: &Path, grammar: Grammar) -> Vec<Entry> {
        match self.loaded(grammar) {
            Ok(Some(_)) => {}
            Ok(None) => {
                tracing::debug!(
                    path = %path.display(),
                    grammar = grammar.name(),
                    "no query, skipping"
                );
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!("{e}");
                return Vec::new();
            }
        }

        let content = match std::fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                tracing::debug!(path = %path.display(), "read failed: {e}");
                return vec![Entry::error(e.to_string())];
            }
        };

        match self.extract_source(&content, grammar) {
            Ok(defs) => defs.into_iter().map(Entry::from).collect(),
            Err(e) => {
                tracing::warn!(path = %path.display(), "{e}");
                Vec::new()
            }
        }
    }

    /// Extract definitions from source bytes.
    ///
    /// Malformed source still parses into a best-effort tree, so syntax errors
    /// only drop the definitions tree-sitter could not recover.
    pub fn extract_source(
        &mut self,
        source: &[u8],
        grammar: Grammar,
    ) -> Result<Vec<Definition>, ExtractError> {
        let Some(loaded) = self.loaded(grammar)? else {
            return Ok(Vec::new());
        };
        let Some(tree) = loaded.parser.parse(source, None) else {
            return Ok(Vec::new());
        };
        Ok(collect_definitions(&loaded.query, tree.root_node(), source))
    }

    fn loaded(&mut self, grammar: Grammar) -> Result<Option<&mut Loaded>, ExtractError> {
        if !self.loaded.contains_key(&grammar) {
            let slot = match (query_source(grammar), grammar.parser()) {
                (Some(source), Some(parser)) => {
                    let query = Query::new(&grammar.language(), source).map_err(|source| {
                        ExtractError::Query {
                            grammar: grammar.name(),
                            source,
                        }
                    })?;
                    Some(Loaded { parser, query })
                }
                _ => None,
            };
            self.loaded.insert(grammar, slot);
        }
        Ok(self.loaded.get_mut(&grammar).and_then(Option::as_mut))
    }
}

/// One definition per query match: name from the `*.name` capture, line span
/// from the `*.def` capture.
fn collect_definitions(query: &Query, root: Node, source: &[u8]) -> Vec<Definition> {
    let labels = query.capture_names();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(query, root, source);

    let mut defs = Vec::new();
    while let Some(m) = matches.next() {
        let mut name = None;
        let mut span = None;
        for capture in m.captures {
            let label = labels[capture.index as usize];
            if label.ends_with(".name") {
                name = DefinitionKind::from_label(label).map(|kind| (kind, capture.node));
            } else if label.ends_with(".def") {
                span = Some(capture.node);
            }
        }

        let Some((kind, name_node)) = name else {
            continue;
        };
        let span = span.unwrap_or(name_node);

        defs.push(Definition {
            kind,
            name: String::from_utf8_lossy(&source[name_node.byte_range()]).into_owned(),
            start_line: span.start_position().row + 1,
            end_line: span.end_position().row + 1,
        });
    }

    defs
}

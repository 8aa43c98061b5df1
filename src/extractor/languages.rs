use std::path::Path;

use tree_sitter::{Language, Parser};

use super::ExtractError;

/// Grammars known to the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grammar {
    Python,
    JavaScript,
    Go,
    C,
    Cpp,
}

impl Grammar {
    pub const ALL: [Grammar; 5] = [
        Grammar::Python,
        Grammar::JavaScript,
        Grammar::Go,
        Grammar::C,
        Grammar::Cpp,
    ];

    /// Grammar for a file extension (with leading dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            ".py" => Some(Grammar::Python),
            ".js" => Some(Grammar::JavaScript),
            ".go" => Some(Grammar::Go),
            ".c" | ".h" => Some(Grammar::C),
            ".cpp" | ".hpp" => Some(Grammar::Cpp),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        Self::from_extension(&extension(path))
    }

    pub fn name(self) -> &'static str {
        match self {
            Grammar::Python => "python",
            Grammar::JavaScript => "javascript",
            Grammar::Go => "go",
            Grammar::C => "c",
            Grammar::Cpp => "cpp",
        }
    }

    pub fn language(self) -> Language {
        match self {
            Grammar::Python => tree_sitter_python::LANGUAGE.into(),
            Grammar::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Grammar::Go => tree_sitter_go::LANGUAGE.into(),
            Grammar::C => tree_sitter_c::LANGUAGE.into(),
            Grammar::Cpp => tree_sitter_cpp::LANGUAGE.into(),
        }
    }

    /// Parser bound to this grammar, or `None` if the runtime rejects it.
    pub fn parser(self) -> Option<Parser> {
        let mut parser = Parser::new();
        match parser.set_language(&self.language()) {
            Ok(()) => Some(parser),
            Err(e) => {
                tracing::warn!(grammar = self.name(), "grammar unavailable: {e}");
                None
            }
        }
    }
}

/// File extension with leading dot, as typed (`"a.py"` -> `".py"`), or empty.
pub fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default()
}

/// Fail fast if no grammar at all can be bound to the linked tree-sitter runtime.
pub fn check_runtime() -> Result<(), ExtractError> {
    if Grammar::ALL.iter().any(|g| g.parser().is_some()) {
        Ok(())
    } else {
        Err(ExtractError::ParserUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions() {
        assert_eq!(Grammar::from_extension(".py"), Some(Grammar::Python));
        assert_eq!(Grammar::from_extension(".js"), Some(Grammar::JavaScript));
        assert_eq!(Grammar::from_extension(".go"), Some(Grammar::Go));
        assert_eq!(Grammar::from_extension(".h"), Some(Grammar::C));
        assert_eq!(Grammar::from_extension(".hpp"), Some(Grammar::Cpp));
    }

    #[test]
    fn unknown_extensions() {
        assert_eq!(Grammar::from_extension(".rs"), None);
        assert_eq!(Grammar::from_extension(".PY"), None);
        assert_eq!(Grammar::from_extension(""), None);
        assert_eq!(Grammar::from_path(Path::new("Makefile")), None);
    }

    #[test]
    fn from_path_uses_last_suffix() {
        assert_eq!(
            Grammar::from_path(Path::new("dir.go/src/lib.tar.py")),
            Some(Grammar::Python)
        );
        assert_eq!(extension(Path::new("notes.txt")), ".txt");
    }

    #[test]
    fn every_grammar_binds() {
        for grammar in Grammar::ALL {
            assert!(grammar.parser().is_some(), "{}", grammar.name());
        }
        assert!(check_runtime().is_ok());
    }
}

use std::collections::BTreeMap;

use serde::Serialize;

/// Kind of a definition. Go `type` declarations count as classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DefinitionKind {
    Function,
    Class,
}

impl DefinitionKind {
    /// Kind for a capture label such as `func.name` or `class.def`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.split('.').next()? {
            "func" => Some(Self::Function),
            "class" => Some(Self::Class),
            _ => None,
        }
    }
}

/// A function or class definition found in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Definition {
    #[serde(rename = "type")]
    pub kind: DefinitionKind,
    /// Identifier text of the definition.
    pub name: String,
    /// Start line (1-indexed).
    pub start_line: usize,
    /// End line (1-indexed, inclusive).
    pub end_line: usize,
}

/// One item of a file's report: a definition, or the reason the file could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    Definition(Definition),
    Error { error: String },
}

impl Entry {
    pub fn error(message: impl Into<String>) -> Self {
        Entry::Error {
            error: message.into(),
        }
    }
}

impl From<Definition> for Entry {
    fn from(def: Definition) -> Self {
        Entry::Definition(def)
    }
}

/// File path -> entries. Keys serialize in sorted order.
pub type Report = BTreeMap<String, Vec<Entry>>;

pub const EXIT_ERROR: i32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_label() {
        assert_eq!(
            DefinitionKind::from_label("func.name"),
            Some(DefinitionKind::Function)
        );
        assert_eq!(
            DefinitionKind::from_label("class.def"),
            Some(DefinitionKind::Class)
        );
        assert_eq!(DefinitionKind::from_label("other.name"), None);
    }

    #[test]
    fn definition_json_shape() {
        let entry = Entry::from(Definition {
            kind: DefinitionKind::Function,
            name: "foo".to_string(),
            start_line: 1,
            end_line: 2,
        });
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"type": "function", "name": "foo", "start_line": 1, "end_line": 2})
        );
    }

    #[test]
    fn error_json_shape() {
        let value = serde_json::to_value(Entry::error("Permission denied")).unwrap();
        assert_eq!(value, serde_json::json!({"error": "Permission denied"}));
    }
}

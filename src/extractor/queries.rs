use super::languages::Grammar;

/// Tree-sitter query source for a grammar.
///
/// Each pattern binds a `*.def` capture on the declaration and a `*.name`
/// capture on its identifier; the label prefix (`func`/`class`) picks the kind.
/// C and C++ are classified but have no query, so they yield no definitions.
pub fn query_source(grammar: Grammar) -> Option<&'static str> {
    Some(match grammar {
        Grammar::Python => {
            r#"
            (function_definition
                name: (identifier) @func.name) @func.def
            (class_definition
                name: (identifier) @class.name) @class.def
            "#
        }
        Grammar::JavaScript => {
            r#"
            (function_declaration
                name: (identifier) @func.name) @func.def
            (class_declaration
                name: (identifier) @class.name) @class.def
            "#
        }
        Grammar::Go => {
            r#"
            (function_declaration
                name: (identifier) @func.name) @func.def
            (type_declaration
                (type_spec
                    name: (type_identifier) @class.name) @class.def)
            "#
        }
        Grammar::C | Grammar::Cpp => return None,
    })
}

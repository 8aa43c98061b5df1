use std::io::{self, Write};

use anyhow::Result;

use crate::types::Report;

/// Print the report as 2-space indented JSON on stdout.
pub fn print_report(report: &Report) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::types::{Definition, DefinitionKind, Entry, Report};

    #[test]
    fn pretty_uses_two_space_indent() {
        let mut report = Report::new();
        report.insert(
            "a.py".to_string(),
            vec![Entry::from(Definition {
                kind: DefinitionKind::Function,
                name: "foo".to_string(),
                start_line: 1,
                end_line: 2,
            })],
        );

        let json = serde_json::to_string_pretty(&report).unwrap();
        let expected = r#"{
  "a.py": [
    {
      "type": "function",
      "name": "foo",
      "start_line": 1,
      "end_line": 2
    }
  ]
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn empty_report() {
        assert_eq!(serde_json::to_string_pretty(&Report::new()).unwrap(), "{}");
    }
}

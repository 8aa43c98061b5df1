use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::extractor::languages::Grammar;
use crate::extractor::Extractor;
use crate::types::Report;

/// Walk `root` recursively and extract definitions from every recognized file.
///
/// Files are visited one at a time in file-name order. Unrecognized extensions
/// and files with no definitions are left out of the report.
pub fn scan(root: &Path, extractor: &mut Extractor) -> Report {
    let mut report = Report::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!("skipping: {e}");
                continue;
            }
        };

        // Symlinked files count, symlinked directories are not descended
        let path = entry.path();
        let is_file = entry.file_type().is_file() || (entry.path_is_symlink() && path.is_file());
        if !is_file {
            continue;
        }

        let Some(grammar) = Grammar::from_path(path) else {
            continue;
        };

        tracing::debug!(path = %path.display(), grammar = grammar.name(), "extracting");
        let entries = extractor.extract_file(path, grammar);
        if !entries.is_empty() {
            report.insert(report_key(path), entries);
        }
    }

    report
}

/// Report for a single file: always exactly one key, even with no definitions.
pub fn extract_single(path: &Path, grammar: Grammar, extractor: &mut Extractor) -> Report {
    let mut report = Report::new();
    report.insert(report_key(path), extractor.extract_file(path, grammar));
    report
}

/// Path as shown in the report: no `.` components, no repeated or trailing separators.
fn report_key(path: &Path) -> String {
    let normalized: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if normalized.as_os_str().is_empty() {
        return ".".to_string();
    }
    normalized.to_string_lossy().into_owned()
}

//! Directory probe
//!
//! Glob-based check used by the badge endpoint: does a directory contain at
//! least one match for a pattern, excluding a fixed filename suffix?

use std::path::Path;

use glob::PatternError;
use log::debug;

/// Suffix excluded from probe matches. A directory holding only `.txt`
/// placeholders counts as "no real content yet".
pub const EXCLUDED_SUFFIX: &str = ".txt";

/// Reduces a caller-supplied glob to its final path segment, so patterns
/// can only match directly inside the probed directory.
pub fn glob_base(pattern: &str) -> &str {
    Path::new(pattern)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(pattern)
}

/// Returns whether `dir` contains at least one file matching `pattern`
/// whose name does not end with `excluded_suffix`.
///
/// Fails only on glob syntax errors; unreadable entries are skipped.
pub fn has_match_except(
    dir: &Path,
    pattern: &str,
    excluded_suffix: &str,
) -> Result<bool, PatternError> {
    let full_pattern = dir.join(pattern).to_string_lossy().into_owned();

    for entry in glob::glob(&full_pattern)? {
        match entry {
            Ok(path) => {
                if !path.to_string_lossy().ends_with(excluded_suffix) {
                    return Ok(true);
                }
            }
            Err(e) => debug!("Skipping unreadable glob entry: {}", e),
        }
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn glob_base_strips_directories() {
        assert_eq!(glob_base("report*"), "report*");
        assert_eq!(glob_base("sub/dir/report*"), "report*");
        assert_eq!(glob_base(".."), "..");
    }

    #[test]
    fn finds_match_outside_excluded_suffix() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("report.pdf")).unwrap();
        File::create(dir.path().join("report.txt")).unwrap();

        assert!(has_match_except(dir.path(), "report*", EXCLUDED_SUFFIX).unwrap());
    }

    #[test]
    fn only_excluded_matches_count_as_none() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("report.txt")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();

        assert!(!has_match_except(dir.path(), "report*", EXCLUDED_SUFFIX).unwrap());
    }

    #[test]
    fn no_matches_at_all() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!has_match_except(dir.path(), "report*", EXCLUDED_SUFFIX).unwrap());
    }

    #[test]
    fn bad_pattern_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(has_match_except(dir.path(), "[", EXCLUDED_SUFFIX).is_err());
    }
}

//! Path resolver
//!
//! Converts a caller-supplied relative name into an absolute candidate path
//! under the configured base directory.

use std::path::{Component, Path, PathBuf};

use crate::error::RequestError;

/// Lexically normalizes a path: drops `.` segments, collapses redundant
/// separators, and applies `..` against preceding normal components.
/// Leading `..` segments of a relative path are preserved; a `..` directly
/// under the root is dropped. An empty path cleans to `.`.
pub fn clean(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(comp),
            },
            _ => parts.push(comp),
        }
    }

    if parts.is_empty() {
        PathBuf::from(".")
    } else {
        parts.into_iter().collect()
    }
}

/// Lexically normalizes a caller-supplied name string.
pub fn clean_name(name: &str) -> PathBuf {
    clean(Path::new(name))
}

/// Resolves a request name to an absolute candidate path.
///
/// The absolute-path check runs on the original caller-supplied string, not
/// the cleaned one, so absolute syntax is rejected outright regardless of
/// how cleaning would normalize it. The joined result is cleaned but not
/// re-checked for containment: a relative name with enough leading `..`
/// segments still climbs above the base. That gap is a known, deliberate
/// compatibility choice and is pinned by regression tests.
pub fn resolve_name(base: &Path, name: &str) -> Result<PathBuf, RequestError> {
    if Path::new(name).is_absolute() {
        return Err(RequestError::InvalidName);
    }

    Ok(clean(&base.join(clean_name(name))))
}

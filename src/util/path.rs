//! Lexical path helpers

use std::path::{Component, Path, PathBuf};

/// Normalize a path without touching the file system.
///
/// `.` components are dropped and `..` pops the previous normal component.
/// Leading `..` on a relative path is kept; `..` at the root is discarded.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// `base.join(tail)` followed by [`normalize`]
pub fn join(base: &Path, tail: impl AsRef<Path>) -> PathBuf {
    normalize(&base.join(tail))
}

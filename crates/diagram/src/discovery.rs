//! Source file discovery
//!
//! Walks a tree in a fixed order: inside every directory, files first in
//! lexicographic order, then subdirectories in lexicographic order. Build
//! output directories are pruned without being entered.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Suffix of C# source files
pub const SOURCE_SUFFIX: &str = ".cs";
/// Suffix of generated sources (`Foo.g.cs`)
pub const GENERATED_SUFFIX: &str = ".g.cs";
/// Build output directory name; nothing beneath it is scanned
pub const BUILD_OUTPUT_DIR: &str = "obj";

// =============================================================================
// Pure predicates
// =============================================================================

/// Whether a file name selects the file for scanning
pub fn is_eligible_name(file_name: &str) -> bool {
    file_name.ends_with(SOURCE_SUFFIX) && !file_name.ends_with(GENERATED_SUFFIX)
}

/// Root-relative path with forward slashes on every platform
pub fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn walk_order(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

fn is_build_output_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == BUILD_OUTPUT_DIR
}

// =============================================================================
// I/O
// =============================================================================

/// Lazily yields eligible source files under `root` in walk order.
///
/// Unreadable directories are logged and skipped.
pub fn eligible_files(root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .sort_by(walk_order)
        .into_iter()
        .filter_entry(|e| !is_build_output_dir(e))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!("Skipping directory entry: {}", err);
                None
            }
        })
        .filter(|e| !e.file_type().is_dir() && is_eligible_name(&e.file_name().to_string_lossy()))
        .map(DirEntry::into_path)
}

/// Expands a leading `~` and anchors relative paths at the current directory
pub fn normalize_path(raw: &str) -> PathBuf {
    let expanded = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => match dirs::home_dir() {
            Some(home) => home.join(rest.trim_start_matches('/')),
            None => PathBuf::from(raw),
        },
        _ => PathBuf::from(raw),
    };

    if expanded.is_absolute() {
        expanded
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(&expanded))
            .unwrap_or(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_eligible_name() {
        assert!(is_eligible_name("Program.cs"));
        assert!(is_eligible_name("My.Service.cs"));
        assert!(!is_eligible_name("Program.g.cs"));
        assert!(!is_eligible_name("Program.csx"));
        assert!(!is_eligible_name("README.md"));
    }

    #[test]
    fn test_relative_path_uses_forward_slashes() {
        let root = Path::new("/work/src");
        let path = root.join("Models").join("User.cs");
        assert_eq!(relative_path(root, &path), "Models/User.cs");
        assert_eq!(relative_path(root, &root.join("A.cs")), "A.cs");
    }

    #[test]
    fn test_eligible_files_order_and_filters() {
        let dir = tempdir().expect("temp dir");
        let root = dir.path();
        fs::create_dir_all(root.join("b")).unwrap();
        fs::create_dir_all(root.join("a")).unwrap();
        fs::create_dir_all(root.join("obj/Debug")).unwrap();
        fs::create_dir_all(root.join("a/obj")).unwrap();
        fs::create_dir_all(root.join("objects")).unwrap();
        fs::write(root.join("z.cs"), "").unwrap();
        fs::write(root.join("m.cs"), "").unwrap();
        fs::write(root.join("m.g.cs"), "").unwrap();
        fs::write(root.join("notes.txt"), "").unwrap();
        fs::write(root.join("a/y.cs"), "").unwrap();
        fs::write(root.join("a/x.cs"), "").unwrap();
        fs::write(root.join("b/w.cs"), "").unwrap();
        fs::write(root.join("obj/Debug/Gen.cs"), "").unwrap();
        fs::write(root.join("a/obj/Nested.cs"), "").unwrap();
        fs::write(root.join("objects/Kept.cs"), "").unwrap();

        let found: Vec<_> = eligible_files(root)
            .map(|p| relative_path(root, &p))
            .collect();
        assert_eq!(found, vec!["m.cs", "z.cs", "a/x.cs", "a/y.cs", "b/w.cs", "objects/Kept.cs"]);
    }

    #[test]
    fn test_normalize_path_keeps_absolute() {
        assert_eq!(normalize_path("/workspace/src"), PathBuf::from("/workspace/src"));
    }

    #[test]
    fn test_normalize_path_makes_relative_absolute() {
        assert!(normalize_path("src").is_absolute());
    }

    #[test]
    fn test_normalize_path_expands_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(normalize_path("~/code"), home.join("code"));
            assert_eq!(normalize_path("~"), home);
        }
    }
}

//! System-app detection
//!
//! Lists applications bundled with the OS distribution by reading the
//! fixed system bundle directories. The resulting name set is used only
//! as a membership filter by the reporter.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Directories holding OS-bundled application bundles
pub const SYSTEM_APP_DIRS: &[&str] = &["/System/Applications", "/System/Applications/Utilities"];

/// Application bundle extension
pub const APP_BUNDLE_EXT: &str = "app";

/// Collect bundled application names from the fixed system directories
pub fn bundled_app_names() -> HashSet<String> {
    let dirs: Vec<PathBuf> = SYSTEM_APP_DIRS.iter().map(PathBuf::from).collect();
    bundled_app_names_in(&dirs)
}

/// Collect bundled application names from the given directories
///
/// Directories that do not exist are silently skipped. Entries without
/// the `.app` extension are ignored. Names are deduplicated across
/// directories.
pub fn bundled_app_names_in(dirs: &[PathBuf]) -> HashSet<String> {
    let mut names = HashSet::new();

    for dir in dirs {
        if !dir.exists() {
            continue;
        }

        if let Ok(entries) = fs::read_dir(dir) {
            for entry in entries.flatten() {
                if let Some(name) = bundle_name(&entry.path()) {
                    names.insert(name);
                }
            }
        }
    }

    names
}

/// Strip the bundle extension from a path, if it is an application bundle
fn bundle_name(path: &Path) -> Option<String> {
    if path.extension().is_some_and(|ext| ext == APP_BUNDLE_EXT) {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_collects_app_bundles() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("Safari.app")).unwrap();
        fs::create_dir(dir.path().join("Mail.app")).unwrap();
        fs::create_dir(dir.path().join("NotAnApp")).unwrap();
        fs::write(dir.path().join("README.txt"), "hi").unwrap();

        let names = bundled_app_names_in(&[dir.path().to_path_buf()]);
        assert_eq!(names.len(), 2);
        assert!(names.contains("Safari"));
        assert!(names.contains("Mail"));
        assert!(!names.contains("NotAnApp"));
    }

    #[test]
    fn test_missing_directory_is_skipped() {
        let names = bundled_app_names_in(&[PathBuf::from("/nonexistent/path/for/test")]);
        assert!(names.is_empty());
    }

    #[test]
    fn test_deduplicates_across_directories() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();
        fs::create_dir(a.path().join("Safari.app")).unwrap();
        fs::create_dir(b.path().join("Safari.app")).unwrap();
        fs::create_dir(b.path().join("Terminal.app")).unwrap();

        let names = bundled_app_names_in(&[a.path().to_path_buf(), b.path().to_path_buf()]);
        assert_eq!(names.len(), 2);
        assert!(names.contains("Safari"));
        assert!(names.contains("Terminal"));
    }
}

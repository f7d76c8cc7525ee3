use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::file::{self, FileRecord};

/// Configuration for collecting input files from the filesystem.
pub struct ScanConfig {
    /// Root directory to scan.
    pub root: PathBuf,
    /// Patterns to exclude (simple substring matching for now).
    pub exclude_patterns: Vec<String>,
}

impl ScanConfig {
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            exclude_patterns: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_excludes(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }
}

/// Collect candidate file paths under the scan root.
/// Always skips hidden directories (but not a hidden root itself).
#[must_use]
pub fn scan_paths(config: &ScanConfig) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    for entry in WalkDir::new(&config.root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            let path = e.path();
            if path.is_dir()
                && let Some(name) = path.file_name().and_then(|n| n.to_str())
                && name.starts_with('.')
                && path != config.root.as_path()
            {
                return false;
            }
            true
        })
        .filter_map(std::result::Result::ok)
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if is_excluded(path, &config.exclude_patterns) {
            continue;
        }
        paths.push(path.to_path_buf());
    }

    paths
}

fn is_excluded(path: &Path, patterns: &[String]) -> bool {
    let path_str = path.to_string_lossy();
    patterns.iter().any(|p| path_str.contains(p.as_str()))
}

/// Read scanned paths into [`FileRecord`]s, classifying each by extension.
///
/// Ids are injected here, sequential per run; the comparison engine never
/// generates them. Unreadable or non-UTF-8 files become warnings rather
/// than failing the run.
pub fn read_files(paths: &[PathBuf]) -> (Vec<FileRecord>, Vec<String>) {
    let mut records = Vec::with_capacity(paths.len());
    let mut warnings = Vec::new();

    for path in paths {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                warnings.push(format!("Failed to read {}: {}", path.display(), e));
                continue;
            }
        };
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let kind = file::content_type_for(&name);
        records.push(FileRecord::new(
            format!("f{}", records.len() + 1),
            name,
            kind,
            content,
        ));
    }

    (records, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn scans_files_recursively() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "hello").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub/b.py"), "x = 1").unwrap();

        let paths = scan_paths(&ScanConfig::new(tmp.path().to_path_buf()));
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn skips_hidden_directories() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();
        fs::write(tmp.path().join(".git/config"), "data").unwrap();
        fs::write(tmp.path().join("a.txt"), "hello").unwrap();

        let paths = scan_paths(&ScanConfig::new(tmp.path().to_path_buf()));
        assert_eq!(paths.len(), 1);
        assert!(paths[0].ends_with("a.txt"));
    }

    #[test]
    fn applies_exclude_patterns() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("vendor")).unwrap();
        fs::write(tmp.path().join("vendor/lib.js"), "var x;").unwrap();
        fs::write(tmp.path().join("app.js"), "var y;").unwrap();

        let config = ScanConfig::new(tmp.path().to_path_buf())
            .with_excludes(vec!["vendor".to_string()]);
        let paths = scan_paths(&config);
        assert_eq!(paths.len(), 1);
        assert!(paths[0].ends_with("app.js"));
    }

    #[test]
    fn reads_records_with_sequential_ids_and_types() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.py"), "x = 1").unwrap();
        fs::write(tmp.path().join("b.txt"), "hello world").unwrap();

        let paths = scan_paths(&ScanConfig::new(tmp.path().to_path_buf()));
        let (records, warnings) = read_files(&paths);
        assert!(warnings.is_empty());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "f1");
        assert_eq!(records[1].id, "f2");

        let kinds: Vec<&str> = records.iter().map(|r| r.kind.as_str()).collect();
        assert!(kinds.contains(&"Python"));
        assert!(kinds.contains(&"Text"));
    }

    #[test]
    fn non_utf8_file_becomes_a_warning() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("bin.dat"), [0xff, 0xfe, 0x00, 0x01]).unwrap();
        fs::write(tmp.path().join("ok.txt"), "fine").unwrap();

        let paths = scan_paths(&ScanConfig::new(tmp.path().to_path_buf()));
        let (records, warnings) = read_files(&paths);
        assert_eq!(records.len(), 1);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("bin.dat"));
    }
}

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration for a content-dupes analysis run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Similarity score at or above which a pair is flagged (0.0 to 1.0).
    pub flag_threshold: f64,
    /// Path patterns to exclude from scanning.
    pub exclude: Vec<String>,
    /// Exit code threshold: fail `check` if flagged pair count exceeds this.
    pub max_flagged: Option<usize>,
    /// Root path to analyze.
    pub root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            flag_threshold: 0.7,
            exclude: Vec::new(),
            max_flagged: None,
            root: PathBuf::from("."),
        }
    }
}

/// Config as stored in content-dupes.toml.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FileConfig {
    flag_threshold: Option<f64>,
    exclude: Option<Vec<String>>,
    max_flagged: Option<usize>,
}

impl Config {
    /// Load config with the following precedence:
    /// 1. CLI overrides (applied by the caller after this method)
    /// 2. content-dupes.toml in the scan root
    /// 3. Defaults
    #[must_use]
    pub fn load(root: &Path) -> Self {
        let mut config = Config {
            root: root.to_path_buf(),
            ..Default::default()
        };

        let config_path = root.join("content-dupes.toml");
        if config_path.exists()
            && let Ok(content) = std::fs::read_to_string(&config_path)
            && let Ok(file_config) = toml::from_str::<FileConfig>(&content)
        {
            config.apply_file_config(&file_config);
        }

        config
    }

    fn apply_file_config(&mut self, fc: &FileConfig) {
        if let Some(v) = fc.flag_threshold {
            self.flag_threshold = v;
        }
        if let Some(ref v) = fc.exclude {
            self.exclude = v.clone();
        }
        if let Some(v) = fc.max_flagged {
            self.max_flagged = Some(v);
        }
    }
}

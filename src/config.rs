//! Pitchlog configuration.
//!
//! Loaded from `~/.pitchlog/config.toml`. A missing file means defaults.
//!
//! The export directory is resolved through a chain:
//!
//! 1. `--out-dir <dir>` — explicit per-command override
//! 2. `PITCHLOG_EXPORT_DIR` env var
//! 3. `export-dir` in the config file
//! 4. `~/.pitchlog/exports`

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::{Deserialize, Serialize};

use crate::model::DEFAULT_PITCH_TYPE;
use crate::storage::Storage;

/// Environment variable overriding the export directory.
pub const EXPORT_DIR_ENV: &str = "PITCHLOG_EXPORT_DIR";

/// Pitchlog configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Where CSV exports are written.
    pub export_dir: Option<PathBuf>,

    /// Pitch type recorded when a pitch command leaves it out.
    pub default_pitch_type: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_dir: None,
            default_pitch_type: DEFAULT_PITCH_TYPE.to_string(),
        }
    }
}

impl Config {
    /// Load config from `~/.pitchlog/config.toml`, or defaults if absent.
    pub fn load() -> Result<Self, String> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific file, or defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(format!("failed to read {}: {e}", path.display())),
        };

        let config: Self = toml::from_str(&contents)
            .map_err(|e| format!("invalid config at {}: {e}", path.display()))?;

        if config.default_pitch_type.trim().is_empty() {
            return Err(format!(
                "default-pitch-type is empty in {}\n\
                 Remove it or set it to a pitch name like \"Fastball\".",
                path.display()
            ));
        }

        Ok(config)
    }

    /// The config file path: `~/.pitchlog/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".pitchlog").join("config.toml"))
    }

    /// Resolve the export directory from the flag, environment, and config.
    pub fn resolve_export_dir(&self, explicit: Option<&Path>) -> Result<PathBuf, String> {
        let from_env = env::var_os(EXPORT_DIR_ENV).map(PathBuf::from);
        self.resolve_export_dir_with(explicit, from_env)
    }

    fn resolve_export_dir_with(
        &self,
        explicit: Option<&Path>,
        from_env: Option<PathBuf>,
    ) -> Result<PathBuf, String> {
        // 1. Explicit --out-dir flag.
        if let Some(dir) = explicit {
            return Ok(dir.to_path_buf());
        }

        // 2. PITCHLOG_EXPORT_DIR environment variable.
        if let Some(dir) = from_env
            && !dir.as_os_str().is_empty()
        {
            return Ok(dir);
        }

        // 3. Config file.
        if let Some(dir) = &self.export_dir {
            return Ok(dir.clone());
        }

        // 4. Default under the home directory.
        Storage::default_root().ok_or_else(|| "could not determine home directory".to_string())
    }
}

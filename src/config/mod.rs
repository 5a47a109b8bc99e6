use crate::errors::{AppError, AppResult};
use crate::loader::{self, FileSource, SnapshotSources};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod settings;

pub use settings::{SettingsStore, SystemSettings};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    #[serde(default = "default_settings_file")]
    pub settings_file: String,
}

/// Paths of the JSON snapshot files, one per collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "default_attendance")]
    pub attendance: String,
    #[serde(default = "default_employees")]
    pub employees: String,
    #[serde(default = "default_departments")]
    pub departments: String,
    #[serde(default = "default_logs")]
    pub logs: String,
}

fn data_file(name: &str) -> String {
    Config::config_dir()
        .join("data")
        .join(format!("{name}.json"))
        .to_string_lossy()
        .to_string()
}

fn default_attendance() -> String {
    data_file(loader::ATTENDANCE)
}
fn default_employees() -> String {
    data_file(loader::EMPLOYEES)
}
fn default_departments() -> String {
    data_file(loader::DEPARTMENTS)
}
fn default_logs() -> String {
    data_file(loader::LOGS)
}
fn default_export_dir() -> String {
    ".".to_string()
}
fn default_settings_file() -> String {
    Config::config_dir()
        .join("settings.json")
        .to_string_lossy()
        .to_string()
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            attendance: default_attendance(),
            employees: default_employees(),
            departments: default_departments(),
            logs: default_logs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: SourcesConfig::default(),
            export_dir: default_export_dir(),
            settings_file: default_settings_file(),
        }
    }
}

/// Existence check of one configured snapshot file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCheck {
    pub name: &'static str,
    pub path: PathBuf,
    pub exists: bool,
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Load configuration from `path` (or the standard location), or return
    /// defaults if the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    fn source_paths(&self) -> [(&'static str, PathBuf); 4] {
        [
            (loader::ATTENDANCE, expand_tilde(&self.sources.attendance)),
            (loader::EMPLOYEES, expand_tilde(&self.sources.employees)),
            (loader::DEPARTMENTS, expand_tilde(&self.sources.departments)),
            (loader::LOGS, expand_tilde(&self.sources.logs)),
        ]
    }

    pub fn check(&self) -> Vec<SourceCheck> {
        self.source_paths()
            .into_iter()
            .map(|(name, path)| SourceCheck {
                name,
                exists: path.is_file(),
                path,
            })
            .collect()
    }

    pub fn snapshot_sources(&self) -> SnapshotSources {
        let [attendance, employees, departments, logs] =
            self.source_paths().map(|(name, path)| FileSource::new(name, path));

        SnapshotSources {
            attendance: Box::new(attendance),
            employees: Box::new(employees),
            departments: Box::new(departments),
            logs: Box::new(logs),
        }
    }

    pub fn export_dir(&self) -> PathBuf {
        expand_tilde(&self.export_dir)
    }

    pub fn settings_store(&self) -> SettingsStore {
        SettingsStore::new(expand_tilde(&self.settings_file))
    }
}

//! Persisted system settings: feature flags plus log retention.
//!
//! Read once at startup, written on every change. Stored values are merged
//! over [`SystemSettings::default`].

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const MIN_RETENTION_DAYS: u32 = 7;
pub const MAX_RETENTION_DAYS: u32 = 365;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemSettings {
    #[serde(rename = "enableAIFeatures")]
    pub enable_ai_features: bool,
    pub auto_sync_blockchain: bool,
    pub maintenance_mode: bool,
    pub enable_notifications: bool,
    pub data_retention_days: u32,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            enable_ai_features: true,
            auto_sync_blockchain: true,
            maintenance_mode: false,
            enable_notifications: true,
            data_retention_days: 90,
        }
    }
}

/// Toggleable feature flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Feature {
    Ai,
    BlockchainSync,
    Notifications,
    Maintenance,
}

impl Feature {
    pub fn label(self) -> &'static str {
        match self {
            Feature::Ai => "AI analysis",
            Feature::BlockchainSync => "Blockchain sync",
            Feature::Notifications => "Realtime notifications",
            Feature::Maintenance => "Maintenance mode",
        }
    }
}

impl SystemSettings {
    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::Ai => self.enable_ai_features,
            Feature::BlockchainSync => self.auto_sync_blockchain,
            Feature::Notifications => self.enable_notifications,
            Feature::Maintenance => self.maintenance_mode,
        }
    }

    fn flag_mut(&mut self, feature: Feature) -> &mut bool {
        match feature {
            Feature::Ai => &mut self.enable_ai_features,
            Feature::BlockchainSync => &mut self.auto_sync_blockchain,
            Feature::Notifications => &mut self.enable_notifications,
            Feature::Maintenance => &mut self.maintenance_mode,
        }
    }

    /// Enabled features, in fixed display order.
    pub fn active_features(&self) -> Vec<&'static str> {
        [
            Feature::Ai,
            Feature::BlockchainSync,
            Feature::Notifications,
            Feature::Maintenance,
        ]
        .into_iter()
        .filter(|f| self.is_enabled(*f))
        .map(Feature::label)
        .collect()
    }

    fn clamped(mut self) -> Self {
        self.data_retention_days = clamp_retention(self.data_retention_days);
        self
    }
}

pub fn clamp_retention(days: u32) -> u32 {
    days.clamp(MIN_RETENTION_DAYS, MAX_RETENTION_DAYS)
}

/// Owner of the settings file and its in-memory value.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    settings: SystemSettings,
}

impl SettingsStore {
    /// Create the store and read the file once. A missing or unreadable file
    /// yields defaults.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let settings = read_settings(&path);
        Self { path, settings }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> &SystemSettings {
        &self.settings
    }

    pub fn set_feature(&mut self, feature: Feature, enabled: bool) -> AppResult<()> {
        *self.settings.flag_mut(feature) = enabled;
        self.persist()
    }

    /// Store the retention, clamped into `[7, 365]`. Returns the stored value.
    pub fn set_retention_days(&mut self, days: u32) -> AppResult<u32> {
        self.settings.data_retention_days = clamp_retention(days);
        self.persist()?;
        Ok(self.settings.data_retention_days)
    }

    pub fn reset(&mut self) -> AppResult<()> {
        self.settings = SystemSettings::default();
        self.persist()
    }

    pub fn persist(&self) -> AppResult<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(&self.settings)?;
        fs::write(&self.path, json).map_err(|e| {
            AppError::Config(format!("cannot write {}: {e}", self.path.display()))
        })
    }
}

fn read_settings(path: &Path) -> SystemSettings {
    let Ok(raw) = fs::read_to_string(path) else {
        return SystemSettings::default();
    };

    match serde_json::from_str::<SystemSettings>(&raw) {
        Ok(s) => s.clamped(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable settings file");
            SystemSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_values_merge_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"maintenanceMode": true, "dataRetentionDays": 30}"#).unwrap();

        let store = SettingsStore::new(&path);
        let s = store.settings();
        assert!(s.maintenance_mode);
        assert_eq!(s.data_retention_days, 30);
        assert!(s.enable_ai_features);
        assert!(s.auto_sync_blockchain);
        assert!(s.enable_notifications);
    }

    #[test]
    fn corrupt_or_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        assert_eq!(SettingsStore::new(&path).settings(), &SystemSettings::default());

        fs::write(&path, "{not json").unwrap();
        assert_eq!(SettingsStore::new(&path).settings(), &SystemSettings::default());
    }

    #[test]
    fn every_change_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("settings.json");

        let mut store = SettingsStore::new(&path);
        store.set_feature(Feature::Maintenance, true).unwrap();
        assert_eq!(store.set_retention_days(1000).unwrap(), 365);

        let reread = SettingsStore::new(&path);
        assert!(reread.settings().maintenance_mode);
        assert_eq!(reread.settings().data_retention_days, 365);

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"enableAIFeatures\""));
        assert!(raw.contains("\"dataRetentionDays\": 365"));
    }

    #[test]
    fn retention_is_bounded_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"dataRetentionDays": 1}"#).unwrap();
        assert_eq!(SettingsStore::new(&path).settings().data_retention_days, 7);
    }

    #[test]
    fn active_features_in_fixed_order() {
        let mut s = SystemSettings::default();
        assert_eq!(
            s.active_features(),
            vec!["AI analysis", "Blockchain sync", "Realtime notifications"]
        );
        s.enable_ai_features = false;
        s.maintenance_mode = true;
        assert_eq!(
            s.active_features(),
            vec!["Blockchain sync", "Realtime notifications", "Maintenance mode"]
        );
    }
}

//! Snapshot sources: where each entity collection comes from.

use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;

/// A named collection endpoint returning a JSON body.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch(&self) -> AppResult<Value>;
}

/// JSON document on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    name: String,
    path: PathBuf,
}

impl FileSource {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

#[async_trait]
impl SnapshotSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> AppResult<Value> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| AppError::SourceUnavailable {
                name: self.name.clone(),
                reason: format!("{}: {e}", self.path.display()),
            })?;

        serde_json::from_slice(&bytes).map_err(|e| AppError::SourceUnavailable {
            name: self.name.clone(),
            reason: format!("{}: invalid JSON: {e}", self.path.display()),
        })
    }
}

/// In-memory body, or a failure when `body` is `None`.
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: String,
    body: Option<Value>,
}

impl StaticSource {
    pub fn new(name: impl Into<String>, body: Value) -> Self {
        Self {
            name: name.into(),
            body: Some(body),
        }
    }

    pub fn failing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: None,
        }
    }
}

#[async_trait]
impl SnapshotSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> AppResult<Value> {
        self.body.clone().ok_or_else(|| AppError::SourceUnavailable {
            name: self.name.clone(),
            reason: "source is offline".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[tokio::test]
    async fn file_source_reads_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"data": [{{"employee_did": "E1"}}]}}"#).unwrap();

        let src = FileSource::new("employees", file.path());
        let body = src.fetch().await.unwrap();
        assert_eq!(body["data"][0]["employee_did"], "E1");
    }

    #[tokio::test]
    async fn missing_file_is_source_unavailable() {
        let src = FileSource::new("attendance", "/definitely/not/here.json");
        let err = src.fetch().await.unwrap_err();
        assert!(matches!(err, AppError::SourceUnavailable { ref name, .. } if name == "attendance"));
    }

    #[tokio::test]
    async fn static_source_round_trip_and_failure() {
        let ok = StaticSource::new("logs", json!([1, 2]));
        assert_eq!(ok.fetch().await.unwrap(), json!([1, 2]));
        assert!(StaticSource::failing("logs").fetch().await.is_err());
    }
}

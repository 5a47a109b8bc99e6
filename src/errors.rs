//! Unified application error type.
//! Every fallible operation (config, settings, loader, export, cli) returns
//! AppError so the binary can report failures in one place.
//!
//! Data-shaped problems (join misses, zero denominators, empty filter
//! results) are never errors: they are absorbed where they occur.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Snapshot sources
    // ---------------------------
    #[error("Source '{name}' unavailable: {reason}")]
    SourceUnavailable { name: String, reason: String },

    // ---------------------------
    // Filter input
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    #[error("Invalid status filter: {0}")]
    InvalidStatus(String),

    #[error("Invalid on-chain filter: {0} (use all, onchain or offchain)")]
    InvalidPresence(String),

    // ---------------------------
    // Lookups
    // ---------------------------
    #[error("Department not found: {0}")]
    DepartmentNotFound(String),

    #[error("Transaction log not found: {0}")]
    LogNotFound(String),

    // ---------------------------
    // Config / settings
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Nothing to export: the filtered result set is empty")]
    EmptyExport,

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;

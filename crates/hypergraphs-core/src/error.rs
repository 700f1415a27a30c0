//! Error types and exit codes for hypergraphs
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (allocation, container invariant, I/O)
//! - 2: Usage error (bad flags/args, out-of-range N or p)
//! - 3: Configuration/data error (missing or malformed config file)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Config/data error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while growing clusters or driving the CLI
#[derive(Error, Debug)]
pub enum HypergraphError {
    // Usage / bad input errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown model: {0} (expected: hypercube or pxp)")]
    UnknownModel(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("invalid dimension {dimension}: must be between 1 and {max}")]
    InvalidDimension { dimension: u32, max: u32 },

    #[error("invalid concentration {0}: must lie in [0, 1]")]
    InvalidConcentration(f64),

    #[error("invalid start node {node}: graph has {node_count} nodes")]
    InvalidStart { node: usize, node_count: usize },

    #[error("invalid number of realisations: {0} (must be at least 1)")]
    InvalidRealisations(usize),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Config/data errors (exit code 3)
    #[error("config file not found: {path:?}")]
    ConfigNotFound { path: PathBuf },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    // Fatal engine failures (exit code 1)
    #[error("failed to allocate {buffer} ({elements} elements)")]
    AllocationFailed {
        buffer: &'static str,
        elements: usize,
    },

    #[error("{container} capacity exceeded ({capacity} entries)")]
    CapacityExceeded {
        container: &'static str,
        capacity: usize,
    },

    #[error("{container} underflow: removal from an empty container")]
    Underflow { container: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl HypergraphError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        HypergraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a buffer that could not be reserved
    pub fn allocation(buffer: &'static str, elements: usize) -> Self {
        HypergraphError::AllocationFailed { buffer, elements }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            HypergraphError::UnknownFormat(_)
            | HypergraphError::UnknownModel(_)
            | HypergraphError::DuplicateFormat
            | HypergraphError::UsageError(_)
            | HypergraphError::InvalidDimension { .. }
            | HypergraphError::InvalidConcentration(_)
            | HypergraphError::InvalidStart { .. }
            | HypergraphError::InvalidRealisations(_)
            | HypergraphError::InvalidValue { .. } => ExitCode::Usage,

            HypergraphError::ConfigNotFound { .. } | HypergraphError::Toml(_) => ExitCode::Data,

            HypergraphError::AllocationFailed { .. }
            | HypergraphError::CapacityExceeded { .. }
            | HypergraphError::Underflow { .. }
            | HypergraphError::Io(_)
            | HypergraphError::Json(_)
            | HypergraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Whether this error signals input rejected before any traversal began
    pub fn is_bad_input(&self) -> bool {
        self.exit_code() == ExitCode::Usage
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            HypergraphError::UnknownFormat(_) => "unknown_format",
            HypergraphError::UnknownModel(_) => "unknown_model",
            HypergraphError::DuplicateFormat => "duplicate_format",
            HypergraphError::UsageError(_) => "usage_error",
            HypergraphError::InvalidDimension { .. } => "invalid_dimension",
            HypergraphError::InvalidConcentration(_) => "invalid_concentration",
            HypergraphError::InvalidStart { .. } => "invalid_start",
            HypergraphError::InvalidRealisations(_) => "invalid_realisations",
            HypergraphError::InvalidValue { .. } => "invalid_value",
            HypergraphError::ConfigNotFound { .. } => "config_not_found",
            HypergraphError::Toml(_) => "toml_error",
            HypergraphError::AllocationFailed { .. } => "allocation_failed",
            HypergraphError::CapacityExceeded { .. } => "capacity_exceeded",
            HypergraphError::Underflow { .. } => "underflow",
            HypergraphError::Io(_) => "io_error",
            HypergraphError::Json(_) => "json_error",
            HypergraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for hypergraphs operations
pub type Result<T> = std::result::Result<T, HypergraphError>;

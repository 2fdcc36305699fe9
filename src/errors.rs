use std::path::PathBuf;
use thiserror::Error;

/// Input validation failures raised by the geometry core. All of them are detected before any
/// station is sampled, so a failed request never produces partial coordinates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("invalid NACA designation '{value}': {reason}")]
    InvalidDesignation { value: String, reason: String },

    #[error("invalid chord length {value}: chord length must be a positive finite number")]
    InvalidChordLength { value: f64 },

    #[error("invalid point count {value}: at least 2 points are required")]
    InvalidPointCount { value: usize },
}

/// Failures at the drawing-file boundary. These are kept apart from `GeometryError` because they
/// come from the file system or the drawing library, never from the airfoil math.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to write drawing '{path}': {source}")]
    ExportFailure {
        path: PathBuf,
        #[source]
        source: dxf::DxfError,
    },

    #[error("failed to write profile '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize profile: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("cannot export an airfoil without surface points")]
    EmptyProfile,
}

//! Error types for the chart geometry engine.
//!
//! Degenerate geometry (coincident points, NaN coordinates, zero-area
//! faces) is never an error: those faces are silently skipped. Errors are
//! reserved for invalid configuration, caught before the pipeline runs.

use thiserror::Error;

/// Errors that can occur while configuring or driving the engine.
#[derive(Error, Debug)]
pub enum ChartError {
    /// Scene settings are out of range.
    #[error("invalid scene settings: {0}")]
    InvalidSettings(String),

    /// A series has too few points for the requested operation.
    #[error("series needs at least {needed} points, got {got}")]
    NotEnoughPoints {
        /// Minimum number of points required.
        needed: usize,
        /// Number of points supplied.
        got: usize,
    },
}

/// Result type for chart engine operations.
pub type Result<T> = std::result::Result<T, ChartError>;

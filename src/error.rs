//! Errors raised while building a [TerrainGrid](crate::terrain_grid::TerrainGrid) or querying it.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a map, configuring a search or resolving coordinates.
#[derive(Debug, Error)]
pub enum GridError {
    /// Map dimensions outside of `1..=256` per axis.
    #[error("Invalid map dimensions {rows}x{cols} (each axis must be within 1..={})", crate::MAX_DIMENSION)]
    InvalidDimensions { rows: usize, cols: usize },

    /// A coordinate that does not address a cell of the grid.
    #[error("Coordinate ({x}, {y}) is outside of the {cols}x{rows} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        cols: usize,
        rows: usize,
    },

    /// A movement weight that is not a finite, positive number.
    #[error("Invalid movement weight {0} (must be finite and greater than 0)")]
    InvalidWeight(f64),

    /// The map source could not be read.
    #[error("Failed to read map {}: {source}", display_path(.path))]
    Io {
        /// The path that failed, if the source was a file.
        path: Option<PathBuf>,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => p.display().to_string(),
        None => "<reader>".to_owned(),
    }
}

/// Result type for grid and pathfinding operations.
pub type GridResult<T> = std::result::Result<T, GridError>;

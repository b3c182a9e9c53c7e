//! Geometry validation errors.

use thiserror::Error;

/// Rejected geometry. Boxes with non-finite coordinates or empty extents
/// would otherwise poison every containment and intersection test.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("coordinates must be finite (x: {x}, y: {y})")]
    NonFiniteCoordinate { x: f32, y: f32 },

    #[error(
        "half extents must be finite and positive (half_width: {half_width}, half_height: {half_height})"
    )]
    InvalidHalfExtents { half_width: f32, half_height: f32 },

    #[error("half extent range must be non-empty and start above zero (start: {start}, end: {end})")]
    InvalidHalfExtentRange { start: u32, end: u32 },
}

pub type GeometryResult<T> = Result<T, GeometryError>;

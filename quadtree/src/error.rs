use common::shapes::RegionId;
use common::GeometryError;
use thiserror::Error;

/// Why the root of a tree refused a point.
///
/// [`QuadTree::insert`](crate::quadtree::QuadTree::insert) reports the same
/// conditions as a plain `false`; this type is for callers that want to know
/// which check failed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuadtreeError {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(#[from] GeometryError),

    #[error("point lies outside the quadtree bounds (x: {x}, y: {y})")]
    OutOfBounds { x: f32, y: f32 },

    #[error("point references {0}, which the region lookup does not know")]
    UnknownRegion(RegionId),

    #[error("{0} does not overlap the quadtree bounds")]
    ParentOutsideBoundary(RegionId),

    #[error("region arena is full ({len} objects)")]
    RegionLimit { len: usize },

    #[error("no quadrant accepted the point (x: {x}, y: {y})")]
    Unplaceable { x: f32, y: f32 },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

use crate::error::{GeometryError, GeometryResult};
use rand::Rng;
use std::fmt;

/// Index of a game object inside the region arena that owns it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub u32);

impl RegionId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region#{}", self.0)
    }
}

/// A 2D coordinate. Corner points carry the id of the object they were
/// derived from; plain coordinates such as a query centre do not.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    parent: Option<RegionId>,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, parent: None }
    }

    pub fn with_parent(x: f32, y: f32, parent: RegionId) -> Self {
        Self {
            x,
            y,
            parent: Some(parent),
        }
    }

    pub fn parent(&self) -> Option<RegionId> {
        self.parent
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Integer rectangle handed to a renderer: top-left corner plus size.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct DisplayRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Axis-aligned box described by a centre and half extents.
///
/// The four sides are cached and kept in sync with the centre. Boxes built
/// with [`BoundingBox::new_object`] additionally cache their four corner
/// points, tagged with the owning object's id. Those corners describe the
/// object as it was when it was created and are not touched by
/// [`BoundingBox::set_center`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundingBox {
    center: Point,
    half_width: f32,
    half_height: f32,
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    corners: Option<[Point; 4]>,
}

impl BoundingBox {
    /// A cell or query window. No corner points are derived.
    pub fn new(center: Point, half_width: f32, half_height: f32) -> GeometryResult<Self> {
        validate_center(&center)?;
        validate_half_extents(half_width, half_height)?;
        Ok(Self::new_unchecked(center, half_width, half_height))
    }

    /// A game object. Its corners are derived once, here, and tagged with `id`.
    pub fn new_object(
        id: RegionId,
        center: Point,
        half_width: f32,
        half_height: f32,
    ) -> GeometryResult<Self> {
        let mut bounding_box = Self::new(center, half_width, half_height)?;
        bounding_box.corners = Some([
            Point::with_parent(bounding_box.left, bounding_box.top, id),
            Point::with_parent(bounding_box.left, bounding_box.bottom, id),
            Point::with_parent(bounding_box.right, bounding_box.top, id),
            Point::with_parent(bounding_box.right, bounding_box.bottom, id),
        ]);
        Ok(bounding_box)
    }

    // Callers guarantee finite centre and positive extents.
    fn new_unchecked(center: Point, half_width: f32, half_height: f32) -> Self {
        let mut bounding_box = Self {
            center,
            half_width,
            half_height,
            left: 0.0,
            right: 0.0,
            top: 0.0,
            bottom: 0.0,
            corners: None,
        };
        bounding_box.update_sides();
        bounding_box
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn half_width(&self) -> f32 {
        self.half_width
    }

    pub fn half_height(&self) -> f32 {
        self.half_height
    }

    pub fn left(&self) -> f32 {
        self.left
    }

    pub fn right(&self) -> f32 {
        self.right
    }

    pub fn top(&self) -> f32 {
        self.top
    }

    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    pub fn width(&self) -> f32 {
        self.half_width * 2.0
    }

    pub fn height(&self) -> f32 {
        self.half_height * 2.0
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    pub fn is_object(&self) -> bool {
        self.corners.is_some()
    }

    /// Moves the box. Sides follow the new centre; cached corners do not.
    pub fn set_center(&mut self, center: Point) -> GeometryResult<()> {
        validate_center(&center)?;
        self.center = center;
        self.update_sides();
        Ok(())
    }

    /// Inclusive on every edge: a point on a side or a corner is inside.
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }

    /// Strict overlap. Boxes that only share an edge or a corner do not
    /// intersect.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }

    /// Top-left, bottom-left, top-right, bottom-right for object boxes;
    /// empty for cells and query windows.
    pub fn corner_points(&self) -> &[Point] {
        match &self.corners {
            Some(corners) => corners,
            None => &[],
        }
    }

    /// The four quadrant cells in NW, NE, SW, SE order. Together they tile
    /// this box exactly.
    pub fn quadrants(&self) -> [BoundingBox; 4] {
        let half_width = self.half_width / 2.0;
        let half_height = self.half_height / 2.0;
        let Point { x, y, .. } = self.center;
        let quadrant = |cx: f32, cy: f32| {
            Self::new_unchecked(Point::new(cx, cy), half_width, half_height)
        };
        [
            quadrant(x - half_width, y - half_height),
            quadrant(x + half_width, y - half_height),
            quadrant(x - half_width, y + half_height),
            quadrant(x + half_width, y + half_height),
        ]
    }

    pub fn to_display_rect(&self) -> DisplayRect {
        DisplayRect {
            x: self.left as i32,
            y: self.top as i32,
            width: self.width() as i32,
            height: self.height() as i32,
        }
    }

    pub fn random_point_inside<R: Rng>(&self, rng: &mut R) -> Point {
        Point::new(
            rng.gen_range(self.left..=self.right),
            rng.gen_range(self.top..=self.bottom),
        )
    }

    fn update_sides(&mut self) {
        self.left = self.center.x - self.half_width;
        self.right = self.center.x + self.half_width;
        self.top = self.center.y - self.half_height;
        self.bottom = self.center.y + self.half_height;
    }
}

fn validate_center(center: &Point) -> GeometryResult<()> {
    if center.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFiniteCoordinate {
            x: center.x,
            y: center.y,
        })
    }
}

fn validate_half_extents(half_width: f32, half_height: f32) -> GeometryResult<()> {
    let valid = half_width.is_finite()
        && half_height.is_finite()
        && half_width > 0.0
        && half_height > 0.0;
    if valid {
        Ok(())
    } else {
        Err(GeometryError::InvalidHalfExtents {
            half_width,
            half_height,
        })
    }
}

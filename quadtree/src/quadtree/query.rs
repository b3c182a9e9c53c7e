use super::node::{NodeIndex, ROOT};
use super::QuadTree;
use crate::regions::RegionLookup;
use common::shapes::{BoundingBox, Point, RegionId};
use fxhash::FxHashSet;
use tracing::trace;

impl QuadTree {
    /// Every stored point that lies in `range`, or whose object overlaps it.
    ///
    /// Results come back depth first in NW, NE, SW, SE order. An object can
    /// show up once per matching corner; see [`QuadTree::query_regions`] for
    /// the deduplicated form.
    pub fn query_range<R>(&self, range: &BoundingBox, regions: &R) -> Vec<Point>
    where
        R: RegionLookup + ?Sized,
    {
        let mut points = Vec::new();
        self.query_range_with(range, regions, |point| points.push(*point));
        trace!(matches = points.len(), "quadtree range query");
        points
    }

    pub fn query_range_with<R, F>(&self, range: &BoundingBox, regions: &R, mut f: F)
    where
        R: RegionLookup + ?Sized,
        F: FnMut(&Point),
    {
        self.query_from(ROOT, range, regions, &mut f);
    }

    /// Objects overlapping `range`, each listed once, in the order their
    /// first matching corner was found.
    pub fn query_regions<R>(&self, range: &BoundingBox, regions: &R) -> Vec<RegionId>
    where
        R: RegionLookup + ?Sized,
    {
        let mut seen = FxHashSet::default();
        let mut found = Vec::new();
        self.query_range_with(range, regions, |point| {
            record_parent(point, &mut seen, &mut found);
        });
        found
    }

    fn query_from<R, F>(&self, index: NodeIndex, range: &BoundingBox, regions: &R, f: &mut F)
    where
        R: RegionLookup + ?Sized,
        F: FnMut(&Point),
    {
        let node = &self.nodes[index];
        if !node.boundary.intersects(range) {
            return;
        }

        for point in &node.points {
            // The second test catches objects whose corners all miss a
            // small window that their body still covers.
            let parent_overlaps = point
                .parent()
                .and_then(|id| regions.region(id))
                .is_some_and(|parent| range.intersects(parent));
            if range.contains_point(point) || parent_overlaps {
                f(point);
            }
        }

        if let Some(children) = node.children {
            for child in children {
                self.query_from(child, range, regions, f);
            }
        }
    }
}

/// Appends `point`'s parent to `found` the first time that parent is seen.
pub(crate) fn record_parent(
    point: &Point,
    seen: &mut FxHashSet<RegionId>,
    found: &mut Vec<RegionId>,
) {
    if let Some(id) = point.parent() {
        if seen.insert(id) {
            found.push(id);
        }
    }
}

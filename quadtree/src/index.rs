//! Clear-and-rebuild driver for one query cycle.
//!
//! The object set may change arbitrarily between cycles, so instead of
//! updating the tree incrementally every cycle starts from an empty root,
//! indexes every corner of every object, then answers queries against that
//! snapshot. Node buffers are recycled by [`QuadTree::clear`], which keeps
//! the steady-state rebuild allocation free.

use crate::quadtree::{record_parent, Config, QuadTree};
use crate::regions::Regions;
use common::shapes::{BoundingBox, Point, RegionId};
use fxhash::FxHashSet;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RebuildStats {
    pub inserted: usize,
    pub rejected: usize,
}

#[derive(Debug, Clone, Default)]
pub struct QueryHits {
    /// Matching corner points, one per matching corner.
    pub points: Vec<Point>,
    /// Distinct objects behind `points`, in first-seen order.
    pub regions: Vec<RegionId>,
}

impl QueryHits {
    pub fn contains(&self, id: RegionId) -> bool {
        self.regions.contains(&id)
    }
}

pub struct SpatialIndex {
    tree: QuadTree,
}

impl SpatialIndex {
    pub fn new(universe: BoundingBox, config: Config) -> Self {
        Self {
            tree: QuadTree::new_with_config(universe, config),
        }
    }

    pub fn tree(&self) -> &QuadTree {
        &self.tree
    }

    pub fn universe(&self) -> &BoundingBox {
        self.tree.boundary()
    }

    /// Replaces the tree contents with the corners of every object in
    /// `regions`. Corners outside the universe are skipped.
    pub fn rebuild(&mut self, regions: &Regions) -> RebuildStats {
        self.tree.clear();

        let mut stats = RebuildStats::default();
        for (_, object) in regions.iter() {
            for corner in object.corner_points() {
                if self.tree.insert(*corner, regions) {
                    stats.inserted += 1;
                } else {
                    stats.rejected += 1;
                }
            }
        }

        if stats.rejected > 0 {
            warn!(
                inserted = stats.inserted,
                rejected = stats.rejected,
                "corner points fell outside the indexed universe"
            );
        }
        debug!(
            objects = regions.len(),
            points = stats.inserted,
            nodes = self.tree.node_count(),
            depth = self.tree.depth(),
            "rebuilt spatial index"
        );
        stats
    }

    pub fn query(&self, range: &BoundingBox, regions: &Regions) -> QueryHits {
        let mut hits = QueryHits::default();
        let mut seen = FxHashSet::default();
        self.tree.query_range_with(range, regions, |point| {
            hits.points.push(*point);
            record_parent(point, &mut seen, &mut hits.regions);
        });
        hits
    }

    /// Every object paired with whether it overlaps `range`, in arena order.
    pub fn classify(&self, range: &BoundingBox, regions: &Regions) -> Vec<(RegionId, bool)> {
        let hits: FxHashSet<RegionId> = self
            .tree
            .query_regions(range, regions)
            .into_iter()
            .collect();
        regions
            .iter()
            .map(|(id, _)| (id, hits.contains(&id)))
            .collect()
    }
}

//! Point quadtree over the corners of axis-aligned game objects.
//!
//! Nodes live in a flat arena and refer to their four children by index.
//! A node stores up to `node_capacity` points directly; the insert that finds
//! it full splits it into NW, NE, SW and SE quadrants and hands the point
//! down. Points stored before the split stay where they are, so queries
//! always scan a node's own points before descending.

use crate::error::{QuadtreeError, QuadtreeResult};
use crate::object_pool::ObjectPool;
use crate::regions::RegionLookup;
use common::shapes::{BoundingBox, Point, RegionId};
use common::GeometryError;
use tracing::{debug, trace};

mod config;
mod node;
mod query;

pub(crate) use query::record_parent;

pub use config::Config;
pub use node::NodeRef;
use node::{NodeIndex, QuadNode, ROOT};

enum Rejection {
    OutsideCell,
    UnknownRegion(RegionId),
    ParentDisjoint(RegionId),
}

pub struct QuadTree {
    nodes: Vec<QuadNode>,
    point_buffers: ObjectPool<Vec<Point>>,
    node_capacity: usize,
    config: Config,
}

impl QuadTree {
    pub fn new_with_config(boundary: BoundingBox, config: Config) -> Self {
        let node_capacity = config.node_capacity.max(1);
        let root = QuadNode::new(boundary, Vec::with_capacity(node_capacity));
        QuadTree {
            nodes: vec![root],
            point_buffers: ObjectPool::new(config.pool_size),
            node_capacity,
            config,
        }
    }

    pub fn new(boundary: BoundingBox) -> Self {
        Self::new_with_config(boundary, Config::default())
    }

    pub fn boundary(&self) -> &BoundingBox {
        &self.nodes[ROOT].boundary
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn node_capacity(&self) -> usize {
        self.node_capacity
    }

    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::new(self, ROOT)
    }

    /// Inserts a point, returning whether some node accepted it.
    ///
    /// A node refuses points outside its cell, and corner points whose
    /// object does not overlap its cell. At the root a refusal means the
    /// point is outside the indexed universe; it is logged and dropped.
    pub fn insert<R>(&mut self, point: Point, regions: &R) -> bool
    where
        R: RegionLookup + ?Sized,
    {
        let inserted = self.insert_into(ROOT, point, regions);
        if !inserted {
            debug!(
                x = point.x,
                y = point.y,
                parent = ?point.parent(),
                "quadtree rejected point"
            );
        }
        inserted
    }

    /// Like [`QuadTree::insert`], but says why the root refused the point.
    pub fn try_insert<R>(&mut self, point: Point, regions: &R) -> QuadtreeResult<()>
    where
        R: RegionLookup + ?Sized,
    {
        if !point.is_finite() {
            return Err(GeometryError::NonFiniteCoordinate {
                x: point.x,
                y: point.y,
            }
            .into());
        }
        match self.check(ROOT, &point, regions) {
            Ok(()) => {}
            Err(Rejection::OutsideCell) => {
                return Err(QuadtreeError::OutOfBounds {
                    x: point.x,
                    y: point.y,
                })
            }
            Err(Rejection::UnknownRegion(id)) => return Err(QuadtreeError::UnknownRegion(id)),
            Err(Rejection::ParentDisjoint(id)) => {
                return Err(QuadtreeError::ParentOutsideBoundary(id))
            }
        }
        if self.insert_into(ROOT, point, regions) {
            Ok(())
        } else {
            Err(QuadtreeError::Unplaceable {
                x: point.x,
                y: point.y,
            })
        }
    }

    fn check<R>(&self, index: NodeIndex, point: &Point, regions: &R) -> Result<(), Rejection>
    where
        R: RegionLookup + ?Sized,
    {
        let boundary = &self.nodes[index].boundary;
        if !boundary.contains_point(point) {
            return Err(Rejection::OutsideCell);
        }
        if let Some(id) = point.parent() {
            let parent = regions.region(id).ok_or(Rejection::UnknownRegion(id))?;
            // A corner can sit inside the cell while its object stays outside.
            if !boundary.intersects(parent) {
                return Err(Rejection::ParentDisjoint(id));
            }
        }
        Ok(())
    }

    fn insert_into<R>(&mut self, index: NodeIndex, point: Point, regions: &R) -> bool
    where
        R: RegionLookup + ?Sized,
    {
        if self.check(index, &point, regions).is_err() {
            return false;
        }

        let node = &mut self.nodes[index];
        if node.children.is_none() && node.points.len() < self.node_capacity {
            node.points.push(point);
            return true;
        }

        let children = self.nodes[index].children;
        let children = match children {
            Some(children) => children,
            None => self.subdivide(index),
        };

        children
            .into_iter()
            .any(|child| self.insert_into(child, point, regions))
    }

    // Split a leaf into four quadrants. Its own points are not redistributed.
    fn subdivide(&mut self, index: NodeIndex) -> [NodeIndex; 4] {
        let quadrants = self.nodes[index].boundary.quadrants();
        let first = self.nodes.len();
        for boundary in quadrants {
            let points = self.point_buffers.get();
            self.nodes.push(QuadNode::new(boundary, points));
        }
        let children = [first, first + 1, first + 2, first + 3];
        self.nodes[index].children = Some(children);
        trace!(node = index, nodes = self.nodes.len(), "subdivided quadtree node");
        children
    }

    /// Drops every point and every child, keeping only the root cell.
    pub fn clear(&mut self) {
        for node in self.nodes.drain(ROOT + 1..) {
            self.point_buffers.return_object(node.points);
        }
        let root = &mut self.nodes[ROOT];
        root.points.clear();
        root.children = None;
        trace!(pooled = self.point_buffers.len(), "cleared quadtree");
    }

    /// Number of stored points across all nodes.
    pub fn len(&self) -> usize {
        self.nodes.iter().map(|node| node.points.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.iter().all(|node| node.points.is_empty())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Levels below the root; a tree that never split has depth 0.
    pub fn depth(&self) -> usize {
        self.depth_of(ROOT)
    }

    fn depth_of(&self, index: NodeIndex) -> usize {
        match self.nodes[index].children {
            None => 0,
            Some(children) => {
                1 + children
                    .into_iter()
                    .map(|child| self.depth_of(child))
                    .max()
                    .unwrap_or(0)
            }
        }
    }

    // Cells in traversal order: a node, then its NW, NE, SW, SE subtrees
    pub fn all_node_bounding_boxes(&self, bounding_boxes: &mut Vec<BoundingBox>) {
        self.node_bounding_boxes(ROOT, bounding_boxes);
    }

    fn node_bounding_boxes(&self, index: NodeIndex, bounding_boxes: &mut Vec<BoundingBox>) {
        let node = &self.nodes[index];
        bounding_boxes.push(node.boundary);
        if let Some(children) = node.children {
            for child in children {
                self.node_bounding_boxes(child, bounding_boxes);
            }
        }
    }

    // Stored points in the same order the cells are visited
    pub fn all_points(&self, points: &mut Vec<Point>) {
        self.node_points(ROOT, points);
    }

    fn node_points(&self, index: NodeIndex, points: &mut Vec<Point>) {
        let node = &self.nodes[index];
        points.extend_from_slice(&node.points);
        if let Some(children) = node.children {
            for child in children {
                self.node_points(child, points);
            }
        }
    }
}

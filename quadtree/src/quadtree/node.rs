use super::QuadTree;
use common::shapes::{BoundingBox, Point};

pub(crate) type NodeIndex = usize;

pub(crate) const ROOT: NodeIndex = 0;

pub(crate) struct QuadNode {
    pub(crate) boundary: BoundingBox,
    pub(crate) points: Vec<Point>,
    // NW, NE, SW, SE
    pub(crate) children: Option<[NodeIndex; 4]>,
}

impl QuadNode {
    pub(crate) fn new(boundary: BoundingBox, points: Vec<Point>) -> Self {
        debug_assert!(points.is_empty());
        Self {
            boundary,
            points,
            children: None,
        }
    }
}

/// Read-only view of one node, for walking the cell structure.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a QuadTree,
    index: NodeIndex,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(tree: &'a QuadTree, index: NodeIndex) -> Self {
        Self { tree, index }
    }

    fn node(&self) -> &'a QuadNode {
        &self.tree.nodes[self.index]
    }

    pub fn boundary(&self) -> &'a BoundingBox {
        &self.node().boundary
    }

    /// Points stored directly in this node, in insertion order.
    pub fn points(&self) -> &'a [Point] {
        &self.node().points
    }

    pub fn is_subdivided(&self) -> bool {
        self.node().children.is_some()
    }

    /// NW, NE, SW, SE.
    pub fn children(&self) -> Option<[NodeRef<'a>; 4]> {
        let tree = self.tree;
        self.node()
            .children
            .map(|children| children.map(|index| NodeRef::new(tree, index)))
    }
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("boundary", self.boundary())
            .field("points", &self.points().len())
            .field("subdivided", &self.is_subdivided())
            .finish()
    }
}

//! Storage for the game objects whose corners get indexed.
//!
//! A corner point refers to its object by [`RegionId`], which is simply the
//! object's slot in a [`Regions`] arena. The arena must outlive every tree
//! holding those points; rebuilding the tree after the arena changes keeps
//! the ids valid.

use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::{BoundingBox, Point, RegionId};
use common::GeometryError;
use rand::Rng;
use std::ops::RangeInclusive;

/// Resolves the parent of a corner point.
pub trait RegionLookup {
    fn region(&self, id: RegionId) -> Option<&BoundingBox>;
}

#[derive(Debug, Clone, Default)]
pub struct Regions {
    boxes: Vec<BoundingBox>,
}

impl Regions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            boxes: Vec::with_capacity(capacity),
        }
    }

    /// Stores a new object and returns its id. The object's corners are
    /// derived here and tagged with that id.
    pub fn spawn(
        &mut self,
        center: Point,
        half_width: f32,
        half_height: f32,
    ) -> QuadtreeResult<RegionId> {
        let id = next_id(self.boxes.len())?;
        let object = BoundingBox::new_object(id, center, half_width, half_height)?;
        self.boxes.push(object);
        Ok(id)
    }

    /// Spawns `count` objects centred at random positions inside `universe`,
    /// each half extent drawn independently from `half_extents`.
    ///
    /// On error nothing is kept: the arena is left as it was on entry.
    pub fn spawn_random<R: Rng>(
        &mut self,
        rng: &mut R,
        universe: &BoundingBox,
        count: usize,
        half_extents: RangeInclusive<u32>,
    ) -> QuadtreeResult<Vec<RegionId>> {
        if half_extents.is_empty() || *half_extents.start() == 0 {
            return Err(GeometryError::InvalidHalfExtentRange {
                start: *half_extents.start(),
                end: *half_extents.end(),
            }
            .into());
        }
        let len = self.boxes.len();
        let mut ids = Vec::with_capacity(count);
        for _ in 0..count {
            let center = universe.random_point_inside(rng);
            let half_width = rng.gen_range(half_extents.clone()) as f32;
            let half_height = rng.gen_range(half_extents.clone()) as f32;
            match self.spawn(center, half_width, half_height) {
                Ok(id) => ids.push(id),
                Err(err) => {
                    self.boxes.truncate(len);
                    return Err(err);
                }
            }
        }
        Ok(ids)
    }

    pub fn get(&self, id: RegionId) -> Option<&BoundingBox> {
        self.boxes.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RegionId, &BoundingBox)> + '_ {
        self.boxes
            .iter()
            .enumerate()
            // `spawn` never lets the arena outgrow the id space.
            .map(|(index, object)| (RegionId(index as u32), object))
    }

    /// Drops every object. Ids handed out before are invalidated.
    pub fn clear(&mut self) {
        self.boxes.clear();
    }
}

fn next_id(len: usize) -> QuadtreeResult<RegionId> {
    u32::try_from(len)
        .map(RegionId)
        .map_err(|_| QuadtreeError::RegionLimit { len })
}

impl RegionLookup for Regions {
    fn region(&self, id: RegionId) -> Option<&BoundingBox> {
        self.get(id)
    }
}

impl RegionLookup for [BoundingBox] {
    fn region(&self, id: RegionId) -> Option<&BoundingBox> {
        self.get(id.index())
    }
}

impl RegionLookup for Vec<BoundingBox> {
    fn region(&self, id: RegionId) -> Option<&BoundingBox> {
        self.as_slice().region(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn ids_stop_at_the_u32_limit() {
        assert_eq!(next_id(0), Ok(RegionId(0)));
        assert_eq!(next_id(u32::MAX as usize), Ok(RegionId(u32::MAX)));
        assert_eq!(
            next_id(u32::MAX as usize + 1),
            Err(QuadtreeError::RegionLimit {
                len: u32::MAX as usize + 1
            })
        );
    }
}

//! Static obstacle geometry the cube probes against.
//!
//! Geometry is abstracted behind [`ObstacleGeometry`] so the roll logic never
//! cares how the world is stored. [`BlockWorld`] is the shipped
//! implementation: unit cells centered on integer coordinates, each tagged
//! with the [`Layers`] it occupies.

use std::collections::HashMap;
use serde::{Serialize, Deserialize};
use vek::*;


/// Bit set of world layers. Probes only report geometry whose layers
/// intersect the configured mask.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Layers(pub u32);

impl Layers {
    pub const NONE: Layers = Layers(0);
    pub const TERRAIN: Layers = Layers(1 << 0);
    pub const DECOR: Layers = Layers(1 << 1);
    pub const ALL: Layers = Layers(u32::MAX);

    pub const fn contains(self, other: Layers) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: Layers) -> bool {
        self.0 & other.0 != 0
    }
}

impl std::ops::BitOr for Layers {
    type Output = Layers;

    fn bitor(self, rhs: Layers) -> Layers {
        Layers(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for Layers {
    type Output = Layers;

    fn bitand(self, rhs: Layers) -> Layers {
        Layers(self.0 & rhs.0)
    }
}


/// Query surface for static obstacle geometry.
pub trait ObstacleGeometry {
    /// Whether geometry with a layer in `mask` lies within `max_dist` of
    /// `origin` along `dir`. The cell containing `origin` itself is never
    /// reported, so a probe cast from inside geometry does not self-hit.
    fn probe(&self, origin: Vec3<f32>, dir: Vec3<f32>, max_dist: f32, mask: Layers) -> bool;
}


/// The unit cell containing a point. Cells are centered on integer
/// coordinates, so this is componentwise rounding.
pub fn cell_of(p: Vec3<f32>) -> Vec3<i64> {
    p.map(|n| n.round() as i64)
}


/// Sparse grid of solid unit cells.
#[derive(Debug, Clone, Default)]
pub struct BlockWorld {
    cells: HashMap<Vec3<i64>, Layers>,
}

impl BlockWorld {
    pub fn new() -> Self {
        BlockWorld {
            cells: HashMap::new(),
        }
    }

    pub fn set(&mut self, cell: impl Into<Vec3<i64>>, layers: Layers) {
        self.cells.insert(cell.into(), layers);
    }

    pub fn clear(&mut self, cell: impl Into<Vec3<i64>>) {
        self.cells.remove(&cell.into());
    }

    pub fn layers_at(&self, cell: impl Into<Vec3<i64>>) -> Layers {
        self.cells.get(&cell.into()).copied().unwrap_or(Layers::NONE)
    }
}

impl ObstacleGeometry for BlockWorld {
    fn probe(&self, origin: Vec3<f32>, dir: Vec3<f32>, max_dist: f32, mask: Layers) -> bool {
        let origin_arr = origin.into_array();
        let dir_arr = dir.into_array();
        let mut cell = cell_of(origin).into_array();

        loop {
            // earliest boundary crossing out of the current cell, measured
            // along the ray from its true origin
            let mut enter: Option<(usize, f32)> = None;
            for axis in 0..3 {
                if dir_arr[axis] == 0.0 {
                    continue;
                }
                let bound = cell[axis] as f32 + 0.5 * dir_arr[axis].signum();
                let t = (bound - origin_arr[axis]) / dir_arr[axis];
                if enter.map(|(_, enter_t)| t < enter_t).unwrap_or(true) {
                    enter = Some((axis, t));
                }
            }
            let (axis, t) = match enter {
                Some(enter) => enter,
                // degenerate zero direction
                None => return false,
            };
            if t > max_dist {
                return false;
            }
            cell[axis] += dir_arr[axis].signum() as i64;
            if self.layers_at(cell).intersects(mask) {
                return true;
            }
        }
    }
}

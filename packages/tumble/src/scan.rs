//! Obstacle probing ahead of a roll.
//!
//! Up to four probes classify the terrain one cell ahead of the cube:
//!
//! - `forward` from the cube center along travel. A hit means a wall.
//! - `up`, only after a forward hit, from one unit above the center. A miss
//!   means the wall is one cell tall and can be climbed; a hit means fully
//!   blocked.
//! - `down`, only after a forward miss, straight down from one unit ahead.
//!   A hit means flat ground to roll onto.
//! - `bottom_down`, one unit below the `down` probe and OR'd with it. A hit
//!   without ground above means a one-level ledge to drop down; no hit
//!   anywhere means a void the cube refuses to roll into.

use crate::world::{Layers, ObstacleGeometry};
use cube_data::RollRule;
use vek::*;


/// Length of every obstacle probe: far enough to reach the adjacent cell,
/// short enough to never reach the cell beyond it.
pub const PROBE_DISTANCE: f32 = 0.75;


/// Results of the conditional probes for one direction.
///
/// Probes the decision tree does not demand are never cast and stay false.
/// Transient; recomputed on every roll attempt.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct ObstacleScan {
    pub forward: bool,
    pub up: bool,
    pub down: bool,
    pub bottom_down: bool,
}

/// Kind of roll the terrain ahead permits.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RollKind {
    /// Quarter turn onto the adjacent cell at the same elevation.
    Flat,
    /// Half turn up and over a one-cell-tall obstacle.
    Climb,
    /// Half turn down a one-level ledge.
    Drop,
}

/// Probe the terrain for a roll from `pos` along `rule.travel`.
pub fn scan<W: ObstacleGeometry>(
    world: &W,
    pos: Vec3<f32>,
    rule: &RollRule,
    mask: Layers,
) -> ObstacleScan {
    let mut info = ObstacleScan::default();
    info.forward = world.probe(pos, rule.travel, PROBE_DISTANCE, mask);
    if info.forward {
        info.up = world.probe(pos + Vec3::unit_y(), rule.travel, PROBE_DISTANCE, mask);
    } else {
        let ahead = pos + rule.travel;
        info.down = world.probe(ahead, -Vec3::unit_y(), PROBE_DISTANCE, mask);
        info.bottom_down = info.down
            || world.probe(ahead - Vec3::unit_y(), -Vec3::unit_y(), PROBE_DISTANCE, mask);
    }
    trace!(
        forward = info.forward,
        up = info.up,
        down = info.down,
        bottom_down = info.bottom_down,
        "obstacle scan",
    );
    info
}

impl ObstacleScan {
    /// What roll, if any, the probed terrain permits. `None` means blocked.
    pub fn classify(self) -> Option<RollKind> {
        if self.forward {
            if self.up {
                None
            } else {
                Some(RollKind::Climb)
            }
        } else if self.down {
            Some(RollKind::Flat)
        } else if self.bottom_down {
            Some(RollKind::Drop)
        } else {
            None
        }
    }
}

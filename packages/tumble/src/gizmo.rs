//! Debug visualization shapes, as plain data for whatever draws them.

use crate::{
    roll::Cube,
    scan::PROBE_DISTANCE,
};
use cube_data::{
    PerAnchor,
    RollRule,
    ANCHORS,
};
use vek::*;


pub const ANCHOR_MARKER_SIZE: f32 = 0.1;

/// A wire box marker.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GizmoBox {
    pub center: Vec3<f32>,
    pub size: f32,
}

/// A debug ray segment.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GizmoLine {
    pub start: Vec3<f32>,
    pub end: Vec3<f32>,
}

/// Markers at the cube's 8 anchors.
pub fn anchor_markers(cube: &Cube) -> PerAnchor<GizmoBox> {
    ANCHORS.map(|anchor| GizmoBox {
        center: cube.anchor_world(anchor),
        size: ANCHOR_MARKER_SIZE,
    })
}

/// The four probe segments a scan may cast from `pos` for one direction, in
/// scan order: forward, up, down, bottom-down.
pub fn scan_rays(pos: Vec3<f32>, rule: &RollRule) -> [GizmoLine; 4] {
    let up = Vec3::unit_y();
    let ahead = pos + rule.travel;
    [
        GizmoLine {
            start: pos,
            end: pos + rule.travel * PROBE_DISTANCE,
        },
        GizmoLine {
            start: pos + up,
            end: pos + up + rule.travel * PROBE_DISTANCE,
        },
        GizmoLine {
            start: ahead,
            end: ahead - up * PROBE_DISTANCE,
        },
        GizmoLine {
            start: ahead - up,
            end: ahead - up * (1.0 + PROBE_DISTANCE),
        },
    ]
}

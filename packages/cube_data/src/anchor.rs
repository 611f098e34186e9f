
use std::ops::{
    Index,
    IndexMut,
};
use vek::*;


per_enum!(
    Anchor,
    NUM_ANCHORS = 8,
    PerAnchor,
    ANCHORS,
    (
        BottomFront,
        BottomBack,
        BottomLeft,
        BottomRight,
        TopFront,
        TopBack,
        TopLeft,
        TopRight,
    ),
);

impl Anchor {
    /// Offset from the cube center to this anchor, the midpoint of a bottom
    /// or top edge of a box with the given half extents.
    pub fn local_offset(self, half_extents: Extent3<f32>) -> Vec3<f32> {
        let Extent3 { w, h, d } = half_extents;
        match self {
            Anchor::BottomFront => Vec3 { x: 0.0, y: -h, z: d },
            Anchor::BottomBack => Vec3 { x: 0.0, y: -h, z: -d },
            Anchor::BottomLeft => Vec3 { x: -w, y: -h, z: 0.0 },
            Anchor::BottomRight => Vec3 { x: w, y: -h, z: 0.0 },
            Anchor::TopFront => Vec3 { x: 0.0, y: h, z: d },
            Anchor::TopBack => Vec3 { x: 0.0, y: h, z: -d },
            Anchor::TopLeft => Vec3 { x: -w, y: h, z: 0.0 },
            Anchor::TopRight => Vec3 { x: w, y: h, z: 0.0 },
        }
    }
}

/// All 8 anchor offsets for a box with the given half extents. Computed once
/// at cube initialization, fixed thereafter.
pub fn local_anchors(half_extents: Extent3<f32>) -> PerAnchor<Vec3<f32>> {
    ANCHORS.map(|anchor| anchor.local_offset(half_extents))
}


#[test]
fn test_anchors_lie_on_edge_midpoints() {
    let half_extents = Extent3::new(0.5, 0.5, 0.5);
    for anchor in ANCHORS {
        let offset = anchor.local_offset(half_extents);
        // vertical component always at a face, lateral component at exactly
        // one face with the other centered
        assert_eq!(offset.y.abs(), 0.5);
        assert_eq!(offset.x.abs() + offset.z.abs(), 0.5);
    }
}

#[test]
fn test_bottom_top_pairs_mirror_vertically() {
    let half_extents = Extent3::new(0.5, 0.5, 0.5);
    let pairs = [
        (Anchor::BottomFront, Anchor::TopFront),
        (Anchor::BottomBack, Anchor::TopBack),
        (Anchor::BottomLeft, Anchor::TopLeft),
        (Anchor::BottomRight, Anchor::TopRight),
    ];
    for (bottom, top) in pairs {
        let b = bottom.local_offset(half_extents);
        let t = top.local_offset(half_extents);
        assert_eq!(Vec3::new(b.x, -b.y, b.z), t);
    }
}

#[test]
fn test_anchors_scale_with_half_extents() {
    let offset = Anchor::BottomRight.local_offset(Extent3::new(2.0, 3.0, 4.0));
    assert_eq!(offset, Vec3::new(2.0, -3.0, 0.0));
}

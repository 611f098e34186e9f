
use crate::{
    anchor::Anchor,
    direction::PerDirection,
};
#[cfg(test)]
use crate::direction::DIRECTIONS;
use vek::*;


/// How the cube rolls one way: the bottom edge it pivots about for a flat
/// roll or drop, the top edge it pivots about for a climb, the rotation
/// axis, and the unit travel vector.
///
/// A positive right-handed quarter turn about `axis` tips the cube toward
/// `travel`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RollRule {
    pub bottom: Anchor,
    pub top: Anchor,
    pub axis: Vec3<f32>,
    pub travel: Vec3<f32>,
}

/// Roll rules in `Direction` variant order.
pub const ROLL_RULES: PerDirection<RollRule> = PerDirection([
    // forward
    RollRule {
        bottom: Anchor::BottomFront,
        top: Anchor::TopFront,
        axis: Vec3 { x: 1.0, y: 0.0, z: 0.0 },
        travel: Vec3 { x: 0.0, y: 0.0, z: 1.0 },
    },
    // backward
    RollRule {
        bottom: Anchor::BottomBack,
        top: Anchor::TopBack,
        axis: Vec3 { x: -1.0, y: 0.0, z: 0.0 },
        travel: Vec3 { x: 0.0, y: 0.0, z: -1.0 },
    },
    // right
    RollRule {
        bottom: Anchor::BottomRight,
        top: Anchor::TopRight,
        axis: Vec3 { x: 0.0, y: 0.0, z: -1.0 },
        travel: Vec3 { x: 1.0, y: 0.0, z: 0.0 },
    },
    // left
    RollRule {
        bottom: Anchor::BottomLeft,
        top: Anchor::TopLeft,
        axis: Vec3 { x: 0.0, y: 0.0, z: 1.0 },
        travel: Vec3 { x: -1.0, y: 0.0, z: 0.0 },
    },
]);


#[test]
fn test_rules_agree_with_direction_travel() {
    for direction in DIRECTIONS {
        assert_eq!(ROLL_RULES[direction].travel, direction.travel());
    }
}

#[test]
fn test_axis_orthogonal_to_travel() {
    for direction in DIRECTIONS {
        let rule = &ROLL_RULES[direction];
        assert_eq!(rule.axis.dot(rule.travel), 0.0);
        assert_eq!(rule.axis.dot(Vec3::unit_y()), 0.0);
    }
}

#[test]
fn test_rotation_sign_tips_toward_travel() {
    for direction in DIRECTIONS {
        let rule = &ROLL_RULES[direction];
        // for unit axis orthogonal to up, a quarter turn of up about axis
        // equals axis cross up
        assert_eq!(rule.axis.cross(Vec3::unit_y()), rule.travel);
        let turned = Mat3::rotation_3d(std::f32::consts::FRAC_PI_2, rule.axis)
            * Vec3::unit_y();
        assert!((turned - rule.travel).magnitude() < 1e-6);
    }
}

#[test]
fn test_anchors_match_direction() {
    for direction in DIRECTIONS {
        let rule = &ROLL_RULES[direction];
        let half_extents = Extent3::new(0.5, 0.5, 0.5);
        let bottom = rule.bottom.local_offset(half_extents);
        let top = rule.top.local_offset(half_extents);
        // pivot edges sit on the leading face
        assert_eq!(Vec3::new(bottom.x, 0.0, bottom.z), rule.travel * 0.5);
        assert_eq!(Vec3::new(top.x, 0.0, top.z), rule.travel * 0.5);
        assert_eq!(bottom.y, -0.5);
        assert_eq!(top.y, 0.5);
    }
}


use std::ops::{
    Index,
    IndexMut,
};
use vek::*;


per_enum!(
    Direction,
    NUM_DIRECTIONS = 4,
    PerDirection,
    DIRECTIONS,
    (
        Forward,
        Backward,
        Right,
        Left,
    ),
);

impl Direction {
    /// Unit vector the cube moves along when it rolls this way.
    ///
    /// World conventions: +y is up, forward is +z, right is +x.
    pub const fn travel(self) -> Vec3<f32> {
        match self {
            Direction::Forward => Vec3 { x: 0.0, y: 0.0, z: 1.0 },
            Direction::Backward => Vec3 { x: 0.0, y: 0.0, z: -1.0 },
            Direction::Right => Vec3 { x: 1.0, y: 0.0, z: 0.0 },
            Direction::Left => Vec3 { x: -1.0, y: 0.0, z: 0.0 },
        }
    }
}


#[test]
fn test_travel_vectors_are_unit_and_lateral() {
    for direction in DIRECTIONS {
        let travel = direction.travel();
        assert_eq!(travel.magnitude(), 1.0);
        assert_eq!(travel.y, 0.0);
    }
}

#[test]
fn test_opposite_directions_cancel() {
    assert_eq!(
        Direction::Forward.travel() + Direction::Backward.travel(),
        Vec3::zero(),
    );
    assert_eq!(
        Direction::Right.travel() + Direction::Left.travel(),
        Vec3::zero(),
    );
}

#[test]
fn test_per_direction_indexing() {
    let mut counts = PerDirection::repeat(0);
    for direction in DIRECTIONS {
        counts[direction] += 1;
    }
    assert_eq!(counts, PerDirection([1; NUM_DIRECTIONS]));
}

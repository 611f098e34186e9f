//! The roll state machine.
//!
//! A [`Cube`] is either idle or mid-roll. [`Cube::try_roll`] scans the
//! terrain and, if the move is possible, commits to a rotation about one of
//! the cube's edge anchors: a quarter turn about the bottom edge for a flat
//! roll, a half turn about the top edge for a climb, a half turn about the
//! bottom edge for a ledge drop. [`Cube::advance`] then turns the committed
//! rotation into motion over wall time, and on completion snaps position and
//! orientation back onto the grid so drift never accumulates across rolls.
//!
//! At most one roll is ever in flight per cube. Input arriving mid-roll is
//! dropped, not queued.

use crate::{
    scan::{scan, RollKind},
    world::{Layers, ObstacleGeometry},
};
use cube_data::{
    local_anchors,
    snap,
    snap_rotation,
    Anchor,
    Direction,
    PerAnchor,
    ROLL_RULES,
};
use std::f32::consts::{FRAC_PI_2, PI};
use vek::*;


/// Lattice spacing of resting cube centers.
const SNAP_GRID: f32 = 0.5;


/// How a roll command was received.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RollOutcome {
    /// Committed; `advance` will now run it to completion.
    Started(RollKind),
    /// Terrain forbids the move. No motion, still idle.
    Blocked,
    /// A roll is already in flight. Command dropped, no scan performed.
    Busy,
}

/// A committed rotation in flight.
#[derive(Debug, Copy, Clone)]
pub struct Roll {
    pub kind: RollKind,
    pub direction: Direction,
    /// World-space pivot, captured when the roll committed.
    pub pivot: Vec3<f32>,
    pub axis: Vec3<f32>,
    pub total_angle: f32,
    pub elapsed: f32,
}

#[derive(Debug, Copy, Clone)]
pub enum RollState {
    Idle,
    Rotating(Roll),
}

/// A cube that rolls across the unit grid.
#[derive(Debug, Clone)]
pub struct Cube {
    pos: Vec3<f32>,
    orient: Mat3<f32>,
    anchors: PerAnchor<Vec3<f32>>,
    duration: f32,
    mask: Layers,
    state: RollState,
}

impl Cube {
    /// Construct at rest.
    ///
    /// Panics if `duration` or any half extent is not positive.
    pub fn new(
        pos: Vec3<f32>,
        half_extents: Extent3<f32>,
        duration: f32,
        mask: Layers,
    ) -> Self {
        assert!(duration > 0.0, "rotation duration must be positive");
        assert!(
            half_extents.w > 0.0 && half_extents.h > 0.0 && half_extents.d > 0.0,
            "half extents must be positive",
        );
        Cube {
            pos,
            orient: Mat3::identity(),
            anchors: local_anchors(half_extents),
            duration,
            mask,
            state: RollState::Idle,
        }
    }

    pub fn pos(&self) -> Vec3<f32> {
        self.pos
    }

    pub fn orientation(&self) -> Mat3<f32> {
        self.orient
    }

    pub fn state(&self) -> &RollState {
        &self.state
    }

    pub fn is_rotating(&self) -> bool {
        matches!(self.state, RollState::Rotating(_))
    }

    /// World-space position of an anchor. Anchor offsets are fixed in world
    /// axes; a cube at rest is axis-aligned whatever its orientation.
    pub fn anchor_world(&self, anchor: Anchor) -> Vec3<f32> {
        self.pos + self.anchors[anchor]
    }

    /// Attempt a roll. Scans the terrain unless a roll is already in
    /// flight; commits to the rotation the scan permits, if any.
    pub fn try_roll<W: ObstacleGeometry>(
        &mut self,
        direction: Direction,
        world: &W,
    ) -> RollOutcome {
        if self.is_rotating() {
            return RollOutcome::Busy;
        }

        let rule = &ROLL_RULES[direction];
        let info = scan(world, self.pos, rule, self.mask);
        let kind = match info.classify() {
            Some(kind) => kind,
            None => {
                debug!(?direction, ?info, "roll blocked");
                return RollOutcome::Blocked;
            }
        };

        let (anchor, total_angle) = match kind {
            RollKind::Flat => (rule.bottom, FRAC_PI_2),
            RollKind::Climb => (rule.top, PI),
            RollKind::Drop => (rule.bottom, PI),
        };
        debug!(?direction, ?kind, "roll started");
        self.state = RollState::Rotating(Roll {
            kind,
            direction,
            pivot: self.pos + self.anchors[anchor],
            axis: rule.axis,
            total_angle,
            elapsed: 0.0,
        });
        RollOutcome::Started(kind)
    }

    /// Advance the roll in flight by `dt` seconds. Returns true while still
    /// rotating. The final step is clamped to the remaining duration, then
    /// position and orientation snap back onto the grid.
    pub fn advance(&mut self, dt: f32) -> bool {
        let mut roll = match self.state {
            RollState::Rotating(roll) => roll,
            RollState::Idle => return false,
        };

        let remaining = self.duration - roll.elapsed;
        if dt < remaining {
            self.rotate_about(roll.pivot, roll.axis, roll.total_angle / self.duration * dt);
            roll.elapsed += dt;
            self.state = RollState::Rotating(roll);
            true
        } else {
            self.rotate_about(roll.pivot, roll.axis, roll.total_angle / self.duration * remaining);
            self.pos = snap(self.pos, SNAP_GRID);
            self.orient = snap_rotation(self.orient);
            debug!(kind = ?roll.kind, pos = ?self.pos, "roll finished");
            self.state = RollState::Idle;
            false
        }
    }

    fn rotate_about(&mut self, pivot: Vec3<f32>, axis: Vec3<f32>, angle: f32) {
        let rot = Mat3::rotation_3d(angle, axis);
        self.pos = pivot + rot * (self.pos - pivot);
        self.orient = rot * self.orient;
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        level::parse_level,
        world::BlockWorld,
    };

    const DURATION: f32 = 0.25;
    const TICK: f32 = 0.05;

    fn cube_at(pos: Vec3<f32>) -> Cube {
        Cube::new(pos, Extent3::new(0.5, 0.5, 0.5), DURATION, Layers::TERRAIN)
    }

    fn settle(cube: &mut Cube) {
        let mut steps = 0;
        while cube.advance(TICK) {
            steps += 1;
            assert!(steps < 1000, "roll never finished");
        }
    }

    fn roll_expecting<W: ObstacleGeometry>(
        cube: &mut Cube,
        direction: Direction,
        world: &W,
        kind: RollKind,
        end_pos: Vec3<f32>,
    ) {
        assert_eq!(cube.try_roll(direction, world), RollOutcome::Started(kind));
        settle(cube);
        assert_eq!(cube.pos(), end_pos);
        assert!(!cube.is_rotating());
    }

    #[test]
    fn flat_roll_moves_one_unit() {
        let level = parse_level("S1\n").unwrap();
        let mut cube = cube_at(level.spawn);
        roll_expecting(
            &mut cube,
            Direction::Right,
            &level.world,
            RollKind::Flat,
            Vec3::new(1.0, 0.0, 0.0),
        );
    }

    #[test]
    fn climb_rises_one_unit() {
        let level = parse_level("S2\n").unwrap();
        let mut cube = cube_at(level.spawn);
        roll_expecting(
            &mut cube,
            Direction::Right,
            &level.world,
            RollKind::Climb,
            Vec3::new(1.0, 1.0, 0.0),
        );
    }

    #[test]
    fn drop_falls_one_unit() {
        let mut world = BlockWorld::new();
        // two-high column under the cube, one-high column ahead
        world.set([0, -1, 0], Layers::TERRAIN);
        world.set([0, 0, 0], Layers::TERRAIN);
        world.set([1, -1, 0], Layers::TERRAIN);
        let mut cube = cube_at(Vec3::new(0.0, 1.0, 0.0));
        roll_expecting(
            &mut cube,
            Direction::Right,
            &world,
            RollKind::Drop,
            Vec3::new(1.0, 0.0, 0.0),
        );
    }

    #[test]
    fn tall_wall_blocks_without_motion() {
        let level = parse_level("S3\n").unwrap();
        let mut cube = cube_at(level.spawn);
        assert_eq!(cube.try_roll(Direction::Right, &level.world), RollOutcome::Blocked);
        assert_eq!(cube.pos(), level.spawn);
        assert_eq!(cube.orientation(), Mat3::identity());
        assert!(!cube.is_rotating());
    }

    #[test]
    fn void_blocks_without_motion() {
        let level = parse_level("S.\n").unwrap();
        let mut cube = cube_at(level.spawn);
        assert_eq!(cube.try_roll(Direction::Right, &level.world), RollOutcome::Blocked);
        assert_eq!(cube.pos(), level.spawn);
    }

    #[test]
    fn two_level_drop_is_refused() {
        let mut world = BlockWorld::new();
        // three-high column under the cube, one-high column ahead
        for y in -1..=1 {
            world.set([0, y, 0], Layers::TERRAIN);
        }
        world.set([1, -1, 0], Layers::TERRAIN);
        let mut cube = cube_at(Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(cube.try_roll(Direction::Right, &world), RollOutcome::Blocked);
        assert_eq!(cube.pos(), Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn reentrant_input_is_dropped() {
        let level = parse_level("S11\n").unwrap();
        let mut cube = cube_at(level.spawn);
        assert_eq!(
            cube.try_roll(Direction::Right, &level.world),
            RollOutcome::Started(RollKind::Flat),
        );
        // a second command mid-roll has no effect, in any direction
        assert_eq!(cube.try_roll(Direction::Right, &level.world), RollOutcome::Busy);
        assert_eq!(cube.try_roll(Direction::Left, &level.world), RollOutcome::Busy);
        settle(&mut cube);
        assert_eq!(cube.pos(), Vec3::new(1.0, 0.0, 0.0));
        // idle again, commands accepted again
        assert_eq!(
            cube.try_roll(Direction::Right, &level.world),
            RollOutcome::Started(RollKind::Flat),
        );
        settle(&mut cube);
        assert_eq!(cube.pos(), Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn partial_advance_keeps_rotating() {
        let level = parse_level("S1\n").unwrap();
        let mut cube = cube_at(level.spawn);
        cube.try_roll(Direction::Right, &level.world);
        assert!(cube.advance(DURATION / 2.0));
        assert!(cube.is_rotating());
        match cube.state() {
            RollState::Rotating(roll) => {
                assert_eq!(roll.kind, RollKind::Flat);
                assert_eq!(roll.elapsed, DURATION / 2.0);
            }
            RollState::Idle => panic!("expected a roll in flight"),
        }
        // mid-flight the cube is off the lattice
        assert!(cube.pos() != level.spawn);
        assert!(cube.pos() != Vec3::new(1.0, 0.0, 0.0));
        assert!(!cube.advance(DURATION));
        assert_eq!(cube.pos(), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn advance_when_idle_does_nothing() {
        let level = parse_level("S1\n").unwrap();
        let mut cube = cube_at(level.spawn);
        assert!(!cube.advance(TICK));
        assert_eq!(cube.pos(), level.spawn);
        assert_eq!(cube.orientation(), Mat3::identity());
    }

    #[test]
    fn uneven_steps_land_exactly_on_grid() {
        let level = parse_level("S1\n").unwrap();
        let mut cube = cube_at(level.spawn);
        cube.try_roll(Direction::Right, &level.world);
        // 0.04 does not divide 0.25; the last step is clamped
        while cube.advance(0.04) {}
        assert_eq!(cube.pos(), Vec3::new(1.0, 0.0, 0.0));
        assert!(!cube.is_rotating());
    }

    #[test]
    fn four_flat_rolls_restore_orientation() {
        let level = parse_level("S1111\n").unwrap();
        let mut cube = cube_at(level.spawn);
        for x in 1..=4 {
            roll_expecting(
                &mut cube,
                Direction::Right,
                &level.world,
                RollKind::Flat,
                Vec3::new(x as f32, 0.0, 0.0),
            );
        }
        // a full revolution about one axis
        assert_eq!(cube.orientation(), Mat3::identity());
    }

    #[test]
    fn one_flat_roll_changes_orientation() {
        let level = parse_level("S1\n").unwrap();
        let mut cube = cube_at(level.spawn);
        roll_expecting(
            &mut cube,
            Direction::Right,
            &level.world,
            RollKind::Flat,
            Vec3::new(1.0, 0.0, 0.0),
        );
        assert!(cube.orientation() != Mat3::identity());
    }

    #[test]
    fn climb_then_drop_returns_to_start() {
        let level = parse_level("S2\n").unwrap();
        let mut cube = cube_at(level.spawn);
        roll_expecting(
            &mut cube,
            Direction::Right,
            &level.world,
            RollKind::Climb,
            Vec3::new(1.0, 1.0, 0.0),
        );
        roll_expecting(
            &mut cube,
            Direction::Left,
            &level.world,
            RollKind::Drop,
            Vec3::new(0.0, 0.0, 0.0),
        );
        // opposite half turns cancel
        assert_eq!(cube.orientation(), Mat3::identity());
    }

    #[test]
    fn full_course() {
        let level = parse_level("S12321\n111.11\n").unwrap();
        let mut cube = cube_at(level.spawn);
        let world = &level.world;

        roll_expecting(&mut cube, Direction::Right, world, RollKind::Flat, Vec3::new(1.0, 0.0, 0.0));
        roll_expecting(&mut cube, Direction::Right, world, RollKind::Climb, Vec3::new(2.0, 1.0, 0.0));
        roll_expecting(&mut cube, Direction::Right, world, RollKind::Climb, Vec3::new(3.0, 2.0, 0.0));
        roll_expecting(&mut cube, Direction::Right, world, RollKind::Drop, Vec3::new(4.0, 1.0, 0.0));
        roll_expecting(&mut cube, Direction::Right, world, RollKind::Drop, Vec3::new(5.0, 0.0, 0.0));
        // nothing behind the first row
        assert_eq!(cube.try_roll(Direction::Backward, world), RollOutcome::Blocked);
        roll_expecting(&mut cube, Direction::Forward, world, RollKind::Flat, Vec3::new(5.0, 0.0, 1.0));
        roll_expecting(&mut cube, Direction::Left, world, RollKind::Flat, Vec3::new(4.0, 0.0, 1.0));
        // the gap in the second row
        assert_eq!(cube.try_roll(Direction::Left, world), RollOutcome::Blocked);
        assert_eq!(cube.pos(), Vec3::new(4.0, 0.0, 1.0));
    }

    #[test]
    #[should_panic]
    fn zero_duration_is_rejected() {
        Cube::new(Vec3::zero(), Extent3::new(0.5, 0.5, 0.5), 0.0, Layers::TERRAIN);
    }

    #[test]
    #[should_panic]
    fn non_positive_half_extents_are_rejected() {
        Cube::new(Vec3::zero(), Extent3::new(0.5, 0.0, 0.5), DURATION, Layers::TERRAIN);
    }
}

//! Geometry vocabulary for a cube that rolls across a unit grid.
//!
//! Basic example:
//!
//! ```
//! use cube_data::{
//!     Direction,
//!     DIRECTIONS,
//!     Anchor,
//!     ROLL_RULES,
//!     local_anchors,
//!     snap,
//! };
//! use vek::*;
//!
//! // every direction carries a rule consistent with its travel vector
//! for direction in DIRECTIONS {
//!     assert_eq!(ROLL_RULES[direction].travel, direction.travel());
//! }
//!
//! // anchor offsets are derived from the cube's half extents once
//! let anchors = local_anchors(Extent3::new(0.5, 0.5, 0.5));
//! assert_eq!(anchors[Anchor::BottomFront], Vec3::new(0.0, -0.5, 0.5));
//!
//! // resting positions live on the half-unit lattice
//! assert_eq!(
//!     snap(Vec3::new(0.49, -0.02, 1.51), 0.5),
//!     Vec3::new(0.5, 0.0, 1.5),
//! );
//! ```

#[macro_use]
mod per;
mod anchor;
mod direction;
mod rule;
mod snap;


pub use self::{
    anchor::{
        NUM_ANCHORS,
        ANCHORS,
        Anchor,
        PerAnchor,
        local_anchors,
    },
    direction::{
        NUM_DIRECTIONS,
        DIRECTIONS,
        Direction,
        PerDirection,
    },
    rule::{
        ROLL_RULES,
        RollRule,
    },
    snap::{
        snap,
        snap_offset,
        snap_rotation,
    },
};

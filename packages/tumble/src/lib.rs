//! Movement mechanic of a cube that rolls across a unit grid by pivoting
//! 90 or 180 degrees about the midpoints of its box edges.

#[macro_use]
extern crate tracing;

pub mod logging;
pub mod settings;
pub mod world;
pub mod scan;
pub mod roll;
pub mod input;
pub mod gizmo;
pub mod level;

//! ASCII heightmap levels for exercising the mechanic.
//!
//! One character per grid column. Rows run along +z, columns along +x:
//!
//! - `1`..`9` — terrain column of that height. A height-1 surface carries a
//!   resting cube centered at y = 0.
//! - `.` or space — void. Nothing to roll onto, nothing to drop onto.
//! - `S` — spawn point, on a height-1 column.

use crate::world::{BlockWorld, Layers};
use anyhow::*;
use vek::*;


#[derive(Debug, Clone)]
pub struct Level {
    pub world: BlockWorld,
    pub spawn: Vec3<f32>,
}

pub fn parse_level(text: &str) -> Result<Level> {
    let mut world = BlockWorld::new();
    let mut spawn = None;

    for (row, line) in text.lines().enumerate() {
        for (col, c) in line.chars().enumerate() {
            let (x, z) = (col as i64, row as i64);
            let height = match c {
                '.' | ' ' => continue,
                'S' => {
                    ensure!(spawn.is_none(), "level has more than one spawn point");
                    spawn = Some(Vec3::new(x as f32, 0.0, z as f32));
                    1
                }
                d @ '1'..='9' => d as i64 - '0' as i64,
                _ => bail!(
                    "unrecognized level character {:?} at row {} column {}",
                    c, row, col,
                ),
            };
            // solid cells from one below the floor up to the surface
            for y in -1..height - 1 {
                world.set([x, y, z], Layers::TERRAIN);
            }
        }
    }

    let spawn = spawn.ok_or_else(|| anyhow!("level has no spawn point"))?;
    Ok(Level { world, spawn })
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heights_become_columns() {
        let level = parse_level("S13\n").unwrap();
        assert_eq!(level.spawn, Vec3::new(0.0, 0.0, 0.0));
        // spawn column is height 1
        assert_eq!(level.world.layers_at([0, -1, 0]), Layers::TERRAIN);
        assert_eq!(level.world.layers_at([0, 0, 0]), Layers::NONE);
        // height 1
        assert_eq!(level.world.layers_at([1, -1, 0]), Layers::TERRAIN);
        assert_eq!(level.world.layers_at([1, 0, 0]), Layers::NONE);
        // height 3
        assert_eq!(level.world.layers_at([2, -1, 0]), Layers::TERRAIN);
        assert_eq!(level.world.layers_at([2, 0, 0]), Layers::TERRAIN);
        assert_eq!(level.world.layers_at([2, 1, 0]), Layers::TERRAIN);
        assert_eq!(level.world.layers_at([2, 2, 0]), Layers::NONE);
    }

    #[test]
    fn rows_run_along_z() {
        let level = parse_level("S\n1\n").unwrap();
        assert_eq!(level.world.layers_at([0, -1, 1]), Layers::TERRAIN);
        assert_eq!(level.world.layers_at([1, -1, 0]), Layers::NONE);
    }

    #[test]
    fn void_leaves_no_cells() {
        let level = parse_level("S.1\n").unwrap();
        assert_eq!(level.world.layers_at([1, -1, 0]), Layers::NONE);
        assert_eq!(level.world.layers_at([2, -1, 0]), Layers::TERRAIN);
    }

    #[test]
    fn spawn_is_required() {
        assert!(parse_level("123\n").is_err());
    }

    #[test]
    fn double_spawn_is_rejected() {
        assert!(parse_level("S1S\n").is_err());
    }

    #[test]
    fn unknown_characters_are_rejected() {
        assert!(parse_level("S1x\n").is_err());
    }
}

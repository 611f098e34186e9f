use crate::world::Layers;
use std::{
    path::Path,
    fs::File,
    io::{
        BufReader,
        BufWriter,
    },
};
use serde::{Serialize, Deserialize};
use vek::*;
use anyhow::*;


pub const SETTINGS_FILE_NAME: &'static str = "settings.json";


/// Cube tuning knobs. Read once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Wall time of one roll, seconds. Must be positive.
    pub rotation_duration: f32,
    pub half_extents: Extent3<f32>,
    /// Which world layers the obstacle probes are allowed to hit.
    pub obstacle_mask: Layers,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            rotation_duration: 0.25,
            half_extents: Extent3::new(0.5, 0.5, 0.5),
            obstacle_mask: Layers::TERRAIN,
        }
    }
}

impl Settings {
    pub fn read(path: impl AsRef<Path>) -> Self {
        Self::try_read(path).unwrap_or_default()
    }

    pub fn try_read(path: impl AsRef<Path>) -> Result<Self> {
        Ok(serde_json::from_reader(BufReader::new(File::open(path)?))?)
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        serde_json::to_writer_pretty(BufWriter::new(File::create(path)?), self)?;
        Ok(())
    }
}

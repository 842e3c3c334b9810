//! Seeded random map generation.

use log::debug;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::config::WorldSection;
use crate::core::{CellType, GridCoord};
use crate::error::{PathikError, Result};

use super::grid_world::GridWorld;

/// Random obstacle map generator with deterministic seeding
pub struct MapGenerator {
    rng: StdRng,
}

impl MapGenerator {
    /// Create a generator; equal seeds produce equal maps
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Build a `size`×`size` world where each cell is blocked with
    /// probability `density`.
    ///
    /// The origin and the goal corner are always left free.
    pub fn generate_world(&mut self, size: usize, density: f64) -> Result<GridWorld> {
        if !(0.0..=1.0).contains(&density) {
            return Err(PathikError::InvalidWorld(format!(
                "density must be within [0, 1], got {}",
                density
            )));
        }

        let mut world = GridWorld::open(size)?;
        let goal = GridCoord::new(size - 1, size - 1);

        for row in 0..size {
            for col in 0..size {
                let coord = GridCoord::new(row, col);
                if coord == GridCoord::ORIGIN || coord == goal {
                    continue;
                }
                if self.rng.random_bool(density) {
                    world.set_cell(coord, CellType::Blocked);
                }
            }
        }

        debug!(
            "[MapGenerator] {}x{} map, density {:.2}: {} blocked cells",
            size,
            size,
            density,
            world.blocked_count()
        );
        Ok(world)
    }

    /// One-shot generation from size, density and seed
    pub fn generate(size: usize, density: f64, seed: u64) -> Result<GridWorld> {
        Self::new(seed).generate_world(size, density)
    }

    /// Generate from a `[world]` config section
    pub fn from_section(section: &WorldSection) -> Result<GridWorld> {
        Self::generate(section.size, section.density, section.seed)
    }
}

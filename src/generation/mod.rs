//! Map generation pipeline.
//!
//! The pipeline runs the stages in order:
//! 1. Height map synthesis (NoiseField sampled per column)
//! 2. Terrain classification (sky / surface / stone)
//! 3. Ore distribution (depth-banded stochastic replacement)
//!
//! Data flows strictly one way; no stage reads back from a later one. The
//! whole pipeline is single-threaded on purpose: the ore pass consumes the
//! seeded generator in rule → row → column order, and that draw order is
//! what makes a seed reproduce a map.

pub mod config;
pub use config::GenerationConfig;

use std::time::Instant;

use crate::core::Pcg32;
use crate::grid::TileGrid;
use crate::noise::NoiseField;
use crate::ore;
use crate::terrain::{classify, HeightMapBuilder};

/// Orchestrates map generation: height map → classification → ore pass.
pub struct GenerationPipeline {
    config: GenerationConfig,
}

impl GenerationPipeline {
    /// Create a new pipeline from configuration.
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generate a finished tile grid.
    ///
    /// The noise seed and window offsets are drawn from the seeded generator
    /// before the ore pass consumes it, so the entire map is a function of
    /// `config.seed` alone.
    pub fn generate(&self) -> TileGrid {
        let start = Instant::now();
        let width = self.config.width;
        let height = self.config.height;

        let mut rng = Pcg32::new(self.config.seed);
        let noise_seed = rng.next_u32();
        let offset_x = f64::from(rng.next_below(width));
        let offset_y = f64::from(rng.next_below(height));

        let noise = NoiseField::new(noise_seed, self.config.noise.clone());
        let height_map = HeightMapBuilder::new(noise).build(width, height, offset_x, offset_y);
        log::debug!(
            "height map: {} columns, window offsets ({}, {})",
            height_map.len(),
            offset_x,
            offset_y
        );

        let mut grid = classify(width, height, &height_map);
        ore::distribute(&mut grid, &ore::DEFAULT_RULES, &mut rng);

        log::info!(
            "generated {}x{} map (seed {}) in {:.1}ms",
            width,
            height,
            self.config.seed,
            start.elapsed().as_secs_f64() * 1000.0
        );
        grid
    }
}

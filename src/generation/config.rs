//! Generation configuration.

use serde::{Deserialize, Serialize};

use crate::noise::NoiseParams;

/// Configuration for the map generation pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Random seed; one seed reproduces the whole map.
    pub seed: u64,
    /// Grid width in tiles.
    pub width: u32,
    /// Grid height in tiles.
    pub height: u32,
    /// Height-field noise parameters.
    pub noise: NoiseParams,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            // 1920x1080 screen at 16-pixel tiles
            width: 120,
            height: 67,
            noise: NoiseParams::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let config = GenerationConfig::default();
        assert_eq!(config.width, 120);
        assert_eq!(config.height, 67);
        assert_eq!(config.seed, 12345);
    }
}

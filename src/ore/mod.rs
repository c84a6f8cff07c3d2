//! Depth-banded ore distribution.
//!
//! Each ore kind claims a vertical band expressed as a percentage of total
//! grid height. Rows inside the band are scanned column by column, replacing
//! stone with ore at a chance that grows linearly with depth inside the
//! band. Rules apply in fixed order; a cell converted by an earlier rule is
//! never touched again because only stone is eligible.

use crate::core::Pcg32;
use crate::grid::{Tile, TileGrid};

/// Fraction of the grid, measured from the top, that never receives ore.
const SURFACE_EXCLUSION: f64 = 0.3;

/// Placement rule for a single ore kind.
#[derive(Clone, Copy, Debug)]
pub struct OreRule {
    pub tile: Tile,
    /// Band start as a percentage of grid height.
    pub band_start: f64,
    /// Band end as a percentage of grid height (exclusive).
    pub band_end: f64,
    /// Strike chance in percent at the top of the band.
    pub base_chance: f64,
    /// Chance added across the band, scaled by depth progress.
    pub chance_slope: f64,
}

/// The six ore kinds in application order. Order matters: when bands
/// overlap, earlier rules win.
pub const DEFAULT_RULES: [OreRule; 6] = [
    OreRule { tile: Tile::Tin, band_start: 0.0, band_end: 25.0, base_chance: 15.0, chance_slope: 1.8 },
    OreRule { tile: Tile::Copper, band_start: 17.5, band_end: 35.0, base_chance: 15.0, chance_slope: 2.0 },
    OreRule { tile: Tile::Iron, band_start: 30.0, band_end: 80.0, base_chance: 10.0, chance_slope: 1.2 },
    OreRule { tile: Tile::Silver, band_start: 50.0, band_end: 75.0, base_chance: 10.0, chance_slope: 1.6 },
    OreRule { tile: Tile::Gold, band_start: 65.0, band_end: 100.0, base_chance: 5.0, chance_slope: 0.71 },
    OreRule { tile: Tile::Mithril, band_start: 75.0, band_end: 100.0, base_chance: 7.0, chance_slope: 1.32 },
];

/// Replace stone with ore in place, one rule at a time.
///
/// The generator advances one draw per scanned column whether or not the
/// cell is stone, so output is a pure function of seed and grid content.
pub fn distribute(grid: &mut TileGrid, rules: &[OreRule], rng: &mut Pcg32) {
    let width = grid.width();
    let height = grid.height();
    if width == 0 || height == 0 {
        return;
    }

    let min_row = (height as f64 * SURFACE_EXCLUSION).floor() as usize;
    for rule in rules {
        let start = rule.band_start / 100.0;
        let end = rule.band_end / 100.0;

        for row in min_row..height {
            let height_percent = row as f64 / height as f64;
            if height_percent < start || height_percent >= end {
                continue;
            }

            // Strike chance grows with depth progress inside the band.
            let progress = if end > start {
                (height_percent - start) / (end - start)
            } else {
                0.0
            };
            let threshold = (rule.base_chance + rule.chance_slope * progress) / 100.0;

            for col in 0..width {
                if rng.next_f64() < threshold && grid.get(row, col) == Tile::Stone {
                    grid.set(row, col, rule.tile);
                }
            }
        }
    }
}

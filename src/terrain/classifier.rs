//! Height-to-tile classification.

use crate::grid::{Tile, TileGrid};

/// Thickness of the visible surface band, in tiles.
const SURFACE_BAND: u32 = 2;

/// Convert a height map into a tile grid.
///
/// Per column: rows above the surface height are sky, the two rows starting
/// at the surface height are grass-topped surface (clamped at the grid
/// bottom), and everything below is stone.
pub fn classify(width: u32, height: u32, height_map: &[u32]) -> TileGrid {
    debug_assert_eq!(height_map.len(), width as usize);

    let mut grid = TileGrid::filled(width as usize, height as usize, Tile::Sky);
    for (col, &surface) in height_map.iter().enumerate().take(width as usize) {
        for row in surface..height {
            let tile = if row < surface + SURFACE_BAND {
                Tile::Surface
            } else {
                Tile::Stone
            };
            grid.set(row as usize, col, tile);
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_height_map_bands() {
        // height=10, width=5, surface at row 3 everywhere:
        // rows 0-2 sky, rows 3-4 surface, rows 5-9 stone.
        let grid = classify(5, 10, &[3, 3, 3, 3, 3]);

        for col in 0..5 {
            for row in 0..3 {
                assert_eq!(grid.get(row, col), Tile::Sky, "row {} col {}", row, col);
            }
            for row in 3..5 {
                assert_eq!(grid.get(row, col), Tile::Surface, "row {} col {}", row, col);
            }
            for row in 5..10 {
                assert_eq!(grid.get(row, col), Tile::Stone, "row {} col {}", row, col);
            }
        }
    }

    #[test]
    fn test_column_structure() {
        let height_map = [0, 2, 5, 9, 10, 7];
        let grid = classify(6, 10, &height_map);

        for (col, &surface) in height_map.iter().enumerate() {
            for row in 0..10u32 {
                let expected = if row < surface {
                    Tile::Sky
                } else if row < surface + 2 {
                    Tile::Surface
                } else {
                    Tile::Stone
                };
                assert_eq!(
                    grid.get(row as usize, col),
                    expected,
                    "row {} col {} (surface {})",
                    row,
                    col,
                    surface
                );
            }
        }
    }

    #[test]
    fn test_surface_band_clamped_at_bottom() {
        // Surface at the last row leaves room for only one surface tile.
        let grid = classify(1, 4, &[3]);
        assert_eq!(grid.get(2, 0), Tile::Sky);
        assert_eq!(grid.get(3, 0), Tile::Surface);

        // Surface height equal to grid height leaves the column all sky.
        let grid = classify(1, 4, &[4]);
        for row in 0..4 {
            assert_eq!(grid.get(row, 0), Tile::Sky);
        }
    }

    #[test]
    fn test_zero_dimensions() {
        assert!(classify(0, 10, &[]).is_empty());
        assert!(classify(3, 0, &[5, 5, 5]).is_empty());
    }
}

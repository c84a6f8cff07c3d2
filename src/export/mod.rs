//! Flat-text grid serialization.
//!
//! The only persisted artifact: one line per row, tile codes as
//! whitespace-separated decimal integers, no header or trailing metadata.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::core::{Error, Result};
use crate::grid::{Tile, TileGrid};

/// Render a grid in the flat text format.
pub fn grid_to_string(grid: &TileGrid) -> String {
    let mut out = String::with_capacity(grid.width() * grid.height() * 2);
    for row in grid.rows() {
        for (col, tile) in row.iter().enumerate() {
            if col > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{}", tile.to_id());
        }
        out.push('\n');
    }
    out
}

/// Parse a grid from the flat text format.
///
/// Rejects non-integer tokens, unknown tile codes, and ragged row widths.
/// Empty input parses as an empty grid.
pub fn parse_grid(text: &str) -> Result<TileGrid> {
    let mut rows: Vec<Vec<Tile>> = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let mut row = Vec::new();
        for token in line.split_whitespace() {
            let id: u8 = token.parse().map_err(|_| {
                Error::Parse(format!("line {}: invalid tile code '{}'", line_no + 1, token))
            })?;
            let tile = Tile::from_id(id).ok_or_else(|| {
                Error::Parse(format!("line {}: unknown tile code {}", line_no + 1, id))
            })?;
            row.push(tile);
        }

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(Error::Parse(format!(
                    "line {}: expected {} tiles, found {}",
                    line_no + 1,
                    first.len(),
                    row.len()
                )));
            }
        }
        rows.push(row);
    }

    let height = rows.len();
    let width = rows.first().map_or(0, Vec::len);
    let mut grid = TileGrid::filled(width, height, Tile::Sky);
    for (r, row) in rows.iter().enumerate() {
        for (c, &tile) in row.iter().enumerate() {
            grid.set(r, c, tile);
        }
    }
    Ok(grid)
}

/// Write a grid to disk in the flat text format.
pub fn write_grid(path: &Path, grid: &TileGrid) -> Result<()> {
    fs::write(path, grid_to_string(grid))?;
    Ok(())
}

/// Read a grid back from disk.
pub fn read_grid(path: &Path) -> Result<TileGrid> {
    parse_grid(&fs::read_to_string(path)?)
}

//! Cell decoder — maps goal-grid labels to placeable entities.
//!
//! Decoding is pure and position-agnostic. [`decode_grid`] attaches
//! coordinates from each cell's row and column index.

use crate::error::DecodeError;
use crate::types::{Color, Coordinate, Direction, Entity, Grid, PlacementCommand};

const POLYANET: &str = "POLYANET";
const SPACE: &str = "SPACE";
const SOLOON_SUFFIX: &str = "SOLOON";
const COMETH_SUFFIX: &str = "COMETH";

/// Decode a single label.
///
/// Returns `Ok(None)` for an empty cell (`SPACE`).
pub fn decode(label: &str) -> Result<Option<Entity>, DecodeError> {
    if label == POLYANET {
        return Ok(Some(Entity::Polyanet));
    }
    if label == SPACE {
        return Ok(None);
    }

    if label.ends_with(SOLOON_SUFFIX) {
        let color = match label.chars().next() {
            Some('B') => Color::Blue,
            Some('R') => Color::Red,
            Some('P') => Color::Purple,
            Some('W') => Color::White,
            _ => return Err(DecodeError::UnknownColor(label.to_string())),
        };
        return Ok(Some(Entity::Soloon(color)));
    }

    if label.ends_with(COMETH_SUFFIX) {
        let direction = match label.chars().next() {
            Some('U') => Direction::Up,
            Some('D') => Direction::Down,
            Some('L') => Direction::Left,
            Some('R') => Direction::Right,
            _ => return Err(DecodeError::UnknownDirection(label.to_string())),
        };
        return Ok(Some(Entity::Cometh(direction)));
    }

    Err(DecodeError::UnknownEntity(label.to_string()))
}

/// Result of decoding a whole grid.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DecodedGrid {
    /// Placement commands in row-major order.
    pub commands: Vec<PlacementCommand>,
    /// Cells that were skipped because their label did not decode.
    pub errors: Vec<(Coordinate, DecodeError)>,
}

/// Decode every cell of a grid in row-major order.
///
/// Rows are processed independently, so ragged grids are accepted.
pub fn decode_grid(grid: &Grid) -> DecodedGrid {
    let mut decoded = DecodedGrid::default();

    for (row, labels) in grid.iter().enumerate() {
        for (column, label) in labels.iter().enumerate() {
            let coordinate = Coordinate::new(row as u32, column as u32);
            match decode(label) {
                Ok(Some(entity)) => decoded
                    .commands
                    .push(PlacementCommand::new(coordinate, entity)),
                Ok(None) => {}
                Err(e) => decoded.errors.push((coordinate, e)),
            }
        }
    }

    decoded
}

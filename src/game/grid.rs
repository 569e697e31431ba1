use super::direction::Direction;
use crate::consts;
use ratatui::layout::{Position, Positions, Rect, Size};

/// The square, wraparound board that everything in the game lives on.
///
/// Cells are addressed by `Position`s with `0 <= x, y < tile_count`.  Moving
/// off one edge comes back in on the opposite edge.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    /// Number of cells along each side
    tile_count: u16,

    /// Side length of a cell, in canvas units
    cell_size: u16,
}

impl Grid {
    /// Create a grid covering a square canvas of side `canvas_size` with
    /// cells of side `cell_size`.  Any leftover strip narrower than a cell is
    /// not part of the board.
    ///
    /// Returns `None` if `cell_size` is zero or the board would have fewer
    /// than [`MIN_TILE_COUNT`][consts::MIN_TILE_COUNT] cells per side.
    pub(crate) fn new(canvas_size: u16, cell_size: u16) -> Option<Grid> {
        let tile_count = canvas_size.checked_div(cell_size)?;
        (tile_count >= consts::MIN_TILE_COUNT).then_some(Grid {
            tile_count,
            cell_size,
        })
    }

    pub(crate) fn tile_count(self) -> u16 {
        self.tile_count
    }

    pub(crate) fn cell_size(self) -> u16 {
        self.cell_size
    }

    /// Side length of the playable part of the canvas, in canvas units
    pub(crate) fn extent(self) -> f64 {
        f64::from(self.tile_count) * f64::from(self.cell_size)
    }

    /// Map any coordinate onto `0..tile_count`, wrapping around the edges
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn wrap(self, coord: i32) -> u16 {
        // rem_euclid() lands in 0..tile_count, which always fits in a u16.
        coord.rem_euclid(i32::from(self.tile_count)) as u16
    }

    /// Return the cell one step from `pos` in `direction`
    pub(crate) fn step(self, pos: Position, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position {
            x: self.wrap(i32::from(pos.x) + dx),
            y: self.wrap(i32::from(pos.y) + dy),
        }
    }

    #[cfg(test)]
    pub(crate) fn contains(self, pos: Position) -> bool {
        pos.x < self.tile_count && pos.y < self.tile_count
    }

    /// Iterate over every cell of the board in row-major order
    pub(crate) fn cells(self) -> Positions {
        Rect::from((
            Position::ORIGIN,
            Size {
                width: self.tile_count,
                height: self.tile_count,
            },
        ))
        .positions()
    }

    /// Return the center of the cell at `pos` in canvas units
    pub(crate) fn cell_center(self, pos: Position) -> (f64, f64) {
        let size = f64::from(self.cell_size);
        (
            f64::from(pos.x).mul_add(size, size / 2.0),
            f64::from(pos.y).mul_add(size, size / 2.0),
        )
    }

    /// Where the snake's head starts out
    pub(crate) fn start_cell(self) -> Position {
        let mid = self.tile_count / 2;
        Position::new(mid, mid)
    }

    /// Where the first piece of food of a game is placed
    pub(crate) fn start_food(self) -> Position {
        // tile_count * 3 / 4 without overflowing u16
        let at = self.tile_count - self.tile_count / 4;
        let at = if self.tile_count % 4 == 0 { at } else { at - 1 };
        Position::new(at, at)
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid {
            tile_count: consts::DEFAULT_CANVAS_SIZE / consts::DEFAULT_CELL_SIZE,
            cell_size: consts::DEFAULT_CELL_SIZE,
        }
    }
}

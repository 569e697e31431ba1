use super::grid::Grid;
use super::snake::Snake;
use crate::consts;
use rand::{seq::IteratorRandom, Rng};
use ratatui::layout::Position;

/// Pick a cell for the next piece of food that the snake does not occupy.
///
/// Cells are first drawn uniformly at random, up to
/// [`MAX_FOOD_ATTEMPTS`][consts::MAX_FOOD_ATTEMPTS] times.  If every draw
/// lands on the snake, a free cell is chosen uniformly from a full scan of
/// the board instead.  Returns `None` only when the snake covers the whole
/// board.
pub(crate) fn place_food<R: Rng>(rng: &mut R, grid: Grid, snake: &Snake) -> Option<Position> {
    let n = grid.tile_count();
    for _ in 0..consts::MAX_FOOD_ATTEMPTS {
        let pos = Position::new(rng.random_range(0..n), rng.random_range(0..n));
        if !snake.occupies(pos) {
            return Some(pos);
        }
    }
    tracing::debug!(
        length = snake.len(),
        "Random food placement kept hitting the snake; scanning for a free cell"
    );
    grid.cells().filter(|&p| !snake.occupies(p)).choose(rng)
}

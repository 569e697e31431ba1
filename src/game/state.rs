use super::collision::has_self_collision;
use super::direction::Direction;
use super::food::place_food;
use super::grid::Grid;
use super::snake::Snake;
use rand::Rng;
use ratatui::layout::Position;

/// Everything that changes as the snake moves: the snake itself, where it's
/// going, the food, and the score.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameState<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: Grid,
    snake: Snake,

    /// The direction applied by the most recent tick
    heading: Direction,

    /// The direction the next tick will apply
    pending: Direction,

    /// Where the food is, or `None` once the snake has filled the board
    food: Option<Position>,

    score: u32,
}

impl<R: Rng> GameState<R> {
    pub(crate) fn new(grid: Grid, rng: R) -> GameState<R> {
        GameState {
            rng,
            grid,
            snake: Snake::new(grid.start_cell()),
            heading: Direction::East,
            pending: Direction::East,
            food: Some(grid.start_food()),
            score: 0,
        }
    }

    /// Put the snake, its direction, the food, and the score back the way
    /// they were at the start of the game
    pub(crate) fn reset(&mut self) {
        self.snake = Snake::new(self.grid.start_cell());
        self.heading = Direction::East;
        self.pending = Direction::East;
        self.food = Some(self.grid.start_food());
        self.score = 0;
    }

    /// Advance the game by one step.
    ///
    /// The head moves one cell (wrapping at the edges) and is inserted at the
    /// front of the body.  If it landed on the food, the score goes up, new
    /// food is placed clear of the updated body, and the tail is kept so that
    /// the snake grows by one; if there is nowhere left for food, the board
    /// is full and the food is gone.  Otherwise the tail is dropped.  Whether
    /// the snake bit itself is reported, not acted on.
    pub(crate) fn tick(&mut self) -> TickResult {
        self.heading = self.pending;
        let head = self.grid.step(self.snake.head(), self.heading);
        self.snake.push_head(head);
        let mut result = TickResult::default();
        if self.food == Some(head) {
            self.score += 1;
            result.ate = true;
            self.food = place_food(&mut self.rng, self.grid, &self.snake);
            result.board_full = self.food.is_none();
        } else {
            self.snake.drop_tail();
        }
        result.alive = !has_self_collision(&self.snake);
        tracing::debug!(
            x = head.x,
            y = head.y,
            length = self.snake.len(),
            ate = result.ate,
            alive = result.alive,
            "Tick"
        );
        result
    }
}

impl<R> GameState<R> {
    /// Ask for the snake to turn to `direction` on the next tick.
    ///
    /// Turning back the way the snake moved on the last tick is refused.  Any
    /// other direction replaces whatever was previously asked for, so if
    /// several turns arrive between two ticks, the last acceptable one wins.
    /// Returns whether the turn was accepted.
    pub(crate) fn steer(&mut self, direction: Direction) -> bool {
        if direction.is_reverse_of(self.heading) {
            false
        } else {
            self.pending = direction;
            true
        }
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn grid(&self) -> Grid {
        self.grid
    }

    /// Take a snapshot of what needs to be drawn
    pub(crate) fn scene(&self) -> Scene {
        Scene {
            grid: self.grid,
            snake: self.snake.clone(),
            food: self.food,
            direction: self.heading,
        }
    }
}

#[cfg(test)]
impl<R> GameState<R> {
    pub(super) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(super) fn food(&self) -> Option<Position> {
        self.food
    }

    pub(super) fn heading(&self) -> Direction {
        self.heading
    }

    pub(super) fn pending(&self) -> Direction {
        self.pending
    }

    /// Lay out a game in progress
    pub(super) fn arrange(&mut self, body: &[Position], heading: Direction, food: Position, score: u32) {
        self.snake = snake_from(body);
        self.heading = heading;
        self.pending = heading;
        self.food = Some(food);
        self.score = score;
    }
}

/// Build a snake from its cells, head first
#[cfg(test)]
fn snake_from(cells: &[Position]) -> Snake {
    let (&head, tail) = cells.split_first().expect("snake should have a head");
    Snake::from_cells(head, tail.iter().copied())
}

/// The outcome of a single [`GameState::tick()`]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct TickResult {
    /// `false` if the snake's head ran into its body
    pub(crate) alive: bool,

    /// `true` if the snake ate the food (and thus grew)
    pub(crate) ate: bool,

    /// `true` if the snake ate the food and there was nowhere left to put
    /// more
    pub(crate) board_full: bool,
}

/// Everything the renderer needs for one frame
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Scene {
    pub(crate) grid: Grid,
    pub(crate) snake: Snake,

    /// `None` once the board is full
    pub(crate) food: Option<Position>,

    pub(crate) direction: Direction,
}

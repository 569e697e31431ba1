//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};

/// Default side length of the square playing surface, in canvas units
pub(crate) const DEFAULT_CANVAS_SIZE: u16 = 400;

/// Default side length of a grid cell, in canvas units
pub(crate) const DEFAULT_CELL_SIZE: u16 = 20;

/// Default number of frames between movements of the snake
pub(crate) const DEFAULT_MOVE_INTERVAL: u32 = 10;

/// Default number of frames scheduled per second
pub(crate) const DEFAULT_FRAME_RATE: u16 = 60;

/// Boards with fewer cells per side than this are rejected
pub(crate) const MIN_TILE_COUNT: u16 = 4;

/// Number of random cells to try when placing food before falling back to a
/// scan of every free cell
pub(crate) const MAX_FOOD_ATTEMPTS: usize = 64;

/// Background of the playing surface
pub(crate) const BACKGROUND_COLOR: Color = Color::Rgb(0xF0, 0xF0, 0xF0);

/// Fill for the snake's segments and the strokes joining them
pub(crate) const SNAKE_COLOR: Color = Color::Rgb(0x4C, 0xAF, 0x50);

/// Fill for the food
pub(crate) const FOOD_COLOR: Color = Color::Rgb(0xFF, 0x00, 0x00);

/// Fill for the whites of the snake's eyes
pub(crate) const EYE_COLOR: Color = Color::Rgb(0xFF, 0xFF, 0xFF);

/// Fill for the snake's pupils
pub(crate) const PUPIL_COLOR: Color = Color::Rgb(0x00, 0x00, 0x00);

/// Diameter of a snake segment (and width of the strokes between segments)
/// as a fraction of the cell size
pub(crate) const SEGMENT_SCALE: f64 = 0.8;

/// Radius of an eye as a fraction of the cell size
pub(crate) const EYE_SCALE: f64 = 0.15;

/// How far the eyes sit ahead of the head's center, and to either side of
/// the line of travel, as a fraction of the cell size
pub(crate) const EYE_OFFSET: f64 = 0.2;

/// How far the pupils sit ahead of the head's center as a fraction of the
/// cell size
pub(crate) const PUPIL_OFFSET: f64 = 0.25;

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the status banner beneath the buttons
pub(crate) const BANNER_STYLE: Style = Style::new().fg(Color::LightRed).add_modifier(Modifier::BOLD);

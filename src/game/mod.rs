mod collision;
mod controller;
mod direction;
mod food;
mod grid;
mod schedule;
mod snake;
mod state;
mod status;
pub(crate) use self::controller::Controller;
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::Grid;
pub(crate) use self::schedule::FrameClock;
pub(crate) use self::state::Scene;
pub(crate) use self::status::{Banner, PauseLabel, UiDirective};

#[cfg(test)]
pub(crate) use self::snake::Snake;

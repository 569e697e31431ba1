use super::direction::Direction;
use super::grid::Grid;
use super::schedule::{FrameHandle, FrameScheduler};
use super::state::{GameState, Scene};
use super::status::{Ending, GameStatus, PauseLabel, Scheduling, Trigger, UiDirective};
use rand::Rng;

/// Drives the game: decides on each frame whether the snake moves, whether
/// the board should be redrawn, and whether the game is over, and handles
/// pausing and restarting.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Controller<R = rand::rngs::ThreadRng> {
    state: GameState<R>,
    status: GameStatus,

    /// Frames since the snake last moved
    frame_count: u32,

    /// Number of frames per movement of the snake
    move_interval: u32,

    /// Best score at the end of any game so far this session
    high_score: u32,

    /// The frame currently requested from the scheduler, if any
    frame: Option<FrameHandle>,
}

/// What the host needs to do after a frame
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct FrameOutput {
    /// If `Some`, draw this
    pub(crate) scene: Option<Scene>,
    pub(crate) directives: Vec<UiDirective>,
}

impl<R: Rng> Controller<R> {
    /// Create a controller for a fresh game.  `move_interval` is clamped to
    /// at least one frame.
    pub(crate) fn new(grid: Grid, move_interval: u32, rng: R) -> Controller<R> {
        Controller {
            state: GameState::new(grid, rng),
            status: GameStatus::Running,
            frame_count: 0,
            move_interval: move_interval.max(1),
            high_score: 0,
            frame: None,
        }
    }

    /// Request the first frame and return the directives that set up the
    /// interface for a running game
    pub(crate) fn start<S: FrameScheduler>(&mut self, scheduler: &mut S) -> Vec<UiDirective> {
        tracing::info!(
            tile_count = self.state.grid().tile_count(),
            move_interval = self.move_interval,
            "Starting game"
        );
        self.arm(scheduler);
        vec![
            UiDirective::SetScore(self.state.score()),
            UiDirective::SetHighScore(self.high_score),
            UiDirective::ShowPauseButton(PauseLabel::Pause),
            UiDirective::HideRestartButton,
            UiDirective::SetBanner(None),
        ]
    }

    /// Handle a frame delivered by the scheduler.
    ///
    /// Every `move_interval`-th frame moves the snake.  Every frame that
    /// leaves the game running asks for a redraw and requests the next frame.
    pub(crate) fn on_frame<S: FrameScheduler>(&mut self, scheduler: &mut S) -> FrameOutput {
        // The frame we asked for has now been delivered.
        self.frame = None;
        let mut output = FrameOutput::default();
        if !self.status.is_running() {
            return output;
        }
        self.frame_count += 1;
        if self.frame_count >= self.move_interval {
            self.frame_count = 0;
            let r = self.state.tick();
            if r.ate {
                output
                    .directives
                    .push(UiDirective::SetScore(self.state.score()));
            }
            if !r.alive {
                output
                    .directives
                    .extend(self.fire(Trigger::Collision, scheduler));
                return output;
            }
            if r.board_full {
                output
                    .directives
                    .extend(self.fire(Trigger::BoardFull, scheduler));
                // Show off the full board, but don't ask for more frames.
                output.scene = Some(self.state.scene());
                return output;
            }
        }
        output.scene = Some(self.state.scene());
        self.arm(scheduler);
        output
    }

    /// Pass a direction key on to the snake.  Ignored unless the game is
    /// running.
    pub(crate) fn steer(&mut self, direction: Direction) {
        if self.status.is_running() && !self.state.steer(direction) {
            tracing::debug!(?direction, "Ignoring turn back into the snake");
        }
    }

    /// Handle the pause/resume button
    pub(crate) fn toggle_pause<S: FrameScheduler>(&mut self, scheduler: &mut S) -> Vec<UiDirective> {
        self.fire(Trigger::TogglePause, scheduler)
    }

    /// Handle the restart button
    pub(crate) fn restart<S: FrameScheduler>(&mut self, scheduler: &mut S) -> Vec<UiDirective> {
        self.fire(Trigger::Restart, scheduler)
    }

    fn fire<S: FrameScheduler>(&mut self, trigger: Trigger, scheduler: &mut S) -> Vec<UiDirective> {
        let Some(transition) = self.status.transition(trigger) else {
            return Vec::new();
        };
        let mut directives = transition.directives;
        match (self.status, transition.next) {
            (_, GameStatus::Ended(ending)) => {
                let score = self.state.score();
                match ending {
                    Ending::Collision => tracing::info!(score, "Game over"),
                    Ending::BoardFull => tracing::info!(score, "Board filled; game won"),
                }
                if score > self.high_score {
                    self.high_score = score;
                    directives.push(UiDirective::SetHighScore(score));
                }
            }
            (GameStatus::Ended(_), GameStatus::Running) => {
                tracing::info!("Restarting game");
                self.state.reset();
                self.frame_count = 0;
            }
            (_, GameStatus::Paused) => tracing::info!("Paused"),
            (GameStatus::Paused, GameStatus::Running) => tracing::info!("Resumed"),
            _ => (),
        }
        self.status = transition.next;
        match transition.scheduling {
            Scheduling::Arm => self.arm(scheduler),
            Scheduling::Cancel => self.disarm(scheduler),
        }
        directives
    }

    fn arm<S: FrameScheduler>(&mut self, scheduler: &mut S) {
        self.disarm(scheduler);
        self.frame = Some(scheduler.schedule_next_frame());
    }

    fn disarm<S: FrameScheduler>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.frame.take() {
            scheduler.cancel(handle);
        }
    }
}

impl<R> Controller<R> {
    pub(crate) fn status(&self) -> GameStatus {
        self.status
    }

    pub(crate) fn high_score(&self) -> u32 {
        self.high_score
    }

    pub(crate) fn score(&self) -> u32 {
        self.state.score()
    }

    /// Snapshot of the board as it currently stands
    pub(crate) fn scene(&self) -> Scene {
        self.state.scene()
    }
}

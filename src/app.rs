use crate::command::Command;
use crate::config::GameConfig;
use crate::game::{Controller, FrameClock, Scene};
use crate::hud::Hud;
use crate::render::{self, Raster};
use crate::util;
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect, Size},
    widgets::Widget,
    Terminal,
};
use std::io;

/// The terminal host for a game: feeds it frames from a [`FrameClock`] and
/// key presses from the terminal, and draws the board & HUD.
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    controller: Controller<R>,
    hud: Hud,
    clock: FrameClock,

    /// The most recently rendered board.  It stays on screen while the game
    /// is paused or over.
    scene: Scene,

    quitting: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(config: GameConfig, rng: R) -> App<R> {
        let mut controller = Controller::new(config.grid, config.move_interval, rng);
        let mut clock = FrameClock::new(config.frame_period());
        let mut hud = Hud::new();
        hud.apply_all(controller.start(&mut clock));
        let scene = controller.scene();
        App {
            controller,
            hud,
            clock,
            scene,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    /// Wait until either the next frame is due or an event arrives, and
    /// handle whichever came first.  If no frame is pending (the game is
    /// paused or over), just wait for an event.
    fn process_input(&mut self) -> io::Result<()> {
        let Some(wait) = self.clock.wait() else {
            self.handle_event(read()?);
            return Ok(());
        };
        if poll(wait)? {
            self.handle_event(read()?);
        } else if self.clock.fire() {
            self.on_frame();
        }
        Ok(())
    }

    fn on_frame(&mut self) {
        let output = self.controller.on_frame(&mut self.clock);
        self.hud.apply_all(output.directives);
        if let Some(scene) = output.scene {
            self.scene = scene;
        }
    }

    fn handle_event(&mut self, event: Event) {
        if let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) {
            self.handle_command(cmd);
        }
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Quit => {
                tracing::info!(
                    status = ?self.controller.status(),
                    score = self.controller.score(),
                    high_score = self.controller.high_score(),
                    "Quitting"
                );
                self.quitting = true;
            }
            Command::Pause => {
                let directives = self.controller.toggle_pause(&mut self.clock);
                self.hud.apply_all(directives);
            }
            Command::Restart => {
                let directives = self.controller.restart(&mut self.clock);
                if !directives.is_empty() {
                    self.hud.apply_all(directives);
                    self.scene = self.controller.scene();
                }
            }
            Command::Up | Command::Down | Command::Left | Command::Right => {
                if let Some(direction) = cmd.direction() {
                    self.controller.steer(direction);
                }
            }
        }
    }
}

impl<R> App<R> {
    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }
}

impl<R> Widget for &App<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [score_area, board_area, buttons_area, banner_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        self.hud.score_bar().render(score_area, buf);
        let mut raster = Raster::new(util::board_pixels(board_area), self.scene.grid.extent());
        render::render(&mut raster, &self.scene);
        let board = util::center_rect(board_area, Size::new(raster.side(), raster.rows()));
        raster.render(board, buf);
        self.hud.buttons().render(buttons_area, buf);
        if let Some(banner) = self.hud.banner() {
            banner.render(banner_area, buf);
        }
    }
}

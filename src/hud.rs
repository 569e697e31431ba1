use crate::consts;
use crate::game::{Banner, PauseLabel, UiDirective};
use ratatui::text::{Line, Span};

/// The labels and buttons shown around the board.
///
/// The HUD holds no opinions of its own about what should be visible; it
/// just applies whatever [`UiDirective`]s the game hands it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Hud {
    score: u32,
    high_score: u32,

    /// The pause/resume button's label, or `None` if it's hidden
    pause_button: Option<PauseLabel>,

    restart_button: bool,
    banner: Option<Banner>,
}

impl Hud {
    pub(crate) fn new() -> Hud {
        Hud::default()
    }

    pub(crate) fn apply(&mut self, directive: UiDirective) {
        match directive {
            UiDirective::ShowPauseButton(label) => self.pause_button = Some(label),
            UiDirective::HidePauseButton => self.pause_button = None,
            UiDirective::ShowRestartButton => self.restart_button = true,
            UiDirective::HideRestartButton => self.restart_button = false,
            UiDirective::SetBanner(banner) => self.banner = banner,
            UiDirective::SetScore(score) => self.score = score,
            UiDirective::SetHighScore(score) => self.high_score = score,
        }
    }

    pub(crate) fn apply_all<I: IntoIterator<Item = UiDirective>>(&mut self, directives: I) {
        for d in directives {
            self.apply(d);
        }
    }

    pub(crate) fn score_bar(&self) -> Line<'static> {
        Line::from(format!(
            " Score: {}   High Score: {}",
            self.score, self.high_score
        ))
        .style(consts::SCORE_BAR_STYLE)
    }

    /// The row of buttons currently on offer, each showing the key that
    /// presses it
    pub(crate) fn buttons(&self) -> Line<'static> {
        let mut buttons = Vec::with_capacity(3);
        if let Some(label) = self.pause_button {
            let text = match label {
                PauseLabel::Pause => "Pause",
                PauseLabel::Resume => "Resume",
            };
            buttons.push((text, "p"));
        }
        if self.restart_button {
            buttons.push(("Restart", "r"));
        }
        buttons.push(("Quit", "q"));
        let mut spans = Vec::new();
        for (i, (text, key)) in buttons.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::raw(format!("[{text} (")));
            spans.push(Span::styled(key, consts::KEY_STYLE));
            spans.push(Span::raw(")]"));
        }
        Line::from(spans).centered()
    }

    pub(crate) fn banner(&self) -> Option<Line<'static>> {
        let text = match self.banner? {
            Banner::Paused => "Paused",
            Banner::GameOver => "Game over!",
            Banner::BoardFull => "The board is full.  You win!",
        };
        Some(Line::styled(text, consts::BANNER_STYLE).centered())
    }
}

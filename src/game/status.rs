//! The game's top-level state machine, kept free of any side effects.
//!
//! [`GameStatus::transition()`] decides what a trigger does in the current
//! status and describes the consequences as data: whether frames should keep
//! being scheduled, and which [`UiDirective`]s the interface must apply.
//! Applying them is up to the caller.

/// Whether the game is being played, paused, or over
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameStatus {
    Running,
    Paused,
    Ended(Ending),
}

/// Why a game ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Ending {
    /// The snake ran into itself
    Collision,

    /// The snake filled the board and there is nowhere left to put food
    BoardFull,
}

/// Things that can move the game from one status to another
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Trigger {
    Collision,
    BoardFull,
    /// The pause/resume button was pressed
    TogglePause,
    /// The restart button was pressed
    Restart,
}

/// What to do with the frame schedule after a transition
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Scheduling {
    /// Start (or keep) requesting frames
    Arm,
    /// Cancel the pending frame and request no more
    Cancel,
}

/// The text on the pause/resume button
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum PauseLabel {
    Pause,
    Resume,
}

/// A message shown beneath the buttons
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Banner {
    Paused,
    GameOver,
    BoardFull,
}

/// An instruction for the buttons & labels surrounding the board
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum UiDirective {
    ShowPauseButton(PauseLabel),
    HidePauseButton,
    ShowRestartButton,
    HideRestartButton,
    SetBanner(Option<Banner>),
    SetScore(u32),
    SetHighScore(u32),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Transition {
    pub(crate) next: GameStatus,
    pub(crate) scheduling: Scheduling,
    pub(crate) directives: Vec<UiDirective>,
}

impl GameStatus {
    /// Work out where `trigger` takes the game from this status.  Returns
    /// `None` if the trigger has no effect in this status, e.g., pressing
    /// pause after the game has ended.
    pub(crate) fn transition(self, trigger: Trigger) -> Option<Transition> {
        match (self, trigger) {
            (GameStatus::Running, Trigger::Collision) => Some(end(Ending::Collision)),
            (GameStatus::Running, Trigger::BoardFull) => Some(end(Ending::BoardFull)),
            (GameStatus::Running, Trigger::TogglePause) => Some(Transition {
                next: GameStatus::Paused,
                scheduling: Scheduling::Cancel,
                directives: vec![
                    UiDirective::ShowPauseButton(PauseLabel::Resume),
                    UiDirective::SetBanner(Some(Banner::Paused)),
                ],
            }),
            (GameStatus::Paused, Trigger::TogglePause) => Some(Transition {
                next: GameStatus::Running,
                scheduling: Scheduling::Arm,
                directives: vec![
                    UiDirective::ShowPauseButton(PauseLabel::Pause),
                    UiDirective::SetBanner(None),
                ],
            }),
            (GameStatus::Ended(_), Trigger::Restart) => Some(Transition {
                next: GameStatus::Running,
                scheduling: Scheduling::Arm,
                directives: vec![
                    UiDirective::SetScore(0),
                    UiDirective::ShowPauseButton(PauseLabel::Pause),
                    UiDirective::HideRestartButton,
                    UiDirective::SetBanner(None),
                ],
            }),
            _ => None,
        }
    }

    pub(crate) fn is_running(self) -> bool {
        self == GameStatus::Running
    }
}

fn end(ending: Ending) -> Transition {
    let banner = match ending {
        Ending::Collision => Banner::GameOver,
        Ending::BoardFull => Banner::BoardFull,
    };
    Transition {
        next: GameStatus::Ended(ending),
        scheduling: Scheduling::Cancel,
        directives: vec![
            UiDirective::ShowRestartButton,
            UiDirective::HidePauseButton,
            UiDirective::SetBanner(Some(banner)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(GameStatus::Running, Trigger::Collision, Some((GameStatus::Ended(Ending::Collision), Scheduling::Cancel)))]
    #[case(GameStatus::Running, Trigger::BoardFull, Some((GameStatus::Ended(Ending::BoardFull), Scheduling::Cancel)))]
    #[case(GameStatus::Running, Trigger::TogglePause, Some((GameStatus::Paused, Scheduling::Cancel)))]
    #[case(GameStatus::Running, Trigger::Restart, None)]
    #[case(GameStatus::Paused, Trigger::TogglePause, Some((GameStatus::Running, Scheduling::Arm)))]
    #[case(GameStatus::Paused, Trigger::Collision, None)]
    #[case(GameStatus::Paused, Trigger::BoardFull, None)]
    #[case(GameStatus::Paused, Trigger::Restart, None)]
    #[case(GameStatus::Ended(Ending::Collision), Trigger::Restart, Some((GameStatus::Running, Scheduling::Arm)))]
    #[case(GameStatus::Ended(Ending::BoardFull), Trigger::Restart, Some((GameStatus::Running, Scheduling::Arm)))]
    #[case(GameStatus::Ended(Ending::Collision), Trigger::TogglePause, None)]
    #[case(GameStatus::Ended(Ending::Collision), Trigger::Collision, None)]
    fn transition_table(
        #[case] from: GameStatus,
        #[case] trigger: Trigger,
        #[case] to: Option<(GameStatus, Scheduling)>,
    ) {
        assert_eq!(
            from.transition(trigger).map(|t| (t.next, t.scheduling)),
            to
        );
    }

    #[test]
    fn game_over_directives() {
        let t = GameStatus::Running
            .transition(Trigger::Collision)
            .expect("collision should end a running game");
        assert!(t.directives.contains(&UiDirective::ShowRestartButton));
        assert!(t.directives.contains(&UiDirective::HidePauseButton));
        assert!(t
            .directives
            .contains(&UiDirective::SetBanner(Some(Banner::GameOver))));
    }

    #[test]
    fn pause_and_resume_relabel_button() {
        let t = GameStatus::Running
            .transition(Trigger::TogglePause)
            .expect("a running game should pause");
        assert!(t
            .directives
            .contains(&UiDirective::ShowPauseButton(PauseLabel::Resume)));
        let t = t
            .next
            .transition(Trigger::TogglePause)
            .expect("a paused game should resume");
        assert!(t
            .directives
            .contains(&UiDirective::ShowPauseButton(PauseLabel::Pause)));
        assert!(t.directives.contains(&UiDirective::SetBanner(None)));
    }

    #[test]
    fn restart_directives() {
        let t = GameStatus::Ended(Ending::BoardFull)
            .transition(Trigger::Restart)
            .expect("an ended game should restart");
        pretty_assertions::assert_eq!(
            t.directives,
            vec![
                UiDirective::SetScore(0),
                UiDirective::ShowPauseButton(PauseLabel::Pause),
                UiDirective::HideRestartButton,
                UiDirective::SetBanner(None),
            ]
        );
    }
}

use quicksilver::input::{ButtonState, Key};
use crate::game::session::{Command, Phase};

/// Any key flaps mid-round; only space starts a new one.
pub fn command_for(key: Key, state: ButtonState, phase: Phase) -> Option<Command> {
    if state != ButtonState::Pressed {
        return None;
    }
    match phase {
        Phase::Running => Some(Command::Flap),
        Phase::GameOver if key == Key::Space => Some(Command::Restart),
        Phase::GameOver => None,
    }
}

use crate::direction::Direction;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Invalid move.")]
pub struct ParseCommandError(pub char);

/// One turn's worth of player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
}

impl TryFrom<char> for Command {
    type Error = ParseCommandError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'U' => Ok(Self::Move(Direction::Up)),
            'D' => Ok(Self::Move(Direction::Down)),
            'L' => Ok(Self::Move(Direction::Left)),
            'R' => Ok(Self::Move(Direction::Right)),
            'Q' => Ok(Self::Quit),
            _ => Err(ParseCommandError(c)),
        }
    }
}

pub use core_2048::*;

pub mod command;
pub mod difficulty;
pub mod direction;
pub mod engine;
pub mod logic;

pub use command::{Command, ParseCommandError};
pub use difficulty::{Difficulty, ParseDifficultyError};
pub use direction::Direction;
pub use engine::{GameOutcome, GridEngine};

use std::{fmt, str::FromStr};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid mode.")]
pub struct ParseDifficultyError(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// The tile value that wins the game.
    pub const fn target(self) -> u32 {
        match self {
            Self::Easy => 256,
            Self::Medium => 512,
            Self::Hard => 1024,
        }
    }

    /// A spawned tile is a 4 when a draw from `1..=10` exceeds this, otherwise a 2.
    ///
    /// Easy spawns 4s most often (50%), Hard least often (10%).
    pub const fn four_threshold(self) -> u32 {
        match self {
            Self::Easy => 5,
            Self::Medium => 7,
            Self::Hard => 9,
        }
    }
}

impl TryFrom<char> for Difficulty {
    type Error = ParseDifficultyError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'E' => Ok(Self::Easy),
            'M' => Ok(Self::Medium),
            'H' => Ok(Self::Hard),
            _ => Err(ParseDifficultyError(c.to_string())),
        }
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();

        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => match s.to_ascii_lowercase().as_str() {
                "easy" => Ok(Self::Easy),
                "medium" => Ok(Self::Medium),
                "hard" => Ok(Self::Hard),
                _ => Err(ParseDifficultyError(s.to_owned())),
            },
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        };

        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_parses_mode_chars() {
        assert_eq!(Difficulty::try_from('e'), Ok(Difficulty::Easy));
        assert_eq!(Difficulty::try_from('E'), Ok(Difficulty::Easy));
        assert_eq!(Difficulty::try_from('m'), Ok(Difficulty::Medium));
        assert_eq!(Difficulty::try_from('H'), Ok(Difficulty::Hard));
        assert_eq!(
            Difficulty::try_from('x'),
            Err(ParseDifficultyError("x".to_owned()))
        );
    }

    #[test]
    fn it_parses_mode_strings() {
        assert_eq!("h".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("Medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!(" easy ".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert!("extreme".parse::<Difficulty>().is_err());
        assert!("".parse::<Difficulty>().is_err());
    }

    #[test]
    fn it_maps_targets_and_thresholds() {
        assert_eq!(Difficulty::Easy.target(), 256);
        assert_eq!(Difficulty::Medium.target(), 512);
        assert_eq!(Difficulty::Hard.target(), 1024);

        assert_eq!(Difficulty::Easy.four_threshold(), 5);
        assert_eq!(Difficulty::Medium.four_threshold(), 7);
        assert_eq!(Difficulty::Hard.four_threshold(), 9);
    }

    #[test]
    fn it_reports_invalid_mode() {
        assert_eq!(
            ParseDifficultyError("q".to_owned()).to_string(),
            "Invalid mode."
        );
    }
}

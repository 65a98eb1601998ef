use std::ffi::OsString;

use clap::{value_parser, Arg, Command};
use lib_2048::Difficulty;

/// Startup settings taken from the command line. Anything missing is asked for on stdin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<i64>,
    pub difficulty: Option<Difficulty>,
}

fn command() -> Command {
    Command::new("console-2048")
        .about("Play 2048 in the terminal")
        .arg(
            Arg::new("Seed")
                .short('s')
                .long("seed")
                .help("Random seed; prompted for when omitted")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64)),
        )
        .arg(
            Arg::new("Difficulty")
                .short('d')
                .long("difficulty")
                .help("E, M or H; prompted for when omitted")
                .value_parser(value_parser!(Difficulty)),
        )
}

impl Config {
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = command().try_get_matches_from(args)?;

        Ok(Self {
            seed: matches.get_one::<i64>("Seed").copied(),
            difficulty: matches.get_one::<Difficulty>("Difficulty").copied(),
        })
    }
}

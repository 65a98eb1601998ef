use std::io::{self, BufRead, Write};

use lib_2048::{Command, Difficulty, GameOutcome, GridEngine};
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    config::Config,
    input::{self, Tokens},
    render,
};

fn prompt_seed(
    tokens: &mut Tokens<impl BufRead>,
    out: &mut impl Write,
) -> io::Result<Option<i64>> {
    loop {
        writeln!(out, "Enter random seed: ")?;
        out.flush()?;

        let Some(word) = tokens.next_word()? else {
            return Ok(None);
        };

        match input::parse_seed(&word) {
            Ok(seed) => return Ok(Some(seed)),
            Err(err) => writeln!(out, "Error: {err}")?,
        }
    }
}

fn prompt_difficulty(
    tokens: &mut Tokens<impl BufRead>,
    out: &mut impl Write,
) -> io::Result<Option<Difficulty>> {
    loop {
        writeln!(out, "Choose game mode: Easy (E), Medium (M), or Hard (H): ")?;
        out.flush()?;

        let Some(c) = tokens.next_char()? else {
            return Ok(None);
        };

        match Difficulty::try_from(c) {
            Ok(difficulty) => {
                writeln!(out)?;
                return Ok(Some(difficulty));
            }
            Err(err) => writeln!(out, "Error: {err}")?,
        }
    }
}

/// Runs turns until the game is won or lost, the player quits, or input runs out.
///
/// Returns `GameOutcome::InProgress` when the game was abandoned.
pub fn play(
    engine: &mut GridEngine,
    rng: &mut impl Rng,
    tokens: &mut Tokens<impl BufRead>,
    out: &mut impl Write,
) -> io::Result<GameOutcome> {
    loop {
        render::draw_grid(out, engine.grid())?;

        match engine.outcome() {
            GameOutcome::Won => {
                writeln!(out, "You win!")?;
                return Ok(GameOutcome::Won);
            }
            GameOutcome::Lost => {
                writeln!(out, "You lose.")?;
                return Ok(GameOutcome::Lost);
            }
            GameOutcome::InProgress => {}
        }

        writeln!(out, "Enter move: U, D, L, or R. Q to quit: \n")?;
        out.flush()?;

        let Some(c) = tokens.next_char()? else {
            return Ok(GameOutcome::InProgress);
        };

        match Command::try_from(c) {
            Ok(Command::Move(direction)) => {
                if engine.slide(direction) {
                    engine.spawn_random_tile(rng);
                }
            }
            Ok(Command::Quit) => return Ok(GameOutcome::InProgress),
            Err(err) => writeln!(out, "Error: {err}")?,
        }
    }
}

/// Prompts for whatever `config` leaves open, then plays one game.
pub fn run(config: Config, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    let mut tokens = Tokens::new(input);

    let seed = match config.seed {
        Some(seed) => seed,
        None => match prompt_seed(&mut tokens, out)? {
            Some(seed) => seed,
            None => return Ok(()),
        },
    };

    let difficulty = match config.difficulty {
        Some(difficulty) => difficulty,
        None => match prompt_difficulty(&mut tokens, out)? {
            Some(difficulty) => difficulty,
            None => return Ok(()),
        },
    };

    let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
    let mut engine = GridEngine::new_game(difficulty, &mut rng);

    info!(
        "starting {difficulty} game with seed {seed}, target {}",
        engine.target()
    );

    let outcome = play(&mut engine, &mut rng, &mut tokens, out)?;

    info!("game over: {outcome:?}");

    Ok(())
}

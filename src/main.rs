use std::{env, io};

use env_logger::Env;

mod config;
mod game;
mod input;
mod render;

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = match config::Config::try_from_args(env::args_os()) {
        Ok(config) => config,
        Err(err) => err.exit(),
    };

    let mut stdout = io::stdout().lock();
    let stdin = io::stdin().lock();

    game::run(config, stdin, &mut stdout)
}

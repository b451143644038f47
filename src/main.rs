use std::process::ExitCode;

use env_logger::Env;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().filter_or("CHESS_MOVES_LOG", "warn")).init();

    chess_moves::cli::run(std::env::args().skip(1))
}

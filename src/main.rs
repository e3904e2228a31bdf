use std::process::ExitCode;

use log::error;

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the UCI protocol.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match minimax_bot::uci::run_uci_loop() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("uci loop failed: {e}");
            ExitCode::FAILURE
        }
    }
}

#![allow(dead_code)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod command_control;
mod config;
mod error;
mod flight_control;
mod hardware;
mod logger;
mod menu_control;
mod path_control;
mod persistence;
mod util;

use crate::command_control::{CommandDispatcher, Supervisor};
use crate::config::PilotConfig;
use crate::util::Keychain;
use tokio::io::BufReader;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = PilotConfig::from_env();
    info!(
        "Starting AI pilot, store at {}, display at {}.",
        config.store_path.display(),
        config.lcd_path.display()
    );
    let dispatcher = CommandDispatcher::new(Keychain::from_config(&config));
    let supervisor = Supervisor::new(config.tick);

    let token = supervisor.cancel_token();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => token.cancel(),
            Err(e) => error!("Could not listen for Ctrl-C: {e}"),
        }
    });

    let dispatcher = supervisor.run(dispatcher, BufReader::new(tokio::io::stdin())).await;
    info!("Stopped with {} stored paths.", dispatcher.paths().len());
    // the blocking stdin reader cannot be cancelled and would hold up runtime shutdown
    std::process::exit(0);
}

//! Subcommand dispatch and execution.
//!
//! The [`dispatch`] function routes the parsed CLI to the appropriate
//! subcommand handler: [`run`] or [`health`]. Each handler lives in
//! its own submodule.

pub mod health;
pub mod run;

use crate::cli::{Cli, Commands};
use crate::error::UplinkError;

pub async fn dispatch(cli: Cli) -> Result<(), UplinkError> {
    match cli.command {
        Some(Commands::Run(args)) => run::execute(args).await,
        Some(Commands::Health(args)) => health::execute(args).await,
        None => {
            print_welcome();
            Ok(())
        }
    }
}

fn print_welcome() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        "\n  uplink v{version} \u{2014} queue/Kafka upload testbed service\n\n  \
         No command provided. To get started:\n\n    \
         uplink run                Start the server on 0.0.0.0:3000\n    \
         uplink run -p 8080        Start on a specific port\n    \
         uplink health             Probe a running instance\n    \
         uplink --help             See all commands and options\n"
    );
}

//! Beehive CLI binary entry point.

use beehive::cli::commands::{
    handle_call, handle_login_url, handle_robots, handle_status, resolve_config,
};
use beehive::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();
    let config = resolve_config(&cli);

    let result = match &cli.command {
        Commands::LoginUrl(args) => handle_login_url(config, args),
        Commands::Status(args) => handle_status(config, args).await,
        Commands::Robots(args) => handle_robots(config, args).await,
        Commands::Call(args) => handle_call(config, args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

use clap::Parser;
use todoist_cli::cli::{Cli, Commands};
use todoist_cli::cli_handlers::{
    handle_add_command, handle_auth_command, handle_logout_command, handle_reorder_command,
};
use todoist_cli::error::Result;
use todoist_cli::logging::{init_logging, LoggingConfig};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_config = LoggingConfig::from_args(cli.quiet, cli.verbose, cli.log_json);
    if let Err(e) = init_logging(log_config) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli).await {
        let error_response = e.to_error_response();
        match serde_json::to_string_pretty(&error_response) {
            Ok(rendered) => eprintln!("{}", rendered),
            Err(_) => eprintln!("{}", e),
        }
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Auth { token } => handle_auth_command(token)?,
        Commands::Logout => handle_logout_command()?,
        Commands::Add(args) => handle_add_command(args).await?,
        Commands::Reorder(args) => handle_reorder_command(args).await?,
    }

    Ok(())
}

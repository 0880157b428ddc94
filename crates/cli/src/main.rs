//! Matomo chat CLI - connectivity check and direct tool calls.
//!
//! # Usage
//!
//! ```bash
//! # Check that Matomo answers with the configured URL and token
//! matomo-cli check --site 5
//!
//! # Print the tracked sites
//! matomo-cli sites
//!
//! # Print the tool definitions
//! matomo-cli tools
//!
//! # Run one tool
//! matomo-cli call get_visits_summary --input '{"site": "galacticaia", "period": "esta semana"}'
//! ```
//!
//! # Commands
//!
//! - `check` - Raw `VisitsSummary.get` request against Matomo
//! - `sites` - Tracked site directory
//! - `tools` - Tool definitions
//! - `call` - Run a tool and print its JSON result

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "matomo-cli")]
#[command(author, version, about = "Matomo chat CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the Matomo connection with a raw visits summary request
    Check {
        /// Matomo site id to query
        #[arg(short, long, default_value_t = 5)]
        site: i32,
    },
    /// List tracked sites and their nicknames
    Sites,
    /// List tool definitions as JSON
    Tools,
    /// Run a tool and print its result
    Call {
        /// Tool name (see `matomo-cli tools`)
        name: String,

        /// Tool arguments as a JSON object
        #[arg(short, long, default_value = "{}")]
        input: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "matomo_chat_server=info,matomo_cli=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Check { site } => commands::check::run(site).await?,
        Commands::Sites => commands::tools::sites()?,
        Commands::Tools => commands::tools::definitions()?,
        Commands::Call { name, input } => commands::tools::call(&name, &input).await?,
    }
    Ok(())
}

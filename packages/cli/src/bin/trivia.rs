use std::net::IpAddr;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use colored::*;

use trivia_cli::config::Config;
use trivia_cli::{init_tracing, run_server};

#[derive(Parser)]
#[command(name = "trivia")]
#[command(about = "Trivia game API server")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Address to bind (overrides TRIVIA_HOST)
        #[arg(long)]
        host: Option<IpAddr>,
        /// Port to listen on (overrides PORT)
        #[arg(long)]
        port: Option<u16>,
        /// SQLite database file (overrides TRIVIA_DATABASE_PATH)
        #[arg(long)]
        database: Option<PathBuf>,
        /// Default log level when RUST_LOG is unset
        #[arg(long, default_value = "info")]
        log_level: String,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
        database: None,
        log_level: "info".to_string(),
    });

    if let Err(e) = handle_command(command).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Serve {
            host,
            port,
            database,
            log_level,
        } => {
            init_tracing(&log_level);

            let mut config = Config::from_env()?;
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                anyhow::ensure!(port != 0, "Port 0 is out of valid range (1-65535)");
                config.port = port;
            }
            if let Some(database) = database {
                config.database_path = database;
            }

            run_server(config).await
        }
    }
}

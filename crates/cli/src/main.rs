mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use school_locator_core::DEFAULT_PORT;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "school-locator")]
#[command(about = "Register schools and list them by distance", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
        #[arg(short = 'H', long, env = "HOST", default_value = "0.0.0.0")]
        host: String,
        /// Keep schools in process memory instead of PostgreSQL
        #[arg(long)]
        memory: bool,
    },
    /// Create the schools table and indexes, then exit
    Migrate,
}

pub(crate) fn get_database_url() -> Result<String> {
    std::env::var("DATABASE_URL").map_err(|_| {
        anyhow::anyhow!("DATABASE_URL environment variable must be set (or pass --memory to serve)")
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host, memory } => commands::serve::run(port, host, memory).await,
        Commands::Migrate => commands::migrate::run().await,
    }
}

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "hyperfleetd",
    about = "HyperFleet control plane: AdapterStatus ingestion and aggregation API",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Start the HTTP API server.
    Serve {
        /// Address to bind the HTTP server to.
        #[arg(long, env = "HYPERFLEET_BIND", default_value = "0.0.0.0")]
        bind: String,

        /// Port to listen on.
        #[arg(long, env = "HYPERFLEET_PORT", default_value_t = 8080)]
        port: u16,

        /// Postgres connection string. When omitted, an in-memory store is
        /// used — fine for development, lost on restart.
        #[arg(long, env = "HYPERFLEET_DATABASE_URL")]
        database_url: Option<String>,

        /// Path to the YAML core config (required adapters, suffix overrides).
        #[arg(long, env = "HYPERFLEET_CONFIG")]
        config: PathBuf,

        /// Bearer token required on every request. Generated and persisted
        /// to the token file when omitted.
        #[arg(long, env = "HYPERFLEET_AUTH_TOKEN")]
        auth_token: Option<String>,

        /// Rotate (regenerate) the persisted auth token even if one exists.
        #[arg(long)]
        rotate_token: bool,
    },
}

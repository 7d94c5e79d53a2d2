use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use std::path::PathBuf;
use taskbook::db::db::Db;
use taskbook::libs::config::Config;
use taskbook::libs::messages::Message;
use taskbook::msg_debug;
use taskbook::server;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long)]
    host: Option<String>,
    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,
    /// Path of the SQLite database file
    #[arg(long)]
    db_path: Option<PathBuf>,
    /// Maximum number of pooled database connections
    #[arg(long)]
    pool_size: Option<u32>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(db_path) = cli.db_path {
        config.database.path = db_path;
    }
    if let Some(pool_size) = cli.pool_size {
        config.database.pool_size = pool_size;
    }

    msg_debug!(Message::UsingDatabase(config.database.path.display().to_string()));

    // A failed connection or bootstrap aborts startup before any traffic.
    let db = Db::init(&config.database).await?;

    server::serve(&config.server, db).await
}

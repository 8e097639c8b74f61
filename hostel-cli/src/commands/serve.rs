//! HTTP server command
//!
//! Opens the document store once, then serves every route until Ctrl+C or
//! SIGTERM.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use hostel_server::db::MemoryStore;
use hostel_server::{run_server, Gateway, ServerConfig, StoreSettings};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// MongoDB connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Database holding the hostel collections
    #[arg(long, env = "DATABASE_NAME")]
    pub database_name: Option<String>,

    /// Keep records in process memory instead of MongoDB (lost on exit).
    /// Takes precedence over --database-url
    #[arg(long)]
    pub in_memory: bool,
}

impl ServeArgs {
    fn settings(&self) -> StoreSettings {
        StoreSettings::new(self.database_url.clone(), self.database_name.clone())
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let gateway = if args.in_memory {
        tracing::warn!("Using in-memory store; records are lost on shutdown");
        let name = args.database_name.clone().unwrap_or_else(|| "hostel".to_string());
        Gateway::with_store(Arc::new(MemoryStore::new(name)), args.settings())
    } else {
        Gateway::connect(args.settings()).await
    };

    let config = ServerConfig {
        bind_addr: SocketAddr::new(args.host, args.port),
    };

    tracing::info!("Starting hostel server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(gateway, config).await.context("Server error")?;

    Ok(())
}

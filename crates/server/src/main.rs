// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP server for the room booking service.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod extract;
mod routes;
mod session;

#[cfg(test)]
mod tests;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use axum::Router;
use clap::Parser;
use roombook_api::ensure_bootstrap_admin;
use roombook_persistence::Persistence;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::routes::build_router;

/// Roombook Server - HTTP server for municipal room booking
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, conflicts_with = "mysql_url")]
    database: Option<String>,

    /// MySQL/MariaDB connection URL. Replaces `SQLite` when given.
    #[arg(long)]
    mysql_url: Option<String>,

    /// Address to bind the server to
    #[arg(short, long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    bind: IpAddr,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Name of the administrator created when no user exists
    #[arg(long, requires = "admin_email")]
    admin_name: Option<String>,

    /// Email of the administrator created when no user exists
    #[arg(long, requires = "admin_name")]
    admin_email: Option<String>,
}

/// Application state shared across handlers.
///
/// Requests are serialized on the mutex; booking atomicity itself is
/// enforced by the database transaction.
#[derive(Clone)]
pub struct AppState {
    pub persistence: Arc<Mutex<Persistence>>,
}

impl AppState {
    pub fn new(persistence: Persistence) -> Self {
        Self {
            persistence: Arc::new(Mutex::new(persistence)),
        }
    }
}

fn open_persistence(args: &Args) -> Result<Persistence, Box<dyn std::error::Error>> {
    let persistence: Persistence = if let Some(url) = &args.mysql_url {
        info!("Using MySQL/MariaDB database");
        Persistence::new_with_mysql(url)?
    } else if let Some(db_path) = &args.database {
        info!(path = %db_path, "Using file-based SQLite database");
        Persistence::new_with_file(db_path)?
    } else {
        warn!("Using in-memory database; data is lost on shutdown");
        Persistence::new_in_memory()?
    };
    Ok(persistence)
}

fn bootstrap_admin(
    persistence: &mut Persistence,
    args: &Args,
) -> Result<(), Box<dyn std::error::Error>> {
    match (&args.admin_name, &args.admin_email) {
        (Some(name), Some(email)) => {
            if let Some(pin) = ensure_bootstrap_admin(persistence, name, email)? {
                warn!(pin = %pin.value(), email = %email, "Created bootstrap administrator; record this PIN");
            }
        }
        _ => {
            if persistence.count_users()? == 0 {
                warn!("No users exist; pass --admin-name and --admin-email to create one");
            }
        }
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Roombook Server");

    let mut persistence: Persistence = open_persistence(&args)?;
    bootstrap_admin(&mut persistence, &args)?;

    let app: Router = build_router(AppState::new(persistence));

    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

mod args;
mod config;

use std::io;
use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use app_api::AppContext;
use cost_app::{AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::CliArgs::parse();

    let config = config::load_or_create(args.config.as_deref()).map_err(io::Error::other)?;
    init_logging(&config.config.log_filter, args.verbose);

    if config.created {
        tracing::info!(
            path = %config.file.display(),
            port = config.config.port,
            "created default config"
        );
    }

    let port = args.port.unwrap_or(config.config.port);
    let seed = args.seed.or(config.config.seed);

    let app_state = AppState::new(AppConfig { seed })
        .map_err(|err| io::Error::other(format!("failed to register apis: {}", err)))?;
    let router = http_api::router(AppContext::new(app_state));

    let (listener, actual_port, used_fallback) = bind_port(port).await?;
    let url = format!("http://127.0.0.1:{actual_port}");

    if used_fallback {
        tracing::warn!(port, actual_port, "configured port unavailable, using fallback");
    }

    println!("Cost insights demo is running at {url}");
    println!("POST JSON to {url}/api/<operation>; GET {url}/health to check liveness.");
    println!("Press Ctrl+C to stop.");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shut down");
    Ok(())
}

fn init_logging(configured: &str, verbose: u8) {
    let fallback = match verbose {
        0 => configured,
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn bind_port(port: u16) -> Result<(tokio::net::TcpListener, u16, bool), io::Error> {
    if port == 0 {
        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let actual_port = listener.local_addr()?.port();
        return Ok((listener, actual_port, false));
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => Ok((listener, port, false)),
        Err(_) => {
            let listener =
                tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
            let actual_port = listener.local_addr()?.port();
            Ok((listener, actual_port, true))
        }
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

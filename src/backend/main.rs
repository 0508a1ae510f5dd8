//! Bookshelf Server Entry Point
//!
//! Starts the Axum HTTP server for the book catalog API. The process loads
//! optional `.env` configuration, initializes tracing, binds the configured
//! port, logs the bound address, and serves until terminated.

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let app = bookshelf::backend::server::init::create_app();

    let port = bookshelf::backend::server::config::server_port();
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server is running at http://localhost:{}", port);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    eprintln!("The server requires the 'server' feature to be enabled.");
    eprintln!("Run with: cargo run --bin bookshelf-server --features server");
    std::process::exit(1);
}

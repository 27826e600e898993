use tally_api::config::ServerConfig;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing with structured logging
    tracing_subscriber::fmt().with_env_filter("tally=debug,info").with_target(false).json().init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting Tally receipt points service"
    );

    let config = ServerConfig::from_env();
    info!(host = %config.host, port = config.port, "Configuring web server");

    let app = tally_api::create_app_with_config(&config);
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    println!("Tally server starting on {}", config.bind_addr());
    info!("Web server started successfully");

    axum::serve(listener, app).await?;

    Ok(())
}

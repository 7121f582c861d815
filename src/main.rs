use simple_web_app::{build_app, config::Config, logging};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    logging::init_logging(config.debug);

    let bind_socket = config.bind_socket()?;
    let app = build_app();
    let listener = tokio::net::TcpListener::bind(bind_socket).await?;

    info!(
        bind_addr = %config.bind_addr,
        bind_port = config.bind_port,
        debug = config.debug,
        "server starting"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

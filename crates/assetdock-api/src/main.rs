use assetdock_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    assetdock_api::telemetry::init_tracing();

    // Initialize the application (storage, repository, routes)
    let (_state, router) = assetdock_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    assetdock_api::setup::server::start_server(&config, router).await?;

    Ok(())
}

use std::process::ExitCode;

use car_gateway::{Config, Inventory, PostgrestStore, Server, logger, routes};

#[tokio::main]
async fn main() -> ExitCode {
    logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("configuration error: {e}");
            eprintln!("❌ {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(?config, "configuration loaded");

    let app = routes::app(Inventory::new(PostgrestStore::new(&config)));

    match Server::bind(config.listen_addr()).serve(app).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("server error: {e}");
            ExitCode::FAILURE
        }
    }
}

use log::error;
use pantry_pal::{serve, AppConfig};

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = serve(&config).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

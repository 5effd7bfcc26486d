use std::env;

use config::{Config, Environment, File};
use dotenvy::dotenv;

use grid_data::models::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        .add_source(File::with_name("config/default"))
        .add_source(File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(Environment::with_prefix("APP"))
        .build()
        .and_then(|settings| settings.try_deserialize::<ServerConfig>())
        .map_err(|e| {
            log::error!("Failed to load configuration: {e}");
            std::io::Error::other(format!("Configuration error: {e}"))
        })?;

    grid_data::run(settings).await
}

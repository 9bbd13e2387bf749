use std::env;

use config::{Config, ConfigError, Environment, File};

use member_search::models::config::ServerConfig;

/// `config/default.yaml`, then `config/{APP_ENV}.yaml` if present, then
/// `APP_*` variables.
fn load_server_config() -> Result<ServerConfig, ConfigError> {
    let profile = env::var("APP_ENV").unwrap_or_else(|_| "local".to_owned());

    Config::builder()
        .add_source(File::with_name("config/default"))
        .add_source(File::with_name(&format!("config/{profile}")).required(false))
        .add_source(Environment::with_prefix("APP"))
        .build()?
        .try_deserialize()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = load_server_config().map_err(|err| {
        log::error!("Error loading server config: {err}");
        std::io::Error::other(err)
    })?;

    member_search::run(server_config).await
}

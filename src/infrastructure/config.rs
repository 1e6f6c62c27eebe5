use serde::Deserialize;
use tokio::net::TcpListener;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub dataset: DatasetSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetSettings {
    pub path: String,
    pub seed_on_startup: bool,
}

impl ServerSettings {
    /// Bind the listener; `host` may be a hostname or an IP literal.
    pub async fn bind(&self) -> std::io::Result<TcpListener> {
        TcpListener::bind((self.host.as_str(), self.port)).await
    }
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_app_config_from("config/app", None)
}

/// Defaults, then the optional file at `path`, then `SENSOR_CHARTS__*`
/// variables. `env` replaces the process environment when given.
pub fn load_app_config_from(
    path: &str,
    env: Option<config::Map<String, String>>,
) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("dataset.path", "data/dataseries.json")?
        .set_default("dataset.seed_on_startup", false)?
        .add_source(config::File::with_name(path).required(false))
        .add_source(
            config::Environment::with_prefix("SENSOR_CHARTS")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .source(env),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

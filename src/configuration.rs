use crate::connectors::ConnectorConfig;
use serde;
use std::path::PathBuf;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub app_port: u16,
    pub app_host: String,
    /// JSON array holding every stored project
    pub data_file: PathBuf,
    /// Directory with the front-end (index.html, app.js, ...)
    pub static_dir: PathBuf,
    /// Timeout applied to every outbound HTTP call
    pub http_timeout_secs: u64,
    #[serde(default)]
    pub connectors: ConnectorConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_port: 8000,
            app_host: "127.0.0.1".to_string(),
            data_file: PathBuf::from("data/projects.json"),
            static_dir: PathBuf::from("public"),
            http_timeout_secs: 15,
            connectors: ConnectorConfig::default(),
        }
    }
}

impl Settings {
    /// Secrets and optional endpoints come from the environment, never from the yaml file.
    fn apply_env_overrides(&mut self) {
        if let Ok(api_key) = std::env::var("OPENAI_API_KEY") {
            self.connectors.openai.api_key = Some(api_key);
        }

        if let Ok(base_url) = std::env::var("CONTENT_API_BASE") {
            self.connectors.content.base_url = Some(base_url);
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let defaults = Settings::default();
    let settings = config::Config::builder()
        .set_default("app_port", defaults.app_port as i64)?
        .set_default("app_host", defaults.app_host.clone())?
        .set_default("data_file", defaults.data_file.to_string_lossy().to_string())?
        .set_default("static_dir", defaults.static_dir.to_string_lossy().to_string())?
        .set_default("http_timeout_secs", defaults.http_timeout_secs as i64)?
        // configuration.yaml is optional, defaults are enough to boot
        .add_source(config::File::with_name("configuration").required(false))
        // APP__APP_PORT=9000, APP__CONNECTORS__OPENAI__MODEL=gpt-4o ...
        .add_source(config::Environment::with_prefix("APP").separator("__"))
        .build()?;

    let mut config: Settings = settings.try_deserialize()?;
    config.apply_env_overrides();

    Ok(config)
}

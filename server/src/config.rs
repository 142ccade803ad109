use chat::providers::gemini::{DEFAULT_MODEL, GEMINI_API_BASE_URL};
use ::config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;
use std::fmt;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub model: String,
    pub api_base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    pub fail_on_generation_error: bool,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("model", &self.model)
            .field("api_base_url", &self.api_base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("fail_on_generation_error", &self.fail_on_generation_error)
            .finish()
    }
}

impl Settings {
    /// Defaults, then an optional `config.{toml,yaml,json}` in the working
    /// directory, then unprefixed environment variables (`PORT`, `API_KEY`, ...).
    pub fn load() -> anyhow::Result<Self> {
        let config = Self::builder()?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::default().try_parsing(true))
            .build()?;

        Self::from_config(config)
    }

    pub fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("model", DEFAULT_MODEL)?
            .set_default("api_base_url", GEMINI_API_BASE_URL)?
            .set_default("fail_on_generation_error", false)
    }

    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let mut settings: Settings = config.try_deserialize()?;
        settings.api_key = settings.api_key.filter(|key| !key.trim().is_empty());
        Ok(settings)
    }
}

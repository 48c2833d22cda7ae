use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    3000
}

/// Address of the external scoring service. The relay forwards every
/// upload here and owns no knowledge of the model behind it.
#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    #[serde(default = "default_predict_url")]
    pub predict_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            predict_url: default_predict_url(),
        }
    }
}

fn default_predict_url() -> String {
    "http://localhost:8000/predict".to_string()
}

/// Where the terminal client submits uploads (a running relay instance).
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    #[serde(default = "default_relay_url")]
    pub relay_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            relay_url: default_relay_url(),
        }
    }
}

fn default_relay_url() -> String {
    "http://localhost:3000/api/predict".to_string()
}

impl Config {
    pub fn load(path: &str) -> eyre::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("Failed to read config file '{}': {}", path, e))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| eyre::eyre!("Failed to parse config file '{}': {}", path, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    /// Running without a config file is a supported deployment.
    pub fn load_or_default(path: &str) -> eyre::Result<Self> {
        if std::path::Path::new(path).exists() {
            Self::load(path)
        } else {
            tracing::info!("Config file '{}' not found, using defaults", path);
            Ok(Self::default())
        }
    }

    fn validate(&self) -> eyre::Result<()> {
        validate_url("backend.predict_url", &self.backend.predict_url)?;
        validate_url("client.relay_url", &self.client.relay_url)?;
        if self.server.host.is_empty() {
            return Err(eyre::eyre!("server.host must not be empty"));
        }
        Ok(())
    }
}

fn validate_url(field: &str, url: &str) -> eyre::Result<()> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(eyre::eyre!(
            "Invalid URL '{}' for {}: must start with http:// or https://",
            url,
            field
        ));
    }
    Ok(())
}

use crate::domain::DEFAULT_HISTORY_LIMIT;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev";
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";
pub const DEFAULT_API_KEY_ENV: &str = "SIXEYES_API_KEY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of an OpenAI-compatible chat-completions gateway.
    pub gateway_url: String,
    pub model: String,
    /// Name of the environment variable that holds the gateway API key.
    pub api_key_env: String,
    pub history_limit: usize,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            request_timeout_secs: 120,
        }
    }
}

impl AppConfig {
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

pub fn load_config() -> AppConfig {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &std::path::Path) -> AppConfig {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return AppConfig::default();
    };
    toml::from_str(&contents).unwrap_or_else(|err| {
        log::warn!("Ignoring invalid config at {}: {}", path.display(), err);
        AppConfig::default()
    })
}

pub fn save_config(config: &AppConfig) -> std::io::Result<()> {
    save_config_to(config, &config_path())
}

pub fn save_config_to(config: &AppConfig, path: &std::path::Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config).map_err(std::io::Error::other)?;
    std::fs::write(path, contents)
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("SIXEYES_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    app_data_dir().join("config.toml")
}

pub fn history_path() -> PathBuf {
    app_data_dir().join("history.json")
}

pub fn app_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var("SIXEYES_DATA_HOME") {
        return PathBuf::from(path);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = home::home_dir() {
            return home
                .join("Library")
                .join("Application Support")
                .join("SixEyes");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("SixEyes");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(data) = dirs::data_dir() {
            return data.join("sixeyes");
        }
        if let Some(home) = home::home_dir() {
            return home.join(".local").join("share").join("sixeyes");
        }
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".sixeyes")
}

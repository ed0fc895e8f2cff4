use std::env;
use std::path::PathBuf;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const HOST: &str = "HOST";
    pub const PORT: &str = "PORT";
    /// JSON snapshot holding every note
    pub const DATA_FILE: &str = "JOURNAL_DATA_FILE";
    /// Directory the frontend (index.html and assets) is served from
    pub const STATIC_DIR: &str = "JOURNAL_STATIC_DIR";
    pub const CONFIG_PATH: &str = "JOURNAL_CONFIG_PATH";
}

/// Default values
pub mod defaults {
    pub const HOST: &str = "127.0.0.1";
    pub const PORT: u16 = 5000;
    pub const DATA_FILE: &str = "journal_data.json";
    pub const STATIC_DIR: &str = "static";
    pub const CONFIG_PATH: &str = "config/journal_config.ron";
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_file: PathBuf,
    pub static_dir: PathBuf,
    pub config_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup(env_vars::PORT) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Invalid {} {:?}, using {}", env_vars::PORT, raw, defaults::PORT);
                defaults::PORT
            }),
            None => defaults::PORT,
        };

        Self {
            host: lookup(env_vars::HOST).unwrap_or_else(|| defaults::HOST.to_string()),
            port,
            data_file: lookup(env_vars::DATA_FILE)
                .unwrap_or_else(|| defaults::DATA_FILE.to_string())
                .into(),
            static_dir: lookup(env_vars::STATIC_DIR)
                .unwrap_or_else(|| defaults::STATIC_DIR.to_string())
                .into(),
            config_path: lookup(env_vars::CONFIG_PATH)
                .unwrap_or_else(|| defaults::CONFIG_PATH.to_string())
                .into(),
        }
    }
}

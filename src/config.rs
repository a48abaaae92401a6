use std::env;
use std::fmt::Formatter;
use std::time::Duration;

use dotenv::dotenv;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_VIACEP_BASE_URL: &str = "https://viacep.com.br/ws";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_address: String,
    pub viacep_base_url: String,
    pub timeout: Duration,
    pub user_agent: String
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidTimeout(String)
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            ConfigError::InvalidTimeout(value) => write!(
                f,
                "VIACEP_TIMEOUT_SECS must be a positive integer, got '{}'",
                value
            )
        }
    }
}

impl std::error::Error for ConfigError {}

impl Settings {
    pub fn from_env() -> Result<Settings, ConfigError> {
        dotenv().ok();
        Settings::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Settings, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs = match lookup("VIACEP_TIMEOUT_SECS") {
            Some(value) => {
                let parsed = value.trim().parse::<u64>();
                match parsed {
                    Ok(secs) if secs > 0 => secs,
                    _ => return Err(ConfigError::InvalidTimeout(value)),
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Settings {
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.into()),
            viacep_base_url: lookup("VIACEP_BASE_URL")
                .unwrap_or_else(|| DEFAULT_VIACEP_BASE_URL.into()),
            timeout: Duration::from_secs(timeout_secs),
            user_agent: lookup("VIACEP_USER_AGENT")
                .unwrap_or_else(default_user_agent)
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            bind_address: DEFAULT_BIND_ADDRESS.into(),
            viacep_base_url: DEFAULT_VIACEP_BASE_URL.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent()
        }
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

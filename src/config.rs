use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;
use url::Url;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1/";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub openai_api_key: String,
    pub openai_base_url: Url,
    pub openai_model: String,
    pub generation_timeout_secs: u64,
    pub generation_max_retries: u32,
    pub api_rps: u32,
    pub quiz_shuffle_options: bool,
    pub session_ttl_secs: u64,
    pub session_sweep_interval_secs: u64,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            openai_api_key: get_env("OPENAI_API_KEY")?,
            openai_base_url: parse_base_url(&get_env_or(
                "OPENAI_BASE_URL",
                DEFAULT_OPENAI_BASE_URL,
            ))?,
            openai_model: get_env_or("OPENAI_MODEL", "gpt-4o"),
            generation_timeout_secs: get_env_parse_or("GENERATION_TIMEOUT_SECS", 120)?,
            generation_max_retries: get_env_parse_or("GENERATION_MAX_RETRIES", 2)?,
            api_rps: get_env_parse_or("API_RPS", 20)?,
            quiz_shuffle_options: get_env_parse_or("QUIZ_SHUFFLE_OPTIONS", false)?,
            session_ttl_secs: get_env_parse_or("SESSION_TTL_SECS", 3600)?,
            session_sweep_interval_secs: get_env_parse_or("SESSION_SWEEP_INTERVAL_SECS", 60)?,
        })
    }
}

// Url::join drops the last path segment unless the base ends with '/'.
fn parse_base_url(raw: &str) -> Result<Url> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };
    Url::parse(&normalized)
        .map_err(|e| Error::Config(format!("Invalid value for OPENAI_BASE_URL: {}", e)))
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}

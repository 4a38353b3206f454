use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        bind_addr: get_env_or_default("SITELOOK_BIND_ADDR", "0.0.0.0:3000"),
        search_url: get_env_or_default("SITELOOK_SEARCH_URL", "https://www.google.com/search"),
        user_agent: get_env_or_default("SITELOOK_USER_AGENT", DEFAULT_USER_AGENT),
        accept_language: get_env_or_default("SITELOOK_ACCEPT_LANGUAGE", "en-US,en;q=0.8"),
        request_timeout_secs: get_env_parsed_or_default("SITELOOK_REQUEST_TIMEOUT_SECS", 10),
        static_dir: get_env_or_default("SITELOOK_STATIC_DIR", "static"),
    }
});

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    /// Upstream search endpoint, queried with `q`, `start` and `tbm`.
    pub search_url: String,
    pub user_agent: String,
    pub accept_language: String,
    pub request_timeout_secs: u64,
    pub static_dir: String,
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn get_env_parsed_or_default(key: &str, default: u64) -> u64 {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("ignoring invalid value `{raw}` for {key}, using {default}");
            default
        }),
        Err(_) => default,
    }
}

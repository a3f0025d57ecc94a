//! Application Configuration
//!
//! Resolved at build time from environment variables baked into the wasm
//! bundle. Invalid values fall back to defaults.

use log::Level;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const DEFAULT_LOG_LEVEL: Level = Level::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend origin, without trailing slash
    pub api_base_url: String,
    /// Rows per table page
    pub page_size: usize,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    /// Configuration captured by the compiler (`TODO_API_URL`,
    /// `TODO_PAGE_SIZE`, `TODO_LOG_LEVEL`).
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| match key {
            "TODO_API_URL" => option_env!("TODO_API_URL"),
            "TODO_PAGE_SIZE" => option_env!("TODO_PAGE_SIZE"),
            "TODO_LOG_LEVEL" => option_env!("TODO_LOG_LEVEL"),
            _ => None,
        })
    }

    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("TODO_API_URL").map(str::trim).filter(|u| !u.is_empty()) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(size) = lookup("TODO_PAGE_SIZE")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|s| *s > 0)
        {
            config.page_size = size;
        }
        if let Some(level) = lookup("TODO_LOG_LEVEL").and_then(|l| l.trim().parse::<Level>().ok()) {
            config.log_level = level;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.page_size, 5);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(|key| match key {
            "TODO_API_URL" => Some("https://api.example.com/"),
            "TODO_PAGE_SIZE" => Some("20"),
            "TODO_LOG_LEVEL" => Some("debug"),
            _ => None,
        });
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.log_level, Level::Debug);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_lookup(|key| match key {
            "TODO_PAGE_SIZE" => Some("0"),
            "TODO_LOG_LEVEL" => Some("loud"),
            _ => None,
        });
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }
}

pub mod loader;
pub mod types;

use loader::load_config;
use serde::Deserialize;
use types::{Edge, LogLevel};

#[derive(Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Deserialize)]
pub struct GeneralConfig {
    /// Auto-hide delay in whole seconds. 0 keeps a popup up until it is
    /// clicked or cleared by the caller.
    #[serde(default = "default_timeout")]
    pub timeout: u32,
    /// Which screen edge the panel is docked to.
    #[serde(default)]
    pub edge: Edge,
    /// Column at which popup text is word-wrapped.
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            edge: Edge::default(),
            wrap_width: default_wrap_width(),
            log_level: default_log_level(),
        }
    }
}

fn default_timeout() -> u32 {
    15
}

fn default_wrap_width() -> usize {
    40
}

fn default_log_level() -> LogLevel {
    LogLevel::default()
}

impl Config {
    pub fn load(path: Option<&std::path::Path>) -> Self {
        load_config(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.general.timeout, 15);
        assert_eq!(config.general.edge, Edge::Top);
        assert_eq!(config.general.wrap_width, 40);
        assert_eq!(LevelFilter::from(config.general.log_level), LevelFilter::Info);
    }

    #[test]
    fn test_parse() {
        let config: Config = toml::from_str(
            r#"
            [general]
            timeout = 0
            edge = "bottom"
            wrap_width = 60
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.general.timeout, 0);
        assert_eq!(config.general.edge, Edge::Bottom);
        assert_eq!(config.general.wrap_width, 60);
        assert_eq!(LevelFilter::from(config.general.log_level), LevelFilter::Debug);
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: Config = toml::from_str("[general]\nedge = \"left\"\n").unwrap();

        assert_eq!(config.general.edge, Edge::Left);
        assert_eq!(config.general.timeout, 15);
        assert_eq!(config.general.wrap_width, 40);
    }
}

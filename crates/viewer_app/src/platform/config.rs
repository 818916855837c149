use std::path::PathBuf;

use viewer_engine::ClientSettings;

use super::logging::{LogDestination, LogSettings};

pub const EXPORT_DIR_ENV: &str = "SCRAPER_EXPORT_DIR";
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";
pub const LOG_DESTINATION_ENV: &str = "SCRAPER_LOG";
pub const LOG_FILE_ENV: &str = "SCRAPER_LOG_FILE";

/// Startup configuration, resolved once and handed to the components that need it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub client: ClientSettings,
    pub export_dir: PathBuf,
    pub logging: LogSettings,
    /// `.env` file that was loaded, if any.
    pub env_file: Option<PathBuf>,
}

impl AppConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn load() -> Self {
        let env_file = dotenvy::dotenv().ok();
        let mut config = Self::from_lookup(|key| std::env::var(key).ok());
        config.env_file = env_file;
        config
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let export_dir = non_blank(EXPORT_DIR_ENV)
            .map(|value| PathBuf::from(value.trim()))
            .unwrap_or_else(|| PathBuf::from("."));
        let defaults = LogSettings::default();
        let logging = LogSettings {
            destination: non_blank(LOG_DESTINATION_ENV)
                .and_then(|value| LogDestination::parse(&value))
                .unwrap_or(defaults.destination),
            level: non_blank(LOG_LEVEL_ENV)
                .and_then(|value| viewer_logging::parse_level(&value))
                .unwrap_or(defaults.level),
            file: non_blank(LOG_FILE_ENV)
                .map(|value| PathBuf::from(value.trim()))
                .unwrap_or(defaults.file),
        };

        Self {
            client: ClientSettings::from_lookup(&lookup),
            export_dir,
            logging,
            env_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use log::LevelFilter;
    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = AppConfig::from_lookup(|_| None);

        assert_eq!(config.client.api_base, "http://localhost:8000");
        assert_eq!(config.export_dir, PathBuf::from("."));
        assert_eq!(config.logging, LogSettings::default());
        assert_eq!(config.logging.file, PathBuf::from("scrape_viewer.log"));
    }

    #[test]
    fn reads_every_setting() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("API_BASE_URL", "http://scraper:8000"),
            ("SCRAPER_TIMEOUT_SECS", "90"),
            ("SCRAPER_EXPORT_DIR", "/tmp/exports"),
            ("LOG_LEVEL", "debug"),
            ("SCRAPER_LOG", "terminal"),
            ("SCRAPER_LOG_FILE", "/var/log/viewer.log"),
        ]));

        assert_eq!(config.client.api_base, "http://scraper:8000");
        assert_eq!(config.client.request_timeout, Some(Duration::from_secs(90)));
        assert_eq!(config.export_dir, PathBuf::from("/tmp/exports"));
        assert_eq!(
            config.logging,
            LogSettings {
                destination: LogDestination::Terminal,
                level: LevelFilter::Debug,
                file: PathBuf::from("/var/log/viewer.log"),
            }
        );
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("LOG_LEVEL", "chatty"),
            ("SCRAPER_LOG", "syslog"),
            ("SCRAPER_EXPORT_DIR", "   "),
        ]));

        assert_eq!(config.logging, LogSettings::default());
        assert_eq!(config.export_dir, PathBuf::from("."));
    }
}

use crate::i18n::DEFAULT_STORAGE_KEY;
use crate::navigation::TabBar;
use anyhow::{ensure, Context, Result};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Language persistence
    pub language_storage_key: String,
    pub language_cookie_max_age: Duration,

    // Shell chrome
    pub admin_notification_count: u32,
    pub tab_bar_max_inline: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            language_storage_key: DEFAULT_STORAGE_KEY.to_string(),
            language_cookie_max_age: Duration::from_secs(365 * SECONDS_PER_DAY),
            admin_notification_count: 0,
            tab_bar_max_inline: TabBar::DEFAULT_MAX_INLINE,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let config = Self {
            // Server
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: match std::env::var("PORT") {
                Ok(value) => value
                    .parse()
                    .with_context(|| format!("PORT must be a port number, got {:?}", value))?,
                Err(_) => defaults.port,
            },

            // Language persistence
            language_storage_key: std::env::var("LANGUAGE_STORAGE_KEY")
                .unwrap_or(defaults.language_storage_key),
            language_cookie_max_age: match std::env::var("LANGUAGE_COOKIE_MAX_AGE_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
            {
                Some(count) => days(count).with_context(|| {
                    format!("LANGUAGE_COOKIE_MAX_AGE_DAYS is too large, got {}", count)
                })?,
                None => defaults.language_cookie_max_age,
            },

            // Shell chrome
            admin_notification_count: std::env::var("ADMIN_NOTIFICATION_COUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.admin_notification_count),
            tab_bar_max_inline: std::env::var("TAB_BAR_MAX_INLINE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.tab_bar_max_inline),
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the shell cannot work with.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            is_cookie_token(&self.language_storage_key),
            "LANGUAGE_STORAGE_KEY must be a non-empty cookie name of [A-Za-z0-9-_.], got {:?}",
            self.language_storage_key
        );
        ensure!(
            self.tab_bar_max_inline >= 2,
            "TAB_BAR_MAX_INLINE must be at least 2, got {}",
            self.tab_bar_max_inline
        );
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// `None` when the day count does not fit in seconds.
fn days(count: u64) -> Option<Duration> {
    count.checked_mul(SECONDS_PER_DAY).map(Duration::from_secs)
}

fn is_cookie_token(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "HOST",
        "PORT",
        "LANGUAGE_STORAGE_KEY",
        "LANGUAGE_COOKIE_MAX_AGE_DAYS",
        "ADMIN_NOTIFICATION_COUNT",
        "TAB_BAR_MAX_INLINE",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.language_storage_key, "language");
        assert_eq!(config.language_cookie_max_age, Duration::from_secs(31_536_000));
        assert_eq!(config.admin_notification_count, 0);
        assert_eq!(config.tab_bar_max_inline, 5);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "3000");
        std::env::set_var("LANGUAGE_STORAGE_KEY", "lms_lang");
        std::env::set_var("LANGUAGE_COOKIE_MAX_AGE_DAYS", "30");
        std::env::set_var("ADMIN_NOTIFICATION_COUNT", "7");
        std::env::set_var("TAB_BAR_MAX_INLINE", "4");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.language_storage_key, "lms_lang");
        assert_eq!(config.language_cookie_max_age, Duration::from_secs(30 * 86_400));
        assert_eq!(config.admin_notification_count, 7);
        assert_eq!(config.tab_bar_max_inline, 4);
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_error() {
        clear_env();
        std::env::set_var("PORT", "eighty");

        let result = Config::from_env();
        clear_env();

        assert!(result.unwrap_err().to_string().contains("PORT"));
    }

    #[test]
    #[serial]
    fn test_huge_cookie_max_age_is_error() {
        clear_env();
        std::env::set_var("LANGUAGE_COOKIE_MAX_AGE_DAYS", "300000000000000");

        let result = Config::from_env();
        clear_env();

        let message = result.unwrap_err().to_string();
        assert!(message.contains("LANGUAGE_COOKIE_MAX_AGE_DAYS"));
    }

    #[test]
    fn test_days_rejects_overflow() {
        assert_eq!(days(2), Some(Duration::from_secs(172_800)));
        assert_eq!(days(u64::MAX / SECONDS_PER_DAY + 1), None);
    }

    #[test]
    #[serial]
    fn test_unparsable_optional_values_fall_back() {
        clear_env();
        std::env::set_var("ADMIN_NOTIFICATION_COUNT", "many");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.admin_notification_count, 0);
    }

    #[test]
    fn test_validate_rejects_bad_storage_key() {
        let config = Config {
            language_storage_key: "lang uage".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            language_storage_key: String::new(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_tiny_tab_bar() {
        let config = Config {
            tab_bar_max_inline: 1,
            ..Config::default()
        };
        assert!(config.validate().is_err());
        assert!(Config::default().validate().is_ok());
    }
}

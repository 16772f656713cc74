//! Service Configuration
//!
//! Read once at startup. Unset or invalid values fall back to defaults
//! with a log line instead of failing the app.

use std::{env, fmt::Display, str::FromStr, time::Duration};

use log::{info, warn};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// Scheme, host and port of the service; endpoint paths are fixed
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ServiceConfig {
    /// `RECIPE_SERVICE_URL`, `RECIPE_SERVICE_TIMEOUT_SECS`
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url: String = try_load(&lookup, "RECIPE_SERVICE_URL", DEFAULT_BASE_URL.to_string());
        let base_url = if base_url.starts_with("http://") || base_url.starts_with("https://") {
            base_url
        } else {
            warn!("RECIPE_SERVICE_URL must start with http:// or https://, using default: {DEFAULT_BASE_URL}");
            DEFAULT_BASE_URL.to_string()
        };

        let timeout_secs: u64 = try_load(&lookup, "RECIPE_SERVICE_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);
        let timeout_secs = if timeout_secs == 0 {
            warn!("RECIPE_SERVICE_TIMEOUT_SECS must be positive, using default: {DEFAULT_TIMEOUT_SECS}");
            DEFAULT_TIMEOUT_SECS
        } else {
            timeout_secs
        };

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value: {e}, using default: {default}");
            default
        }),
        None => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServiceConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn test_reads_overrides() {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("RECIPE_SERVICE_URL", "https://food.example.com"),
            ("RECIPE_SERVICE_TIMEOUT_SECS", " 15 "),
        ]));
        assert_eq!(config.base_url, "https://food.example.com");
        assert_eq!(config.timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("RECIPE_SERVICE_URL", "ftp://nope"),
            ("RECIPE_SERVICE_TIMEOUT_SECS", "soon"),
        ]));
        assert_eq!(config, ServiceConfig::default());

        let zero = ServiceConfig::from_lookup(lookup(&[("RECIPE_SERVICE_TIMEOUT_SECS", "0")]));
        assert_eq!(zero.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}

use std::path::PathBuf;

use thiserror::Error;

use crate::app_config::AppConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if an env var holds an unparseable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if an env var holds an unparseable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function.
///
/// This is the core parsing logic, decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<bool>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let base_url = or_default("PSC_BASE_URL", "https://www.boots.com/online/psc");
    let radius_miles = parse_u32("PSC_RADIUS_MILES", "50")?;
    let request_timeout_secs = parse_u64("PSC_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PSC_USER_AGENT", "psc/0.1 (stock-check)");
    let inter_request_delay_ms = parse_u64("PSC_INTER_REQUEST_DELAY_MS", "6000")?;
    let stock_batch_size = parse_usize("PSC_STOCK_BATCH_SIZE", "10")?;
    let include_trailing_batch = parse_bool("PSC_INCLUDE_TRAILING_BATCH", "false")?;
    let data_dir = PathBuf::from(or_default("PSC_DATA_DIR", "./data"));
    let log_level = or_default("PSC_LOG_LEVEL", "info");

    if stock_batch_size == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PSC_STOCK_BATCH_SIZE".to_string(),
            reason: "batch size must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        base_url,
        radius_miles,
        request_timeout_secs,
        user_agent,
        inter_request_delay_ms,
        stock_batch_size,
        include_trailing_batch,
        data_dir,
        log_level,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.base_url, "https://www.boots.com/online/psc");
        assert_eq!(cfg.radius_miles, 50);
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.user_agent, "psc/0.1 (stock-check)");
        assert_eq!(cfg.inter_request_delay_ms, 6000);
        assert_eq!(cfg.stock_batch_size, 10);
        assert!(!cfg.include_trailing_batch);
        assert_eq!(cfg.data_dir, PathBuf::from("./data"));
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn build_app_config_radius_override() {
        let mut map = HashMap::new();
        map.insert("PSC_RADIUS_MILES", "25");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.radius_miles, 25);
    }

    #[test]
    fn build_app_config_radius_invalid() {
        let mut map = HashMap::new();
        map.insert("PSC_RADIUS_MILES", "fifty");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PSC_RADIUS_MILES"),
            "expected InvalidEnvVar(PSC_RADIUS_MILES), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_delay_override() {
        let mut map = HashMap::new();
        map.insert("PSC_INTER_REQUEST_DELAY_MS", "0");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.inter_request_delay_ms, 0);
    }

    #[test]
    fn build_app_config_trailing_batch_override() {
        let mut map = HashMap::new();
        map.insert("PSC_INCLUDE_TRAILING_BATCH", "true");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(cfg.include_trailing_batch);
    }

    #[test]
    fn build_app_config_trailing_batch_invalid() {
        let mut map = HashMap::new();
        map.insert("PSC_INCLUDE_TRAILING_BATCH", "yes");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PSC_INCLUDE_TRAILING_BATCH"),
            "expected InvalidEnvVar(PSC_INCLUDE_TRAILING_BATCH), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_rejects_zero_batch_size() {
        let mut map = HashMap::new();
        map.insert("PSC_STOCK_BATCH_SIZE", "0");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PSC_STOCK_BATCH_SIZE"),
            "expected InvalidEnvVar(PSC_STOCK_BATCH_SIZE), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_base_url_override() {
        let mut map = HashMap::new();
        map.insert("PSC_BASE_URL", "http://127.0.0.1:9999");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.base_url, "http://127.0.0.1:9999");
    }
}

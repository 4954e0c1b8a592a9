use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/97.0.4692.71 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The parsing/validation logic is decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    // Treat an empty key the same as an unset one.
    let scraper_api_key = lookup("SCRAPER_API_KEY").ok().filter(|k| !k.is_empty());
    let use_scraper_api = parse_bool(&or_default("USE_SCRAPER_API", "true"));

    let scraper_api_url = or_default("SCRAPER_API_URL", "https://api.scraperapi.com/");
    let scraper_api_max_cost = or_default("SCRAPER_API_MAX_COST", "5");
    let backend_api_url = or_default("BACKEND_API_URL", "http://localhost:8080");
    let urls_path = PathBuf::from(or_default("URLS_FILE", "test_urls.json"));
    let log_level = or_default("LOG_LEVEL", "info");

    let fetch_timeout_secs = parse_u64("PRICEWATCH_FETCH_TIMEOUT_SECS", "30")?;
    let send_timeout_secs = parse_u64("PRICEWATCH_SEND_TIMEOUT_SECS", "10")?;
    let pacing_secs = parse_u64("PRICEWATCH_PACING_SECS", "10")?;
    let user_agent = or_default("PRICEWATCH_USER_AGENT", DEFAULT_USER_AGENT);

    Ok(AppConfig {
        scraper_api_key,
        use_scraper_api,
        scraper_api_url,
        scraper_api_max_cost,
        backend_api_url,
        urls_path,
        log_level,
        fetch_timeout_secs,
        send_timeout_secs,
        pacing_secs,
        user_agent,
    })
}

/// `"true"`/`"1"` (case-insensitive) are true; everything else is false.
fn parse_bool(s: &str) -> bool {
    s.eq_ignore_ascii_case("true") || s == "1"
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
    fn parse_bool_accepts_true_and_one() {
        assert!(parse_bool("true"));
        assert!(parse_bool("TRUE"));
        assert!(parse_bool("1"));
        assert!(!parse_bool("false"));
        assert!(!parse_bool("yes"));
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should suffice");
        assert!(cfg.scraper_api_key.is_none());
        assert!(cfg.use_scraper_api);
        assert_eq!(cfg.scraper_api_url, "https://api.scraperapi.com/");
        assert_eq!(cfg.scraper_api_max_cost, "5");
        assert_eq!(cfg.backend_api_url, "http://localhost:8080");
        assert_eq!(cfg.urls_path, PathBuf::from("test_urls.json"));
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.fetch_timeout_secs, 30);
        assert_eq!(cfg.send_timeout_secs, 10);
        assert_eq!(cfg.pacing_secs, 10);
    }

    #[test]
    fn proxy_disabled_without_api_key() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(!cfg.proxy_enabled());
    }

    #[test]
    fn proxy_enabled_with_key_and_toggle() {
        let mut map = HashMap::new();
        map.insert("SCRAPER_API_KEY", "secret-key");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(cfg.proxy_enabled());
    }

    #[test]
    fn proxy_disabled_when_toggle_off() {
        let mut map = HashMap::new();
        map.insert("SCRAPER_API_KEY", "secret-key");
        map.insert("USE_SCRAPER_API", "false");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(!cfg.proxy_enabled());
    }

    #[test]
    fn empty_api_key_treated_as_unset() {
        let mut map = HashMap::new();
        map.insert("SCRAPER_API_KEY", "");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(cfg.scraper_api_key.is_none());
        assert!(!cfg.proxy_enabled());
    }

    #[test]
    fn pacing_secs_override() {
        let mut map = HashMap::new();
        map.insert("PRICEWATCH_PACING_SECS", "2");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.pacing_secs, 2);
    }

    #[test]
    fn pacing_secs_invalid() {
        let mut map = HashMap::new();
        map.insert("PRICEWATCH_PACING_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PRICEWATCH_PACING_SECS"),
            "expected InvalidEnvVar(PRICEWATCH_PACING_SECS), got: {result:?}"
        );
    }

    #[test]
    fn fetch_timeout_secs_invalid() {
        let mut map = HashMap::new();
        map.insert("PRICEWATCH_FETCH_TIMEOUT_SECS", "thirty");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PRICEWATCH_FETCH_TIMEOUT_SECS"),
            "expected InvalidEnvVar(PRICEWATCH_FETCH_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn urls_file_override() {
        let mut map = HashMap::new();
        map.insert("URLS_FILE", "/data/manifest.json");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.urls_path, PathBuf::from("/data/manifest.json"));
    }

    #[test]
    fn debug_redacts_api_key() {
        let mut map = HashMap::new();
        map.insert("SCRAPER_API_KEY", "secret-key");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("[redacted]"));
    }
}

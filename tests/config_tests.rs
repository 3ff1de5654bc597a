use std::collections::HashMap;
use std::time::Duration;

use musicsearch::config::Config;
use musicsearch::data_models::ResultLimit;
use tracing::Level;

fn config_from(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.api_url, "https://itunes.apple.com/search");
    assert_eq!(config.timeout, Duration::from_secs(10));
    assert_eq!(config.default_limit, ResultLimit::new(5).unwrap());
    assert_eq!(config.entity, "album");
    assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
    assert_eq!(config.log_level, Level::INFO);

    let default = Config::default();
    assert_eq!(default.default_limit.get(), 5);
    assert_eq!(default.api_url, config.api_url);
    assert_eq!(default.default_limit, config.default_limit);
    assert_eq!(default.bind_addr, config.bind_addr);
}

#[test]
fn test_overrides() {
    let config = config_from(&[
        ("MUSICSEARCH_API_URL", "http://localhost:9000/search"),
        ("MUSICSEARCH_TIMEOUT_SECS", "3"),
        ("MUSICSEARCH_DEFAULT_LIMIT", "all"),
        ("MUSICSEARCH_ENTITY", "song"),
        ("MUSICSEARCH_BIND_ADDR", "0.0.0.0:8080"),
        ("MUSICSEARCH_LOG_LEVEL", "debug"),
    ])
    .unwrap();

    assert_eq!(config.api_url, "http://localhost:9000/search");
    assert_eq!(config.timeout, Duration::from_secs(3));
    assert_eq!(config.default_limit, ResultLimit::MAX);
    assert_eq!(config.entity, "song");
    assert_eq!(config.bind_addr.port(), 8080);
    assert_eq!(config.log_level, Level::DEBUG);
}

#[test]
fn test_blank_values_fall_back_to_defaults() {
    let config = config_from(&[("MUSICSEARCH_ENTITY", "  "), ("MUSICSEARCH_TIMEOUT_SECS", "")])
        .unwrap();
    assert_eq!(config.entity, "album");
    assert_eq!(config.timeout, Duration::from_secs(10));
}

#[test]
fn test_invalid_values_rejected() {
    let err = config_from(&[("MUSICSEARCH_TIMEOUT_SECS", "soon")]).unwrap_err();
    assert!(format!("{err:#}").contains("MUSICSEARCH_TIMEOUT_SECS"));

    let err = config_from(&[("MUSICSEARCH_DEFAULT_LIMIT", "-3")]).unwrap_err();
    assert!(format!("{err:#}").contains("Limit must be >= 1"));

    assert!(config_from(&[("MUSICSEARCH_BIND_ADDR", "nowhere")]).is_err());
    assert!(config_from(&[("MUSICSEARCH_LOG_LEVEL", "loud")]).is_err());
}

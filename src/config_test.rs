use super::*;

#[test]
fn default_config_has_one_second_latency_and_no_base_url() {
    let cfg = AppConfig::default();
    assert_eq!(cfg.api_base_url, None);
    assert_eq!(cfg.auth_latency, Duration::from_millis(1000));
    assert_eq!(cfg.directory_latency, Duration::from_millis(1000));
}

#[test]
fn parse_latency_defaults_when_absent_or_blank() {
    assert_eq!(parse_latency(None), Ok(Duration::from_millis(DEFAULT_MOCK_LATENCY_MS)));
    assert_eq!(parse_latency(Some("  ")), Ok(Duration::from_millis(DEFAULT_MOCK_LATENCY_MS)));
}

#[test]
fn parse_latency_accepts_zero_and_integers() {
    assert_eq!(parse_latency(Some("0")), Ok(Duration::ZERO));
    assert_eq!(parse_latency(Some(" 250 ")), Ok(Duration::from_millis(250)));
}

#[test]
fn parse_latency_rejects_non_integers() {
    assert_eq!(parse_latency(Some("1s")), Err(ConfigError::InvalidLatency("1s".into())));
    assert_eq!(parse_latency(Some("-5")), Err(ConfigError::InvalidLatency("-5".into())));
}

#[test]
fn from_raw_falls_back_on_invalid_latency() {
    let cfg = AppConfig::from_raw(None, Some("soon"));
    assert_eq!(cfg.auth_latency, Duration::from_millis(DEFAULT_MOCK_LATENCY_MS));
}

#[test]
fn from_raw_trims_base_url() {
    let cfg = AppConfig::from_raw(Some(" https://api.example.com/ "), Some("10"));
    assert_eq!(cfg.api_base_url.as_deref(), Some("https://api.example.com"));
    assert_eq!(cfg.auth_latency, Duration::from_millis(10));
}

#[test]
fn from_raw_drops_blank_base_url() {
    let cfg = AppConfig::from_raw(Some("   "), None);
    assert_eq!(cfg.api_base_url, None);
}

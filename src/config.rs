//! Build-time application configuration.
//!
//! The browser has no process environment, so values are captured when the
//! WASM bundle is compiled (`SAAS_API_BASE_URL`, `SAAS_MOCK_LATENCY_MS`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_MOCK_LATENCY_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL for a future HTTP API. Declared for deployment parity; no
    /// request reads it while the services are mocked.
    pub api_base_url: Option<String>,
    /// Simulated round-trip time of sign-in and sign-up.
    pub auth_latency: Duration,
    /// Simulated round-trip time of user directory lookups.
    pub directory_latency: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        let latency = Duration::from_millis(DEFAULT_MOCK_LATENCY_MS);
        Self { api_base_url: None, auth_latency: latency, directory_latency: latency }
    }
}

impl AppConfig {
    /// Build config from values captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("SAAS_API_BASE_URL"), option_env!("SAAS_MOCK_LATENCY_MS"))
    }

    /// Build config from raw values, falling back to defaults on bad input.
    pub fn from_raw(api_base_url: Option<&str>, latency_ms: Option<&str>) -> Self {
        let latency = match parse_latency(latency_ms) {
            Ok(latency) => latency,
            Err(e) => {
                log::warn!("{e}; using {DEFAULT_MOCK_LATENCY_MS}ms");
                Duration::from_millis(DEFAULT_MOCK_LATENCY_MS)
            }
        };
        Self {
            api_base_url: parse_base_url(api_base_url),
            auth_latency: latency,
            directory_latency: latency,
        }
    }
}

fn parse_base_url(raw: Option<&str>) -> Option<String> {
    raw.map(|v| v.trim().trim_end_matches('/'))
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

/// Parse a latency in milliseconds. Absent or blank input yields the default.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidLatency`] when the value is not an integer.
pub fn parse_latency(raw: Option<&str>) -> Result<Duration, ConfigError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(Duration::from_millis(DEFAULT_MOCK_LATENCY_MS)),
        Some(value) => value
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::InvalidLatency(value.to_owned())),
    }
}

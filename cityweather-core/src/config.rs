use std::env;

use crate::error::WeatherError;

/// Default environment entry holding the provider base URL.
pub const URL_ENV: &str = "WEATHER_API_URL";
/// Default environment entry holding the provider API key.
pub const KEY_ENV: &str = "WEATHER_API_KEY";

/// Validated client configuration: where to call and with which key.
///
/// Both values are required and non-empty; every constructor enforces that
/// up front, so a [`crate::WeatherClient`] built from a `ClientConfig` can
/// never fail for configuration reasons at query time.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: String,
}

impl ClientConfig {
    /// Build a config from explicit values.
    ///
    /// This is the constructor to use in tests and in embedding code that
    /// sources configuration from somewhere other than the process
    /// environment.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, WeatherError> {
        let base_url = required("base_url", base_url.into())?;
        let api_key = required("api_key", api_key.into())?;
        Ok(Self { base_url, api_key })
    }

    /// Read the config from two named environment entries.
    ///
    /// Fails eagerly if either entry is unset or empty; the error names the
    /// offending variable so the fix is obvious.
    pub fn from_env_vars(url_var: &str, key_var: &str) -> Result<Self, WeatherError> {
        let base_url = required(url_var, env::var(url_var).unwrap_or_default())?;
        let api_key = required(key_var, env::var(key_var).unwrap_or_default())?;
        Ok(Self { base_url, api_key })
    }

    /// Read the config from the default [`URL_ENV`] / [`KEY_ENV`] entries.
    pub fn from_env() -> Result<Self, WeatherError> {
        Self::from_env_vars(URL_ENV, KEY_ENV)
    }
}

fn required(name: &str, value: String) -> Result<String, WeatherError> {
    if value.trim().is_empty() {
        return Err(WeatherError::config(name));
    }
    Ok(value)
}

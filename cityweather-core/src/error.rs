use thiserror::Error;

/// Everything that can go wrong in this crate, split along the only seam
/// that matters to callers: setup vs. per-query.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// A required configuration value is missing or empty. Raised while
    /// building a [`crate::ClientConfig`], never from a query.
    #[error("required configuration value '{name}' is missing or empty")]
    Config { name: String },

    /// The query for a city failed. Covers both "provider rejected the
    /// city" and any transport failure; `reason` carries the cause.
    /// Callers cannot tell an unknown city apart from a network outage
    /// from this error alone.
    #[error("failed to get weather for '{city}': {reason}")]
    Query { city: String, reason: String },
}

impl WeatherError {
    pub(crate) fn config(name: impl Into<String>) -> Self {
        WeatherError::Config { name: name.into() }
    }

    pub(crate) fn query(city: impl Into<String>, reason: impl Into<String>) -> Self {
        WeatherError::Query { city: city.into(), reason: reason.into() }
    }
}

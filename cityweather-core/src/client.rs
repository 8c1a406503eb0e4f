use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{config::ClientConfig, error::WeatherError, model::WeatherSnapshot};

/// Client for the WeatherAPI.com current-conditions endpoint.
///
/// Holds only immutable configuration and a reusable HTTP client; it is
/// stateless between calls, so one instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    config: ClientConfig,
    http: Client,
}

impl WeatherClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config, http: Client::new() }
    }

    /// Convenience constructor reading `WEATHER_API_URL` / `WEATHER_API_KEY`.
    pub fn from_env() -> Result<Self, WeatherError> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    /// Fetch current conditions for `city`.
    ///
    /// Performs one fresh HTTP round trip per call. Any failure along the
    /// way — provider rejecting the city, transport error, unexpected
    /// status, unparseable body — comes back as [`WeatherError::Query`]
    /// carrying the queried city name.
    pub async fn fetch_weather(&self, city: &str) -> Result<WeatherSnapshot, WeatherError> {
        if city.trim().is_empty() {
            return Err(WeatherError::query(city, "city name must not be empty"));
        }

        let res = self
            .http
            .get(&self.config.base_url)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("q", city),
                ("aqi", "no"),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::query(city, format!("request failed: {e}")))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| WeatherError::query(city, format!("failed to read response body: {e}")))?;

        snapshot_from_body(city, status, &body)
    }
}

/// Map one provider response onto a snapshot or a query error.
///
/// A body carrying an `error` key wins over the HTTP status: the provider
/// reports unknown cities with an error body, and that must never surface
/// as a partially populated snapshot.
fn snapshot_from_body(
    city: &str,
    status: StatusCode,
    body: &str,
) -> Result<WeatherSnapshot, WeatherError> {
    if serde_json::from_str::<WaErrorReply>(body).is_ok() {
        return Err(WeatherError::query(city, "city not found or query rejected by provider"));
    }

    if !status.is_success() {
        return Err(WeatherError::query(
            city,
            format!("provider returned status {}: {}", status, truncate_body(body)),
        ));
    }

    let parsed: WaCurrentReply = serde_json::from_str(body)
        .map_err(|e| WeatherError::query(city, format!("failed to parse provider JSON: {e}")))?;

    Ok(WeatherSnapshot {
        city: parsed.location.name,
        temperature_c: parsed.current.temp_c,
        condition: parsed.current.condition.text,
        humidity_pct: parsed.current.humidity,
        wind_kph: parsed.current.wind_kph,
    })
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    condition: WaCondition,
    humidity: u8,
    wind_kph: f64,
}

#[derive(Debug, Deserialize)]
struct WaCurrentReply {
    location: WaLocation,
    current: WaCurrent,
}

/// Matches any body with a top-level `error` key, whatever its contents.
#[derive(Debug, Deserialize)]
struct WaErrorReply {
    #[allow(dead_code)]
    error: serde_json::Value,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Cut on a char boundary; byte MAX may fall inside a multibyte char.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURRENT_BODY: &str = r#"{
        "location": { "name": "London", "country": "United Kingdom" },
        "current": {
            "temp_c": 11.5,
            "condition": { "text": "Partly cloudy" },
            "humidity": 72,
            "wind_kph": 13.0
        }
    }"#;

    #[test]
    fn maps_documented_body_field_for_field() {
        let snap = snapshot_from_body("London", StatusCode::OK, CURRENT_BODY)
            .expect("well-formed body must map");

        assert_eq!(snap.city, "London");
        assert_eq!(snap.temperature_c, 11.5);
        assert_eq!(snap.condition, "Partly cloudy");
        assert_eq!(snap.humidity_pct, 72);
        assert_eq!(snap.wind_kph, 13.0);
    }

    #[test]
    fn error_body_yields_query_error_even_with_ok_status() {
        let body = r#"{"error": {"code": 1006, "message": "No matching location found."}}"#;
        let err = snapshot_from_body("Nowhereville", StatusCode::OK, body).unwrap_err();

        assert!(matches!(err, WeatherError::Query { ref city, .. } if city == "Nowhereville"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn error_body_wins_over_error_status() {
        let body = r#"{"error": {"code": 2006, "message": "API key is invalid."}}"#;
        let err = snapshot_from_body("London", StatusCode::UNAUTHORIZED, body).unwrap_err();

        assert!(matches!(err, WeatherError::Query { .. }));
    }

    #[test]
    fn non_success_status_without_error_body_is_a_query_error() {
        let err =
            snapshot_from_body("London", StatusCode::BAD_GATEWAY, "upstream fell over").unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("502"));
        assert!(msg.contains("upstream fell over"));
    }

    #[test]
    fn unparseable_success_body_is_a_query_error() {
        let err = snapshot_from_body("London", StatusCode::OK, "<html>not json</html>").unwrap_err();
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn long_unexpected_body_is_truncated_in_the_error() {
        let body = "x".repeat(500);
        let err = snapshot_from_body("London", StatusCode::BAD_GATEWAY, &body).unwrap_err();
        assert!(err.to_string().contains("..."));
        assert!(err.to_string().len() < 400);
    }

    #[test]
    fn multibyte_body_is_truncated_on_a_char_boundary() {
        // 300 bytes of three-byte chars; byte 200 falls mid-char.
        let body = "€".repeat(100);
        let err = snapshot_from_body("London", StatusCode::BAD_GATEWAY, &body).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("502"));
        assert!(msg.contains("€..."));
    }

    #[tokio::test]
    async fn empty_city_is_rejected_before_any_request() {
        // Unroutable config: the call must fail on the input check, not on I/O.
        let cfg = ClientConfig::new("http://127.0.0.1:9", "KEY").expect("config");
        let client = WeatherClient::new(cfg);

        let err = client.fetch_weather("   ").await.unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    // Live tests against the real provider; need WEATHER_API_URL and
    // WEATHER_API_KEY set. Run with `cargo test -- --ignored`.

    #[tokio::test]
    #[ignore]
    async fn live_existing_city_returns_plausible_snapshot() {
        let client = WeatherClient::from_env().expect("env configured");
        let snap = client.fetch_weather("London").await.expect("live fetch");

        assert!(snap.city.contains("London"));
        assert!(snap.humidity_pct <= 100);
        assert!(snap.temperature_c > -90.0 && snap.temperature_c < 60.0);
        assert!(snap.wind_kph >= 0.0);
    }

    #[tokio::test]
    #[ignore]
    async fn live_unknown_city_fails_with_query_error() {
        let client = WeatherClient::from_env().expect("env configured");
        let err = client.fetch_weather("ThisCityDoesNotExist123456").await.unwrap_err();
        assert!(matches!(err, WeatherError::Query { .. }));
    }
}

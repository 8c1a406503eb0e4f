use serde::{Deserialize, Serialize};
use std::fmt;

/// Point-in-time weather reading for one city.
///
/// Created fresh on every successful query; compares by field equality and
/// has no lifecycle beyond that. `city` is the provider's resolved location
/// name, which may differ in spelling or case from the queried string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub city: String,
    pub temperature_c: f64,
    pub condition: String,
    pub humidity_pct: u8,
    pub wind_kph: f64,
}

impl fmt::Display for WeatherSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "City: {}", self.city)?;
        writeln!(f, "Temperature: {} °C", self.temperature_c)?;
        writeln!(f, "Condition: {}", self.condition)?;
        writeln!(f, "Humidity: {}%", self.humidity_pct)?;
        write!(f, "Wind speed: {} kph", self.wind_kph)
    }
}

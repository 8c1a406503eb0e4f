use anyhow::Context;
use clap::Parser;
use cityweather_core::{ClientConfig, KEY_ENV, URL_ENV, WeatherClient};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "Current weather for a city")]
pub struct Cli {
    /// City name to look up, e.g. "London".
    pub city: String,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = ClientConfig::from_env().with_context(|| {
            format!("set {URL_ENV} and {KEY_ENV} in the environment before running")
        })?;

        let client = WeatherClient::new(config);
        let snapshot = client.fetch_weather(&self.city).await?;

        println!("{snapshot}");
        Ok(())
    }
}

//! Core library for the `cityweather` CLI.
//!
//! This crate defines:
//! - Configuration handling (environment-sourced base URL and API key)
//! - The WeatherAPI.com client and its error type
//! - The shared snapshot model
//!
//! It is used by `cityweather-cli`, but can also be reused by other binaries
//! or services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::WeatherClient;
pub use config::{ClientConfig, KEY_ENV, URL_ENV};
pub use error::WeatherError;
pub use model::WeatherSnapshot;

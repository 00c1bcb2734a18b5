//! OpenWeatherMap integration for live station weather.

use std::time::Duration;

use rand::Rng;
use rand::rngs::StdRng;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::domain::WeatherReading;
use crate::error::AppError;

const BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Solar radiation is not part of the current-weather response; approximate
/// clear-sky daytime irradiance with a uniform draw in this range (W/m²).
const SOLAR_APPROX_MIN: f64 = 600.0;
const SOLAR_APPROX_MAX: f64 = 1000.0;

pub struct WeatherClient {
    client: Client,
    api_key: String,
}

impl WeatherClient {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let api_key = std::env::var("OPENWEATHER_API_KEY")
            .map_err(|_| AppError::input("Missing OPENWEATHER_API_KEY in environment (.env)."))?;
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| AppError::external(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, api_key })
    }

    /// Fetch a current reading for the coordinates.
    ///
    /// Returns `None` on any transport, HTTP, or parse failure — callers
    /// substitute [`crate::data::FALLBACK_READING`] instead of propagating an
    /// error. The solar approximation draws from the injected RNG so a seeded
    /// run stays reproducible apart from the live temp/humidity values.
    pub fn fetch(&self, lat: f64, lon: f64, rng: &mut StdRng) -> Option<WeatherReading> {
        let resp = self
            .client
            .get(BASE_URL)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("units", "metric".to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .ok()?;

        if !resp.status().is_success() {
            return None;
        }

        let body: CurrentWeatherResponse = resp.json().ok()?;
        if !(body.main.temp.is_finite() && body.main.humidity.is_finite()) {
            return None;
        }

        Some(WeatherReading {
            temperature_celsius: body.main.temp,
            humidity_percent: body.main.humidity,
            solar_radiation_w_m2: rng.gen_range(SOLAR_APPROX_MIN..=SOLAR_APPROX_MAX),
        })
    }
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    main: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temp: f64,
    humidity: f64,
}

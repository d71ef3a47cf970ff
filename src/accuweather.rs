//! AccuWeather provider client
//!
//! Wraps the two provider endpoints the service depends on: geoposition
//! search (coordinates to location key) and the one-day daily forecast.
//! Every call carries the configured timeout; there are no retries.

use anyhow::Context;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::Result;
use crate::config::WeatherConfig;
use crate::error::{RoutePoint, RoutecastError};

/// Client for the AccuWeather data service
pub struct AccuWeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    language: String,
}

/// The four readings extracted from the first daily forecast entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyReadings {
    /// Minimum temperature in degrees Celsius
    pub min_temp: f64,
    /// Maximum temperature in degrees Celsius
    pub max_temp: f64,
    /// Daytime wind speed in km/h
    pub wind_speed: f64,
    /// Daytime precipitation probability in percent
    pub precipitation_chance: f64,
}

impl DailyReadings {
    fn is_finite(&self) -> bool {
        self.min_temp.is_finite()
            && self.max_temp.is_finite()
            && self.wind_speed.is_finite()
            && self.precipitation_chance.is_finite()
    }
}

impl AccuWeatherClient {
    /// Create a new provider client from configuration
    pub fn new(config: &WeatherConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("routecast/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
        })
    }

    /// Resolve one route point: coordinates to location key to the first
    /// daily forecast entry's readings.
    pub async fn point_readings(
        &self,
        latitude: &str,
        longitude: &str,
        point: RoutePoint,
    ) -> Result<DailyReadings> {
        let key = self.resolve_location_key(latitude, longitude, point).await?;
        self.fetch_daily_forecast(&key, point).await
    }

    /// Look up the provider's opaque location key for a coordinate pair.
    ///
    /// Coordinates are interpolated as received from the form; the provider
    /// owns their interpretation.
    #[instrument(skip(self), fields(point = %point))]
    pub async fn resolve_location_key(
        &self,
        latitude: &str,
        longitude: &str,
        point: RoutePoint,
    ) -> Result<String> {
        let query = urlencoding::encode(&format!("{latitude},{longitude}")).into_owned();
        let url = format!(
            "{}/locations/v1/cities/geoposition/search?apikey={}&q={}",
            self.base_url, self.api_key, query
        );

        debug!("Resolving location key");
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "Geoposition search returned non-success status");
            return Err(RoutecastError::LocationNotFound { point });
        }

        let location: Option<GeopositionResponse> = response.json().await?;

        location
            .and_then(|l| l.key)
            .filter(|key| !key.is_empty())
            .ok_or(RoutecastError::LocationNotFound { point })
    }

    /// Fetch the one-day forecast for a location key and extract the
    /// readings from its first daily entry.
    #[instrument(skip(self), fields(point = %point))]
    pub async fn fetch_daily_forecast(
        &self,
        location_key: &str,
        point: RoutePoint,
    ) -> Result<DailyReadings> {
        let url = format!(
            "{}/forecasts/v1/daily/1day/{}?apikey={}&language={}&details=true&metric=true",
            self.base_url, location_key, self.api_key, self.language
        );

        debug!("Fetching one-day forecast");
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "Forecast request returned non-success status");
            return Err(RoutecastError::ForecastUnavailable { point });
        }

        let forecast: ForecastResponse = response.json().await?;

        let daily = forecast
            .daily_forecasts
            .into_iter()
            .next()
            .ok_or(RoutecastError::ForecastUnavailable { point })?;

        let readings = DailyReadings {
            min_temp: daily.temperature.minimum.value,
            max_temp: daily.temperature.maximum.value,
            wind_speed: daily.day.wind.speed.value,
            precipitation_chance: daily.day.precipitation_probability,
        };

        // Rejects out-of-range exponents the JSON parser admits as infinity
        if !readings.is_finite() {
            warn!("Forecast readings are not finite");
            return Err(RoutecastError::ForecastUnavailable { point });
        }

        Ok(readings)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GeopositionResponse {
    key: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ForecastResponse {
    #[serde(default)]
    daily_forecasts: Vec<DailyForecast>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DailyForecast {
    temperature: TemperatureRange,
    day: DayPart,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TemperatureRange {
    minimum: Measurement,
    maximum: Measurement,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Measurement {
    value: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DayPart {
    wind: Wind,
    precipitation_probability: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Wind {
    speed: Measurement,
}

//! OpenWeather HTTP client.

use reqwest::Client;
use serde::de::DeserializeOwned;
use skydash_core::WeatherConfig;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;
use url::Url;

use crate::dashboard::Dashboard;
use crate::error::WeatherError;
use crate::location::Location;
use crate::types::{AirPollutionResponse, CurrentWeatherResponse, ForecastResponse};

const USER_AGENT: &str = concat!("skydash/", env!("CARGO_PKG_VERSION"));
const GEO_LIMIT: &str = "5";

/// URL builder for the OpenWeather endpoints the dashboard uses.
///
/// Every URL carries the `appid` key. Only the scheme, host and port of the
/// base URL are used.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: Url,
    api_key: String,
}

impl Endpoints {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            base: Url::parse(base_url)?,
            api_key: api_key.to_string(),
        })
    }

    fn build(&self, path: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self.base.clone();
        url.set_path(path);
        url.query_pairs_mut()
            .extend_pairs(params)
            .append_pair("appid", &self.api_key);
        url
    }

    fn coordinates(location: &Location) -> (String, String) {
        (location.latitude.to_string(), location.longitude.to_string())
    }

    pub fn current_weather(&self, location: &Location) -> Url {
        let (lat, lon) = Self::coordinates(location);
        self.build(
            "/data/2.5/weather",
            &[("lat", lat.as_str()), ("lon", lon.as_str()), ("units", "metric")],
        )
    }

    pub fn forecast(&self, location: &Location) -> Url {
        let (lat, lon) = Self::coordinates(location);
        self.build(
            "/data/2.5/forecast",
            &[("lat", lat.as_str()), ("lon", lon.as_str()), ("units", "metric")],
        )
    }

    pub fn air_pollution(&self, location: &Location) -> Url {
        let (lat, lon) = Self::coordinates(location);
        self.build("/data/2.5/air_pollution", &[("lat", lat.as_str()), ("lon", lon.as_str())])
    }

    pub fn reverse_geo(&self, location: &Location) -> Url {
        let (lat, lon) = Self::coordinates(location);
        self.build(
            "/geo/1.0/reverse",
            &[("lat", lat.as_str()), ("lon", lon.as_str()), ("limit", GEO_LIMIT)],
        )
    }

    /// Direct geocoding, e.g. `"Kolkata"` or `"New Delhi"`
    pub fn geo(&self, query: &str) -> Url {
        self.build("/geo/1.0/direct", &[("q", query), ("limit", GEO_LIMIT)])
    }
}

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    pub(crate) endpoints: Endpoints,
    hourly_slots: usize,
}

impl WeatherProvider {
    /// Create a provider from the weather config section.
    ///
    /// Fails with `InvalidApiKey` when no key is configured.
    pub fn new(config: &WeatherConfig) -> Result<Self, WeatherError> {
        if !config.has_api_key() {
            return Err(WeatherError::InvalidApiKey);
        }

        let endpoints = Endpoints::new(&config.base_url, &config.api_key)
            .map_err(|e| WeatherError::Parse(format!("Invalid base URL {}: {}", config.base_url, e)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            endpoints,
            hourly_slots: config.hourly_slots,
        })
    }

    /// Current conditions at `location`
    #[instrument(skip(self), level = "info")]
    pub async fn current_weather(
        &self,
        location: &Location,
    ) -> Result<CurrentWeatherResponse, WeatherError> {
        self.get_json(self.endpoints.current_weather(location)).await
    }

    /// 5-day forecast in 3-hour steps
    #[instrument(skip(self), level = "info")]
    pub async fn forecast(&self, location: &Location) -> Result<ForecastResponse, WeatherError> {
        self.get_json(self.endpoints.forecast(location)).await
    }

    /// Current air quality index and pollutant readings
    #[instrument(skip(self), level = "info")]
    pub async fn air_pollution(
        &self,
        location: &Location,
    ) -> Result<AirPollutionResponse, WeatherError> {
        self.get_json(self.endpoints.air_pollution(location)).await
    }

    /// Fetch everything the dashboard shows for `location`.
    ///
    /// Current conditions are fetched first; the place name, air quality and
    /// forecast requests then run concurrently.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_dashboard(&self, location: &Location) -> Result<Dashboard, WeatherError> {
        let current = self.current_weather(location).await?;

        let (place_name, air, forecast) = tokio::join!(
            self.place_name(location, &current),
            self.air_pollution(location),
            self.forecast(location),
        );

        let dashboard = Dashboard::build(&place_name, &current, &air?, &forecast?, self.hourly_slots)?;
        tracing::info!("Built dashboard for {}", place_name);
        Ok(dashboard)
    }

    /// Display name for `location`; never fails, falls back to the station
    /// name and then to raw coordinates.
    async fn place_name(&self, location: &Location, current: &CurrentWeatherResponse) -> String {
        if let Some(name) = &location.city_name {
            return name.clone();
        }

        match self.reverse_geocode(location).await {
            Ok(place) => place.display_name(),
            Err(e) => {
                tracing::warn!("Reverse geocode failed: {}", e);
                if current.name.is_empty() {
                    format!("{:.2}, {:.2}", location.latitude, location.longitude)
                } else {
                    current.name.clone()
                }
            }
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, WeatherError> {
        // The query string carries the API key; only log the path
        tracing::debug!("GET {}", url.path());

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        match status.as_u16() {
            200..=299 => serde_json::from_str(&body).map_err(|e| WeatherError::Parse(e.to_string())),
            401 => Err(WeatherError::InvalidApiKey),
            404 => Err(WeatherError::LocationNotFound(api_message(&body))),
            code => {
                tracing::debug!("OpenWeather returned status {}", code);
                Err(WeatherError::Api {
                    status: code,
                    message: api_message(&body),
                })
            }
        }
    }
}

/// Extract `message` from an OpenWeather error body, else the raw body
fn api_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> Endpoints {
        Endpoints::new("https://api.openweathermap.org", "KEY").unwrap()
    }

    fn kolkata() -> Location {
        Location::new(22.57, 88.36).unwrap()
    }

    #[test]
    fn test_current_weather_url() {
        assert_eq!(
            endpoints().current_weather(&kolkata()).as_str(),
            "https://api.openweathermap.org/data/2.5/weather?lat=22.57&lon=88.36&units=metric&appid=KEY"
        );
    }

    #[test]
    fn test_air_pollution_url_has_no_units() {
        let url = endpoints().air_pollution(&kolkata());
        assert_eq!(url.path(), "/data/2.5/air_pollution");
        assert!(!url.as_str().contains("units"));
        assert!(url.as_str().ends_with("appid=KEY"));
    }

    #[test]
    fn test_geo_url_encodes_query() {
        let url = endpoints().geo("New Delhi");
        assert_eq!(url.path(), "/geo/1.0/direct");
        assert_eq!(url.query(), Some("q=New+Delhi&limit=5&appid=KEY"));
    }

    #[test]
    fn test_reverse_geo_url() {
        let url = endpoints().reverse_geo(&kolkata());
        assert_eq!(url.query(), Some("lat=22.57&lon=88.36&limit=5&appid=KEY"));
    }

    #[test]
    fn test_provider_requires_api_key() {
        let config = WeatherConfig::default();
        assert!(matches!(
            WeatherProvider::new(&config),
            Err(WeatherError::InvalidApiKey)
        ));
    }

    #[test]
    fn test_api_message() {
        assert_eq!(
            api_message(r#"{"cod":401,"message":"Invalid API key."}"#),
            "Invalid API key."
        );
        assert_eq!(api_message(" oops \n"), "oops");
    }
}

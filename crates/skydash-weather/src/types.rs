//! OpenWeather response payloads.
//!
//! Only the fields the dashboard reads are modelled; everything else in the
//! responses is ignored by serde.

use serde::{Deserialize, Serialize};

/// Condition summary attached to current and forecast entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(default)]
    pub main: String,
    pub description: String,
    /// Icon code such as `"10d"`
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Meters per second (metric units)
    pub speed: f64,
    /// Direction in meteorological degrees
    #[serde(default)]
    pub deg: f64,
}

/// `main` block of the current weather response
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentMain {
    pub temp: f64,
    pub feels_like: f64,
    /// Sea-level pressure in hPa
    pub pressure: u32,
    /// Relative humidity in percent
    pub humidity: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sun {
    pub sunrise: i64,
    pub sunset: i64,
}

/// `/data/2.5/weather`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeatherResponse {
    pub weather: Vec<Condition>,
    pub main: CurrentMain,
    /// Visibility in meters; absent for some stations
    #[serde(default)]
    pub visibility: Option<u32>,
    pub wind: Wind,
    pub sys: Sun,
    /// Observation time, Unix UTC
    pub dt: i64,
    /// Offset from UTC in seconds
    pub timezone: i64,
    #[serde(default)]
    pub name: String,
}

impl CurrentWeatherResponse {
    /// Primary condition; the API always sends at least one
    pub fn condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastMain {
    pub temp: f64,
    pub temp_max: f64,
    #[serde(default)]
    pub temp_min: f64,
}

/// One 3-hour forecast step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub dt: i64,
    pub main: ForecastMain,
    pub weather: Vec<Condition>,
    pub wind: Wind,
}

impl ForecastEntry {
    pub fn condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastCity {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: String,
    pub timezone: i64,
}

/// `/data/2.5/forecast`: 40 entries, 3 hours apart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
    pub city: ForecastCity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AqiIndex {
    pub aqi: i64,
}

/// Pollutant concentrations in μg/m³
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Components {
    pub no2: f64,
    pub o3: f64,
    pub so2: f64,
    pub pm2_5: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirPollutionEntry {
    pub main: AqiIndex,
    pub components: Components,
}

/// `/data/2.5/air_pollution`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirPollutionResponse {
    pub list: Vec<AirPollutionEntry>,
}

/// Result of the direct and reverse geocoding endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub state: Option<String>,
}

impl Place {
    /// `"Kolkata, IN"`
    pub fn display_name(&self) -> String {
        if self.country.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.country)
        }
    }

    /// `"West Bengal IN"`; the state is optional
    pub fn subtitle(&self) -> String {
        match self.state.as_deref().filter(|s| !s.is_empty()) {
            Some(state) => format!("{} {}", state, self.country),
            None => self.country.clone(),
        }
    }
}

//! Weather service for Skydash
//!
//! Pure formatters for OpenWeather values (local dates and times, unit
//! conversions, AQI and calendar lookups), an async OpenWeather client, and
//! the display-ready dashboard built from its responses.

pub mod aqi;
pub mod calendar;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod geocode;
pub mod location;
pub mod provider;
pub mod types;

pub use aqi::{aqi_label, AirQuality, AqiLabel};
pub use calendar::{month_name, weekday_name, Month, Weekday};
pub use dashboard::Dashboard;
pub use error::{FormatError, WeatherError};
pub use format::{local_date, local_hour, local_time, mps_to_kph};
pub use location::{Location, LocationError};
pub use provider::{Endpoints, WeatherProvider};
pub use types::Place;

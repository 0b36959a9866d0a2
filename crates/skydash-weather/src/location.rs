use serde::{Deserialize, Serialize};

use crate::types::Place;

/// Geographic location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub city_name: Option<String>,
}

/// Location errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocationError {
    #[error("Latitude {0} is outside [-90, 90]")]
    InvalidLatitude(f64),
    #[error("Longitude {0} is outside [-180, 180]")]
    InvalidLongitude(f64),
    #[error("Malformed coordinates: {0}")]
    Malformed(String),
}

impl Location {
    /// Build a location from validated coordinates
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, LocationError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(LocationError::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(LocationError::InvalidLongitude(longitude));
        }

        Ok(Self {
            latitude,
            longitude,
            city_name: None,
        })
    }

    /// Parse `"lat,lon"`, e.g. `"22.57,88.36"`
    pub fn parse(input: &str) -> Result<Self, LocationError> {
        let (lat, lon) = input
            .split_once(',')
            .ok_or_else(|| LocationError::Malformed(input.to_string()))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| LocationError::Malformed(input.to_string()))
        };

        Self::new(parse(lat)?, parse(lon)?)
    }

    pub fn with_city_name(mut self, name: impl Into<String>) -> Self {
        self.city_name = Some(name.into());
        self
    }
}

impl From<&Place> for Location {
    fn from(place: &Place) -> Self {
        Self {
            latitude: place.lat,
            longitude: place.lon,
            city_name: Some(place.display_name()),
        }
    }
}

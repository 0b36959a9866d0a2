//! Geocoding: city search and coordinates to place names.
//! Uses the OpenWeather geocoding API with the same key as the weather calls.

use tracing::instrument;

use crate::error::WeatherError;
use crate::location::Location;
use crate::provider::WeatherProvider;
use crate::types::Place;

impl WeatherProvider {
    /// Search places by name. A blank query returns no matches without a request.
    #[instrument(skip(self), level = "info")]
    pub async fn search(&self, query: &str) -> Result<Vec<Place>, WeatherError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let places: Vec<Place> = self.get_json(self.endpoints.geo(query)).await?;
        tracing::info!("Found {} places for {:?}", places.len(), query);
        Ok(places)
    }

    /// Resolve a search query to the location of its best match
    pub async fn resolve_city(&self, query: &str) -> Result<Location, WeatherError> {
        let places = self.search(query).await?;
        let place = places
            .first()
            .ok_or_else(|| WeatherError::LocationNotFound(query.trim().to_string()))?;

        Ok(Location::from(place))
    }

    /// Reverse geocode coordinates to the nearest named place
    #[instrument(skip(self), level = "debug")]
    pub async fn reverse_geocode(&self, location: &Location) -> Result<Place, WeatherError> {
        let places: Vec<Place> = self.get_json(self.endpoints.reverse_geo(location)).await?;

        let place = places.into_iter().next().ok_or_else(|| {
            WeatherError::LocationNotFound(format!(
                "{:.2}, {:.2}",
                location.latitude, location.longitude
            ))
        })?;

        tracing::debug!("Reverse geocoded to: {}", place.display_name());
        Ok(place)
    }
}

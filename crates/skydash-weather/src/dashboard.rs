//! Display-ready view of one location's weather.
//!
//! Builds the four dashboard sections from raw API responses. All strings are
//! final; renderers only lay them out.

use serde::Serialize;

use crate::aqi::{AirQuality, AqiLabel};
use crate::error::WeatherError;
use crate::format;
use crate::types::{
    AirPollutionResponse, CurrentWeatherResponse, ForecastEntry, ForecastResponse,
};

/// Forecast entries are 3 hours apart, so 8 make a day
const ENTRIES_PER_DAY: usize = 8;

#[derive(Debug, Clone, Serialize)]
pub struct CurrentCard {
    /// Whole degrees Celsius, fraction dropped
    pub temperature: i64,
    pub description: String,
    pub icon: String,
    pub date: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Highlights {
    pub aqi: u8,
    pub air_quality: AqiLabel,
    pub pm2_5: String,
    pub so2: String,
    pub no2: String,
    pub o3: String,
    pub sunrise: String,
    pub sunset: String,
    pub humidity: u8,
    pub pressure: u32,
    pub visibility_km: Option<f64>,
    pub feels_like: i64,
}

/// One column of the "Today at" strip
#[derive(Debug, Clone, Serialize)]
pub struct HourlySlot {
    pub hour: String,
    pub temperature: i64,
    pub icon: String,
    pub description: String,
    /// Degrees to rotate an up-pointing arrow
    pub wind_rotation: f64,
    pub wind_kph: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    pub temp_max: i64,
    pub icon: String,
    pub description: String,
    /// `"14 Nov"`
    pub date: String,
    pub weekday: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub current: CurrentCard,
    pub highlights: Highlights,
    pub hourly: Vec<HourlySlot>,
    pub daily: Vec<DaySummary>,
}

fn no_conditions(what: &str) -> WeatherError {
    WeatherError::Parse(format!("{} has no weather conditions", what))
}

impl Dashboard {
    /// Assemble the dashboard.
    ///
    /// `hourly_slots` caps the hourly strip. The daily list takes the entry at
    /// the end of each forecast day: indices 7, 15, 23 and so on.
    pub fn build(
        location_name: &str,
        current: &CurrentWeatherResponse,
        air: &AirPollutionResponse,
        forecast: &ForecastResponse,
        hourly_slots: usize,
    ) -> Result<Self, WeatherError> {
        let now = current
            .condition()
            .ok_or_else(|| no_conditions("current weather"))?;
        let tz = current.timezone;

        let current_card = CurrentCard {
            temperature: format::truncate(current.main.temp),
            description: now.description.clone(),
            icon: now.icon.clone(),
            date: format::local_date(current.dt, tz),
            location: location_name.to_string(),
        };

        let reading = air
            .list
            .first()
            .ok_or_else(|| WeatherError::Parse("air pollution response has no entries".into()))?;
        let quality = AirQuality::from_code(reading.main.aqi)?;
        let c = &reading.components;

        let highlights = Highlights {
            aqi: quality.code(),
            air_quality: quality.label(),
            pm2_5: format::to_precision(c.pm2_5, 3),
            so2: format::to_precision(c.so2, 3),
            no2: format::to_precision(c.no2, 3),
            o3: format::to_precision(c.o3, 3),
            sunrise: format::local_time(current.sys.sunrise, tz),
            sunset: format::local_time(current.sys.sunset, tz),
            humidity: current.main.humidity,
            pressure: current.main.pressure,
            visibility_km: current.visibility.map(|m| format::meters_to_km(f64::from(m))),
            feels_like: format::truncate(current.main.feels_like),
        };

        let forecast_tz = forecast.city.timezone;

        let hourly = forecast
            .list
            .iter()
            .take(hourly_slots)
            .map(|entry| hourly_slot(entry, forecast_tz))
            .collect::<Result<Vec<_>, _>>()?;

        let daily = forecast
            .list
            .iter()
            .skip(ENTRIES_PER_DAY - 1)
            .step_by(ENTRIES_PER_DAY)
            .map(|entry| day_summary(entry, forecast_tz))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            current: current_card,
            highlights,
            hourly,
            daily,
        })
    }
}

fn hourly_slot(entry: &ForecastEntry, tz: i64) -> Result<HourlySlot, WeatherError> {
    let condition = entry
        .condition()
        .ok_or_else(|| no_conditions("forecast entry"))?;
    Ok(HourlySlot {
        hour: format::local_hour(entry.dt, tz),
        temperature: format::truncate(entry.main.temp),
        icon: condition.icon.clone(),
        description: condition.description.clone(),
        wind_rotation: format::wind_rotation(entry.wind.deg),
        wind_kph: format::truncate(format::mps_to_kph(entry.wind.speed)),
    })
}

fn day_summary(entry: &ForecastEntry, tz: i64) -> Result<DaySummary, WeatherError> {
    let condition = entry
        .condition()
        .ok_or_else(|| no_conditions("forecast entry"))?;
    Ok(DaySummary {
        temp_max: format::truncate(entry.main.temp_max),
        icon: condition.icon.clone(),
        description: condition.description.clone(),
        date: format::day_month(entry.dt, tz),
        weekday: format::local_weekday(entry.dt, tz).name(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;
    use crate::types::{
        AirPollutionEntry, AqiIndex, Components, Condition, CurrentMain, ForecastCity,
        ForecastMain, Sun, Wind,
    };

    const TS: i64 = 1_700_000_000; // 2023-11-14T22:13:20Z
    const IST: i64 = 19_800;

    fn condition(icon: &str) -> Condition {
        Condition {
            main: "Clouds".to_string(),
            description: "scattered clouds".to_string(),
            icon: icon.to_string(),
        }
    }

    fn current() -> CurrentWeatherResponse {
        CurrentWeatherResponse {
            weather: vec![condition("03n")],
            main: CurrentMain {
                temp: 24.97,
                feels_like: 25.4,
                pressure: 1014,
                humidity: 69,
            },
            visibility: Some(3000),
            wind: Wind { speed: 2.06, deg: 340.0 },
            sys: Sun {
                // 06:00 and 17:15 IST on 14 Nov 2023
                sunrise: 1_699_921_800,
                sunset: 1_699_962_300,
            },
            dt: TS,
            timezone: IST,
            name: "Kolkata".to_string(),
        }
    }

    fn air(aqi: i64) -> AirPollutionResponse {
        AirPollutionResponse {
            list: vec![AirPollutionEntry {
                main: AqiIndex { aqi },
                components: Components {
                    no2: 12.345,
                    o3: 0.5,
                    so2: 1234.5,
                    pm2_5: 87.0,
                },
            }],
        }
    }

    fn forecast(entries: usize) -> ForecastResponse {
        let list = (0..entries as i64)
            .map(|i| ForecastEntry {
                dt: TS + i * 3 * 3600,
                main: ForecastMain {
                    temp: 20.0 + i as f64 * 0.5,
                    temp_max: 21.9,
                    temp_min: 18.0,
                },
                weather: vec![condition("04d")],
                wind: Wind {
                    speed: 10.0,
                    deg: 90.0,
                },
            })
            .collect();

        ForecastResponse {
            list,
            city: ForecastCity {
                name: "Kolkata".to_string(),
                country: "IN".to_string(),
                timezone: IST,
            },
        }
    }

    #[test]
    fn test_current_card() {
        let dash = Dashboard::build("Kolkata, IN", &current(), &air(2), &forecast(40), 8).unwrap();
        assert_eq!(dash.current.temperature, 24);
        assert_eq!(dash.current.icon, "03n");
        assert_eq!(dash.current.date, "Wednesday 15 Nov 2023");
        assert_eq!(dash.current.location, "Kolkata, IN");
    }

    #[test]
    fn test_highlights() {
        let dash = Dashboard::build("Kolkata, IN", &current(), &air(4), &forecast(40), 8).unwrap();
        let h = &dash.highlights;
        assert_eq!(h.aqi, 4);
        assert_eq!(h.air_quality.level, "Poor");
        assert_eq!(h.no2, "12.3");
        assert_eq!(h.o3, "0.500");
        assert_eq!(h.so2, "1.23e+3");
        assert_eq!(h.pm2_5, "87.0");
        assert_eq!(h.sunrise, "6:00 AM");
        assert_eq!(h.sunset, "5:15 PM");
        assert_eq!(h.visibility_km, Some(3.0));
        assert_eq!(h.feels_like, 25);
    }

    #[test]
    fn test_hourly_strip() {
        let dash = Dashboard::build("Kolkata, IN", &current(), &air(1), &forecast(40), 8).unwrap();
        assert_eq!(dash.hourly.len(), 8);

        let first = &dash.hourly[0];
        assert_eq!(first.hour, "3 AM");
        assert_eq!(first.temperature, 20);
        assert_eq!(first.wind_kph, 36);
        assert_eq!(first.wind_rotation, -90.0);
        assert_eq!(dash.hourly[1].hour, "6 AM");
        assert_eq!(dash.hourly[7].hour, "12 AM");
    }

    #[test]
    fn test_hourly_slots_are_configurable() {
        let dash = Dashboard::build("x", &current(), &air(1), &forecast(40), 3).unwrap();
        assert_eq!(dash.hourly.len(), 3);

        let short = Dashboard::build("x", &current(), &air(1), &forecast(2), 8).unwrap();
        assert_eq!(short.hourly.len(), 2);
        assert!(short.daily.is_empty());
    }

    #[test]
    fn test_daily_takes_every_eighth_entry() {
        let dash = Dashboard::build("x", &current(), &air(1), &forecast(40), 8).unwrap();
        assert_eq!(dash.daily.len(), 5);

        // Entry 7 is 21 hours after 03:43 IST on 15 Nov
        let first = &dash.daily[0];
        assert_eq!(first.date, "16 Nov");
        assert_eq!(first.weekday, "Thursday");
        assert_eq!(first.temp_max, 21);
        assert_eq!(dash.daily[4].date, "20 Nov");
        assert_eq!(dash.daily[4].weekday, "Monday");
    }

    #[test]
    fn test_invalid_aqi_is_format_error() {
        let err = Dashboard::build("x", &current(), &air(9), &forecast(40), 8).unwrap_err();
        assert!(matches!(
            err,
            WeatherError::Format(FormatError::InvalidArgument { value: 9, .. })
        ));
    }

    #[test]
    fn test_empty_air_pollution_is_parse_error() {
        let empty = AirPollutionResponse { list: Vec::new() };
        let err = Dashboard::build("x", &current(), &empty, &forecast(40), 8).unwrap_err();
        assert!(matches!(err, WeatherError::Parse(_)));
    }

    #[test]
    fn test_missing_conditions_are_parse_errors() {
        let mut bare = current();
        bare.weather.clear();
        let err = Dashboard::build("x", &bare, &air(1), &forecast(40), 8).unwrap_err();
        assert!(matches!(err, WeatherError::Parse(ref m) if m.contains("current weather")));

        let mut hours = forecast(40);
        hours.list[2].weather.clear();
        let err = Dashboard::build("x", &current(), &air(1), &hours, 8).unwrap_err();
        assert!(matches!(err, WeatherError::Parse(ref m) if m.contains("forecast entry")));
    }

    #[test]
    fn test_serializes_to_json() {
        let dash = Dashboard::build("Kolkata, IN", &current(), &air(3), &forecast(40), 8).unwrap();
        let json = serde_json::to_value(&dash).unwrap();
        assert_eq!(json["highlights"]["air_quality"]["level"], "Moderate");
        assert_eq!(json["daily"].as_array().map(Vec::len), Some(5));
    }
}

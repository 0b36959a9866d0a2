//! Plain-text layout of the dashboard.

use std::fmt::{self, Write};

use skydash_weather::dashboard::Dashboard;
use skydash_weather::types::Place;

pub fn dashboard(dash: &Dashboard) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_dashboard(&mut out, dash);
    out
}

fn write_dashboard(out: &mut String, dash: &Dashboard) -> fmt::Result {
    let current = &dash.current;
    let h = &dash.highlights;

    writeln!(out, "Now  {}  {}°C  {}", current.location, current.temperature, current.description)?;
    writeln!(out, "     {}", current.date)?;
    writeln!(out)?;

    writeln!(out, "Today's Highlights")?;
    writeln!(
        out,
        "  Air quality   {} ({})  PM2.5 {}  SO2 {}  NO2 {}  O3 {}",
        h.air_quality.level, h.aqi, h.pm2_5, h.so2, h.no2, h.o3
    )?;
    writeln!(out, "                {}", h.air_quality.message)?;
    writeln!(out, "  Sunrise       {}", h.sunrise)?;
    writeln!(out, "  Sunset        {}", h.sunset)?;
    writeln!(out, "  Humidity      {}%", h.humidity)?;
    writeln!(out, "  Pressure      {} hPa", h.pressure)?;
    match h.visibility_km {
        Some(km) => writeln!(out, "  Visibility    {} km", km)?,
        None => writeln!(out, "  Visibility    n/a")?,
    }
    writeln!(out, "  Feels like    {}°C", h.feels_like)?;
    writeln!(out)?;

    writeln!(out, "Today at")?;
    for slot in &dash.hourly {
        writeln!(
            out,
            "  {:>5}  {:>3}°  {:<20}  wind {:>3} km/h",
            slot.hour, slot.temperature, slot.description, slot.wind_kph
        )?;
    }
    writeln!(out)?;

    writeln!(out, "5 Days Forecast")?;
    for day in &dash.daily {
        writeln!(
            out,
            "  {:>3}°  {:<6}  {:<9}  {}",
            day.temp_max, day.date, day.weekday, day.description
        )?;
    }

    Ok(())
}

pub fn places(places: &[Place]) -> String {
    if places.is_empty() {
        return "No places found\n".to_string();
    }

    places
        .iter()
        .map(|p| format!("{:<28} {:<24} {:.4},{:.4}\n", p.display_name(), p.subtitle(), p.lat, p.lon))
        .collect()
}

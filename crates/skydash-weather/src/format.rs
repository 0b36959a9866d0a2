//! Display formatting for raw OpenWeather values.
//!
//! Every local-time helper takes a UTC epoch timestamp plus the location's
//! offset in seconds. The offset is added to the timestamp and the result is
//! read as UTC, so output never depends on the machine's own timezone.
//! Times use a 12-hour clock with an AM/PM suffix.

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::calendar::{Month, Weekday};

/// Shift `timestamp` by `offset` and read it as a UTC calendar instant.
///
/// Overflowing shifts saturate and instants past chrono's range are clamped,
/// which keeps every formatter below total over `i64` inputs.
fn shifted(timestamp: i64, offset: i64) -> DateTime<Utc> {
    let local = timestamp.saturating_add(offset);
    DateTime::from_timestamp(local, 0).unwrap_or(if local < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

fn twelve_hour(hour: u32) -> (u32, &'static str) {
    let period = if hour >= 12 { "PM" } else { "AM" };
    match hour % 12 {
        0 => (12, period),
        h => (h, period),
    }
}

/// Local calendar date, e.g. `"Tuesday 14 Nov 2023"`
pub fn local_date(timestamp: i64, offset: i64) -> String {
    let dt = shifted(timestamp, offset);
    format!(
        "{} {} {} {}",
        Weekday::from(dt.weekday()).name(),
        dt.day(),
        Month::of(&dt).short_name(),
        dt.year()
    )
}

/// Local day and month, e.g. `"14 Nov"`
pub fn day_month(timestamp: i64, offset: i64) -> String {
    let dt = shifted(timestamp, offset);
    format!("{} {}", dt.day(), Month::of(&dt).short_name())
}

/// Local weekday at the given instant
pub fn local_weekday(timestamp: i64, offset: i64) -> Weekday {
    shifted(timestamp, offset).weekday().into()
}

/// Local clock time, e.g. `"10:13 PM"`
pub fn local_time(timestamp: i64, offset: i64) -> String {
    let dt = shifted(timestamp, offset);
    let (hour, period) = twelve_hour(dt.hour());
    format!("{}:{:02} {}", hour, dt.minute(), period)
}

/// Local hour only, e.g. `"10 PM"`; midnight is `"12 AM"`
pub fn local_hour(timestamp: i64, offset: i64) -> String {
    let (hour, period) = twelve_hour(shifted(timestamp, offset).hour());
    format!("{} {}", hour, period)
}

/// Convert meters per second to kilometers per hour. No rounding.
pub fn mps_to_kph(speed: f64) -> f64 {
    speed * 3.6
}

/// Convert a visibility distance in meters to kilometers
pub fn meters_to_km(meters: f64) -> f64 {
    meters / 1000.0
}

/// Rotation for a wind arrow icon that points up at rest
pub fn wind_rotation(degrees: f64) -> f64 {
    degrees - 180.0
}

/// Drop the fractional part (toward zero), like `parseInt` on a reading
pub fn truncate(value: f64) -> i64 {
    value.trunc() as i64
}

/// Format `value` with `digits` significant digits.
///
/// Matches JavaScript's `Number.prototype.toPrecision`: fixed notation when
/// the decimal exponent is in `-6..digits`, exponential (`1.23e+3`) otherwise.
pub fn to_precision(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // JavaScript drops the sign of negative zero
    let value = if value == 0.0 { 0.0 } else { value };
    let digits = digits.clamp(1, 100);
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    let precision = digits as i32;
    if exponent < -6 || exponent >= precision {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{}", mantissa, sign, exponent.abs())
    } else {
        let decimals = (precision - 1 - exponent) as usize;
        format!("{:.*}", decimals, value)
    }
}

//! Month and weekday name tables.
//!
//! Indices follow the OpenWeather/JavaScript convention: months are 0-based
//! (0 = January) and weekdays start on Sunday (0 = Sunday).

use chrono::Datelike;
use serde::Serialize;

use crate::error::FormatError;

/// Calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Look up a month by its 0-based index
    pub fn from_index(index: i64) -> Result<Self, FormatError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(FormatError::InvalidArgument {
                what: "month index",
                value: index,
            })
    }

    /// Three-letter display name
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::January => "Jan",
            Self::February => "Feb",
            Self::March => "Mar",
            Self::April => "Apr",
            Self::May => "May",
            Self::June => "Jun",
            Self::July => "Jul",
            Self::August => "Aug",
            Self::September => "Sep",
            Self::October => "Oct",
            Self::November => "Nov",
            Self::December => "Dec",
        }
    }

    /// Month of a chrono date
    pub fn of(date: &impl Datelike) -> Self {
        Self::ALL[date.month0() as usize]
    }
}

/// Day of the week, Sunday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Look up a weekday by its index (0 = Sunday)
    pub fn from_index(index: i64) -> Result<Self, FormatError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(FormatError::InvalidArgument {
                what: "weekday index",
                value: index,
            })
    }

    /// Full display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Self::ALL[day.num_days_from_sunday() as usize]
    }
}

/// Short month name for a 0-based month index
pub fn month_name(index: i64) -> Result<&'static str, FormatError> {
    Month::from_index(index).map(|m| m.short_name())
}

/// Weekday name for an index where 0 is Sunday
pub fn weekday_name(index: i64) -> Result<&'static str, FormatError> {
    Weekday::from_index(index).map(|d| d.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_month_bounds() {
        assert_eq!(month_name(0), Ok("Jan"));
        assert_eq!(month_name(11), Ok("Dec"));
    }

    #[test]
    fn test_month_out_of_domain() {
        assert_eq!(
            month_name(12),
            Err(FormatError::InvalidArgument {
                what: "month index",
                value: 12
            })
        );
        assert!(month_name(-1).is_err());
        assert!(month_name(i64::MAX).is_err());
    }

    #[test]
    fn test_weekdays_follow_calendar_order() {
        let names: Vec<_> = (0..7).map(|i| weekday_name(i).unwrap()).collect();
        assert_eq!(
            names,
            ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"]
        );
        let distinct: HashSet<_> = names.iter().collect();
        assert_eq!(distinct.len(), 7);
    }

    #[test]
    fn test_weekday_out_of_domain() {
        assert!(weekday_name(7).is_err());
        assert!(weekday_name(-3).is_err());
    }

    #[test]
    fn test_chrono_conversions() {
        let first = chrono::NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let last = chrono::NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(Month::of(&first), Month::January);
        assert_eq!(Month::of(&last), Month::December);
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sunday);
        assert_eq!(Weekday::from(chrono::Weekday::Sat), Weekday::Saturday);
    }
}

use serde::Serialize;

use crate::error::FormatError;

/// Air quality categories reported by the OpenWeather air pollution API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AirQuality {
    Good,
    Fair,
    Moderate,
    Poor,
    VeryPoor,
}

impl AirQuality {
    /// Convert an AQI code (1..=5) to a category
    pub fn from_code(code: i64) -> Result<Self, FormatError> {
        match code {
            1 => Ok(Self::Good),
            2 => Ok(Self::Fair),
            3 => Ok(Self::Moderate),
            4 => Ok(Self::Poor),
            5 => Ok(Self::VeryPoor),
            _ => Err(FormatError::InvalidArgument {
                what: "AQI code",
                value: code,
            }),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Self::Good => 1,
            Self::Fair => 2,
            Self::Moderate => 3,
            Self::Poor => 4,
            Self::VeryPoor => 5,
        }
    }

    /// Short severity label
    pub fn level(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Moderate => "Moderate",
            Self::Poor => "Poor",
            Self::VeryPoor => "Very Poor",
        }
    }

    /// One-sentence description of the health impact
    pub fn message(&self) -> &'static str {
        match self {
            Self::Good => {
                "Air quality is considered satisfactory, and air pollution poses little or no risk."
            }
            Self::Fair => {
                "Air quality is acceptable, though a very small number of people who are unusually sensitive to air pollution may have a moderate health concern."
            }
            Self::Moderate => {
                "Members of sensitive groups may experience health effects, while the general public is not likely to be affected."
            }
            Self::Poor => {
                "Everyone may begin to experience health effects, and members of sensitive groups may experience more serious effects."
            }
            Self::VeryPoor => {
                "Health warnings of emergency conditions apply, as the entire population is more likely to be affected."
            }
        }
    }

    pub fn label(&self) -> AqiLabel {
        AqiLabel {
            level: self.level(),
            message: self.message(),
        }
    }
}

/// Display pair for an AQI badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AqiLabel {
    pub level: &'static str,
    pub message: &'static str,
}

/// Look up the label for an AQI code, failing outside 1..=5
pub fn aqi_label(code: i64) -> Result<AqiLabel, FormatError> {
    AirQuality::from_code(code).map(|q| q.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_codes_have_labels() {
        for code in 1..=5 {
            let label = aqi_label(code).unwrap();
            assert!(!label.level.is_empty());
            assert!(!label.message.is_empty());
        }
    }

    #[test]
    fn test_levels_in_order() {
        let levels: Vec<_> = (1..=5).map(|c| aqi_label(c).unwrap().level).collect();
        assert_eq!(levels, ["Good", "Fair", "Moderate", "Poor", "Very Poor"]);
    }

    #[test]
    fn test_code_round_trip() {
        for code in 1..=5 {
            assert_eq!(i64::from(AirQuality::from_code(code).unwrap().code()), code);
        }
    }

    #[test]
    fn test_invalid_codes() {
        for code in [0, 6, -1, 100, i64::MIN] {
            assert_eq!(
                aqi_label(code),
                Err(FormatError::InvalidArgument {
                    what: "AQI code",
                    value: code
                })
            );
        }
    }
}

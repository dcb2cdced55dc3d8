//! Deterministic mock weather.
//!
//! Readings are derived from a hash of the destination name, so the same
//! destination always shows the same current weather and the forecast only
//! moves with the calendar (its day labels), never with stored state.

use chrono::{Duration, NaiveDate, Utc};
use roamly_shared::stable_hash;
use serde::{Deserialize, Serialize};

use crate::tour::Tour;

/// Number of forecast days after today
pub const FORECAST_DAYS: u32 = 5;

/// Temperatures above this (°C) never snow; at or below it never rain
pub const SNOW_THRESHOLD: i32 = 4;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    PartlyCloudy,
    Rainy,
    Stormy,
    Windy,
    Snowy,
}

impl WeatherCondition {
    /// Candidate order used when picking by hash
    pub const ALL: [WeatherCondition; 7] = [
        WeatherCondition::Sunny,
        WeatherCondition::Cloudy,
        WeatherCondition::PartlyCloudy,
        WeatherCondition::Rainy,
        WeatherCondition::Stormy,
        WeatherCondition::Windy,
        WeatherCondition::Snowy,
    ];

    pub fn icon(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "sun",
            WeatherCondition::Cloudy => "cloud",
            WeatherCondition::PartlyCloudy => "cloud-sun",
            WeatherCondition::Rainy => "cloud-rain",
            WeatherCondition::Stormy => "cloud-lightning",
            WeatherCondition::Windy => "wind",
            WeatherCondition::Snowy => "snowflake",
        }
    }

    /// Whether the condition is physically plausible at `temperature`
    pub fn plausible_at(&self, temperature: i32) -> bool {
        if temperature > SNOW_THRESHOLD {
            *self != WeatherCondition::Snowy
        } else {
            !matches!(self, WeatherCondition::Rainy | WeatherCondition::Stormy)
        }
    }
}

/// Climate baseline for a destination
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherProfile {
    pub base_temp: i32,
    pub base_humidity: i32,
    pub base_wind: i32,
    pub default_condition: WeatherCondition,
}

impl Default for WeatherProfile {
    fn default() -> Self {
        Self {
            base_temp: 24,
            base_humidity: 60,
            base_wind: 10,
            default_condition: WeatherCondition::PartlyCloudy,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    /// °C
    pub temperature: i32,
    pub condition: WeatherCondition,
    pub icon: String,
    /// Percent, 0..=100
    pub humidity: u8,
    /// km/h
    pub wind_speed: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    pub date: NaiveDate,
    /// Short weekday name, e.g. "Mon"
    pub day: String,
    pub reading: Reading,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub location: String,
    pub current: Reading,
    pub forecast: Vec<ForecastDay>,
}

/// Produces mock current weather and a five-day forecast.
#[derive(Debug, Clone, Default)]
pub struct WeatherGenerator {
    default_profile: WeatherProfile,
}

impl WeatherGenerator {
    pub fn new(default_profile: WeatherProfile) -> Self {
        Self { default_profile }
    }

    /// Weather for a destination, with the forecast starting tomorrow (UTC)
    pub fn weather_for(&self, destination: &str, profile: Option<&WeatherProfile>) -> WeatherReport {
        self.weather_for_on(destination, profile, Utc::now().date_naive())
    }

    pub fn weather_for_tour(&self, tour: &Tour) -> WeatherReport {
        self.weather_for(&tour.destination, Some(&tour.weather_profile))
    }

    /// Same as [`weather_for`](Self::weather_for) with an explicit "today".
    pub fn weather_for_on(
        &self,
        destination: &str,
        profile: Option<&WeatherProfile>,
        today: NaiveDate,
    ) -> WeatherReport {
        let profile = profile.unwrap_or(&self.default_profile);

        let current = reading_from_hash(stable_hash(destination), profile);
        let forecast = (1..=FORECAST_DAYS)
            .map(|offset| {
                let date = today + Duration::days(offset as i64);
                let seed = format!("{}{}forecast", destination, offset);
                ForecastDay {
                    day: date.format("%a").to_string(),
                    date,
                    reading: reading_from_hash(stable_hash(&seed), profile),
                }
            })
            .collect();

        WeatherReport {
            location: destination.to_string(),
            current,
            forecast,
        }
    }
}

/// Derive a single reading from a hash value and a climate baseline.
pub fn reading_from_hash(hash: u32, profile: &WeatherProfile) -> Reading {
    // profiles come from storage; extreme baselines clamp instead of overflowing
    let temperature = profile.base_temp.saturating_add((hash % 9) as i32 - 4);
    let jitter = (hash % 10) as i32 - 5;

    let candidates: Vec<WeatherCondition> = WeatherCondition::ALL
        .into_iter()
        .filter(|c| c.plausible_at(temperature))
        .collect();

    let condition = if candidates.contains(&profile.default_condition) && hash % 10 > 2 {
        profile.default_condition
    } else {
        candidates[hash as usize % candidates.len()]
    };

    Reading {
        temperature,
        condition,
        icon: condition.icon().to_string(),
        humidity: profile.base_humidity.saturating_add(jitter).clamp(0, 100) as u8,
        wind_speed: profile.base_wind.saturating_add(jitter).max(0) as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kyoto_profile() -> WeatherProfile {
        WeatherProfile {
            base_temp: 18,
            base_humidity: 65,
            base_wind: 10,
            default_condition: WeatherCondition::Cloudy,
        }
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 23).unwrap()
    }

    #[test]
    fn test_pinned_current_reading() {
        let report = WeatherGenerator::default().weather_for_on("Kyoto", Some(&kyoto_profile()), monday());
        assert_eq!(report.location, "Kyoto");
        assert_eq!(report.current.temperature, 14);
        assert_eq!(report.current.condition, WeatherCondition::Cloudy);
        assert_eq!(report.current.icon, "cloud");
        assert_eq!(report.current.humidity, 64);
        assert_eq!(report.current.wind_speed, 9);
    }

    #[test]
    fn test_forecast_covers_next_five_days() {
        let report = WeatherGenerator::default().weather_for_on("Kyoto", Some(&kyoto_profile()), monday());
        let days: Vec<&str> = report.forecast.iter().map(|d| d.day.as_str()).collect();
        assert_eq!(days, vec!["Tue", "Wed", "Thu", "Fri", "Sat"]);
        assert_eq!(report.forecast[0].date, NaiveDate::from_ymd_opt(2026, 3, 24).unwrap());

        let first = &report.forecast[0].reading;
        assert_eq!(first.temperature, 19);
        assert_eq!(first.condition, WeatherCondition::PartlyCloudy);
        let last = &report.forecast[4].reading;
        assert_eq!(last.temperature, 21);
        assert_eq!(last.condition, WeatherCondition::Stormy);
    }

    #[test]
    fn test_cold_destination_snows() {
        let profile = WeatherProfile {
            base_temp: 2,
            base_humidity: 80,
            base_wind: 20,
            default_condition: WeatherCondition::Snowy,
        };
        let report = WeatherGenerator::default().weather_for_on("Reykjavik", Some(&profile), monday());
        assert_eq!(report.current.temperature, 3);
        assert_eq!(report.current.condition, WeatherCondition::Snowy);
        assert_eq!(report.current.humidity, 83);
        assert_eq!(report.current.wind_speed, 23);
    }

    #[test]
    fn test_same_day_is_deterministic() {
        let generator = WeatherGenerator::default();
        let a = generator.weather_for_on("Lisbon", None, monday());
        let b = generator.weather_for_on("Lisbon", None, monday());
        assert_eq!(a, b);

        let next_week = generator.weather_for_on("Lisbon", None, monday() + Duration::days(7));
        assert_eq!(a.current, next_week.current);
        let readings = |r: &WeatherReport| r.forecast.iter().map(|d| d.reading.clone()).collect::<Vec<_>>();
        assert_eq!(readings(&a), readings(&next_week));
    }

    #[test]
    fn test_realism_filter_holds_everywhere() {
        let generator = WeatherGenerator::default();
        for base_temp in -10..=35 {
            for condition in WeatherCondition::ALL {
                let profile = WeatherProfile {
                    base_temp,
                    base_humidity: 98,
                    base_wind: 2,
                    default_condition: condition,
                };
                for name in ["Oslo", "Cairo", "Lima", "Hanoi", "Quito", "Nairobi"] {
                    let report = generator.weather_for_on(name, Some(&profile), monday());
                    let all = std::iter::once(&report.current).chain(report.forecast.iter().map(|d| &d.reading));
                    for reading in all {
                        if reading.temperature > SNOW_THRESHOLD {
                            assert_ne!(reading.condition, WeatherCondition::Snowy);
                        } else {
                            assert!(!matches!(
                                reading.condition,
                                WeatherCondition::Rainy | WeatherCondition::Stormy
                            ));
                        }
                        assert!(reading.humidity <= 100);
                        assert!((reading.temperature - base_temp).abs() <= 4);
                    }
                }
            }
        }
    }

    #[test]
    fn test_missing_profile_uses_default() {
        let generator = WeatherGenerator::default();
        let explicit = generator.weather_for_on("Goa", Some(&WeatherProfile::default()), monday());
        let implicit = generator.weather_for_on("Goa", None, monday());
        assert_eq!(explicit, implicit);
    }

    #[test]
    fn test_wind_never_negative() {
        let profile = WeatherProfile {
            base_temp: 20,
            base_humidity: 0,
            base_wind: 0,
            default_condition: WeatherCondition::Sunny,
        };
        let reading = reading_from_hash(0, &profile);
        assert_eq!(reading.wind_speed, 0);
        assert_eq!(reading.humidity, 0);
    }

    #[test]
    fn test_extreme_profile_saturates() {
        let hot = WeatherProfile {
            base_temp: i32::MAX,
            base_humidity: i32::MAX,
            base_wind: i32::MAX,
            default_condition: WeatherCondition::Sunny,
        };
        // hash % 9 == 8 and hash % 10 == 8 push every field upwards
        let reading = reading_from_hash(98, &hot);
        assert_eq!(reading.temperature, i32::MAX);
        assert_eq!(reading.humidity, 100);
        assert_eq!(reading.wind_speed, i32::MAX as u32);
        assert_ne!(reading.condition, WeatherCondition::Snowy);

        let cold = WeatherProfile {
            base_temp: i32::MIN,
            base_humidity: i32::MIN,
            base_wind: i32::MIN,
            default_condition: WeatherCondition::Snowy,
        };
        let reading = reading_from_hash(0, &cold);
        assert_eq!(reading.temperature, i32::MIN);
        assert_eq!(reading.humidity, 0);
        assert_eq!(reading.wind_speed, 0);
    }
}

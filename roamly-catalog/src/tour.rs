use serde::{Deserialize, Serialize};
use std::fmt;

use crate::weather::WeatherProfile;

/// Tour categories in the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TourCategory {
    #[serde(alias = "family")]
    Family,
    #[serde(alias = "couple")]
    Couple,
    #[serde(alias = "adventure")]
    Adventure,
    #[serde(alias = "culture")]
    Culture,
    /// Anything the catalog does not recognise; priced with fallback fares
    #[serde(other)]
    Other,
}

impl TourCategory {
    /// Case-insensitive parse; unrecognised names map to `Other`
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "family" => TourCategory::Family,
            "couple" => TourCategory::Couple,
            "adventure" => TourCategory::Adventure,
            "culture" => TourCategory::Culture,
            _ => TourCategory::Other,
        }
    }
}

impl fmt::Display for TourCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A catalog entry describing a destination package.
///
/// Always built through [`Tour::from_draft`], so `plan.len() == duration`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: String,
    pub destination: String,
    pub country: String,
    pub category: TourCategory,
    pub description: String,
    pub duration: u32,
    pub image_url: String,
    pub plan: Vec<String>,
    pub weather_profile: WeatherProfile,
    /// Explicit per-traveler price that bypasses the pricing table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_traveler: Option<f64>,
}

/// Loosely-typed tour as it arrives from storage or an admin form
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TourDraft {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<serde_json::Value>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub plan: Option<Vec<String>>,
    #[serde(default)]
    pub weather_profile: Option<WeatherProfile>,
    #[serde(default)]
    pub price_per_traveler: Option<serde_json::Value>,
}

impl From<&Tour> for TourDraft {
    fn from(tour: &Tour) -> Self {
        Self {
            id: Some(tour.id.clone()),
            destination: Some(tour.destination.clone()),
            country: Some(tour.country.clone()),
            category: Some(tour.category.to_string()),
            description: Some(tour.description.clone()),
            duration: Some(serde_json::json!(tour.duration)),
            image_url: Some(tour.image_url.clone()),
            plan: Some(tour.plan.clone()),
            weather_profile: Some(tour.weather_profile.clone()),
            price_per_traveler: tour.price_per_traveler.map(|p| serde_json::json!(p)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),
}

impl Tour {
    /// Validate a draft into a tour.
    ///
    /// Identity fields and the duration must be present. Everything else has
    /// a documented default: unknown categories become `Other`, a missing
    /// weather profile becomes the default profile, a non-positive or
    /// non-numeric price override is dropped, and the plan is truncated or
    /// padded with filler days to match the duration.
    pub fn from_draft(draft: TourDraft) -> Result<Tour, ValidationError> {
        let id = required(draft.id, "id")?;
        let destination = required(draft.destination, "destination")?;
        let country = required(draft.country, "country")?;
        let duration = parse_duration(draft.duration.as_ref())?;

        let plan = normalize_plan(draft.plan.unwrap_or_default(), duration, &destination);

        Ok(Tour {
            id,
            category: draft
                .category
                .as_deref()
                .map(TourCategory::parse)
                .unwrap_or(TourCategory::Other),
            description: draft.description.unwrap_or_default().trim().to_string(),
            image_url: draft.image_url.unwrap_or_default().trim().to_string(),
            weather_profile: draft.weather_profile.unwrap_or_default(),
            price_per_traveler: draft.price_per_traveler.as_ref().and_then(positive_number),
            plan,
            duration,
            destination,
            country,
        })
    }

    /// "Kyoto, Japan"
    pub fn location(&self) -> String {
        format!("{}, {}", self.destination, self.country)
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ValidationError::MissingField(field))
}

fn parse_duration(raw: Option<&serde_json::Value>) -> Result<u32, ValidationError> {
    let raw = raw.ok_or(ValidationError::MissingField("duration"))?;
    let days = match raw {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match days {
        Some(d) if d.is_finite() && d >= 1.0 && d <= u32::MAX as f64 => Ok(d.floor() as u32),
        _ => Err(ValidationError::InvalidDuration(raw.to_string())),
    }
}

fn positive_number(raw: &serde_json::Value) -> Option<f64> {
    let value = match raw {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Make the plan exactly `duration` entries long.
pub fn normalize_plan(mut plan: Vec<String>, duration: u32, destination: &str) -> Vec<String> {
    let duration = duration as usize;
    plan.truncate(duration);
    let start = plan.len();
    plan.extend((start..duration).map(|day| filler_day(day + 1, destination)));
    plan
}

fn filler_day(day: usize, destination: &str) -> String {
    format!("Day {}: Free day to explore {}", day, destination)
}

use roamly_shared::stable_hash;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::tour::{Tour, TourCategory};

/// Base fare and per-day rate for one category (whole rupees)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryFare {
    pub base_fare: u32,
    pub per_day_rate: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PricingConfig {
    /// Every price is a multiple of this, and never below it
    pub price_step: u32,

    /// Durations up to this many days carry no duration premium
    pub included_days: u32,

    /// Upper bound (exclusive) of the destination seasonality premium
    pub seasonality_modulus: u32,

    /// Fares for categories missing from `fares`
    pub fallback: CategoryFare,

    pub fares: HashMap<TourCategory, CategoryFare>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            price_step: 500,
            included_days: 3,
            seasonality_modulus: 28_000,
            fallback: CategoryFare { base_fare: 90_000, per_day_rate: 10_000 },
            fares: {
                let mut m = HashMap::new();
                m.insert(TourCategory::Family, CategoryFare { base_fare: 95_000, per_day_rate: 11_000 });
                m.insert(TourCategory::Couple, CategoryFare { base_fare: 105_000, per_day_rate: 12_000 });
                m.insert(TourCategory::Adventure, CategoryFare { base_fare: 112_000, per_day_rate: 13_000 });
                m.insert(TourCategory::Culture, CategoryFare { base_fare: 88_000, per_day_rate: 9_500 });
                m
            },
        }
    }
}

/// How a per-traveler price was assembled
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub base_fare: u32,
    pub duration_premium: u32,
    pub seasonality_premium: u32,
    /// Set when an explicit tour price bypassed the table
    pub overridden: bool,
    pub total: u32,
}

/// Deterministic per-traveler pricing.
///
/// The price depends only on category, duration, destination, country and
/// the optional override; there is no hidden state and no clock.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    /// Per-traveler price for a tour, in whole rupees
    pub fn price_for(&self, tour: &Tour) -> u32 {
        self.breakdown(tour).total
    }

    pub fn breakdown(&self, tour: &Tour) -> PriceBreakdown {
        self.quote(
            tour.category,
            tour.duration,
            &tour.destination,
            &tour.country,
            tour.price_per_traveler,
        )
    }

    /// Price from the raw pricing inputs.
    pub fn quote(
        &self,
        category: TourCategory,
        duration: u32,
        destination: &str,
        country: &str,
        price_override: Option<f64>,
    ) -> PriceBreakdown {
        if let Some(explicit) = price_override.filter(|p| p.is_finite() && *p > 0.0) {
            let total = self.round_override(explicit);
            return PriceBreakdown {
                base_fare: 0,
                duration_premium: 0,
                seasonality_premium: 0,
                overridden: true,
                total,
            };
        }

        let fare = self.fare_for(category);
        let effective_days = duration.max(self.config.included_days);
        let extra_days = effective_days - self.config.included_days;
        let duration_premium = extra_days.saturating_mul(fare.per_day_rate);
        let seasonality_premium = self.seasonality_premium(destination, country);

        let sum = fare.base_fare as u64 + duration_premium as u64 + seasonality_premium as u64;

        PriceBreakdown {
            base_fare: fare.base_fare,
            duration_premium,
            seasonality_premium,
            overridden: false,
            total: self.round_to_step(sum),
        }
    }

    pub fn fare_for(&self, category: TourCategory) -> CategoryFare {
        self.config.fares.get(&category).copied().unwrap_or(self.config.fallback)
    }

    /// Destination-specific premium in `0..seasonality_modulus`
    pub fn seasonality_premium(&self, destination: &str, country: &str) -> u32 {
        let modulus = self.config.seasonality_modulus.max(1);
        stable_hash(&format!("{}-{}", destination, country)) % modulus
    }

    /// Round half-up to the nearest step, never below one step.
    pub fn round_to_step(&self, value: u64) -> u32 {
        let step = self.config.price_step.max(1) as u64;
        let rounded = (value + step / 2) / step * step;
        rounded.clamp(step, u32::MAX as u64) as u32
    }

    fn round_override(&self, value: f64) -> u32 {
        let step = self.config.price_step.max(1) as f64;
        let rounded = (value / step).round() * step;
        if rounded >= u32::MAX as f64 {
            return u32::MAX - (u32::MAX % step as u32);
        }
        (rounded as u32).max(step as u32)
    }
}

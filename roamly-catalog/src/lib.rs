pub mod tour;
pub mod pricing;
pub mod weather;

pub use tour::{Tour, TourCategory, TourDraft, ValidationError};
pub use pricing::{CategoryFare, PriceBreakdown, PricingConfig, PricingEngine};
pub use weather::{ForecastDay, Reading, WeatherCondition, WeatherGenerator, WeatherProfile, WeatherReport};

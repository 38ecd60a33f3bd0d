//! Synthetic outreach feed — generates per-segment-per-day funnel records
//! over a trailing window with seasonal and weekday volume shaping.

pub mod generator;
pub mod seasonality;

pub use generator::{FeedGenerator, GeneratorConfig};
pub use seasonality::seasonality_for_month;

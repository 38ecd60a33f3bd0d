//! Shared domain model for the outreach analytics dashboard — records,
//! categorical dimensions, metric selectors, configuration, and errors.

pub mod config;
pub mod error;
pub mod metrics;
pub mod types;

pub use error::{OutreachError, OutreachResult};
pub use metrics::{Metric, PlannedMetric, SegmentField};
pub use types::OutreachRecord;

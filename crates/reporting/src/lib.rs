//! Aggregation engine — pure projections over the immutable record feed:
//! by-day rollups, grand totals, segment breakdowns, and KPI scorecards.

pub mod breakdown;
pub mod scorecard;
pub mod timeseries;

pub use breakdown::{segment_breakdown, BreakdownEntry, SegmentBreakdown};
pub use scorecard::{scorecards, Scorecard};
pub use timeseries::{
    chart_ceiling, daily_rollups, grand_totals, metric_series, DailyRollup, GrandTotals,
    SeriesPoint,
};

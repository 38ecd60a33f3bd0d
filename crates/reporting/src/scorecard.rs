//! KPI scorecards — window totals with actual-vs-planned trend.

use crate::timeseries::GrandTotals;
use outreach_core::metrics::Metric;
use serde::{Deserialize, Serialize};

/// One KPI card. `trend` is the relative deviation from plan,
/// `(actual - planned) / planned`, and 0 when nothing was planned. Every
/// card computes it the same way, bounces included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scorecard {
    pub metric: Metric,
    pub label: String,
    pub actual: u64,
    pub planned: u64,
    pub trend: f64,
}

/// Build the five KPI cards from the window grand totals.
pub fn scorecards(totals: &GrandTotals) -> Vec<Scorecard> {
    Metric::ALL
        .iter()
        .map(|&metric| {
            let actual = totals.actual(metric);
            let planned = totals.planned(metric.planned());
            let trend = if planned == 0 {
                0.0
            } else {
                (actual as f64 - planned as f64) / planned as f64
            };
            Scorecard {
                metric,
                label: metric.label().to_string(),
                actual,
                planned,
                trend,
            }
        })
        .collect()
}

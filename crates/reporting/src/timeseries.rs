//! By-day aggregation — group-by-date rollups, window grand totals, and the
//! actual-vs-planned comparison series.

use chrono::NaiveDate;
use outreach_core::metrics::{Metric, PlannedMetric};
use outreach_core::types::OutreachRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sums over every record sharing one date. Rebuilt from the full record
/// list on every aggregation pass, never patched incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRollup {
    pub date: NaiveDate,
    pub display_date: String,
    pub emails_sent: u64,
    pub replies: u64,
    pub positive_replies: u64,
    pub meetings_booked: u64,
    pub bounces: u64,
    pub estimated_pipeline_value: u64,
    pub planned_sent: u64,
    pub planned_replies: u64,
    pub planned_mqls: u64,
    pub planned_sqls: u64,
    pub planned_bounces: u64,
}

impl DailyRollup {
    fn empty(record: &OutreachRecord) -> Self {
        Self {
            date: record.date,
            display_date: record.display_date.clone(),
            emails_sent: 0,
            replies: 0,
            positive_replies: 0,
            meetings_booked: 0,
            bounces: 0,
            estimated_pipeline_value: 0,
            planned_sent: 0,
            planned_replies: 0,
            planned_mqls: 0,
            planned_sqls: 0,
            planned_bounces: 0,
        }
    }

    fn absorb(&mut self, r: &OutreachRecord) {
        self.emails_sent += r.emails_sent;
        self.replies += r.replies;
        self.positive_replies += r.positive_replies;
        self.meetings_booked += r.meetings_booked;
        self.bounces += r.bounces;
        self.estimated_pipeline_value += r.estimated_pipeline_value;
        self.planned_sent += r.planned_sent;
        self.planned_replies += r.planned_replies;
        self.planned_mqls += r.planned_mqls;
        self.planned_sqls += r.planned_sqls;
        self.planned_bounces += r.planned_bounces;
    }

    pub fn actual(&self, metric: Metric) -> u64 {
        match metric {
            Metric::EmailsSent => self.emails_sent,
            Metric::Replies => self.replies,
            Metric::PositiveReplies => self.positive_replies,
            Metric::MeetingsBooked => self.meetings_booked,
            Metric::Bounces => self.bounces,
        }
    }

    pub fn planned(&self, metric: PlannedMetric) -> u64 {
        match metric {
            PlannedMetric::PlannedSent => self.planned_sent,
            PlannedMetric::PlannedReplies => self.planned_replies,
            PlannedMetric::PlannedMqls => self.planned_mqls,
            PlannedMetric::PlannedSqls => self.planned_sqls,
            PlannedMetric::PlannedBounces => self.planned_bounces,
        }
    }
}

/// Group records by exact date and sum each metric field. Two records with
/// the same date always land in the same rollup regardless of their segment
/// values. Output is re-sorted ascending by date; generation order is not
/// trusted because callers may filter or reorder the record list.
pub fn daily_rollups(records: &[OutreachRecord]) -> Vec<DailyRollup> {
    let mut by_date: HashMap<NaiveDate, DailyRollup> = HashMap::new();

    for r in records {
        by_date
            .entry(r.date)
            .or_insert_with(|| DailyRollup::empty(r))
            .absorb(r);
    }

    let mut rollups: Vec<DailyRollup> = by_date.into_values().collect();
    rollups.sort_by_key(|r| r.date);
    rollups
}

/// Window-wide sums, computed independently of any grouping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrandTotals {
    pub emails_sent: u64,
    pub replies: u64,
    pub positive_replies: u64,
    pub meetings_booked: u64,
    pub bounces: u64,
    pub estimated_pipeline_value: u64,
    pub planned_sent: u64,
    pub planned_replies: u64,
    pub planned_mqls: u64,
    pub planned_sqls: u64,
    pub planned_bounces: u64,
}

impl GrandTotals {
    pub fn actual(&self, metric: Metric) -> u64 {
        match metric {
            Metric::EmailsSent => self.emails_sent,
            Metric::Replies => self.replies,
            Metric::PositiveReplies => self.positive_replies,
            Metric::MeetingsBooked => self.meetings_booked,
            Metric::Bounces => self.bounces,
        }
    }

    pub fn planned(&self, metric: PlannedMetric) -> u64 {
        match metric {
            PlannedMetric::PlannedSent => self.planned_sent,
            PlannedMetric::PlannedReplies => self.planned_replies,
            PlannedMetric::PlannedMqls => self.planned_mqls,
            PlannedMetric::PlannedSqls => self.planned_sqls,
            PlannedMetric::PlannedBounces => self.planned_bounces,
        }
    }
}

pub fn grand_totals(records: &[OutreachRecord]) -> GrandTotals {
    let mut totals = GrandTotals::default();
    for r in records {
        totals.emails_sent += r.emails_sent;
        totals.replies += r.replies;
        totals.positive_replies += r.positive_replies;
        totals.meetings_booked += r.meetings_booked;
        totals.bounces += r.bounces;
        totals.estimated_pipeline_value += r.estimated_pipeline_value;
        totals.planned_sent += r.planned_sent;
        totals.planned_replies += r.planned_replies;
        totals.planned_mqls += r.planned_mqls;
        totals.planned_sqls += r.planned_sqls;
        totals.planned_bounces += r.planned_bounces;
    }
    totals
}

/// One plotted point of the actual-vs-planned comparison chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub display_date: String,
    pub actual: u64,
    pub planned: u64,
}

/// Project the day series onto one metric and its planned counterpart.
pub fn metric_series(rollups: &[DailyRollup], metric: Metric) -> Vec<SeriesPoint> {
    let planned = metric.planned();
    rollups
        .iter()
        .map(|day| SeriesPoint {
            date: day.date,
            display_date: day.display_date.clone(),
            actual: day.actual(metric),
            planned: day.planned(planned),
        })
        .collect()
}

/// Chart value ceiling: the larger of both series across the window, with
/// 10% headroom.
pub fn chart_ceiling(series: &[SeriesPoint]) -> f64 {
    let max = series
        .iter()
        .map(|p| p.actual.max(p.planned))
        .max()
        .unwrap_or(0);
    max as f64 * 1.1
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use outreach_synth::{FeedGenerator, GeneratorConfig};
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn generated_feed() -> Vec<OutreachRecord> {
        FeedGenerator::new(GeneratorConfig {
            anchor: NaiveDate::from_ymd_opt(2025, 10, 15).unwrap(),
            window_days: 60,
            seed: Some(9),
        })
        .generate()
    }

    #[test]
    fn test_rollup_sums_match_grand_totals() {
        let records = generated_feed();
        let rollups = daily_rollups(&records);
        let totals = grand_totals(&records);

        let fold = |f: fn(&DailyRollup) -> u64| rollups.iter().map(f).sum::<u64>();
        assert_eq!(fold(|d| d.emails_sent), totals.emails_sent);
        assert_eq!(fold(|d| d.replies), totals.replies);
        assert_eq!(fold(|d| d.positive_replies), totals.positive_replies);
        assert_eq!(fold(|d| d.meetings_booked), totals.meetings_booked);
        assert_eq!(fold(|d| d.bounces), totals.bounces);
        assert_eq!(
            fold(|d| d.estimated_pipeline_value),
            totals.estimated_pipeline_value
        );
        assert_eq!(fold(|d| d.planned_sent), totals.planned_sent);
        assert_eq!(fold(|d| d.planned_replies), totals.planned_replies);
        assert_eq!(fold(|d| d.planned_mqls), totals.planned_mqls);
        assert_eq!(fold(|d| d.planned_sqls), totals.planned_sqls);
        assert_eq!(fold(|d| d.planned_bounces), totals.planned_bounces);
    }

    #[test]
    fn test_rollups_sorted_ascending_without_duplicates() {
        let records = generated_feed();
        let rollups = daily_rollups(&records);

        assert_eq!(rollups.len(), 60);
        for pair in rollups.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn test_rollups_idempotent_under_input_shuffle() {
        let records = generated_feed();
        let baseline = daily_rollups(&records);

        let mut shuffled = records;
        shuffled.shuffle(&mut rand::rngs::StdRng::seed_from_u64(17));
        assert_eq!(daily_rollups(&shuffled), baseline);
    }

    #[test]
    fn test_empty_feed_yields_empty_series_and_zero_totals() {
        let rollups = daily_rollups(&[]);
        assert!(rollups.is_empty());
        assert_eq!(grand_totals(&[]), GrandTotals::default());
        assert_eq!(chart_ceiling(&metric_series(&rollups, Metric::Replies)), 0.0);
    }

    #[test]
    fn test_metric_series_uses_paired_planned_column() {
        let records = generated_feed();
        let rollups = daily_rollups(&records);
        let series = metric_series(&rollups, Metric::MeetingsBooked);

        assert_eq!(series.len(), rollups.len());
        for (point, day) in series.iter().zip(&rollups) {
            assert_eq!(point.actual, day.meetings_booked);
            assert_eq!(point.planned, day.planned_sqls);
            assert_eq!(point.display_date, day.display_date);
        }
    }

    #[test]
    fn test_chart_ceiling_adds_headroom_over_both_series() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let series = vec![
            SeriesPoint {
                date,
                display_date: "Mar 3".into(),
                actual: 120,
                planned: 250,
            },
            SeriesPoint {
                date: date.succ_opt().unwrap(),
                display_date: "Mar 4".into(),
                actual: 180,
                planned: 140,
            },
        ];
        assert!((chart_ceiling(&series) - 275.0).abs() < 1e-9);
    }
}

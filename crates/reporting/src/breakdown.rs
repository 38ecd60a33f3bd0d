//! Segment breakdowns — one categorical field, one metric, shares of total.

use outreach_core::metrics::{Metric, SegmentField};
use outreach_core::types::OutreachRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub label: String,
    pub value: u64,
}

/// Summed metric per category value of one field, sorted descending, plus
/// the grand total of the metric over all records. Shares are derived on
/// read, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentBreakdown {
    pub field: SegmentField,
    pub metric: Metric,
    pub entries: Vec<BreakdownEntry>,
    pub total: u64,
}

impl SegmentBreakdown {
    /// Share of the total, in percent to one decimal place. 0 when the
    /// total is 0.
    pub fn share(&self, value: u64) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (value as f64 / self.total as f64 * 1000.0).round() / 10.0
    }
}

/// Fold the record list into per-category sums of one metric. The total is
/// accumulated over all records, not per matching category: the domain is
/// closed, so both folds cover the same rows. Ties keep first-seen category
/// order (the sort is stable).
pub fn segment_breakdown(
    records: &[OutreachRecord],
    field: SegmentField,
    metric: Metric,
) -> SegmentBreakdown {
    let mut entries: Vec<BreakdownEntry> = Vec::new();
    let mut total = 0u64;

    for r in records {
        let value = metric.of(r);
        total += value;

        let label = field.value_of(r);
        match entries.iter_mut().find(|e| e.label == label) {
            Some(entry) => entry.value += value,
            None => entries.push(BreakdownEntry {
                label: label.to_string(),
                value,
            }),
        }
    }

    entries.sort_by(|a, b| b.value.cmp(&a.value));

    SegmentBreakdown {
        field,
        metric,
        entries,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use outreach_core::types::{
        Campaign, InboxProvider, Persona, Region, RevenueRange, TtlBucket,
    };

    fn record(region: Region, replies: u64) -> OutreachRecord {
        let date = NaiveDate::from_ymd_opt(2025, 5, 12).unwrap();
        OutreachRecord {
            date,
            display_date: OutreachRecord::display_label(date),
            region,
            persona: Persona::Founder,
            inbox_provider: InboxProvider::Gmail,
            campaign: Campaign::EnterpriseAbm,
            ttl_bucket: TtlBucket::UnderOneHour,
            revenue_range: RevenueRange::UnderOneMillion,
            emails_sent: replies * 40,
            replies,
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

    #[test]
    fn test_entries_sum_to_total_and_sort_descending() {
        let records = vec![
            record(Region::Emea, 4),
            record(Region::NorthAmerica, 10),
            record(Region::Emea, 3),
            record(Region::Apac, 2),
        ];
        let breakdown = segment_breakdown(&records, SegmentField::Region, Metric::Replies);

        assert_eq!(breakdown.total, 19);
        assert_eq!(
            breakdown.entries.iter().map(|e| e.value).sum::<u64>(),
            breakdown.total
        );
        assert_eq!(breakdown.entries[0].label, "North America");
        assert_eq!(breakdown.entries[0].value, 10);
        assert_eq!(breakdown.entries[1].label, "EMEA");
        assert_eq!(breakdown.entries[2].label, "APAC");
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let records = vec![
            record(Region::Apac, 5),
            record(Region::NorthAmerica, 5),
            record(Region::Emea, 5),
        ];
        let breakdown = segment_breakdown(&records, SegmentField::Region, Metric::Replies);

        let labels: Vec<_> = breakdown.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["APAC", "North America", "EMEA"]);
    }

    #[test]
    fn test_zero_total_share_is_zero() {
        // Categories present, metric entirely zero.
        let records = vec![record(Region::Apac, 0), record(Region::Emea, 0)];
        let breakdown = segment_breakdown(&records, SegmentField::Region, Metric::Replies);

        assert_eq!(breakdown.total, 0);
        assert_eq!(breakdown.entries.len(), 2);
        for entry in &breakdown.entries {
            assert_eq!(breakdown.share(entry.value), 0.0);
        }
    }

    #[test]
    fn test_share_rounds_to_one_decimal() {
        let records = vec![
            record(Region::NorthAmerica, 1),
            record(Region::Emea, 2),
        ];
        let breakdown = segment_breakdown(&records, SegmentField::Region, Metric::Replies);

        // 1/3 and 2/3 of the total
        assert_eq!(breakdown.share(1), 33.3);
        assert_eq!(breakdown.share(2), 66.7);
    }

    #[test]
    fn test_empty_feed_yields_empty_breakdown() {
        let breakdown = segment_breakdown(&[], SegmentField::Campaign, Metric::Bounces);
        assert!(breakdown.entries.is_empty());
        assert_eq!(breakdown.total, 0);
        assert_eq!(breakdown.share(0), 0.0);
    }
}

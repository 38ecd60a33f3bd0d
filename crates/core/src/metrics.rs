//! Metric and dimension selectors. The dashboard's "active metric" and the
//! breakdown's group-by field arrive as parameters, never as ambient state,
//! and record access goes through these enums rather than field names chosen
//! at runtime.

use crate::error::OutreachError;
use crate::types::OutreachRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five selectable actual metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    EmailsSent,
    Replies,
    PositiveReplies,
    MeetingsBooked,
    Bounces,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::EmailsSent,
        Metric::Replies,
        Metric::PositiveReplies,
        Metric::MeetingsBooked,
        Metric::Bounces,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::EmailsSent => "Emails Sent",
            Metric::Replies => "Replies",
            Metric::PositiveReplies => "Positive Replies",
            Metric::MeetingsBooked => "Meetings Booked",
            Metric::Bounces => "Bounces",
        }
    }

    /// The planned counterpart plotted against this metric. The pairing is
    /// fixed: it selects the comparison series and the chart ceiling.
    pub fn planned(&self) -> PlannedMetric {
        match self {
            Metric::EmailsSent => PlannedMetric::PlannedSent,
            Metric::Replies => PlannedMetric::PlannedReplies,
            Metric::PositiveReplies => PlannedMetric::PlannedMqls,
            Metric::MeetingsBooked => PlannedMetric::PlannedSqls,
            Metric::Bounces => PlannedMetric::PlannedBounces,
        }
    }

    pub fn of(&self, record: &OutreachRecord) -> u64 {
        match self {
            Metric::EmailsSent => record.emails_sent,
            Metric::Replies => record.replies,
            Metric::PositiveReplies => record.positive_replies,
            Metric::MeetingsBooked => record.meetings_booked,
            Metric::Bounces => record.bounces,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Metric::EmailsSent => "emails_sent",
            Metric::Replies => "replies",
            Metric::PositiveReplies => "positive_replies",
            Metric::MeetingsBooked => "meetings_booked",
            Metric::Bounces => "bounces",
        };
        f.write_str(name)
    }
}

impl FromStr for Metric {
    type Err = OutreachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "emails_sent" => Ok(Metric::EmailsSent),
            "replies" => Ok(Metric::Replies),
            "positive_replies" => Ok(Metric::PositiveReplies),
            "meetings_booked" => Ok(Metric::MeetingsBooked),
            "bounces" => Ok(Metric::Bounces),
            other => Err(OutreachError::UnknownMetric(other.to_string())),
        }
    }
}

/// Planned-funnel counterpart of a [`Metric`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlannedMetric {
    PlannedSent,
    PlannedReplies,
    PlannedMqls,
    PlannedSqls,
    PlannedBounces,
}

impl PlannedMetric {
    pub fn label(&self) -> &'static str {
        match self {
            PlannedMetric::PlannedSent => "Planned Sent",
            PlannedMetric::PlannedReplies => "Planned Replies",
            PlannedMetric::PlannedMqls => "Planned MQLs",
            PlannedMetric::PlannedSqls => "Planned SQLs",
            PlannedMetric::PlannedBounces => "Planned Bounces",
        }
    }

    pub fn of(&self, record: &OutreachRecord) -> u64 {
        match self {
            PlannedMetric::PlannedSent => record.planned_sent,
            PlannedMetric::PlannedReplies => record.planned_replies,
            PlannedMetric::PlannedMqls => record.planned_mqls,
            PlannedMetric::PlannedSqls => record.planned_sqls,
            PlannedMetric::PlannedBounces => record.planned_bounces,
        }
    }
}

/// Categorical field a segment breakdown groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentField {
    Region,
    Persona,
    InboxProvider,
    Campaign,
    TtlBucket,
    RevenueRange,
}

impl SegmentField {
    pub const ALL: [SegmentField; 6] = [
        SegmentField::Region,
        SegmentField::Persona,
        SegmentField::InboxProvider,
        SegmentField::Campaign,
        SegmentField::TtlBucket,
        SegmentField::RevenueRange,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SegmentField::Region => "Region",
            SegmentField::Persona => "Persona",
            SegmentField::InboxProvider => "Inbox Provider",
            SegmentField::Campaign => "Campaign",
            SegmentField::TtlBucket => "Response Time",
            SegmentField::RevenueRange => "Revenue Range",
        }
    }

    /// The record's value for this field, as the breakdown's category label.
    pub fn value_of(&self, record: &OutreachRecord) -> &'static str {
        match self {
            SegmentField::Region => record.region.label(),
            SegmentField::Persona => record.persona.label(),
            SegmentField::InboxProvider => record.inbox_provider.label(),
            SegmentField::Campaign => record.campaign.label(),
            SegmentField::TtlBucket => record.ttl_bucket.label(),
            SegmentField::RevenueRange => record.revenue_range.label(),
        }
    }
}

impl fmt::Display for SegmentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SegmentField::Region => "region",
            SegmentField::Persona => "persona",
            SegmentField::InboxProvider => "inbox_provider",
            SegmentField::Campaign => "campaign",
            SegmentField::TtlBucket => "ttl_bucket",
            SegmentField::RevenueRange => "revenue_range",
        };
        f.write_str(name)
    }
}

impl FromStr for SegmentField {
    type Err = OutreachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "region" => Ok(SegmentField::Region),
            "persona" => Ok(SegmentField::Persona),
            "inbox_provider" => Ok(SegmentField::InboxProvider),
            "campaign" => Ok(SegmentField::Campaign),
            "ttl_bucket" => Ok(SegmentField::TtlBucket),
            "revenue_range" => Ok(SegmentField::RevenueRange),
            other => Err(OutreachError::UnknownSegmentField(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planned_pairing_is_fixed() {
        assert_eq!(Metric::EmailsSent.planned(), PlannedMetric::PlannedSent);
        assert_eq!(Metric::Replies.planned(), PlannedMetric::PlannedReplies);
        assert_eq!(Metric::PositiveReplies.planned(), PlannedMetric::PlannedMqls);
        assert_eq!(Metric::MeetingsBooked.planned(), PlannedMetric::PlannedSqls);
        assert_eq!(Metric::Bounces.planned(), PlannedMetric::PlannedBounces);
    }

    #[test]
    fn test_metric_from_str_roundtrip() {
        for metric in Metric::ALL {
            let parsed: Metric = metric.to_string().parse().unwrap();
            assert_eq!(parsed, metric);
        }
        assert!("open_rate".parse::<Metric>().is_err());
    }

    #[test]
    fn test_segment_field_from_str_roundtrip() {
        for field in SegmentField::ALL {
            let parsed: SegmentField = field.to_string().parse().unwrap();
            assert_eq!(parsed, field);
        }
        assert!("channel".parse::<SegmentField>().is_err());
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One synthetic outreach record: a single segment combination on a single
/// day. The flat record list is the single source of truth; every aggregated
/// view is recomputed from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutreachRecord {
    pub date: NaiveDate,
    /// Axis label derived from `date`, e.g. "Jun 15".
    pub display_date: String,
    pub region: Region,
    pub persona: Persona,
    pub inbox_provider: InboxProvider,
    pub campaign: Campaign,
    pub ttl_bucket: TtlBucket,
    pub revenue_range: RevenueRange,
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

impl OutreachRecord {
    /// Chart axis label for a calendar date.
    pub fn display_label(date: NaiveDate) -> String {
        date.format("%b %-d").to_string()
    }
}

// ─── Categorical Dimensions ─────────────────────────────────────────────────
//
// Each dimension is a closed domain: the generator samples uniformly from the
// `ALL` array, and breakdowns group by the variant. `label()` is the
// human-readable form used in breakdown tables.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    NorthAmerica,
    Emea,
    Apac,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::NorthAmerica, Region::Emea, Region::Apac];

    pub fn label(&self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::Emea => "EMEA",
            Region::Apac => "APAC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    Founder,
    SalesLeader,
    MarketingOps,
}

impl Persona {
    pub const ALL: [Persona; 3] = [
        Persona::Founder,
        Persona::SalesLeader,
        Persona::MarketingOps,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Persona::Founder => "Founder",
            Persona::SalesLeader => "Sales Leader",
            Persona::MarketingOps => "Marketing Ops",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InboxProvider {
    Gmail,
    Outlook,
    Yahoo,
    Other,
}

impl InboxProvider {
    pub const ALL: [InboxProvider; 4] = [
        InboxProvider::Gmail,
        InboxProvider::Outlook,
        InboxProvider::Yahoo,
        InboxProvider::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InboxProvider::Gmail => "Gmail",
            InboxProvider::Outlook => "Outlook",
            InboxProvider::Yahoo => "Yahoo",
            InboxProvider::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Campaign {
    Q3FounderOutbound,
    EnterpriseAbm,
    MidMarketRevival,
    ProductLaunchWave,
}

impl Campaign {
    pub const ALL: [Campaign; 4] = [
        Campaign::Q3FounderOutbound,
        Campaign::EnterpriseAbm,
        Campaign::MidMarketRevival,
        Campaign::ProductLaunchWave,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Campaign::Q3FounderOutbound => "Q3 Founder Outbound",
            Campaign::EnterpriseAbm => "Enterprise ABM",
            Campaign::MidMarketRevival => "Mid-Market Revival",
            Campaign::ProductLaunchWave => "Product Launch Wave",
        }
    }
}

/// Response-time bucket: how quickly a reply followed the send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TtlBucket {
    UnderOneHour,
    OneToFourHours,
    FourToTwentyFourHours,
    OneToThreeDays,
    OverThreeDays,
}

impl TtlBucket {
    pub const ALL: [TtlBucket; 5] = [
        TtlBucket::UnderOneHour,
        TtlBucket::OneToFourHours,
        TtlBucket::FourToTwentyFourHours,
        TtlBucket::OneToThreeDays,
        TtlBucket::OverThreeDays,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TtlBucket::UnderOneHour => "< 1h",
            TtlBucket::OneToFourHours => "1-4h",
            TtlBucket::FourToTwentyFourHours => "4-24h",
            TtlBucket::OneToThreeDays => "1-3d",
            TtlBucket::OverThreeDays => "> 3d",
        }
    }
}

/// Annual-revenue bracket of the prospect's company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueRange {
    UnderOneMillion,
    OneToTenMillion,
    TenToFiftyMillion,
    OverFiftyMillion,
}

impl RevenueRange {
    pub const ALL: [RevenueRange; 4] = [
        RevenueRange::UnderOneMillion,
        RevenueRange::OneToTenMillion,
        RevenueRange::TenToFiftyMillion,
        RevenueRange::OverFiftyMillion,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RevenueRange::UnderOneMillion => "< $1M",
            RevenueRange::OneToTenMillion => "$1M-$10M",
            RevenueRange::TenToFiftyMillion => "$10M-$50M",
            RevenueRange::OverFiftyMillion => "$50M+",
        }
    }

    /// Pipeline value credited per booked meeting in this bracket.
    pub fn value_per_meeting(&self) -> u64 {
        match self {
            RevenueRange::OverFiftyMillion => 50_000,
            _ => 15_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label_format() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        assert_eq!(OutreachRecord::display_label(date), "Jun 5");
    }

    #[test]
    fn test_top_bracket_meeting_value() {
        assert_eq!(RevenueRange::OverFiftyMillion.value_per_meeting(), 50_000);
        for bracket in &RevenueRange::ALL[..3] {
            assert_eq!(bracket.value_per_meeting(), 15_000);
        }
    }

    #[test]
    fn test_dimension_serde_names() {
        let json = serde_json::to_string(&InboxProvider::Gmail).unwrap();
        assert_eq!(json, "\"gmail\"");
        let parsed: Region = serde_json::from_str("\"north_america\"").unwrap();
        assert_eq!(parsed, Region::NorthAmerica);
    }
}

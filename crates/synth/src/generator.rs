//! Feed generator — derives the daily funnel top-down with bounded noise.

use crate::seasonality::seasonality_for_month;
use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};
use outreach_core::types::{
    Campaign, InboxProvider, OutreachRecord, Persona, Region, RevenueRange, TtlBucket,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Baseline emails per segment row per day, before seasonality and noise.
const BASE_DAILY_VOLUME: f64 = 250.0;

/// Segment rows generated per weekday. Weekend volume drops by emitting
/// fewer rows, not by shrinking per-row volume.
const WEEKDAY_SEGMENT_ROWS: usize = 12;
const WEEKEND_SEGMENT_ROWS: usize = 2;

// Actual-funnel rates. Noisy rates are sampled per row; the rest are fixed.
const VOLUME_NOISE_MIN: f64 = 0.85;
const VOLUME_NOISE_MAX: f64 = 1.15;
const REPLY_RATE_MIN: f64 = 0.018;
const REPLY_RATE_MAX: f64 = 0.025;
const POSITIVE_REPLY_RATE: f64 = 0.35;
const MEETING_RATE: f64 = 0.60;
const BASE_BOUNCE_RATE: f64 = 0.012;
const HIGH_BOUNCE_RATE: f64 = 0.03;

/// Provider whose rows bounce at [`HIGH_BOUNCE_RATE`].
const HIGH_BOUNCE_PROVIDER: InboxProvider = InboxProvider::Outlook;

// Planned-funnel rates: the noisy actual rates pinned to their nominal value.
const PLANNED_REPLY_RATE: f64 = 0.02;
const PLANNED_BOUNCE_RATE: f64 = 0.015;

/// Generator settings. Domains and rates are compile-time constants; the
/// anchor, window, and seed are injectable so runs can be reproduced.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Last generated day; the window trails backwards from here.
    pub anchor: NaiveDate,
    /// Total generated days, anchor included.
    pub window_days: u32,
    /// Random seed for reproducibility (None = OS entropy).
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            anchor: Utc::now().date_naive(),
            window_days: 121,
            seed: None,
        }
    }
}

/// Synthetic feed generator. Generic over the random source so tests can pin
/// entropy; production use goes through [`FeedGenerator::new`] with `StdRng`.
pub struct FeedGenerator<R: Rng = StdRng> {
    config: GeneratorConfig,
    rng: R,
}

impl FeedGenerator<StdRng> {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }
}

impl<R: Rng> FeedGenerator<R> {
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Generate the full trailing window, ordered ascending by day. Intra-day
    /// row order is unspecified; callers must not depend on it.
    pub fn generate(&mut self) -> Vec<OutreachRecord> {
        let mut records = Vec::new();

        for offset in (0..self.config.window_days).rev() {
            let date = self.config.anchor - Duration::days(offset as i64);
            let seasonality = seasonality_for_month(date.month());
            let rows = if is_weekend(date) {
                WEEKEND_SEGMENT_ROWS
            } else {
                WEEKDAY_SEGMENT_ROWS
            };

            for _ in 0..rows {
                records.push(self.build_record(date, seasonality));
            }
        }

        debug!(
            records = records.len(),
            window_days = self.config.window_days,
            anchor = %self.config.anchor,
            "Synthetic feed generated"
        );

        records
    }

    fn build_record(&mut self, date: NaiveDate, seasonality: f64) -> OutreachRecord {
        let region = sample(&mut self.rng, &Region::ALL);
        let persona = sample(&mut self.rng, &Persona::ALL);
        let inbox_provider = sample(&mut self.rng, &InboxProvider::ALL);
        let campaign = sample(&mut self.rng, &Campaign::ALL);
        let ttl_bucket = sample(&mut self.rng, &TtlBucket::ALL);
        let revenue_range = sample(&mut self.rng, &RevenueRange::ALL);

        let noise = self.rng.gen_range(VOLUME_NOISE_MIN..VOLUME_NOISE_MAX);
        let emails_sent = (BASE_DAILY_VOLUME * seasonality * noise).floor() as u64;
        let planned_sent = (BASE_DAILY_VOLUME * seasonality).floor() as u64;

        let reply_rate = self.rng.gen_range(REPLY_RATE_MIN..REPLY_RATE_MAX);
        let replies = (emails_sent as f64 * reply_rate).floor() as u64;
        let planned_replies = (planned_sent as f64 * PLANNED_REPLY_RATE).floor() as u64;

        let positive_replies = (replies as f64 * POSITIVE_REPLY_RATE).floor() as u64;
        let planned_mqls = (planned_replies as f64 * POSITIVE_REPLY_RATE).floor() as u64;

        let meetings_booked = (positive_replies as f64 * MEETING_RATE).floor() as u64;
        let planned_sqls = (planned_mqls as f64 * MEETING_RATE).floor() as u64;

        let bounce_rate = if inbox_provider == HIGH_BOUNCE_PROVIDER {
            HIGH_BOUNCE_RATE
        } else {
            BASE_BOUNCE_RATE
        };
        let bounces = (emails_sent as f64 * bounce_rate).floor() as u64;
        let planned_bounces = (planned_sent as f64 * PLANNED_BOUNCE_RATE).floor() as u64;

        let estimated_pipeline_value = meetings_booked * revenue_range.value_per_meeting();

        OutreachRecord {
            date,
            display_date: OutreachRecord::display_label(date),
            region,
            persona,
            inbox_provider,
            campaign,
            ttl_bucket,
            revenue_range,
            emails_sent,
            replies,
            positive_replies,
            meetings_booked,
            bounces,
            estimated_pipeline_value,
            planned_sent,
            planned_replies,
            planned_mqls,
            planned_sqls,
            planned_bounces,
        }
    }
}

fn sample<T: Copy>(rng: &mut impl Rng, domain: &[T]) -> T {
    domain[rng.gen_range(0..domain.len())]
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

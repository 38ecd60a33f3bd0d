//! REST handlers for the dashboard data products and operational endpoints.

use crate::state::DashboardState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use outreach_core::metrics::{Metric, PlannedMetric, SegmentField};
use outreach_core::OutreachError;
use outreach_reporting::{
    chart_ceiling, daily_rollups, grand_totals, metric_series, scorecards, segment_breakdown,
    GrandTotals, Scorecard, SeriesPoint,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::warn;
use uuid::Uuid;

/// Shared application state for REST handlers.
#[derive(Clone)]
pub struct AppState {
    pub dashboard: DashboardState,
    pub node_id: String,
    pub start_time: Instant,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// 503 returned by data endpoints while the feed snapshot has not been
/// published yet.
fn loading() -> ApiError {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorResponse {
            error: "loading".to_string(),
            message: "Feed snapshot not yet loaded".to_string(),
        }),
    )
}

fn bad_request(error: &str, err: OutreachError) -> ApiError {
    warn!(error = %err, "Request validation failed");
    metrics::counter!("api.validation_errors").increment(1);
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.to_string(),
            message: err.to_string(),
        }),
    )
}

#[derive(Deserialize)]
pub struct MetricQuery {
    pub metric: Option<String>,
}

/// Parse the `metric` query parameter, defaulting to emails sent.
fn parse_metric(raw: Option<&str>) -> Result<Metric, ApiError> {
    match raw {
        None => Ok(Metric::EmailsSent),
        Some(s) => s.parse().map_err(|e| bad_request("invalid_metric", e)),
    }
}

// ─── Data endpoints ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct OverviewResponse {
    pub snapshot_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub totals: GrandTotals,
    pub scorecards: Vec<Scorecard>,
}

/// GET /v1/overview — grand totals and the five KPI scorecards.
pub async fn overview(
    State(state): State<AppState>,
) -> Result<Json<OverviewResponse>, ApiError> {
    let snapshot = state.dashboard.snapshot().ok_or_else(loading)?;
    metrics::counter!("api.overview_requests").increment(1);

    let totals = grand_totals(&snapshot.records);
    let cards = scorecards(&totals);

    Ok(Json(OverviewResponse {
        snapshot_id: snapshot.snapshot_id,
        generated_at: snapshot.generated_at,
        totals,
        scorecards: cards,
    }))
}

#[derive(Serialize)]
pub struct TimeSeriesResponse {
    pub metric: Metric,
    pub planned_metric: PlannedMetric,
    pub points: Vec<SeriesPoint>,
    /// Chart value ceiling: max of both series with 10% headroom.
    pub ceiling: f64,
}

/// GET /v1/timeseries?metric=replies — per-day actual vs. planned series.
pub async fn timeseries(
    State(state): State<AppState>,
    Query(query): Query<MetricQuery>,
) -> Result<Json<TimeSeriesResponse>, ApiError> {
    let metric = parse_metric(query.metric.as_deref())?;
    let snapshot = state.dashboard.snapshot().ok_or_else(loading)?;
    metrics::counter!("api.timeseries_requests").increment(1);

    let rollups = daily_rollups(&snapshot.records);
    let points = metric_series(&rollups, metric);
    let ceiling = chart_ceiling(&points);

    Ok(Json(TimeSeriesResponse {
        metric,
        planned_metric: metric.planned(),
        points,
        ceiling,
    }))
}

#[derive(Serialize)]
pub struct BreakdownRow {
    pub label: String,
    pub value: u64,
    /// Percent of total, one decimal place; 0 when the total is 0.
    pub share: f64,
}

#[derive(Serialize)]
pub struct BreakdownResponse {
    pub field: SegmentField,
    pub metric: Metric,
    pub total: u64,
    pub rows: Vec<BreakdownRow>,
}

/// GET /v1/breakdown/{field}?metric=replies — per-segment sums of one
/// metric, sorted descending.
pub async fn breakdown(
    State(state): State<AppState>,
    Path(field): Path<String>,
    Query(query): Query<MetricQuery>,
) -> Result<Json<BreakdownResponse>, ApiError> {
    let field: SegmentField = field
        .parse()
        .map_err(|e| bad_request("invalid_segment_field", e))?;
    let metric = parse_metric(query.metric.as_deref())?;
    let snapshot = state.dashboard.snapshot().ok_or_else(loading)?;
    metrics::counter!("api.breakdown_requests").increment(1);

    let result = segment_breakdown(&snapshot.records, field, metric);
    let rows = result
        .entries
        .iter()
        .map(|e| BreakdownRow {
            label: e.label.clone(),
            value: e.value,
            share: result.share(e.value),
        })
        .collect();

    Ok(Json(BreakdownResponse {
        field,
        metric,
        total: result.total,
        rows,
    }))
}

// ─── Operational endpoints ──────────────────────────────────────────────────

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub node_id: String,
    pub uptime_secs: u64,
    pub feed_loaded: bool,
}

/// GET /health — Health check endpoint.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        node_id: state.node_id.clone(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        feed_loaded: state.dashboard.is_loaded(),
    })
}

/// GET /ready — Readiness probe.
/// Returns 200 only once the feed snapshot has been published.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    if state.dashboard.is_loaded() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /live — Liveness probe.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

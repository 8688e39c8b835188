use chrono::{Duration, Utc};
use serde::Serialize;

pub const MIN_DAYS: i64 = 5;
pub const MAX_DAYS: i64 = 365;

const BASE_EQUITY: f64 = 10_000.0;
const DAILY_DRIFT: f64 = 12.0;

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct EquityPoint {
    /// RFC 3339 timestamp, backdated from the current instant
    pub t: String,
    pub equity: f64,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct BacktestStats {
    pub start: f64,
    pub end: f64,
    pub return_pct: f64,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct BacktestResult {
    pub series: Vec<EquityPoint>,
    pub stats: BacktestStats,
}

pub fn clamp_days(days: i64) -> i64 {
    days.clamp(MIN_DAYS, MAX_DAYS)
}

/// Deterministic mock equity curve: linear drift plus two periodic
/// components, dated backward from now. No external data involved.
pub fn run_backtest(days: i64) -> BacktestResult {
    let days = clamp_days(days);
    let now = Utc::now();

    let mut series = Vec::with_capacity(days as usize);
    for i in 0..days {
        let drift = (i as f64 / 6.0).sin() * 50.0;
        let noise = (i as f64 / 3.0).cos() * 10.0;
        let value = BASE_EQUITY + i as f64 * DAILY_DRIFT + drift + noise;

        series.push(EquityPoint {
            t: (now - Duration::days(days - i)).to_rfc3339(),
            equity: round2(value),
        });
    }

    let start = series.first().map(|p| p.equity).unwrap_or(BASE_EQUITY);
    let end = series.last().map(|p| p.equity).unwrap_or(BASE_EQUITY);

    BacktestResult {
        series,
        stats: BacktestStats {
            start,
            end,
            return_pct: round2((end / start - 1.0) * 100.0),
        },
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

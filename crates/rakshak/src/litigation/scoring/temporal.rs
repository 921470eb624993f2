use super::super::domain::CaseRecord;
use chrono::{Duration, NaiveDate};

/// Gap below which two consecutive filings count as clustered.
pub const SHORT_INTERVAL_DAYS: i64 = 60;
/// Width of the rolling window used by the spike index.
pub const SPIKE_WINDOW_DAYS: i64 = 30;
/// Filings per window at which the spike index saturates.
pub const SPIKE_SATURATION: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalStats {
    /// Mean gap between consecutive dated filings, `None` with fewer than two.
    pub average_days: Option<f64>,
    /// Fraction of gaps strictly shorter than [`SHORT_INTERVAL_DAYS`].
    pub short_interval_ratio: f64,
}

impl IntervalStats {
    pub fn average_months(&self) -> Option<f64> {
        self.average_days.map(|days| days / 30.0)
    }
}

fn filing_dates(cases: &[CaseRecord]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = cases.iter().filter_map(|case| case.filing_date).collect();
    dates.sort_unstable();
    dates
}

/// Consecutive-gap statistics over the dated filings.
pub fn filing_intervals(cases: &[CaseRecord]) -> IntervalStats {
    let dates = filing_dates(cases);
    if dates.len() < 2 {
        return IntervalStats {
            average_days: None,
            short_interval_ratio: 0.0,
        };
    }

    let gaps: Vec<i64> = dates
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).num_days())
        .collect();
    let total: i64 = gaps.iter().sum();
    let short = gaps
        .iter()
        .filter(|gap| **gap < SHORT_INTERVAL_DAYS)
        .count();

    IntervalStats {
        average_days: Some(total as f64 / gaps.len() as f64),
        short_interval_ratio: short as f64 / gaps.len() as f64,
    }
}

/// Largest number of filings inside any `[d, d + 30 days]` window anchored on a filing.
pub fn max_filings_in_window(cases: &[CaseRecord]) -> usize {
    let dates = filing_dates(cases);
    let window = Duration::days(SPIKE_WINDOW_DAYS);

    dates
        .iter()
        .map(|&start| {
            let end = start + window;
            let first = dates.partition_point(|date| *date < start);
            let past_end = dates.partition_point(|date| *date <= end);
            past_end - first
        })
        .max()
        .unwrap_or(0)
}

/// Normalized burst intensity in `[0, 1]`; five filings in one window saturate it.
pub fn spike_index(cases: &[CaseRecord]) -> f64 {
    (max_filings_in_window(cases) as f64 / SPIKE_SATURATION).clamp(0.0, 1.0)
}

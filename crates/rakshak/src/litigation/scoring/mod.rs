//! Pure statistics over one subject's filings.
//!
//! Every function takes the subject's records ordered by filing date and has
//! no side effects. Filings without a date still count toward totals, the
//! counterparty distribution and the dismissal rate, but are left out of the
//! interval, spike and per-year figures.

mod distribution;
mod pressure;
mod temporal;

pub use distribution::{
    counterparty_distribution, negative_rate, repeat_filer_count, status_by_year,
    volume_by_year, CounterpartyShare, Perspective, YearStatusTally, YearVolume,
};
pub use pressure::{
    PressureBreakdown, PressureComponent, PressureFactor, PressureInputs, RiskTier,
    CONCENTRATION_WEIGHT, DISMISSAL_SATURATION_PCT, DISMISSAL_WEIGHT, SHORT_INTERVAL_WEIGHT,
    SPIKE_WEIGHT,
};
pub use temporal::{
    filing_intervals, max_filings_in_window, spike_index, IntervalStats, SHORT_INTERVAL_DAYS,
    SPIKE_SATURATION, SPIKE_WINDOW_DAYS,
};

use super::domain::CaseRecord;

pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Everything the report builders derive from a non-empty set of filings.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseMetrics {
    pub total_cases: usize,
    /// Full counterparty distribution, most frequent first.
    pub distribution: Vec<CounterpartyShare>,
    pub repeat_filers: usize,
    /// Negative-outcome rate in percent, unrounded.
    pub dismissal_rate: f64,
    pub intervals: IntervalStats,
    pub spike_index: f64,
}

impl CaseMetrics {
    /// Returns `None` for an empty set; callers own the zero-state.
    pub fn compute(cases: &[CaseRecord], perspective: Perspective) -> Option<Self> {
        if cases.is_empty() {
            return None;
        }

        let distribution = counterparty_distribution(cases, perspective);
        let repeat_filers = repeat_filer_count(&distribution);

        Some(Self {
            total_cases: cases.len(),
            distribution,
            repeat_filers,
            dismissal_rate: negative_rate(cases),
            intervals: filing_intervals(cases),
            spike_index: spike_index(cases),
        })
    }

    pub fn top_counterparty(&self) -> Option<&CounterpartyShare> {
        self.distribution.first()
    }

    /// Top counterparty's share as a fraction in `[0, 1]`.
    pub fn top_counterparty_share(&self) -> f64 {
        self.top_counterparty()
            .map(|top| top.count as f64 / self.total_cases as f64)
            .unwrap_or(0.0)
    }

    pub fn unique_counterparties(&self) -> usize {
        self.distribution.len()
    }

    pub fn top(&self, limit: usize) -> Vec<CounterpartyShare> {
        self.distribution.iter().take(limit).cloned().collect()
    }

    pub fn pressure_inputs(&self) -> PressureInputs {
        PressureInputs {
            top_counterparty_share: self.top_counterparty_share(),
            spike_index: self.spike_index,
            dismissal_rate: self.dismissal_rate,
            short_interval_ratio: self.intervals.short_interval_ratio,
        }
    }
}

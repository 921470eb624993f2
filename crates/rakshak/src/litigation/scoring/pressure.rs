use serde::Serialize;

pub const CONCENTRATION_WEIGHT: f64 = 40.0;
pub const SPIKE_WEIGHT: f64 = 30.0;
pub const DISMISSAL_WEIGHT: f64 = 20.0;
pub const SHORT_INTERVAL_WEIGHT: f64 = 10.0;
/// Dismissal rate (percent) at which the outcome term saturates.
pub const DISMISSAL_SATURATION_PCT: f64 = 80.0;

/// Raw signals feeding the pressure score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureInputs {
    /// Top counterparty's share of filings as a fraction in `[0, 1]`.
    pub top_counterparty_share: f64,
    pub spike_index: f64,
    /// Negative-outcome rate in percent.
    pub dismissal_rate: f64,
    pub short_interval_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PressureComponent {
    pub factor: PressureFactor,
    pub signal: f64,
    pub weight: f64,
    pub points: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PressureFactor {
    Concentration,
    FilingSpike,
    DismissalRate,
    ShortIntervals,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PressureBreakdown {
    pub score: u8,
    pub components: Vec<PressureComponent>,
}

impl PressureInputs {
    pub fn breakdown(&self) -> PressureBreakdown {
        let signals = [
            (
                PressureFactor::Concentration,
                self.top_counterparty_share,
                CONCENTRATION_WEIGHT,
            ),
            (PressureFactor::FilingSpike, self.spike_index, SPIKE_WEIGHT),
            (
                PressureFactor::DismissalRate,
                (self.dismissal_rate / DISMISSAL_SATURATION_PCT).min(1.0),
                DISMISSAL_WEIGHT,
            ),
            (
                PressureFactor::ShortIntervals,
                self.short_interval_ratio,
                SHORT_INTERVAL_WEIGHT,
            ),
        ];

        let components: Vec<PressureComponent> = signals
            .into_iter()
            .map(|(factor, signal, weight)| {
                let signal = signal.clamp(0.0, 1.0);
                PressureComponent {
                    factor,
                    signal,
                    weight,
                    points: weight * signal,
                }
            })
            .collect();

        let total: f64 = components.iter().map(|component| component.points).sum();
        PressureBreakdown {
            score: total.round().clamp(0.0, 100.0) as u8,
            components,
        }
    }

    pub fn score(&self) -> u8 {
        self.breakdown().score
    }
}

/// Coarse interpretation of a pressure score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Normal,
    Elevated,
    High,
}

impl RiskTier {
    /// Boundary values belong to the lower tier: 30 is normal, 60 is elevated.
    pub const fn from_score(score: u8) -> Self {
        if score > 60 {
            Self::High
        } else if score > 30 {
            Self::Elevated
        } else {
            Self::Normal
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal Litigation",
            Self::Elevated => "Elevated Litigation Activity",
            Self::High => "High Litigation Pressure Pattern",
        }
    }
}

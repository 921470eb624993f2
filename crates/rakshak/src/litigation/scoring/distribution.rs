use super::super::domain::{chart_bucket, is_negative_outcome, CaseRecord, ChartBucket};
use super::round_to_tenth;
use chrono::Datelike;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Which side of the filings the subject sits on. The counterparty is the other side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    Respondent,
    Petitioner,
}

impl Perspective {
    pub fn counterparty(self, case: &CaseRecord) -> &str {
        match self {
            Self::Respondent => &case.petitioner_name,
            Self::Petitioner => &case.respondent_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounterpartyShare {
    pub name: String,
    pub count: usize,
    /// Share of all filings, in percent, rounded to one decimal.
    pub percentage: f64,
}

/// Counts filings per counterparty, most frequent first. Ties keep first-seen order.
pub fn counterparty_distribution(
    cases: &[CaseRecord],
    perspective: Perspective,
) -> Vec<CounterpartyShare> {
    let mut order: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for case in cases {
        let name = perspective.counterparty(case);
        match index.get(name) {
            Some(&slot) => order[slot].1 += 1,
            None => {
                index.insert(name, order.len());
                order.push((name, 1));
            }
        }
    }

    // sort_by is stable, so equal counts stay in grouping order
    order.sort_by(|a, b| b.1.cmp(&a.1));

    let total = cases.len() as f64;
    order
        .into_iter()
        .map(|(name, count)| CounterpartyShare {
            name: name.to_string(),
            count,
            percentage: round_to_tenth(count as f64 / total * 100.0),
        })
        .collect()
}

/// Distinct counterparties that filed more than once.
pub fn repeat_filer_count(distribution: &[CounterpartyShare]) -> usize {
    distribution.iter().filter(|entry| entry.count > 1).count()
}

/// Percentage of filings with a negative outcome, unrounded. Zero for an empty set.
pub fn negative_rate(cases: &[CaseRecord]) -> f64 {
    if cases.is_empty() {
        return 0.0;
    }
    let negative = cases
        .iter()
        .filter(|case| is_negative_outcome(case.status))
        .count();
    negative as f64 / cases.len() as f64 * 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearStatusTally {
    pub year: i32,
    #[serde(rename = "Dismissed")]
    pub dismissed: usize,
    #[serde(rename = "Ongoing")]
    pub ongoing: usize,
    #[serde(rename = "Allowed")]
    pub allowed: usize,
}

/// Per-year status tallies for dated filings, one entry per year present.
pub fn status_by_year(cases: &[CaseRecord]) -> Vec<YearStatusTally> {
    let mut years: BTreeMap<i32, YearStatusTally> = BTreeMap::new();
    for case in cases {
        let Some(date) = case.filing_date else {
            continue;
        };
        let year = date.year();
        let tally = years.entry(year).or_insert(YearStatusTally {
            year,
            dismissed: 0,
            ongoing: 0,
            allowed: 0,
        });
        match chart_bucket(case.status) {
            ChartBucket::Dismissed => tally.dismissed += 1,
            ChartBucket::Ongoing => tally.ongoing += 1,
            ChartBucket::Allowed => tally.allowed += 1,
        }
    }
    years.into_values().collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearVolume {
    pub year: i32,
    pub count: usize,
}

/// Filing counts per calendar year for dated filings.
pub fn volume_by_year(cases: &[CaseRecord]) -> Vec<YearVolume> {
    let mut years: BTreeMap<i32, usize> = BTreeMap::new();
    for date in cases.iter().filter_map(|case| case.filing_date) {
        *years.entry(date.year()).or_default() += 1;
    }
    years
        .into_iter()
        .map(|(year, count)| YearVolume { year, count })
        .collect()
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One cell of the source table, tagged by what the reader found there.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// The row ended before this column.
    Missing,
    /// The field was present but zero-length.
    Empty,
    Number { value: f64, raw: String },
    Text(String),
}

impl Cell {
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Cell::Empty;
        }
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Cell::Number {
                value,
                raw: raw.to_string(),
            },
            _ => Cell::Text(raw.to_string()),
        }
    }

    /// The cell as source text; `None` when nothing was there.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Missing | Cell::Empty => None,
            Cell::Number { raw, .. } => Some(raw),
            Cell::Text(text) => Some(text),
        }
    }
}

/// One data row of the source table, cells aligned with the column schema.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRow {
    /// 1-based record number in the source, header rows included.
    pub line: usize,
    pub cells: Vec<Cell>,
}

impl SourceRow {
    pub fn cell(&self, index: usize) -> &Cell {
        self.cells.get(index).unwrap_or(&Cell::Missing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    L1,
    L2,
    L3,
    L4,
    L5,
}

impl Level {
    pub const ALL: [Level; 5] = [Level::L1, Level::L2, Level::L3, Level::L4, Level::L5];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::L1 => "L1",
            Level::L2 => "L2",
            Level::L3 => "L3",
            Level::L4 => "L4",
            Level::L5 => "L5",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| format!("unknown support level '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SupportLevelRate {
    pub with_backfill: f64,
    pub without_backfill: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Levels {
    #[serde(rename = "L1")]
    pub l1: SupportLevelRate,
    #[serde(rename = "L2")]
    pub l2: SupportLevelRate,
    #[serde(rename = "L3")]
    pub l3: SupportLevelRate,
    #[serde(rename = "L4")]
    pub l4: SupportLevelRate,
    #[serde(rename = "L5")]
    pub l5: SupportLevelRate,
}

impl Levels {
    pub fn from_rates(rates: [SupportLevelRate; 5]) -> Self {
        let [l1, l2, l3, l4, l5] = rates;
        Self { l1, l2, l3, l4, l5 }
    }

    pub fn get(&self, level: Level) -> &SupportLevelRate {
        match level {
            Level::L1 => &self.l1,
            Level::L2 => &self.l2,
            Level::L3 => &self.l3,
            Level::L4 => &self.l4,
            Level::L5 => &self.l5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IncidentResponses {
    #[serde(rename = "9x5x4")]
    pub business_hours_4h: f64,
    #[serde(rename = "24x7x4")]
    pub round_the_clock_4h: f64,
    pub sbd: f64,
    pub nbd: f64,
    #[serde(rename = "2bd")]
    pub two_business_days: f64,
    #[serde(rename = "3bd")]
    pub three_business_days: f64,
}

impl IncidentResponses {
    pub const CODES: [&'static str; 6] = ["9x5x4", "24x7x4", "sbd", "nbd", "2bd", "3bd"];

    pub fn from_rates(rates: [f64; 6]) -> Self {
        Self {
            business_hours_4h: rates[0],
            round_the_clock_4h: rates[1],
            sbd: rates[2],
            nbd: rates[3],
            two_business_days: rates[4],
            three_business_days: rates[5],
        }
    }

    /// Looks up a rate by its SLA code as written in the document.
    pub fn get(&self, code: &str) -> Option<f64> {
        match code {
            "9x5x4" => Some(self.business_hours_4h),
            "24x7x4" => Some(self.round_the_clock_4h),
            "sbd" => Some(self.sbd),
            "nbd" => Some(self.nbd),
            "2bd" => Some(self.two_business_days),
            "3bd" => Some(self.three_business_days),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DispatchRates {
    pub full_day: f64,
    pub half_day: f64,
    pub per_hour: f64,
    pub incident_responses: IncidentResponses,
    pub additional_hour: f64,
    /// Monthly project rates, indexed L1 to L5.
    pub project_short_monthly: [f64; 5],
    pub project_long_monthly: [f64; 5],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub region: Option<String>,
    pub country: Option<String>,
    pub supplier: Option<String>,
    pub currency: Option<String>,
    pub payment_terms: Option<String>,
    pub levels: Levels,
    pub dispatch: DispatchRates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDescriptions {
    #[serde(rename = "L1")]
    pub l1: String,
    #[serde(rename = "L2")]
    pub l2: String,
    #[serde(rename = "L3")]
    pub l3: String,
    #[serde(rename = "L4")]
    pub l4: String,
    #[serde(rename = "L5")]
    pub l5: String,
}

impl LevelDescriptions {
    pub fn get(&self, level: Level) -> &str {
        match level {
            Level::L1 => &self.l1,
            Level::L2 => &self.l2,
            Level::L3 => &self.l3,
            Level::L4 => &self.l4,
            Level::L5 => &self.l5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricebookDocument {
    pub countries: Vec<CountryRecord>,
    pub terms: Vec<String>,
    pub descriptions: LevelDescriptions,
}

impl PricebookDocument {
    /// Wraps the country records with the static terms and level descriptions.
    pub fn new(countries: Vec<CountryRecord>) -> Self {
        Self {
            countries,
            terms: crate::domain::reference::terms(),
            descriptions: crate::domain::reference::descriptions(),
        }
    }
}

/// Counts reported alongside a built document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildSummary {
    pub rows_considered: usize,
    pub rows_accepted: usize,
}

impl BuildSummary {
    pub fn rows_skipped(&self) -> usize {
        self.rows_considered - self.rows_accepted
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub document: PricebookDocument,
    pub summary: BuildSummary,
}

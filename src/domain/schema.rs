//! Column layout of the pricebook sheet.
//!
//! A [`ColumnSchema`] names every column left to right, including slots that
//! are never mapped, so that later columns keep their offsets. Resolving it
//! yields a [`ColumnLayout`] of positions used when building records.

use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_unique_names};

pub const REGION: &str = "Region";
pub const COUNTRY: &str = "Country";
pub const SUPPLIER: &str = "Supplier";
pub const CURRENCY: &str = "Currency";
pub const PAYMENT_TERMS: &str = "Payment Terms";

pub const LEVEL_RATES: [(&str, &str); 5] = [
    ("L1 With Backfill", "L1 Without Backfill"),
    ("L2 With Backfill", "L2 Without Backfill"),
    ("L3 With Backfill", "L3 Without Backfill"),
    ("L4 With Backfill", "L4 Without Backfill"),
    ("L5 With Backfill", "L5 Without Backfill"),
];

pub const FULL_DAY: &str = "Full Day";
pub const HALF_DAY: &str = "Half Day";
pub const PER_HOUR: &str = "Per Hour";
pub const ADDITIONAL_HOUR: &str = "Additional Hour";

/// Incident response columns, in the key order of `incident_responses`.
pub const INCIDENT_RESPONSES: [&str; 6] = [
    "9x5x4 Incident Response",
    "24x7x4 Response to Site",
    "SBD Business Day",
    "NBD Resolution",
    "2BD Resolution",
    "3BD Resolution",
];

pub const SHORT_TERM: [&str; 5] = [
    "L1 Short Term",
    "L2 Short Term",
    "L3 Short Term",
    "L4 Short Term",
    "L5 Short Term",
];

pub const LONG_TERM: [&str; 5] = [
    "L1 Long Term",
    "L2 Long Term",
    "L3 Long Term",
    "L4 Long Term",
    "L5 Long Term",
];

pub const DEFAULT_COLUMNS: [&str; 41] = [
    REGION,
    COUNTRY,
    SUPPLIER,
    CURRENCY,
    PAYMENT_TERMS,
    "L1 With Backfill",
    "L1 Without Backfill",
    "L2 With Backfill",
    "L2 Without Backfill",
    "L3 With Backfill",
    "L3 Without Backfill",
    "L4 With Backfill",
    "L4 Without Backfill",
    "L5 With Backfill",
    "L5 Without Backfill",
    FULL_DAY,
    HALF_DAY,
    PER_HOUR,
    "Col18",
    "Col19",
    "Col20",
    "9x5x4 Incident Response",
    "24x7x4 Response to Site",
    "SBD Business Day",
    "NBD Resolution",
    "2BD Resolution",
    "3BD Resolution",
    ADDITIONAL_HOUR,
    "Col28",
    "Col29",
    "Col30",
    "L1 Short Term",
    "L2 Short Term",
    "L3 Short Term",
    "L4 Short Term",
    "L5 Short Term",
    "L1 Long Term",
    "L2 Long Term",
    "L3 Long Term",
    "L4 Long Term",
    "L5 Long Term",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    columns: Vec<String>,
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl ColumnSchema {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    fn require(&self, name: &str) -> Result<usize> {
        self.position(name).ok_or_else(|| EtlError::ConfigError {
            message: format!("column schema has no '{}' column", name),
        })
    }

    pub fn resolve(&self) -> Result<ColumnLayout> {
        for name in &self.columns {
            validate_non_empty_string("source.columns", name)?;
        }
        validate_unique_names("source.columns", &self.columns)?;

        let mut levels = [(0, 0); 5];
        for (slot, (with, without)) in levels.iter_mut().zip(LEVEL_RATES) {
            *slot = (self.require(with)?, self.require(without)?);
        }

        let mut incident_responses = [0; 6];
        for (slot, name) in incident_responses.iter_mut().zip(INCIDENT_RESPONSES) {
            *slot = self.require(name)?;
        }

        let mut short_term = [0; 5];
        for (slot, name) in short_term.iter_mut().zip(SHORT_TERM) {
            *slot = self.require(name)?;
        }

        let mut long_term = [0; 5];
        for (slot, name) in long_term.iter_mut().zip(LONG_TERM) {
            *slot = self.require(name)?;
        }

        Ok(ColumnLayout {
            width: self.width(),
            region: self.require(REGION)?,
            country: self.require(COUNTRY)?,
            supplier: self.require(SUPPLIER)?,
            currency: self.require(CURRENCY)?,
            payment_terms: self.require(PAYMENT_TERMS)?,
            levels,
            full_day: self.require(FULL_DAY)?,
            half_day: self.require(HALF_DAY)?,
            per_hour: self.require(PER_HOUR)?,
            incident_responses,
            additional_hour: self.require(ADDITIONAL_HOUR)?,
            short_term,
            long_term,
        })
    }
}

/// Column positions for every mapped field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    pub width: usize,
    pub region: usize,
    pub country: usize,
    pub supplier: usize,
    pub currency: usize,
    pub payment_terms: usize,
    /// (with backfill, without backfill) per level, L1 first.
    pub levels: [(usize, usize); 5],
    pub full_day: usize,
    pub half_day: usize,
    pub per_hour: usize,
    pub incident_responses: [usize; 6],
    pub additional_hour: usize,
    pub short_term: [usize; 5],
    pub long_term: [usize; 5],
}

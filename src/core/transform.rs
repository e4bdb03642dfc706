use crate::domain::model::{
    BuildSummary, Cell, CountryRecord, DispatchRates, IncidentResponses, Levels, PricebookDocument,
    SourceRow, SupportLevelRate, TransformResult,
};
use crate::domain::schema::ColumnLayout;

/// A row counts only when its country has non-whitespace content.
pub fn is_valid_row(row: &SourceRow, layout: &ColumnLayout) -> bool {
    row.cell(layout.country)
        .as_text()
        .is_some_and(|country| !country.trim().is_empty())
}

/// Numeric value of a cell; anything that is not a number reads as zero.
pub fn coerce_numeric(cell: &Cell) -> f64 {
    match cell {
        Cell::Number { value, .. } => *value,
        Cell::Missing | Cell::Empty | Cell::Text(_) => 0.0,
    }
}

fn text(row: &SourceRow, index: usize) -> Option<String> {
    row.cell(index).as_text().map(str::to_string)
}

fn number(row: &SourceRow, index: usize) -> f64 {
    coerce_numeric(row.cell(index))
}

fn numbers<const N: usize>(row: &SourceRow, indexes: [usize; N]) -> [f64; N] {
    indexes.map(|index| number(row, index))
}

pub fn build_record(row: &SourceRow, layout: &ColumnLayout) -> CountryRecord {
    let rates = layout.levels.map(|(with, without)| SupportLevelRate {
        with_backfill: number(row, with),
        without_backfill: number(row, without),
    });

    CountryRecord {
        region: text(row, layout.region),
        country: text(row, layout.country),
        supplier: text(row, layout.supplier),
        currency: text(row, layout.currency),
        payment_terms: text(row, layout.payment_terms),
        levels: Levels::from_rates(rates),
        dispatch: DispatchRates {
            full_day: number(row, layout.full_day),
            half_day: number(row, layout.half_day),
            per_hour: number(row, layout.per_hour),
            incident_responses: IncidentResponses::from_rates(numbers(
                row,
                layout.incident_responses,
            )),
            additional_hour: number(row, layout.additional_hour),
            project_short_monthly: numbers(row, layout.short_term),
            project_long_monthly: numbers(row, layout.long_term),
        },
    }
}

pub fn build_document(rows: &[SourceRow], layout: &ColumnLayout) -> TransformResult {
    tracing::info!("Processing {} rows from source", rows.len());

    let mut countries = Vec::new();
    for row in rows {
        if !is_valid_row(row, layout) {
            tracing::debug!("Skipping line {}: no country", row.line);
            continue;
        }
        countries.push(build_record(row, layout));
    }

    let summary = BuildSummary {
        rows_considered: rows.len(),
        rows_accepted: countries.len(),
    };
    tracing::info!(
        "Accepted {} of {} rows ({} skipped)",
        summary.rows_accepted,
        summary.rows_considered,
        summary.rows_skipped()
    );

    TransformResult {
        document: PricebookDocument::new(countries),
        summary,
    }
}

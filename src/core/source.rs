use crate::domain::model::{Cell, SourceRow};
use crate::utils::error::{EtlError, Result};
use std::io::Read;

/// How the delimited export of the pricebook sheet is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceFormat {
    pub delimiter: u8,
    pub header_rows: usize,
    /// Number of columns the schema expects.
    pub width: usize,
}

/// Reads the whole table, skipping header rows and binding every data row
/// to exactly `format.width` cells. Only data rows count toward the table
/// width, so a source with no data rows is rejected.
pub fn load<R: Read>(reader: R, format: SourceFormat) -> Result<Vec<SourceRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(format.delimiter)
        .from_reader(reader);

    let mut total_records = 0;
    let mut table_width = 0;
    let mut rows = Vec::new();

    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        total_records += 1;

        if index < format.header_rows {
            continue;
        }

        table_width = table_width.max(record.len());

        let mut cells: Vec<Cell> = record.iter().take(format.width).map(Cell::parse).collect();
        cells.resize(format.width, Cell::Missing);
        rows.push(SourceRow {
            line: index + 1,
            cells,
        });
    }

    if total_records < format.header_rows {
        return Err(EtlError::source_format(format!(
            "expected {} header rows, found only {} rows",
            format.header_rows, total_records
        )));
    }

    if table_width < format.width {
        return Err(EtlError::source_format(format!(
            "expected {} columns, table has {}",
            format.width, table_width
        )));
    }

    tracing::debug!(
        "Loaded {} data rows ({} columns wide) after skipping {} header rows",
        rows.len(),
        table_width,
        format.header_rows
    );

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(width: usize) -> SourceFormat {
        SourceFormat {
            delimiter: b',',
            header_rows: 2,
            width,
        }
    }

    #[test]
    fn test_load_skips_header_rows() {
        let data = "Pricebook,,\nRegion,Country,Supplier\nEMEA,Germany,Acme\nAPAC,Japan,Acme\n";
        let rows = load(data.as_bytes(), format(3)).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].line, 3);
        assert_eq!(rows[0].cell(1).as_text(), Some("Germany"));
        assert_eq!(rows[1].cell(1).as_text(), Some("Japan"));
    }

    #[test]
    fn test_short_rows_are_padded_with_missing() {
        let data = "h,h,h\nh,h,h\nEMEA,Germany\nAPAC,Japan,Acme\n";
        let rows = load(data.as_bytes(), format(3)).unwrap();

        assert_eq!(rows[0].cells.len(), 3);
        assert_eq!(rows[0].cells[2], Cell::Missing);
    }

    #[test]
    fn test_extra_cells_are_dropped() {
        let data = "h,h\nh,h\nEMEA,Germany,extra\n";
        let rows = load(data.as_bytes(), format(2)).unwrap();
        assert_eq!(rows[0].cells.len(), 2);
    }

    #[test]
    fn test_narrow_table_is_source_format_error() {
        let data = "h,h\nh,h\nEMEA,Germany\n";
        let err = load(data.as_bytes(), format(41)).unwrap_err();
        assert!(matches!(err, EtlError::SourceFormat { .. }));
    }

    #[test]
    fn test_missing_header_rows_is_source_format_error() {
        let err = load("Region,Country\n".as_bytes(), format(2)).unwrap_err();
        assert!(matches!(err, EtlError::SourceFormat { .. }));

        let err = load("".as_bytes(), format(2)).unwrap_err();
        assert!(matches!(err, EtlError::SourceFormat { .. }));
    }

    #[test]
    fn test_narrow_data_under_wide_headers_is_source_format_error() {
        let data = format!(
            "Pricebook{}\n{}\nEMEA,Germany\n",
            ",".repeat(40),
            ",".repeat(40)
        );
        let err = load(data.as_bytes(), format(41)).unwrap_err();
        assert!(matches!(err, EtlError::SourceFormat { .. }));
        assert!(err.to_string().contains("table has 2"));
    }

    #[test]
    fn test_header_only_source_is_source_format_error() {
        let err = load("a,b\nc,d\n".as_bytes(), format(2)).unwrap_err();
        assert!(matches!(err, EtlError::SourceFormat { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_source_format_error() {
        let data: &[u8] = b"a,b\nc,d\n\xff,\xfe\n";
        let err = load(data, format(2)).unwrap_err();
        assert!(matches!(err, EtlError::SourceFormat { .. }));
    }

    #[test]
    fn test_tab_delimiter_and_quoted_fields() {
        let data = "h\th\nh\th\n\"Americas, North\"\tUSA\n";
        let rows = load(
            data.as_bytes(),
            SourceFormat {
                delimiter: b'\t',
                header_rows: 2,
                width: 2,
            },
        )
        .unwrap();
        assert_eq!(rows[0].cell(0).as_text(), Some("Americas, North"));
        assert_eq!(rows[0].cell(1).as_text(), Some("USA"));
    }
}

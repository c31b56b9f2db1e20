// src/data_input/scan_parser.rs

use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::data_input::scan_data::ScanRowData;

/// Parses a whitespace-delimited Hall probe data file.
///
/// Expected layout: column 0 = timestamp, column 1 = applied coil current,
/// column 2 = measured field. Blank lines and `#` comment lines are skipped.
/// Any row with fewer than three columns or a non-numeric cell aborts the
/// whole run; a half-parsed scan would silently skew the calibration fit.
pub fn parse_scan_file(input_file_path: &Path) -> Result<Vec<ScanRowData>, Box<dyn Error>> {
    println!("Reading scan file '{}'...", input_file_path.display());
    let file = File::open(input_file_path)
        .map_err(|e| format!("Failed to open '{}': {}", input_file_path.display(), e))?;
    let rows = parse_scan_reader(BufReader::new(file))
        .map_err(|e| format!("Error in '{}': {}", input_file_path.display(), e))?;
    println!("  Read {} data rows.", rows.len());
    Ok(rows)
}

/// Reader-level parser backing `parse_scan_file`.
pub fn parse_scan_reader<R: BufRead>(reader: R) -> Result<Vec<ScanRowData>, Box<dyn Error>> {
    let mut rows: Vec<ScanRowData> = Vec::new();

    for (line_index, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let columns: Vec<&str> = trimmed.split_whitespace().collect();
        if columns.len() < 3 {
            return Err(format!(
                "line {}: expected at least 3 columns (time, current, field), found {}",
                line_index + 1,
                columns.len()
            )
            .into());
        }

        let parse_column = |col_idx: usize, name: &str| -> Result<f64, Box<dyn Error>> {
            columns[col_idx].parse::<f64>().map_err(|_| {
                format!(
                    "line {}: could not parse {} value '{}'",
                    line_index + 1,
                    name,
                    columns[col_idx]
                )
                .into()
            })
        };

        rows.push(ScanRowData {
            time_s: parse_column(0, "time")?,
            current_a: parse_column(1, "current")?,
            field_mt: parse_column(2, "field")?,
        });
    }

    if rows.is_empty() {
        return Err("no data rows found".into());
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_three_column_table() {
        let input = "0.0 0.5 1.25\n1.0 1.0 2.50\n2.0 1.5 3.75\n";
        let rows = parse_scan_reader(Cursor::new(input)).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].time_s, 1.0);
        assert_eq!(rows[1].current_a, 1.0);
        assert_eq!(rows[1].field_mt, 2.50);
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let input = "# DataFile header\n\n0.0 0.5 1.25\n   \n# trailing comment\n1.0 1.0 2.50\n";
        let rows = parse_scan_reader(Cursor::new(input)).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn tolerates_repeated_whitespace_and_tabs() {
        let input = "0.0\t 0.5   1.25\n";
        let rows = parse_scan_reader(Cursor::new(input)).unwrap();
        assert_eq!(rows[0].field_mt, 1.25);
    }

    #[test]
    fn rejects_short_row() {
        let input = "0.0 0.5 1.25\n1.0 1.0\n";
        let err = parse_scan_reader(Cursor::new(input)).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn rejects_non_numeric_cell() {
        let input = "0.0 abc 1.25\n";
        let err = parse_scan_reader(Cursor::new(input)).unwrap_err();
        assert!(err.to_string().contains("current"));
    }

    #[test]
    fn rejects_empty_input() {
        let err = parse_scan_reader(Cursor::new("# only comments\n")).unwrap_err();
        assert!(err.to_string().contains("no data rows"));
    }
}

// src/data_input/scan_parser.rs

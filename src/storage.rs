//! Loading datasets from JSON/CSV files and writing derived output.
//!
//! This is the collaborator edge of the crate: the chart engine never reads files itself.
//! JSON input may carry option overrides (`width`, `height`, `padding`, `maxBars`); CSV input
//! always uses defaults.

use crate::error::{ChartError, Result};
use crate::models::{ChartOptions, GroupedData, RankedData, RankedOptions, Row, Series};
use csv::{ReaderBuilder, Trim};
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Parse a grouped dataset: `{ "categories": [...], "series": [{ "name", "values" }], ... }`.
pub fn parse_grouped_json(s: &str) -> Result<(GroupedData, ChartOptions)> {
    let v: Value = serde_json::from_str(s)?;
    let options = ChartOptions::from_value(&v);
    Ok((GroupedData::from(v), options))
}

/// Parse a ranked dataset: `{ "rows": [{ "label", "value" }], "maxBars": 5, ... }`.
pub fn parse_ranked_json(s: &str) -> Result<(RankedData, RankedOptions)> {
    let v: Value = serde_json::from_str(s)?;
    let options = RankedOptions::from_value(&v);
    Ok((RankedData::from(v), options))
}

/// Read a grouped CSV: header `category,<series>,<series>...`, one record per category.
pub fn read_grouped_csv<R: Read>(rdr: R) -> Result<GroupedData> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(rdr);
    let names: Vec<String> = rdr.headers()?.iter().skip(1).map(str::to_string).collect();

    let mut categories = Vec::new();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); names.len()];
    for record in rdr.records() {
        let record = record?;
        categories.push(record.get(0).unwrap_or_default().to_string());
        for (j, col) in columns.iter_mut().enumerate() {
            col.push(parse_amount(record.get(j + 1)));
        }
    }

    let series = names
        .into_iter()
        .zip(columns)
        .map(|(name, values)| Series::new(name, values))
        .collect();
    Ok(GroupedData::new(categories, series))
}

/// Read a ranked CSV with `label` and `value` columns (falls back to the first two columns).
pub fn read_ranked_csv<R: Read>(rdr: R) -> Result<RankedData> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(rdr);
    let headers = rdr.headers()?.clone();
    let column = |name: &str, fallback: usize| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .unwrap_or(fallback)
    };
    let (label_col, value_col) = (column("label", 0), column("value", 1));

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(Row::new(
            record.get(label_col).unwrap_or_default(),
            parse_amount(record.get(value_col)),
        ));
    }
    Ok(RankedData::new(rows))
}

/// Load a grouped dataset; format chosen by extension (`.json` or `.csv`).
pub fn load_grouped<P: AsRef<Path>>(path: P) -> Result<(GroupedData, ChartOptions)> {
    let path = path.as_ref();
    match extension(path).as_str() {
        "json" => parse_grouped_json(&std::fs::read_to_string(path)?),
        "csv" => Ok((
            read_grouped_csv(File::open(path)?)?,
            ChartOptions::default(),
        )),
        other => Err(ChartError::UnsupportedFormat(other.to_string())),
    }
}

/// Load a ranked dataset; format chosen by extension (`.json` or `.csv`).
pub fn load_ranked<P: AsRef<Path>>(path: P) -> Result<(RankedData, RankedOptions)> {
    let path = path.as_ref();
    match extension(path).as_str() {
        "json" => parse_ranked_json(&std::fs::read_to_string(path)?),
        "csv" => Ok((read_ranked_csv(File::open(path)?)?, RankedOptions::default())),
        other => Err(ChartError::UnsupportedFormat(other.to_string())),
    }
}

/// Save any serializable value (e.g. chart geometry) as pretty JSON.
pub fn save_json<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(value)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Lenient CSV cell parsing: thousands separators and a leading currency sign are tolerated,
/// anything unparsable (or empty) counts as 0.
fn parse_amount(cell: Option<&str>) -> f64 {
    let cleaned: String = cell
        .unwrap_or_default()
        .trim_start_matches('₹')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    cleaned
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_amount_is_lenient() {
        assert_eq!(parse_amount(Some("1,20,000")), 120000.0);
        assert_eq!(parse_amount(Some("₹450.5")), 450.5);
        assert_eq!(parse_amount(Some("n/a")), 0.0);
        assert_eq!(parse_amount(None), 0.0);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("data.xml");
        std::fs::write(&p, "<x/>").unwrap();
        assert!(matches!(
            load_grouped(&p),
            Err(ChartError::UnsupportedFormat(ext)) if ext == "xml"
        ));
    }
}

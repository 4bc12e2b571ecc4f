use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Array, ArrayRef, Float64Array, Int32Array, Int64Array, StringArray};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use thiserror::Error;

use super::model::{LaunchRecord, LaunchTable, Outcome};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Structural problems in the input file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("missing column '{0}'")]
    MissingColumn(&'static str),
    #[error("column '{column}' row {row}: expected {expected}")]
    BadCell {
        column: &'static str,
        row: usize,
        expected: &'static str,
    },
}

// ---------------------------------------------------------------------------
// Raw row – the serialized shape shared by the CSV and JSON exports
// ---------------------------------------------------------------------------

/// One row as it appears in the CSV headers / JSON record keys.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Flight Number")]
    flight_number: u32,
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass: f64,
    #[serde(rename = "class")]
    class: i64,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

impl From<RawRecord> for LaunchRecord {
    fn from(raw: RawRecord) -> Self {
        LaunchRecord {
            flight_number: raw.flight_number,
            site: raw.launch_site,
            payload_mass_kg: raw.payload_mass,
            outcome: Outcome::from_class(raw.class),
            booster_category: raw.booster_category,
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch records table from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the dataset's column names
/// * `.json`    – records orientation: `[{ "Launch Site": ..., ... }, ...]`
/// * `.parquet` – same columns as scalar Arrow arrays
pub fn load_file(path: &Path) -> Result<LaunchTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string()).into()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<LaunchTable> {
    let file = std::fs::File::open(path).context("opening CSV")?;
    read_csv(file)
}

fn read_csv<R: Read>(input: R) -> Result<LaunchTable> {
    let mut reader = csv::Reader::from_reader(input);
    let mut records = Vec::new();
    for (row, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row}"))?;
        records.push(raw.into());
    }
    Ok(LaunchTable::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')`.
fn load_json(path: &Path) -> Result<LaunchTable> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let raw: Vec<RawRecord> = serde_json::from_str(&text).context("parsing JSON records")?;
    Ok(LaunchTable::from_records(
        raw.into_iter().map(Into::into).collect(),
    ))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet export of the dataset.
///
/// All five columns are scalar; numeric columns may be written as either
/// integer or float depending on the exporting tool, so both are accepted.
fn load_parquet(path: &Path) -> Result<LaunchTable> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;

        let flight_col = column(&batch, "Flight Number")?;
        let site_col = column(&batch, "Launch Site")?;
        let payload_col = column(&batch, "Payload Mass (kg)")?;
        let class_col = column(&batch, "class")?;
        let booster_col = column(&batch, "Booster Version Category")?;

        for row in 0..batch.num_rows() {
            records.push(LaunchRecord {
                flight_number: i64_at(flight_col, row, "Flight Number")? as u32,
                site: str_at(site_col, row, "Launch Site")?,
                payload_mass_kg: f64_at(payload_col, row, "Payload Mass (kg)")?,
                outcome: Outcome::from_class(i64_at(class_col, row, "class")?),
                booster_category: str_at(booster_col, row, "Booster Version Category")?,
            });
        }
    }

    Ok(LaunchTable::from_records(records))
}

// -- Arrow cell helpers --

fn column<'a>(batch: &'a RecordBatch, name: &'static str) -> Result<&'a ArrayRef, LoadError> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| LoadError::MissingColumn(name))?;
    Ok(batch.column(idx))
}

fn f64_at(col: &Arc<dyn Array>, row: usize, column: &'static str) -> Result<f64, LoadError> {
    if col.is_null(row) {
        return Err(LoadError::BadCell {
            column,
            row,
            expected: "a non-null number",
        });
    }
    if let Some(arr) = col.as_any().downcast_ref::<Float64Array>() {
        return Ok(arr.value(row));
    }
    if let Some(arr) = col.as_any().downcast_ref::<Int64Array>() {
        return Ok(arr.value(row) as f64);
    }
    Err(LoadError::BadCell {
        column,
        row,
        expected: "a Float64 or Int64 value",
    })
}

fn i64_at(col: &Arc<dyn Array>, row: usize, column: &'static str) -> Result<i64, LoadError> {
    if col.is_null(row) {
        return Err(LoadError::BadCell {
            column,
            row,
            expected: "a non-null integer",
        });
    }
    if let Some(arr) = col.as_any().downcast_ref::<Int64Array>() {
        return Ok(arr.value(row));
    }
    if let Some(arr) = col.as_any().downcast_ref::<Int32Array>() {
        return Ok(arr.value(row) as i64);
    }
    Err(LoadError::BadCell {
        column,
        row,
        expected: "an Int64 or Int32 value",
    })
}

fn str_at(col: &Arc<dyn Array>, row: usize, column: &'static str) -> Result<String, LoadError> {
    if col.is_null(row) {
        return Err(LoadError::BadCell {
            column,
            row,
            expected: "a non-null string",
        });
    }
    col.as_any()
        .downcast_ref::<StringArray>()
        .map(|arr| arr.value(row).to_string())
        .ok_or(LoadError::BadCell {
            column,
            row,
            expected: "a Utf8 value",
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
Flight Number,Launch Site,Payload Mass (kg),class,Booster Version Category
1,CCAFS LC-40,500.0,0,v1.0
2,CCAFS LC-40,2500.0,1,v1.1
3,VAFB SLC-4E,1800.0,1,FT
";

    #[test]
    fn reads_csv_schema() {
        let table = read_csv(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.sites, vec!["CCAFS LC-40", "VAFB SLC-4E"]);
        assert_eq!(table.payload_bounds(), Some((500.0, 2500.0)));

        let first = &table.records[0];
        assert_eq!(first.flight_number, 1);
        assert_eq!(first.outcome, Outcome::Failure);
        assert_eq!(first.booster_category, "v1.0");
    }

    #[test]
    fn csv_with_missing_column_fails() {
        let malformed = "Flight Number,Launch Site\n1,CCAFS LC-40\n";
        assert!(read_csv(malformed.as_bytes()).is_err());
    }

    #[test]
    fn reads_json_records() {
        let json = r#"[
            {"Flight Number": 1, "Launch Site": "KSC LC-39A",
             "Payload Mass (kg)": 3600.0, "class": 1,
             "Booster Version Category": "FT"}
        ]"#;
        let raw: Vec<RawRecord> = serde_json::from_str(json).unwrap();
        let table = LaunchTable::from_records(raw.into_iter().map(Into::into).collect());
        assert_eq!(table.len(), 1);
        assert_eq!(table.records[0].site, "KSC LC-39A");
        assert_eq!(table.records[0].outcome, Outcome::Success);
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = load_file(Path::new("launches.xlsx")).unwrap_err();
        assert!(err.to_string().contains("unsupported file extension"));
    }
}

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{Array, AsArray};
use arrow::datatypes::{
    DataType, Float16Type, Float32Type, Float64Type, Int16Type, Int32Type, Int64Type, Int8Type,
    UInt16Type, UInt32Type, UInt64Type, UInt8Type,
};
use arrow::error::ArrowError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::{debug, info, warn};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::errors::ParquetError;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{CellValue, ColumnKind, ListeningDataset};

/// Column-name fragments that mark a column as a timestamp candidate.
pub const TIMESTAMP_HINTS: [&str; 3] = ["date", "time", "played"];

/// Cell texts read as missing values, as dataframe readers do by default.
const NULL_MARKERS: [&str; 12] = [
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "null", "NULL", "None", "#N/A", "<NA>",
];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Fatal conditions while loading a dataset. There is no partial result.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed delimited file {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("malformed JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unreadable parquet file {}: {source}", .path.display())]
    Parquet {
        path: PathBuf,
        #[source]
        source: ParquetError,
    },
    #[error("cannot decode parquet batch in {}: {source}", .path.display())]
    Arrow {
        path: PathBuf,
        #[source]
        source: ArrowError,
    },
    #[error("{}: {reason}", .path.display())]
    Format { path: PathBuf, reason: String },
    #[error("{} has no columns", .path.display())]
    NoColumns { path: PathBuf },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a listening history from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` / `.txt` – comma-delimited with a header row (anything unknown too)
/// * `.tsv`          – tab-delimited with a header row
/// * `.json`         – `[{ "artist_name": "...", "ms_played": 1234, ... }, ...]`
/// * `.parquet`      – any flat schema
///
/// After parsing, textual columns whose name hints at a date or time are
/// reinterpreted as timestamps when every value parses.
pub fn load_file(path: &Path) -> Result<ListeningDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let mut dataset = match ext.as_str() {
        "parquet" | "pq" => load_parquet(path)?,
        "json" => load_json(path)?,
        "tsv" | "tab" => load_delimited(path, b'\t')?,
        _ => load_delimited(path, b',')?,
    };

    if dataset.column_names.is_empty() {
        return Err(LoadError::NoColumns {
            path: path.to_path_buf(),
        });
    }

    reinterpret_timestamps(&mut dataset);

    info!(
        "Loaded {} rows with columns {:?} from {}",
        dataset.len(),
        dataset.column_names,
        path.display()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Delimited text loader
// ---------------------------------------------------------------------------

/// Header row gives the column names. Short rows are padded, long rows are
/// cut to the header width and undecodable rows are skipped.
fn load_delimited(path: &Path, delimiter: u8) -> Result<ListeningDataset, LoadError> {
    let csv_err = |source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)
        .map_err(|e| match e.into_kind() {
            csv::ErrorKind::Io(source) => LoadError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => LoadError::Format {
                path: path.to_path_buf(),
                reason: format!("{other:?}"),
            },
        })?;

    let headers = dedupe_headers(reader.headers().map_err(csv_err)?.iter());
    if headers.iter().all(|h| h.is_empty()) {
        return Err(LoadError::NoColumns {
            path: path.to_path_buf(),
        });
    }
    let width = headers.len();

    let mut raw: Vec<Vec<String>> = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                let mut cells: Vec<String> =
                    record.iter().take(width).map(str::to_string).collect();
                cells.resize(width, String::new());
                raw.push(cells);
            }
            Err(e) if e.is_io_error() => return Err(csv_err(e)),
            Err(e) => warn!("Skipping row {row_no} of {}: {e}", path.display()),
        }
    }

    let kinds: Vec<ColumnKind> = (0..width)
        .map(|idx| infer_text_kind(raw.iter().map(|row| row[idx].as_str())))
        .collect();

    let rows = raw
        .iter()
        .map(|row| {
            row.iter()
                .zip(&kinds)
                .map(|(text, kind)| parse_cell(text, *kind))
                .collect()
        })
        .collect();

    Ok(ListeningDataset {
        column_names: headers,
        column_kinds: kinds,
        rows,
    })
}

/// Repeated header names get a `.1`, `.2`, … suffix so lookups stay unique.
fn dedupe_headers<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    raw.map(|h| {
        let base = h.trim().to_string();
        let mut name = base.clone();
        let mut n = 1;
        while seen.contains(&name) {
            name = format!("{base}.{n}");
            n += 1;
        }
        seen.insert(name.clone());
        name
    })
    .collect()
}

fn is_null_marker(s: &str) -> bool {
    NULL_MARKERS.contains(&s)
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Pick the narrowest kind every non-null cell of a text column fits.
fn infer_text_kind<'a>(cells: impl Iterator<Item = &'a str>) -> ColumnKind {
    let (mut all_int, mut all_float, mut all_bool, mut any) = (true, true, true, false);
    for cell in cells.filter(|c| !is_null_marker(c)) {
        any = true;
        let t = cell.trim();
        all_int &= t.parse::<i64>().is_ok();
        all_float &= t.parse::<f64>().is_ok();
        all_bool &= parse_bool(t).is_some();
        if !(all_int || all_float || all_bool) {
            return ColumnKind::Text;
        }
    }
    match (any, all_int, all_float, all_bool) {
        (false, ..) => ColumnKind::Empty,
        (_, true, _, _) => ColumnKind::Integer,
        (_, _, true, _) => ColumnKind::Float,
        (_, _, _, true) => ColumnKind::Bool,
        _ => ColumnKind::Text,
    }
}

fn parse_cell(s: &str, kind: ColumnKind) -> CellValue {
    if is_null_marker(s) {
        return CellValue::Null;
    }
    let t = s.trim();
    let typed = match kind {
        ColumnKind::Integer => t.parse().ok().map(CellValue::Integer),
        ColumnKind::Float => t.parse().ok().map(CellValue::Float),
        ColumnKind::Bool => parse_bool(t).map(CellValue::Bool),
        _ => None,
    };
    typed.unwrap_or_else(|| CellValue::Text(s.to_string()))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, as streaming-history exports are):
///
/// ```json
/// [
///   { "ts": "2023-01-05T10:00:00Z", "artist_name": "A", "ms_played": 1000 },
///   ...
/// ]
/// ```
///
/// Columns are the union of keys; records lacking a key get a null.
fn load_json(path: &Path) -> Result<ListeningDataset, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let root: JsonValue = serde_json::from_str(&text).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let records = root.as_array().ok_or_else(|| LoadError::Format {
        path: path.to_path_buf(),
        reason: "expected a top-level JSON array of records".to_string(),
    })?;

    let mut column_names: Vec<String> = Vec::new();
    let mut known: HashSet<&str> = HashSet::new();
    let objects: Vec<_> = records
        .iter()
        .enumerate()
        .filter_map(|(i, rec)| match rec.as_object() {
            Some(obj) => Some(obj),
            None => {
                warn!("Skipping record {i} of {}: not a JSON object", path.display());
                None
            }
        })
        .collect();

    for obj in &objects {
        for key in obj.keys() {
            if known.insert(key.as_str()) {
                column_names.push(key.clone());
            }
        }
    }

    let rows = objects
        .iter()
        .map(|obj| {
            column_names
                .iter()
                .map(|col| obj.get(col).map_or(CellValue::Null, json_to_cell))
                .collect()
        })
        .collect();

    Ok(ListeningDataset::from_rows(column_names, rows))
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::Text(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::Text(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::Text(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with a flat schema. Works with files written by both
/// **Pandas** (`df.to_parquet()`) and **Polars** (`df.write_parquet()`).
/// Nested or exotic column types are rendered to text.
fn load_parquet(path: &Path) -> Result<ListeningDataset, LoadError> {
    let parquet_err = |source| LoadError::Parquet {
        path: path.to_path_buf(),
        source,
    };

    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file).map_err(parquet_err)?;
    let column_names: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let reader = builder.build().map_err(parquet_err)?;

    let mut rows = Vec::new();
    for batch_result in reader {
        let batch = batch_result.map_err(|source| LoadError::Arrow {
            path: path.to_path_buf(),
            source,
        })?;
        for row in 0..batch.num_rows() {
            rows.push(
                batch
                    .columns()
                    .iter()
                    .map(|col| extract_cell(col, row))
                    .collect(),
            );
        }
    }

    Ok(ListeningDataset::from_rows(column_names, rows))
}

/// Extract a single cell from an Arrow column at a given row.
///
/// Every integer width maps to `Integer`; a `UInt64` too large for `i64`
/// becomes a `Float`.
fn extract_cell(col: &Arc<dyn Array>, row: usize) -> CellValue {
    if col.is_null(row) {
        return CellValue::Null;
    }
    let typed = match col.data_type() {
        DataType::Utf8 => col
            .as_string_opt::<i32>()
            .map(|a| CellValue::Text(a.value(row).to_string())),
        DataType::LargeUtf8 => col
            .as_string_opt::<i64>()
            .map(|a| CellValue::Text(a.value(row).to_string())),
        DataType::Int8 => col
            .as_primitive_opt::<Int8Type>()
            .map(|a| CellValue::Integer(a.value(row).into())),
        DataType::Int16 => col
            .as_primitive_opt::<Int16Type>()
            .map(|a| CellValue::Integer(a.value(row).into())),
        DataType::Int32 => col
            .as_primitive_opt::<Int32Type>()
            .map(|a| CellValue::Integer(a.value(row).into())),
        DataType::Int64 => col
            .as_primitive_opt::<Int64Type>()
            .map(|a| CellValue::Integer(a.value(row))),
        DataType::UInt8 => col
            .as_primitive_opt::<UInt8Type>()
            .map(|a| CellValue::Integer(a.value(row).into())),
        DataType::UInt16 => col
            .as_primitive_opt::<UInt16Type>()
            .map(|a| CellValue::Integer(a.value(row).into())),
        DataType::UInt32 => col
            .as_primitive_opt::<UInt32Type>()
            .map(|a| CellValue::Integer(a.value(row).into())),
        DataType::UInt64 => col.as_primitive_opt::<UInt64Type>().map(|a| {
            let v = a.value(row);
            i64::try_from(v).map_or(CellValue::Float(v as f64), CellValue::Integer)
        }),
        DataType::Float16 => col
            .as_primitive_opt::<Float16Type>()
            .map(|a| CellValue::Float(a.value(row).to_f64())),
        DataType::Float32 => col
            .as_primitive_opt::<Float32Type>()
            .map(|a| CellValue::Float(a.value(row).into())),
        DataType::Float64 => col
            .as_primitive_opt::<Float64Type>()
            .map(|a| CellValue::Float(a.value(row))),
        DataType::Boolean => col
            .as_boolean_opt()
            .map(|a| CellValue::Bool(a.value(row))),
        _ => None,
    };
    typed.unwrap_or_else(|| {
        arrow::util::display::array_value_to_string(col.as_ref(), row)
            .map(CellValue::Text)
            .unwrap_or(CellValue::Null)
    })
}

// ---------------------------------------------------------------------------
// Timestamp detection
// ---------------------------------------------------------------------------

/// Reinterpret every textual column whose name contains one of
/// [`TIMESTAMP_HINTS`] as timestamps. A column where any value fails to parse
/// is left as it was; numeric columns such as `ms_played` are never touched.
pub fn reinterpret_timestamps(dataset: &mut ListeningDataset) {
    for idx in 0..dataset.column_names.len() {
        let name = dataset.column_names[idx].clone();
        if !TIMESTAMP_HINTS.iter().any(|hint| name.contains(hint)) {
            continue;
        }
        if dataset.column_kinds[idx] != ColumnKind::Text {
            debug!(
                "Column '{name}' is {:?}, not reinterpreting as timestamps",
                dataset.column_kinds[idx]
            );
            continue;
        }

        let parsed: Option<Vec<CellValue>> = dataset
            .rows
            .iter()
            .map(|row| match &row[idx] {
                CellValue::Text(s) => parse_timestamp(s).map(CellValue::Timestamp),
                CellValue::Null => Some(CellValue::Null),
                _ => None,
            })
            .collect();

        match parsed {
            Some(cells) => {
                for (row, cell) in dataset.rows.iter_mut().zip(cells) {
                    row[idx] = cell;
                }
                dataset.column_kinds[idx] = ColumnKind::Timestamp;
                debug!("Column '{name}' parsed as timestamps");
            }
            None => debug!("Column '{name}' left as text: not every value is a timestamp"),
        }
    }
}

/// Parse the timestamp spellings found in listening exports. Offsets are
/// normalised to UTC; bare dates map to midnight.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    const FORMATS: [&str; 5] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use arrow::array::{
        ArrayRef, BooleanArray, Float64Array, Int16Array, Int8Array, StringArray, UInt32Array,
        UInt64Array,
    };
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;

    use crate::data::stats::total_listening_hours;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_csv_with_inferred_column_kinds() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "plays.csv",
            "artist_name,track_name,ms_played,play_hour,play_dayofweek\n\
             A,X,1000,8,Monday\n\
             A,Y,2000,9,Tuesday\n\
             B,X,,10,Monday\n",
        );

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.column_kind("artist_name"), Some(ColumnKind::Text));
        assert_eq!(ds.column_kind("ms_played"), Some(ColumnKind::Integer));
        assert_eq!(ds.column_kind("play_hour"), Some(ColumnKind::Integer));
        assert_eq!(ds.rows[2][2], CellValue::Null);
    }

    #[test]
    fn date_like_columns_become_timestamps() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "plays.csv",
            "played_at,end_time,artist_name\n\
             2023-01-05T10:00:00Z,2023-01-05 10:03:00,A\n\
             2023-01-06 08:30:00,2023-01-06,B\n",
        );

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.column_kind("played_at"), Some(ColumnKind::Timestamp));
        assert_eq!(ds.column_kind("end_time"), Some(ColumnKind::Timestamp));
        assert_eq!(ds.rows[1][1].to_string(), "2023-01-06 00:00:00");
        assert_eq!(ds.column_kind("artist_name"), Some(ColumnKind::Text));
    }

    #[test]
    fn unparseable_date_column_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "plays.csv",
            "release_date,ms_played\n2023-01-05,1000\nsometime in spring,2000\n",
        );

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.column_kind("release_date"), Some(ColumnKind::Text));
        assert_eq!(ds.rows[1][0], CellValue::Text("sometime in spring".into()));
        // `ms_played` matches the hint but stays numeric.
        assert_eq!(ds.column_kind("ms_played"), Some(ColumnKind::Integer));
    }

    #[test]
    fn ragged_rows_are_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "plays.csv", "artist_name,track_name\nA\nB,Y,extra\n");

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.rows[0][1], CellValue::Null);
        assert_eq!(ds.rows[1], vec![CellValue::Text("B".into()), CellValue::Text("Y".into())]);
    }

    #[test]
    fn tsv_and_duplicate_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "plays.tsv", "name\tname\nA\tB\n");

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.column_names, ["name", "name.1"]);
    }

    #[test]
    fn loads_json_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "history.json",
            r#"[
                {"ts": "2023-01-05T10:00:00Z", "artist_name": "A", "ms_played": 1000},
                {"ts": "2023-01-05T11:00:00Z", "artist_name": "B"},
                "not a record"
            ]"#,
        );

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.column_kind("ms_played"), Some(ColumnKind::Integer));
        assert_eq!(ds.column("ms_played").unwrap().nth(1), Some(&CellValue::Null));
        // `ts` does not carry a date/time hint, so it stays text.
        assert_eq!(ds.column_kind("ts"), Some(ColumnKind::Text));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }), "got {err:?}");
    }

    #[test]
    fn empty_file_has_no_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "empty.csv", "");
        assert!(matches!(load_file(&path), Err(LoadError::NoColumns { .. })));
    }

    #[test]
    fn json_root_must_be_an_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "history.json", r#"{"artist_name": "A"}"#);
        assert!(matches!(load_file(&path), Err(LoadError::Format { .. })));
    }

    fn write_parquet(dir: &tempfile::TempDir, name: &str, columns: Vec<(&str, ArrayRef)>) -> PathBuf {
        let path = dir.path().join(name);
        let batch = RecordBatch::try_from_iter(columns).unwrap();
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, batch.schema(), None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();
        path
    }

    #[test]
    fn parquet_unsigned_and_narrow_integers_stay_numeric() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_parquet(
            &dir,
            "plays.parquet",
            vec![
                ("track_name", Arc::new(StringArray::from(vec!["X", "Y"])) as ArrayRef),
                ("ms_played", Arc::new(UInt32Array::from(vec![3_600_000u32, 3_600_000])) as ArrayRef),
                ("play_hour", Arc::new(Int16Array::from(vec![8i16, 23])) as ArrayRef),
            ],
        );

        let ds = load_file(&path).unwrap();
        assert_eq!(
            ds.column_kinds,
            [ColumnKind::Text, ColumnKind::Integer, ColumnKind::Integer]
        );
        assert_eq!(ds.rows[1][2], CellValue::Integer(23));
        assert_eq!(
            total_listening_hours(&ds),
            crate::data::stats::Availability::Available(2.0)
        );
    }

    #[test]
    fn parquet_typed_columns_nulls_and_timestamps() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_parquet(
            &dir,
            "plays.parquet",
            vec![
                (
                    "played_at",
                    Arc::new(StringArray::from(vec![Some("2023-01-05T10:00:00Z"), None])) as ArrayRef,
                ),
                ("artist_name", Arc::new(StringArray::from(vec![Some("A"), None])) as ArrayRef),
                ("score", Arc::new(Float64Array::from(vec![Some(1.5), None])) as ArrayRef),
                ("skipped", Arc::new(BooleanArray::from(vec![true, false])) as ArrayRef),
                ("play_hour", Arc::new(Int8Array::from(vec![7i8, 9])) as ArrayRef),
                ("track_id", Arc::new(UInt64Array::from(vec![42u64, u64::MAX])) as ArrayRef),
            ],
        );

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.column_kind("played_at"), Some(ColumnKind::Timestamp));
        assert_eq!(ds.rows[0][0].to_string(), "2023-01-05 10:00:00");
        assert_eq!(ds.rows[1][0], CellValue::Null);
        assert_eq!(ds.rows[1][1], CellValue::Null);
        assert_eq!(ds.column_kind("score"), Some(ColumnKind::Float));
        assert_eq!(ds.rows[0][3], CellValue::Bool(true));
        assert_eq!(ds.rows[1][4], CellValue::Integer(9));
        assert_eq!(ds.rows[0][5], CellValue::Integer(42));
        assert_eq!(ds.rows[1][5], CellValue::Float(u64::MAX as f64));
        assert_eq!(ds.column_kind("track_id"), Some(ColumnKind::Float));
    }
}

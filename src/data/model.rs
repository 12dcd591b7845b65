use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the listening table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell mirroring the common dataframe dtypes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Timestamp(NaiveDateTime),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Timestamp(t) => write!(f, "{}", t.format("%Y-%m-%d %H:%M:%S")),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Interpret the value as an `f64` for summing durations.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// ColumnKind – inferred dtype of a whole column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Integer,
    Float,
    Bool,
    Text,
    Timestamp,
    /// Every cell is null.
    Empty,
}

impl ColumnKind {
    /// Infer the kind of a column from already-typed cells (JSON / Parquet).
    pub fn of_cells<'a>(cells: impl IntoIterator<Item = &'a CellValue>) -> Self {
        let mut kind = ColumnKind::Empty;
        for cell in cells {
            let cell_kind = match cell {
                CellValue::Null => continue,
                CellValue::Integer(_) => ColumnKind::Integer,
                CellValue::Float(_) => ColumnKind::Float,
                CellValue::Bool(_) => ColumnKind::Bool,
                CellValue::Text(_) => ColumnKind::Text,
                CellValue::Timestamp(_) => ColumnKind::Timestamp,
            };
            kind = match (kind, cell_kind) {
                (ColumnKind::Empty, k) => k,
                (a, b) if a == b => a,
                (ColumnKind::Integer, ColumnKind::Float) | (ColumnKind::Float, ColumnKind::Integer) => {
                    ColumnKind::Float
                }
                _ => ColumnKind::Text,
            };
        }
        kind
    }
}

// ---------------------------------------------------------------------------
// ListeningDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed listening history.
///
/// Every row holds exactly one cell per column. The column set is fixed once
/// the loader hands the dataset out; callers share it behind an `Arc` and
/// never mutate it.
#[derive(Debug, Clone)]
pub struct ListeningDataset {
    /// Column names in header order.
    pub column_names: Vec<String>,
    /// Inferred kind per column, parallel to `column_names`.
    pub column_kinds: Vec<ColumnKind>,
    /// Rows (listening records).
    pub rows: Vec<Vec<CellValue>>,
}

impl ListeningDataset {
    /// Build a dataset from typed rows, padding short rows with nulls and
    /// inferring each column's kind.
    pub fn from_rows(column_names: Vec<String>, mut rows: Vec<Vec<CellValue>>) -> Self {
        let width = column_names.len();
        for row in &mut rows {
            row.resize(width, CellValue::Null);
        }
        let column_kinds = (0..width)
            .map(|idx| ColumnKind::of_cells(rows.iter().map(|row| &row[idx])))
            .collect();
        ListeningDataset {
            column_names,
            column_kinds,
            rows,
        }
    }

    /// Number of listening records.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_names.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    #[cfg(test)]
    pub fn column_kind(&self, name: &str) -> Option<ColumnKind> {
        self.column_index(name).map(|idx| self.column_kinds[idx])
    }

    /// Iterate over one column's cells, or `None` if the column is absent.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &CellValue> + '_> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[idx]))
    }

    /// The first `n` rows, for the snapshot view.
    pub fn head(&self, n: usize) -> &[Vec<CellValue>] {
        &self.rows[..n.min(self.rows.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn short_rows_are_padded_with_nulls() {
        let ds = ListeningDataset::from_rows(
            vec!["artist_name".into(), "ms_played".into()],
            vec![vec![text("A"), CellValue::Integer(10)], vec![text("B")]],
        );
        assert_eq!(ds.rows[1], vec![text("B"), CellValue::Null]);
        assert_eq!(ds.column_kind("ms_played"), Some(ColumnKind::Integer));
    }

    #[test]
    fn mixed_numeric_columns_widen_to_float() {
        let cells = [CellValue::Integer(1), CellValue::Null, CellValue::Float(2.5)];
        assert_eq!(ColumnKind::of_cells(&cells), ColumnKind::Float);

        let cells = [CellValue::Integer(1), text("two")];
        assert_eq!(ColumnKind::of_cells(&cells), ColumnKind::Text);

        assert_eq!(ColumnKind::of_cells(&[CellValue::Null]), ColumnKind::Empty);
    }

    #[test]
    fn column_lookup_by_name() {
        let ds = ListeningDataset::from_rows(
            vec!["track_name".into()],
            vec![vec![text("X")], vec![text("Y")]],
        );
        let names: Vec<String> = ds.column("track_name").unwrap().map(|c| c.to_string()).collect();
        assert_eq!(names, ["X", "Y"]);
        assert!(ds.column("artist_name").is_none());
        assert_eq!(ds.head(10).len(), 2);
    }
}

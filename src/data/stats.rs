use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::ops::RangeInclusive;

use log::debug;
use serde::Serialize;

use super::model::{CellValue, ListeningDataset};

pub const ARTIST_COLUMN: &str = "artist_name";
pub const TRACK_COLUMN: &str = "track_name";
pub const MS_PLAYED_COLUMN: &str = "ms_played";
pub const HOUR_COLUMN: &str = "play_hour";
pub const DAY_COLUMN: &str = "play_dayofweek";

/// Rows shown in the top-artist and top-track tables.
pub const DEFAULT_TOP_N: usize = 20;
pub const DEFAULT_MIN_PLAYS: u32 = 2;
pub const MIN_PLAYS_RANGE: RangeInclusive<u32> = 1..=5;

const MS_PER_HOUR: f64 = 3_600_000.0;

// ---------------------------------------------------------------------------
// Availability – column-guarded results
// ---------------------------------------------------------------------------

/// Either a computed view or the list of required columns the dataset lacks.
/// "Unavailable" is never the same thing as an empty or zero result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability<T> {
    Available(T),
    Unavailable { missing: Vec<String> },
}

impl<T> Availability<T> {
    /// Run `compute` only if every column in `required` is present.
    fn require(
        dataset: &ListeningDataset,
        required: &[&str],
        compute: impl FnOnce() -> T,
    ) -> Self {
        let missing: Vec<String> = required
            .iter()
            .filter(|col| !dataset.has_column(col))
            .map(|col| col.to_string())
            .collect();
        if missing.is_empty() {
            Availability::Available(compute())
        } else {
            debug!("View unavailable, missing columns {missing:?}");
            Availability::Unavailable { missing }
        }
    }

    pub fn available(&self) -> Option<&T> {
        match self {
            Availability::Available(v) => Some(v),
            Availability::Unavailable { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Value counts and top lists
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayCount {
    pub name: String,
    pub plays: u64,
}

/// Count occurrences of each distinct value: most frequent first, equal
/// counts in order of first appearance.
pub fn rank_values<I, S>(values: I) -> Vec<PlayCount>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<PlayCount> = Vec::new();
    for value in values {
        let value = value.as_ref();
        match index.get(value) {
            Some(&i) => counts[i].plays += 1,
            None => {
                index.insert(value.to_string(), counts.len());
                counts.push(PlayCount {
                    name: value.to_string(),
                    plays: 1,
                });
            }
        }
    }
    // Stable sort keeps first-occurrence order within a count.
    counts.sort_by(|a, b| b.plays.cmp(&a.plays));
    counts
}

/// Ranked counts of a column's non-null values, or `None` if it is absent.
pub fn value_counts(dataset: &ListeningDataset, column: &str) -> Option<Vec<PlayCount>> {
    let cells = dataset.column(column)?;
    Some(rank_values(
        cells.filter(|c| !c.is_null()).map(CellValue::to_string),
    ))
}

/// Knobs for the top-artist / top-track tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopListOptions {
    /// Entries with fewer plays are dropped before truncation.
    pub min_plays: u32,
    pub limit: usize,
}

impl Default for TopListOptions {
    fn default() -> Self {
        Self {
            min_plays: DEFAULT_MIN_PLAYS,
            limit: DEFAULT_TOP_N,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopList {
    pub entries: Vec<PlayCount>,
    /// Most played value overall, `None` only for an all-null column.
    pub leader: Option<String>,
    /// Distinct values before thresholding and truncation.
    pub distinct: usize,
}

fn top_list(dataset: &ListeningDataset, column: &str, options: &TopListOptions) -> TopList {
    let counts = value_counts(dataset, column).unwrap_or_default();
    let leader = counts.first().map(|c| c.name.clone());
    let distinct = counts.len();
    let entries = counts
        .into_iter()
        .filter(|c| c.plays >= u64::from(options.min_plays))
        .take(options.limit)
        .collect();
    TopList {
        entries,
        leader,
        distinct,
    }
}

pub fn top_artists(dataset: &ListeningDataset, options: &TopListOptions) -> Availability<TopList> {
    Availability::require(dataset, &[ARTIST_COLUMN], || {
        top_list(dataset, ARTIST_COLUMN, options)
    })
}

pub fn top_tracks(dataset: &ListeningDataset, options: &TopListOptions) -> Availability<TopList> {
    Availability::require(dataset, &[TRACK_COLUMN], || {
        top_list(dataset, TRACK_COLUMN, options)
    })
}

// ---------------------------------------------------------------------------
// Hour × day heatmap
// ---------------------------------------------------------------------------

/// Weekday in canonical Monday-first order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }

    /// 0 for Monday through 6 for Sunday.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Exact, case-sensitive match on the full English name.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|day| day.name() == s)
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeatCell {
    pub day: DayOfWeek,
    pub hour: u8,
    pub plays: u64,
}

/// Sparse play counts per (day, hour); empty slots are simply absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heatmap {
    /// Ordered Monday..Sunday, then hour 0..23.
    pub cells: Vec<HeatCell>,
    /// Rows whose day or hour could not be read.
    pub skipped_rows: usize,
}

impl Heatmap {
    pub fn max_plays(&self) -> u64 {
        self.cells.iter().map(|c| c.plays).max().unwrap_or(0)
    }
}

fn hour_of(cell: &CellValue) -> Option<u8> {
    let hour = match cell {
        CellValue::Integer(i) => *i,
        CellValue::Float(f) if f.fract() == 0.0 => *f as i64,
        CellValue::Text(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    (0..=23).contains(&hour).then_some(hour as u8)
}

fn day_of(cell: &CellValue) -> Option<DayOfWeek> {
    match cell {
        CellValue::Text(s) => DayOfWeek::parse(s),
        _ => None,
    }
}

pub fn hour_day_heatmap(dataset: &ListeningDataset) -> Availability<Heatmap> {
    Availability::require(dataset, &[HOUR_COLUMN, DAY_COLUMN], || {
        let mut counts: BTreeMap<(DayOfWeek, u8), u64> = BTreeMap::new();
        let mut skipped_rows = 0;
        if let (Some(days), Some(hours)) = (dataset.column(DAY_COLUMN), dataset.column(HOUR_COLUMN)) {
            for (day, hour) in days.zip(hours) {
                match (day_of(day), hour_of(hour)) {
                    (Some(d), Some(h)) => *counts.entry((d, h)).or_default() += 1,
                    _ => skipped_rows += 1,
                }
            }
        }
        if skipped_rows > 0 {
            debug!("Heatmap skipped {skipped_rows} rows with unreadable day/hour");
        }
        Heatmap {
            cells: counts
                .into_iter()
                .map(|((day, hour), plays)| HeatCell { day, hour, plays })
                .collect(),
            skipped_rows,
        }
    })
}

// ---------------------------------------------------------------------------
// Mini stats
// ---------------------------------------------------------------------------

pub fn total_plays(dataset: &ListeningDataset) -> usize {
    dataset.len()
}

/// Sum of `ms_played` in hours, rounded to two decimals. Non-numeric cells
/// are ignored; no numeric cells gives `0.0`.
pub fn total_listening_hours(dataset: &ListeningDataset) -> Availability<f64> {
    Availability::require(dataset, &[MS_PLAYED_COLUMN], || {
        let total_ms: f64 = dataset
            .column(MS_PLAYED_COLUMN)
            .into_iter()
            .flatten()
            .filter_map(CellValue::as_f64)
            .fold(0.0, |acc, ms| acc + ms);
        round2(total_ms / MS_PER_HOUR)
    })
}

pub fn unique_tracks(dataset: &ListeningDataset) -> Availability<usize> {
    Availability::require(dataset, &[TRACK_COLUMN], || {
        dataset
            .column(TRACK_COLUMN)
            .into_iter()
            .flatten()
            .filter(|c| !c.is_null())
            .map(CellValue::to_string)
            .collect::<HashSet<_>>()
            .len()
    })
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

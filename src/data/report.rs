use serde::Serialize;

use super::model::{CellValue, ListeningDataset};
use super::mood::{mood_playlist, Mood, DEFAULT_PLAYLIST_LEN};
use super::stats::{
    hour_day_heatmap, top_artists, top_tracks, total_listening_hours, total_plays,
    unique_tracks, Availability, Heatmap, TopList, TopListOptions, DEFAULT_MIN_PLAYS,
    DEFAULT_TOP_N,
};

/// Rows shown in the dataset snapshot.
pub const PREVIEW_ROWS: usize = 5;

/// Everything the user can adjust between recomputations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardInputs {
    pub min_plays: u32,
    pub mood: Mood,
    pub playlist_len: usize,
    pub top_n: usize,
}

impl Default for DashboardInputs {
    fn default() -> Self {
        Self {
            min_plays: DEFAULT_MIN_PLAYS,
            mood: Mood::default(),
            playlist_len: DEFAULT_PLAYLIST_LEN,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl DashboardInputs {
    fn top_list_options(&self) -> TopListOptions {
        TopListOptions {
            min_plays: self.min_plays,
            limit: self.top_n,
        }
    }
}

/// One full recomputation of every dashboard view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub columns: Vec<String>,
    pub preview: Vec<Vec<CellValue>>,
    pub top_artists: Availability<TopList>,
    pub top_tracks: Availability<TopList>,
    pub heatmap: Availability<Heatmap>,
    pub mood: Mood,
    pub playlist: Vec<String>,
    pub total_plays: usize,
    pub total_hours: Availability<f64>,
    pub unique_tracks: Availability<usize>,
}

impl DashboardReport {
    pub fn build(dataset: &ListeningDataset, inputs: &DashboardInputs) -> Self {
        let options = inputs.top_list_options();
        DashboardReport {
            columns: dataset.column_names.clone(),
            preview: dataset.head(PREVIEW_ROWS).to_vec(),
            top_artists: top_artists(dataset, &options),
            top_tracks: top_tracks(dataset, &options),
            heatmap: hour_day_heatmap(dataset),
            mood: inputs.mood,
            playlist: mood_playlist(dataset, inputs.mood, inputs.playlist_len),
            total_plays: total_plays(dataset),
            total_hours: total_listening_hours(dataset),
            unique_tracks: unique_tracks(dataset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dataset() -> ListeningDataset {
        let rows = (0..8)
            .map(|i| {
                vec![
                    CellValue::Text(if i % 2 == 0 { "A" } else { "B" }.to_string()),
                    CellValue::Integer(900_000),
                ]
            })
            .collect();
        ListeningDataset::from_rows(vec!["artist_name".into(), "ms_played".into()], rows)
    }

    #[test]
    fn report_reflects_inputs() {
        let ds = dataset();
        let report = DashboardReport::build(&ds, &DashboardInputs::default());

        assert_eq!(report.preview.len(), PREVIEW_ROWS);
        assert_eq!(report.total_plays, 8);
        assert_eq!(report.total_hours, Availability::Available(2.0));
        assert!(report.playlist.is_empty());
        assert!(report.top_tracks.available().is_none());

        let strict = DashboardInputs {
            min_plays: 5,
            ..Default::default()
        };
        let report = DashboardReport::build(&ds, &strict);
        assert!(report.top_artists.available().unwrap().entries.is_empty());
    }

    #[test]
    fn unavailable_views_serialize_distinctly() {
        let report = DashboardReport::build(&dataset(), &DashboardInputs::default());
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(
            value["unique_tracks"],
            json!({ "unavailable": { "missing": ["track_name"] } })
        );
        assert_eq!(value["total_hours"], json!({ "available": 2.0 }));
        assert_eq!(value["mood"], json!("Chill"));
        assert_eq!(value["preview"][0], json!(["A", 900000]));
    }
}

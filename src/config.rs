use std::path::PathBuf;

use clap::Parser;

use crate::data::mood::{Mood, DEFAULT_PLAYLIST_LEN};
use crate::data::report::DashboardInputs;
use crate::data::stats::{DEFAULT_MIN_PLAYS, DEFAULT_TOP_N};

pub const DEFAULT_DATASET_PATH: &str = "data/full_clean_spotify_data.csv";

/// Explore a Spotify listening-history export.
#[derive(Debug, Parser)]
#[command(name = "spotify-analyzer", version, about)]
pub struct Cli {
    /// Listening history to load (.csv, .tsv, .json or .parquet)
    #[arg(value_name = "DATASET", env = "SPOTIFY_ANALYZER_DATA", default_value = DEFAULT_DATASET_PATH)]
    pub dataset: PathBuf,

    /// Print the dashboard as JSON instead of opening a window
    #[arg(long)]
    pub summary: bool,

    /// Mood used for the playlist
    #[arg(long, value_enum, default_value_t = Mood::Chill)]
    pub mood: Mood,

    /// Minimum plays for an entry to appear in the top lists
    #[arg(long, default_value_t = DEFAULT_MIN_PLAYS, value_parser = clap::value_parser!(u32).range(1..=5))]
    pub min_plays: u32,

    /// Number of tracks in the mood playlist
    #[arg(long, default_value_t = DEFAULT_PLAYLIST_LEN)]
    pub playlist_len: usize,

    /// Rows in the top-artist and top-track tables
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    pub top: usize,
}

impl Cli {
    pub fn inputs(&self) -> DashboardInputs {
        DashboardInputs {
            min_plays: self.min_plays,
            mood: self.mood,
            playlist_len: self.playlist_len,
            top_n: self.top,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_dashboard_defaults() {
        let cli = Cli::try_parse_from(["spotify-analyzer", "plays.csv"]).unwrap();
        assert_eq!(cli.dataset, PathBuf::from("plays.csv"));
        assert_eq!(cli.inputs(), DashboardInputs::default());
        assert!(!cli.summary);
    }

    #[test]
    fn flags_override_inputs() {
        let cli = Cli::try_parse_from([
            "spotify-analyzer",
            "plays.csv",
            "--summary",
            "--mood",
            "focus",
            "--min-plays",
            "4",
        ])
        .unwrap();
        assert!(cli.summary);
        assert_eq!(cli.inputs().mood, Mood::Focus);
        assert_eq!(cli.inputs().min_plays, 4);
    }

    #[test]
    fn min_plays_outside_slider_range_is_rejected() {
        assert!(Cli::try_parse_from(["spotify-analyzer", "--min-plays", "9"]).is_err());
    }
}

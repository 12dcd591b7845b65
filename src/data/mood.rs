use std::fmt;
use std::hash::Hasher;

use fnv::FnvHasher;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;

use super::model::{CellValue, ListeningDataset};
use super::stats::{rank_values, TRACK_COLUMN};

pub const DEFAULT_PLAYLIST_LEN: usize = 10;

/// The moods offered by the playlist generator. Purely a shuffle seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
pub enum Mood {
    #[default]
    Chill,
    Energetic,
    Sad,
    Romantic,
    Focus,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Chill,
        Mood::Energetic,
        Mood::Sad,
        Mood::Romantic,
        Mood::Focus,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Mood::Chill => "Chill",
            Mood::Energetic => "Energetic",
            Mood::Sad => "Sad",
            Mood::Romantic => "Romantic",
            Mood::Focus => "Focus",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Stable 64-bit seed for a mood label (FNV-1a).
pub fn mood_seed(mood: &str) -> u64 {
    let mut hasher = FnvHasher::default();
    hasher.write(mood.as_bytes());
    hasher.finish()
}

/// Shuffle `pool` with the mood's seed and keep the first `limit` entries.
pub fn shuffle_for_mood(mut pool: Vec<String>, mood: &str, limit: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(mood_seed(mood));
    pool.shuffle(&mut rng);
    pool.truncate(limit);
    pool
}

/// Build a playlist from every played track name (repeats included).
///
/// The candidate pool is the distinct names, most played first; the same
/// mood always yields the same playlist for the same input.
pub fn pick<I, S>(track_names: I, mood: &str, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let pool = rank_values(track_names).into_iter().map(|c| c.name).collect();
    shuffle_for_mood(pool, mood, limit)
}

/// Playlist for `mood` drawn from the dataset's `track_name` column. Empty
/// when the column is absent.
pub fn mood_playlist(dataset: &ListeningDataset, mood: Mood, limit: usize) -> Vec<String> {
    match dataset.column(TRACK_COLUMN) {
        Some(cells) => pick(
            cells.filter(|c| !c.is_null()).map(CellValue::to_string),
            mood.label(),
            limit,
        ),
        None => Vec::new(),
    }
}

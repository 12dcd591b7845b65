use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{error, info, warn};

use crate::data::cache::DatasetCache;
use crate::data::model::ListeningDataset;
use crate::data::mood::Mood;
use crate::data::report::{DashboardInputs, DashboardReport};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Parsed datasets, one per path.
    pub cache: DatasetCache,

    /// Path of the dataset currently shown.
    pub dataset_path: PathBuf,

    /// Loaded dataset (None when the last load failed).
    pub dataset: Option<Arc<ListeningDataset>>,

    /// Slider and selector values.
    pub inputs: DashboardInputs,

    /// Views recomputed after every input change.
    pub report: Option<DashboardReport>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Create the state and load the startup dataset.
    pub fn new(cache: DatasetCache, dataset_path: PathBuf, inputs: DashboardInputs) -> Self {
        let mut state = Self {
            cache,
            dataset_path: dataset_path.clone(),
            dataset: None,
            inputs,
            report: None,
            status_message: None,
        };
        state.load(&dataset_path);
        state
    }

    /// Switch to the dataset at `path`. A failed load leaves no dataset.
    pub fn load(&mut self, path: &Path) {
        self.dataset_path = path.to_path_buf();
        match self.cache.get_or_load(path) {
            Ok(dataset) => {
                if dataset.is_empty() {
                    warn!("{} has a header but no plays", path.display());
                } else {
                    info!("Showing {} plays from {}", dataset.len(), path.display());
                }
                self.dataset = Some(dataset);
                self.status_message = None;
            }
            Err(e) => {
                error!("Failed to load dataset: {e}");
                self.dataset = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
        self.refresh();
    }

    /// Drop the cached copy of the current file and read it again.
    pub fn reload(&mut self) {
        let path = self.dataset_path.clone();
        self.cache.invalidate(&path);
        self.load(&path);
    }

    /// Recompute every view from the current dataset and inputs.
    pub fn refresh(&mut self) {
        self.report = self
            .dataset
            .as_ref()
            .map(|ds| DashboardReport::build(ds, &self.inputs));
    }

    pub fn set_min_plays(&mut self, min_plays: u32) {
        if self.inputs.min_plays != min_plays {
            self.inputs.min_plays = min_plays;
            self.refresh();
        }
    }

    pub fn set_mood(&mut self, mood: Mood) {
        if self.inputs.mood != mood {
            self.inputs.mood = mood;
            self.refresh();
        }
    }
}

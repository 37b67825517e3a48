use std::path::{Path, PathBuf};

use crate::chart::Panels;
use crate::config::ChartLayout;
use crate::data::coerce::NumericPolicy;
use crate::data::loader;
use crate::data::model::RawDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// File the dataset came from.
    pub source: Option<PathBuf>,

    /// Loaded text table (None until a file is loaded).
    pub dataset: Option<RawDataset>,

    /// Both panels built from `dataset` (cached).
    pub panels: Option<Panels>,

    /// How unparseable numbers are treated.
    pub policy: NumericPolicy,

    pub layout: ChartLayout,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Load a file and build both panels; failures end up in the status line.
    pub fn load(&mut self, path: &Path) {
        match loader::load_file(path) {
            Ok(dataset) => self.set_dataset(path.to_path_buf(), dataset),
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Ingest a newly loaded dataset and run both pipelines on it.
    pub fn set_dataset(&mut self, source: PathBuf, dataset: RawDataset) {
        self.source = Some(source);
        self.dataset = Some(dataset);
        self.status_message = None;
        self.rebuild();
    }

    /// Re-run both pipelines over the current dataset.
    pub fn rebuild(&mut self) {
        self.panels = self
            .dataset
            .as_ref()
            .map(|ds| Panels::build(ds, &self.layout, self.policy));
    }

    /// Switch between strict and lenient number parsing.
    pub fn set_policy(&mut self, policy: NumericPolicy) {
        if self.policy != policy {
            self.policy = policy;
            self.rebuild();
        }
    }

    /// Number of loaded rows.
    pub fn row_count(&self) -> usize {
        self.dataset.as_ref().map_or(0, RawDataset::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_csv_reader;

    #[test]
    fn toggling_the_policy_rebuilds_the_panels() {
        let raw = load_csv_reader(
            "PetalLength,PetalWidth,Species\n1.4,0.2,Iris-setosa\n?,1.3,Iris-versicolor\n".as_bytes(),
        )
        .unwrap();
        let mut state = AppState::default();
        state.set_dataset(PathBuf::from("inline.csv"), raw);

        assert_eq!(state.row_count(), 2);
        let panels = state.panels.as_ref().unwrap();
        assert!(panels.scatter.is_err());
        assert!(panels.boxplot.is_err());

        state.set_policy(NumericPolicy::Lenient);
        let panels = state.panels.as_ref().unwrap();
        assert_eq!(panels.scatter.as_ref().unwrap().circles().count(), 1);
        assert!(panels.boxplot.is_ok());
    }

    #[test]
    fn load_failure_is_reported_in_the_status_line() {
        let mut state = AppState::default();
        state.load(Path::new("does-not-exist.csv"));
        assert!(state.dataset.is_none());
        assert!(state.status_message.unwrap().starts_with("Error:"));
    }
}

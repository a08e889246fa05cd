use crate::config::TrackerConfig;
use crate::daily::SystemEntropy;
use crate::storage::LocalStore;
use crate::widget::GoalsPanel;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Everything a request may read-modify-write, guarded by one lock.
pub struct WidgetData {
    pub store: LocalStore,
    pub panel: Option<GoalsPanel>,
    pub rng: SystemEntropy,
}

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub config: Arc<TrackerConfig>,
    pub data: Arc<Mutex<WidgetData>>,
}

impl AppState {
    pub fn new(
        data_path: PathBuf,
        config: TrackerConfig,
        store: LocalStore,
        panel: Option<GoalsPanel>,
    ) -> Self {
        Self {
            data_path,
            config: Arc::new(config),
            data: Arc::new(Mutex::new(WidgetData {
                store,
                panel,
                rng: SystemEntropy::new(),
            })),
        }
    }
}

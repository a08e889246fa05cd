pub mod app;
pub mod balance;
pub mod config;
pub mod daily;
pub mod errors;
pub mod handlers;
pub mod input;
pub mod models;
pub mod render;
pub mod state;
pub mod storage;
pub mod ui;
pub mod widget;

pub use app::router;
pub use config::TrackerConfig;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path, KeyValueStore, LocalStore};

pub mod app;
pub mod errors;
pub mod export;
pub mod handlers;
pub mod insights;
pub mod models;
pub mod service;
pub mod state;
pub mod stats;
pub mod storage;
pub mod store;
pub mod sync;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::resolve_data_path;
pub use store::AttendanceStore;

use crate::insights::InsightClient;
use crate::store::AttendanceStore;
use crate::sync::MirrorClient;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<AttendanceStore>>,
    pub mirror: MirrorClient,
    pub insights: InsightClient,
}

impl AppState {
    pub fn new(store: AttendanceStore, mirror: MirrorClient, insights: InsightClient) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            mirror,
            insights,
        }
    }
}

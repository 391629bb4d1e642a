use crate::errors::AppError;
use crate::models::{AttendanceStatus, NewEntry, SaveResponse};
use crate::store::AttendanceStore;
use crate::sync::MirrorClient;
use tokio::sync::Mutex;
use tracing::warn;

const SYNC_FAILED_MESSAGE: &str = "Connection error. Data saved on your device.";

/// Save an attendance entry: local write first, then one best-effort push to
/// the sheet webhook. The local write is the durability boundary; if it
/// fails nothing is pushed and the whole call errors. A failed push is
/// reported as `success: false` but the entry is already on disk.
pub async fn save_attendance(
    store: &Mutex<AttendanceStore>,
    mirror: &MirrorClient,
    input: NewEntry,
) -> Result<SaveResponse, AppError> {
    let input = normalize(input)?;

    let entry = {
        let mut store = store.lock().await;
        store.upsert(input).await?
    };

    match mirror.push(&entry).await {
        Ok(_) => Ok(SaveResponse {
            success: true,
            error: None,
        }),
        Err(err) => {
            warn!(date = %entry.date, "{err}");
            Ok(SaveResponse {
                success: false,
                error: Some(SYNC_FAILED_MESSAGE.to_string()),
            })
        }
    }
}

fn normalize(mut input: NewEntry) -> Result<NewEntry, AppError> {
    if let Some(hours) = input.hours_worked {
        if !(1.0..=24.0).contains(&hours) {
            return Err(AppError::bad_request("hoursWorked must be between 1 and 24"));
        }
    }
    if input.status != AttendanceStatus::Working {
        // Visit details only make sense on a working day; values left over
        // from a previous submission are dropped, not stored.
        input.place_visit = None;
        input.purpose_visit = None;
    }
    Ok(input)
}

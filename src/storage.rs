use crate::errors::StoreError;
use crate::models::AttendanceEntry;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("ATTENDANCE_DATA_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/attendance.json")
}

/// The durable blob is a pretty-printed JSON array of entries, the same shape
/// the sheet webhook receives per entry.
pub fn encode_entries(entries: &[AttendanceEntry]) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec_pretty(entries).map_err(|err| StoreError::Persistence(err.to_string()))
}

/// Empty or whitespace-only input means "nothing stored yet" and decodes to
/// an empty sequence. Anything else must be a well-formed entry array.
pub fn decode_entries(bytes: &[u8]) -> Result<Vec<AttendanceEntry>, StoreError> {
    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(Vec::new());
    }
    serde_json::from_slice(bytes).map_err(|err| StoreError::Corrupt(err.to_string()))
}

/// A missing or unreadable or corrupt file degrades to an empty collection;
/// startup never fails on bad data, it only logs.
pub async fn load_entries(path: &Path) -> Vec<AttendanceEntry> {
    match fs::read(path).await {
        Ok(bytes) => match decode_entries(&bytes) {
            Ok(entries) => entries,
            Err(err) => {
                error!("failed to decode attendance file, starting empty: {err}");
                Vec::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(err) => {
            error!("failed to read attendance file: {err}");
            Vec::new()
        }
    }
}

pub async fn persist_entries(path: &Path, entries: &[AttendanceEntry]) -> Result<(), StoreError> {
    let payload = encode_entries(entries)?;
    fs::write(path, payload)
        .await
        .map_err(|err| StoreError::Persistence(err.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceStatus;
    use chrono::NaiveDate;

    fn entry(day: u32, status: AttendanceStatus, hours: Option<f64>) -> AttendanceEntry {
        AttendanceEntry {
            id: format!("id-{day}"),
            date: NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
            status,
            place_visit: (status == AttendanceStatus::Working).then(|| format!("Site {day}")),
            purpose_visit: (status == AttendanceStatus::Working)
                .then(|| format!("Inspection round {day}")),
            hours_worked: hours,
        }
    }

    #[test]
    fn codec_round_trips_entry_sequences() {
        let sequences = vec![
            vec![],
            vec![entry(1, AttendanceStatus::Working, Some(8.0))],
            vec![
                entry(2, AttendanceStatus::Working, Some(7.5)),
                entry(3, AttendanceStatus::Leave, None),
                entry(4, AttendanceStatus::Holiday, None),
                entry(5, AttendanceStatus::Working, None),
            ],
        ];

        for entries in sequences {
            let encoded = encode_entries(&entries).expect("encode");
            let decoded = decode_entries(&encoded).expect("decode");
            assert_eq!(decoded, entries);
        }
    }

    #[test]
    fn decode_of_empty_input_is_empty() {
        assert_eq!(decode_entries(b"").unwrap(), vec![]);
        assert_eq!(decode_entries(b"  \n ").unwrap(), vec![]);
    }

    #[test]
    fn decode_of_garbage_is_corrupt() {
        let err = decode_entries(b"{not json").unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
    }

    #[tokio::test]
    async fn load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let entries = load_entries(&dir.path().join("nope.json")).await;
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn load_corrupt_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attendance.json");
        tokio::fs::write(&path, b"][").await.unwrap();
        let entries = load_entries(&path).await;
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn persist_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attendance.json");
        let entries = vec![
            entry(10, AttendanceStatus::Working, Some(8.0)),
            entry(11, AttendanceStatus::Leave, None),
        ];
        persist_entries(&path, &entries).await.unwrap();
        assert_eq!(load_entries(&path).await, entries);
    }
}

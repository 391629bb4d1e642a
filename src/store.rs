use crate::errors::StoreError;
use crate::models::{AttendanceEntry, NewEntry};
use crate::storage::{load_entries, persist_entries};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::path::PathBuf;
use uuid::Uuid;

/// Date-keyed attendance collection backed by a single JSON file. Loaded once
/// at startup; every mutation rewrites the whole file before it is visible in
/// memory, so a failed write leaves both sides unchanged.
pub struct AttendanceStore {
    path: PathBuf,
    entries: BTreeMap<NaiveDate, AttendanceEntry>,
}

impl AttendanceStore {
    pub async fn load(path: PathBuf) -> Self {
        let mut entries = BTreeMap::new();
        for entry in load_entries(&path).await {
            entries.insert(entry.date, entry);
        }
        Self { path, entries }
    }

    /// Date-ordered snapshot of all entries.
    pub fn entries(&self) -> Vec<AttendanceEntry> {
        self.entries.values().cloned().collect()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&AttendanceEntry> {
        self.entries.get(&date)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or replace the entry for `new.date`. A resave of an existing
    /// date keeps that entry's id and overwrites every other field; there is
    /// no field-level merge. The updated collection is persisted in full
    /// before this returns.
    pub async fn upsert(&mut self, new: NewEntry) -> Result<AttendanceEntry, StoreError> {
        let id = match self.entries.get(&new.date) {
            Some(existing) => existing.id.clone(),
            None => Uuid::new_v4().to_string(),
        };
        let entry = AttendanceEntry {
            id,
            date: new.date,
            status: new.status,
            place_visit: new.place_visit,
            purpose_visit: new.purpose_visit,
            hours_worked: new.hours_worked,
        };

        let mut updated = self.entries.clone();
        updated.insert(entry.date, entry.clone());
        let snapshot: Vec<AttendanceEntry> = updated.values().cloned().collect();
        persist_entries(&self.path, &snapshot).await?;

        self.entries = updated;
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceStatus;

    fn new_entry(date: NaiveDate, status: AttendanceStatus) -> NewEntry {
        NewEntry {
            date,
            status,
            place_visit: Some("Client HQ".to_string()),
            purpose_visit: Some("Quarterly review".to_string()),
            hours_worked: Some(8.0),
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, day).unwrap()
    }

    #[tokio::test]
    async fn upsert_assigns_distinct_ids_per_date() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = AttendanceStore::load(dir.path().join("attendance.json")).await;

        let first = store
            .upsert(new_entry(date(3), AttendanceStatus::Working))
            .await
            .unwrap();
        let second = store
            .upsert(new_entry(date(4), AttendanceStatus::Working))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn resave_of_a_date_keeps_id_and_replaces_fields() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = AttendanceStore::load(dir.path().join("attendance.json")).await;

        let first = store
            .upsert(new_entry(date(5), AttendanceStatus::Working))
            .await
            .unwrap();
        let replacement = NewEntry {
            date: date(5),
            status: AttendanceStatus::Leave,
            place_visit: None,
            purpose_visit: None,
            hours_worked: None,
        };
        let second = store.upsert(replacement).await.unwrap();

        assert_eq!(second.id, first.id);
        assert_eq!(store.len(), 1);
        let stored = store.get(date(5)).unwrap();
        assert_eq!(stored.status, AttendanceStatus::Leave);
        assert_eq!(stored.place_visit, None);
        assert_eq!(stored.hours_worked, None);
    }

    #[tokio::test]
    async fn upsert_persists_before_returning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attendance.json");

        let mut store = AttendanceStore::load(path.clone()).await;
        let saved = store
            .upsert(new_entry(date(6), AttendanceStatus::Working))
            .await
            .unwrap();
        drop(store);

        let reloaded = AttendanceStore::load(path).await;
        assert_eq!(reloaded.entries(), vec![saved]);
    }

    #[tokio::test]
    async fn failed_write_leaves_store_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        // The data path is a directory, so the write itself must fail.
        let mut store = AttendanceStore::load(dir.path().to_path_buf()).await;

        let err = store
            .upsert(new_entry(date(7), AttendanceStatus::Working))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Persistence(_)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn load_of_empty_path_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = AttendanceStore::load(dir.path().join("attendance.json")).await;
        assert!(store.is_empty());
        assert!(store.entries().is_empty());
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Working,
    Leave,
    Holiday,
}

impl AttendanceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Working => "working",
            Self::Leave => "leave",
            Self::Holiday => "holiday",
        }
    }
}

/// One day of attendance. `date` is the natural key; the store holds at most
/// one entry per date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEntry {
    pub id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_visit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose_visit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_worked: Option<f64>,
}

/// An entry as submitted by the client, before the store has assigned an id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub place_visit: Option<String>,
    #[serde(default)]
    pub purpose_visit: Option<String>,
    #[serde(default)]
    pub hours_worked: Option<f64>,
}

/// Outcome of a save. `success` reflects the sheet sync, not local
/// durability; a `false` here still means the entry is on disk.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStats {
    pub working_days: u64,
    pub leave_days: u64,
    pub holiday_days: u64,
    pub total_hours: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InsightsResponse {
    pub insights: String,
}

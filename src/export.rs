use crate::models::AttendanceEntry;
use chrono::NaiveDate;

const HEADERS: [&str; 5] = ["Date", "Status", "Place of Visit", "Purpose", "Hours Worked"];

/// One row per entry. Only the purpose column is quoted (it is free text and
/// may contain commas or quotes); internal quotes are doubled. Missing hours
/// are exported as 0, matching the sheet column.
pub fn to_csv(entries: &[AttendanceEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(HEADERS.join(","));
    for entry in entries {
        let purpose = entry
            .purpose_visit
            .as_deref()
            .unwrap_or("")
            .replace('"', "\"\"");
        lines.push(format!(
            "{},{},{},\"{}\",{}",
            entry.date,
            entry.status.as_str(),
            entry.place_visit.as_deref().unwrap_or(""),
            purpose,
            format_hours(entry.hours_worked),
        ));
    }
    lines.join("\n")
}

pub fn export_filename(today: NaiveDate) -> String {
    format!("attendance_report_{today}.csv")
}

fn format_hours(hours: Option<f64>) -> String {
    let value = hours.unwrap_or(0.0);
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceStatus;

    fn entry(purpose: Option<&str>) -> AttendanceEntry {
        AttendanceEntry {
            id: "id-1".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 20).unwrap(),
            status: AttendanceStatus::Working,
            place_visit: Some("Client HQ".to_string()),
            purpose_visit: purpose.map(str::to_string),
            hours_worked: Some(8.0),
        }
    }

    #[test]
    fn header_row_comes_first() {
        let csv = to_csv(&[]);
        assert_eq!(csv, "Date,Status,Place of Visit,Purpose,Hours Worked");
    }

    #[test]
    fn internal_quotes_in_purpose_are_doubled() {
        let csv = to_csv(&[entry(Some("He said \"go\""))]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "2026-08-20,working,Client HQ,\"He said \"\"go\"\"\",8"
        );
    }

    #[test]
    fn missing_fields_export_as_empty_and_zero() {
        let leave = AttendanceEntry {
            id: "id-2".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 21).unwrap(),
            status: AttendanceStatus::Leave,
            place_visit: None,
            purpose_visit: None,
            hours_worked: None,
        };
        let csv = to_csv(&[leave]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "2026-08-21,leave,,\"\",0");
    }

    #[test]
    fn fractional_hours_keep_their_fraction() {
        let mut e = entry(Some("Survey"));
        e.hours_worked = Some(7.5);
        let csv = to_csv(&[e]);
        assert!(csv.lines().nth(1).unwrap().ends_with(",7.5"));
    }

    #[test]
    fn filename_carries_the_export_date() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert_eq!(export_filename(today), "attendance_report_2026-08-30.csv");
    }
}

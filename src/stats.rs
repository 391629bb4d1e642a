use crate::models::{AttendanceEntry, AttendanceStatus, DerivedStats};

/// Counts by status plus total logged hours. Pure and recomputed per call so
/// it always reflects the current store contents.
pub fn compute_stats(entries: &[AttendanceEntry]) -> DerivedStats {
    let mut stats = DerivedStats::default();
    for entry in entries {
        match entry.status {
            AttendanceStatus::Working => stats.working_days += 1,
            AttendanceStatus::Leave => stats.leave_days += 1,
            AttendanceStatus::Holiday => stats.holiday_days += 1,
        }
        stats.total_hours += entry.hours_worked.unwrap_or(0.0);
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(day: u32, status: AttendanceStatus, hours: Option<f64>) -> AttendanceEntry {
        AttendanceEntry {
            id: format!("id-{day}"),
            date: NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
            status,
            place_visit: None,
            purpose_visit: None,
            hours_worked: hours,
        }
    }

    #[test]
    fn stats_count_each_status_and_sum_hours() {
        let entries = vec![
            entry(1, AttendanceStatus::Working, Some(8.0)),
            entry(2, AttendanceStatus::Leave, None),
            entry(3, AttendanceStatus::Holiday, None),
        ];

        let stats = compute_stats(&entries);
        assert_eq!(stats.working_days, 1);
        assert_eq!(stats.leave_days, 1);
        assert_eq!(stats.holiday_days, 1);
        assert_eq!(stats.total_hours, 8.0);
    }

    #[test]
    fn stats_of_empty_store_are_zero() {
        assert_eq!(compute_stats(&[]), DerivedStats::default());
    }

    #[test]
    fn missing_hours_count_as_zero() {
        let entries = vec![
            entry(4, AttendanceStatus::Working, Some(7.5)),
            entry(5, AttendanceStatus::Working, None),
            entry(6, AttendanceStatus::Working, Some(4.0)),
        ];

        let stats = compute_stats(&entries);
        assert_eq!(stats.working_days, 3);
        assert_eq!(stats.total_hours, 11.5);
    }
}

use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{
    client::ApiClient,
    types::{ApiError, AttendanceCategory, AttendanceRecord},
};

pub const ATTENDANCE_DAYS: usize = 30;
pub const MAX_DAILY_MAGNITUDE: u8 = 9;

/// Filter labels currently selected on the summary chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceQuery {
    pub employee: String,
    pub work_hours: String,
    pub period: String,
    pub month: String,
}

impl Default for AttendanceQuery {
    fn default() -> Self {
        Self {
            employee: "Select Employee".into(),
            work_hours: "Total Work Hours".into(),
            period: "Previous 10 Days".into(),
            month: "Current Month".into(),
        }
    }
}

#[async_trait(?Send)]
pub trait AttendanceSource {
    async fn fetch_attendance(
        &self,
        query: &AttendanceQuery,
    ) -> Result<Vec<AttendanceRecord>, ApiError>;
}

/// Synthesizes a fresh month on every fetch. The query is not applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockAttendanceSource;

#[async_trait(?Send)]
impl AttendanceSource for MockAttendanceSource {
    async fn fetch_attendance(
        &self,
        query: &AttendanceQuery,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        log::debug!("Generating mock attendance for {:?}", query);
        Ok(generate_attendance(&mut rand::thread_rng()))
    }
}

/// Five working days followed by two weekend days, repeating.
pub fn is_weekend_index(index: usize) -> bool {
    matches!(index % 7, 5 | 6)
}

pub fn working_day_label(day_number: usize) -> String {
    format!("01/{:02}", day_number)
}

pub fn generate_attendance<R: Rng + ?Sized>(rng: &mut R) -> Vec<AttendanceRecord> {
    (0..ATTENDANCE_DAYS)
        .map(|index| {
            if is_weekend_index(index) {
                AttendanceRecord::weekend()
            } else {
                classify_working_day(rng, index + 1)
            }
        })
        .collect()
}

fn classify_working_day<R: Rng + ?Sized>(rng: &mut R, day_number: usize) -> AttendanceRecord {
    let category = AttendanceCategory::ALL
        .choose(rng)
        .copied()
        .unwrap_or(AttendanceCategory::Present);
    let magnitude = rng.gen_range(1..=MAX_DAILY_MAGNITUDE);
    AttendanceRecord::empty(working_day_label(day_number)).with_value(category, magnitude)
}

impl ApiClient {
    pub async fn get_attendance_summary(
        &self,
        query: &AttendanceQuery,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.attendance_source().fetch_attendance(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::WEEKEND_DATE_LABEL;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    fn sample(seed: u64) -> Vec<AttendanceRecord> {
        generate_attendance(&mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn generates_thirty_days() {
        assert_eq!(sample(1).len(), ATTENDANCE_DAYS);
    }

    #[test]
    fn at_most_one_category_per_day() {
        for seed in 0..50 {
            for record in sample(seed) {
                assert!(record.active_categories().len() <= 1, "{:?}", record);
            }
        }
    }

    #[test]
    fn weekends_are_zeroed_sentinels() {
        for seed in 0..20 {
            let records = sample(seed);
            for (index, record) in records.iter().enumerate() {
                if is_weekend_index(index) {
                    assert_eq!(record.date, WEEKEND_DATE_LABEL);
                    assert!(record.active_categories().is_empty());
                    assert!(record.is_weekend_sentinel());
                }
            }
        }
    }

    #[test]
    fn working_days_have_one_magnitude_in_range() {
        for seed in 0..50 {
            for (index, record) in sample(seed).iter().enumerate() {
                if is_weekend_index(index) {
                    continue;
                }
                let active = record.active_categories();
                assert_eq!(active.len(), 1);
                let value = record.value(active[0]);
                assert!((1..=MAX_DAILY_MAGNITUDE).contains(&value), "{value}");
                assert_eq!(record.date, working_day_label(index + 1));
            }
        }
    }

    #[test]
    fn weekend_pattern_matches_calendar_positions() {
        let weekends: Vec<usize> = (0..ATTENDANCE_DAYS).filter(|i| is_weekend_index(*i)).collect();
        assert_eq!(weekends, vec![5, 6, 12, 13, 19, 20, 26, 27]);
    }

    #[test]
    fn working_day_labels_are_zero_padded() {
        assert_eq!(working_day_label(1), "01/01");
        assert_eq!(working_day_label(8), "01/08");
        assert_eq!(working_day_label(30), "01/30");
    }

    #[test]
    fn every_category_eventually_appears() {
        let mut seen = HashSet::new();
        for seed in 0..20 {
            for record in sample(seed) {
                seen.extend(record.active_categories());
            }
        }
        assert_eq!(seen.len(), AttendanceCategory::ALL.len());
    }

    #[test]
    fn client_delegates_to_its_source() {
        use crate::api::{test_support::fixtures::FixedAttendanceSource, MemorySessionStore};
        use std::rc::Rc;

        let source = Rc::new(FixedAttendanceSource::new(vec![AttendanceRecord::weekend()]));
        let api = ApiClient::with_parts(source.clone(), Rc::new(MemorySessionStore::new()));
        let records =
            futures::executor::block_on(api.get_attendance_summary(&AttendanceQuery::default()))
                .unwrap();
        assert_eq!(records, vec![AttendanceRecord::weekend()]);
        assert_eq!(source.calls(), 1);
    }

    #[test]
    fn default_query_uses_initial_labels() {
        let query = AttendanceQuery::default();
        assert_eq!(query.employee, "Select Employee");
        assert_eq!(query.work_hours, "Total Work Hours");
        assert_eq!(query.period, "Previous 10 Days");
        assert_eq!(query.month, "Current Month");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[tokio::test]
    async fn mock_source_ignores_query_and_returns_a_month() {
        let query = AttendanceQuery {
            employee: "John Doe".into(),
            ..AttendanceQuery::default()
        };
        let records = MockAttendanceSource.fetch_attendance(&query).await.unwrap();
        assert_eq!(records.len(), ATTENDANCE_DAYS);
    }
}

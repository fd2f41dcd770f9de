#[cfg(test)]
pub mod fixtures {
    use crate::api::{
        ApiClient, ApiError, AttendanceCategory, AttendanceQuery, AttendanceRecord,
        AttendanceSource, MemorySessionStore,
    };
    use async_trait::async_trait;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Serves a fixed month and counts how often it was asked.
    pub struct FixedAttendanceSource {
        records: Vec<AttendanceRecord>,
        calls: Cell<usize>,
    }

    impl FixedAttendanceSource {
        pub fn new(records: Vec<AttendanceRecord>) -> Self {
            Self {
                records,
                calls: Cell::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.get()
        }
    }

    #[async_trait(?Send)]
    impl AttendanceSource for FixedAttendanceSource {
        async fn fetch_attendance(
            &self,
            _query: &AttendanceQuery,
        ) -> Result<Vec<AttendanceRecord>, ApiError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.records.clone())
        }
    }

    pub struct FailingAttendanceSource;

    #[async_trait(?Send)]
    impl AttendanceSource for FailingAttendanceSource {
        async fn fetch_attendance(
            &self,
            _query: &AttendanceQuery,
        ) -> Result<Vec<AttendanceRecord>, ApiError> {
            Err(ApiError::unknown("attendance unavailable"))
        }
    }

    pub fn sample_week() -> Vec<AttendanceRecord> {
        vec![
            AttendanceRecord::empty("01/01").with_value(AttendanceCategory::Present, 9),
            AttendanceRecord::empty("01/02").with_value(AttendanceCategory::Early, 5),
            AttendanceRecord::empty("01/03").with_value(AttendanceCategory::Late, 1),
            AttendanceRecord::empty("01/04").with_value(AttendanceCategory::ShortDay, 3),
            AttendanceRecord::empty("01/05").with_value(AttendanceCategory::Leave, 7),
            AttendanceRecord::weekend(),
            AttendanceRecord::weekend(),
        ]
    }

    pub fn memory_client(store: Rc<MemorySessionStore>) -> ApiClient {
        ApiClient::with_parts(Rc::new(FixedAttendanceSource::new(sample_week())), store)
    }

    pub fn signed_in_client() -> ApiClient {
        memory_client(Rc::new(MemorySessionStore::signed_in("test123")))
    }

    pub fn signed_out_client() -> ApiClient {
        memory_client(Rc::new(MemorySessionStore::new()))
    }
}

use crate::api::{ApiClient, ApiError, AttendanceQuery, AttendanceRecord};
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_attendance(
        &self,
        query: &AttendanceQuery,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.client.get_attendance_summary(query).await.map_err(|err| {
            log::error!("Failed to load attendance summary: {}", err);
            err
        })
    }
}

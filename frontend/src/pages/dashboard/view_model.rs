use crate::api::{ApiClient, ApiError, AttendanceQuery, AttendanceRecord, DropdownOption};
use crate::pages::dashboard::{repository::DashboardRepository, utils::FilterKind};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub filters: RwSignal<AttendanceQuery>,
    pub attendance_resource: Resource<AttendanceQuery, Result<Vec<AttendanceRecord>, ApiError>>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repo = DashboardRepository::new_with_client(Rc::new(api));

        let filters = create_rw_signal(AttendanceQuery::default());
        // Keyed on the labels, so every selection regenerates the month.
        let attendance_resource = create_resource(
            move || filters.get(),
            move |query| {
                let repo = repo.clone();
                async move { repo.fetch_attendance(&query).await }
            },
        );

        Self {
            filters,
            attendance_resource,
        }
    }

    pub fn filter_label(&self, kind: FilterKind) -> Signal<String> {
        let filters = self.filters;
        Signal::derive(move || filters.with(|f| kind.label(f).to_string()))
    }

    pub fn select(&self, kind: FilterKind, option: DropdownOption) {
        log::debug!("Filter {:?} set to {}", kind, option.value);
        self.filters.update(|f| kind.apply(f, option.label));
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

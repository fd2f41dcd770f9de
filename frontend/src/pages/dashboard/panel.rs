use crate::pages::dashboard::{
    components::{AttendanceSummary, QuickActions, WelcomeHeader},
    view_model::use_dashboard_view_model,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();

    view! {
        <div>
            <WelcomeHeader />
            <QuickActions />
            <AttendanceSummary vm=vm />
        </div>
    }
}

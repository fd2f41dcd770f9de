use crate::{
    api::AttendanceRecord,
    components::{error::InlineErrorMessage, layout::LoadingSpinner},
    pages::dashboard::{
        components::{bar::DayBar, filters::AttendanceFilterBar, legend::Legend},
        utils::{grid_line_offset, CHART_SUBTITLE, CHART_TITLE, TIME_LABELS},
        view_model::DashboardViewModel,
    },
};
use leptos::*;

#[component]
fn TimeAxis() -> impl IntoView {
    view! {
        <div class="flex flex-col justify-between h-[140px] pr-3 text-xs text-gray-500">
            {TIME_LABELS.iter().map(|label| view! { <span>{*label}</span> }).collect_view()}
        </div>
    }
}

#[component]
fn GridLines() -> impl IntoView {
    let count = TIME_LABELS.len();
    view! {
        <div class="absolute inset-x-0 top-0 h-[140px] pointer-events-none">
            {(0..count)
                .map(|k| {
                    view! {
                        <div
                            class="absolute inset-x-0 border-t border-dashed border-gray-200"
                            style=format!("top: {}%", grid_line_offset(k, count))
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Y-axis, grid and one bar per record, in order.
#[component]
pub fn AttendanceChart(records: Vec<AttendanceRecord>) -> impl IntoView {
    view! {
        <div class="flex overflow-x-auto">
            <TimeAxis />
            <div class="relative flex-1">
                <GridLines />
                <div class="relative flex items-end gap-1 min-w-[600px]">
                    {records
                        .into_iter()
                        .map(|record| view! { <DayBar record=record /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn AttendanceSummary(vm: DashboardViewModel) -> impl IntoView {
    let resource = vm.attendance_resource;
    let error = Signal::derive(move || resource.get().and_then(|result| result.err()));

    view! {
        <div class="bg-white rounded-lg shadow p-6 space-y-6">
            <div class="flex flex-col lg:flex-row lg:items-start lg:justify-between gap-4">
                <div>
                    <h3 class="text-lg font-semibold text-gray-900">{CHART_TITLE}</h3>
                    <p class="text-sm text-gray-500">{CHART_SUBTITLE}</p>
                </div>
                <AttendanceFilterBar vm=vm />
            </div>
            <Legend />
            <InlineErrorMessage error=error />
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || {
                    resource
                        .get()
                        .and_then(|result| result.ok())
                        .map(|records| view! { <AttendanceChart records=records /> })
                }}
            </Suspense>
        </div>
    }
}

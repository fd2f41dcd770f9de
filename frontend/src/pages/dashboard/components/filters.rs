use crate::{
    api::DropdownOption,
    components::dropdown::DropdownButton,
    pages::dashboard::{utils::FilterKind, view_model::DashboardViewModel},
};
use leptos::*;

#[component]
pub fn AttendanceFilterBar(vm: DashboardViewModel) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 lg:grid-cols-4 gap-3">
            {FilterKind::ALL
                .into_iter()
                .map(|kind| {
                    view! {
                        <DropdownButton
                            label=vm.filter_label(kind)
                            options=kind.options()
                            on_select=Callback::new(move |option: DropdownOption| vm.select(kind, option))
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

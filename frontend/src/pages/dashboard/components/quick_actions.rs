use crate::components::common::{Button, ButtonVariant};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub icon: &'static str,
    pub variant: ButtonVariant,
}

pub const QUICK_ACTIONS: [QuickAction; 3] = [
    QuickAction {
        label: "Add Employee",
        icon: "fas fa-user-plus",
        variant: ButtonVariant::Primary,
    },
    QuickAction {
        label: "View Reports",
        icon: "fas fa-chart-line",
        variant: ButtonVariant::Secondary,
    },
    QuickAction {
        label: "Settings",
        icon: "fas fa-cog",
        variant: ButtonVariant::Secondary,
    },
];

#[component]
pub fn QuickActions() -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-6 mb-8">
            <h2 class="text-lg font-semibold text-gray-900 mb-4">"Quick Actions"</h2>
            <div class="flex flex-wrap gap-3">
                {QUICK_ACTIONS
                    .iter()
                    .map(|action| {
                        let label = action.label;
                        view! {
                            <Button
                                variant=action.variant
                                icon=action.icon
                                on_click=Callback::new(move |_: ev::MouseEvent| log::info!("Quick action: {}", label))
                            >
                                {label}
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

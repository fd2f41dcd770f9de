use crate::pages::dashboard::utils::legend_items;
use leptos::*;

#[component]
pub fn Legend() -> impl IntoView {
    view! {
        <div class="flex flex-wrap items-center gap-4">
            {legend_items()
                .into_iter()
                .map(|item| {
                    view! {
                        <div class="flex items-center gap-2">
                            <span
                                class="w-3 h-3 rounded-sm inline-block"
                                style=format!("background-color: {}", item.color)
                            ></span>
                            <span class="text-xs text-gray-600">{item.label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

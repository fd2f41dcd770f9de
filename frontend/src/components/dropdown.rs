use crate::api::DropdownOption;
use leptos::*;

/// Label-only selector: shows `label`, lists `options`, reports the pick.
#[component]
pub fn DropdownButton(
    label: Signal<String>,
    options: Vec<DropdownOption>,
    on_select: Callback<DropdownOption>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let (open, set_open) = create_signal(false);
    let options = store_value(options);

    view! {
        <div class=format!("relative {}", class)>
            <button
                type="button"
                class="flex items-center justify-between gap-2 w-full px-3 py-2 text-sm text-gray-700 bg-white border border-gray-300 rounded-lg hover:bg-gray-50"
                aria-haspopup="listbox"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <span class="truncate">{move || label.get()}</span>
                <i class=move || if open.get() { "fas fa-chevron-up text-xs text-gray-500" } else { "fas fa-chevron-down text-xs text-gray-500" }></i>
            </button>
            <Show when=move || open.get()>
                <ul role="listbox" class="absolute left-0 right-0 mt-1 bg-white border border-gray-200 rounded-lg shadow-lg z-20 py-1">
                    {options
                        .get_value()
                        .into_iter()
                        .map(|option| {
                            let selected_label = option.label.clone();
                            let text = option.label.clone();
                            view! {
                                <li
                                    role="option"
                                    aria-selected=move || (label.get() == selected_label).to_string()
                                    class="px-3 py-2 text-sm text-gray-700 cursor-pointer hover:bg-gray-100"
                                    on:click=move |_| {
                                        on_select.call(option.clone());
                                        set_open.set(false);
                                    }
                                >
                                    {text}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn closed_dropdown_shows_only_current_label() {
        let html = render_to_string(move || {
            let label = create_rw_signal("Current Month".to_string());
            view! {
                <DropdownButton
                    label=label.into()
                    options=vec![
                        DropdownOption::new("current", "Current Month"),
                        DropdownOption::new("last", "Last Month"),
                    ]
                    on_select=Callback::new(|_: DropdownOption| {})
                />
            }
        });
        assert!(html.contains("Current Month"));
        assert!(!html.contains("Last Month"));
        assert!(html.contains("aria-expanded=\"false\""));
    }
}

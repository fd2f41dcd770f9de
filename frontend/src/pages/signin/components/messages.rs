use leptos::*;

#[component]
pub fn FieldErrorMessage(message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some() fallback=|| ()>
            <p class="mt-1 text-sm text-red-600">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}

use crate::api::ApiError;
use leptos::*;

fn shows_code(code: &str) -> bool {
    !code.is_empty() && code != "UNKNOWN" && code != "VALIDATION_ERROR"
}

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div role="alert" class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded-lg space-y-1 my-2">
                <div class="font-medium text-sm">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().and_then(|e| {
                    shows_code(&e.code)
                        .then(|| view! { <div class="text-xs opacity-75">{"Code: "}{e.code.clone()}</div> })
                })}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn inline_error_renders_storage_code() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::storage("No localStorage")));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("No localStorage"));
        assert!(html.contains("Code: STORAGE_ERROR"));
    }

    #[test]
    fn inline_error_hides_generic_codes() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::unknown("attendance unavailable")));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("attendance unavailable"));
        assert!(!html.contains("Code:"));
    }

    #[test]
    fn inline_error_renders_nothing_without_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(!html.contains("role=\"alert\""));
    }
}

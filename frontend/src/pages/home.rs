use crate::{
    api::ApiClient,
    components::layout::LoadingSpinner,
    utils::navigation::{home_redirect_target, redirect},
};
use leptos::*;

/// Landing route: forwards to the dashboard or the sign-in page.
#[component]
pub fn HomePage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let target = home_redirect_target(api.has_session());
    create_effect(move |_| redirect(target));

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50">
            <LoadingSpinner />
        </div>
    }
}

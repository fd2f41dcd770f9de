use leptos::*;

#[component]
pub fn WelcomeHeader() -> impl IntoView {
    view! {
        <div class="mb-8">
            <h1 class="text-2xl font-bold text-gray-900">"Dashboard"</h1>
            <p class="mt-1 text-sm text-gray-600">
                "Welcome to your HRMS dashboard. Here's an overview of your organization."
            </p>
        </div>
    }
}

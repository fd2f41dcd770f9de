use crate::components::{header::Header, sidebar::Sidebar};
use leptos::*;

/// Authenticated shell: fixed sidebar, sticky header, scrollable content.
#[component]
pub fn DashboardLayout(current_path: Signal<String>, children: Children) -> impl IntoView {
    let sidebar_open = create_rw_signal(false);
    let toggle_sidebar = Callback::new(move |_: ()| sidebar_open.update(|open| *open = !*open));

    view! {
        <div class="min-h-screen bg-gray-50">
            <Sidebar current_path=current_path open=sidebar_open />
            <div class="lg:ml-[308px] flex flex-col min-h-screen">
                <div class="sticky top-0 z-30 shadow-sm">
                    <Header on_menu_toggle=toggle_sidebar />
                </div>
                <main class="flex-1 overflow-y-auto p-4 sm:p-6 lg:p-8">
                    {children()}
                </main>
            </div>
        </div>
    }
}

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="flex flex-col justify-center items-center gap-3 p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
            {label.map(|label| view! { <p class="text-sm text-gray-500">{label}</p> })}
        </div>
    }
}

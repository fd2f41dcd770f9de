use crate::{api::ApiClient, state::auth::use_sign_out, utils::time::relative_label};
use chrono::Utc;
use leptos::{ev::KeyboardEvent, *};

/// Trimmed query, or `None` when there is nothing to search for.
pub fn search_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[component]
pub fn Header(
    on_menu_toggle: Callback<()>,
    #[prop(optional)] on_search: Option<Callback<String>>,
) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let user = api.current_user();
    let initials = user.initials();
    let (name, role) = (user.name.clone(), user.role.clone());
    let (menu_name, menu_email) = (user.name, user.email);
    let notifications = store_value(api.notifications());
    let sign_out = use_sign_out();

    let search_term = create_rw_signal(String::new());
    let (show_profile, set_show_profile) = create_signal(false);
    let (show_notifications, set_show_notifications) = create_signal(false);

    let submit_search = move || {
        if let Some(query) = search_query(&search_term.get_untracked()) {
            log::info!("Search query: {}", query);
            if let Some(on_search) = on_search {
                on_search.call(query);
            }
        }
    };
    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            submit_search();
        }
    };

    view! {
        <header class="bg-white h-16 lg:h-[90px] flex items-center w-full px-4 sm:px-6 lg:px-8">
            <div class="flex items-center justify-between w-full">
                <button
                    type="button"
                    aria-label="Toggle menu"
                    class="lg:hidden p-2 rounded-lg hover:bg-gray-100 flex-shrink-0"
                    on:click=move |_| on_menu_toggle.call(())
                >
                    <i class="fas fa-bars"></i>
                </button>

                <div class="flex-1 max-w-xs sm:max-w-sm md:max-w-md lg:max-w-xl mx-2 sm:mx-4">
                    <div class="flex">
                        <input
                            type="text"
                            name="search"
                            placeholder="Search..."
                            class="w-full h-[37px] pl-4 border border-r-0 border-gray-300 rounded-l-lg focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent text-gray-700 placeholder-gray-400"
                            prop:value=move || search_term.get()
                            on:input=move |ev| search_term.set(event_target_value(&ev))
                            on:keydown=on_keydown
                        />
                        <button
                            type="button"
                            aria-label="Search"
                            class="h-[37px] px-3 bg-blue-600 hover:bg-blue-700 rounded-r-lg flex items-center justify-center text-white"
                            on:click=move |_| submit_search()
                        >
                            <i class="fas fa-search"></i>
                        </button>
                    </div>
                </div>

                <div class="flex items-center space-x-2 sm:space-x-4 flex-shrink-0">
                    <div class="relative">
                        <button
                            type="button"
                            aria-label="Notifications"
                            class="relative p-2 bg-blue-600 hover:bg-blue-700 rounded-[25px] text-white"
                            on:click=move |_| {
                                set_show_profile.set(false);
                                set_show_notifications.update(|open| *open = !*open);
                            }
                        >
                            <i class="fas fa-bell"></i>
                            <span class="absolute -top-1 -right-1 w-5 h-5 bg-red-500 text-white text-xs rounded-full flex items-center justify-center">
                                {notifications.with_value(|items| items.len())}
                            </span>
                        </button>
                        <Show when=move || show_notifications.get()>
                            <div class="absolute right-0 mt-2 w-72 sm:w-80 bg-white rounded-lg shadow-lg border border-gray-200 z-50">
                                <div class="px-4 py-3 border-b border-gray-200">
                                    <h3 class="text-sm font-semibold text-gray-900">"Notifications"</h3>
                                </div>
                                <div class="max-h-64 overflow-y-auto">
                                    {notifications
                                        .get_value()
                                        .into_iter()
                                        .map(|item| {
                                            let when = relative_label(Utc::now(), item.created_at);
                                            view! {
                                                <div class="px-4 py-3 hover:bg-gray-50 border-b border-gray-100">
                                                    <p class="text-sm text-gray-900">{item.message}</p>
                                                    <p class="text-xs text-gray-500 mt-1">{when}</p>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                <div class="px-4 py-3 border-t border-gray-200">
                                    <button type="button" class="text-sm text-blue-600 hover:text-blue-700">
                                        "View all notifications"
                                    </button>
                                </div>
                            </div>
                        </Show>
                    </div>

                    <div class="relative">
                        <button
                            type="button"
                            class="flex items-center space-x-2 sm:space-x-3 p-2 rounded-lg hover:bg-gray-100"
                            on:click=move |_| {
                                set_show_notifications.set(false);
                                set_show_profile.update(|open| *open = !*open);
                            }
                        >
                            <div class="w-8 h-8 bg-blue-500 rounded-full flex items-center justify-center flex-shrink-0">
                                <span class="text-white text-sm font-medium">{initials}</span>
                            </div>
                            <div class="hidden sm:block text-left min-w-0">
                                <p class="text-sm font-medium text-gray-900 truncate">{name}</p>
                                <p class="text-xs text-gray-500">{role}</p>
                            </div>
                            <i class="fas fa-chevron-down text-xs text-gray-500"></i>
                        </button>
                        <Show when=move || show_profile.get()>
                            <div class="absolute right-0 mt-2 w-48 bg-white rounded-lg shadow-lg border border-gray-200 z-50">
                                <div class="px-4 py-3 border-b border-gray-200">
                                    <p class="text-sm font-medium text-gray-900 truncate">{menu_name.clone()}</p>
                                    <p class="text-xs text-gray-500 truncate">{menu_email.clone()}</p>
                                </div>
                                <div class="py-2">
                                    <a href="#" class="block px-4 py-2 text-sm text-gray-700 hover:bg-gray-100">"Profile Settings"</a>
                                    <a href="#" class="block px-4 py-2 text-sm text-gray-700 hover:bg-gray-100">"Account Settings"</a>
                                    <a href="#" class="block px-4 py-2 text-sm text-gray-700 hover:bg-gray-100">"Help & Support"</a>
                                </div>
                                <div class="border-t border-gray-200 py-2">
                                    <button
                                        type="button"
                                        class="block w-full text-left px-4 py-2 text-sm text-red-600 hover:bg-gray-100"
                                        on:click=move |_| sign_out.call(())
                                    >
                                        "Sign Out"
                                    </button>
                                </div>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </header>
    }
}

use crate::state::auth::use_sign_out;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: [NavItem; 8] = [
    NavItem {
        label: "Dashboard",
        href: "/dashboard",
        icon: "fas fa-th-large",
    },
    NavItem {
        label: "Employee Directory",
        href: "/dashboard/employee-directory",
        icon: "fas fa-users",
    },
    NavItem {
        label: "Attendance & Time Tracking",
        href: "/dashboard/attendance-time-tracking",
        icon: "fas fa-clock",
    },
    NavItem {
        label: "Leave Management",
        href: "/dashboard/leave-management",
        icon: "fas fa-calendar-alt",
    },
    NavItem {
        label: "Asset Management",
        href: "/dashboard/asset-management",
        icon: "fas fa-boxes",
    },
    NavItem {
        label: "Reports & Analytics",
        href: "/dashboard/reports-analytics",
        icon: "fas fa-chart-bar",
    },
    NavItem {
        label: "Notifications & Alerts",
        href: "/dashboard/notifications-alerts",
        icon: "fas fa-bell",
    },
    NavItem {
        label: "Settings",
        href: "/dashboard/settings",
        icon: "fas fa-cog",
    },
];

/// Exact match only; `/dashboard` is not active on its sub-pages.
pub fn is_active(current_path: &str, href: &str) -> bool {
    current_path == href
}

/// Nav entry whose href matches a `/dashboard/:section` slug.
pub fn nav_item_for_section(section: &str) -> Option<NavItem> {
    NAV_ITEMS
        .iter()
        .copied()
        .find(|item| item.href.strip_prefix("/dashboard/") == Some(section))
}

fn link_class(active: bool) -> &'static str {
    if active {
        "flex items-center px-3 py-3 mx-1 ml-2 mb-1 rounded-lg transition-colors bg-white text-gray-800 shadow-sm"
    } else {
        "flex items-center px-3 py-3 mx-1 mb-1 rounded-lg transition-colors text-blue-100 hover:bg-blue-800 hover:text-white"
    }
}

#[component]
pub fn Sidebar(current_path: Signal<String>, open: RwSignal<bool>) -> impl IntoView {
    let sign_out = use_sign_out();
    let close = move |_: ev::MouseEvent| open.set(false);

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 bg-black bg-opacity-50 z-40 lg:hidden" on:click=close></div>
        </Show>
        <aside class=move || {
            format!(
                "fixed left-0 top-0 h-full bg-[#004b92] text-white transition-transform duration-300 z-50 w-[308px] lg:translate-x-0 {}",
                if open.get() { "translate-x-0" } else { "-translate-x-full" }
            )
        }>
            <div class="flex items-center justify-between p-4">
                <div class="flex items-center space-x-3">
                    <div class="w-8 h-8 bg-white rounded-lg flex items-center justify-center">
                        <i class="fas fa-bullseye text-blue-900"></i>
                    </div>
                    <span class="text-xl font-bold">"HRMS"</span>
                </div>
                <button
                    type="button"
                    aria-label="Close sidebar"
                    class="p-1 rounded-lg hover:bg-blue-800 transition-colors lg:hidden"
                    on:click=close
                >
                    <i class="fas fa-times"></i>
                </button>
            </div>

            <nav class="mt-4 px-2">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        let href = item.href;
                        let active = move || is_active(&current_path.get(), href);
                        view! {
                            <div class="relative">
                                <Show when=active>
                                    <div class="absolute left-0 top-0 bottom-0 w-1 bg-white rounded-r-sm"></div>
                                </Show>
                                <a
                                    href=href
                                    class=move || link_class(active())
                                    aria-current=move || active().then_some("page")
                                    on:click=close
                                >
                                    <i class=format!("{} w-5 flex-shrink-0", item.icon)></i>
                                    <span class="ml-3 text-sm font-medium">{item.label}</span>
                                </a>
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="absolute bottom-4 left-0 right-0 px-2">
                <button
                    type="button"
                    class="flex items-center justify-between px-4 py-3 mx-1 rounded-lg transition-colors w-full bg-white text-gray-800 shadow-sm hover:bg-gray-50"
                    on:click=move |_| sign_out.call(())
                >
                    <span class="text-sm font-medium">"Log Out"</span>
                    <i class="fas fa-arrow-right"></i>
                </button>
            </div>
        </aside>
    }
}

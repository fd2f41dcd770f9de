use leptos::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{guard::RequireAuth, layout::DashboardLayout},
    pages::{DashboardPage, HomePage, SectionPlaceholder, SignInPage},
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/signin", "/dashboard", "/dashboard/:section"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/dashboard", "/dashboard/:section"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/signin"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/signin" view=SignInPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/dashboard/:section" view=ProtectedSection/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn DashboardShell(children: ChildrenFn) -> impl IntoView {
    let location = use_location();
    let current_path = Signal::derive(move || location.pathname.get());
    let children = store_value(children);
    view! {
        <RequireAuth>
            <DashboardLayout current_path=current_path>{children.with_value(|c| c())}</DashboardLayout>
        </RequireAuth>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <DashboardShell><DashboardPage/></DashboardShell> }
}

#[component]
fn ProtectedSection() -> impl IntoView {
    let params = use_params_map();
    let section = Signal::derive(move || {
        params.with(|p| p.get("section").cloned().unwrap_or_default())
    });
    view! { <DashboardShell><SectionPlaceholder section=section/></DashboardShell> }
}

use crate::{
    components::layout::LoadingSpinner,
    state::auth::use_auth,
    utils::navigation::{redirect, SIGN_IN_PATH},
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Wait,
    Render,
    Redirect(&'static str),
}

pub fn guard_decision(is_authenticated: bool, is_loading: bool) -> GuardDecision {
    if is_loading {
        GuardDecision::Wait
    } else if is_authenticated {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(SIGN_IN_PATH)
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    guard_decision(is_authenticated, is_loading) == GuardDecision::Render
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        if let GuardDecision::Redirect(target) =
            guard_decision(is_authenticated.get(), is_loading.get())
        {
            log::info!("No session flag, redirecting to {}", target);
            redirect(target);
        }
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=|| view! { <LoadingSpinner label="Loading..." /> }
        >
            {children()}
        </Show>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::provide_auth, ssr::render_to_string};

    #[test]
    fn renders_children_with_session() {
        let html = render_to_string(move || {
            provide_auth(true, false);
            view! { <RequireAuth><div>"protected"</div></RequireAuth> }
        });
        assert!(html.contains("protected"));
    }

    #[test]
    fn shows_loading_while_redirecting_without_session() {
        let html = render_to_string(move || {
            provide_auth(false, false);
            view! { <RequireAuth><div>"protected"</div></RequireAuth> }
        });
        assert!(!html.contains("protected"));
        assert!(html.contains("Loading..."));
    }

    #[test]
    fn shows_spinner_while_loading() {
        let html = render_to_string(move || {
            provide_auth(false, true);
            view! { <RequireAuth><div>"protected"</div></RequireAuth> }
        });
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("protected"));
    }
}

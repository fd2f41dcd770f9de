#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{ApiClient, UserProfile};
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn jane() -> UserProfile {
        UserProfile {
            name: "Jane Cooper".into(),
            email: "jane@example.com".into(),
            role: "Admin".into(),
        }
    }

    pub fn provide_auth(
        is_authenticated: bool,
        loading: bool,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            user: is_authenticated.then(jane),
            is_authenticated,
            loading,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }

    pub fn provide_api(api: ApiClient) -> ApiClient {
        provide_context(api.clone());
        api
    }
}

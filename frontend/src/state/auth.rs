use crate::{
    api::{ApiClient, ApiError, SignInRequest, UserProfile},
    pages::signin::repository::SignInRepository,
};
use leptos::*;
use std::rc::Rc;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    pub fn from_client(api: &ApiClient) -> Self {
        let is_authenticated = api.has_session();
        Self {
            user: is_authenticated.then(|| api.current_user()),
            is_authenticated,
            loading: false,
        }
    }
}

fn create_auth_context() -> AuthContext {
    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    create_signal(AuthState::from_client(&api_client))
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn sign_in_request(
    request: SignInRequest,
    repo: &SignInRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match repo.sign_in(request).await {
        Ok(user) => {
            set_auth_state.update(|state| {
                state.user = Some(user);
                state.is_authenticated = true;
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            log::error!("Sign-in failed: {}", error);
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub fn sign_out(
    repo: &SignInRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let result = repo.sign_out();

    set_auth_state.update(|state| {
        state.user = None;
        state.is_authenticated = false;
        state.loading = false;
    });

    result
}

fn use_repository() -> SignInRepository {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    SignInRepository::new_with_client(Rc::new(api))
}

pub fn use_sign_in_action() -> Action<SignInRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = use_repository();

    create_action(move |request: &SignInRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { sign_in_request(payload, &repo, set_auth).await }
    })
}

/// Returns a callback that clears the session and leaves for the sign-in page.
pub fn use_sign_out() -> Callback<()> {
    let (_auth, set_auth) = use_auth();
    let repo = use_repository();

    Callback::new(move |_| {
        if let Err(err) = sign_out(&repo, set_auth) {
            log::error!("Failed to clear session: {}", err);
        }
        crate::utils::navigation::redirect(crate::utils::navigation::SIGN_IN_PATH);
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::fixtures::{memory_client, signed_in_client};
    use crate::api::{MemorySessionStore, SessionStore};

    #[test]
    fn state_from_client_reflects_session_flag() {
        let signed_in = AuthState::from_client(&signed_in_client());
        assert!(signed_in.is_authenticated);
        assert_eq!(signed_in.user.map(|u| u.name), Some("Jane Cooper".into()));

        let store = Rc::new(MemorySessionStore::new());
        let signed_out = AuthState::from_client(&memory_client(store));
        assert!(!signed_out.is_authenticated);
        assert!(signed_out.user.is_none());
    }

    #[tokio::test]
    async fn sign_in_and_sign_out_update_auth_state() {
        let runtime = create_runtime();
        let store = Rc::new(MemorySessionStore::new());
        let repo = SignInRepository::new_with_client(Rc::new(memory_client(store.clone())));
        let (state, set_state) = create_signal(AuthState::default());

        sign_in_request(
            SignInRequest {
                email: "user@test.com".into(),
                password: "secret1".into(),
            },
            &repo,
            set_state,
        )
        .await
        .unwrap();

        let snapshot = state.get();
        assert!(snapshot.is_authenticated);
        assert!(!snapshot.loading);
        assert!(snapshot.user.is_some());
        assert!(store.load().unwrap().is_some());

        sign_out(&repo, set_state).unwrap();
        let snapshot = state.get();
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.user.is_none());
        assert!(store.load().unwrap().is_none());
        runtime.dispose();
    }

    #[test]
    fn auth_provider_reads_client_from_context() {
        crate::test_support::ssr::with_runtime(|| {
            provide_context(signed_in_client());
            let (state, _) = create_auth_context();
            assert!(state.get_untracked().is_authenticated);
        });
    }
}

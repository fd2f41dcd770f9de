use super::utils::{validate_sign_in, FieldErrors, SignInField, SignInFormState};
use crate::api::{ApiError, SignInRequest};
use crate::state::auth;
use crate::utils::navigation::{redirect, sign_in_redirect_target};
use leptos::*;

#[derive(Clone, Copy)]
pub struct SignInViewModel {
    pub form: SignInFormState,
    pub field_errors: RwSignal<FieldErrors>,
    pub error: RwSignal<Option<ApiError>>,
    pub sign_in_action: Action<SignInRequest, Result<(), ApiError>>,
}

impl SignInViewModel {
    /// Validates the form and records per-field messages.
    /// Returns the request only when every field is valid.
    pub fn prepare(&self) -> Option<SignInRequest> {
        let request = self.form.to_request();
        match validate_sign_in(&request) {
            Ok(()) => {
                self.field_errors.set(FieldErrors::default());
                Some(request)
            }
            Err(errors) => {
                self.field_errors.set(errors);
                None
            }
        }
    }

    pub fn submit(&self) {
        if self.sign_in_action.pending().get_untracked() {
            return;
        }
        self.error.set(None);
        if let Some(request) = self.prepare() {
            self.sign_in_action.dispatch(request);
        }
    }

    pub fn update_field(&self, field: SignInField, value: String) {
        match field {
            SignInField::Email => self.form.email.set(value),
            SignInField::Password => self.form.password.set(value),
        }
        if self.field_errors.with_untracked(|errors| errors.get(field).is_some()) {
            self.field_errors.update(|errors| errors.clear(field));
        }
    }
}

pub fn use_sign_in_view_model() -> SignInViewModel {
    let form = SignInFormState::default();
    let field_errors = create_rw_signal(FieldErrors::default());
    let error = create_rw_signal(None::<ApiError>);
    let sign_in_action = auth::use_sign_in_action();

    create_effect(move |_| {
        if let Some(result) = sign_in_action.value().get() {
            if let Some(target) = sign_in_redirect_target(&result) {
                error.set(None);
                redirect(target);
            } else if let Err(err) = result {
                error.set(Some(err));
            }
        }
    });

    SignInViewModel {
        form,
        field_errors,
        error,
        sign_in_action,
    }
}

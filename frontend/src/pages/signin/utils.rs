use crate::api::SignInRequest;
use leptos::*;
use validator::{Validate, ValidationErrors};

#[derive(Clone, Copy)]
pub struct SignInFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub show_password: RwSignal<bool>,
    pub remember_me: RwSignal<bool>,
}

impl Default for SignInFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            show_password: create_rw_signal(false),
            remember_me: create_rw_signal(false),
        }
    }
}

impl SignInFormState {
    pub fn to_request(&self) -> SignInRequest {
        SignInRequest {
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
        }
    }

    pub fn password_input_type(&self) -> &'static str {
        password_input_type(self.show_password.get())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInField {
    Email,
    Password,
}

/// One message per invalid field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }

    pub fn get(&self, field: SignInField) -> Option<String> {
        match field {
            SignInField::Email => self.email.clone(),
            SignInField::Password => self.password.clone(),
        }
    }

    pub fn clear(&mut self, field: SignInField) {
        match field {
            SignInField::Email => self.email = None,
            SignInField::Password => self.password = None,
        }
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut fields = FieldErrors::default();
        for (field, errs) in errors.field_errors() {
            let name: &str = field.as_ref();
            let message = errs
                .first()
                .map(|err| {
                    err.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string())
                });
            match name {
                "email" => fields.email = message,
                "password" => fields.password = message,
                _ => {}
            }
        }
        fields
    }
}

pub fn validate_sign_in(request: &SignInRequest) -> Result<(), FieldErrors> {
    request.validate().map_err(|errors| FieldErrors::from(&errors))
}

pub fn password_input_type(show_password: bool) -> &'static str {
    if show_password {
        "text"
    } else {
        "password"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, password: &str) -> SignInRequest {
        SignInRequest {
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn malformed_email_flags_only_email() {
        let errors = validate_sign_in(&request("not-an-email", "secret1")).unwrap_err();
        assert_eq!(
            errors.email.as_deref(),
            Some("Please enter a valid email address")
        );
        assert_eq!(errors.password, None);
    }

    #[test]
    fn short_password_flags_only_password() {
        let errors = validate_sign_in(&request("user@test.com", "abc")).unwrap_err();
        assert_eq!(errors.email, None);
        assert_eq!(
            errors.password.as_deref(),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn valid_credentials_pass() {
        assert!(validate_sign_in(&request("user@test.com", "secret1")).is_ok());
    }

    #[test]
    fn empty_form_flags_both_fields() {
        let errors = validate_sign_in(&request("", "")).unwrap_err();
        assert!(errors.email.is_some());
        assert!(errors.password.is_some());
    }

    #[test]
    fn password_length_boundary_is_six() {
        assert!(validate_sign_in(&request("user@test.com", "12345")).is_err());
        assert!(validate_sign_in(&request("user@test.com", "123456")).is_ok());
    }

    #[test]
    fn clearing_a_field_keeps_the_other() {
        let mut errors = FieldErrors {
            email: Some("bad".into()),
            password: Some("short".into()),
        };
        errors.clear(SignInField::Email);
        assert_eq!(errors.get(SignInField::Email), None);
        assert_eq!(errors.get(SignInField::Password), Some("short".into()));
        assert!(!errors.is_empty());
    }

    #[test]
    fn password_toggle_switches_input_type() {
        assert_eq!(password_input_type(false), "password");
        assert_eq!(password_input_type(true), "text");
    }
}

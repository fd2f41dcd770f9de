use crate::pages::signin::{
    components::{form::SignInForm, hero::HeroPanel},
    utils::SignInField,
    view_model::use_sign_in_view_model,
};
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn SignInPanel() -> impl IntoView {
    let vm = use_sign_in_view_model();
    let pending = vm.sign_in_action.pending();

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });
    let email_input = Callback::new(move |value: String| vm.update_field(SignInField::Email, value));
    let password_input =
        Callback::new(move |value: String| vm.update_field(SignInField::Password, value));

    view! {
        <div class="min-h-screen flex">
            <SignInForm
                form=vm.form
                field_errors=vm.field_errors.into()
                error=vm.error.into()
                pending=pending.into()
                on_email_input=email_input
                on_password_input=password_input
                on_submit=handle_submit
            />
            <HeroPanel />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::fixtures::signed_out_client;
    use crate::test_support::ssr::render_with_api;

    #[test]
    fn renders_form_and_hero() {
        let html = render_with_api(signed_out_client(), || view! { <SignInPanel /> });
        assert!(html.contains("Sign in"));
        assert!(html.contains("E-mail"));
        assert!(html.contains("HR Management Platform"));
    }
}

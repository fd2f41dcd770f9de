use crate::{
    api::ApiError,
    components::error::InlineErrorMessage,
    pages::signin::{
        components::messages::FieldErrorMessage,
        utils::{FieldErrors, SignInFormState},
    },
};
use leptos::{ev::SubmitEvent, *};

fn input_class(has_error: bool, extra: &str) -> String {
    let border = if has_error {
        "border-red-300"
    } else {
        "border-gray-300"
    };
    format!(
        "w-full px-3 py-3 {} border rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent {}",
        extra, border
    )
}

#[component]
pub fn SignInForm(
    form: SignInFormState,
    field_errors: Signal<FieldErrors>,
    error: Signal<Option<ApiError>>,
    pending: Signal<bool>,
    on_email_input: Callback<String>,
    on_password_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let email_error = Signal::derive(move || field_errors.get().email);
    let password_error = Signal::derive(move || field_errors.get().password);
    let toggle_password = move |_| form.show_password.update(|show| *show = !*show);

    view! {
        <div class="flex-1 flex items-center justify-center px-4 sm:px-6 lg:px-8 bg-white">
            <div class="max-w-md w-full space-y-8">
                <div class="text-center">
                    <h2 class="text-3xl font-bold text-gray-900 mb-2">"Sign in"</h2>
                    <p class="text-gray-600">
                        "Don't have an account? "
                        <a href="#" class="text-blue-600 hover:text-blue-500 font-medium">"Create now"</a>
                    </p>
                </div>

                <form class="space-y-6" novalidate on:submit=move |ev| on_submit.call(ev)>
                    <div>
                        <label for="email" class="block text-sm font-medium text-gray-700 mb-1">"E-mail"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            placeholder="example@gmail.com"
                            class=move || input_class(email_error.get().is_some(), "")
                            prop:value=move || form.email.get()
                            on:input=move |ev| on_email_input.call(event_target_value(&ev))
                        />
                        <FieldErrorMessage message=email_error />
                    </div>

                    <div>
                        <label for="password" class="block text-sm font-medium text-gray-700 mb-1">"Password"</label>
                        <div class="relative">
                            <input
                                id="password"
                                name="password"
                                type=move || form.password_input_type()
                                placeholder="••••••"
                                class=move || input_class(password_error.get().is_some(), "pr-10")
                                prop:value=move || form.password.get()
                                on:input=move |ev| on_password_input.call(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="absolute inset-y-0 right-0 pr-3 flex items-center text-gray-400"
                                aria-label=move || if form.show_password.get() { "Hide password" } else { "Show password" }
                                on:click=toggle_password
                            >
                                <i class=move || if form.show_password.get() { "fas fa-eye-slash" } else { "fas fa-eye" }></i>
                            </button>
                        </div>
                        <FieldErrorMessage message=password_error />
                    </div>

                    <div class="flex items-center justify-between">
                        <div class="flex items-center">
                            <input
                                id="remember-me"
                                name="remember-me"
                                type="checkbox"
                                class="h-4 w-4 text-blue-600 focus:ring-blue-500 border-gray-300 rounded"
                                prop:checked=move || form.remember_me.get()
                                on:change=move |ev| form.remember_me.set(event_target_checked(&ev))
                            />
                            <label for="remember-me" class="ml-2 block text-sm text-gray-700">"Remember me"</label>
                        </div>
                    </div>

                    <div class="text-right">
                        <a href="#" class="text-sm text-blue-600 hover:text-blue-500">"Forgot Password?"</a>
                    </div>

                    <InlineErrorMessage error=error />

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-3 px-4 border border-transparent rounded-lg shadow-sm text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500 disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

pub const HOME_PATH: &str = "/";
pub const SIGN_IN_PATH: &str = "/signin";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Full page navigation, matching how the app leaves auth-dependent pages.
pub fn redirect(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(path) {
            log::error!("Failed to navigate to {}: {:?}", path, err);
        }
    }
}

/// Where `/` sends the visitor.
pub fn home_redirect_target(has_session: bool) -> &'static str {
    if has_session {
        DASHBOARD_PATH
    } else {
        SIGN_IN_PATH
    }
}

/// Where a finished sign-in attempt sends the visitor, if anywhere.
pub fn sign_in_redirect_target<E>(result: &Result<(), E>) -> Option<&'static str> {
    result.is_ok().then_some(DASHBOARD_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_sends_signed_in_users_to_dashboard() {
        assert_eq!(home_redirect_target(true), "/dashboard");
        assert_eq!(home_redirect_target(false), "/signin");
    }

    #[test]
    fn only_successful_sign_in_leaves_the_form() {
        assert_eq!(sign_in_redirect_target::<()>(&Ok(())), Some("/dashboard"));
        assert_eq!(sign_in_redirect_target(&Err("bad")), None);
    }
}

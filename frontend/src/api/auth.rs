use uuid::Uuid;
use validator::Validate;

use super::{
    client::ApiClient,
    types::{ApiError, SessionToken, SignInRequest},
};

impl ApiClient {
    /// Stands in for a credential exchange: waits out the configured latency,
    /// then stores a freshly minted token as the signed-in flag.
    pub async fn sign_in(&self, request: SignInRequest) -> Result<SessionToken, ApiError> {
        request
            .validate()
            .map_err(|_| ApiError::validation("Invalid email or password"))?;
        simulate_latency(self.sign_in_delay_ms()).await;

        let token = SessionToken {
            value: Uuid::new_v4().to_string(),
        };
        self.session_store().save(&token)?;
        log::info!(
            "Signed in as {} (session key `{}`)",
            request.email,
            self.session_key()
        );
        Ok(token)
    }

    pub fn sign_out(&self) -> Result<(), ApiError> {
        self.session_store().clear()?;
        log::info!("Signed out");
        Ok(())
    }

    pub fn current_session(&self) -> Result<Option<SessionToken>, ApiError> {
        Ok(self.session_store().load()?)
    }

    /// Unreadable storage counts as signed out.
    pub fn has_session(&self) -> bool {
        match self.current_session() {
            Ok(token) => token.is_some(),
            Err(err) => {
                log::warn!("Failed to read session flag: {}", err);
                false
            }
        }
    }
}

async fn simulate_latency(delay_ms: u32) {
    if delay_ms == 0 {
        return;
    }
    gloo_timers::future::TimeoutFuture::new(delay_ms).await;
}

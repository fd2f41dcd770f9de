use crate::api::{ApiClient, ApiError, SignInRequest, UserProfile};
use std::rc::Rc;

#[derive(Clone)]
pub struct SignInRepository {
    client: Rc<ApiClient>,
}

impl SignInRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn sign_in(&self, request: SignInRequest) -> Result<UserProfile, ApiError> {
        self.client.sign_in(request).await?;
        Ok(self.client.current_user())
    }

    pub fn sign_out(&self) -> Result<(), ApiError> {
        self.client.sign_out()
    }
}

impl Default for SignInRepository {
    fn default() -> Self {
        Self::new()
    }
}

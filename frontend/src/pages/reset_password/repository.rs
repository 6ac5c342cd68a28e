use crate::api::{ApiClient, ApiError, ResetPasswordRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct ResetPasswordRepository {
    client: Rc<ApiClient>,
}

impl ResetPasswordRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn reset_password(&self, request: ResetPasswordRequest) -> Result<(), ApiError> {
        self.client.reset_password(&request).await
    }
}

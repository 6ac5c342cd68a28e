use super::{
    client::ApiClient,
    types::{ApiError, ResetPasswordRequest},
};

impl ApiClient {
    /// Any 2xx counts as success; the response body is not inspected.
    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/auth/resetPassword", base_url))
                    .json(request),
            )
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }
}

use oauth2::{AuthorizationCode, TokenResponse};

use crate::server::{
    error::{upstream::UpstreamError, AppError},
    model::token::DiscordTokenResponse,
    service::oauth::DiscordAuthService,
};

impl<'a> DiscordAuthService<'a> {
    /// Exchanges an authorization code for the caller's access token.
    ///
    /// # Arguments
    /// - `authorization_code` - Code Discord handed to the frontend after consent
    ///
    /// # Returns
    /// - `Ok(DiscordTokenResponse)` - Discord's token response, every field preserved
    /// - `Err(AppError::UpstreamErr)` - Discord rejected the code or could not be reached;
    ///   Discord's error payload is attached
    pub async fn exchange_code(
        &self,
        authorization_code: String,
    ) -> Result<DiscordTokenResponse, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(UpstreamError::from)?;

        tracing::debug!(
            "Discord granted scopes {:?}",
            token
                .scopes()
                .map(|scopes| scopes.iter().map(|scope| scope.as_str()).collect::<Vec<_>>())
        );

        Ok(token)
    }
}

//! Authentication and account API client methods

use super::{RequestSpec, StorefrontClient};
use crate::error::ClientError;
use reqwest::Method;
use serde_json::json;
use storefront_core::types::{
    AuthSession, ChangePasswordRequest, LoginRequest, PasswordResetConfirmRequest,
    RegisterRequest, UpdateProfileRequest, User,
};

impl StorefrontClient {
    /// Register a new account. On success the issued tokens and user snapshot
    /// are stored in the session.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthSession, ClientError> {
        let spec = RequestSpec::new(Method::POST, "/auth/register/").json(request)?;
        let session: AuthSession = self.execute(spec).await?;
        self.store_auth_session(&session);
        Ok(session)
    }

    /// Log in. On success the issued tokens and user snapshot are stored in
    /// the session.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthSession, ClientError> {
        let spec = RequestSpec::new(Method::POST, "/auth/login/").json(request)?;
        let session: AuthSession = self.execute(spec).await?;
        self.store_auth_session(&session);
        Ok(session)
    }

    /// Log out. There is no server-side logout endpoint; this clears the
    /// local session.
    pub fn logout(&self) {
        self.session().clear();
    }

    /// Fetch the authenticated user's profile and refresh the cached
    /// snapshot.
    pub async fn profile(&self) -> Result<User, ClientError> {
        let spec = RequestSpec::new(Method::GET, "/auth/profile/");
        let user: User = self.execute(spec).await?;
        self.session().set_current_user(Some(user.clone()));
        Ok(user)
    }

    /// Update profile fields and refresh the cached snapshot.
    pub async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> Result<User, ClientError> {
        let spec = RequestSpec::new(Method::PUT, "/auth/profile/update/").json(request)?;
        let user: User = self.execute(spec).await?;
        self.session().set_current_user(Some(user.clone()));
        Ok(user)
    }

    pub async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<String, ClientError> {
        let spec = RequestSpec::new(Method::POST, "/auth/password/change/").json(request)?;
        self.execute_message(spec).await
    }

    pub async fn request_password_reset(&self, email: &str) -> Result<String, ClientError> {
        let spec = RequestSpec::new(Method::POST, "/auth/password/reset/request/")
            .json(&json!({ "email": email }))?;
        self.execute_message(spec).await
    }

    pub async fn confirm_password_reset(
        &self,
        request: &PasswordResetConfirmRequest,
    ) -> Result<String, ClientError> {
        let spec = RequestSpec::new(Method::POST, "/auth/password/reset/confirm/").json(request)?;
        self.execute_message(spec).await
    }

    /// Verify the email address with the token from the verification mail.
    /// Marks the cached user snapshot verified on success.
    pub async fn verify_email(&self, token: &str) -> Result<String, ClientError> {
        let spec =
            RequestSpec::new(Method::POST, "/auth/email/verify/").json(&json!({ "token": token }))?;
        let message = self.execute_message(spec).await?;
        if let Some(mut user) = self.session().current_user() {
            user.is_email_verified = true;
            self.session().set_current_user(Some(user));
        }
        Ok(message)
    }

    pub async fn resend_verification_email(&self) -> Result<String, ClientError> {
        let spec = RequestSpec::new(Method::POST, "/auth/email/resend/");
        self.execute_message(spec).await
    }

    fn store_auth_session(&self, auth: &AuthSession) {
        let session = self.session();
        session.set_access_token(Some(auth.tokens.access.clone()));
        session.set_refresh_token(Some(auth.tokens.refresh.clone()));
        session.set_current_user(Some(auth.user.clone()));
    }
}

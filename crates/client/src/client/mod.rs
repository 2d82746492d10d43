//! Storefront HTTP client: request pipeline with transparent token refresh

pub mod auth;
pub mod cart;
pub mod orders;
pub mod payment;
pub mod products;

use crate::config::ApiConfig;
use crate::error::ClientError;
use crate::navigate::{Navigator, NoopNavigator};
use crate::session::SessionStore;
use reqwest::{header, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use storefront_core::envelope::ApiEnvelope;
use tokio::sync::Mutex;

/// A replayable request: method, path, query and JSON body. Kept separate
/// from `reqwest::RequestBuilder` so the 401 recovery path can re-issue the
/// request with a rewritten Authorization header.
#[derive(Debug, Clone)]
pub(crate) struct RequestSpec {
    method: Method,
    path: String,
    query: Vec<(&'static str, String)>,
    body: Option<Value>,
}

impl RequestSpec {
    pub(crate) fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub(crate) fn query(mut self, query: Vec<(&'static str, String)>) -> Self {
        self.query = query;
        self
    }

    pub(crate) fn json<T: serde::Serialize>(mut self, body: &T) -> Result<Self, ClientError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

/// Storefront API client
#[derive(Clone)]
pub struct StorefrontClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
    // Serializes refresh cycles so a burst of concurrent 401s issues a single
    // refresh request; waiters pick up the rotated token.
    refresh_gate: Arc<Mutex<()>>,
}

impl StorefrontClient {
    /// Create a client with default configuration and a fresh session.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session handle shared with this client.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Issue an arbitrary API request and unwrap the envelope payload. The
    /// typed wrapper methods cover the known endpoints; this is the escape
    /// hatch for anything else, with the same auth and refresh behavior.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        query: Vec<(&'static str, String)>,
    ) -> Result<T, ClientError> {
        let mut spec = RequestSpec::new(method, path).query(query);
        spec.body = body;
        self.execute(spec).await
    }

    /// Issue a request and unwrap the response envelope into its payload.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        spec: RequestSpec,
    ) -> Result<T, ClientError> {
        let envelope: ApiEnvelope<T> = self.send_enveloped(spec).await?;
        envelope.into_data().map_err(Into::into)
    }

    /// Issue a request whose envelope carries no payload worth typing (data
    /// absent or null); yields the server's human-readable message instead.
    pub(crate) async fn execute_message(&self, spec: RequestSpec) -> Result<String, ClientError> {
        let envelope: ApiEnvelope<Value> = self.send_enveloped(spec).await?;
        if envelope.success {
            Ok(envelope.message)
        } else {
            Err(ClientError::Rejected {
                message: envelope.message,
                errors: envelope.errors.unwrap_or_default(),
            })
        }
    }

    async fn send_enveloped<T: DeserializeOwned>(
        &self,
        spec: RequestSpec,
    ) -> Result<ApiEnvelope<T>, ClientError> {
        tracing::debug!(method = %spec.method, path = %spec.path, "issuing request");

        let token = self.session.access_token();
        let response = self.send_raw(&spec, token.as_deref()).await?;
        let status = response.status();

        if status != StatusCode::UNAUTHORIZED {
            return Self::handle_response(response).await;
        }

        let body = response.bytes().await?;
        let original = ClientError::from_status(status, &body);
        self.refresh_and_retry(spec, token, original).await
    }

    async fn send_raw(
        &self,
        spec: &RequestSpec,
        token: Option<&str>,
    ) -> Result<reqwest::Response, ClientError> {
        let url = format!("{}{}", self.base_url, spec.path);
        let mut request = self.http.request(spec.method.clone(), url);
        if !spec.query.is_empty() {
            request = request.query(&spec.query);
        }
        if let Some(body) = &spec.body {
            request = request.json(body);
        }
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        Ok(request.send().await?)
    }

    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<ApiEnvelope<T>, ClientError> {
        let status = response.status();
        let body = response.bytes().await?;
        if status.is_success() {
            Ok(serde_json::from_slice(&body)?)
        } else {
            Err(ClientError::from_status(status, &body))
        }
    }

    /// Single refresh-and-retry cycle for an originating request that hit a
    /// 401. At most one retry; a second 401 on the retried request surfaces
    /// as `Unauthorized` and is never looped.
    async fn refresh_and_retry<T: DeserializeOwned>(
        &self,
        spec: RequestSpec,
        stale_token: Option<String>,
        original: ClientError,
    ) -> Result<ApiEnvelope<T>, ClientError> {
        let Some(refresh_token) = self.session.refresh_token() else {
            // Nothing to refresh with: the original 401 is the caller's
            // problem.
            return Err(original);
        };

        let fresh = {
            let _gate = self.refresh_gate.lock().await;
            // A concurrent refresh may have ended the session while we waited
            // on the gate; don't refresh (or redirect) a second time.
            if self.session.refresh_token().is_none() {
                return Err(ClientError::SessionExpired {
                    message: "session ended while waiting for token refresh".to_string(),
                });
            }
            match self.session.access_token() {
                // Another in-flight request already rotated the token while
                // we waited on the gate.
                Some(rotated) if stale_token.as_deref() != Some(rotated.as_str()) => rotated,
                _ => self.refresh_access_token(&refresh_token, &spec.path).await?,
            }
        };

        tracing::debug!(path = %spec.path, "retrying request with refreshed access token");
        let response = self.send_raw(&spec, Some(&fresh)).await?;
        Self::handle_response(response).await
    }

    /// Exchange the refresh token for a new access token and store it. On any
    /// failure the session is over: clear it, signal the navigation layer,
    /// and surface the refresh failure instead of the original 401.
    async fn refresh_access_token(
        &self,
        refresh_token: &str,
        intended: &str,
    ) -> Result<String, ClientError> {
        match self.request_new_access_token(refresh_token).await {
            Ok(access) => {
                self.session.set_access_token(Some(access.clone()));
                Ok(access)
            }
            Err(error) => {
                tracing::warn!(%error, "token refresh failed, ending session");
                self.session.clear();
                self.navigator.redirect_to_login(Some(intended));
                Err(ClientError::SessionExpired {
                    message: error.to_string(),
                })
            }
        }
    }

    async fn request_new_access_token(&self, refresh_token: &str) -> Result<String, ClientError> {
        let url = format!("{}/auth/token/refresh/", self.base_url);
        let response = self
            .http
            .post(url)
            .json(&serde_json::json!({ "refresh": refresh_token }))
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(ClientError::from_status(status, &body));
        }

        let value: Value = serde_json::from_slice(&body)?;
        // Enveloped responses carry the token at data.access; the bare JWT
        // refresh view returns it at the top level.
        value
            .pointer("/data/access")
            .or_else(|| value.get("access"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| ClientError::Rejected {
                message: "token refresh response did not include an access token".to_string(),
                errors: Default::default(),
            })
    }
}

/// Builder for `StorefrontClient`
#[derive(Default)]
pub struct ClientBuilder {
    config: ApiConfig,
    session: Option<SessionStore>,
    navigator: Option<Arc<dyn Navigator>>,
}

impl ClientBuilder {
    /// Start from an explicit configuration (see `ApiConfig::from_env`).
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout, applied uniformly to every call including
    /// refresh and retry.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Share an existing session store (e.g. with a route guard).
    pub fn session(mut self, session: SessionStore) -> Self {
        self.session = Some(session);
        self
    }

    /// Install the navigation seam invoked on terminal refresh failure.
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<StorefrontClient, ClientError> {
        let base_url = self.config.normalized_base_url();
        if base_url.is_empty() {
            return Err(ClientError::Configuration("base_url is required".into()));
        }
        url::Url::parse(&base_url)
            .map_err(|e| ClientError::Configuration(format!("invalid base_url: {e}")))?;

        let mut builder = reqwest::ClientBuilder::new().user_agent(self.config.user_agent);
        if let Some(timeout) = self.config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(StorefrontClient {
            http,
            base_url,
            session: self.session.unwrap_or_default(),
            navigator: self.navigator.unwrap_or_else(|| Arc::new(NoopNavigator)),
            refresh_gate: Arc::new(Mutex::new(())),
        })
    }
}

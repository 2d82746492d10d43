//! Storefront API client
//!
//! A typed client for the storefront REST API. Requests carry a bearer access
//! token when one is present; a 401 triggers a single transparent
//! refresh-and-retry cycle against the token-refresh endpoint, and a failed
//! refresh ends the session and signals the navigation layer to return to the
//! login entry point.

pub mod client;
pub mod config;
pub mod error;
pub mod navigate;
pub mod resource;
pub mod session;

pub use client::{ClientBuilder, StorefrontClient};
pub use config::ApiConfig;
pub use error::ClientError;
pub use navigate::{Navigator, NoopNavigator};
pub use resource::{Remote, Resource};
pub use session::SessionStore;

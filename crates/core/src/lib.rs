//! Storefront core types and utilities

pub mod envelope;
pub mod routes;
pub mod types;

pub use envelope::{ApiEnvelope, ApiRejection, FieldErrors, Page};
pub use routes::{check_navigation, find_route, Guard, Route, RouteAccess, ROUTES};

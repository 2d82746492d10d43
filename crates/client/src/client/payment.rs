//! Payment API client methods

use super::{RequestSpec, StorefrontClient};
use crate::error::ClientError;
use reqwest::Method;
use serde_json::json;
use storefront_core::types::{CheckoutSession, Payment};

impl StorefrontClient {
    /// Create a hosted checkout session for an order; the returned URL is
    /// where the user completes payment.
    pub async fn create_checkout_session(
        &self,
        order_id: u64,
    ) -> Result<CheckoutSession, ClientError> {
        let spec = RequestSpec::new(Method::POST, "/payment/create-checkout-session/")
            .json(&json!({ "order_id": order_id }))?;
        self.execute(spec).await
    }

    /// Look up the payment record for an order.
    pub async fn payment_for_order(&self, order_id: u64) -> Result<Payment, ClientError> {
        self.execute(RequestSpec::new(
            Method::GET,
            format!("/payment/order/{order_id}/"),
        ))
        .await
    }
}

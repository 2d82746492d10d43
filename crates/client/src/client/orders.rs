//! Order API client methods

use super::{RequestSpec, StorefrontClient};
use crate::error::ClientError;
use reqwest::Method;
use storefront_core::envelope::Page;
use storefront_core::types::{CreateOrderRequest, Order, OrderListQuery};

impl StorefrontClient {
    /// List the authenticated user's orders, newest first.
    pub async fn orders(&self, query: &OrderListQuery) -> Result<Page<Order>, ClientError> {
        let spec = RequestSpec::new(Method::GET, "/orders/").query(query.to_query());
        self.execute(spec).await
    }

    /// Fetch one order by id.
    pub async fn order(&self, order_id: u64) -> Result<Order, ClientError> {
        self.execute(RequestSpec::new(Method::GET, format!("/orders/{order_id}/")))
            .await
    }

    /// Create an order from the given items and shipping details.
    pub async fn create_order(&self, request: &CreateOrderRequest) -> Result<Order, ClientError> {
        let spec = RequestSpec::new(Method::POST, "/orders/create/").json(request)?;
        self.execute(spec).await
    }

    /// Cancel a pending order; returns the updated order.
    pub async fn cancel_order(&self, order_id: u64) -> Result<Order, ClientError> {
        self.execute(RequestSpec::new(
            Method::POST,
            format!("/orders/{order_id}/cancel/"),
        ))
        .await
    }
}

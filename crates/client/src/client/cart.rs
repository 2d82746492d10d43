//! Cart API client methods

use super::{RequestSpec, StorefrontClient};
use crate::error::ClientError;
use reqwest::Method;
use serde_json::json;
use storefront_core::types::{AddToCartRequest, Cart};

impl StorefrontClient {
    /// Get the authenticated user's cart.
    pub async fn cart(&self) -> Result<Cart, ClientError> {
        self.execute(RequestSpec::new(Method::GET, "/cart/")).await
    }

    /// Add a product (optionally a specific variant) to the cart; returns the
    /// updated cart.
    pub async fn add_to_cart(&self, request: &AddToCartRequest) -> Result<Cart, ClientError> {
        let spec = RequestSpec::new(Method::POST, "/cart/add/").json(request)?;
        self.execute(spec).await
    }

    /// Change the quantity of a cart item; returns the updated cart.
    pub async fn update_cart_item(&self, item_id: u64, quantity: u32) -> Result<Cart, ClientError> {
        let spec = RequestSpec::new(Method::PATCH, format!("/cart/items/{item_id}/"))
            .json(&json!({ "quantity": quantity }))?;
        self.execute(spec).await
    }

    /// Remove a cart item; returns the updated cart.
    pub async fn remove_cart_item(&self, item_id: u64) -> Result<Cart, ClientError> {
        let spec = RequestSpec::new(Method::DELETE, format!("/cart/items/{item_id}/"));
        self.execute(spec).await
    }

    /// Empty the cart; returns the (now empty) cart.
    pub async fn clear_cart(&self) -> Result<Cart, ClientError> {
        self.execute(RequestSpec::new(Method::DELETE, "/cart/")).await
    }
}

//! Domain models and request payloads mirroring the storefront API

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Auth

/// Authenticated user profile snapshot. Cached client-side for display only;
/// the server copy is authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub is_email_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Access/refresh token pair issued on login and registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access: String,
    pub refresh: String,
}

/// Payload of a successful login or registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: User,
    pub tokens: AuthTokens,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
    pub new_password_confirm: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResetConfirmRequest {
    pub token: String,
    pub new_password: String,
    pub new_password_confirm: String,
}

// ---------------------------------------------------------------------------
// Cart

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantDetails {
    pub id: u64,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub color_hex: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub id: u64,
    pub product: serde_json::Value,
    #[serde(default)]
    pub variant_details: Option<VariantDetails>,
    pub quantity: u32,
    pub price: Decimal,
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    pub id: u64,
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub total_items: u32,
    pub subtotal: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<u64>,
    pub quantity: u32,
}

// ---------------------------------------------------------------------------
// Orders

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: u64,
    pub product: serde_json::Value,
    #[serde(default)]
    pub variant_details: Option<VariantDetails>,
    pub quantity: u32,
    pub price: Decimal,
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub order_number: String,
    pub status: String,
    #[serde(default)]
    pub status_display: String,
    pub payment_status: String,
    #[serde(default)]
    pub payment_status_display: String,
    pub shipping_first_name: String,
    pub shipping_last_name: String,
    pub shipping_email: String,
    pub shipping_phone: String,
    pub shipping_address: String,
    pub shipping_city: String,
    pub shipping_state: String,
    pub shipping_postal_code: String,
    pub shipping_country: String,
    pub subtotal: Decimal,
    pub shipping_cost: Decimal,
    pub total: Decimal,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderItem {
    pub product_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<u64>,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub shipping_first_name: String,
    pub shipping_last_name: String,
    pub shipping_email: String,
    pub shipping_phone: String,
    pub shipping_address: String,
    pub shipping_city: String,
    pub shipping_state: String,
    pub shipping_postal_code: String,
    pub shipping_country: String,
    pub items: Vec<CreateOrderItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_cost: Option<Decimal>,
}

/// Query parameters accepted by the order list endpoint.
#[derive(Debug, Clone, Default)]
pub struct OrderListQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub status: Option<String>,
}

impl OrderListQuery {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            query.push(("page_size", page_size.to_string()));
        }
        if let Some(status) = &self.status {
            query.push(("status", status.clone()));
        }
        query
    }
}

// ---------------------------------------------------------------------------
// Payment

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: u64,
    pub order: u64,
    pub order_number: String,
    #[serde(default)]
    pub stripe_payment_intent_id: Option<String>,
    #[serde(default)]
    pub stripe_checkout_session_id: Option<String>,
    pub amount: Decimal,
    pub currency: String,
    pub status: String,
    #[serde(default)]
    pub status_display: String,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub receipt_url: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response of the checkout-session endpoint: the payment record plus the
/// hosted checkout URL to send the user to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub payment: Payment,
    pub checkout_url: String,
}

// ---------------------------------------------------------------------------
// Products

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent: Option<u64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub children_count: u32,
    #[serde(default)]
    pub products_count: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductImage {
    pub id: u64,
    pub image: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub order: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductVariant {
    pub id: u64,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub color_hex: Option<String>,
    pub sku: String,
    pub stock_quantity: u32,
    pub price_adjustment: Decimal,
    pub final_price: Decimal,
    pub is_in_stock: bool,
    #[serde(default)]
    pub is_active: bool,
}

/// Compact product shape returned by list, featured, related and search
/// endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub category_name: String,
    pub price: Decimal,
    #[serde(default)]
    pub sale_price: Option<Decimal>,
    #[serde(default)]
    pub primary_image: Option<String>,
    #[serde(default)]
    pub is_on_sale: bool,
    #[serde(default)]
    pub discount_percentage: u32,
    #[serde(default)]
    pub is_in_stock: bool,
}

/// Full product detail shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: Category,
    pub price: Decimal,
    #[serde(default)]
    pub sale_price: Option<Decimal>,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    #[serde(default)]
    pub is_on_sale: bool,
    #[serde(default)]
    pub discount_percentage: u32,
    #[serde(default)]
    pub is_in_stock: bool,
    #[serde(default)]
    pub stock_quantity: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Query parameters accepted by the product list endpoint.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ProductListQuery {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(category) = &self.category {
            query.push(("category", category.clone()));
        }
        if let Some(search) = &self.search {
            query.push(("search", search.clone()));
        }
        if let Some(ordering) = &self.ordering {
            query.push(("ordering", ordering.clone()));
        }
        if let Some(min_price) = self.min_price {
            query.push(("min_price", min_price.to_string()));
        }
        if let Some(max_price) = self.max_price {
            query.push(("max_price", max_price.to_string()));
        }
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            query.push(("page_size", page_size.to_string()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_deserializes_from_profile_payload() {
        let body = json!({
            "id": 7,
            "email": "jane@example.com",
            "first_name": "Jane",
            "last_name": "Doe",
            "full_name": "Jane Doe",
            "phone_number": null,
            "date_of_birth": "1990-04-01",
            "is_email_verified": true,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-06-01T12:30:00Z"
        });
        let user: User = serde_json::from_value(body).unwrap();
        assert_eq!(user.email, "jane@example.com");
        assert!(user.is_email_verified);
    }

    #[test]
    fn decimal_fields_accept_string_values() {
        // Django serializes DecimalField as a JSON string.
        let body = json!({
            "id": 3,
            "items": [],
            "total_items": 0,
            "subtotal": "19.98",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        });
        let cart: Cart = serde_json::from_value(body).unwrap();
        assert_eq!(cart.subtotal.to_string(), "19.98");
    }

    #[test]
    fn optional_request_fields_are_omitted() {
        let request = AddToCartRequest {
            product_id: 11,
            variant_id: None,
            quantity: 2,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("variant_id").is_none());
        assert_eq!(value["quantity"], 2);
    }

    #[test]
    fn order_list_query_serializes_set_fields_only() {
        let query = OrderListQuery {
            page: Some(2),
            page_size: None,
            status: Some("pending".into()),
        };
        assert_eq!(
            query.to_query(),
            vec![("page", "2".to_string()), ("status", "pending".to_string())]
        );
    }
}

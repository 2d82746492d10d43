//! Product and category API client methods

use super::{RequestSpec, StorefrontClient};
use crate::error::ClientError;
use reqwest::Method;
use storefront_core::envelope::Page;
use storefront_core::types::{Category, Product, ProductListQuery, ProductSummary};

impl StorefrontClient {
    /// List all active categories.
    pub async fn categories(&self) -> Result<Vec<Category>, ClientError> {
        self.execute(RequestSpec::new(Method::GET, "/products/categories/"))
            .await
    }

    /// Fetch one category by slug.
    pub async fn category(&self, slug: &str) -> Result<Category, ClientError> {
        self.execute(RequestSpec::new(
            Method::GET,
            format!("/products/categories/{slug}/"),
        ))
        .await
    }

    /// List products with the given filters, paginated.
    pub async fn products(
        &self,
        query: &ProductListQuery,
    ) -> Result<Page<ProductSummary>, ClientError> {
        let spec = RequestSpec::new(Method::GET, "/products/").query(query.to_query());
        self.execute(spec).await
    }

    /// Fetch one product by slug.
    pub async fn product(&self, slug: &str) -> Result<Product, ClientError> {
        self.execute(RequestSpec::new(Method::GET, format!("/products/{slug}/")))
            .await
    }

    /// Fetch the featured products shown on the home page.
    pub async fn featured_products(&self, limit: u32) -> Result<Vec<ProductSummary>, ClientError> {
        let spec = RequestSpec::new(Method::GET, "/products/featured/")
            .query(vec![("limit", limit.to_string())]);
        self.execute(spec).await
    }

    /// Fetch products related to the given one.
    pub async fn related_products(
        &self,
        slug: &str,
        limit: u32,
    ) -> Result<Vec<ProductSummary>, ClientError> {
        let spec = RequestSpec::new(Method::GET, format!("/products/{slug}/related/"))
            .query(vec![("limit", limit.to_string())]);
        self.execute(spec).await
    }

    /// Full-text product search.
    pub async fn search_products(&self, query: &str) -> Result<Vec<ProductSummary>, ClientError> {
        let spec = RequestSpec::new(Method::GET, "/products/search/")
            .query(vec![("q", query.to_string())]);
        self.execute(spec).await
    }
}

use async_trait::async_trait;
use tracing::{info, instrument};

use super::stock_repository::normalize_base_url;
use crate::models::{Product, RepositoryError, RepositoryResult};

/// Trait defining read-only access to the product-catalog service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Fetch the catalog metadata for a product
    async fn find_product(&self, product_id: u64) -> RepositoryResult<Product>;
}

/// HTTP implementation of the [`CatalogRepository`] trait, backed by
/// `GET {base_url}/products/{product_id}`
pub struct HttpCatalogRepository {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogRepository {
    /// Create a new HTTP catalog repository
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: normalize_base_url(base_url.into()),
        }
    }
}

#[async_trait]
impl CatalogRepository for HttpCatalogRepository {
    #[instrument(skip(self), fields(product_id = product_id))]
    async fn find_product(&self, product_id: u64) -> RepositoryResult<Product> {
        let url = format!("{}/products/{}", self.base_url, product_id);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RepositoryError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let product: Product = response.json().await?;
        info!(title = %product.title, "Product metadata retrieved");
        Ok(product)
    }
}

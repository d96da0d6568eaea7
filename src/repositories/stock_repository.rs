use async_trait::async_trait;
use tracing::{info, instrument};

use crate::models::{RepositoryError, RepositoryResult, StockRecord};

/// Trait defining read-only access to the stock-availability service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StockRepository: Send + Sync {
    /// Fetch the stock record for a product
    async fn find_stock(&self, product_id: u64) -> RepositoryResult<StockRecord>;
}

/// HTTP implementation of the [`StockRepository`] trait, backed by
/// `GET {base_url}/stock/{product_id}`
pub struct HttpStockRepository {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStockRepository {
    /// Create a new HTTP stock repository
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: normalize_base_url(base_url.into()),
        }
    }
}

#[async_trait]
impl StockRepository for HttpStockRepository {
    #[instrument(skip(self), fields(product_id = product_id))]
    async fn find_stock(&self, product_id: u64) -> RepositoryResult<StockRecord> {
        let url = format!("{}/stock/{}", self.base_url, product_id);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RepositoryError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let stock: StockRecord = response.json().await?;
        info!(
            available_amount = stock.available_amount,
            "Stock record retrieved"
        );
        Ok(stock)
    }
}

pub(crate) fn normalize_base_url(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::models::{Cart, RepositoryResult};

/// Trait defining the interface for the durable cart snapshot store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Load the persisted cart snapshot, if one exists
    async fn load_cart(&self) -> RepositoryResult<Option<Cart>>;

    /// Persist the full cart snapshot, replacing any previous one
    async fn save_cart(&self, cart: &Cart) -> RepositoryResult<()>;
}

/// JSON-file implementation of the [`CartRepository`] trait.
///
/// One file holds the whole serialized cart; it is read once at startup and
/// rewritten in full on every successful mutation.
pub struct JsonFileCartRepository {
    path: PathBuf,
}

impl JsonFileCartRepository {
    /// Create a new file-backed cart repository
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the snapshot path (for testing)
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl CartRepository for JsonFileCartRepository {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load_cart(&self) -> RepositoryResult<Option<Cart>> {
        let contents = match tokio::fs::read(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No cart snapshot found");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let cart: Cart = serde_json::from_slice(&contents)?;
        info!("Cart snapshot loaded with {} items", cart.items.len());
        Ok(Some(cart))
    }

    #[instrument(skip(self, cart), fields(path = %self.path.display(), item_count = cart.items.len()))]
    async fn save_cart(&self, cart: &Cart) -> RepositoryResult<()> {
        let contents = serde_json::to_vec(cart)?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, contents).await?;

        info!("Cart snapshot saved");
        Ok(())
    }
}

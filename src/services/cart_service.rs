use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tracing::{debug, info, instrument, warn};

use crate::config::Config;
use crate::models::{Cart, CartError, CartItem, CartResult, RepositoryError};
use crate::repositories::{
    CartRepository, CatalogRepository, HttpCatalogRepository, HttpStockRepository,
    JsonFileCartRepository, StockRepository,
};

/// Shared cart state manager.
///
/// Owns the in-memory cart and its durable snapshot, validates quantity
/// changes against the stock service, and publishes every committed snapshot
/// to subscribers. Mutations are serialized through an internal lock held
/// across the whole operation, so one operation's persist and publish
/// complete before the next begins.
pub struct CartService {
    cart: Mutex<Cart>,
    cart_repository: Arc<dyn CartRepository>,
    stock_repository: Arc<dyn StockRepository>,
    catalog_repository: Arc<dyn CatalogRepository>,
    snapshot_tx: watch::Sender<Vec<CartItem>>,
}

impl CartService {
    /// Create the service by loading the persisted snapshot.
    ///
    /// An absent snapshot starts an empty cart; an unreadable or unparseable
    /// one is logged and treated the same way.
    #[instrument(skip_all)]
    pub async fn load(
        cart_repository: Arc<dyn CartRepository>,
        stock_repository: Arc<dyn StockRepository>,
        catalog_repository: Arc<dyn CatalogRepository>,
    ) -> Self {
        let cart = match cart_repository.load_cart().await {
            Ok(Some(cart)) => {
                info!("Cart restored with {} items", cart.items.len());
                cart
            }
            Ok(None) => {
                info!("No persisted cart, starting empty");
                Cart::new()
            }
            Err(e) => {
                warn!("Failed to load cart snapshot, starting empty: {}", e);
                Cart::new()
            }
        };

        let (snapshot_tx, _) = watch::channel(cart.items.clone());

        Self {
            cart: Mutex::new(cart),
            cart_repository,
            stock_repository,
            catalog_repository,
            snapshot_tx,
        }
    }

    /// Build the service from configuration: a JSON-file snapshot store plus
    /// HTTP stock and catalog repositories sharing one client.
    pub async fn from_config(config: &Config) -> CartResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.api.request_timeout())
            .build()
            .map_err(RepositoryError::from)?;

        let cart_repository = Arc::new(JsonFileCartRepository::new(
            config.storage.cart_file.as_str(),
        ));
        let stock_repository = Arc::new(HttpStockRepository::new(
            client.clone(),
            config.api.base_url.clone(),
        ));
        let catalog_repository = Arc::new(HttpCatalogRepository::new(
            client,
            config.api.base_url.clone(),
        ));

        Ok(Self::load(cart_repository, stock_repository, catalog_repository).await)
    }

    /// Current cart snapshot
    pub async fn items(&self) -> Vec<CartItem> {
        self.cart.lock().await.items.clone()
    }

    /// Subscribe to committed cart snapshots.
    ///
    /// The receiver starts at the current snapshot and sees every committed
    /// mutation afterwards.
    pub fn subscribe(&self) -> watch::Receiver<Vec<CartItem>> {
        self.snapshot_tx.subscribe()
    }

    /// Add one unit of a product to the cart.
    ///
    /// An item already in the cart has its amount incremented by 1, capped by
    /// the stock service's available amount. A product not yet in the cart is
    /// fetched from the catalog and appended with amount 1. Exactly one of
    /// the two branches runs, evaluated in that order.
    #[instrument(skip(self))]
    pub async fn add_product(&self, product_id: u64) -> CartResult<Vec<CartItem>> {
        info!("Adding product to cart");
        let mut cart = self.cart.lock().await;

        let mut candidate = cart.clone();
        match cart.get_item(product_id) {
            Some(item) => {
                let stock = self.stock_repository.find_stock(product_id).await?;
                if item.amount >= stock.available_amount {
                    warn!(
                        amount = item.amount,
                        available = stock.available_amount,
                        "Cart already holds all available stock"
                    );
                    return Err(CartError::StockExceeded {
                        product_id,
                        requested: item.amount + 1,
                        available: stock.available_amount,
                    });
                }
                candidate.increment_item(product_id);
            }
            None => {
                let product = self.catalog_repository.find_product(product_id).await?;
                candidate.append_product(product);
            }
        }

        self.commit(&mut cart, candidate).await
    }

    /// Remove a product from the cart. Purely local, no network call.
    #[instrument(skip(self))]
    pub async fn remove_product(&self, product_id: u64) -> CartResult<Vec<CartItem>> {
        info!("Removing product from cart");
        let mut cart = self.cart.lock().await;

        if !cart.contains_item(product_id) {
            warn!("Product not in cart");
            return Err(CartError::ItemNotFound { product_id });
        }

        let mut candidate = cart.clone();
        candidate.remove_item(product_id);

        self.commit(&mut cart, candidate).await
    }

    /// Set the quantity of a product in the cart to an absolute value.
    ///
    /// Non-positive amounts are a silent no-op; callers decrementing to zero
    /// are expected to call [`remove_product`](Self::remove_product) instead.
    /// Increases are ceiling-checked against the stock service; decreases are
    /// not floor-checked beyond the non-positive guard.
    #[instrument(skip(self))]
    pub async fn update_product_amount(
        &self,
        product_id: u64,
        amount: i64,
    ) -> CartResult<Vec<CartItem>> {
        let mut cart = self.cart.lock().await;

        if amount <= 0 {
            debug!("Ignoring non-positive amount");
            return Ok(cart.items.clone());
        }

        info!("Updating product amount");
        if !cart.contains_item(product_id) {
            warn!("Product not in cart");
            return Err(CartError::ItemNotFound { product_id });
        }

        let stock = self.stock_repository.find_stock(product_id).await?;
        // Compare in u64 so amounts beyond u32::MAX are rejected, not truncated
        if amount as u64 > u64::from(stock.available_amount) {
            warn!(
                requested = amount,
                available = stock.available_amount,
                "Requested amount exceeds available stock"
            );
            return Err(CartError::StockExceeded {
                product_id,
                requested: u32::try_from(amount).unwrap_or(u32::MAX),
                available: stock.available_amount,
            });
        }
        let requested = amount as u32;

        let mut candidate = cart.clone();
        candidate.set_item_amount(product_id, requested);

        self.commit(&mut cart, candidate).await
    }

    /// Persist the candidate cart, then commit it in memory and publish the
    /// new snapshot. A failed persist leaves both memory and disk at the
    /// previous state.
    async fn commit(&self, cart: &mut Cart, candidate: Cart) -> CartResult<Vec<CartItem>> {
        self.cart_repository.save_cart(&candidate).await?;
        *cart = candidate;

        let items = cart.items.clone();
        self.snapshot_tx.send_replace(items.clone());
        info!("Cart committed with {} items", items.len());
        Ok(items)
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Product;

/// Shopping cart for one session
///
/// Items keep insertion order (add order) and are unique by product id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

/// Individual item in a shopping cart: product metadata plus the desired
/// purchase quantity (always >= 1 while the item is in the cart).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: u64,
    pub title: String,
    pub price: Decimal,
    pub image_url: String,
    pub amount: u32,
}

impl Cart {
    /// Create a new empty cart
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Get a specific item from the cart
    pub fn get_item(&self, product_id: u64) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == product_id)
    }

    /// Check if a specific product is in the cart
    pub fn contains_item(&self, product_id: u64) -> bool {
        self.items.iter().any(|item| item.id == product_id)
    }

    /// Get the quantity of a specific product in the cart (0 if absent)
    pub fn get_item_amount(&self, product_id: u64) -> u32 {
        self.get_item(product_id).map(|item| item.amount).unwrap_or(0)
    }

    /// Append a new item built from catalog metadata with `amount = 1`.
    /// The item becomes the last element of the cart.
    pub fn append_product(&mut self, product: Product) {
        self.items.push(CartItem::from_product(product));
    }

    /// Increment the quantity of an existing item by 1
    pub fn increment_item(&mut self, product_id: u64) -> bool {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == product_id) {
            item.amount += 1;
            true
        } else {
            false
        }
    }

    /// Set the quantity of an existing item to an absolute value
    pub fn set_item_amount(&mut self, product_id: u64, amount: u32) -> bool {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == product_id) {
            item.amount = amount;
            true
        } else {
            false
        }
    }

    /// Remove an item from the cart
    pub fn remove_item(&mut self, product_id: u64) -> bool {
        let original_len = self.items.len();
        self.items.retain(|item| item.id != product_id);
        self.items.len() != original_len
    }

    /// Get the total number of units in the cart
    pub fn total_amount(&self) -> u32 {
        self.items.iter().map(|item| item.amount).sum()
    }

    /// Get the total price of all items in the cart
    pub fn total_price(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| item.price * Decimal::from(item.amount))
            .sum()
    }

    /// Check if the cart is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl CartItem {
    /// Build a cart item from catalog metadata with an initial quantity of 1
    pub fn from_product(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            image_url: product.image_url,
            amount: 1,
        }
    }

    /// Get the total price for this item (price * amount)
    pub fn total_price(&self) -> Decimal {
        self.price * Decimal::from(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn test_product(id: u64, price: Decimal) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price,
            image_url: format!("https://cdn.example.com/{}.jpg", id),
        }
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();

        assert!(cart.is_empty());
        assert_eq!(cart.total_amount(), 0);
        assert_eq!(cart.total_price(), dec!(0));
    }

    #[test]
    fn test_append_product() {
        let mut cart = Cart::new();

        cart.append_product(test_product(1, dec!(12.99)));

        assert_eq!(cart.items.len(), 1);
        assert!(cart.contains_item(1));
        assert_eq!(cart.get_item_amount(1), 1);
        assert_eq!(cart.total_price(), dec!(12.99));
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut cart = Cart::new();

        cart.append_product(test_product(3, dec!(1.00)));
        cart.append_product(test_product(1, dec!(2.00)));
        cart.append_product(test_product(2, dec!(3.00)));

        let ids: Vec<u64> = cart.items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_increment_item() {
        let mut cart = Cart::new();
        cart.append_product(test_product(1, dec!(12.99)));

        assert!(cart.increment_item(1));
        assert_eq!(cart.get_item_amount(1), 2);
        assert_eq!(cart.total_price(), dec!(25.98));

        assert!(!cart.increment_item(99));
    }

    #[test]
    fn test_set_item_amount() {
        let mut cart = Cart::new();
        cart.append_product(test_product(2, dec!(8.50)));

        assert!(cart.set_item_amount(2, 7));
        assert_eq!(cart.get_item_amount(2), 7);

        assert!(!cart.set_item_amount(99, 1));
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        cart.append_product(test_product(1, dec!(12.99)));
        cart.append_product(test_product(2, dec!(8.99)));

        assert!(cart.remove_item(1));
        assert!(!cart.contains_item(1));
        assert_eq!(cart.items.len(), 1);

        assert!(!cart.remove_item(99));
    }

    #[test]
    fn test_total_calculation() {
        let mut cart = Cart::new();
        cart.append_product(test_product(1, dec!(12.99)));
        cart.append_product(test_product(2, dec!(8.99)));
        cart.increment_item(1);
        cart.set_item_amount(2, 3);

        assert_eq!(cart.total_amount(), 5);
        assert_eq!(cart.total_price(), dec!(52.95)); // 25.98 + 26.97
    }

    #[test]
    fn test_cart_item_total_price() {
        let mut item = CartItem::from_product(test_product(1, dec!(12.99)));
        assert_eq!(item.total_price(), dec!(12.99));

        item.amount = 3;
        assert_eq!(item.total_price(), dec!(38.97));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut cart = Cart::new();
        cart.append_product(test_product(1, dec!(12.99)));
        cart.append_product(test_product(4, dec!(99.00)));
        cart.set_item_amount(4, 2);

        let json = serde_json::to_string(&cart).unwrap();
        let deserialized: Cart = serde_json::from_str(&json).unwrap();

        assert_eq!(cart, deserialized);
    }
}

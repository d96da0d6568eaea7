use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Immutable product metadata served by the catalog service.
///
/// The catalog wire format uses camelCase field names (`imageUrl`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: Decimal,
    pub image_url: String,
}

/// Stock availability record served by the stock service.
///
/// `available_amount` is the authoritative ceiling for the quantity of a
/// product that may be held in a cart. The stock wire format uses camelCase
/// field names (`availableAmount`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    pub id: u64,
    pub available_amount: u32,
}

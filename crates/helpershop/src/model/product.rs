/// Represents a product held in stock.
///
/// Products are immutable once created: the catalog exposes no update or
/// remove operation, and finalizing an order does not touch `quantity`.
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// Location reference for a product photo, as handed over by the image
/// picker (a URI on the device).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageRef {
    fn from(uri: &str) -> Self {
        Self(uri.to_string())
    }
}

impl From<String> for ImageRef {
    fn from(uri: String) -> Self {
        Self(uri)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub image: ImageRef,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (set by the catalog actor)
    /// * `name` - Product name
    /// * `price` - Unit price
    /// * `quantity` - Stock quantity on hand
    /// * `image` - Photo reference from the picker
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Decimal,
        quantity: u32,
        image: ImageRef,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
            image,
        }
    }
}

/// Payload for creating a new product. Inputs are validated by the stock
/// intake gate before this payload is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub image: ImageRef,
}

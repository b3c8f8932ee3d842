use serde::{Deserialize, Serialize};

pub type ProductId = u32;

/// Represents a product in the catalog.
///
/// Products are read-only once loaded; neither the query engine nor the
/// basket ever changes one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category: String,
    /// Stock level. `0` means out of stock.
    pub quantity: u32,
    pub rating: f64,
    pub image_link: String,
}

#[allow(dead_code)]
impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Catalog-unique identifier
    /// * `name` - Display name, also used for search and name ordering
    /// * `price` - Unit price
    /// * `quantity` - Available stock quantity
    ///
    /// # Notes
    /// `category`, `rating` and `image_link` start empty; use the `with_*`
    /// builders to fill them.
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category: String::new(),
            quantity,
            rating: 0.0,
            image_link: String::new(),
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_image_link(mut self, image_link: impl Into<String>) -> Self {
        self.image_link = image_link.into();
        self
    }

    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

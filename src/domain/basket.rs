use super::Product;

/// One line of the shopper's basket.
///
/// `quantity` is what the shopper intends to buy and is independent of the
/// product's stock level. It is always at least 1 while the entry exists.
#[derive(Debug, Clone, PartialEq)]
pub struct BasketEntry {
    pub product: Product,
    pub quantity: u32,
}

impl BasketEntry {
    pub fn new(product: Product) -> Self {
        Self { product, quantity: 1 }
    }

    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

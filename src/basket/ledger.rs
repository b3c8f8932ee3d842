use crate::domain::{BasketEntry, Product, ProductId};

/// Ordered basket entries keyed by product id.
///
/// # Invariants
/// - At most one entry per product id.
/// - Every entry has `quantity >= 1`; an entry that would reach zero is removed.
///
/// Adding never checks the product's stock level, so the basket can hold more
/// units than the catalog has.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Basket {
    entries: Vec<BasketEntry>,
    is_open: bool,
}

impl Basket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit. An existing entry keeps its position and gains one;
    /// otherwise a new entry with quantity 1 is appended.
    pub fn add(&mut self, product: &Product) {
        match self.entry_mut(product.id) {
            Some(entry) => entry.quantity += 1,
            None => self.entries.push(BasketEntry::new(product.clone())),
        }
    }

    /// Removes one unit. Missing ids are ignored.
    pub fn remove(&mut self, product_id: ProductId) {
        let Some(index) = self.position(product_id) else {
            return;
        };

        if self.entries[index].quantity > 1 {
            self.entries[index].quantity -= 1;
        } else {
            self.entries.remove(index);
        }
    }

    /// Sum of price times quantity, recomputed from the entries on every call.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(BasketEntry::subtotal).sum()
    }

    pub fn entries(&self) -> &[BasketEntry] {
        &self.entries
    }

    pub fn get(&self, product_id: ProductId) -> Option<&BasketEntry> {
        self.entries.iter().find(|entry| entry.product.id == product_id)
    }

    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.get(product_id).map_or(0, |entry| entry.quantity)
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Visibility only. Never touches entries.

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    #[allow(dead_code)]
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.product.id == product_id)
    }

    fn entry_mut(&mut self, product_id: ProductId) -> Option<&mut BasketEntry> {
        self.entries.iter_mut().find(|entry| entry.product.id == product_id)
    }
}

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::Product;

/// Memoizing product factory keyed by name
///
/// The first request for a name creates the product; every later request for
/// the same name returns the cached product and ignores the new arguments.
/// Entries are never evicted.
///
/// The registry caches product definitions. Sales are counted by the
/// [`VendingRegister`](crate::register::VendingRegister) the products are
/// added to, which keeps its counters when a cached product is added again.
#[derive(Debug, Default)]
pub struct ProductRegistry {
    products: HashMap<String, Product>,
}

impl ProductRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached product for `name`, creating it on first use
    pub fn get_or_create(&mut self, name: &str, price: Decimal, donates_fee: bool) -> &Product {
        if self.products.contains_key(name) {
            debug!(product = name, "registry cache hit");
        }
        self.products
            .entry(name.to_string())
            .or_insert_with(|| Product::new(name, price, donates_fee))
    }

    /// Look up a product without creating it
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.get(name)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

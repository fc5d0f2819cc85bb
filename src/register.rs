use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::config::RegisterConfig;
use crate::error::RegisterError;
use crate::models::{Product, SalesLine};

/// Proof of a successful purchase
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub product: String,
    pub price: Decimal,
    pub remaining_credit: Decimal,
}

/// Vending register: product stock, customer credit and sales statistics
///
/// Products are kept in insertion order. Re-adding a product with an existing
/// name replaces it in place, so its position (and therefore tie-breaking in
/// [`VendingRegister::most_purchased_product`]) does not change.
#[derive(Debug, Default)]
pub struct VendingRegister {
    /// Products in insertion order
    products: Vec<Product>,
    /// Map of product name to index in `products`
    index: HashMap<String, usize>,
    /// Customer credit, never negative
    credit: Decimal,
    config: RegisterConfig,
}

impl VendingRegister {
    /// Create an empty register with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RegisterConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &RegisterConfig {
        &self.config
    }

    /// Insert a product, overwriting any product with the same name
    ///
    /// Overwriting replaces price and donation flag but keeps the units
    /// already sold; only a purchase moves the counter.
    pub fn add_product(&mut self, product: Product) {
        match self.index.get(&product.name) {
            Some(&slot) => {
                let existing = &mut self.products[slot];
                existing.price = product.price;
                existing.donates_fee = product.donates_fee;
            }
            None => {
                self.index.insert(product.name.clone(), self.products.len());
                self.products.push(product);
            }
        }
    }

    /// Top up customer credit
    ///
    /// Non-positive amounts are rejected and leave credit unchanged.
    pub fn add_credit(&mut self, amount: Decimal) -> Result<Decimal, RegisterError> {
        if amount <= Decimal::ZERO {
            warn!(%amount, "rejecting non-positive credit top-up");
            return Err(RegisterError::InvalidCredit(amount));
        }
        self.credit += amount;
        info!(%amount, credit = %self.credit, "credit added");
        Ok(self.credit)
    }

    /// Buy one unit of `name`
    /// Returns true if successful, false if the product is unknown or credit is short
    pub fn purchase(&mut self, name: &str) -> bool {
        match self.try_purchase(name) {
            Ok(_) => true,
            Err(e) => {
                warn!(product = name, reason = %e, "purchase rejected");
                false
            }
        }
    }

    /// Buy one unit of `name`, reporting why a purchase was refused
    ///
    /// On success credit drops by the price and the unit counter goes up;
    /// on failure nothing changes.
    pub fn try_purchase(&mut self, name: &str) -> Result<Receipt, RegisterError> {
        let slot = *self
            .index
            .get(name)
            .ok_or_else(|| RegisterError::UnknownProduct(name.to_string()))?;
        let product = &mut self.products[slot];

        if self.credit < product.price {
            return Err(RegisterError::InsufficientCredit {
                product: product.name.clone(),
                credit: self.credit,
                price: product.price,
            });
        }

        self.credit -= product.price;
        product.sell();
        info!(product = name, price = %product.price, credit = %self.credit, "purchase applied");

        Ok(Receipt {
            product: product.name.clone(),
            price: product.price,
            remaining_credit: self.credit,
        })
    }

    /// End the session: refund remaining credit and reset it to zero
    ///
    /// Products and sales counters are kept.
    pub fn checkout(&mut self) -> Decimal {
        let change = std::mem::take(&mut self.credit);
        info!(%change, "checkout");
        change
    }

    pub fn credit(&self) -> Decimal {
        self.credit
    }

    pub fn product(&self, name: &str) -> Option<&Product> {
        self.index.get(name).map(|&slot| &self.products[slot])
    }

    /// Products in insertion order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn total_units_sold(&self) -> u64 {
        self.products.iter().map(|p| p.units_sold).sum()
    }

    pub fn total_revenue(&self) -> Decimal {
        self.products.iter().map(Product::revenue).sum()
    }

    /// Units sold as a percentage of nominal stock across all products
    ///
    /// Returns zero when no products are registered.
    pub fn availability_percentage(&self) -> Decimal {
        let capacity =
            Decimal::from(self.config.nominal_capacity) * Decimal::from(self.products.len());
        if capacity.is_zero() {
            return Decimal::ZERO;
        }
        Decimal::from(self.total_units_sold()) / capacity * Decimal::ONE_HUNDRED
    }

    /// Best selling product; ties go to the earliest inserted
    ///
    /// Returns `None` when nothing has been sold.
    pub fn most_purchased_product(&self) -> Option<&Product> {
        let mut best: Option<&Product> = None;
        for product in self.products.iter().filter(|p| p.units_sold > 0) {
            if best.is_none_or(|b| product.units_sold > b.units_sold) {
                best = Some(product);
            }
        }
        best
    }

    pub fn total_donation(&self) -> Decimal {
        let rate = self.config.donation_rate;
        self.products.iter().map(|p| p.donation(rate)).sum()
    }

    /// Donation per donating product
    pub fn donation_by_product(&self) -> BTreeMap<String, Decimal> {
        let rate = self.config.donation_rate;
        self.products
            .iter()
            .filter(|p| p.donates_fee)
            .map(|p| (p.name.clone(), p.donation(rate)))
            .collect()
    }

    /// Units sold per product, including products with no sales
    pub fn units_sold_by_product(&self) -> BTreeMap<String, u64> {
        self.products
            .iter()
            .map(|p| (p.name.clone(), p.units_sold))
            .collect()
    }

    /// One report line per product in insertion order
    pub fn sales_lines(&self) -> Vec<SalesLine> {
        let rate = self.config.donation_rate;
        self.products
            .iter()
            .map(|p| SalesLine {
                name: p.name.clone(),
                price: p.price,
                units_sold: p.units_sold,
                revenue: p.revenue(),
                donation: p.donation(rate),
            })
            .collect()
    }
}

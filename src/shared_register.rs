use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::sync::Mutex;

use crate::error::RegisterError;
use crate::models::Product;
use crate::register::{Receipt, VendingRegister};

/// Point-in-time statistics taken under a single lock
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterSnapshot {
    pub credit: Decimal,
    pub total_units_sold: u64,
    pub total_revenue: Decimal,
    pub total_donation: Decimal,
    pub availability_percentage: Decimal,
    pub most_purchased: Option<String>,
}

/// Task-safe handle to a single vending register
///
/// Every operation takes the same mutex, so a purchase's credit check and
/// debit can never interleave with another task's top-up, purchase or
/// checkout. Cloning the handle is cheap and shares the same register.
///
/// # Example
///
/// ```no_run
/// use kiosk_engine::models::Product;
/// use kiosk_engine::shared_register::SharedRegister;
/// use rust_decimal::Decimal;
///
/// #[tokio::main]
/// async fn main() {
///     let register = SharedRegister::new();
///     register.add_product(Product::new("water", Decimal::ONE, false)).await;
///     register.add_credit(Decimal::TWO).await.unwrap();
///
///     let handle = register.clone_handle();
///     tokio::spawn(async move {
///         handle.purchase("water").await;
///     })
///     .await
///     .unwrap();
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedRegister {
    inner: Arc<Mutex<VendingRegister>>,
}

impl SharedRegister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already configured register
    pub fn from_register(register: VendingRegister) -> Self {
        Self {
            inner: Arc::new(Mutex::new(register)),
        }
    }

    pub fn clone_handle(&self) -> Self {
        self.clone()
    }

    pub async fn add_product(&self, product: Product) {
        self.inner.lock().await.add_product(product);
    }

    pub async fn add_credit(&self, amount: Decimal) -> Result<Decimal, RegisterError> {
        self.inner.lock().await.add_credit(amount)
    }

    pub async fn purchase(&self, name: &str) -> bool {
        self.inner.lock().await.purchase(name)
    }

    pub async fn try_purchase(&self, name: &str) -> Result<Receipt, RegisterError> {
        self.inner.lock().await.try_purchase(name)
    }

    pub async fn checkout(&self) -> Decimal {
        self.inner.lock().await.checkout()
    }

    pub async fn credit(&self) -> Decimal {
        self.inner.lock().await.credit()
    }

    pub async fn total_units_sold(&self) -> u64 {
        self.inner.lock().await.total_units_sold()
    }

    pub async fn snapshot(&self) -> RegisterSnapshot {
        let register = self.inner.lock().await;
        RegisterSnapshot {
            credit: register.credit(),
            total_units_sold: register.total_units_sold(),
            total_revenue: register.total_revenue(),
            total_donation: register.total_donation(),
            availability_percentage: register.availability_percentage(),
            most_purchased: register.most_purchased_product().map(|p| p.name.clone()),
        }
    }

    /// Consume the handle and return the register if no other handle is alive
    pub fn try_into_inner(self) -> Option<VendingRegister> {
        Arc::try_unwrap(self.inner).ok().map(Mutex::into_inner)
    }
}

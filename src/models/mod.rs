pub mod product;
pub mod transaction;

pub use product::{CatalogEntry, Product, SalesLine};
pub use transaction::{Transaction, TransactionKind};

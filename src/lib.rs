pub mod config;
pub mod error;
pub mod models;
pub mod register;
pub mod registry;
pub mod shared_register;
pub mod teller;

use std::io::{Read, Write};

use tracing::warn;

use error::Result;
use models::{CatalogEntry, Product};
use register::VendingRegister;
use registry::ProductRegistry;

/// Load a product catalog (`name,price,donates_fee`) through the registry
///
/// Each row goes through [`ProductRegistry::get_or_create`], so a repeated
/// name yields the product from its first row. Malformed rows are skipped.
pub fn load_catalog<R: Read>(reader: R, registry: &mut ProductRegistry) -> Result<Vec<Product>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut products: Vec<Product> = Vec::new();

    for (row, result) in csv_reader.deserialize::<CatalogEntry>().enumerate() {
        match result {
            Ok(entry) => {
                let is_new = registry.get(&entry.name).is_none();
                let product = registry.get_or_create(&entry.name, entry.price, entry.donates_fee);
                if is_new {
                    products.push(product.clone());
                }
            }
            Err(e) => {
                warn!(row = row + 1, error = %e, "skipping malformed catalog row");
            }
        }
    }

    Ok(products)
}

/// Write per-product sales figures to a CSV writer
pub fn write_sales_report<W: Write>(register: &VendingRegister, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for line in register.sales_lines() {
        csv_writer.serialize(line)?;
    }

    csv_writer.flush()?;
    Ok(())
}

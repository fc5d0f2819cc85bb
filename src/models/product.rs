use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product stocked by the vending register
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub price: Decimal,
    pub donates_fee: bool,
    pub units_sold: u64,
}

impl Product {
    /// Create a product with no sales
    pub fn new(name: impl Into<String>, price: Decimal, donates_fee: bool) -> Self {
        Self {
            name: name.into(),
            price,
            donates_fee,
            units_sold: 0,
        }
    }

    /// Record one unit sold
    pub fn sell(&mut self) {
        self.units_sold += 1;
    }

    /// Revenue collected so far (price * units sold)
    pub fn revenue(&self) -> Decimal {
        self.price * Decimal::from(self.units_sold)
    }

    /// Donation owed at the given rate; zero for non-donating products
    pub fn donation(&self, rate: Decimal) -> Decimal {
        if self.donates_fee {
            self.revenue() * rate
        } else {
            Decimal::ZERO
        }
    }
}

/// Catalog row from CSV input
#[derive(Debug, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: Decimal,
    #[serde(default)]
    pub donates_fee: bool,
}

/// Parse prices from their text form so the written scale is kept (`2.50` stays `2.50`)
fn deserialize_price<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de;

    let s = String::deserialize(deserializer)?;
    let price = s.trim().parse::<Decimal>().map_err(de::Error::custom)?;
    if price.is_sign_negative() {
        return Err(de::Error::custom(format!("negative price {price}")));
    }
    Ok(price)
}

/// Sales report row for CSV output
#[derive(Debug, Serialize)]
pub struct SalesLine {
    #[serde(rename = "product")]
    pub name: String,
    pub price: Decimal,
    pub units_sold: u64,
    pub revenue: Decimal,
    pub donation: Decimal,
}

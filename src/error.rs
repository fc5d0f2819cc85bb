use rust_decimal::Decimal;
use thiserror::Error;

/// Business rule violations reported by the vending register
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegisterError {
    #[error("unknown product '{0}'")]
    UnknownProduct(String),

    #[error("insufficient credit for '{product}': credit {credit}, price {price}")]
    InsufficientCredit {
        product: String,
        credit: Decimal,
        price: Decimal,
    },

    #[error("credit top-up must be positive, got {0}")]
    InvalidCredit(Decimal),
}

/// Errors that can occur while loading catalogs or writing reports
#[derive(Error, Debug)]
pub enum KioskError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Register(#[from] RegisterError),
}

pub type Result<T> = std::result::Result<T, KioskError>;

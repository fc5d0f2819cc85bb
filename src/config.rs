use rust_decimal::Decimal;

/// Tunables for register statistics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegisterConfig {
    /// Fraction of donating product revenue that goes to donation (0.06 = 6%)
    pub donation_rate: Decimal,
    /// Nominal stock per registered product, used by availability reporting
    pub nominal_capacity: u32,
}

impl RegisterConfig {
    pub const DEFAULT_DONATION_RATE: Decimal = Decimal::from_parts(6, 0, 0, false, 2);
    pub const DEFAULT_NOMINAL_CAPACITY: u32 = 100;
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            donation_rate: Self::DEFAULT_DONATION_RATE,
            nominal_capacity: Self::DEFAULT_NOMINAL_CAPACITY,
        }
    }
}

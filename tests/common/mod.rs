#![allow(dead_code)]

use kiosk_engine::models::Product;
use kiosk_engine::register::VendingRegister;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Helper to create a product with no sales
pub fn make_product(name: &str, price: Decimal, donates_fee: bool) -> Product {
    Product::new(name, price, donates_fee)
}

/// Register stocked with A(2.5, donates), B(1.75), C(1.0, donates)
pub fn stocked_register() -> VendingRegister {
    let mut register = VendingRegister::new();
    register.add_product(make_product("A", dec!(2.5), true));
    register.add_product(make_product("B", dec!(1.75), false));
    register.add_product(make_product("C", dec!(1.0), true));
    register
}

/// Write a catalog CSV from (name, price, donates_fee) rows
pub fn build_catalog(rows: &[(&str, &str, &str)]) -> String {
    let mut csv = String::from("name,price,donates_fee\n");

    for (name, price, donates) in rows {
        csv.push_str(&format!("{},{},{}\n", name, price, donates));
    }

    csv
}

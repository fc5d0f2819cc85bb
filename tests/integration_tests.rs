mod common;

use std::fs::File;
use std::io::Write;

use common::{build_catalog, stocked_register};
use kiosk_engine::register::VendingRegister;
use kiosk_engine::registry::ProductRegistry;
use kiosk_engine::{load_catalog, write_sales_report};
use rust_decimal_macros::dec;

#[test]
fn test_load_catalog_fixture() {
    let input = File::open("tests/fixtures/catalog.csv").unwrap();
    let mut registry = ProductRegistry::new();

    let products = load_catalog(input, &mut registry).unwrap();

    let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["chocolate", "soda", "cookie"]);
    assert_eq!(products[1].price, dec!(1.75));
    assert!(!products[1].donates_fee);
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_load_catalog_duplicate_name_keeps_first_row() {
    let csv = build_catalog(&[("X", "2.0", "true"), ("Y", "1", "false"), ("X", "999", "false")]);
    let mut registry = ProductRegistry::new();

    let products = load_catalog(csv.as_bytes(), &mut registry).unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].price, dec!(2.0));
    assert!(products[0].donates_fee);
}

#[test]
fn test_load_catalog_lists_each_name_once() {
    let csv = build_catalog(&[
        ("X", "1", "false"),
        ("X", "2", "true"),
        ("Y", "3", "false"),
        ("X", "4", "false"),
        ("Y", "5", "true"),
    ]);
    let mut registry = ProductRegistry::new();

    let products = load_catalog(csv.as_bytes(), &mut registry).unwrap();

    let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["X", "Y"]);
    assert_eq!(products[0].price, dec!(1));
    assert_eq!(products[1].price, dec!(3));
}

#[test]
fn test_load_catalog_skips_malformed_rows() {
    let csv = build_catalog(&[("X", "abc", "true"), ("Y", " 1.5 ", " false ")]);
    let mut registry = ProductRegistry::new();

    let products = load_catalog(csv.as_bytes(), &mut registry).unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Y");
    assert_eq!(products[0].price, dec!(1.5));
}

#[test]
fn test_load_catalog_from_temp_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", build_catalog(&[("water", "0.90", "false")])).unwrap();

    let mut registry = ProductRegistry::new();
    let products = load_catalog(File::open(file.path()).unwrap(), &mut registry).unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(registry.get("water").unwrap().price, dec!(0.90));
}

#[test]
fn test_catalog_into_register_end_to_end() {
    let input = File::open("tests/fixtures/catalog.csv").unwrap();
    let mut registry = ProductRegistry::new();
    let mut register = VendingRegister::new();
    for product in load_catalog(input, &mut registry).unwrap() {
        register.add_product(product);
    }

    register.add_credit(dec!(5)).unwrap();
    assert!(register.purchase("chocolate"));
    assert!(register.purchase("cookie"));
    assert!(register.purchase("cookie"));
    assert!(!register.purchase("soda"));

    assert_eq!(register.total_revenue(), dec!(4.5));
    assert_eq!(register.total_donation(), dec!(0.27));
    assert_eq!(register.most_purchased_product().unwrap().name, "cookie");
}

#[test]
fn test_sales_report_output() {
    let mut register = stocked_register();
    register.add_credit(dec!(5)).unwrap();
    register.purchase("A");
    register.purchase("C");
    register.purchase("C");

    let mut output = Vec::new();
    write_sales_report(&register, &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines[0], "product,price,units_sold,revenue,donation");
    assert!(lines[1].starts_with("A,2.5,1,2.5,"));
    assert!(lines[2].starts_with("B,1.75,0,"));
    assert!(lines[3].starts_with("C,1.0,2,2.0,"));
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_sales_report_empty_register() {
    let register = VendingRegister::new();
    let mut output = Vec::new();

    write_sales_report(&register, &mut output).unwrap();

    assert!(output.is_empty());
}

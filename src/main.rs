use std::env;
use std::fs::File;
use std::io::{self, Write};

use anyhow::{Context, Result};
use kiosk_engine::models::{Product, Transaction, TransactionKind};
use kiosk_engine::register::VendingRegister;
use kiosk_engine::registry::ProductRegistry;
use kiosk_engine::teller::{DispatchOutcome, Teller};
use kiosk_engine::{load_catalog, write_sales_report};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    anyhow::ensure!(
        args.len() <= 2,
        "Usage: {} [catalog.csv]",
        args.first().map(String::as_str).unwrap_or("kiosk-engine")
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    run_teller(&mut out)?;

    let mut registry = ProductRegistry::new();
    let products = match args.get(1) {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open catalog file '{}'", path))?;
            load_catalog(file, &mut registry).context("Failed to load catalog")?
        }
        None => sample_catalog(&mut registry),
    };

    run_register(products, &mut out)?;

    Ok(())
}

fn run_teller<W: Write>(out: &mut W) -> Result<()> {
    let mut teller = Teller::new();

    for kind in TransactionKind::ALL {
        match teller.process(Transaction::new(kind)) {
            DispatchOutcome::Handled { handler, .. } => {
                writeln!(out, "Processing {}... (handled by {})", kind, handler)?
            }
            DispatchOutcome::Unhandled { .. } => writeln!(out, "No handler for {}", kind)?,
        }
    }

    Ok(())
}

fn sample_catalog(registry: &mut ProductRegistry) -> Vec<Product> {
    [
        ("chocolate", Decimal::new(250, 2), true),
        ("soda", Decimal::new(175, 2), false),
        ("cookie", Decimal::new(100, 2), true),
    ]
    .into_iter()
    .map(|(name, price, donates)| registry.get_or_create(name, price, donates).clone())
    .collect()
}

fn run_register<W: Write>(products: Vec<Product>, out: &mut W) -> Result<()> {
    let mut register = VendingRegister::new();
    let names: Vec<String> = products.iter().map(|p| p.name.clone()).collect();
    for product in products {
        register.add_product(product);
    }

    register
        .add_credit(Decimal::new(5, 0))
        .context("Failed to add credit")?;
    writeln!(out, "Credit: {}", register.credit())?;

    for name in names.iter().chain(names.iter().rev()) {
        let bought = register.purchase(name);
        writeln!(
            out,
            "Purchase {}: {} (credit {})",
            name,
            if bought { "ok" } else { "refused" },
            register.credit()
        )?;
    }

    writeln!(out, "Units sold: {}", register.total_units_sold())?;
    writeln!(out, "Revenue: {}", register.total_revenue())?;
    writeln!(
        out,
        "Availability: {}%",
        register.availability_percentage().round_dp(2)
    )?;
    match register.most_purchased_product() {
        Some(product) => writeln!(out, "Most purchased: {}", product.name)?,
        None => writeln!(out, "Most purchased: none")?,
    }
    writeln!(out, "Total donation: {}", register.total_donation())?;
    for (name, donation) in register.donation_by_product() {
        writeln!(out, "  donation {}: {}", name, donation)?;
    }
    for (name, units) in register.units_sold_by_product() {
        writeln!(out, "  sold {}: {}", name, units)?;
    }

    let change = register.checkout();
    writeln!(out, "Change returned: {}", change)?;

    writeln!(out)?;
    write_sales_report(&register, &mut *out).context("Failed to write sales report")?;

    Ok(())
}

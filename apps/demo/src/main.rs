//! # shopkit Demo Driver
//!
//! Seeds a product catalog, runs a checkout session, and prints the cart
//! summary. This binary is the only place that formats or displays
//! anything; shopkit-core stays pure.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Seed the product store
//! 3. Run the cart session (adds, failures, discounts, filtering)
//! 4. Print the summary and a task-board sample

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use shopkit_core::{
    Category, Discount, EntityStore, Money, Priority, Product, ShoppingCart, TaskBoard,
    TaskFilter,
};

fn main() {
    init_tracing();

    info!("starting shopkit demo");

    let mut cart = ShoppingCart::new(seed_catalog());
    run_checkout(&mut cart);
    print_summary(&cart);
    run_task_board();
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,shopkit=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Initial seed entities for the session's store.
fn seed_catalog() -> EntityStore<Product> {
    EntityStore::with_seed(vec![
        Product {
            id: 1,
            name: "Laptop".to_string(),
            price: Money::new(99999, 2),
            category: Category::Electronics,
            available: true,
        },
        Product {
            id: 2,
            name: "Book".to_string(),
            price: Money::new(1999, 2),
            category: Category::Books,
            available: true,
        },
        Product {
            id: 3,
            name: "Headphones".to_string(),
            price: Money::new(14999, 2),
            category: Category::Electronics,
            available: false,
        },
        Product {
            id: 4,
            name: "T-Shirt".to_string(),
            price: Money::new(1999, 2),
            category: Category::Clothing,
            available: true,
        },
    ])
}

fn run_checkout(cart: &mut ShoppingCart) {
    // Happy path
    for (id, qty) in [(1, 2), (2, 1)] {
        match cart.add_item(id, qty) {
            Ok(update) => info!(%update.message, "cart updated"),
            Err(err) => warn!(%err, "add rejected"),
        }
    }

    // Out-of-stock headphones decline cleanly
    if let Err(err) = cart.add_item(3, 1) {
        warn!(%err, kind = ?err.kind(), "add rejected");
    }

    // Discounts are read-only derivations over the same cart
    info!(total = %cart.total(), "cart total");
    info!(
        ten_percent = %cart.apply_discount(Discount::Percentage(Decimal::from(10))),
        fifty_off = %cart.apply_discount(Discount::FixedAmount(Money::new(5000, 2))),
        bogo = %cart.apply_discount(Discount::BuyOneGetOneFree),
        "discounted totals"
    );

    // Catalog browsing through the session's store
    let affordable = cart.filter_products(None, Some(Money::new(5000, 2)));
    match serde_json::to_string_pretty(&affordable) {
        Ok(json) => println!("Products under $50.00:\n{json}"),
        Err(err) => warn!(%err, "could not render product list"),
    }
}

/// Receipt-style cart summary.
fn print_summary(cart: &ShoppingCart) {
    println!("\nCart Summary:");
    for line in cart.items() {
        println!(
            "[{}] {} x {} - {}",
            line.product.id,
            line.product.name,
            line.quantity,
            line.line_total()
        );
    }
    println!("Total: {} ({} items)", cart.total(), cart.item_count());
}

/// Small task-board walkthrough: the same store, different entity shape.
fn run_task_board() {
    let mut board = TaskBoard::new();
    board.add_task("Restock headphones", "Supplier order #4411", Priority::High);
    board.add_task("Price review", "Quarterly catalog pass", Priority::Low);

    board.complete(1);
    if let Some(date) = NaiveDate::from_ymd_opt(2026, 9, 15) {
        board.set_due_date(2, Some(date));
    }

    println!("\nTasks:");
    for task in board.list(TaskFilter::All) {
        let status = if task.completed { "✓" } else { "◯" };
        let due = task
            .due_date
            .map(|d| format!(" (due {d})"))
            .unwrap_or_default();
        println!("[{status}] {}: {} ({:?}){due}", task.id, task.title, task.priority);
    }
}

//! Property-based tests for cart and store invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;
use shopkit_core::{
    Category, Discount, EntityStore, LineItem, Money, Product, ProductDraft, ShoppingCart,
};

fn product(id: u64, price_units: i64) -> Product {
    Product {
        id,
        name: format!("Product {id}"),
        price: Money::new(price_units, 2),
        category: Category::Electronics,
        available: true,
    }
}

fn cart_with_one_product(price_units: i64) -> ShoppingCart {
    ShoppingCart::new(EntityStore::with_seed(vec![product(1, price_units)]))
}

proptest! {
    /// Adding then removing the same quantity leaves no line behind.
    #[test]
    fn add_then_remove_same_quantity_empties_line(
        qty in 1i64..10_000,
        price_units in 0i64..1_000_000,
    ) {
        let mut cart = cart_with_one_product(price_units);
        cart.add_item(1, qty).unwrap();
        cart.remove_item(1, qty).unwrap();

        prop_assert!(cart.is_empty());
        prop_assert!(cart.items().iter().all(|line| line.product.id != 1));
    }

    /// Repeated adds accumulate into a single line with quantity a + b.
    #[test]
    fn adds_accumulate_into_one_line(
        a in 1i64..10_000,
        b in 1i64..10_000,
    ) {
        let mut cart = cart_with_one_product(1999);
        cart.add_item(1, a).unwrap();
        cart.add_item(1, b).unwrap();

        let items = cart.items();
        prop_assert_eq!(items.len(), 1);
        prop_assert_eq!(items[0].quantity, a + b);
    }

    /// The plain total always equals the sum of price × quantity per line.
    #[test]
    fn total_matches_line_sums(
        lines in proptest::collection::vec((0i64..100_000, 1i64..100), 0..8),
    ) {
        let mut store = EntityStore::new();
        for (price_units, _) in &lines {
            store.add(ProductDraft {
                name: "P".to_string(),
                price: Money::new(*price_units, 2),
                category: Category::Books,
                available: true,
            });
        }

        let mut cart = ShoppingCart::new(store);
        for (i, (_, qty)) in lines.iter().enumerate() {
            cart.add_item(i as u64 + 1, *qty).unwrap();
        }

        let expected: Money = lines
            .iter()
            .map(|(price_units, qty)| Money::new(*price_units, 2) * *qty)
            .sum();
        prop_assert_eq!(cart.total(), expected);
    }

    /// A fixed-amount discount never yields a negative total.
    #[test]
    fn fixed_discount_is_never_negative(
        qty in 1i64..100,
        price_units in 0i64..100_000,
        discount_units in -1_000_000i64..10_000_000,
    ) {
        let mut cart = cart_with_one_product(price_units);
        cart.add_item(1, qty).unwrap();

        let discounted =
            cart.apply_discount(Discount::FixedAmount(Money::new(discount_units, 2)));
        prop_assert!(!discounted.is_negative());
    }

    /// BOGO never charges more than the plain total.
    #[test]
    fn bogo_never_exceeds_total(
        lines in proptest::collection::vec((0i64..100_000, 1i64..100), 0..8),
    ) {
        let mut store = EntityStore::new();
        for (price_units, _) in &lines {
            store.add(ProductDraft {
                name: "P".to_string(),
                price: Money::new(*price_units, 2),
                category: Category::Clothing,
                available: true,
            });
        }

        let mut cart = ShoppingCart::new(store);
        for (i, (_, qty)) in lines.iter().enumerate() {
            cart.add_item(i as u64 + 1, *qty).unwrap();
        }

        prop_assert!(cart.apply_discount(Discount::BuyOneGetOneFree) <= cart.total());
    }

    /// Quantities in the cart are always at least 1, whatever the
    /// interleaving of successful and failing operations.
    #[test]
    fn line_quantities_stay_positive(
        ops in proptest::collection::vec((any::<bool>(), -50i64..200), 1..40),
    ) {
        let mut cart = cart_with_one_product(999);
        for (is_add, qty) in ops {
            if is_add {
                let _ = cart.add_item(1, qty);
            } else {
                let _ = cart.remove_item(1, qty);
            }
            prop_assert!(cart.items().iter().all(|line: &LineItem| line.quantity >= 1));
        }
    }

    /// Store ids stay pairwise distinct under arbitrary add/remove
    /// interleavings, and adds never collide with a live id.
    #[test]
    fn store_ids_stay_distinct(
        ops in proptest::collection::vec(any::<u8>(), 1..60),
    ) {
        let mut store: EntityStore<Product> = EntityStore::new();
        for op in ops {
            if op % 2 == 0 {
                store.add(ProductDraft {
                    name: "P".to_string(),
                    price: Money::new(100, 2),
                    category: Category::Education,
                    available: true,
                });
            } else {
                store.remove(u64::from(op / 2));
            }

            let mut ids: Vec<_> = store.all().iter().map(|p| p.id).collect();
            ids.sort_unstable();
            let len = ids.len();
            ids.dedup();
            prop_assert_eq!(ids.len(), len);
        }
    }

    /// Percentage discounts pass through arithmetically, so 0% is the
    /// identity and 100% is exactly zero.
    #[test]
    fn percentage_endpoints(
        qty in 1i64..100,
        price_units in 0i64..100_000,
    ) {
        let mut cart = cart_with_one_product(price_units);
        cart.add_item(1, qty).unwrap();

        prop_assert_eq!(
            cart.apply_discount(Discount::Percentage(Decimal::ZERO)),
            cart.total()
        );
        prop_assert!(
            cart.apply_discount(Discount::Percentage(Decimal::from(100))).is_zero()
        );
    }
}

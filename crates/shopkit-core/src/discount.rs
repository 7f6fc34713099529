//! # Discount Policies
//!
//! Derived-total computation over cart lines.
//!
//! ## Policy Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Percentage(v)        total − total × v / 100                       │
//! │                       No clamping: v < 0 or v > 100 passes through  │
//! │                       arithmetically (a −10% "discount" surcharges) │
//! │                                                                     │
//! │  FixedAmount(v)       max(0, total − v), never negative             │
//! │                                                                     │
//! │  BuyOneGetOneFree     Σ price × ⌈quantity / 2⌉ per line             │
//! │                       Recomputed from the lines, not derived from   │
//! │                       the plain total; carries no parameter         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::LineItem;
use crate::money::Money;

/// A discount policy applied to a cart's line items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Discount {
    /// Percent off the plain total, expressed as 0–100.
    Percentage(Decimal),
    /// Flat amount off the plain total, clamped at zero.
    FixedAmount(Money),
    /// Every second unit of each line is free.
    BuyOneGetOneFree,
}

impl Discount {
    /// Computes the discounted total over the given cart lines.
    ///
    /// Deterministic and infallible; an empty cart yields zero under
    /// every policy.
    pub fn apply(&self, lines: &[LineItem]) -> Money {
        let total: Money = lines.iter().map(LineItem::line_total).sum();

        match self {
            Discount::Percentage(value) => {
                let off = total.amount() * *value / Decimal::from(100);
                Money::from_decimal(total.amount() - off)
            }
            Discount::FixedAmount(value) => (total - *value).max(Money::zero()),
            Discount::BuyOneGetOneFree => lines
                .iter()
                .map(|line| line.product.price * payable_units(line.quantity))
                .sum(),
        }
    }
}

/// Units actually paid for under buy-one-get-one-free: ⌈quantity / 2⌉.
fn payable_units(quantity: i64) -> i64 {
    (quantity + 1) / 2
}

// =============================================================================
// Unit Tests
// =============================================================================

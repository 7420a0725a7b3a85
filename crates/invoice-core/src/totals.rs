//! # Totals Calculator
//!
//! Derives the invoice summary from the rows and the two adjustments.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  subtotal  = Σ quantity × unit_price                                   │
//! │  tax_total = Σ quantity × unit_price × tax_rate / 100                  │
//! │  discount  = subtotal × discount_percent / 100                         │
//! │  total     = subtotal − discount + tax_total + shipping                │
//! │                                                                         │
//! │  Tax is summed at 1/10000 minor unit precision over all rows and       │
//! │  rounded once; discount is rounded once. Everything else is exact, so  │
//! │  the total identity holds to the minor unit.                           │
//! │                                                                         │
//! │  Tax is charged on the undiscounted subtotal.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The calculator does not police its inputs: negative quantities or prices
//! produce negative results. Validation keeps those out of a submitted draft.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::line_item::LineItem;
use crate::money::{round_div, Money};
use crate::types::Percent;

/// Derived monetary summary of a draft. Never stored, always recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub subtotal: Money,
    pub tax_total: Money,
    pub discount: Money,
    pub shipping: Money,
    pub total: Money,
}

/// Computes totals for `items` with a percentage discount and flat shipping.
///
/// ```rust
/// use invoice_core::line_item::LineItem;
/// use invoice_core::money::Money;
/// use invoice_core::totals::compute_totals;
/// use invoice_core::types::Percent;
///
/// let items = [LineItem::service_fee()]; // 1 × 1000.00 @ 18%
/// let totals = compute_totals(&items, Percent::zero(), Money::zero());
/// assert_eq!(totals.total, Money::from_major(1180));
/// ```
pub fn compute_totals<'a, I>(items: I, discount_percent: Percent, shipping: Money) -> Totals
where
    I: IntoIterator<Item = &'a LineItem>,
{
    let mut subtotal = Money::zero();
    // Σ amount × bps, in 1/10000 of a minor unit
    let mut tax_scaled: i128 = 0;

    for item in items {
        let amount = item.amount();
        subtotal += amount;
        tax_scaled += amount.minor() as i128 * item.tax_rate.bps() as i128;
    }

    let tax_total = Money::from_minor(round_div(tax_scaled, Percent::BPS_PER_WHOLE as i128));
    let discount = subtotal.percentage(discount_percent);
    let total = subtotal - discount + tax_total + shipping;

    Totals {
        subtotal,
        tax_total,
        discount,
        shipping,
        total,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_item::LineItems;
    use proptest::prelude::*;

    fn item(quantity: i64, price_minor: i64, tax_bps: i32) -> LineItem {
        LineItem::new("row", quantity, Money::from_minor(price_minor), Percent::from_bps(tax_bps))
    }

    #[test]
    fn test_single_service_fee() {
        let items = vec![LineItem::new(
            "Service Fee",
            1,
            Money::from_major(1000),
            Percent::from_whole(18),
        )];

        let totals = compute_totals(&items, Percent::zero(), Money::zero());

        assert_eq!(totals.subtotal, Money::from_major(1000));
        assert_eq!(totals.tax_total, Money::from_major(180));
        assert_eq!(totals.discount, Money::zero());
        assert_eq!(totals.shipping, Money::zero());
        assert_eq!(totals.total, Money::from_major(1180));
    }

    #[test]
    fn test_discount_and_shipping() {
        let items = vec![
            item(2, 5_000, 1_000), // 2 × 50.00 @ 10%
            item(1, 2_000, 0),     // 1 × 20.00 @ 0%
        ];

        let totals = compute_totals(&items, Percent::from_whole(10), Money::from_major(15));

        assert_eq!(totals.subtotal, Money::from_major(120));
        assert_eq!(totals.tax_total, Money::from_major(10));
        assert_eq!(totals.discount, Money::from_major(12));
        assert_eq!(totals.shipping, Money::from_major(15));
        assert_eq!(totals.total, Money::from_major(133));
    }

    #[test]
    fn test_empty_items_total_is_shipping() {
        let items: Vec<LineItem> = Vec::new();
        let totals = compute_totals(&items, Percent::from_whole(25), Money::from_minor(999));

        assert_eq!(totals.subtotal, Money::zero());
        assert_eq!(totals.tax_total, Money::zero());
        assert_eq!(totals.discount, Money::zero());
        assert_eq!(totals.total, Money::from_minor(999));
    }

    #[test]
    fn test_tax_rounds_once_over_all_rows() {
        // Three rows of 0.10 at 5% = 0.005 each. Per-row rounding would give
        // 0.03; summing first gives 0.015 → 0.02.
        let items = vec![item(1, 10, 500), item(1, 10, 500), item(1, 10, 500)];
        let totals = compute_totals(&items, Percent::zero(), Money::zero());
        assert_eq!(totals.tax_total, Money::from_minor(2));
    }

    #[test]
    fn test_negative_inputs_are_not_rejected() {
        let items = vec![item(-1, 1_000, 1_000)];
        let totals = compute_totals(&items, Percent::zero(), Money::zero());
        assert_eq!(totals.subtotal, Money::from_minor(-1_000));
        assert_eq!(totals.total, Money::from_minor(-1_100));
    }

    #[test]
    fn test_remove_all_items() {
        let mut items = LineItems::from(vec![item(2, 5_000, 1_000), item(1, 2_000, 0)]);
        while !items.is_empty() {
            items.remove(0).unwrap();
        }

        let shipping = Money::from_major(15);
        let totals = compute_totals(&items, Percent::from_whole(10), shipping);
        assert_eq!(totals.subtotal, Money::zero());
        assert_eq!(totals.tax_total, Money::zero());
        assert_eq!(totals.discount, Money::zero());
        assert_eq!(totals.total, shipping);
    }

    #[test]
    fn test_add_then_remove_leaves_totals_unchanged() {
        let mut items = LineItems::from(vec![item(3, 1_999, 825)]);
        let before = compute_totals(&items, Percent::from_whole(5), Money::from_major(4));

        let index = items.add(item(7, 12_345, 1_800));
        items.remove(index).unwrap();

        let after = compute_totals(&items, Percent::from_whole(5), Money::from_major(4));
        assert_eq!(before, after);
    }

    #[test]
    fn test_oversized_rows_saturate_instead_of_panicking() {
        // 100000000000 × 1000000000.00 does not fit in i64 minor units
        let huge = item(100_000_000_000, 100_000_000_000, 1_800);
        let totals = compute_totals(&[huge.clone(), huge], Percent::from_whole(10), Money::zero());

        assert_eq!(totals.subtotal, Money::MAX);
        assert!(totals.tax_total.is_positive());
        assert_eq!(totals.total, Money::MAX);
    }

    fn arb_item() -> impl Strategy<Value = LineItem> {
        (0i64..=1_000, 0i64..=10_000_000, 0i32..=10_000)
            .prop_map(|(qty, price, bps)| item(qty, price, bps))
    }

    proptest! {
        /// Property: non-negative rows never produce negative subtotal or tax
        #[test]
        fn prop_non_negative_inputs(
            items in prop::collection::vec(arb_item(), 0..20),
        ) {
            let totals = compute_totals(&items, Percent::zero(), Money::zero());
            prop_assert!(totals.subtotal.minor() >= 0);
            prop_assert!(totals.tax_total.minor() >= 0);
        }

        /// Property: total = subtotal − discount + tax + shipping, exactly
        #[test]
        fn prop_total_identity(
            items in prop::collection::vec(arb_item(), 0..20),
            discount_bps in 0i32..=10_000,
            shipping in 0i64..=1_000_000,
        ) {
            let totals = compute_totals(
                &items,
                Percent::from_bps(discount_bps),
                Money::from_minor(shipping),
            );
            prop_assert_eq!(
                totals.total,
                totals.subtotal - totals.discount + totals.tax_total + totals.shipping
            );
            prop_assert!(totals.discount <= totals.subtotal);
        }

        /// Property: subtotal is the exact sum of row amounts
        #[test]
        fn prop_subtotal_is_sum_of_amounts(
            items in prop::collection::vec(arb_item(), 0..20),
        ) {
            let expected: Money = items.iter().map(LineItem::amount).sum();
            let totals = compute_totals(&items, Percent::zero(), Money::zero());
            prop_assert_eq!(totals.subtotal, expected);
        }

        /// Property: appending then removing a row is a no-op on totals
        #[test]
        fn prop_add_remove_idempotent(
            base in prop::collection::vec(arb_item(), 0..10),
            extra in arb_item(),
            discount_bps in 0i32..=10_000,
        ) {
            let mut items = LineItems::from(base);
            let before = compute_totals(&items, Percent::from_bps(discount_bps), Money::zero());
            let index = items.add(extra);
            items.remove(index).unwrap();
            let after = compute_totals(&items, Percent::from_bps(discount_bps), Money::zero());
            prop_assert_eq!(before, after);
        }
    }
}

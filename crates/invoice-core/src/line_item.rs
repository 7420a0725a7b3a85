//! # Line Items
//!
//! The billable rows of an invoice draft and the ordered collection that
//! holds them.
//!
//! ## Collection Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UI Action            Operation                 Effect                  │
//! │  ─────────            ─────────                 ──────                  │
//! │  Click "Add Item" ──► add(LineItem::blank()) ─► push to the end        │
//! │  Edit a cell ───────► update(i, patch) ───────► replace given fields   │
//! │  Click trash ───────► remove(i) ──────────────► delete row i           │
//! │  Render table ──────► list() ─────────────────► rows in display order  │
//! │                                                                         │
//! │  Insertion order IS display order. Removing the last row is allowed;   │
//! │  validation is what requires at least one row at submit time.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::coerce::{coerce_money, coerce_percent, coerce_quantity, CoercionPolicy};
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Percent;

// =============================================================================
// Line Item
// =============================================================================

/// One billable row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub tax_rate: Percent,
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: i64, unit_price: Money, tax_rate: Percent) -> Self {
        LineItem {
            name: name.into(),
            quantity,
            unit_price,
            tax_rate,
        }
    }

    /// The row appended by "Add Item": no name, quantity 1, free, untaxed.
    pub fn blank() -> Self {
        LineItem::new("", 1, Money::zero(), Percent::zero())
    }

    /// The row a fresh draft starts with.
    pub fn service_fee() -> Self {
        LineItem::new("Service Fee", 1, Money::from_major(1000), Percent::from_whole(18))
    }

    /// Row amount before tax (quantity × unit price).
    #[inline]
    pub fn amount(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }

    /// Applies the fields present in `patch`.
    pub fn apply(&mut self, patch: LineItemPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(unit_price) = patch.unit_price {
            self.unit_price = unit_price;
        }
        if let Some(tax_rate) = patch.tax_rate {
            self.tax_rate = tax_rate;
        }
    }
}

impl Default for LineItem {
    fn default() -> Self {
        LineItem::blank()
    }
}

// =============================================================================
// Patches
// =============================================================================

/// Typed partial update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItemPatch {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub unit_price: Option<Money>,
    pub tax_rate: Option<Percent>,
}

/// Partial update as raw form text, before coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItemInput {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub price: Option<String>,
    pub tax_rate: Option<String>,
}

impl LineItemInput {
    /// Coerces the numeric text of row `index` into a typed patch.
    ///
    /// Errors (strict policy only) carry the row's form path, e.g.
    /// `items.2.price`.
    pub fn into_patch(
        self,
        index: usize,
        policy: CoercionPolicy,
    ) -> Result<LineItemPatch, ValidationError> {
        let quantity = self
            .quantity
            .map(|raw| coerce_quantity(&item_field(index, "quantity"), &raw, policy))
            .transpose()?;
        let unit_price = self
            .price
            .map(|raw| coerce_money(&item_field(index, "price"), &raw, policy))
            .transpose()?;
        let tax_rate = self
            .tax_rate
            .map(|raw| coerce_percent(&item_field(index, "taxRate"), &raw, policy))
            .transpose()?;

        Ok(LineItemPatch {
            name: self.name,
            quantity,
            unit_price,
            tax_rate,
        })
    }
}

/// Form path of a field inside row `index` (`items.0.quantity`).
pub fn item_field(index: usize, field: &str) -> String {
    format!("items.{}.{}", index, field)
}

// =============================================================================
// Line Item Collection
// =============================================================================

/// Ordered, append-only-by-default collection of rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct LineItems(Vec<LineItem>);

impl LineItems {
    pub fn new() -> Self {
        LineItems(Vec::new())
    }

    /// Appends `item` and returns its index.
    pub fn add(&mut self, item: LineItem) -> usize {
        self.0.push(item);
        self.0.len() - 1
    }

    /// Removes and returns the row at `index`.
    pub fn remove(&mut self, index: usize) -> CoreResult<LineItem> {
        self.check_index(index)?;
        Ok(self.0.remove(index))
    }

    /// Applies `patch` to the row at `index` and returns the updated row.
    pub fn update(&mut self, index: usize, patch: LineItemPatch) -> CoreResult<&LineItem> {
        self.check_index(index)?;
        let item = &mut self.0[index];
        item.apply(patch);
        Ok(item)
    }

    /// Coerces `input` under `policy`, then applies it to row `index`.
    pub fn update_from_input(
        &mut self,
        index: usize,
        input: LineItemInput,
        policy: CoercionPolicy,
    ) -> CoreResult<&LineItem> {
        self.check_index(index)?;
        let patch = input.into_patch(index, policy)?;
        self.update(index, patch)
    }

    /// Rows in display order.
    pub fn list(&self) -> &[LineItem] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&LineItem> {
        self.0.get(index)
    }

    /// Amount of row `index` (quantity × price), shown next to the row.
    pub fn line_amount(&self, index: usize) -> CoreResult<Money> {
        self.check_index(index)?;
        Ok(self.0[index].amount())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.0.iter()
    }

    fn check_index(&self, index: usize) -> CoreResult<()> {
        if index < self.0.len() {
            Ok(())
        } else {
            Err(CoreError::LineItemNotFound {
                index,
                len: self.0.len(),
            })
        }
    }
}

impl From<Vec<LineItem>> for LineItems {
    fn from(items: Vec<LineItem>) -> Self {
        LineItems(items)
    }
}

impl<'a> IntoIterator for &'a LineItems {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> LineItems {
        LineItems::from(vec![
            LineItem::new("Design", 2, Money::from_major(50), Percent::from_whole(10)),
            LineItem::new("Hosting", 1, Money::from_major(20), Percent::zero()),
        ])
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut items = LineItems::new();
        assert_eq!(items.add(LineItem::service_fee()), 0);
        assert_eq!(items.add(LineItem::blank()), 1);

        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Service Fee", ""]);
    }

    #[test]
    fn test_blank_item_defaults() {
        let blank = LineItem::blank();
        assert_eq!(blank.name, "");
        assert_eq!(blank.quantity, 1);
        assert_eq!(blank.unit_price, Money::zero());
        assert_eq!(blank.tax_rate, Percent::zero());
    }

    #[test]
    fn test_remove() {
        let mut items = sample_items();
        let removed = items.remove(0).unwrap();
        assert_eq!(removed.name, "Design");
        assert_eq!(items.len(), 1);
        assert_eq!(items.list()[0].name, "Hosting");

        // Removing the last remaining row is allowed
        items.remove(0).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut items = sample_items();
        assert_eq!(
            items.remove(5),
            Err(CoreError::LineItemNotFound { index: 5, len: 2 })
        );
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_update_partial_fields() {
        let mut items = sample_items();
        let updated = items
            .update(
                1,
                LineItemPatch {
                    quantity: Some(3),
                    ..Default::default()
                },
            )
            .unwrap()
            .clone();

        assert_eq!(updated.name, "Hosting");
        assert_eq!(updated.quantity, 3);
        assert_eq!(updated.unit_price, Money::from_major(20));
    }

    #[test]
    fn test_update_from_input_lenient_clamps() {
        let mut items = sample_items();
        let input = LineItemInput {
            quantity: Some("".to_string()),
            price: Some("abc".to_string()),
            tax_rate: Some("12.5".to_string()),
            ..Default::default()
        };

        let row = items
            .update_from_input(0, input, CoercionPolicy::Lenient)
            .unwrap();
        assert_eq!(row.quantity, 1);
        assert_eq!(row.unit_price, Money::zero());
        assert_eq!(row.tax_rate, Percent::from_bps(1250));
    }

    #[test]
    fn test_update_from_input_strict_rejects_and_keeps_row() {
        let mut items = sample_items();
        let input = LineItemInput {
            name: Some("Renamed".to_string()),
            price: Some("ten".to_string()),
            ..Default::default()
        };

        let err = items
            .update_from_input(1, input, CoercionPolicy::Strict)
            .unwrap_err();
        match err {
            CoreError::Validation(e) => assert_eq!(e.field(), "items.1.price"),
            other => panic!("unexpected error: {other:?}"),
        }
        // Nothing applied
        assert_eq!(items.list()[1].name, "Hosting");
    }

    #[test]
    fn test_line_amount() {
        let items = sample_items();
        assert_eq!(items.line_amount(0), Ok(Money::from_major(100)));
        assert!(items.line_amount(2).is_err());
    }

    #[test]
    fn test_serde_shape() {
        let item = LineItem::service_fee();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["name"], "Service Fee");
        assert_eq!(json["unitPrice"], 100_000);
        assert_eq!(json["taxRate"], 1800);

        let items = LineItems::from(vec![item]);
        assert!(serde_json::to_value(&items).unwrap().is_array());
    }
}

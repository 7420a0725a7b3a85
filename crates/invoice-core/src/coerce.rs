//! # Input Coercion
//!
//! Turns raw form text into typed values.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Raw text        Lenient (default)          Strict                      │
//! │  ────────        ─────────────────          ──────                      │
//! │  "3"             3                          3                           │
//! │  "0"             0  (validation flags it)   0  (validation flags it)    │
//! │  ""              field minimum              InvalidFormat               │
//! │  "abc"           field minimum              InvalidFormat               │
//! │  "2.5" (qty)     field minimum              InvalidFormat               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lenient keeps the form renderable while the user is mid-edit; every
//! clamp is logged so typos masked as minimums stay visible in the logs.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Percent;

/// Smallest quantity a line item may carry.
pub const MIN_QUANTITY: i64 = 1;

/// What to do with numeric text that cannot be read as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CoercionPolicy {
    /// Replace with the field's minimum.
    #[default]
    Lenient,
    /// Report `ValidationError::InvalidFormat`.
    Strict,
}

impl CoercionPolicy {
    fn resolve<T: std::fmt::Debug>(
        self,
        field: &str,
        raw: &str,
        parsed: Option<T>,
        minimum: T,
        expected: &str,
    ) -> Result<T, ValidationError> {
        match (parsed, self) {
            (Some(value), _) => Ok(value),
            (None, CoercionPolicy::Lenient) => {
                debug!(field, raw, ?minimum, "Clamped unreadable input to field minimum");
                Ok(minimum)
            }
            (None, CoercionPolicy::Strict) => Err(ValidationError::InvalidFormat {
                field: field.to_string(),
                reason: format!("'{}' is not {}", raw.trim(), expected),
            }),
        }
    }
}

/// Reads a whole-number quantity. Minimum is 1.
pub fn coerce_quantity(
    field: &str,
    raw: &str,
    policy: CoercionPolicy,
) -> Result<i64, ValidationError> {
    policy.resolve(field, raw, parse_whole(raw), MIN_QUANTITY, "a whole number")
}

/// Reads a money amount (price, shipping). Minimum is 0.
pub fn coerce_money(
    field: &str,
    raw: &str,
    policy: CoercionPolicy,
) -> Result<Money, ValidationError> {
    policy.resolve(field, raw, Money::parse(raw), Money::zero(), "an amount")
}

/// Reads a percentage (tax rate, discount). Minimum is 0.
pub fn coerce_percent(
    field: &str,
    raw: &str,
    policy: CoercionPolicy,
) -> Result<Percent, ValidationError> {
    policy.resolve(field, raw, Percent::parse(raw), Percent::zero(), "a percentage")
}

fn parse_whole(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let value = Decimal::from_str(trimmed).ok()?;
    if !value.fract().is_zero() {
        return None;
    }
    value.to_i64()
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Money Module
//!
//! Money held as an integer count of minor units.
//!
//! ## Representation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Form text        Money            Display                              │
//! │  ─────────        ─────            ───────                              │
//! │  "12.5"      ──►  1250        ──►  "₹ 12.50"                            │
//! │  "1000"      ──►  100000      ──►  "₹ 1,000.00"                         │
//! │  "0.005"     ──►  1 (rounded half away from zero)                       │
//! │                                                                         │
//! │  Sums and products by quantity are exact integer math. A percentage    │
//! │  of an amount is rounded once, to the nearest minor unit.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use invoice_core::money::Money;
//!
//! let price = Money::from_minor(1099); // 10.99
//! let doubled = price * 2;
//! assert_eq!(doubled.minor(), 2198);
//!
//! let parsed = Money::parse("1,000").is_none(); // grouping is display-only
//! assert!(parsed);
//! assert_eq!(Money::parse("12.5"), Some(Money::from_minor(1250)));
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;
use ts_rs::TS;

use crate::types::Percent;

/// Minor units per major unit. Every supported currency uses two decimals.
pub const MINOR_PER_MAJOR: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in minor units (cents, paise, ...).
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  LineItem.unit_price ──► LineItem.amount() (qty × price)               │
/// │                                │                                        │
/// │                                ▼                                        │
/// │  Totals.subtotal ─► discount ─► tax ─► + shipping ─► Totals.total      │
/// │                                                                         │
/// │  Displayed as "₹ 1,180.00" through Currency::format                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Largest representable amount. Arithmetic saturates here.
    pub const MAX: Money = Money(i64::MAX);

    /// Creates a Money value from minor units.
    ///
    /// ```rust
    /// use invoice_core::money::Money;
    ///
    /// let price = Money::from_minor(1099);
    /// assert_eq!(price.minor(), 1099);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from whole major units.
    ///
    /// ```rust
    /// use invoice_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(1000).minor(), 100_000);
    /// ```
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * MINOR_PER_MAJOR)
    }

    /// Creates a Money value from major and minor parts.
    ///
    /// For negative amounts only the major part carries the sign:
    /// `from_major_minor(-5, 50)` is -5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * MINOR_PER_MAJOR - minor)
        } else {
            Money(major * MINOR_PER_MAJOR + minor)
        }
    }

    /// Parses decimal form text ("12", "12.5", " 0.99 ") into Money.
    ///
    /// Digits past the second decimal are rounded half away from zero.
    /// Returns `None` for empty or non-numeric text; the caller decides
    /// whether that is clamped or rejected (see [`crate::coerce`]).
    pub fn parse(text: &str) -> Option<Self> {
        parse_hundredths(text).map(Money)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the whole major-unit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the minor-unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.saturating_abs())
    }

    /// Multiplies money by a quantity, saturating at the `i64` bounds.
    ///
    /// ```rust
    /// use invoice_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(5000);
    /// assert_eq!(unit_price.multiply_quantity(2).minor(), 10_000);
    /// assert_eq!(Money::MAX.multiply_quantity(2), Money::MAX);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Applies a percentage and returns that share of the amount.
    ///
    /// Rounded once, half away from zero, to minor units.
    ///
    /// ```rust
    /// use invoice_core::money::Money;
    /// use invoice_core::types::Percent;
    ///
    /// let subtotal = Money::from_major(120);
    /// let discount = subtotal.percentage(Percent::from_whole(10));
    /// assert_eq!(discount, Money::from_major(12));
    /// ```
    pub fn percentage(&self, rate: Percent) -> Money {
        Money(round_div(
            self.0 as i128 * rate.bps() as i128,
            Percent::BPS_PER_WHOLE as i128,
        ))
    }

    /// Formats the amount with thousands separators and two decimals.
    ///
    /// ```rust
    /// use invoice_core::money::Money;
    ///
    /// assert_eq!(Money::from_minor(118_000).format_grouped(), "1,180.00");
    /// assert_eq!(Money::from_minor(-123_456_789).format_grouped(), "-1,234,567.89");
    /// ```
    pub fn format_grouped(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let digits = self.major().unsigned_abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        format!("{}{}.{:02}", sign, grouped, self.minor_part())
    }
}

/// Divides and rounds half away from zero.
///
/// Used for every percentage in the crate so that all derived amounts
/// round the same way. Results outside `i64` clamp to its bounds.
pub(crate) fn round_div(numerator: i128, denominator: i128) -> i64 {
    let half = denominator / 2;
    let rounded = if numerator >= 0 {
        numerator.saturating_add(half) / denominator
    } else {
        numerator.saturating_sub(half) / denominator
    };
    rounded.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

/// Parses decimal text into hundredths (minor units, or basis points for
/// percentages). Shared by [`Money::parse`] and [`Percent::parse`].
pub(crate) fn parse_hundredths(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let value = Decimal::from_str(trimmed).ok()?;
    value
        .checked_mul(Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain two-decimal rendering without grouping or symbol ("1180.00").
///
/// Use [`crate::catalog::Currency::format`] for UI display.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(self.0.saturating_neg())
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

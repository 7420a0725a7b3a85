//! # Domain Types
//!
//! Small value types shared by line items, totals and validation.
//!
//! ## Why Basis Points?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The form accepts rates with two decimals ("18", "8.25", "12.5").      │
//! │                                                                         │
//! │  1 basis point = 0.01%                                                  │
//! │    "18"   → 1800 bps                                                    │
//! │    "8.25" →  825 bps                                                    │
//! │                                                                         │
//! │  Integer bps represent every accepted input exactly, and keep tax      │
//! │  and discount math on integers (see money.rs).                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::parse_hundredths;

// =============================================================================
// Percent
// =============================================================================

/// A percentage in basis points. Used for tax rates and the invoice discount.
///
/// Signed so that negative user input survives coercion and is reported by
/// validation instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Percent(i32);

impl Percent {
    /// Basis points in 100%.
    pub const BPS_PER_WHOLE: i32 = 10_000;

    /// 100%.
    pub const FULL: Percent = Percent(Self::BPS_PER_WHOLE);

    /// Creates a percentage from basis points.
    #[inline]
    pub const fn from_bps(bps: i32) -> Self {
        Percent(bps)
    }

    /// Creates a percentage from a whole number of percent (`18` → 18%).
    #[inline]
    pub const fn from_whole(pct: i32) -> Self {
        Percent(pct * 100)
    }

    /// Parses form text ("18", "8.25") into a percentage.
    ///
    /// ```rust
    /// use invoice_core::types::Percent;
    ///
    /// assert_eq!(Percent::parse("8.25"), Some(Percent::from_bps(825)));
    /// assert_eq!(Percent::parse(""), None);
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        parse_hundredths(text).and_then(|bps| i32::try_from(bps).ok()).map(Percent)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> i32 {
        self.0
    }

    /// Zero percent.
    #[inline]
    pub const fn zero() -> Self {
        Percent(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// True when the rate lies in `[0%, 100%]`.
    #[inline]
    pub const fn is_within_full_range(&self) -> bool {
        self.0 >= 0 && self.0 <= Self::BPS_PER_WHOLE
    }
}

impl Default for Percent {
    fn default() -> Self {
        Percent::zero()
    }
}

/// Renders without trailing zeros: `18`, `8.25`, `12.5`.
impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let whole = abs / 100;
        let frac = abs % 100;

        if frac == 0 {
            write!(f, "{}{}", sign, whole)
        } else if frac % 10 == 0 {
            write!(f, "{}{}.{}", sign, whole, frac / 10)
        } else {
            write!(f, "{}{}.{:02}", sign, whole, frac)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

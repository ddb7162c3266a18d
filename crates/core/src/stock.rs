//! Derived stock status and low-stock policy.
//!
//! Status is never independently settable: it is a function of quantity,
//! recomputed at every read and rewritten inside every mutating statement.
//! Any status value arriving from outside is discarded.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default low-stock report threshold (`quantity <= threshold`).
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    OutOfStock,
}

impl StockStatus {
    /// Database/wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in_stock",
            StockStatus::OutOfStock => "out_of_stock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in_stock" => Ok(StockStatus::InStock),
            "out_of_stock" => Ok(StockStatus::OutOfStock),
            other => Err(format!("unknown stock status: {other}")),
        }
    }
}

/// Derive the status from a quantity: `OutOfStock` iff `quantity == 0`.
pub fn derive_status(quantity: i64) -> StockStatus {
    if quantity == 0 {
        StockStatus::OutOfStock
    } else {
        StockStatus::InStock
    }
}

/// Low-stock predicate used by the canned report.
pub fn is_low_stock(quantity: i64, threshold: i64) -> bool {
    quantity <= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_out_of_stock_iff_quantity_zero() {
        assert_eq!(derive_status(0), StockStatus::OutOfStock);
        assert_eq!(derive_status(1), StockStatus::InStock);
        assert_eq!(derive_status(1000), StockStatus::InStock);
    }

    #[test]
    fn low_stock_boundary_is_inclusive() {
        assert!(is_low_stock(0, DEFAULT_LOW_STOCK_THRESHOLD));
        assert!(is_low_stock(5, DEFAULT_LOW_STOCK_THRESHOLD));
        assert!(!is_low_stock(6, DEFAULT_LOW_STOCK_THRESHOLD));
    }

    #[test]
    fn status_round_trips_through_str() {
        for status in [StockStatus::InStock, StockStatus::OutOfStock] {
            assert_eq!(status.as_str().parse::<StockStatus>().unwrap(), status);
        }
    }
}

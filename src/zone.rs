//! Shipping zones — the closed set of destination categories
//!
//! A [`Zone`] determines the base pricing of a shipment. Zone names are
//! matched exactly and case-sensitively: `"Domestic"` parses,
//! `"domestic"` and `""` do not. Invalid names are a parse error, never
//! a variant.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Shipping destination category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Delivery within the home country
    Domestic,
    /// Cross-border delivery
    International,
    /// Expedited delivery
    Express,
}

impl Zone {
    /// All zones, in declaration order
    pub const ALL: [Zone; 3] = [Zone::Domestic, Zone::International, Zone::Express];

    /// Flat base fee for this zone
    pub const fn base_fee(self) -> f64 {
        match self {
            Zone::Domestic => 5.0,
            Zone::International => 20.0,
            Zone::Express => 30.0,
        }
    }

    /// Per-weight-unit rate used by the legacy schedule
    ///
    /// The current schedule does not scale with weight; only
    /// [`calculate_shipping_fee_v1`](crate::calculate_shipping_fee_v1)
    /// reads this.
    pub const fn per_unit_rate(self) -> f64 {
        match self {
            Zone::Domestic => 1.0,
            Zone::International => 2.5,
            Zone::Express => 5.0,
        }
    }

    /// Canonical zone name, as it appears on the wire
    pub const fn as_str(self) -> &'static str {
        match self {
            Zone::Domestic => "Domestic",
            Zone::International => "International",
            Zone::Express => "Express",
        }
    }
}

impl FromStr for Zone {
    type Err = Error;

    /// Exact match only, no case folding or trimming
    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "Domestic" => Ok(Zone::Domestic),
            "International" => Ok(Zone::International),
            "Express" => Ok(Zone::Express),
            other => Err(Error::InvalidZone(other.to_string())),
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

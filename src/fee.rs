//! Shipping fee computation
//!
//! Two independently callable pricing schedules coexist here:
//!
//! - [`calculate_shipping_fee_v1`]: the legacy weight-proportional
//!   schedule (`base + weight * rate`).
//! - [`calculate_shipping_fee`]: the current tiered schedule (flat
//!   base, heavy surcharge above 10 units, optional 1.5% insurance).
//!
//! The divergence between them is intentional; the current schedule is
//! authoritative, the legacy one is kept callable for comparison and
//! migration. Both are pure functions: no state, no I/O, identical
//! inputs always produce identical outputs.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::zone::Zone;

/// Upper bound of the accepted weight range (inclusive)
pub const MAX_WEIGHT: f64 = 50.0;

/// Weights strictly above this threshold pay the heavy surcharge
pub const HEAVY_WEIGHT_THRESHOLD: f64 = 10.0;

/// Flat surcharge for heavy packages
pub const HEAVY_SURCHARGE: f64 = 7.5;

/// Insurance premium, as a fraction of the subtotal
pub const INSURANCE_RATE: f64 = 0.015;

/// Itemized result of the current schedule
///
/// Every intermediate term of the fee, so callers can surface a line-by-line
/// quote instead of a single number. `total` is always
/// `subtotal + insurance_cost`, and `subtotal` is always
/// `base_fee + heavy_surcharge`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    /// Zone the quote was priced for
    pub zone: Zone,
    /// Flat fee determined by the zone alone
    pub base_fee: f64,
    /// 7.5 if the package weighs more than 10 units, else 0
    pub heavy_surcharge: f64,
    /// Base fee plus heavy surcharge, before insurance
    pub subtotal: f64,
    /// 1.5% of the subtotal if insured, else 0
    pub insurance_cost: f64,
    /// The fee the customer pays
    pub total: f64,
}

/// Weight must be strictly positive and at most [`MAX_WEIGHT`].
/// Checked before the zone is ever inspected.
fn validate_weight(weight: f64) -> Result<()> {
    if weight <= 0.0 || weight > MAX_WEIGHT {
        return Err(Error::InvalidWeight);
    }
    Ok(())
}

/// Current-schedule arithmetic. Callers have already validated the weight.
fn breakdown(weight: f64, zone: Zone, insured: bool) -> FeeBreakdown {
    let base_fee = zone.base_fee();
    let heavy_surcharge = if weight > HEAVY_WEIGHT_THRESHOLD {
        HEAVY_SURCHARGE
    } else {
        0.0
    };
    let subtotal = base_fee + heavy_surcharge;
    let insurance_cost = if insured { subtotal * INSURANCE_RATE } else { 0.0 };
    FeeBreakdown {
        zone,
        base_fee,
        heavy_surcharge,
        subtotal,
        insurance_cost,
        total: subtotal + insurance_cost,
    }
}

/// Calculate a shipping fee using the legacy weight-proportional schedule.
///
/// `fee = base_fee(zone) + weight * per_unit_rate(zone)`. No tiering, no
/// insurance concept. Superseded by [`calculate_shipping_fee`]; kept as a
/// distinct operation so the two schedules can be compared.
///
/// # Examples
///
/// ```
/// use shipfee::calculate_shipping_fee_v1;
///
/// let fee = calculate_shipping_fee_v1(10.0, "International")?;
/// assert!((fee - 45.0).abs() < 1e-4);
/// # Ok::<(), shipfee::Error>(())
/// ```
pub fn calculate_shipping_fee_v1(weight: f64, zone: &str) -> Result<f64> {
    validate_weight(weight)?;
    let zone: Zone = zone.parse()?;
    Ok(zone.base_fee() + weight * zone.per_unit_rate())
}

/// Calculate a shipping fee using the current tiered schedule.
///
/// The base fee is determined by the zone alone. Packages over 10 units
/// pay a flat [`HEAVY_SURCHARGE`] (strict boundary: exactly 10 does not),
/// and insured shipments pay an extra [`INSURANCE_RATE`] of the subtotal.
///
/// Weight is validated before the zone string is looked at, so an
/// out-of-range weight with an unknown zone reports
/// [`Error::InvalidWeight`].
///
/// # Examples
///
/// ```
/// use shipfee::calculate_shipping_fee;
///
/// let fee = calculate_shipping_fee(30.0, "Express", false)?;
/// assert!((fee - 37.5).abs() < 1e-4);
/// # Ok::<(), shipfee::Error>(())
/// ```
pub fn calculate_shipping_fee(weight: f64, zone: &str, insured: bool) -> Result<f64> {
    validate_weight(weight)?;
    let zone: Zone = zone.parse()?;
    Ok(breakdown(weight, zone, insured).total)
}

/// Itemized current-schedule quote for a typed [`Zone`].
///
/// Same validation and arithmetic as [`calculate_shipping_fee`], with every
/// intermediate term recorded. Callers that already hold a `Zone` skip
/// string parsing entirely.
///
/// # Examples
///
/// ```
/// use shipfee::{quote, Zone};
///
/// let q = quote(30.0, Zone::International, true)?;
/// assert!((q.subtotal - 27.5).abs() < 1e-4);
/// assert!((q.total - 27.9125).abs() < 1e-4);
/// # Ok::<(), shipfee::Error>(())
/// ```
pub fn quote(weight: f64, zone: Zone, insured: bool) -> Result<FeeBreakdown> {
    validate_weight(weight)?;
    Ok(breakdown(weight, zone, insured))
}

// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # Shipfee — tiered shipping fee calculation
//!
//! A pure calculation library: weight + zone + insurance flag in, fee out.
//! No I/O and no shared state, just the pricing rules and their
//! validation.
//!
//! ## Pricing rules
//!
//! The current schedule ([`calculate_shipping_fee`]):
//!
//! 1. Weight must be strictly positive and at most 50 units, otherwise
//!    [`Error::InvalidWeight`].
//! 2. The zone string must be exactly `"Domestic"`, `"International"`, or
//!    `"Express"` (case-sensitive), otherwise [`Error::InvalidZone`].
//! 3. Base fee by zone: Domestic 5.0, International 20.0, Express 30.0.
//! 4. Packages over 10 units pay a flat 7.5 heavy surcharge. The boundary
//!    is strict: exactly 10 units pays no surcharge.
//! 5. Insured shipments pay an extra 1.5% of the subtotal.
//!
//! The legacy schedule ([`calculate_shipping_fee_v1`]) instead scales with
//! weight (`base + weight * rate`) and has no surcharge or insurance. It is
//! superseded but kept callable so the two rule sets can be compared.
//!
//! ## Quick start
//!
//! ```
//! use shipfee::{calculate_shipping_fee, quote, Zone};
//!
//! // String-typed entry point, e.g. straight from an order record
//! let fee = calculate_shipping_fee(30.0, "Express", false)?;
//! assert!((fee - 37.5).abs() < 1e-4);
//!
//! // Typed entry point with an itemized breakdown
//! let q = quote(30.0, Zone::Express, true)?;
//! assert!((q.heavy_surcharge - 7.5).abs() < 1e-4);
//! assert!((q.total - 38.0625).abs() < 1e-4);
//! # Ok::<(), shipfee::Error>(())
//! ```
//!
//! ## Errors
//!
//! Validation short-circuits: weight is checked unconditionally before the
//! zone is inspected, and an error returns immediately with no retry and
//! no partial computation. Interpreting the error (for example, rejecting
//! the order) is the caller's job.

pub mod error;
pub mod fee;
pub mod zone;

// Re-exports
pub use error::{Error, Result};
pub use fee::{
    calculate_shipping_fee, calculate_shipping_fee_v1, quote, FeeBreakdown, HEAVY_SURCHARGE,
    HEAVY_WEIGHT_THRESHOLD, INSURANCE_RATE, MAX_WEIGHT,
};
pub use zone::Zone;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

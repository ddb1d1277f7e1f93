//! Tolerance defaults for block geometry (internal).
//!
//! Policy
//! - Roll transforms only involve half-integer pivots, so results are exact in
//!   `f64`. The snap tolerance guards against drift if coordinates are ever
//!   produced by other means (e.g. composed matrices in tests).

/// Coordinates within this distance of an integer are snapped onto it.
pub(crate) const SNAP_EPS: f64 = 1e-9;
/// Largest footprint-centre displacement (Manhattan) a single roll can cause.
pub(crate) const MAX_ROLL_SHIFT: f64 = 1.5;

//! Crate-wide defaults (internal).
//!
//! Policy
//! - Fixed constants; the demo config (`DemoCfg`) is the only knob callers see.

/// Number of points the fixture run draws.
pub(crate) const DEFAULT_POINT_COUNT: usize = 5;
/// Radius of the fixture circle.
pub(crate) const FIXTURE_CIRCLE_RADIUS: f64 = 5.0;
/// Side length of the fixture square.
pub(crate) const FIXTURE_SQUARE_SIDE: f64 = 10.0;
/// Relative tolerance for area comparisons in tests.
#[cfg(test)]
pub(crate) const AREA_REL_EPS: f64 = 1e-9;

//! Closed-set shapes and their areas.
//!
//! Purpose
//! - One enum, `ShapeKind`, with an exhaustive `match` per capability, so a new
//!   variant is a compile error at every call site rather than a runtime check.
//! - Free functions `area` / `describe` mirror the methods for callers that
//!   iterate over `&[Shape]`.
//!
//! Code cross-refs: `Shape`, `ShapeKind`, `ShapeError`, `demo::run_demo`

mod types;

pub use types::{Shape, ShapeError, ShapeKind};

/// Area of `shape`; pure, so repeated calls agree bit for bit.
#[inline]
pub fn area(shape: &Shape) -> f64 {
    shape.area()
}

/// `"<name>: <area>"` with the area in shortest round-trip form.
pub fn describe(shape: &Shape) -> String {
    shape.describe()
}

#[cfg(test)]
mod tests;

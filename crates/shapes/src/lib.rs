//! Shape-area demo: random unit-square points and a closed set of shapes.
//!
//! The crate replaces fixture code that ran on import with explicit entry
//! points. Callers build shapes, ask for their areas, and draw point samples;
//! `demo::run_demo` bundles the canonical fixture run into one call.
//!
//! Everything here is pure and synchronous. Randomness is either passed in
//! (`*_with` functions, `SampleToken`) or taken from the thread-local RNG by
//! the zero-argument conveniences.

mod cfg;
pub mod demo;
pub mod point;
pub mod shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Marker a harness can check to confirm it resolved this crate.
pub const FIXTURE_ID: &str = "shapes_fixture";

pub use demo::{default_shapes, run_demo, run_demo_with_shapes, DemoCfg, DemoReport, ShapeArea};
pub use point::{
    build_point_sample, build_point_sample_replay, build_point_sample_with, generate_random_point,
    generate_random_point_with, Point, SampleToken,
};
pub use shape::{area, describe, Shape, ShapeError, ShapeKind};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::demo::{run_demo, DemoCfg, DemoReport};
    pub use crate::point::{build_point_sample, Point, SampleToken};
    pub use crate::shape::{area, describe, Shape, ShapeError, ShapeKind};
}

//! The fixture run as an explicit entry point.
//!
//! `run_demo` draws a point sample and describes the fixture shapes
//! (an unnamed circle of radius 5 and an unnamed square of side 10). Nothing
//! is printed here; callers decide how to log the report.

use crate::cfg::{DEFAULT_POINT_COUNT, FIXTURE_CIRCLE_RADIUS, FIXTURE_SQUARE_SIDE};
use crate::point::{build_point_sample, build_point_sample_replay, Point, SampleToken};
use crate::shape::Shape;

/// Demo configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoCfg {
    pub point_count: usize,
    /// Seed for a reproducible sample; `None` uses the thread-local RNG.
    pub seed: Option<u64>,
}

impl Default for DemoCfg {
    fn default() -> Self {
        Self {
            point_count: DEFAULT_POINT_COUNT,
            seed: None,
        }
    }
}

/// Area line for one shape, in input order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapeArea {
    pub kind: String,
    pub name: String,
    pub area: f64,
    /// `"<name>: <area>"`.
    pub line: String,
}

impl ShapeArea {
    fn of(shape: &Shape) -> Self {
        Self {
            kind: shape.kind.label().to_string(),
            name: shape.name.clone(),
            area: shape.area(),
            line: shape.describe(),
        }
    }
}

/// Everything one demo run produces.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DemoReport {
    pub seed: Option<u64>,
    pub points: Vec<Point>,
    pub shapes: Vec<ShapeArea>,
}

impl DemoReport {
    /// Description lines, one per shape.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.shapes.iter().map(|s| s.line.as_str())
    }
}

/// `[Circle(5), Square(10)]`, both unnamed.
pub fn default_shapes() -> Vec<Shape> {
    vec![
        Shape::circle(FIXTURE_CIRCLE_RADIUS),
        Shape::square(FIXTURE_SQUARE_SIDE),
    ]
}

/// Fixture run over `default_shapes()`.
pub fn run_demo(cfg: &DemoCfg) -> DemoReport {
    run_demo_with_shapes(cfg, &default_shapes())
}

pub fn run_demo_with_shapes(cfg: &DemoCfg, shapes: &[Shape]) -> DemoReport {
    let points = match cfg.seed {
        Some(seed) => build_point_sample_replay(cfg.point_count, SampleToken::new(seed)),
        None => build_point_sample(cfg.point_count),
    };
    DemoReport {
        seed: cfg.seed,
        points,
        shapes: shapes.iter().map(ShapeArea::of).collect(),
    }
}

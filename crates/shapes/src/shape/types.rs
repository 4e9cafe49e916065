//! Shape variants and the checked-construction error.
//!
//! - `ShapeKind`: closed sum over the supported variants, one area formula each.
//! - `Shape`: a kind plus a caller-owned `name` (empty unless set).
//! - `ShapeError`: raised only by the `try_*` constructors.

use std::f64::consts::PI;
use std::fmt;

/// Geometric variant. Adding a variant means extending every `match` below.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ShapeKind {
    Circle { radius: f64 },
    Square { side_length: f64 },
}

impl ShapeKind {
    /// Circle: `π r²`. Square: `s²`.
    #[inline]
    pub fn area(&self) -> f64 {
        match *self {
            ShapeKind::Circle { radius } => PI * radius * radius,
            ShapeKind::Square { side_length } => side_length * side_length,
        }
    }

    /// Lower-case variant label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Circle { .. } => "circle",
            ShapeKind::Square { .. } => "square",
        }
    }
}

/// A shape with an optional display name.
///
/// `name` defaults to the empty string and is never derived from the variant,
/// so an unnamed circle describes itself as `": 78.53981633974483"`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: ShapeKind,
}

impl Shape {
    /// Unchecked circle. Negative radii still give `π r² >= 0`.
    pub fn circle(radius: f64) -> Self {
        Self::from_kind(ShapeKind::Circle { radius })
    }

    /// Unchecked square. Negative sides still give `s² >= 0`.
    pub fn square(side_length: f64) -> Self {
        Self::from_kind(ShapeKind::Square { side_length })
    }

    /// Circle with `radius >= 0` (NaN rejected).
    pub fn try_circle(radius: f64) -> Result<Self, ShapeError> {
        check_dimension("radius", radius)?;
        Ok(Self::circle(radius))
    }

    /// Square with `side_length >= 0` (NaN rejected).
    pub fn try_square(side_length: f64) -> Result<Self, ShapeError> {
        check_dimension("side_length", side_length)?;
        Ok(Self::square(side_length))
    }

    pub fn from_kind(kind: ShapeKind) -> Self {
        Self {
            name: String::new(),
            kind,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.kind.area()
    }

    /// `"<name>: <area>"`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.area())
    }
}

fn check_dimension(field: &'static str, value: f64) -> Result<(), ShapeError> {
    // NaN fails the comparison.
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ShapeError::InvalidDimension { field, value })
    }
}

/// Error for checked shape construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeError {
    InvalidDimension { field: &'static str, value: f64 },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { field, value } => {
                write!(f, "invalid dimension: {field} = {value} (need >= 0)")
            }
        }
    }
}

impl std::error::Error for ShapeError {}

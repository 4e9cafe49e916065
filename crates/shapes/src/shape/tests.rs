use super::*;
use crate::cfg::AREA_REL_EPS;
use proptest::prelude::*;
use std::f64::consts::PI;

fn rel_close(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= AREA_REL_EPS * scale
}

#[test]
fn fixture_areas() {
    assert!(rel_close(area(&Shape::circle(5.0)), 78.539_816_339_744_83));
    assert_eq!(area(&Shape::square(10.0)), 100.0);
}

#[test]
fn describe_uses_empty_default_name() {
    let c = Shape::circle(5.0);
    assert!(c.name.is_empty());
    let line = describe(&c);
    assert!(line.starts_with(": 78.5398163"), "got {line}");
    assert_eq!(describe(&Shape::square(10.0)), ": 100");
}

#[test]
fn describe_with_name() {
    let s = Shape::square(2.5).with_name("tile");
    assert_eq!(describe(&s), "tile: 6.25");
    assert_eq!(s.to_string(), s.describe());
}

#[test]
fn zero_dimensions_have_zero_area() {
    assert_eq!(area(&Shape::circle(0.0)), 0.0);
    assert_eq!(area(&Shape::square(0.0)), 0.0);
}

#[test]
fn unchecked_negative_dimensions_square_out() {
    // Accepted as-is; the area is still non-negative.
    assert!(rel_close(area(&Shape::circle(-2.0)), 4.0 * PI));
    assert_eq!(area(&Shape::square(-3.0)), 9.0);
}

#[test]
fn checked_constructors_reject_bad_lengths() {
    assert!(Shape::try_circle(1.5).is_ok());
    assert!(Shape::try_square(0.0).is_ok());
    assert_eq!(
        Shape::try_circle(-1.0),
        Err(ShapeError::InvalidDimension {
            field: "radius",
            value: -1.0
        })
    );
    assert!(matches!(
        Shape::try_square(f64::NAN),
        Err(ShapeError::InvalidDimension {
            field: "side_length",
            ..
        })
    ));
    assert!(Shape::try_circle(f64::NEG_INFINITY).is_err());
}

#[test]
fn checked_constructors_accept_infinite_lengths() {
    // Neither negative nor NaN, so construction succeeds.
    let c = Shape::try_circle(f64::INFINITY).unwrap();
    assert_eq!(area(&c), f64::INFINITY);
    assert!(Shape::try_square(f64::INFINITY).is_ok());
}

#[test]
fn error_message_names_field() {
    let err = Shape::try_circle(-0.5).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("radius"));
    assert!(msg.contains("-0.5"));
}

#[test]
fn kind_labels() {
    assert_eq!(Shape::circle(1.0).kind.label(), "circle");
    assert_eq!(Shape::square(1.0).kind.label(), "square");
}

proptest! {
    #[test]
    fn circle_area_formula(r in 0.0f64..1e6) {
        prop_assert!(rel_close(area(&Shape::circle(r)), PI * r * r));
    }

    #[test]
    fn square_area_formula(s in 0.0f64..1e6) {
        prop_assert_eq!(area(&Shape::square(s)), s * s);
    }

    #[test]
    fn area_is_idempotent(r in 0.0f64..1e3, s in 0.0f64..1e3) {
        for shape in [Shape::circle(r), Shape::square(s)] {
            let a1 = area(&shape);
            let a2 = area(&shape);
            prop_assert_eq!(a1.to_bits(), a2.to_bits());
        }
    }
}

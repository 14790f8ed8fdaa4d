// File: crates/grommet-core/tests/calculator.rs
// Purpose: Validate the owned calculator state and its recalculate flow.

use grommet_core::{Calculator, GrommetError, Rectangle, Side, SpacingConfig};

#[test]
fn starts_without_result_and_recalculates() {
    let mut calc = Calculator::default();
    assert!(calc.result().is_none());
    assert!(calc.placed_points().is_empty());

    let count = calc.recalculate().count();
    // 1000 x 2000 sample panel, 6000 mm at a 32.5 mm target
    assert_eq!(count, 185);
    assert_eq!(calc.result().map(|r| r.count()), Some(count));
    assert_eq!(calc.placed_points().len(), count);
}

#[test]
fn changing_inputs_drops_stale_result() {
    let mut calc = Calculator::default();
    calc.recalculate();
    calc.set_rectangle(Rectangle::new(500.0, 700.0).unwrap());
    assert!(calc.result().is_none());

    calc.recalculate();
    calc.set_config(SpacingConfig::new(31.0, 35.0).unwrap());
    assert!(calc.result().is_none());
    assert_eq!(calc.recalculate().count(), 73);
}

#[test]
fn bad_text_keeps_previous_state() {
    let mut calc = Calculator::default();
    calc.recalculate();
    let err = calc.set_dimensions("-5", "100").unwrap_err();
    assert!(matches!(err, GrommetError::InvalidDimension { name: "width", .. }));
    assert_eq!(calc.rectangle().width(), 1000.0);
    assert!(calc.result().is_some());

    calc.set_dimensions("3000", "2000").unwrap();
    assert!(calc.result().is_none());
    assert_eq!(calc.recalculate().perimeter(), 10000.0);
}

#[test]
fn point_lookup() {
    let mut calc = Calculator::new(Rectangle::new(10.0, 10.0).unwrap(), SpacingConfig::default());
    assert!(calc.point(0).is_none());
    calc.recalculate();
    let p = calc.point(2).unwrap();
    assert_eq!((p.x, p.y, p.side), (10.0, 10.0, Side::Right));
    assert!(calc.point(4).is_none());
}

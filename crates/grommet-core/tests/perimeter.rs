// File: crates/grommet-core/tests/perimeter.rs
// Purpose: Validate offset-to-point mapping, corner ties and reference distances.

use approx::assert_abs_diff_eq;
use grommet_core::{locate, locate_all, solve, Rectangle, ReferenceEdge, Side, SpacingConfig};

const EPS: f64 = 1e-9;

#[test]
fn walks_clockwise_from_top_left() {
    let r = Rectangle::new(100.0, 50.0).unwrap();

    let p = locate(&r, 40.0);
    assert_eq!((p.x, p.y, p.side), (40.0, 0.0, Side::Top));

    let p = locate(&r, 120.0);
    assert_eq!((p.x, p.y, p.side), (100.0, 20.0, Side::Right));

    let p = locate(&r, 180.0);
    assert_eq!((p.x, p.y, p.side), (70.0, 50.0, Side::Bottom));

    let p = locate(&r, 280.0);
    assert_eq!((p.x, p.y, p.side), (0.0, 20.0, Side::Left));
}

#[test]
fn corner_ties_pick_earlier_side() {
    let r = Rectangle::new(100.0, 50.0).unwrap();
    let top_right = locate(&r, 100.0);
    assert_eq!((top_right.x, top_right.y, top_right.side), (100.0, 0.0, Side::Top));
    let bottom_right = locate(&r, 150.0);
    assert_eq!((bottom_right.x, bottom_right.y, bottom_right.side), (100.0, 50.0, Side::Right));
    let bottom_left = locate(&r, 250.0);
    assert_eq!((bottom_left.x, bottom_left.y, bottom_left.side), (0.0, 50.0, Side::Bottom));
}

#[test]
fn reference_distances_per_side() {
    let r = Rectangle::new(100.0, 50.0).unwrap();
    let cases = [
        (40.0, ReferenceEdge::Left, 40.0),
        (120.0, ReferenceEdge::Top, 20.0),
        (180.0, ReferenceEdge::Right, 30.0),
        (280.0, ReferenceEdge::Bottom, 30.0),
    ];
    for (d, edge, want) in cases {
        let p = locate(&r, d);
        assert_eq!(p.reference_edge(), edge);
        assert_abs_diff_eq!(p.reference_distance(&r), want, epsilon = 1e-9);
    }
}

#[test]
fn every_solved_position_lies_on_outline() {
    let cfg = SpacingConfig::default();
    for (w, h) in [(10.0, 10.0), (500.0, 700.0), (3000.0, 2000.0), (1234.5, 67.8)] {
        let r = Rectangle::new(w, h).unwrap();
        let res = solve(&r, &cfg);
        for p in locate_all(&r, res.positions()) {
            assert!((-EPS..=w + EPS).contains(&p.x), "x {} out of 0..{w}", p.x);
            assert!((-EPS..=h + EPS).contains(&p.y), "y {} out of 0..{h}", p.y);
            let on_edge = p.x == 0.0 || p.x == w || p.y == 0.0 || p.y == h;
            assert!(on_edge, "({}, {}) not on the outline", p.x, p.y);
        }
    }
}

#[test]
fn sides_appear_in_walking_order() {
    let r = Rectangle::new(3000.0, 2000.0).unwrap();
    let res = solve(&r, &SpacingConfig::default());
    let sides: Vec<Side> = locate_all(&r, res.positions()).iter().map(|p| p.side).collect();
    let order = |s: &Side| Side::ALL.iter().position(|x| x == s).unwrap();
    assert!(sides.windows(2).all(|w| order(&w[0]) <= order(&w[1])));
    assert_eq!(sides.first(), Some(&Side::Top));
    assert_eq!(sides.last(), Some(&Side::Left));
}

// File: crates/grommet-core/tests/svg.rs
// Purpose: Validate SVG layout structure (viewBox, outline, one marker per grommet, labels).

use grommet_core::svg::write_svg;
use grommet_core::{render_svg, solve, Rectangle, SpacingConfig, SvgOptions};

#[test]
fn layout_contains_every_marker() {
    let r = Rectangle::new(500.0, 700.0).unwrap();
    let res = solve(&r, &SpacingConfig::default());
    let svg = render_svg(&r, &res, &SvgOptions::default());

    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="-50 -50 600 800">"#));
    assert!(svg.contains(r#"stroke-dasharray="10,5""#));
    assert_eq!(svg.matches("<circle").count(), res.count());
    assert!(svg.contains(&format!(">{}</text>", res.count())));
    assert!(svg.contains(">500 mm</text>"));
    assert!(svg.contains("rotate(-90, -20, 350)"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn layout_file_is_written() {
    let r = Rectangle::new(100.0, 50.0).unwrap();
    let res = solve(&r, &SpacingConfig::default());
    let out = std::path::PathBuf::from("target/test_out/layout.svg");
    write_svg(&r, &res, &SvgOptions::default(), &out).expect("write svg");
    let text = std::fs::read_to_string(&out).expect("read back");
    assert_eq!(text.matches("<circle").count(), res.count());
}

#[test]
fn layout_file_creates_missing_directories() {
    let r = Rectangle::new(100.0, 50.0).unwrap();
    let res = solve(&r, &SpacingConfig::default());
    let dir = std::path::PathBuf::from("target/test_out/svg_nested");
    let _ = std::fs::remove_dir_all(&dir);
    let out = dir.join("a/b/layout.svg");
    write_svg(&r, &res, &SvgOptions::default(), &out).expect("write svg into new dirs");
    assert!(out.is_file());
}

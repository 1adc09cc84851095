#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn snap_floors_positive_values() {
    assert_eq!(snap(Point::new(123.0, 216.0), 50.0), Point::new(100.0, 200.0));
}

#[test]
fn snap_floors_negative_values_away_from_zero() {
    assert_eq!(snap(Point::new(-10.0, -50.0), 50.0), Point::new(-50.0, -50.0));
    assert_eq!(snap(Point::new(-50.1, -0.5), 50.0), Point::new(-100.0, -50.0));
}

#[test]
fn snap_keeps_exact_multiples() {
    assert_eq!(snap(Point::new(150.0, -200.0), 50.0), Point::new(150.0, -200.0));
}

#[test]
fn snap_axes_are_independent() {
    let p = snap(Point::new(49.9, 50.0), 50.0);
    assert_eq!(p.x, 0.0);
    assert_eq!(p.y, 50.0);
}

#[test]
fn snap_is_idempotent_for_fractional_cells() {
    // 0.9 / 0.3 rounds above 3 while 3 * 0.3 rounds below 0.9.
    for cell in [0.3, 0.1, 0.7, 1.1, 12.5] {
        for i in -40..40 {
            let v = f64::from(i) * 0.37;
            let once = snap_axis(v, cell);
            assert_eq!(snap_axis(once, cell), once, "v={v} cell={cell}");
            assert!(once <= v, "v={v} cell={cell} once={once}");
        }
    }
}

#[test]
fn snap_result_is_within_one_cell_below() {
    let v = 173.0 - 50.0;
    let s = snap_axis(v, 50.0);
    assert!(s <= v && v - s < 50.0);
}

#[test]
fn is_snapped_detects_grid_lines() {
    assert!(is_snapped(100.0, 50.0));
    assert!(is_snapped(-150.0, 50.0));
    assert!(!is_snapped(101.0, 50.0));
}

// =============================================================
// line_positions
// =============================================================

#[test]
fn line_positions_cover_span_on_cell_multiples() {
    let lines: Vec<f64> = line_positions(-10.0, 120.0, 50.0, 512).collect();
    assert_eq!(lines, vec![-50.0, 0.0, 50.0, 100.0]);
}

#[test]
fn line_positions_thin_out_wide_spans() {
    let lines: Vec<f64> = line_positions(0.0, 1.0e6, 1.0, 100).collect();
    assert!(!lines.is_empty());
    assert!(lines.len() <= 100);
    assert!(lines.iter().all(|x| x.fract() == 0.0));
    assert!(lines.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn line_positions_stay_bounded_at_huge_offsets() {
    assert!(line_positions(1.0e20, 2.0e20, 50.0, 512).count() <= 512);
    assert!(line_positions(1.0e20, 1.0e20 + 1000.0, 50.0, 512).count() <= 512);
}

#[test]
fn line_positions_skip_non_finite_bounds() {
    assert_eq!(line_positions(f64::NEG_INFINITY, 0.0, 50.0, 512).count(), 0);
    assert_eq!(line_positions(0.0, f64::NAN, 50.0, 512).count(), 0);
}

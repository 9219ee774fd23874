//! Path geometry for arcs and ribbons.
//!
//! Angle convention: zero at 12 o'clock, increasing clockwise, matching the
//! layout side. Coordinates are relative to the diagram center.

use chordial_core::ChordEnd;
use chordial_core::geom::{Point, point};
use std::fmt::Write as _;

/// Shortest-round-trip float formatting for SVG attributes, with near-zero
/// and near-integer snapping so path data stays stable across platforms.
pub fn fmt(v: f64) -> String {
    let mut v = v;
    if !v.is_finite() {
        return "0".to_string();
    }
    if v.abs() < 1e-9 {
        v = 0.0;
    }
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    if v == 0.0 {
        v = 0.0;
    }
    let mut buf = ryu_js::Buffer::new();
    buf.format_finite(v).to_string()
}

/// Human-facing value formatting for tooltips: at most three decimals,
/// trailing zeros trimmed.
pub fn fmt_value(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut r = (v * 1000.0).round() / 1000.0;
    if r.abs() < 0.0005 {
        r = 0.0;
    }
    let mut s = format!("{r:.3}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}

pub fn polar_xy(radius: f64, angle: f64) -> Point {
    point(radius * angle.sin(), -radius * angle.cos())
}

/// Annular sector `d` string spanning `[start_angle, end_angle]` between
/// `inner_radius` and `outer_radius`.
pub fn arc_path(inner_radius: f64, outer_radius: f64, start_angle: f64, end_angle: f64) -> String {
    let large = if end_angle - start_angle > std::f64::consts::PI {
        1
    } else {
        0
    };
    let o0 = polar_xy(outer_radius, start_angle);
    let o1 = polar_xy(outer_radius, end_angle);
    let i1 = polar_xy(inner_radius, end_angle);
    let i0 = polar_xy(inner_radius, start_angle);

    let mut d = String::new();
    let _ = write!(
        &mut d,
        "M{},{}A{},{},0,{},1,{},{}L{},{}A{},{},0,{},0,{},{}Z",
        fmt(o0.x),
        fmt(o0.y),
        fmt(outer_radius),
        fmt(outer_radius),
        large,
        fmt(o1.x),
        fmt(o1.y),
        fmt(i1.x),
        fmt(i1.y),
        fmt(inner_radius),
        fmt(inner_radius),
        large,
        fmt(i0.x),
        fmt(i0.y),
    );
    d
}

/// Ribbon `d` string: the source sub-arc at `radius`, a quadratic curve
/// through the center to the target sub-arc, and a quadratic back. When both
/// endpoints share one span (a self relationship) the middle leg collapses.
pub fn ribbon_path(source: &ChordEnd, target: &ChordEnd, radius: f64) -> String {
    let s0 = polar_xy(radius, source.start_angle);
    let s1 = polar_xy(radius, source.end_angle);
    let s_large = if source.end_angle - source.start_angle > std::f64::consts::PI {
        1
    } else {
        0
    };

    let mut d = String::new();
    let _ = write!(
        &mut d,
        "M{},{}A{},{},0,{},1,{},{}",
        fmt(s0.x),
        fmt(s0.y),
        fmt(radius),
        fmt(radius),
        s_large,
        fmt(s1.x),
        fmt(s1.y),
    );

    let same_span =
        source.start_angle == target.start_angle && source.end_angle == target.end_angle;
    if !same_span {
        let t0 = polar_xy(radius, target.start_angle);
        let t1 = polar_xy(radius, target.end_angle);
        let t_large = if target.end_angle - target.start_angle > std::f64::consts::PI {
            1
        } else {
            0
        };
        let _ = write!(
            &mut d,
            "Q0,0,{},{}A{},{},0,{},1,{},{}",
            fmt(t0.x),
            fmt(t0.y),
            fmt(radius),
            fmt(radius),
            t_large,
            fmt(t1.x),
            fmt(t1.y),
        );
    }

    let _ = write!(&mut d, "Q0,0,{},{}Z", fmt(s0.x), fmt(s0.y));
    d
}

/// Samples an arc into line segments for hit-testing.
pub fn arc_points(radius: f64, start_angle: f64, end_angle: f64, out: &mut Vec<Point>) {
    let span = (end_angle - start_angle).abs();
    let steps = ((span / 0.2).ceil() as usize).max(1);
    for k in 0..=steps {
        let t = k as f64 / steps as f64;
        out.push(polar_xy(radius, start_angle + (end_angle - start_angle) * t));
    }
}

/// Samples a quadratic bezier with control point at the center, endpoints
/// excluded (they are already emitted by the surrounding arcs).
pub fn center_quad_points(from: Point, to: Point, out: &mut Vec<Point>) {
    const STEPS: usize = 8;
    for k in 1..STEPS {
        let t = k as f64 / STEPS as f64;
        let u = 1.0 - t;
        // Control point is the origin, so the middle term vanishes.
        out.push(point(
            u * u * from.x + t * t * to.x,
            u * u * from.y + t * t * to.y,
        ));
    }
}

/// Closed polygon outline of a ribbon body, for hit-testing.
pub fn ribbon_outline(source: &ChordEnd, target: &ChordEnd, radius: f64) -> Vec<Point> {
    let mut pts = Vec::new();
    arc_points(radius, source.start_angle, source.end_angle, &mut pts);

    let same_span =
        source.start_angle == target.start_angle && source.end_angle == target.end_angle;
    if !same_span {
        let t0 = polar_xy(radius, target.start_angle);
        let s1 = *pts.last().unwrap_or(&t0);
        center_quad_points(s1, t0, &mut pts);
        arc_points(radius, target.start_angle, target.end_angle, &mut pts);
    }

    let s0 = polar_xy(radius, source.start_angle);
    if let Some(last) = pts.last().copied() {
        center_quad_points(last, s0, &mut pts);
    }
    pts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_trims_and_snaps() {
        assert_eq!(fmt(0.0), "0");
        assert_eq!(fmt(-0.0), "0");
        assert_eq!(fmt(2.0000000001), "2");
        assert_eq!(fmt(1.5), "1.5");
        assert_eq!(fmt(f64::NAN), "0");
    }

    #[test]
    fn fmt_value_matches_tooltip_expectations() {
        assert_eq!(fmt_value(5.0), "5");
        assert_eq!(fmt_value(5.5), "5.5");
        assert_eq!(fmt_value(1.23456), "1.235");
    }

    #[test]
    fn polar_zero_points_up() {
        let p = polar_xy(10.0, 0.0);
        assert!((p.x - 0.0).abs() < 1e-12);
        assert!((p.y + 10.0).abs() < 1e-12);
    }

    #[test]
    fn polar_quarter_turn_points_right() {
        let p = polar_xy(10.0, std::f64::consts::FRAC_PI_2);
        assert!((p.x - 10.0).abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
    }

    #[test]
    fn arc_path_small_span_has_no_large_flag() {
        let d = arc_path(70.0, 100.0, 0.0, 1.0);
        assert!(d.starts_with("M0,-100A100,100,0,0,1,"));
        assert!(d.ends_with('Z'));
    }

    #[test]
    fn arc_path_wide_span_sets_large_flag() {
        let d = arc_path(70.0, 100.0, 0.0, 4.0);
        assert!(d.contains("A100,100,0,1,1,"));
    }

    #[test]
    fn ribbon_path_self_span_collapses_middle_leg() {
        let end = ChordEnd {
            index: 0,
            subindex: 0,
            start_angle: 0.2,
            end_angle: 0.9,
            value: 3.0,
        };
        let d = ribbon_path(&end, &end, 70.0);
        assert_eq!(d.matches('A').count(), 1);
        assert_eq!(d.matches('Q').count(), 1);
    }

    #[test]
    fn ribbon_path_two_spans_has_two_arcs_and_two_quads() {
        let source = ChordEnd {
            index: 0,
            subindex: 1,
            start_angle: 0.0,
            end_angle: 0.8,
            value: 5.0,
        };
        let target = ChordEnd {
            index: 1,
            subindex: 0,
            start_angle: 3.0,
            end_angle: 3.8,
            value: 5.0,
        };
        let d = ribbon_path(&source, &target, 70.0);
        assert_eq!(d.matches('A').count(), 2);
        assert_eq!(d.matches('Q').count(), 2);
        assert!(d.ends_with('Z'));
    }

    #[test]
    fn ribbon_outline_is_closed_enough_for_hit_testing() {
        let source = ChordEnd {
            start_angle: 0.0,
            end_angle: 0.8,
            ..Default::default()
        };
        let target = ChordEnd {
            start_angle: 3.0,
            end_angle: 3.8,
            ..Default::default()
        };
        let pts = ribbon_outline(&source, &target, 70.0);
        assert!(pts.len() > 20);
        for p in &pts {
            assert!(p.x.is_finite() && p.y.is_finite());
            assert!(p.x.hypot(p.y) <= 70.0 + 1e-6);
        }
    }
}

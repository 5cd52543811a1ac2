//! Centripetal Catmull–Rom curve fitting.
//!
//! Converts an ordered point sequence into cubic Bezier segments that pass
//! through every sample. The output maps one-to-one onto SVG path commands
//! (`M x y` followed by `C c1x c1y c2x c2y x y` segments).

use super::geometry::Point;
use std::fmt;

/// Default parametrization exponent (centripetal).
pub const DEFAULT_ALPHA: f64 = 0.5;

/// A single path drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Move the pen to the start of the curve
    MoveTo(Point),
    /// Cubic Bezier segment from the current point to `to`
    CurveTo { c1: Point, c2: Point, to: Point },
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) => write!(f, "M {} {}", coord(p.x), coord(p.y)),
            PathCommand::CurveTo { c1, c2, to } => write!(
                f,
                "C {} {} {} {} {} {}",
                coord(c1.x),
                coord(c1.y),
                coord(c2.x),
                coord(c2.y),
                coord(to.x),
                coord(to.y)
            ),
        }
    }
}

/// Collapses negative zero so equal inputs always print the same digits.
fn coord(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}

/// Fits a smooth curve through `points`.
///
/// Returns an empty command list for fewer than two points. The first and
/// last points are duplicated as phantom neighbours so every real segment
/// `p1 → p2` has a full `p0, p1, p2, p3` window. Zero distances and zero
/// denominators are replaced by `1`, so coincident samples produce finite
/// control points instead of `NaN`.
///
/// `alpha` selects the parametrization: 0 = uniform, 0.5 = centripetal,
/// 1 = chordal.
pub fn fit_smooth_curve(points: &[Point], alpha: f64) -> Vec<PathCommand> {
    if points.len() < 2 {
        return Vec::new();
    }

    let first = points[0];
    let last = points[points.len() - 1];
    let padded: Vec<Point> = std::iter::once(first)
        .chain(points.iter().copied())
        .chain(std::iter::once(last))
        .collect();

    let mut commands = Vec::with_capacity(points.len());
    commands.push(PathCommand::MoveTo(first));

    for window in padded.windows(4) {
        let (c1, c2) = control_points(window[0], window[1], window[2], window[3], alpha);
        commands.push(PathCommand::CurveTo {
            c1,
            c2,
            to: window[2],
        });
    }

    commands
}

/// Renders commands as SVG path data (`d` attribute).
pub fn path_data(commands: &[PathCommand]) -> String {
    commands
        .iter()
        .map(|cmd| cmd.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convenience wrapper: fit and render in one step.
pub fn smooth_path_data(points: &[Point], alpha: f64) -> String {
    path_data(&fit_smooth_curve(points, alpha))
}

/// Bezier control points for the segment `p1 → p2`.
fn control_points(p0: Point, p1: Point, p2: Point, p3: Point, alpha: f64) -> (Point, Point) {
    let d1 = non_zero(p0.distance(&p1));
    let d2 = non_zero(p1.distance(&p2));
    let d3 = non_zero(p2.distance(&p3));

    let d1a = d1.powf(alpha);
    let d2a = d2.powf(alpha);
    let d3a = d3.powf(alpha);
    let d1_2a = d1a * d1a;
    let d2_2a = d2a * d2a;
    let d3_2a = d3a * d3a;

    let a = 2.0 * d1_2a + 3.0 * d1a * d2a + d2_2a;
    let b = 2.0 * d3_2a + 3.0 * d3a * d2a + d2_2a;
    let n = non_zero(3.0 * d1a * (d1a + d2a));
    let m = non_zero(3.0 * d3a * (d3a + d2a));

    let c1 = Point {
        x: (d1_2a * p2.x - d2_2a * p0.x + a * p1.x) / n,
        y: (d1_2a * p2.y - d2_2a * p0.y + a * p1.y) / n,
    };
    let c2 = Point {
        x: (d3_2a * p1.x - d2_2a * p3.x + b * p2.x) / m,
        y: (d3_2a * p1.y - d2_2a * p3.y + b * p2.y) / m,
    };

    (c1, c2)
}

fn non_zero(v: f64) -> f64 {
    if v == 0.0 { 1.0 } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
        raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn assert_finite(commands: &[PathCommand]) {
        for cmd in commands {
            match cmd {
                PathCommand::MoveTo(p) => assert!(p.is_finite()),
                PathCommand::CurveTo { c1, c2, to } => {
                    assert!(c1.is_finite() && c2.is_finite() && to.is_finite(), "{cmd:?}");
                }
            }
        }
    }

    #[test]
    fn fewer_than_two_points_yield_no_curve() {
        assert!(fit_smooth_curve(&[], DEFAULT_ALPHA).is_empty());
        assert!(fit_smooth_curve(&pts(&[(3.0, 4.0)]), DEFAULT_ALPHA).is_empty());
        assert_eq!(smooth_path_data(&[], DEFAULT_ALPHA), "");
    }

    #[test]
    fn duplicate_points_stay_finite() {
        let commands = fit_smooth_curve(&pts(&[(7.0, 7.0), (7.0, 7.0)]), DEFAULT_ALPHA);
        assert_eq!(commands.len(), 2);
        assert_finite(&commands);
        assert_eq!(
            commands[1],
            PathCommand::CurveTo {
                c1: Point::new(7.0, 7.0),
                c2: Point::new(7.0, 7.0),
                to: Point::new(7.0, 7.0),
            }
        );
    }

    #[test]
    fn repeated_samples_inside_a_stroke_stay_finite() {
        let input = pts(&[(0.0, 0.0), (5.0, 5.0), (5.0, 5.0), (5.0, 5.0), (10.0, 0.0)]);
        for alpha in [0.0, 0.5, 1.0] {
            assert_finite(&fit_smooth_curve(&input, alpha));
        }
    }

    #[test]
    fn one_segment_per_consecutive_pair() {
        let input = pts(&[(0.0, 0.0), (10.0, 5.0), (20.0, 0.0), (30.0, 5.0)]);
        let commands = fit_smooth_curve(&input, DEFAULT_ALPHA);
        assert_eq!(commands.len(), 4);
        assert_eq!(commands[0], PathCommand::MoveTo(input[0]));
        for (cmd, expected) in commands[1..].iter().zip(&input[1..]) {
            match cmd {
                PathCommand::CurveTo { to, .. } => assert_eq!(to, expected),
                other => panic!("unexpected command {other:?}"),
            }
        }
    }

    #[test]
    fn collinear_points_produce_straight_segments() {
        let commands = fit_smooth_curve(&pts(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]), 0.5);
        assert_eq!(commands.len(), 3);
        for cmd in &commands[1..] {
            let PathCommand::CurveTo { c1, c2, to } = cmd else {
                panic!("expected curve segment");
            };
            assert_eq!(c1.y, 0.0);
            assert_eq!(c2.y, 0.0);
            assert_eq!(to.y, 0.0);
            assert!((0.0..=20.0).contains(&c1.x));
            assert!((0.0..=20.0).contains(&c2.x));
        }
        assert!(!path_data(&commands).contains("-0 "));
    }

    #[test]
    fn output_is_deterministic() {
        let input = pts(&[(1.5, 2.0), (8.25, 3.0), (4.0, 11.0), (12.0, 12.0)]);
        let first = smooth_path_data(&input, 0.5);
        let second = smooth_path_data(&input, 0.5);
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn alpha_changes_shape_but_not_endpoints() {
        let input = pts(&[(0.0, 0.0), (1.0, 10.0), (30.0, 12.0), (31.0, 0.0)]);
        let uniform = fit_smooth_curve(&input, 0.0);
        let chordal = fit_smooth_curve(&input, 1.0);
        assert_ne!(uniform, chordal);
        assert_eq!(uniform[0], chordal[0]);
        match (uniform.last(), chordal.last()) {
            (
                Some(PathCommand::CurveTo { to: a, .. }),
                Some(PathCommand::CurveTo { to: b, .. }),
            ) => assert_eq!(a, b),
            other => panic!("unexpected tail {other:?}"),
        }
    }

    #[test]
    fn path_data_uses_moveto_curveto_syntax() {
        let d = smooth_path_data(&pts(&[(5.0, 5.0), (15.0, 5.0)]), 0.5);
        assert!(d.starts_with("M 5 5 C "), "{d}");
        assert!(d.ends_with(" 15 5"), "{d}");
        assert_eq!(d.matches('C').count(), 1);
        assert_eq!(d.split_whitespace().count(), 3 + 7);
    }
}

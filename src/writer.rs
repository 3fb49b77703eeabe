// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use svgtypes::PathSegment;

/// Coordinates numeric precision.
const PRECISION: i32 = 8;

/// Writes path segments in a compact form.
///
/// A command is omitted when it repeats the previous one (except MoveTo
/// and ClosePath), numbers are separated by a space unless the next one
/// is negative.
pub(crate) fn write_path(segments: &[PathSegment]) -> String {
    let mut buf = String::new();
    let mut prev_cmd = None;
    for seg in segments {
        let cmd = command(seg);
        let is_implicit = prev_cmd == Some(cmd) && !matches!(cmd, 'M' | 'm' | 'Z' | 'z');

        if !is_implicit {
            // Some importers (FontForge) fail on `zm`.
            if cmd == 'm' && prev_cmd == Some('z') {
                buf.push(' ');
            }

            buf.push(cmd);
        }

        for (i, num) in operands(seg).into_iter().enumerate() {
            let num = round(num);
            if (i > 0 || is_implicit) && (num >= 0.0 || num.is_nan()) {
                buf.push(' ');
            }

            write_num(num, &mut buf);
        }

        prev_cmd = Some(cmd);
    }

    buf
}

/// Formats a number the same way path coordinates are written.
pub(crate) fn number_to_string(num: f64) -> String {
    let mut buf = String::new();
    write_num(round(num), &mut buf);
    buf
}

// Round numbers up to the specified precision to prevent writing
// ugly numbers like 23.999999999999996.
fn round(num: f64) -> f64 {
    let pow = 10f64.powi(PRECISION);
    let v = (num * pow).round() / pow;
    if !v.is_finite() {
        // Too big to be scaled.
        return num;
    }

    // Get rid of `-0`.
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

// Integral values are printed without a fraction by `Display` already.
fn write_num(num: f64, buf: &mut String) {
    buf.push_str(&num.to_string());
}

fn command(seg: &PathSegment) -> char {
    let (abs, c) = match *seg {
        PathSegment::MoveTo { abs, .. } => (abs, 'm'),
        PathSegment::LineTo { abs, .. } => (abs, 'l'),
        PathSegment::HorizontalLineTo { abs, .. } => (abs, 'h'),
        PathSegment::VerticalLineTo { abs, .. } => (abs, 'v'),
        PathSegment::CurveTo { abs, .. } => (abs, 'c'),
        PathSegment::SmoothCurveTo { abs, .. } => (abs, 's'),
        PathSegment::Quadratic { abs, .. } => (abs, 'q'),
        PathSegment::SmoothQuadratic { abs, .. } => (abs, 't'),
        PathSegment::EllipticalArc { abs, .. } => (abs, 'a'),
        PathSegment::ClosePath { abs } => (abs, 'z'),
    };

    if abs {
        c.to_ascii_uppercase()
    } else {
        c
    }
}

fn operands(seg: &PathSegment) -> Vec<f64> {
    let flag = |v: bool| if v { 1.0 } else { 0.0 };

    match *seg {
        PathSegment::MoveTo { x, y, .. }
        | PathSegment::LineTo { x, y, .. }
        | PathSegment::SmoothQuadratic { x, y, .. } => vec![x, y],
        PathSegment::HorizontalLineTo { x, .. } => vec![x],
        PathSegment::VerticalLineTo { y, .. } => vec![y],
        PathSegment::CurveTo {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
            ..
        } => vec![x1, y1, x2, y2, x, y],
        PathSegment::SmoothCurveTo { x2, y2, x, y, .. } => vec![x2, y2, x, y],
        PathSegment::Quadratic { x1, y1, x, y, .. } => vec![x1, y1, x, y],
        PathSegment::EllipticalArc {
            rx,
            ry,
            x_axis_rotation,
            large_arc,
            sweep,
            x,
            y,
            ..
        } => vec![rx, ry, x_axis_rotation, flag(large_arc), flag(sweep), x, y],
        PathSegment::ClosePath { .. } => Vec::new(),
    }
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_num {
        ($name:ident, $num:expr, $result:expr) => (
            #[test]
            fn $name() {
                assert_eq!(number_to_string($num), $result);
            }
        )
    }

    test_num!(num_integer,          24.0,                 "24");
    test_num!(num_fraction,         12.5,                 "12.5");
    test_num!(num_negative,         -0.25,                "-0.25");
    test_num!(num_noise_up,         23.999999999999996,   "24");
    test_num!(num_noise_down,       0.30000000000000004,  "0.3");
    test_num!(num_tiny_negative,    -0.000000001,         "0");
    test_num!(num_negative_zero,    -0.0,                 "0");
    test_num!(num_precision,        1.123456789,          "1.12345679");

    macro_rules! test_path {
        ($name:ident, $segs:expr, $result:expr) => (
            #[test]
            fn $name() {
                assert_eq!(write_path(&$segs), $result);
            }
        )
    }

    test_path!(path_empty, [], "");

    test_path!(path_simple, [
        PathSegment::MoveTo { abs: true, x: 10.0, y: 20.0 },
        PathSegment::LineTo { abs: true, x: 30.0, y: 40.0 },
        PathSegment::ClosePath { abs: true },
    ], "M10 20L30 40Z");

    test_path!(path_implicit_commands, [
        PathSegment::MoveTo { abs: true, x: 0.0, y: 0.0 },
        PathSegment::LineTo { abs: true, x: 10.0, y: 10.0 },
        PathSegment::LineTo { abs: true, x: 20.0, y: -20.0 },
        PathSegment::LineTo { abs: true, x: -5.0, y: 5.0 },
    ], "M0 0L10 10 20-20-5 5");

    test_path!(path_move_to_is_never_implicit, [
        PathSegment::MoveTo { abs: true, x: 1.0, y: 1.0 },
        PathSegment::MoveTo { abs: true, x: 2.0, y: 2.0 },
    ], "M1 1M2 2");

    test_path!(path_repeated_close_path, [
        PathSegment::MoveTo { abs: true, x: 1.0, y: 1.0 },
        PathSegment::ClosePath { abs: false },
        PathSegment::ClosePath { abs: false },
    ], "M1 1zz");

    test_path!(path_relative_move_after_close, [
        PathSegment::MoveTo { abs: true, x: 0.0, y: 0.0 },
        PathSegment::ClosePath { abs: false },
        PathSegment::MoveTo { abs: false, x: 2.0, y: 2.0 },
    ], "M0 0z m2 2");

    test_path!(path_h_and_v, [
        PathSegment::MoveTo { abs: true, x: 0.0, y: 0.0 },
        PathSegment::HorizontalLineTo { abs: true, x: 5.0 },
        PathSegment::VerticalLineTo { abs: false, y: -5.0 },
    ], "M0 0H5v-5");

    test_path!(path_curves, [
        PathSegment::MoveTo { abs: true, x: 0.0, y: 0.0 },
        PathSegment::CurveTo { abs: true, x1: 1.0, y1: 2.0, x2: 3.0, y2: 4.0, x: 5.0, y: 6.0 },
        PathSegment::SmoothCurveTo { abs: false, x2: 1.5, y2: -2.0, x: 3.0, y: 4.0 },
        PathSegment::Quadratic { abs: true, x1: 1.0, y1: 1.0, x: 2.0, y: 2.0 },
        PathSegment::SmoothQuadratic { abs: true, x: 3.0, y: 3.0 },
    ], "M0 0C1 2 3 4 5 6s1.5-2 3 4Q1 1 2 2T3 3");

    test_path!(path_arc, [
        PathSegment::MoveTo { abs: true, x: 0.0, y: 0.0 },
        PathSegment::EllipticalArc {
            abs: true, rx: 5.0, ry: 2.5, x_axis_rotation: 30.0,
            large_arc: true, sweep: false, x: 10.0, y: -10.0,
        },
    ], "M0 0A5 2.5 30 1 0 10-10");
}

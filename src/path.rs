// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use svgtypes::{PathParser, PathSegment};

use crate::{writer, Error, ScaleTransform};

/// Maps path data into a new coordinate space.
///
/// Segment types are preserved, only coordinates and lengths change.
/// Implicit commands are expanded during parsing and a leading relative
/// MoveTo is written as an absolute one.
///
/// # Errors
///
/// - `MalformedPathData` when `data` cannot be parsed.
pub fn transform_path(data: &str, ts: &ScaleTransform) -> Result<String, Error> {
    let mut segments = Vec::new();
    for seg in PathParser::from(data) {
        let mut seg = seg?;

        // The first MoveTo is always relative to (0, 0).
        if segments.is_empty() {
            if let PathSegment::MoveTo { ref mut abs, .. } = seg {
                *abs = true;
            }
        }

        segments.push(seg);
    }

    if !ts.is_identity() {
        for seg in &mut segments {
            *seg = transform_segment(*seg, ts);
        }
    }

    Ok(writer::write_path(&segments))
}

fn transform_segment(seg: PathSegment, ts: &ScaleTransform) -> PathSegment {
    let map = |abs: bool, x: f64, y: f64| {
        if abs {
            ts.apply(x, y)
        } else {
            ts.apply_relative(x, y)
        }
    };

    match seg {
        PathSegment::MoveTo { abs, x, y } => {
            let (x, y) = map(abs, x, y);
            PathSegment::MoveTo { abs, x, y }
        }
        PathSegment::LineTo { abs, x, y } => {
            let (x, y) = map(abs, x, y);
            PathSegment::LineTo { abs, x, y }
        }
        PathSegment::HorizontalLineTo { abs, x } => {
            let x = if abs { ts.apply_x(x) } else { x * ts.sx };
            PathSegment::HorizontalLineTo { abs, x }
        }
        PathSegment::VerticalLineTo { abs, y } => {
            let y = if abs { ts.apply_y(y) } else { y * ts.sy };
            PathSegment::VerticalLineTo { abs, y }
        }
        PathSegment::CurveTo {
            abs,
            x1,
            y1,
            x2,
            y2,
            x,
            y,
        } => {
            let (x1, y1) = map(abs, x1, y1);
            let (x2, y2) = map(abs, x2, y2);
            let (x, y) = map(abs, x, y);
            PathSegment::CurveTo {
                abs,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            }
        }
        PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => {
            let (x2, y2) = map(abs, x2, y2);
            let (x, y) = map(abs, x, y);
            PathSegment::SmoothCurveTo { abs, x2, y2, x, y }
        }
        PathSegment::Quadratic { abs, x1, y1, x, y } => {
            let (x1, y1) = map(abs, x1, y1);
            let (x, y) = map(abs, x, y);
            PathSegment::Quadratic { abs, x1, y1, x, y }
        }
        PathSegment::SmoothQuadratic { abs, x, y } => {
            let (x, y) = map(abs, x, y);
            PathSegment::SmoothQuadratic { abs, x, y }
        }
        PathSegment::EllipticalArc {
            abs,
            rx,
            ry,
            x_axis_rotation,
            large_arc,
            sweep,
            x,
            y,
        } => {
            let (rx, ry, x_axis_rotation) = ts.apply_ellipse(rx, ry, x_axis_rotation);
            let (x, y) = map(abs, x, y);
            PathSegment::EllipticalArc {
                abs,
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep: if ts.flips() { !sweep } else { sweep },
                x,
                y,
            }
        }
        PathSegment::ClosePath { abs } => PathSegment::ClosePath { abs },
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{SourceFrame, TargetFrame};

const EPSILON: f64 = 1e-10;

/// A translate-then-scale transform from a source frame into a target frame.
///
/// A point `(x, y)` is mapped to `((x + tx) * sx, (y + ty) * sy)`.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ScaleTransform {
    pub sx: f64,
    pub sy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl ScaleTransform {
    /// Creates a transform that maps `source` onto `target`.
    ///
    /// Zero-sized sources are rejected during detection,
    /// so scale factors are finite for any detected frame.
    pub fn new(source: &SourceFrame, target: TargetFrame) -> Self {
        let (tx, ty) = if source.has_offset() {
            (-source.x, -source.y)
        } else {
            (0.0, 0.0)
        };

        ScaleTransform {
            sx: target.size / source.width,
            sy: target.size / source.height,
            tx,
            ty,
        }
    }

    /// Checks that the transform doesn't change anything.
    pub fn is_identity(&self) -> bool {
        self.sx == 1.0 && self.sy == 1.0 && self.tx == 0.0 && self.ty == 0.0
    }

    /// Checks that both axes are scaled by the same factor.
    pub fn is_uniform(&self) -> bool {
        self.sx == self.sy
    }

    /// Checks that the transform mirrors the drawing.
    ///
    /// Arcs have to flip their sweep direction in this case.
    pub fn flips(&self) -> bool {
        self.sx * self.sy < 0.0
    }

    /// Maps an absolute point.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (self.apply_x(x), self.apply_y(y))
    }

    /// Maps a relative offset. Translation is not applied.
    pub fn apply_relative(&self, dx: f64, dy: f64) -> (f64, f64) {
        (dx * self.sx, dy * self.sy)
    }

    /// Maps an absolute X coordinate.
    pub fn apply_x(&self, x: f64) -> f64 {
        (x + self.tx) * self.sx
    }

    /// Maps an absolute Y coordinate.
    pub fn apply_y(&self, y: f64) -> f64 {
        (y + self.ty) * self.sy
    }

    /// Maps arc radii and the x-axis rotation (in degrees).
    ///
    /// Returns new `(rx, ry, rotation)`.
    pub fn apply_ellipse(&self, rx: f64, ry: f64, rotation: f64) -> (f64, f64, f64) {
        if self.is_uniform() {
            let s = self.sx.abs();
            return (rx * s, ry * s, rotation);
        }

        // The ellipse is an image of the unit circle under
        // scale(rx, ry) and rotate(rotation). Apply our scale on top of it
        // and extract the new axes from the eigenvalues of M * M^T.
        let (sin, cos) = rotation.to_radians().sin_cos();
        let a = rx * self.sx * cos;
        let b = rx * self.sy * sin;
        let c = -ry * self.sx * sin;
        let d = ry * self.sy * cos;

        let j = a * a + c * c;
        let k = b * b + d * d;

        let disc = ((a - d) * (a - d) + (c + b) * (c + b)) * ((a + d) * (a + d) + (c - b) * (c - b));
        let mean = (j + k) / 2.0;

        // Almost a circle.
        if disc < EPSILON * mean {
            let r = mean.sqrt();
            return (r, r, 0.0);
        }

        let l = a * b + c * d;
        let disc = disc.sqrt();
        let l1 = mean + disc / 2.0;
        let l2 = mean - disc / 2.0;

        let angle = if l.abs() < EPSILON && (l1 - k).abs() < EPSILON {
            90.0
        } else if l.abs() > (l1 - k).abs() {
            ((l1 - j) / l).atan().to_degrees()
        } else {
            (l / (l1 - k)).atan().to_degrees()
        };

        if angle >= 0.0 {
            (l1.sqrt(), l2.sqrt(), angle)
        } else {
            (l2.sqrt(), l1.sqrt(), angle + 90.0)
        }
    }
}

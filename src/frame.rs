// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::str::FromStr;

use svgtypes::{Length, LengthUnit, Number};

use crate::Error;

/// A detected coordinate space of a document.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SourceFrame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SourceFrame {
    /// Creates a new `SourceFrame`.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        SourceFrame {
            x,
            y,
            width,
            height,
        }
    }

    /// Checks that the frame doesn't start at (0, 0).
    pub fn has_offset(&self) -> bool {
        self.x != 0.0 || self.y != 0.0
    }

    /// Detects the frame of a root `svg` element.
    ///
    /// `viewBox` has a priority. `width` and `height` are used only
    /// when `viewBox` is missing or cannot be parsed.
    ///
    /// Returns `None` when the node is not an `svg` element,
    /// when no size is found or when the detected size is zero.
    pub(crate) fn from_svg_node(node: roxmltree::Node) -> Option<Self> {
        if !(node.is_element() && node.tag_name().name() == "svg") {
            return None;
        }

        let frame = match attribute(node, "viewBox").and_then(parse_view_box) {
            Some(frame) => frame,
            None => {
                let width = attribute(node, "width").and_then(parse_size)?;
                let height = attribute(node, "height").and_then(parse_size)?;
                SourceFrame::new(0.0, 0.0, width, height)
            }
        };

        // A zero-sized frame cannot be scaled.
        // Note that a zero-sized viewBox doesn't fall back to width/height.
        if frame.width == 0.0 || frame.height == 0.0 {
            return None;
        }

        Some(frame)
    }
}

/// A target coordinate space: a square canvas.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TargetFrame {
    /// Width and height of the canvas.
    pub size: f64,
}

impl TargetFrame {
    /// Creates a new `TargetFrame`.
    pub fn new(size: f64) -> Self {
        TargetFrame { size }
    }
}

impl Default for TargetFrame {
    fn default() -> Self {
        TargetFrame::new(24.0)
    }
}

/// Detects the coordinate space of an SVG document.
///
/// # Errors
///
/// - `MalformedDocument` when the text is not a well-formed XML.
/// - `DimensionsNotDetected` when the root element doesn't describe its size.
pub fn extract_frame(text: &str) -> Result<SourceFrame, Error> {
    let doc = crate::parse(text)?;
    SourceFrame::from_svg_node(doc.root_element()).ok_or(Error::DimensionsNotDetected)
}

fn attribute<'a>(node: roxmltree::Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attributes()
        .find(|a| a.namespace().is_none() && a.name() == name)
        .map(|a| a.value())
}

// Exactly four whitespace-separated numbers.
fn parse_view_box(text: &str) -> Option<SourceFrame> {
    let mut list = [0.0; 4];
    let mut count = 0;
    for token in text.split_whitespace() {
        if count == list.len() {
            return None;
        }

        let Number(n) = Number::from_str(token).ok()?;
        if !n.is_finite() {
            return None;
        }

        list[count] = n;
        count += 1;
    }

    if count != list.len() {
        return None;
    }

    Some(SourceFrame::new(list[0], list[1], list[2], list[3]))
}

// A unitless or `px` length.
fn parse_size(text: &str) -> Option<f64> {
    let length = Length::from_str(text).ok()?;
    match length.unit {
        LengthUnit::None | LengthUnit::Px => {}
        _ => return None,
    }

    if length.number.is_finite() && length.number > 0.0 {
        Some(length.number)
    } else {
        None
    }
}

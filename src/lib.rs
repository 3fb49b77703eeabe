// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`svgnorm` normalizes SVG icons to a uniform square canvas.

Each document's coordinate space is detected from the root `viewBox`
(or, failing that, from its `width`/`height`), every `path` is moved into
an origin-zero frame and rescaled to the target size, and the root element
gets a canonical `width`, `height` and `viewBox`.

Only the bytes that change are rewritten. Everything else in a document,
including formatting, comments and non-path elements, is kept as is.

## Limitations

- Only `path` elements are transformed. Basic shapes like `circle` or `rect`
  are passed through untouched.
- `transform` attributes, groups and nested `svg` elements are ignored:
  all paths share the root coordinate space.
- Only unitless and `px` sizes are understood.

```
let svg = r#"<svg viewBox="0 0 48 48"><path d="M10 20L30 40"/></svg>"#;
let out = svgnorm::normalize(svg, svgnorm::TargetFrame::new(24.0)).unwrap();
assert_eq!(
    out,
    r#"<svg width="24" height="24" viewBox="0 0 24 24"><path d="M5 10L15 20"/></svg>"#
);
```
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(missing_copy_implementations)]

pub mod batch;
mod frame;
mod geom;
mod path;
mod rewrite;
mod writer;

use std::path::PathBuf;

pub use crate::batch::{Options, Report};
pub use crate::frame::{extract_frame, SourceFrame, TargetFrame};
pub use crate::geom::ScaleTransform;
pub use crate::path::transform_path;
pub use crate::rewrite::{rewrite_document, PathData};

pub use roxmltree;
pub use svgtypes;

/// List of all errors.
#[derive(Debug)]
pub enum Error {
    /// The target directory doesn't exist.
    MissingDirectory(PathBuf),

    /// A document has neither a usable `viewBox`
    /// nor both `width` and `height` on its root element.
    ///
    /// Also occurs when the detected width or height is zero.
    DimensionsNotDetected,

    /// A document is not a well-formed XML.
    MalformedDocument(roxmltree::Error),

    /// A `d` attribute contains invalid path data.
    MalformedPathData(svgtypes::Error),

    /// Failed to process a specific file.
    Processing(PathBuf, Box<Error>),

    /// An I/O error.
    Io(std::io::Error),
}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Self {
        Error::MalformedDocument(e)
    }
}

impl From<svgtypes::Error> for Error {
    fn from(e: svgtypes::Error) -> Self {
        Error::MalformedPathData(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::MissingDirectory(ref path) => {
                write!(f, "input folder does not exist: {}", path.display())
            }
            Error::DimensionsNotDetected => {
                write!(f, "couldn't detect original size")
            }
            Error::MalformedDocument(ref e) => {
                write!(f, "SVG data parsing failed cause {}", e)
            }
            Error::MalformedPathData(ref e) => {
                write!(f, "path data parsing failed cause {}", e)
            }
            Error::Processing(ref path, ref e) => {
                write!(f, "failed to process '{}' cause {}", path.display(), e)
            }
            Error::Io(ref e) => {
                write!(f, "{}", e)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::MalformedDocument(ref e) => Some(e),
            Error::MalformedPathData(ref e) => Some(e),
            Error::Processing(_, ref e) => Some(e.as_ref()),
            Error::Io(ref e) => Some(e),
            _ => None,
        }
    }
}

/// Normalizes a single SVG document to a square `target` canvas.
///
/// Returns the rewritten document text.
///
/// # Errors
///
/// - `DimensionsNotDetected` when the root element doesn't describe its size.
///   Callers are expected to leave such documents untouched.
/// - `MalformedDocument` when the text is not a well-formed XML.
/// - `MalformedPathData` when any `path` has unparsable `d` data.
pub fn normalize(text: &str, target: TargetFrame) -> Result<String, Error> {
    let doc = parse(text)?;
    let root = doc.root_element();

    let source = SourceFrame::from_svg_node(root).ok_or(Error::DimensionsNotDetected)?;
    let ts = ScaleTransform::new(&source, target);

    let mut paths = Vec::new();
    for (range, data) in rewrite::collect_path_data(text, &doc) {
        paths.push(PathData {
            range,
            data: transform_path(data, &ts)?,
        });
    }

    Ok(rewrite::rewrite_root(text, root, &paths, target))
}

pub(crate) fn parse(text: &str) -> Result<roxmltree::Document<'_>, Error> {
    let opt = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };

    let doc = roxmltree::Document::parse_with_options(text, opt)?;
    Ok(doc)
}

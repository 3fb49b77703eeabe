// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::ops::Range;

use crate::{writer, Error, TargetFrame};

/// A new `d` attribute value of a single `path` element.
#[derive(Clone, PartialEq, Debug)]
pub struct PathData {
    /// Byte range of the original value inside the document, without quotes.
    pub range: Range<usize>,
    /// New path data.
    pub data: String,
}

/// Root size attributes that are replaced by the canonical ones.
const SIZE_ATTRIBUTES: &[&str] = &["width", "height", "viewBox"];

/// Replaces path data and canonicalizes the root element size.
///
/// `paths` are usually produced by [`transform_path`](crate::transform_path)
/// for each `d` attribute of the document. Only the bytes covered by `paths`
/// and the size attributes of the root element are changed.
///
/// # Errors
///
/// - `MalformedDocument` when the text is not a well-formed XML.
///
/// # Panics
///
/// - When a `paths` range is outside of `text` or not on a `char` boundary.
/// - When `paths` ranges overlap each other or the root element size attributes.
pub fn rewrite_document(text: &str, paths: &[PathData], target: TargetFrame) -> Result<String, Error> {
    let doc = crate::parse(text)?;
    Ok(rewrite_root(text, doc.root_element(), paths, target))
}

/// Collects the `d` values of all `path` elements.
///
/// Returns the value byte ranges alongside the values themselves.
pub(crate) fn collect_path_data<'a>(
    text: &str,
    doc: &'a roxmltree::Document<'_>,
) -> Vec<(Range<usize>, &'a str)> {
    let mut list = Vec::new();
    for node in doc.descendants() {
        if !(node.is_element() && node.tag_name().name() == "path") {
            continue;
        }

        let attr = node
            .attributes()
            .find(|a| a.namespace().is_none() && a.name() == "d");

        if let Some(attr) = attr {
            if let Some(range) = value_range(text, attr.range()) {
                list.push((range, attr.value()));
            }
        }
    }

    list
}

pub(crate) fn rewrite_root(
    text: &str,
    root: roxmltree::Node,
    paths: &[PathData],
    target: TargetFrame,
) -> String {
    let mut edits: Vec<(Range<usize>, &str)> = paths
        .iter()
        .map(|p| (p.range.clone(), p.data.as_str()))
        .collect();

    let tag = StartTag::new(text, root.range().start);

    for attr in root.attributes() {
        if attr.namespace().is_some() || !SIZE_ATTRIBUTES.contains(&attr.name()) {
            continue;
        }

        // Remove the attribute together with the preceding spaces.
        let range = attr.range();
        let start = text[tag.name_end..range.start].trim_end().len() + tag.name_end;
        edits.push((start..range.end, ""));
    }

    let size = writer::number_to_string(target.size);
    let size_attrs = format!(
        " width=\"{0}\" height=\"{0}\" viewBox=\"0 0 {0} {0}\"",
        size
    );
    edits.push((tag.attrs_end..tag.attrs_end, size_attrs.as_str()));

    apply_edits(text, edits)
}

// Panics on overlapping edits.
fn apply_edits(text: &str, mut edits: Vec<(Range<usize>, &str)>) -> String {
    edits.sort_by_key(|(range, _)| (range.start, range.end));

    let mut buf = String::with_capacity(text.len());
    let mut pos = 0;
    for (range, new_text) in edits {
        assert!(
            range.start >= pos && range.start <= range.end,
            "overlapping edit at {}..{}",
            range.start,
            range.end
        );
        buf.push_str(&text[pos..range.start]);
        buf.push_str(new_text);
        pos = range.end;
    }
    buf.push_str(&text[pos..]);

    buf
}

// `attr_range` covers the whole `name="value"` text.
fn value_range(text: &str, attr_range: Range<usize>) -> Option<Range<usize>> {
    let raw = &text[attr_range.clone()];
    let quote = raw.find(|c| c == '"' || c == '\'')?;
    Some(attr_range.start + quote + 1..attr_range.end - 1)
}

/// Positions inside an element start tag.
#[derive(Clone, Copy, Debug)]
struct StartTag {
    /// The end of the element name.
    name_end: usize,
    /// The end of the last attribute, or the name end when there are none.
    attrs_end: usize,
}

impl StartTag {
    /// `start` must point to the `<` of a start tag.
    fn new(text: &str, start: usize) -> Self {
        let bytes = text.as_bytes();

        let mut pos = start + 1;
        while pos < bytes.len() && !is_tag_name_end(bytes[pos]) {
            pos += 1;
        }
        let name_end = pos;

        let mut quote = None;
        while pos < bytes.len() {
            let c = bytes[pos];
            match quote {
                Some(q) if c == q => quote = None,
                Some(_) => {}
                None if c == b'"' || c == b'\'' => quote = Some(c),
                None if c == b'>' => break,
                None => {}
            }

            pos += 1;
        }

        let mut attrs_end = pos;
        if attrs_end > name_end && bytes[attrs_end - 1] == b'/' {
            attrs_end -= 1;
        }
        attrs_end = text[name_end..attrs_end].trim_end().len() + name_end;

        StartTag {
            name_end,
            attrs_end,
        }
    }
}

fn is_tag_name_end(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r' | b'/' | b'>')
}

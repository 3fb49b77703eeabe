// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Normalization of a whole directory.

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::{Error, TargetFrame};

/// Batch processing options.
#[derive(Clone, PartialEq, Debug)]
pub struct Options {
    /// A directory with SVG files.
    ///
    /// Only files directly inside it are processed.
    ///
    /// Default: `./icons-src`
    pub dir: PathBuf,

    /// Target canvas size.
    ///
    /// Default: 24
    pub size: f64,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            dir: PathBuf::from("./icons-src"),
            size: 24.0,
        }
    }
}

/// A batch processing summary.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct Report {
    /// Files that were rewritten.
    pub normalized: Vec<PathBuf>,

    /// Files that were left untouched.
    pub skipped: Vec<PathBuf>,
}

/// Normalizes all SVG files inside `opt.dir`.
///
/// Files are processed one by one, in file name order.
/// Files without a detectable size or with a malformed XML are skipped
/// with a warning.
///
/// # Errors
///
/// - `MissingDirectory` when `opt.dir` doesn't exist. No files are touched.
/// - `Processing` when a file contains malformed path data or cannot be
///   read or written. Files processed before it stay rewritten.
///   A file with malformed path data is not changed.
/// - `Io` when the directory cannot be listed.
pub fn run(opt: &Options) -> Result<Report, Error> {
    if !opt.dir.exists() {
        return Err(Error::MissingDirectory(opt.dir.clone()));
    }

    let target = TargetFrame::new(opt.size);
    let size = crate::writer::number_to_string(opt.size);

    info!(
        "Normalizing SVGs in \"{}\" to {}×{}...",
        opt.dir.display(),
        size,
        size
    );

    let mut report = Report::default();
    for path in collect_files(&opt.dir)? {
        let name = file_name(&path);
        match process_file(&path, target) {
            Ok(()) => {
                info!("Scaled to {}×{}: {}", size, size, name);
                report.normalized.push(path);
            }
            Err(Error::DimensionsNotDetected) => {
                warn!("Skipping {}: couldn't detect original size", name);
                report.skipped.push(path);
            }
            Err(Error::MalformedDocument(e)) => {
                warn!("Skipping {}: not a well-formed XML, {}", name, e);
                report.skipped.push(path);
            }
            Err(e) => {
                return Err(Error::Processing(path, Box::new(e)));
            }
        }
    }

    info!("Done normalizing SVGs.");

    Ok(report)
}

fn process_file(path: &Path, target: TargetFrame) -> Result<(), Error> {
    let text = std::fs::read_to_string(path)?;
    let new_text = crate::normalize(&text, target)?;
    std::fs::write(path, new_text)?;
    Ok(())
}

/// Returns `.svg` files directly inside `dir`, sorted by name.
fn collect_files(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_file() && is_svg(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

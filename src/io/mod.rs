//! File encodings for [`SphereTree`].
//!
//! Two textual encodings, selected by destination extension:
//!
//! - **Legacy (SPH)**, any extension other than `.yml`: a `levels degree`
//!   header followed by one line per node in flat breadth-first order. The
//!   only readable format.
//! - **Structured (YAML)**, `.yml`: `levels`/`degree`/`data` mapping with one
//!   entry per level. Write-only; the historical toolchain never grew a
//!   reader for it, and downstream consumers parse it with stock YAML
//!   libraries.
//!
//! Lengths (centers, radii, auxiliary centers and radii) are multiplied by a
//! caller-supplied scale factor on write and again on read; occupancy and the
//! error-reduction scalar are never scaled.

pub mod legacy;
pub mod structured;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::IoResult;
use crate::tree::SphereTree;

impl SphereTree {
  /// Write the tree to `path`, choosing the structured format for a `.yml`
  /// extension and the legacy format otherwise.
  ///
  /// Every length is multiplied by `scale`. On failure the destination may
  /// hold a partial file.
  pub fn save(&self, path: &Path, scale: f32) -> IoResult<()> {
    tracing::info!(path = %path.display(), "saving sphere-tree");

    let mut writer = BufWriter::new(File::create(path)?);
    if path.extension().and_then(|e| e.to_str()) == Some("yml") {
      structured::write(self, &mut writer, scale)?;
    } else {
      legacy::write(self, &mut writer, scale)?;
    }
    writer.flush()?;
    Ok(())
  }

  /// Replace this tree with the legacy-format content of `path`, multiplying
  /// every length by `scale`.
  ///
  /// A bad header clears the tree; a malformed node line truncates it to the
  /// completely-read levels. Only the legacy format is readable.
  pub fn load(&mut self, path: &Path, scale: f32) -> IoResult<()> {
    tracing::debug!(path = %path.display(), "loading sphere-tree");

    let reader = BufReader::new(File::open(path)?);
    legacy::read_into(self, reader, scale)
  }
}

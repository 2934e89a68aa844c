//! Error types for the file codecs and the sphere-set exporter.

use thiserror::Error;

/// Result type alias for tree persistence operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors raised while saving or loading a sphere tree.
///
/// A load failure leaves the tree in a defined state: a bad header clears it,
/// a malformed or missing node line truncates it to the levels that were read
/// completely. There are no retries and no atomic-write semantics; a failed
/// save may leave a partial file behind.
#[derive(Debug, Error)]
pub enum IoError {
  /// Underlying file open/read/write failure.
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// The first line did not hold `levels degree`, or declared fewer than one
  /// level.
  #[error("invalid header: expected `levels degree` with levels >= 1")]
  Header,

  /// A node line matched none of the accepted shapes (4, 5, 9 or 10 numbers).
  #[error("malformed sphere on line {line}")]
  Node {
    /// 1-based line number in the source file.
    line: usize,
  },

  /// The file ended before all declared nodes were read.
  #[error("file ended early: expected another sphere after line {line}")]
  UnexpectedEof {
    /// 1-based number of the last line read.
    line: usize,
  },
}

/// Errors raised by the two-level sphere-set exporter.
#[derive(Debug, Error)]
pub enum ExportError {
  /// Underlying file open/write failure.
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// Every input sphere was invalid (`radius <= 0`), so no enclosing sphere
  /// can be computed.
  #[error("no valid spheres to export")]
  NoValidSpheres,
}

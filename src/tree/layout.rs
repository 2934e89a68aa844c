//! Pure index arithmetic for the complete D-ary breadth-first layout.
//!
//! A tree of degree D with L levels stores `sum(D^l for l in 0..L)` nodes.
//! Level `l` starts at `sum(D^k for k in 0..l)` and holds `D^l` nodes; node
//! `i` has its children at `i*D+1 ..= i*D+D`.

use std::ops::RangeInclusive;

/// Total node count for a complete tree of `degree` with `levels` levels:
/// `sum(degree^l for l in 0..levels)`.
///
/// Callers guarantee `degree >= 1` and `levels >= 1`.
pub fn total_nodes(degree: usize, levels: usize) -> usize {
  let mut total = 0;
  let mut row = 1;
  for _ in 0..levels {
    total += row;
    row *= degree;
  }
  total
}

/// Index of the first node of `level`: `sum(degree^k for k in 0..level)`.
pub fn row_start(degree: usize, level: usize) -> usize {
  total_nodes(degree, level)
}

/// Number of nodes on `level`: `degree^level`.
pub fn row_count(degree: usize, level: usize) -> usize {
  let mut count = 1;
  for _ in 0..level {
    count *= degree;
  }
  count
}

/// `(start_index, count)` for `level`.
pub fn get_row(degree: usize, level: usize) -> (usize, usize) {
  (row_start(degree, level), row_count(degree, level))
}

/// Indices of the children of `index`: `index*degree+1 ..= index*degree+degree`.
pub fn children(degree: usize, index: usize) -> RangeInclusive<usize> {
  let first = index * degree + 1;
  first..=first + degree - 1
}

/// Level containing `index`, found by walking level boundaries from the root.
///
/// Mirrors the historical lookup: levels `0..=levels` are probed in order, so
/// an index beyond the last probed boundary reports `levels + 1`. Callers pass
/// in-range indices in normal operation.
pub fn level_of(degree: usize, levels: usize, index: usize) -> usize {
  let mut start = 0;
  let mut count = 1;
  for level in 0..=levels {
    if index >= start && index < start + count {
      return level;
    }
    start += count;
    count *= degree;
  }
  levels + 1
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

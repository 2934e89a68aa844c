//! SphereTree - the array-backed complete fixed-degree tree of spheres.

use crate::sphere::Sphere;
use crate::tree::layout;

/// Complete fixed-degree tree of bounding spheres in a flat node sequence.
///
/// The sequence is exclusively owned by the tree; construction algorithms
/// mutate nodes in place through [`node_mut`](SphereTree::node_mut) using the
/// index invariant of [`layout`]. Degree and level counts are caller
/// guarantees: no validation of `degree < 1` or `levels < 1` is performed.
#[derive(Clone, Debug, Default)]
pub struct SphereTree {
  degree: usize,
  levels: usize,
  nodes: Vec<Sphere>,
}

impl SphereTree {
  /// Create a tree of `degree` with `levels` levels, every node set to the
  /// sentinel empty sphere.
  pub fn new(degree: usize, levels: usize) -> Self {
    let mut tree = SphereTree::default();
    tree.setup_tree(degree, levels);
    tree
  }

  /// Size the node sequence for `degree` and `levels` and initialize every
  /// node to [`Sphere::EMPTY`], descending recursively from the root.
  pub fn setup_tree(&mut self, degree: usize, levels: usize) {
    self.degree = degree;
    self.levels = levels;
    self.nodes = vec![Sphere::EMPTY; layout::total_nodes(degree, levels)];
    self.init_node(0);
  }

  /// Deepen the tree to `new_levels`, keeping existing node content intact
  /// and writing the sentinel into only the appended tail.
  ///
  /// Caller contract: `new_levels > self.levels()`. Shrinking is unspecified.
  pub fn grow_tree(&mut self, new_levels: usize) {
    let total = layout::total_nodes(self.degree, new_levels);
    self.nodes.resize(total, Sphere::EMPTY);
    self.levels = new_levels;
  }

  /// Reset the node at `index` to the sentinel sphere and recurse into its
  /// subtree, stopping at the leaf level.
  ///
  /// The working depth is re-derived from `index` by walking level boundaries
  /// and taking the matched level plus one. The plus-one is historical: it
  /// turns the depth into a 1-based count, and the `depth < levels` recursion
  /// guard then stops exactly at the leaves. Preserved as-is so that which
  /// nodes receive children matches the original layouts bit for bit.
  pub fn init_node(&mut self, index: usize) {
    let depth = layout::level_of(self.degree, self.levels, index) + 1;
    self.init_node_at(index, depth);
  }

  fn init_node_at(&mut self, index: usize, depth: usize) {
    self.nodes[index] = Sphere::EMPTY;
    if depth < self.levels {
      for child in layout::children(self.degree, index) {
        self.init_node_at(child, depth + 1);
      }
    }
  }

  /// Valid spheres (`radius > 0`) on `level`, in ascending index order.
  /// At most `degree^level` entries.
  pub fn get_level(&self, level: usize) -> Vec<Sphere> {
    let (start, count) = self.get_row(level);
    self.nodes[start..start + count]
      .iter()
      .filter(|s| s.is_valid())
      .copied()
      .collect()
  }

  /// `(start_index, count)` of `level` in the flat node sequence.
  pub fn get_row(&self, level: usize) -> (usize, usize) {
    layout::get_row(self.degree, level)
  }

  /// Branching factor of the tree.
  #[inline]
  pub fn degree(&self) -> usize {
    self.degree
  }

  /// Number of levels, root included.
  #[inline]
  pub fn levels(&self) -> usize {
    self.levels
  }

  /// Total node count, sentinel slots included.
  #[inline]
  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  /// Whether the tree holds no nodes at all (only before setup or after a
  /// failed load header).
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  /// The whole node sequence in breadth-first order.
  #[inline]
  pub fn nodes(&self) -> &[Sphere] {
    &self.nodes
  }

  /// Node at `index`.
  #[inline]
  pub fn node(&self, index: usize) -> &Sphere {
    &self.nodes[index]
  }

  /// Mutable node at `index`; the write path for construction algorithms.
  #[inline]
  pub fn node_mut(&mut self, index: usize) -> &mut Sphere {
    &mut self.nodes[index]
  }

  /// Drop all nodes and level/degree information. Used when a load fails
  /// before any level could be read.
  pub(crate) fn clear(&mut self) {
    self.degree = 0;
    self.levels = 0;
    self.nodes.clear();
  }

  /// Replace sizing wholesale; the loader's entry point, which sizes level
  /// by level rather than through [`layout::total_nodes`].
  pub(crate) fn reset_for_load(&mut self, degree: usize, levels: usize) {
    self.degree = degree;
    self.levels = levels;
    self.nodes.clear();
  }

  /// Append `count` sentinel nodes, returning the index of the first.
  pub(crate) fn append_row(&mut self, count: usize) -> usize {
    let base = self.nodes.len();
    self.nodes.resize(base + count, Sphere::EMPTY);
    base
  }

  /// Truncate to `len` nodes and declare `levels` levels; leaves the tree
  /// internally consistent after a partial load.
  pub(crate) fn truncate(&mut self, len: usize, levels: usize) {
    self.nodes.truncate(len);
    self.levels = levels;
  }
}

#[cfg(test)]
#[path = "container_test.rs"]
mod container_test;

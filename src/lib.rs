//! sphere_tree - array-backed bounding-sphere hierarchy
//!
//! This crate provides the core container for a multi-resolution
//! bounding-volume hierarchy over a 3D surface model: a complete fixed-degree
//! tree of bounding spheres stored in a single flat node sequence. No explicit
//! tree nodes are maintained - parent/child relationships are computed
//! on-demand via index math.
//!
//! # Layout Convention
//!
//! Level 0 is the root; level `levels - 1` holds the leaves. A tree of degree
//! D and L levels stores `sum(D^l for l in 0..L)` nodes in breadth-first
//! order, and node `i` has its D children at indices `i*D+1 ..= i*D+D`.
//!
//! # Module Structure
//!
//! - [`sphere`]: `Sphere` - bounding-sphere value type with optional
//!   auxiliary inner sphere
//! - [`tree`]: `SphereTree` - the container, plus the pure index arithmetic
//!   in [`tree::layout`]
//! - [`io`]: SPH (legacy) and YAML-style (structured) file encodings
//! - [`export`]: two-level sphere-set exporter for flat sphere collections
//!
//! # Example
//!
//! ```
//! use sphere_tree::SphereTree;
//!
//! // Complete binary tree, three levels: 1 + 2 + 4 = 7 nodes.
//! let tree = SphereTree::new(2, 3);
//! assert_eq!(tree.len(), 7);
//!
//! // Construction algorithms fill nodes in place via the index invariant.
//! let (start, count) = tree.get_row(2);
//! assert_eq!((start, count), (3, 4));
//! ```

pub mod error;
pub mod export;
pub mod io;
pub mod sphere;
pub mod tree;

// Re-export commonly used items
pub use error::{ExportError, IoError, IoResult};
pub use export::{save_spheres, RadiusRule};
pub use sphere::{AuxSphere, Sphere};
pub use tree::SphereTree;

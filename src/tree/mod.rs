//! Sphere tree container and its index arithmetic.
//!
//! The tree is implicit: a flat `Vec<Sphere>` in breadth-first order, with
//! parent/child relationships derived from index math in [`layout`]. Nothing
//! stores pointers, so there are no cycles and no per-node allocation.
//!
//! - [`layout`]: pure functions over `(degree, levels, index)`
//! - [`container`]: `SphereTree` - sizing, growth, initialization, level
//!   extraction

pub mod container;
pub mod layout;

// Re-exports
pub use container::SphereTree;

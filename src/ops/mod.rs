//! Operator families, each adding an `impl Sequence` block.

pub(crate) mod aggregate;
pub(crate) mod distinct;
pub(crate) mod grouping;
pub(crate) mod joins;
pub(crate) mod ordering;
pub(crate) mod predicates;
pub(crate) mod transform;

pub use ordering::SortOrder;

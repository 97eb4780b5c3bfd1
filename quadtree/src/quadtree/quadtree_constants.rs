//! Constants for the region quadtree.

/// Number of items a leaf holds before it splits
pub const DEFAULT_CAPACITY: usize = 8;

/// Deepest level a node may be created at. Leaves at this depth keep
/// accepting items past their capacity instead of splitting.
pub const DEFAULT_MAX_DEPTH: u32 = 48;

/// Arena slot of the root node
pub(crate) const ROOT: usize = 0;

use std::collections::HashSet;

/// Identifies a node of the rendered tree: a batch, or a transaction within a
/// batch. Indices are positions within a single `Forest`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct TreeNodeKey {
    pub batch: usize,
    pub transaction: Option<usize>,
}

/// Expand/collapse state of a rendered forest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpansionState {
    pub(crate) expanded: HashSet<TreeNodeKey>,
}

impl TreeNodeKey {
    pub fn batch(batch: usize) -> Self {
        Self {
            batch,
            transaction: None,
        }
    }

    pub fn transaction(batch: usize, transaction: usize) -> Self {
        Self {
            batch,
            transaction: Some(transaction),
        }
    }
}

use crate::entities::{ExpansionState, Forest, TreeNodeKey};

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, key: TreeNodeKey) -> bool {
        self.expanded.contains(&key)
    }

    pub fn expand(&mut self, key: TreeNodeKey) {
        self.expanded.insert(key);
    }

    pub fn collapse(&mut self, key: TreeNodeKey) {
        self.expanded.remove(&key);
    }

    /// Flips the node's state and returns whether it is now expanded.
    pub fn toggle(&mut self, key: TreeNodeKey) -> bool {
        if self.expanded.remove(&key) {
            false
        } else {
            self.expanded.insert(key);
            true
        }
    }

    /// Expands every batch and transaction node of the forest.
    pub fn expand_all(&mut self, forest: &Forest) {
        for (b, batch) in forest.batches.iter().enumerate() {
            self.expanded.insert(TreeNodeKey::batch(b));
            self.expanded.extend(
                (0..batch.transactions.len()).map(|t| TreeNodeKey::transaction(b, t)),
            );
        }
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }
}

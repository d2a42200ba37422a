use crate::entities::{BatchNode, Forest, TddfRecord, TransactionNode};

impl TransactionNode {
    pub fn record_count(&self) -> usize {
        1 + self.extensions.len()
    }

    pub fn records(&self) -> impl Iterator<Item = &TddfRecord> {
        std::iter::once(&self.detail).chain(self.extensions.iter())
    }
}

impl BatchNode {
    pub fn is_implicit(&self) -> bool {
        self.header.is_none()
    }

    pub fn record_count(&self) -> usize {
        self.header.iter().count()
            + self.orphan_extensions.len()
            + self
                .transactions
                .iter()
                .map(TransactionNode::record_count)
                .sum::<usize>()
            + self.trailer.iter().count()
    }

    /// Records of the batch in tree order: header, orphan extensions, each
    /// transaction with its extensions, trailer.
    pub fn records(&self) -> impl Iterator<Item = &TddfRecord> {
        self.header
            .iter()
            .chain(self.orphan_extensions.iter())
            .chain(self.transactions.iter().flat_map(TransactionNode::records))
            .chain(self.trailer.iter())
    }
}

impl Forest {
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    pub fn batches(&self) -> &[BatchNode] {
        &self.batches
    }

    pub fn transaction_count(&self) -> usize {
        self.batches.iter().map(|b| b.transactions.len()).sum()
    }

    /// Number of records reachable from the batches. Unattached records are
    /// not included.
    pub fn record_count(&self) -> usize {
        self.batches.iter().map(BatchNode::record_count).sum()
    }

    pub fn records(&self) -> impl Iterator<Item = &TddfRecord> {
        self.batches.iter().flat_map(BatchNode::records)
    }
}

use crate::entities::{
    BatchNode, Forest, HierarchyConfig, OrphanPolicy, RecordRole, TddfRecord, TransactionNode,
};

/// Rebuilds the batch → transaction → extension tree of one fetched window.
///
/// The pass is a single fold over the records in arrival order; nothing is
/// retained between calls, so building the same window twice yields equal
/// forests.
pub struct HierarchyBuilder {
    config: HierarchyConfig,
}

/// Fold accumulator.
///
/// `open_batch == None` is the NoBatch state. With a batch open,
/// `open_transaction` distinguishes InBatch from InTransaction. An open
/// transaction is only ever present alongside an open batch.
struct BuilderState {
    policy: OrphanPolicy,
    forest: Forest,
    open_batch: Option<BatchNode>,
    open_transaction: Option<TransactionNode>,
}

impl BuilderState {
    fn new(policy: OrphanPolicy) -> Self {
        Self {
            policy,
            forest: Forest::default(),
            open_batch: None,
            open_transaction: None,
        }
    }

    /// Apply one record to the current state.
    fn step(mut self, record: TddfRecord) -> Self {
        match record.role() {
            RecordRole::BatchHeader => {
                self.close_batch();
                tracing::trace!(line = record.line_number, "opening batch");
                self.open_batch = Some(BatchNode::with_header(record));
            }
            RecordRole::DetailTransaction => {
                self.close_transaction();
                if self.open_batch.is_none() {
                    tracing::trace!(line = record.line_number, "opening implicit batch");
                    self.open_batch = Some(BatchNode::implicit());
                }
                self.open_transaction = Some(TransactionNode::new(record));
            }
            RecordRole::Trailer => {
                // Leaves the open transaction (if any) open.
                if let Some(batch) = self.open_batch.as_mut() {
                    batch.trailer = Some(record);
                } else {
                    self.unattached(record);
                }
            }
            RecordRole::Extension => {
                if let Some(transaction) = self.open_transaction.as_mut() {
                    transaction.extensions.push(record);
                } else if let Some(batch) = self.open_batch.as_mut() {
                    batch.orphan_extensions.push(record);
                } else {
                    self.unattached(record);
                }
            }
        }
        self
    }

    fn close_transaction(&mut self) {
        if let Some(transaction) = self.open_transaction.take() {
            debug_assert!(self.open_batch.is_some());
            if let Some(batch) = self.open_batch.as_mut() {
                batch.transactions.push(transaction);
            }
        }
    }

    fn close_batch(&mut self) {
        self.close_transaction();
        if let Some(batch) = self.open_batch.take() {
            self.forest.batches.push(batch);
        }
    }

    fn unattached(&mut self, record: TddfRecord) {
        tracing::debug!(
            line = record.line_number,
            type_code = %record.type_code,
            policy = ?self.policy,
            "record encountered with no open batch"
        );
        self.forest.unattached.count += 1;
        match self.policy {
            OrphanPolicy::Drop => {}
            OrphanPolicy::Collect => self.forest.unattached.records.push(record),
        }
    }

    fn finish(mut self) -> Forest {
        self.close_batch();
        self.forest
    }
}

impl HierarchyBuilder {
    pub fn new(config: HierarchyConfig) -> Self {
        Self { config }
    }

    pub fn build<I>(&self, records: I) -> Forest
    where
        I: IntoIterator<Item = TddfRecord>,
    {
        let forest = records
            .into_iter()
            .fold(BuilderState::new(self.config.orphan_policy), BuilderState::step)
            .finish();
        tracing::debug!(
            batches = forest.batches.len(),
            unattached = forest.unattached.count,
            "built record hierarchy"
        );
        forest
    }
}

impl Default for HierarchyBuilder {
    fn default() -> Self {
        Self::new(HierarchyConfig::default())
    }
}

/// Builds a forest from a borrowed window using the default configuration.
pub fn build_forest(records: &[TddfRecord]) -> Forest {
    HierarchyBuilder::default().build(records.iter().cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rec(code: &str, line: u64) -> TddfRecord {
        TddfRecord::new(code, line)
    }

    fn tx(detail: TddfRecord, extensions: Vec<TddfRecord>) -> TransactionNode {
        TransactionNode { detail, extensions }
    }

    #[test]
    fn empty_input_builds_empty_forest() {
        assert_eq!(build_forest(&[]), Forest::default());
    }

    #[test]
    fn header_details_and_trailer_form_one_batch() {
        let records = vec![
            rec("BH", 1),
            rec("DT", 2),
            rec("G2", 3),
            rec("DT", 4),
            rec("TR", 5),
        ];

        let forest = build_forest(&records);

        assert_eq!(
            forest.batches,
            vec![BatchNode {
                header: Some(rec("BH", 1)),
                transactions: vec![
                    tx(rec("DT", 2), vec![rec("G2", 3)]),
                    tx(rec("DT", 4), vec![]),
                ],
                trailer: Some(rec("TR", 5)),
                orphan_extensions: vec![],
            }]
        );
        assert_eq!(forest.unattached.count, 0);
    }

    #[test]
    fn detail_without_header_opens_implicit_batch() {
        let forest = build_forest(&[rec("DT", 1)]);

        assert_eq!(
            forest.batches,
            vec![BatchNode {
                header: None,
                transactions: vec![tx(rec("DT", 1), vec![])],
                trailer: None,
                orphan_extensions: vec![],
            }]
        );
    }

    #[test]
    fn consecutive_headers_yield_two_batches() {
        let forest = build_forest(&[rec("01", 1), rec("BH", 2), rec("47", 3)]);

        assert_eq!(forest.batches.len(), 2);
        assert_eq!(forest.batches[0].header, Some(rec("01", 1)));
        assert!(forest.batches[0].transactions.is_empty());
        assert_eq!(forest.batches[1].header, Some(rec("BH", 2)));
        assert_eq!(forest.batches[1].transactions, vec![tx(rec("47", 3), vec![])]);
    }

    #[test]
    fn extensions_attach_to_preceding_detail_only() {
        let forest = build_forest(&[
            rec("BH", 1),
            rec("DT", 2),
            rec("A1", 3),
            rec("G2", 4),
            rec("DT", 5),
            rec("E1", 6),
        ]);

        assert_eq!(
            forest.batches[0].transactions,
            vec![
                tx(rec("DT", 2), vec![rec("A1", 3), rec("G2", 4)]),
                tx(rec("DT", 5), vec![rec("E1", 6)]),
            ]
        );
    }

    #[test]
    fn extension_before_first_detail_is_batch_orphan() {
        let forest = build_forest(&[rec("BH", 1), rec("P1", 2), rec("DT", 3), rec("P1", 4)]);

        let batch = &forest.batches[0];
        assert_eq!(batch.orphan_extensions, vec![rec("P1", 2)]);
        assert_eq!(batch.transactions, vec![tx(rec("DT", 3), vec![rec("P1", 4)])]);
    }

    #[test]
    fn extension_without_batch_is_dropped_by_default() {
        let forest = build_forest(&[rec("G2", 1), rec("TR", 2), rec("BH", 3), rec("DT", 4)]);

        assert_eq!(forest.batches.len(), 1);
        assert_eq!(forest.batches[0].transactions.len(), 1);
        assert_eq!(forest.unattached.count, 2);
        assert!(forest.unattached.records.is_empty());
    }

    #[test]
    fn collect_policy_keeps_unattached_records_in_order() {
        let builder = HierarchyBuilder::new(HierarchyConfig::collecting());
        let records = vec![rec("G2", 1), rec("99", 2), rec("DT", 3)];

        let forest = builder.build(records);

        assert_eq!(forest.unattached.count, 2);
        assert_eq!(forest.unattached.records, vec![rec("G2", 1), rec("99", 2)]);
        assert_eq!(forest.batches.len(), 1);
        assert_eq!(forest.batches[0].transactions.len(), 1);
    }

    #[test]
    fn only_extensions_yield_empty_forest() {
        let forest = build_forest(&[rec("G2", 1), rec("A1", 2), rec("LG", 3)]);

        assert!(forest.batches.is_empty());
        assert_eq!(forest.unattached.count, 3);
    }

    #[test]
    fn trailer_without_header_stays_in_implicit_batch() {
        let forest = build_forest(&[rec("DT", 1), rec("TR", 2)]);

        assert_eq!(forest.batches.len(), 1);
        assert_eq!(forest.batches[0].header, None);
        assert_eq!(forest.batches[0].trailer, Some(rec("TR", 2)));
    }

    #[test]
    fn later_trailer_overwrites_earlier_one() {
        let forest = build_forest(&[rec("BH", 1), rec("TR", 2), rec("98", 3)]);

        assert_eq!(forest.batches[0].trailer, Some(rec("98", 3)));
    }

    #[test]
    fn trailer_keeps_open_transaction_open() {
        let forest = build_forest(&[rec("BH", 1), rec("DT", 2), rec("TR", 3), rec("G2", 4)]);

        let batch = &forest.batches[0];
        assert_eq!(batch.transactions, vec![tx(rec("DT", 2), vec![rec("G2", 4)])]);
        assert!(batch.orphan_extensions.is_empty());
        assert_eq!(batch.trailer, Some(rec("TR", 3)));
    }

    #[test]
    fn header_mid_transaction_closes_batch() {
        let forest = build_forest(&[
            rec("DT", 1),
            rec("G2", 2),
            rec("10", 3),
            rec("G2", 4),
            rec("DT", 5),
        ]);

        assert_eq!(forest.batches.len(), 2);
        assert_eq!(forest.batches[0].header, None);
        assert_eq!(
            forest.batches[0].transactions,
            vec![tx(rec("DT", 1), vec![rec("G2", 2)])]
        );
        assert_eq!(forest.batches[1].orphan_extensions, vec![rec("G2", 4)]);
        assert_eq!(forest.batches[1].transactions, vec![tx(rec("DT", 5), vec![])]);
    }

    #[test]
    fn repeated_builds_are_structurally_equal() {
        let records = vec![
            rec("G2", 1),
            rec("BH", 2),
            rec("DT", 3),
            rec("A1", 4),
            rec("TR", 5),
            rec("DT", 6),
        ];
        let builder = HierarchyBuilder::new(HierarchyConfig::collecting());

        let first = builder.build(records.clone());
        let second = builder.build(records);

        assert_eq!(first, second);
    }

    #[test]
    fn every_record_is_accounted_for() {
        let records = vec![
            rec("TR", 1),
            rec("BH", 2),
            rec("G2", 3),
            rec("DT", 4),
            rec("A1", 5),
            rec("TR", 6),
            rec("02", 7),
            rec("47", 8),
            rec("99", 9),
        ];

        let forest = build_forest(&records);

        assert_eq!(forest.unattached.count, 1);
        assert_eq!(forest.record_count() + forest.unattached.count, records.len());
    }

    #[test]
    fn well_formed_input_is_fully_conserved() {
        let records = vec![
            rec("BH", 1),
            rec("G2", 2),
            rec("DT", 3),
            rec("A1", 4),
            rec("E1", 5),
            rec("DT", 6),
            rec("TR", 7),
            rec("BH", 8),
            rec("TR", 9),
        ];

        let forest = build_forest(&records);

        assert_eq!(forest.unattached.count, 0);
        assert_eq!(forest.record_count(), records.len());
    }
}

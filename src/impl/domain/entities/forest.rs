use super::record::TddfRecord;

/// A detail transaction together with the extension records that followed it.
#[derive(Debug, PartialEq, Clone, serde_derive::Serialize)]
pub struct TransactionNode {
    pub detail: TddfRecord,
    pub extensions: Vec<TddfRecord>,
}

#[derive(Debug, PartialEq, Clone, Default, serde_derive::Serialize)]
pub struct BatchNode {
    /// None for an implicit batch, i.e. one opened by a detail record seen
    /// before any header in the current window.
    pub header: Option<TddfRecord>,
    pub transactions: Vec<TransactionNode>,
    /// Last trailer seen while the batch was open.
    pub trailer: Option<TddfRecord>,
    /// Extensions seen while the batch was open but before its first detail.
    pub orphan_extensions: Vec<TddfRecord>,
}

/// Trailer and extension records encountered with no batch open.
#[derive(Debug, PartialEq, Clone, Default, serde_derive::Serialize)]
pub struct UnattachedRecords {
    /// Always maintained, regardless of policy.
    pub count: usize,
    /// Only populated under `OrphanPolicy::Collect`.
    pub records: Vec<TddfRecord>,
}

/// Result of one hierarchy build over a fetched window.
#[derive(Debug, PartialEq, Clone, Default, serde_derive::Serialize)]
pub struct Forest {
    pub batches: Vec<BatchNode>,
    pub unattached: UnattachedRecords,
}

// --

impl TransactionNode {
    pub fn new(detail: TddfRecord) -> Self {
        Self {
            detail,
            extensions: Vec::new(),
        }
    }
}

impl BatchNode {
    pub fn with_header(header: TddfRecord) -> Self {
        Self {
            header: Some(header),
            ..Default::default()
        }
    }

    pub fn implicit() -> Self {
        Self::default()
    }
}

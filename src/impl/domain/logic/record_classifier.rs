use crate::entities::{RecordRole, TddfRecord, TypeCode};

const BATCH_HEADER_CODES: [&str; 4] = ["01", "BH", "10", "02"];
const DETAIL_TRANSACTION_CODES: [&str; 2] = ["47", "DT"];
const TRAILER_CODES: [&str; 3] = ["98", "TR", "99"];

/// Maps a type code to its role. Total: anything not in the fixed table is an
/// extension, since extension subtypes are open-ended.
pub fn classify(type_code: &str) -> RecordRole {
    if BATCH_HEADER_CODES.contains(&type_code) {
        RecordRole::BatchHeader
    } else if DETAIL_TRANSACTION_CODES.contains(&type_code) {
        RecordRole::DetailTransaction
    } else if TRAILER_CODES.contains(&type_code) {
        RecordRole::Trailer
    } else {
        RecordRole::Extension
    }
}

impl TypeCode {
    pub fn role(&self) -> RecordRole {
        classify(&self.0)
    }
}

impl TddfRecord {
    pub fn role(&self) -> RecordRole {
        self.type_code.role()
    }
}

use crate::entities::{RecordFields, TddfRecord, TypeCode};

use super::line_number_model::LineNumberModel;

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct RecordModel {
    #[serde(alias = "recordType", alias = "record_type", alias = "typeCode")]
    pub type_code: String,
    #[serde(alias = "lineNumber")]
    pub line_number: LineNumberModel,
    #[serde(default)]
    pub fields: RecordFields,
}

/// A fetched page, either as a bare array or wrapped in a `records` envelope
/// (other envelope keys, e.g. pagination metadata, are ignored).
#[derive(Debug, serde_derive::Deserialize)]
#[serde(untagged)]
pub(crate) enum RecordWindowModel {
    Bare(Vec<RecordModel>),
    Envelope { records: Vec<RecordModel> },
}

impl Into<TddfRecord> for RecordModel {
    fn into(self) -> TddfRecord {
        TddfRecord {
            type_code: TypeCode(self.type_code),
            line_number: self.line_number.into(),
            fields: self.fields,
        }
    }
}

impl Into<Vec<TddfRecord>> for RecordWindowModel {
    fn into(self) -> Vec<TddfRecord> {
        match self {
            RecordWindowModel::Bare(records) | RecordWindowModel::Envelope { records } => {
                records.into_iter().map(Into::into).collect()
            }
        }
    }
}

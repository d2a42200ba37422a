/// Semantic role of a record within a TDDF file. Derived from the type code,
/// never stored.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, serde_derive::Serialize)]
pub enum RecordRole {
    BatchHeader,
    DetailTransaction,
    Trailer,
    Extension,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RecordFormat {
    Json,
    Csv,
}

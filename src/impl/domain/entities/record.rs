use serde_json::{Map, Value};

/// Opaque key/value payload already extracted from the fixed-width line.
pub type RecordFields = Map<String, Value>;

#[derive(Debug, PartialEq, Eq, Hash, Clone, PartialOrd, Ord, serde_derive::Serialize)]
pub struct TypeCode(pub(crate) String);

/// One decoded line of a TDDF file, as delivered by the paginated fetch.
#[derive(Debug, PartialEq, Clone, serde_derive::Serialize)]
pub struct TddfRecord {
    pub type_code: TypeCode,
    /// Positive, and strictly increasing within a fetched window. Only used
    /// for display; never for classification.
    pub line_number: u64,
    pub fields: RecordFields,
}

// --

impl TypeCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TypeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TypeCode {
    fn from(s: &str) -> Self {
        TypeCode(s.to_string())
    }
}

impl From<String> for TypeCode {
    fn from(s: String) -> Self {
        TypeCode(s)
    }
}

impl TddfRecord {
    pub fn new(type_code: impl Into<TypeCode>, line_number: u64) -> Self {
        Self {
            type_code: type_code.into(),
            line_number,
            fields: RecordFields::new(),
        }
    }

    pub fn with_fields(
        type_code: impl Into<TypeCode>,
        line_number: u64,
        fields: RecordFields,
    ) -> Self {
        Self {
            type_code: type_code.into(),
            line_number,
            fields,
        }
    }
}

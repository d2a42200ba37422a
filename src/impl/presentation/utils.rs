use num_format::{Locale, ToFormattedString as _};

use crate::entities::RecordFields;

/// Count with thousands separators, pluralizing the noun.
///
/// Uses en locale (i.e. 1,000) regardless of the user's locale.
pub(crate) fn format_count(n: usize, singular: &str, plural: &str) -> String {
    format!(
        "{} {}",
        n.to_formatted_string(&Locale::en),
        if n == 1 { singular } else { plural }
    )
}

/// One-line `key=value` summary of a field bag, in key order. Empty bags
/// produce None.
pub(crate) fn summarize_fields(fields: &RecordFields) -> Option<String> {
    if fields.is_empty() {
        return None;
    }
    Some(
        fields
            .iter()
            .map(|(k, v)| match v {
                serde_json::Value::String(s) => format!("{}={}", k, s),
                other => format!("{}={}", k, other),
            })
            .collect::<Vec<_>>()
            .join(", "),
    )
}

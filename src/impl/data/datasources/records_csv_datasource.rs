use std::str::FromStr as _;

use fractic_server_error::ServerError;
use serde_json::Value;

use crate::{
    data::models::line_number_model::LineNumberModel,
    entities::{RecordFields, TddfRecord, TypeCode},
    errors::{InvalidCsv, InvalidCsvContent, MissingColumn},
};

const TYPE_CODE_COLUMNS: [&str; 4] = ["type_code", "record_type", "typeCode", "recordType"];
const LINE_NUMBER_COLUMNS: [&str; 2] = ["line_number", "lineNumber"];

pub(crate) trait RecordsCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<TddfRecord>, ServerError>;
}

pub(crate) struct RecordsCsvDatasourceImpl;

impl RecordsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

fn column_index(headers: &csv::StringRecord, aliases: &[&str]) -> Option<usize> {
    headers.iter().position(|h| aliases.contains(&h.trim()))
}

impl RecordsCsvDatasource for RecordsCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<TddfRecord>, ServerError> {
        let mut reader = csv::Reader::from_reader(s.as_bytes());
        let headers = reader
            .headers()
            .map_err(|e| InvalidCsv::with_debug(&e))?
            .clone();
        let type_code_idx =
            column_index(&headers, &TYPE_CODE_COLUMNS).ok_or(MissingColumn::new("type_code"))?;
        let line_number_idx = column_index(&headers, &LINE_NUMBER_COLUMNS)
            .ok_or(MissingColumn::new("line_number"))?;

        reader
            .records()
            .enumerate()
            .map(|(i, r)| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_type_code = r.get(type_code_idx).ok_or_else(|| {
                        InvalidCsvContent::new(&format!("row {} has no type code", i + 1))
                    })?;
                    let raw_line_number = r.get(line_number_idx).ok_or_else(|| {
                        InvalidCsvContent::new(&format!("row {} has no line number", i + 1))
                    })?;

                    // Parse.
                    let line_number = LineNumberModel::from_str(raw_line_number)?;
                    let fields: RecordFields = headers
                        .iter()
                        .zip(r.iter())
                        .enumerate()
                        .filter(|(idx, _)| *idx != type_code_idx && *idx != line_number_idx)
                        .map(|(_, (k, v))| (k.to_string(), Value::String(v.to_string())))
                        .collect();

                    // Build.
                    Ok(TddfRecord {
                        type_code: TypeCode(raw_type_code.to_string()),
                        line_number: line_number.into(),
                        fields,
                    })
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn parses_required_columns_and_field_bag() {
        let s = "line_number,type_code,merchant,amount\n\
                 1,BH,ACME,\n\
                 2,DT,ACME,12.50\n";

        let records = RecordsCsvDatasourceImpl::new().from_string(s).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].type_code.as_str(), "DT");
        assert_eq!(records[1].line_number, 2);
        assert_eq!(records[1].fields.get("amount"), Some(&json!("12.50")));
        assert_eq!(records[1].fields.get("merchant"), Some(&json!("ACME")));
        assert!(records[1].fields.get("type_code").is_none());
        assert_eq!(records[0].fields.len(), 2);
    }

    #[test]
    fn accepts_camel_case_headers() {
        let s = "recordType,lineNumber\nG2,9\n";

        let records = RecordsCsvDatasourceImpl::new().from_string(s).unwrap();

        assert_eq!(records[0].type_code.as_str(), "G2");
        assert_eq!(records[0].line_number, 9);
        assert!(records[0].fields.is_empty());
    }

    #[test]
    fn keeps_type_codes_verbatim() {
        let s = "type_code,line_number\n01,1\n047,2\n";

        let records = RecordsCsvDatasourceImpl::new().from_string(s).unwrap();

        assert_eq!(records[0].type_code.as_str(), "01");
        assert_eq!(records[1].type_code.as_str(), "047");
    }

    #[test]
    fn missing_column_is_an_error() {
        let s = "type_code,merchant\nBH,ACME\n";
        assert!(RecordsCsvDatasourceImpl::new().from_string(s).is_err());
    }

    #[test]
    fn invalid_line_number_is_an_error() {
        let s = "type_code,line_number\nBH,first\n";
        assert!(RecordsCsvDatasourceImpl::new().from_string(s).is_err());
    }
}

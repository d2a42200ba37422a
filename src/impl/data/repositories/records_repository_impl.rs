use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::{
        records_csv_datasource::{RecordsCsvDatasource, RecordsCsvDatasourceImpl},
        records_json_datasource::{RecordsJsonDatasource, RecordsJsonDatasourceImpl},
    },
    domain::repositories::records_repository::RecordsRepository,
    entities::{RecordFormat, TddfRecord},
    errors::{ReadError, UnsupportedFormat},
};

pub(crate) struct RecordsRepositoryImpl<DS1, DS2>
where
    DS1: RecordsJsonDatasource,
    DS2: RecordsCsvDatasource,
{
    json_datasource: DS1,
    csv_datasource: DS2,
}

impl RecordFormat {
    pub(crate) fn from_path(path: &std::path::Path) -> Result<Self, ServerError> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Ok(RecordFormat::Json),
            Some("csv") => Ok(RecordFormat::Csv),
            _ => Err(UnsupportedFormat::new(&path.display().to_string())),
        }
    }
}

/// Line numbers are expected to increase strictly within a window. Windows
/// that violate this are still accepted, in delivered order.
fn warn_if_unordered(records: &[TddfRecord]) {
    if let Some(pair) = records
        .windows(2)
        .find(|pair| pair[0].line_number >= pair[1].line_number)
    {
        tracing::warn!(
            previous = pair[0].line_number,
            next = pair[1].line_number,
            "record window line numbers are not strictly increasing"
        );
    }
}

#[async_trait]
impl<DS1, DS2> RecordsRepository for RecordsRepositoryImpl<DS1, DS2>
where
    DS1: RecordsJsonDatasource,
    DS2: RecordsCsvDatasource,
{
    fn from_string(&self, s: &str, format: RecordFormat) -> Result<Vec<TddfRecord>, ServerError> {
        let records = match format {
            RecordFormat::Json => self.json_datasource.from_string(s)?,
            RecordFormat::Csv => self.csv_datasource.from_string(s)?,
        };
        warn_if_unordered(&records);
        Ok(records)
    }

    async fn from_file<P>(&self, path: P) -> Result<Vec<TddfRecord>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let path = path.as_ref();
        let format = RecordFormat::from_path(path)?;
        let s = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        tracing::debug!(path = %path.display(), ?format, "loaded record window");
        self.from_string(&s, format)
    }
}

impl RecordsRepositoryImpl<RecordsJsonDatasourceImpl, RecordsCsvDatasourceImpl> {
    pub(crate) fn new() -> Self {
        RecordsRepositoryImpl {
            json_datasource: RecordsJsonDatasourceImpl::new(),
            csv_datasource: RecordsCsvDatasourceImpl::new(),
        }
    }
}

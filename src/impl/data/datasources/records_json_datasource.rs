use fractic_server_error::ServerError;

use crate::{
    data::models::record_model::RecordWindowModel, entities::TddfRecord, errors::InvalidJson,
};

pub(crate) trait RecordsJsonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<TddfRecord>, ServerError>;
}

pub(crate) struct RecordsJsonDatasourceImpl;

impl RecordsJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl RecordsJsonDatasource for RecordsJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<TddfRecord>, ServerError> {
        let window: RecordWindowModel =
            serde_json::from_str(s).map_err(|e| InvalidJson::with_debug(&e))?;
        Ok(window.into())
    }
}

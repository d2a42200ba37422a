use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{RecordFormat, TddfRecord};

#[async_trait]
pub trait RecordsRepository: Send + Sync {
    fn from_string(&self, s: &str, format: RecordFormat) -> Result<Vec<TddfRecord>, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<TddfRecord>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

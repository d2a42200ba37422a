use async_trait::async_trait;
use fractic_server_error::ServerError;
use futures::{
    stream::{self, StreamExt},
    TryStreamExt,
};

use crate::{
    data::{
        datasources::{
            records_csv_datasource::RecordsCsvDatasourceImpl,
            records_json_datasource::RecordsJsonDatasourceImpl,
        },
        repositories::records_repository_impl::RecordsRepositoryImpl,
    },
    domain::{
        logic::hierarchy_builder::HierarchyBuilder,
        repositories::records_repository::RecordsRepository,
    },
    entities::{Forest, HierarchyConfig, RecordFormat, TddfRecord},
};

#[async_trait]
pub trait BuildHierarchyUsecase: Send + Sync {
    fn from_records(&self, records: Vec<TddfRecord>) -> Forest;

    async fn from_string(&self, s: &str, format: RecordFormat) -> Result<Forest, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Forest, ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    /// Builds each window independently; hierarchy is never carried across
    /// window boundaries.
    async fn from_files<P>(&self, paths: Vec<P>) -> Result<Vec<Forest>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct BuildHierarchyUsecaseImpl<
    R1 = RecordsRepositoryImpl<RecordsJsonDatasourceImpl, RecordsCsvDatasourceImpl>, // Default.
> where
    R1: RecordsRepository,
{
    records_repository: R1,
    builder: HierarchyBuilder,
}

#[async_trait]
impl<R1> BuildHierarchyUsecase for BuildHierarchyUsecaseImpl<R1>
where
    R1: RecordsRepository,
{
    fn from_records(&self, records: Vec<TddfRecord>) -> Forest {
        self.builder.build(records)
    }

    async fn from_string(&self, s: &str, format: RecordFormat) -> Result<Forest, ServerError> {
        let records = self.records_repository.from_string(s, format)?;
        Ok(self.builder.build(records))
    }

    async fn from_file<P>(&self, path: P) -> Result<Forest, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let records = self.records_repository.from_file(path).await?;
        Ok(self.builder.build(records))
    }

    async fn from_files<P>(&self, paths: Vec<P>) -> Result<Vec<Forest>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        stream::iter(paths)
            .then(|path| self.from_file(path))
            .try_collect::<Vec<_>>()
            .await
    }
}

impl BuildHierarchyUsecaseImpl {
    pub(crate) fn new(config: HierarchyConfig) -> Self {
        BuildHierarchyUsecaseImpl {
            records_repository: RecordsRepositoryImpl::new(),
            builder: HierarchyBuilder::new(config),
        }
    }
}

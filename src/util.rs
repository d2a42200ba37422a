use fractic_server_error::ServerError;

use crate::{
    data::datasources::hierarchy_config_datasource::{
        HierarchyConfigDatasource as _, HierarchyConfigDatasourceImpl,
    },
    domain::usecases::build_hierarchy_usecase::{
        BuildHierarchyUsecase as _, BuildHierarchyUsecaseImpl,
    },
    entities::{Forest, HierarchyConfig, RecordFormat, TddfRecord},
    errors::ReadError,
    presentation::tree_printer::TreePrinter,
};

/// Plain-text outline of a forest.
pub type Outline = String;

pub struct TddfHierarchyUtil {
    build_usecase: BuildHierarchyUsecaseImpl,
    printer: TreePrinter,
}

impl TddfHierarchyUtil {
    pub fn new() -> Self {
        Self::with_config(HierarchyConfig::default())
    }

    pub fn with_config(config: HierarchyConfig) -> Self {
        Self {
            build_usecase: BuildHierarchyUsecaseImpl::new(config),
            printer: TreePrinter::new(),
        }
    }

    /// Configuration in RON, e.g. `(orphan_policy: Collect)`.
    pub fn with_config_ron(config_ron: &str) -> Result<Self, ServerError> {
        let config = HierarchyConfigDatasourceImpl::new().from_string(config_ron)?;
        Ok(Self::with_config(config))
    }

    pub async fn with_config_file<T>(config_ron: T) -> Result<Self, ServerError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        let s = tokio::fs::read_to_string(config_ron)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        Self::with_config_ron(&s)
    }

    /// Include each record's field summary in printed outlines.
    pub fn show_fields(mut self) -> Self {
        self.printer = TreePrinter::with_fields();
        self
    }

    pub fn build(&self, records: Vec<TddfRecord>) -> (Forest, Outline) {
        let forest = self.build_usecase.from_records(records);
        let outline = self.printer.print_forest(&forest);
        (forest, outline)
    }

    pub async fn from_string(
        &self,
        records: &str,
        format: RecordFormat,
    ) -> Result<(Forest, Outline), ServerError> {
        let forest = self.build_usecase.from_string(records, format).await?;
        let outline = self.printer.print_forest(&forest);
        Ok((forest, outline))
    }

    pub async fn from_file<T>(&self, records: T) -> Result<(Forest, Outline), ServerError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        let forest = self.build_usecase.from_file(records).await?;
        let outline = self.printer.print_forest(&forest);
        Ok((forest, outline))
    }

    pub async fn from_files<T>(&self, windows: Vec<T>) -> Result<Vec<(Forest, Outline)>, ServerError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        Ok(self
            .build_usecase
            .from_files(windows)
            .await?
            .into_iter()
            .map(|forest| {
                let outline = self.printer.print_forest(&forest);
                (forest, outline)
            })
            .collect())
    }
}

impl Default for TddfHierarchyUtil {
    fn default() -> Self {
        Self::new()
    }
}

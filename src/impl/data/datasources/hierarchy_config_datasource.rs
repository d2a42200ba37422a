use fractic_server_error::ServerError;
use ron::from_str;

use crate::{
    data::models::hierarchy_config_model::HierarchyConfigModel, entities::HierarchyConfig,
    errors::InvalidRon,
};

pub(crate) trait HierarchyConfigDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<HierarchyConfig, ServerError>;
}

pub(crate) struct HierarchyConfigDatasourceImpl;

impl HierarchyConfigDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl HierarchyConfigDatasource for HierarchyConfigDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<HierarchyConfig, ServerError> {
        let model: HierarchyConfigModel =
            from_str(s).map_err(|e| InvalidRon::with_debug("HierarchyConfig", &e))?;
        Ok(model.into())
    }
}

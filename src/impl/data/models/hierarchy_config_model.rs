use crate::entities::{HierarchyConfig, OrphanPolicy};

#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(default)]
pub(crate) struct HierarchyConfigModel {
    pub orphan_policy: OrphanPolicy,
}

impl Into<HierarchyConfig> for HierarchyConfigModel {
    fn into(self) -> HierarchyConfig {
        HierarchyConfig {
            orphan_policy: self.orphan_policy,
        }
    }
}

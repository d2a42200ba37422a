/// What to do with a trailer or extension record that shows up while no batch
/// is open (typically the head of a window cut mid-batch).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, serde_derive::Deserialize)]
pub enum OrphanPolicy {
    /// Discard the record. It is still counted in `Forest::unattached`.
    #[default]
    Drop,
    /// Keep the record, in arrival order, in `Forest::unattached`.
    Collect,
}

#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct HierarchyConfig {
    pub orphan_policy: OrphanPolicy,
}

impl HierarchyConfig {
    pub fn collecting() -> Self {
        Self {
            orphan_policy: OrphanPolicy::Collect,
        }
    }
}

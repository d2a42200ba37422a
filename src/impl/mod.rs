// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod hierarchy_config_datasource;
        pub(crate) mod records_csv_datasource;
        pub(crate) mod records_json_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod hierarchy_config_model;
        pub(crate) mod line_number_model;
        pub(crate) mod record_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod badge_color;
        pub(crate) mod forest;
        pub(crate) mod hierarchy_config;
        pub(crate) mod record;
        pub(crate) mod record_format;
        pub(crate) mod record_role;
        pub(crate) mod tree_node_key;
    }
    pub(crate) mod logic {
        pub(crate) mod expansion_state_impl;
        pub(crate) mod forest_impl;
        pub(crate) mod hierarchy_builder;
        pub(crate) mod record_classifier;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod build_hierarchy_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod record_type_fmt;
    pub(crate) mod tree_printer;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::badge_color::*;
        pub use crate::domain::entities::forest::*;
        pub use crate::domain::entities::hierarchy_config::*;
        pub use crate::domain::entities::record::*;
        pub use crate::domain::entities::record_format::*;
        pub use crate::domain::entities::record_role::*;
        pub use crate::domain::entities::tree_node_key::*;
    }

    pub mod logic {
        pub use crate::domain::logic::hierarchy_builder::{build_forest, HierarchyBuilder};
        pub use crate::domain::logic::record_classifier::classify;
    }
}

//! Pure build-selection logic: catalog schemas, purpose weighting,
//! candidate reduction and the cross-product search that picks one build.

pub mod common;
pub mod error;
pub mod reducer;
pub mod schemas;
pub mod search;
pub mod weights;

pub use error::BuildError;
pub use reducer::ReducerCaps;
pub use schemas::build::{Build, BuildSpec};
pub use schemas::component::{Category, Component, REQUIRED_CATEGORIES};
pub use search::PSU_HEADROOM;
pub use weights::WeightTable;

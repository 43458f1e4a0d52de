use thiserror::Error;

use crate::schemas::component::Category;

/*
 * Both variants are expected outcomes of a well-formed request, not bugs:
 * the catalog can simply lack what the budget and constraints demand.
 */
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error("no catalog entries for required categories: {}", .0.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(", "))]
    MissingCategories(Vec<Category>),
    #[error("no combination of candidates satisfies compatibility, power and budget")]
    NoSatisfiableBuild,
}

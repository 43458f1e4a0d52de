use serde::{Deserialize, Serialize};

use super::component::{Category, Component};

/* What the caller asked for. */
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BuildSpec {
    pub budget: f64,
    pub purpose: String,
    #[serde(default)]
    pub include_os: bool,
    #[serde(default)]
    pub peripherals: Vec<String>,
}

/*
 * A complete, purchasable system: exactly one component per required
 * category (in REQUIRED_CATEGORIES order) plus the requested extras.
 * Extras count toward the total price but not toward the score or the
 * compatibility and power checks.
 */
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Build {
    pub required: Vec<Component>,
    pub optional: Vec<Component>,
    pub score: f64,
    pub total_price: f64,
}

impl Build {
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.required.iter().chain(self.optional.iter())
    }

    pub fn component(&self, category: &Category) -> Option<&Component> {
        self.required.iter().find(|c| &c.category == category)
    }
}

use maplit::hashmap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::schemas::component::Category;

/*
 * How much each required category's performance counts toward the score,
 * per purpose. Passed explicitly into the search so callers can override
 * it per request; nothing here is process-global.
 */
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WeightTable {
    purposes: HashMap<String, HashMap<Category, f64>>,
}

impl WeightTable {
    /* purposes the table does not know score like this one */
    pub const FALLBACK: &'static str = "general";

    pub fn new(purposes: HashMap<String, HashMap<Category, f64>>) -> Self {
        Self { purposes }
    }

    /// The stock table. The `office` mapping carries no `Case` entry, so
    /// cases contribute nothing to an office score.
    pub fn builtin() -> Self {
        Self::new(hashmap! {
            "gaming".to_string() => hashmap! {
                Category::Cpu => 1.0,
                Category::Gpu => 1.5,
                Category::Motherboard => 0.3,
                Category::Ram => 0.8,
                Category::Storage => 0.5,
                Category::Psu => 0.2,
                Category::Case => 0.1,
            },
            "editing".to_string() => hashmap! {
                Category::Cpu => 1.4,
                Category::Gpu => 1.0,
                Category::Motherboard => 0.3,
                Category::Ram => 1.2,
                Category::Storage => 1.0,
                Category::Psu => 0.2,
                Category::Case => 0.1,
            },
            "streaming".to_string() => hashmap! {
                Category::Cpu => 1.3,
                Category::Gpu => 1.2,
                Category::Motherboard => 0.3,
                Category::Ram => 1.0,
                Category::Storage => 0.6,
                Category::Psu => 0.2,
                Category::Case => 0.1,
            },
            "office".to_string() => hashmap! {
                Category::Cpu => 0.9,
                Category::Gpu => 0.3,
                Category::Motherboard => 0.4,
                Category::Ram => 0.7,
                Category::Storage => 0.8,
                Category::Psu => 0.2,
            },
            "general".to_string() => hashmap! {
                Category::Cpu => 1.0,
                Category::Gpu => 1.0,
                Category::Motherboard => 0.3,
                Category::Ram => 0.7,
                Category::Storage => 0.6,
                Category::Psu => 0.2,
                Category::Case => 0.1,
            },
        })
    }

    pub fn set<S: Into<String>>(&mut self, purpose: S, category: Category, weight: f64) {
        self.purposes
            .entry(purpose.into())
            .or_insert_with(HashMap::new)
            .insert(category, weight);
    }

    fn resolve(&self, purpose: &str) -> Option<&HashMap<Category, f64>> {
        let key = purpose.trim().to_ascii_lowercase();
        self.purposes
            .get(&key)
            .or_else(|| self.purposes.get(Self::FALLBACK))
    }

    /* categories without an entry weigh nothing */
    pub fn weight(&self, purpose: &str, category: &Category) -> f64 {
        self.resolve(purpose)
            .and_then(|m| m.get(category))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn category_weights(&self, purpose: &str) -> HashMap<Category, f64> {
        self.resolve(purpose).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::WeightTable;
    use crate::schemas::component::Category;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = WeightTable::builtin();
        assert_eq!(
            table.weight("Gaming", &Category::Gpu),
            table.weight("gaming", &Category::Gpu)
        );
        assert_eq!(
            table.weight("  GAMING ", &Category::Cpu),
            table.weight("gaming", &Category::Cpu)
        );
    }

    #[test]
    fn test_unknown_purpose_falls_back_to_general() {
        let table = WeightTable::builtin();
        assert_eq!(
            table.weight("underwater basket weaving", &Category::Gpu),
            table.weight("general", &Category::Gpu)
        );
    }

    #[test]
    fn test_unlisted_category_weighs_zero() {
        let table = WeightTable::builtin();
        assert_eq!(table.weight("office", &Category::Case), 0.0);
        assert_eq!(
            table.weight("gaming", &Category::Other("keyboard".to_string())),
            0.0
        );
    }

    #[test]
    fn test_overrides() {
        let mut table = WeightTable::builtin();
        table.set("gaming", Category::Gpu, 9.0);
        assert_eq!(table.weight("gaming", &Category::Gpu), 9.0);
    }
}

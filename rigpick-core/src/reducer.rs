use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::BuildError;
use crate::schemas::component::{Category, Component, REQUIRED_CATEGORIES};
use crate::weights::WeightTable;

/*
 * Caps on the per-category shortlist. The search enumerates the full
 * cross-product of the shortlists, so these bound the worst case at
 * (value + premium)^7 combinations regardless of catalog size.
 */
#[derive(Clone, Copy, Debug)]
pub struct ReducerCaps {
    /* best performance-per-pound, scaled by the purpose weight */
    pub value: usize,
    /* most expensive outright, so high-end parts survive a generous budget */
    pub premium: usize,
}

impl Default for ReducerCaps {
    fn default() -> Self {
        Self {
            value: 5,
            premium: 2,
        }
    }
}

pub fn group_by_category(catalog: &[Component]) -> HashMap<Category, Vec<&Component>> {
    let mut grouped: HashMap<Category, Vec<&Component>> = HashMap::new();
    for component in catalog {
        grouped
            .entry(component.category.clone())
            .or_insert_with(Vec::new)
            .push(component);
    }
    grouped
}

/// Reduce each required category's pool to a bounded candidate list, or
/// report every required category the catalog cannot fill at all.
///
/// # Errors
/// `BuildError::MissingCategories` when at least one required category has
/// no entry in the grouped catalog.
pub fn shortlists<'a>(
    grouped: &HashMap<Category, Vec<&'a Component>>,
    budget: f64,
    purpose: &str,
    weights: &WeightTable,
    caps: &ReducerCaps,
) -> Result<Vec<Vec<&'a Component>>, BuildError> {
    let mut missing = Vec::new();
    let mut lists = Vec::with_capacity(REQUIRED_CATEGORIES.len());

    for category in REQUIRED_CATEGORIES.iter() {
        match grouped.get(category) {
            Some(pool) if !pool.is_empty() => {
                lists.push(shortlist(pool, budget, weights.weight(purpose, category), caps));
            }
            _ => missing.push(category.clone()),
        }
    }

    if missing.is_empty() {
        Ok(lists)
    } else {
        Err(BuildError::MissingCategories(missing))
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/*
 * Two overlapping rankings, merged value-first with first-seen-wins
 * de-duplication by name. The pool already honors the price ceiling; the
 * premium ranking re-checks it anyway.
 */
fn shortlist<'a>(
    pool: &[&'a Component],
    budget: f64,
    weight: f64,
    caps: &ReducerCaps,
) -> Vec<&'a Component> {
    let mut by_value: Vec<&Component> = pool.to_vec();
    by_value.sort_by(|a, b| descending(a.value_for_money(weight), b.value_for_money(weight)));

    let mut by_price: Vec<&Component> = pool
        .iter()
        .copied()
        .filter(|c| c.price <= budget)
        .collect();
    by_price.sort_by(|a, b| descending(a.price, b.price));

    let mut merged: Vec<&Component> = Vec::with_capacity(caps.value + caps.premium);
    for candidate in by_value
        .into_iter()
        .take(caps.value)
        .chain(by_price.into_iter().take(caps.premium))
    {
        if !merged.iter().any(|kept| kept.name == candidate.name) {
            merged.push(candidate);
        }
    }
    merged
}

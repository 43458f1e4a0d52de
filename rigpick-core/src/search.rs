use crate::error::BuildError;
use crate::reducer::{self, ReducerCaps};
use crate::schemas::build::{Build, BuildSpec};
use crate::schemas::component::{Category, Component};
use crate::weights::WeightTable;

/* the PSU must be rated at this multiple of the other parts' summed draw */
pub const PSU_HEADROOM: f64 = 1.2;

impl Build {
    /// Pick the best build the catalog can support: reduce each required
    /// category to a shortlist, enumerate every combination, keep the
    /// highest-scoring one that is compatible, sufficiently powered and
    /// within budget. Requested extras ride along on every combination
    /// and count toward the price only.
    ///
    /// # Errors
    /// `MissingCategories` when the catalog cannot fill every required
    /// slot; `NoSatisfiableBuild` when no combination passes the checks.
    pub fn generate(
        catalog: &[Component],
        spec: &BuildSpec,
        weights: &WeightTable,
        caps: &ReducerCaps,
    ) -> Result<Self, BuildError> {
        let grouped = reducer::group_by_category(catalog);
        let lists = reducer::shortlists(&grouped, spec.budget, &spec.purpose, weights, caps)?;

        let extras = optional_picks(catalog, spec);
        let extras_price: f64 = extras.iter().map(|c| c.price).sum();

        let mut best: Option<(Vec<&Component>, f64, f64)> = None;
        let mut picks: Vec<&Component> = Vec::with_capacity(lists.len());
        enumerate(&lists, &mut picks, &mut |combo| {
            if !compatible(combo) || !power_sufficient(combo) {
                return;
            }
            let total = combo.iter().map(|c| c.price).sum::<f64>() + extras_price;
            if total > spec.budget {
                return;
            }
            let score = score(combo, &spec.purpose, weights);
            let improves = match &best {
                None => true,
                /* equal scores go to whichever build spends more of the budget */
                Some((_, best_score, best_total)) => {
                    score > *best_score || (score == *best_score && total > *best_total)
                }
            };
            if improves {
                best = Some((combo.to_vec(), score, total));
            }
        });

        match best {
            Some((picks, score, total_price)) => Ok(Self {
                required: picks.into_iter().cloned().collect(),
                optional: extras.into_iter().cloned().collect(),
                score,
                total_price,
            }),
            None => Err(BuildError::NoSatisfiableBuild),
        }
    }
}

/* depth-first over the category axis, visiting combinations in nested-loop order */
fn enumerate<'a>(
    lists: &[Vec<&'a Component>],
    picks: &mut Vec<&'a Component>,
    visit: &mut dyn FnMut(&[&'a Component]),
) {
    match lists.split_first() {
        None => visit(picks),
        Some((head, rest)) => {
            for candidate in head {
                picks.push(candidate);
                enumerate(rest, picks, visit);
                picks.pop();
            }
        }
    }
}

/*
 * Extras never multiply the search space: at most one operating system and
 * the first catalog entry of each requested peripheral category, always
 * included when requested and present.
 */
fn optional_picks<'a>(catalog: &'a [Component], spec: &BuildSpec) -> Vec<&'a Component> {
    let mut extras = Vec::new();
    if spec.include_os {
        if let Some(os) = catalog
            .iter()
            .find(|c| c.category == Category::OperatingSystem)
        {
            extras.push(os);
        }
    }
    for requested in &spec.peripherals {
        let category = Category::parse(requested);
        if let Some(peripheral) = catalog.iter().find(|c| c.category == category) {
            extras.push(peripheral);
        }
    }
    extras
}

fn pick<'a>(combo: &[&'a Component], category: Category) -> Option<&'a Component> {
    combo.iter().copied().find(|c| c.category == category)
}

fn compatible(combo: &[&Component]) -> bool {
    let (cpu, motherboard, ram) = match (
        pick(combo, Category::Cpu),
        pick(combo, Category::Motherboard),
        pick(combo, Category::Ram),
        pick(combo, Category::Psu),
    ) {
        (Some(cpu), Some(motherboard), Some(ram), Some(_)) => (cpu, motherboard, ram),
        /* complete combos always carry all four; anything else is out */
        _ => return false,
    };

    cpu.socket == motherboard.socket && ram.ram_type == motherboard.ram_type
}

/* the draw covers the required picks only; extras never count toward it */
fn power_sufficient(combo: &[&Component]) -> bool {
    let psu = match pick(combo, Category::Psu) {
        Some(psu) => psu,
        None => return false,
    };
    let draw: f64 = combo
        .iter()
        .filter(|c| c.category != Category::Psu)
        .map(|c| c.wattage)
        .sum();
    psu.wattage >= PSU_HEADROOM * draw
}

fn score(combo: &[&Component], purpose: &str, weights: &WeightTable) -> f64 {
    combo
        .iter()
        .map(|c| c.performance_score * weights.weight(purpose, &c.category))
        .sum()
}

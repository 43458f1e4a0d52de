use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::catalog::ComponentSource;
use crate::describe::Describer;
use rigpick_core::{Build, BuildError, BuildSpec, ReducerCaps, WeightTable};

/* budget band the service accepts, in pounds */
pub const BUDGET_MIN: f64 = 500.0;
pub const BUDGET_MAX: f64 = 10_000.0;

/*
 * Every expected failure maps to its own variant so callers can surface
 * distinct statuses; none of these are bugs in the service.
 */
#[derive(Error, Debug)]
pub enum RecommendError {
    #[error("budget must be between £{min} and £{max}")]
    BudgetOutOfRange { min: f64, max: f64 },
    #[error("no products found within budget")]
    EmptyCatalog,
    #[error(transparent)]
    Unbuildable(#[from] BuildError),
    #[error(transparent)]
    Source(#[from] anyhow::Error),
}

#[derive(Serialize, Debug)]
pub struct Recommendation {
    pub build: Build,
    /* one line per component plus the total */
    pub recommendation: String,
    pub description: Option<String>,
    pub generated_at: DateTime<Utc>,
}

pub struct Recommender {
    pub weights: WeightTable,
    pub caps: ReducerCaps,
}

impl Default for Recommender {
    fn default() -> Self {
        Self {
            weights: WeightTable::builtin(),
            caps: ReducerCaps::default(),
        }
    }
}

impl Recommender {
    /// Validate the request, pull the affordable slice of the catalog and
    /// pick the best build for it.
    ///
    /// # Errors
    /// `BudgetOutOfRange` before anything else runs; `EmptyCatalog` when
    /// the ceiling leaves nothing to choose from; `Unbuildable` for the
    /// core's no-result outcomes; `Source` when the catalog fetch failed.
    pub async fn recommend<S>(
        &self,
        source: &mut S,
        spec: &BuildSpec,
    ) -> Result<Recommendation, RecommendError>
    where
        S: ComponentSource + Send,
    {
        if !(BUDGET_MIN..=BUDGET_MAX).contains(&spec.budget) {
            return Err(RecommendError::BudgetOutOfRange {
                min: BUDGET_MIN,
                max: BUDGET_MAX,
            });
        }

        let components = source.fetch(spec.budget).await?;
        if components.is_empty() {
            return Err(RecommendError::EmptyCatalog);
        }
        tracing::debug!(
            "{} catalog records within £{:.2}",
            components.len(),
            spec.budget
        );

        let build = Build::generate(&components, spec, &self.weights, &self.caps)?;
        tracing::info!(
            "selected a build scoring {:.1} at £{:.2}",
            build.score,
            build.total_price
        );

        Ok(Recommendation {
            recommendation: format_build(&build),
            build,
            description: None,
            generated_at: Utc::now(),
        })
    }

    /// Same as `recommend`, with prose from the describer attached.
    pub async fn recommend_described<S>(
        &self,
        source: &mut S,
        spec: &BuildSpec,
        describer: &Describer,
    ) -> Result<Recommendation, RecommendError>
    where
        S: ComponentSource + Send,
    {
        let mut recommendation = self.recommend(source, spec).await?;
        recommendation.description = Some(
            describer
                .describe(&recommendation.build, spec)
                .await
                .map_err(RecommendError::Source)?,
        );
        Ok(recommendation)
    }
}

pub fn format_build(build: &Build) -> String {
    let mut lines: Vec<String> = build
        .components()
        .map(|c| format!("{}: {} - £{:.2}", c.category, c.name, c.price))
        .collect();
    lines.push(format!("Total: £{:.2}", build.total_price));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::{format_build, RecommendError, Recommender};
    use crate::catalog::ComponentSource;
    use rigpick_core::{BuildSpec, Component};

    struct Fixed(Vec<Component>);

    #[async_trait]
    impl ComponentSource for Fixed {
        async fn fetch(&mut self, ceiling: f64) -> anyhow::Result<Vec<Component>> {
            Ok(self
                .0
                .iter()
                .filter(|c| c.price <= ceiling)
                .cloned()
                .collect())
        }
    }

    fn catalog() -> Vec<Component> {
        serde_json::from_str(
            r#"[
                {"type": "CPU", "name": "Test CPU", "price": 180, "performance_score": 90, "socket": "AM4", "wattage": 90},
                {"type": "Motherboard", "name": "Test MB", "price": 120, "performance_score": 80, "socket": "AM4", "ram_type": "DDR4", "wattage": 30},
                {"type": "RAM", "name": "Test RAM", "price": 70, "performance_score": 60, "ram_type": "DDR4", "wattage": 10},
                {"type": "GPU", "name": "Test GPU", "price": 400, "performance_score": 200, "wattage": 160},
                {"type": "Storage", "name": "Test SSD", "price": 100, "performance_score": 70, "wattage": 10},
                {"type": "PSU", "name": "Test PSU", "price": 80, "performance_score": 60, "wattage": 600},
                {"type": "Case", "name": "Test Case", "price": 60, "performance_score": 50}
            ]"#,
        )
        .unwrap()
    }

    fn spec(budget: f64) -> BuildSpec {
        BuildSpec {
            budget,
            purpose: "gaming".to_string(),
            include_os: false,
            peripherals: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_budget_band_is_enforced() {
        let recommender = Recommender::default();
        for budget in [300.0, 12_000.0].iter() {
            let err = recommender
                .recommend(&mut Fixed(catalog()), &spec(*budget))
                .await
                .unwrap_err();
            assert!(matches!(err, RecommendError::BudgetOutOfRange { .. }));
            assert_eq!(err.to_string(), "budget must be between £500 and £10000");
        }
    }

    #[tokio::test]
    async fn test_empty_catalog_is_its_own_outcome() {
        let err = Recommender::default()
            .recommend(&mut Fixed(Vec::new()), &spec(1200.0))
            .await
            .unwrap_err();
        assert!(matches!(err, RecommendError::EmptyCatalog));
    }

    #[tokio::test]
    async fn test_recommendation_lines_and_total() {
        let recommendation = Recommender::default()
            .recommend(&mut Fixed(catalog()), &spec(1200.0))
            .await
            .unwrap();

        assert!(recommendation
            .recommendation
            .contains("CPU: Test CPU - £180.00"));
        assert!(recommendation
            .recommendation
            .ends_with("Total: £1010.00"));
        assert!(recommendation.description.is_none());
        assert_eq!(recommendation.build.total_price, 1010.0);
    }

    #[tokio::test]
    async fn test_core_failures_pass_through_typed() {
        let gpuless: Vec<Component> = catalog()
            .into_iter()
            .filter(|c| c.category != rigpick_core::Category::Gpu)
            .collect();
        let err = Recommender::default()
            .recommend(&mut Fixed(gpuless), &spec(1200.0))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RecommendError::Unbuildable(rigpick_core::BuildError::MissingCategories(_))
        ));
    }

    #[test]
    fn test_format_build_shape() {
        let build = rigpick_core::Build {
            required: catalog().into_iter().take(2).collect(),
            optional: Vec::new(),
            score: 0.0,
            total_price: 300.0,
        };
        let formatted = format_build(&build);
        let lines: Vec<&str> = formatted.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "Total: £300.00");
    }
}

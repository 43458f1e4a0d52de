use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use rigpick_core::Component;

/*
 * A supplier of catalog records. Implementations apply the price ceiling
 * themselves, so callers only ever see records they could afford outright.
 */
#[async_trait]
pub trait ComponentSource {
    async fn fetch(&mut self, ceiling: f64) -> anyhow::Result<Vec<Component>>;
}

#[derive(Serialize)]
pub struct CatalogSnapshot {
    pub fetched_at: DateTime<Utc>,
    pub components: Vec<Component>,
}

impl CatalogSnapshot {
    pub async fn take<S>(source: &mut S, ceiling: f64) -> anyhow::Result<Self>
    where
        S: ComponentSource + Send,
    {
        Ok(Self {
            fetched_at: Utc::now(),
            components: source.fetch(ceiling).await?,
        })
    }
}

/* Drain several sources at once and pool their records. */
pub async fn collect_all(
    sources: &mut [Box<dyn ComponentSource + Send>],
    ceiling: f64,
) -> anyhow::Result<Vec<Component>> {
    let source_count = sources.len();
    let fetched =
        futures::future::try_join_all(sources.iter_mut().map(|s| s.fetch(ceiling))).await?;
    let pooled: Vec<Component> = fetched.into_iter().flatten().collect();
    tracing::debug!(
        "pooled {} records from {} sources under £{:.2}",
        pooled.len(),
        source_count,
        ceiling
    );
    Ok(pooled)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::{collect_all, ComponentSource};
    use rigpick_core::Component;

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

    fn part(raw: &str) -> Component {
        serde_json::from_str(raw).unwrap()
    }

    #[tokio::test]
    async fn test_collect_all_pools_and_filters() {
        let mut sources: Vec<Box<dyn ComponentSource + Send>> = vec![
            Box::new(Fixed(vec![
                part(r#"{"type": "CPU", "name": "a", "price": 180}"#),
                part(r#"{"type": "GPU", "name": "b", "price": 4000}"#),
            ])),
            Box::new(Fixed(vec![part(
                r#"{"type": "RAM", "name": "c", "price": 70}"#,
            )])),
        ];

        let pooled = collect_all(&mut sources, 1200.0).await.unwrap();
        let names: Vec<&str> = pooled.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }
}

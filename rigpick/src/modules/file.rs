use anyhow::Context;
use async_trait::async_trait;
use std::path::PathBuf;

use crate::catalog::ComponentSource;
use rigpick_core::Component;

/* A JSON array of catalog records on disk. */
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

pub(crate) fn decode(raw: &str, ceiling: f64) -> anyhow::Result<Vec<Component>> {
    let components: Vec<Component> = serde_json::from_str(raw)?;
    Ok(components
        .into_iter()
        .filter(|c| c.price <= ceiling)
        .collect())
}

#[async_trait]
impl ComponentSource for FileCatalog {
    async fn fetch(&mut self, ceiling: f64) -> anyhow::Result<Vec<Component>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("reading catalog file {}", self.path.display()))?;
        decode(&raw, ceiling)
    }
}

#[cfg(test)]
mod tests {
    use super::decode;

    #[test]
    fn test_decode_applies_the_ceiling() {
        let components = decode(
            r#"[
                {"type": "CPU", "name": "Test CPU", "price": 180, "performance_score": 90, "socket": "AM4"},
                {"type": "GPU", "name": "Halo GPU", "price": 2500, "performance_score": 500}
            ]"#,
            1200.0,
        )
        .unwrap();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].name, "Test CPU");
    }

    #[test]
    fn test_decode_tolerates_sparse_records() {
        let components = decode(r#"[{"type": "Case", "name": "Test Case"}]"#, 1200.0).unwrap();
        assert_eq!(components[0].price, 0.0);
        assert_eq!(components[0].wattage, 0.0);
    }

    #[test]
    fn test_decode_rejects_non_arrays() {
        assert!(decode(r#"{"type": "CPU"}"#, 1200.0).is_err());
    }
}

use anyhow::Context;
use async_trait::async_trait;
use lazy_static::lazy_static;
use serde::Deserialize;
use std::convert::TryInto;
use std::str::FromStr;

use crate::catalog::ComponentSource;
use crate::common::{Client, Money};
use rigpick_core::{Category, Component};

/*
 * One entry of a merchant feed. Numeric fields arrive as display strings
 * ("£1,299.00", "650W"); unreadable ones default to zero rather than
 * sinking the whole feed.
 */
#[derive(Deserialize)]
struct RawListing {
    #[serde(rename = "type")]
    category: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    price: String,
    #[serde(default)]
    performance_score: String,
    #[serde(default)]
    socket: Option<String>,
    #[serde(default)]
    ram_type: Option<String>,
    #[serde(default)]
    wattage: String,
}

impl TryInto<Component> for RawListing {
    type Error = anyhow::Error;

    fn try_into(self) -> anyhow::Result<Component> {
        lazy_static! {
            static ref RE_WATTS: regex::Regex =
                regex::Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*[wW]?").unwrap();
        }

        if self.name.trim().is_empty() {
            anyhow::bail!("listing without a name");
        }

        Ok(Component {
            category: Category::parse(&self.category),
            name: self.name,
            price: Money::from_str(&self.price).map(|m| m.1).unwrap_or(0.0),
            performance_score: self
                .performance_score
                .replace(",", "")
                .parse()
                .unwrap_or(0.0),
            socket: self.socket,
            ram_type: self.ram_type,
            wattage: RE_WATTS
                .captures(&self.wattage)
                .and_then(|c| c.get(1))
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(0.0),
        })
    }
}

#[derive(Deserialize)]
struct Feed {
    data: Vec<RawListing>,
}

fn convert(feed: Feed, ceiling: f64) -> Vec<Component> {
    feed.data
        .into_iter()
        .filter_map(|raw| raw.try_into().ok())
        .filter(|c: &Component| c.price <= ceiling)
        .collect()
}

/* A merchant feed behind a plain GET endpoint. */
pub struct RemoteCatalog {
    url: String,
    client: Client<true>,
}

impl RemoteCatalog {
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self {
            url: url.into(),
            client: Default::default(),
        }
    }
}

#[async_trait]
impl ComponentSource for RemoteCatalog {
    async fn fetch(&mut self, ceiling: f64) -> anyhow::Result<Vec<Component>> {
        let res = self
            .client
            .0
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await?;
        let feed: Feed = res.json().await.context("decoding component feed")?;
        Ok(convert(feed, ceiling))
    }
}

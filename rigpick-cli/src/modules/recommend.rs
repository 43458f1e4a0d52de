use std::path::PathBuf;

use structopt::StructOpt;

use rigpick::catalog::ComponentSource;
use rigpick::describe::Describer;
use rigpick::modules::{file::FileCatalog, remote::RemoteCatalog};
use rigpick::service::{Recommendation, Recommender};
use rigpick::BuildSpec;

use crate::run_impl;

#[derive(StructOpt)]
pub struct Recommend {
    /* where the catalog records come from */
    #[structopt(long, conflicts_with = "url")]
    file: Option<PathBuf>,
    #[structopt(long)]
    url: Option<String>,

    #[structopt(long)]
    budget: f64,
    #[structopt(long, default_value = "general")]
    purpose: String,
    #[structopt(long)]
    include_os: bool,
    #[structopt(long = "peripheral")]
    peripherals: Vec<String>,
    /* attach prose from an OpenAI-compatible endpoint; needs OPENAI_API_KEY */
    #[structopt(long)]
    describe: bool,
}

impl Recommend {
    fn spec(&self) -> BuildSpec {
        BuildSpec {
            budget: self.budget,
            purpose: self.purpose.clone(),
            include_os: self.include_os,
            peripherals: self.peripherals.clone(),
        }
    }

    async fn pick<S>(&self, source: &mut S) -> anyhow::Result<Recommendation>
    where
        S: ComponentSource + Send,
    {
        let recommender = Recommender::default();
        let spec = self.spec();

        if self.describe {
            match std::env::var("OPENAI_API_KEY") {
                Ok(key) => {
                    return Ok(recommender
                        .recommend_described(source, &spec, &Describer::new(key))
                        .await?);
                }
                Err(_) => {
                    tracing::warn!("OPENAI_API_KEY is not set; skipping the description");
                }
            }
        }

        Ok(recommender.recommend(source, &spec).await?)
    }
}

run_impl!(Recommend, self, ser, {
    let recommendation = match (&self.file, &self.url) {
        (Some(path), _) => self.pick(&mut FileCatalog::new(path)).await?,
        (None, Some(url)) => self.pick(&mut RemoteCatalog::new(url.clone())).await?,
        (None, None) => anyhow::bail!("either --file or --url is required"),
    };

    erased_serde::serialize(&recommendation, ser)?;
});

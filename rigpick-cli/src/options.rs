use crate::{
    modules::{catalog::Catalog, recommend::Recommend, weights::Weights},
    run_impl,
};
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(name = "rigpick-cli")]
pub enum Command {
    Recommend(Recommend),
    Catalog(Catalog),
    Weights(Weights),
}

run_impl!(Command, self, ser, {
    match self {
        Self::Recommend(r) => r.run(ser).await?,
        Self::Catalog(c) => c.run(ser).await?,
        Self::Weights(w) => w.run(ser).await?,
    }
});

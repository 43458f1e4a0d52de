use structopt::StructOpt;

use crate::{run_delegate, run_impl};
use rigpick::WeightTable;

#[derive(StructOpt)]
pub struct Weights {
    #[structopt(subcommand)]
    query_type: QueryType,
}

run_delegate!(Weights, query_type);

#[derive(StructOpt)]
enum QueryType {
    Purpose { name: String },
}

run_impl!(QueryType, self, ser, {
    match self {
        Self::Purpose { name } => {
            erased_serde::serialize(&WeightTable::builtin().category_weights(name), ser)?;
        }
    }
});

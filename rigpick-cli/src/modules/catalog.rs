use structopt::StructOpt;

use crate::{run_delegate, run_impl};

#[derive(StructOpt)]
pub struct Catalog {
    #[structopt(subcommand)]
    source_type: SourceType,
}

run_delegate!(Catalog, source_type);

#[derive(StructOpt)]
enum SourceType {
    File(file::SubCommand),
    Remote(remote::SubCommand),
}

run_impl!(SourceType, self, ser, {
    match self {
        Self::File(f) => f.run(ser).await?,
        Self::Remote(r) => r.run(ser).await?,
    }
});

mod file {
    use std::path::PathBuf;

    use structopt::StructOpt;

    use crate::run_impl;
    use rigpick::catalog::CatalogSnapshot;
    use rigpick::modules::file::FileCatalog;

    #[derive(StructOpt)]
    pub(super) struct SubCommand {
        path: PathBuf,
        #[structopt(long, default_value = "10000")]
        ceiling: f64,
    }

    run_impl!(SubCommand, self, ser, {
        erased_serde::serialize(
            &CatalogSnapshot::take(&mut FileCatalog::new(&self.path), self.ceiling).await?,
            ser,
        )?;
    });
}

mod remote {
    use structopt::StructOpt;

    use crate::run_impl;
    use rigpick::catalog::CatalogSnapshot;
    use rigpick::modules::remote::RemoteCatalog;

    #[derive(StructOpt)]
    pub(super) struct SubCommand {
        url: String,
        #[structopt(long, default_value = "10000")]
        ceiling: f64,
    }

    run_impl!(SubCommand, self, ser, {
        erased_serde::serialize(
            &CatalogSnapshot::take(&mut RemoteCatalog::new(self.url.clone()), self.ceiling)
                .await?,
            ser,
        )?;
    });
}

use anyhow::Result;
use svor_eval::cli::{self, DistributionCli};

fn main() -> Result<()> {
    cli::init_tracing();

    let args: DistributionCli = cli::parse_or_exit();
    args.run()
}

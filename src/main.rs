use anyhow::Result;
use svor_eval::cli::{self, ExperimentCli};

fn main() -> Result<()> {
    cli::init_tracing();

    let args: ExperimentCli = cli::parse_or_exit();
    args.run()
}

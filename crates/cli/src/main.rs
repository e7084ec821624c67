use std::io;

use anyhow::Context;

use stockkeep_cli::{CliConfig, Session};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::from_env();
    stockkeep_observability::init_with(&config.tracing);
    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), config);
    session.run().context("inventory session aborted")?;
    Ok(())
}

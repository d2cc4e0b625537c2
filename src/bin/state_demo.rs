use anyhow::{Context, Result};
use design_patterns::{state, Stdout};

fn main() -> Result<()> {
    design_patterns::setup().context("failed to set up state demo")?;

    state::run_demo(Stdout).context("state demo failed")
}

use anyhow::{Context, Result};
use design_patterns::{command, Stdout};

fn main() -> Result<()> {
    design_patterns::setup().context("failed to set up command demo")?;

    command::run_demo(Stdout).context("command demo failed")
}

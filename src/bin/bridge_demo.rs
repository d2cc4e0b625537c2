use anyhow::{Context, Result};
use design_patterns::{bridge, Stdout};

fn main() -> Result<()> {
    design_patterns::setup().context("failed to set up bridge demo")?;

    bridge::run_demo(Stdout).context("bridge demo failed")
}

use std::error::Error;

use clap::Args;
use lfs_bench::serde::to_yaml_string;

use super::ConfigOverrides;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub overrides: ConfigOverrides,
}

pub fn run(args: &ConfigArgs) -> Result<(), Box<dyn Error>> {
    let config = args.overrides.load()?;
    config.validate()?;
    print!("{}", to_yaml_string(&config)?);
    Ok(())
}

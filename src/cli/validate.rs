use clap::Parser;

use crate::{
    cli::{series::SeriesArgs, window::WindowArgs},
    prelude::*,
};

#[derive(Parser)]
pub struct ValidateArgs {
    #[clap(flatten)]
    series: SeriesArgs,

    #[clap(flatten)]
    window: WindowArgs,
}

impl ValidateArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let series = self.series.load()?;
        let interval = self.window.interval()?;

        let violations = series.validate(interval);
        for violation in &violations {
            println!("{violation}");
        }
        ensure!(
            violations.is_empty(),
            "found {} violation(s) in `{}`",
            violations.len(),
            series.name,
        );

        info!(n_plans = series.plans.len(), ?interval, "the plans are consistent");
        Ok(())
    }
}

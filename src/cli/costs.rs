use clap::Parser;

use crate::{
    cli::{OutputFormat, series::SeriesArgs, window::WindowArgs},
    core::Statistics,
    prelude::*,
    tables::build_bill_table,
};

#[derive(Parser)]
pub struct CostsArgs {
    #[clap(flatten)]
    series: SeriesArgs,

    #[clap(flatten)]
    window: WindowArgs,

    #[clap(long, env = "OUTPUT_FORMAT", value_enum, default_value = "table")]
    format: OutputFormat,
}

impl CostsArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let series = self.series.load()?;
        let interval = self.window.interval()?;

        let bill = series.costs(interval)?;
        info!(?interval, consumption = ?bill.consumption, costs = ?bill.costs, "calculated");

        let statistics = Statistics::new(interval, bill);
        match self.format {
            OutputFormat::Table => println!("{}", build_bill_table(&series, &statistics)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&statistics)?),
        }
        Ok(())
    }
}

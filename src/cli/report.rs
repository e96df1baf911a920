use clap::Parser;

use crate::{
    cli::{OutputFormat, series::SeriesArgs, window::WindowArgs},
    core::statistics::monthly_statistics,
    prelude::*,
    tables::build_statistics_table,
};

#[derive(Parser)]
pub struct ReportArgs {
    #[clap(flatten)]
    series: SeriesArgs,

    #[clap(flatten)]
    window: WindowArgs,

    #[clap(long, env = "OUTPUT_FORMAT", value_enum, default_value = "table")]
    format: OutputFormat,
}

impl ReportArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let series = self.series.load()?;
        let interval = self.window.interval()?;
        info!(?interval, n_days = interval.n_days(), "reporting…");

        for violation in series.validate(interval) {
            warn!(%violation, "the costs may be off");
        }

        let readings = series.sorted_readings()?;
        let span = readings.span();
        if !span.contains(interval.start) || interval.end > span.end {
            warn!(?span, "the window exceeds the readings, consumption outside of them is zero");
        }

        let statistics = monthly_statistics(&readings, &series.plans, interval)?;
        match self.format {
            OutputFormat::Table => println!("{}", build_statistics_table(&series, &statistics)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&statistics)?),
        }
        Ok(())
    }
}

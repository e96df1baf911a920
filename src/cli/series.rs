use std::{fs, path::PathBuf};

use clap::Parser;

use crate::{core::Series, prelude::*};

#[derive(Parser)]
pub struct SeriesArgs {
    /// TOML file with the meter readings and the pricing plans.
    #[clap(long = "series-file", env = "SERIES_FILE")]
    path: PathBuf,
}

impl SeriesArgs {
    #[instrument(skip_all, fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Series> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read `{}`", self.path.display()))?;
        let series = parse(&contents)
            .with_context(|| format!("failed to parse `{}`", self.path.display()))?;
        info!(
            name = %series.name,
            n_readings = series.readings.len(),
            n_plans = series.plans.len(),
            "loaded",
        );
        Ok(series)
    }
}

fn parse(contents: &str) -> Result<Series> {
    Ok(toml::from_str(contents)?)
}

mod costs;
mod report;
mod series;
mod validate;
mod window;

use clap::{Parser, Subcommand, ValueEnum};

use crate::{
    cli::{costs::CostsArgs, report::ReportArgs, validate::ValidateArgs},
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn run(self) -> Result {
        match self.command {
            Command::Report(args) => args.run(),
            Command::Costs(args) => args.run(),
            Command::Validate(args) => args.run(),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Consumption and costs per calendar month.
    Report(Box<ReportArgs>),

    /// Total consumption and costs over the whole window.
    Costs(Box<CostsArgs>),

    /// Check the pricing plans for gaps, overlaps, and misaligned starts.
    Validate(Box<ValidateArgs>),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

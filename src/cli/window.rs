use chrono::{Local, NaiveDate};
use clap::Parser;

use crate::{core::Interval, prelude::*};

#[derive(Parser)]
pub struct WindowArgs {
    /// First day of the window, defaults to `--months` before `--until`.
    #[clap(long, env = "REPORT_SINCE")]
    since: Option<NaiveDate>,

    /// Day after the window, defaults to today.
    #[clap(long, env = "REPORT_UNTIL")]
    until: Option<NaiveDate>,

    /// Window length in calendar months, unless `--since` is given.
    #[clap(long, env = "REPORT_MONTHS", default_value = "6")]
    months: u32,
}

impl WindowArgs {
    pub fn interval(&self) -> Result<Interval> {
        self.interval_until(Local::now().date_naive())
    }

    fn interval_until(&self, today: NaiveDate) -> Result<Interval> {
        let until = self.until.unwrap_or(today);
        let interval = match self.since {
            Some(since) => Interval::new(since, until),
            None => Interval::months_until(until, self.months)
                .with_context(|| format!("cannot go {} months back from {until}", self.months))?,
        };
        ensure!(!interval.is_empty(), "the window `{interval:?}` is empty");
        Ok(interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::date::ymd;

    fn parse(args: &[&str]) -> WindowArgs {
        WindowArgs::try_parse_from(std::iter::once("window").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_default_window() {
        let interval = parse(&[]).interval_until(ymd(2019, 8, 15)).unwrap();
        assert_eq!(interval, Interval::new(ymd(2019, 2, 15), ymd(2019, 8, 15)));
    }

    #[test]
    fn test_months_back_from_until() {
        let interval = parse(&["--until", "2020-01-01", "--months", "12"])
            .interval_until(ymd(2025, 1, 1))
            .unwrap();
        assert_eq!(interval, Interval::new(ymd(2019, 1, 1), ymd(2020, 1, 1)));
    }

    #[test]
    fn test_explicit_window() {
        let interval = parse(&["--since", "2019-01-01", "--until", "2019-04-01"])
            .interval_until(ymd(2025, 1, 1))
            .unwrap();
        assert_eq!(interval, Interval::new(ymd(2019, 1, 1), ymd(2019, 4, 1)));
    }

    #[test]
    fn test_empty_window() {
        let result = parse(&["--since", "2019-04-01", "--until", "2019-04-01"])
            .interval_until(ymd(2025, 1, 1));
        assert!(result.is_err());
    }
}

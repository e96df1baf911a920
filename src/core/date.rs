use chrono::{Datelike, Months, NaiveDate};

/// Number of calendar months touched by the half-open `start..end`.
///
/// A month counts even if only a single day of it is included. The end is exclusive,
/// so an `end` landing exactly on the 1st does not add its month.
#[must_use]
#[expect(clippy::cast_possible_wrap)]
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let months = (end.year() - start.year()) * 12 + end.month0() as i32 - start.month0() as i32 + 1;
    if end.day() == 1 { months - 1 } else { months }
}

/// The first day of the month following the one `date` belongs to.
#[must_use]
pub fn first_of_next_month(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)?.checked_add_months(Months::new(1))
}

/// Whole calendar days from `from` to `to`, negative when `to` precedes `from`.
#[must_use]
pub fn whole_days(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

#[cfg(test)]
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_months_between() {
        assert_eq!(months_between(ymd(2020, 5, 2), ymd(2020, 5, 3)), 1);
        assert_eq!(months_between(ymd(2020, 1, 1), ymd(2020, 7, 1)), 6);
        assert_eq!(months_between(ymd(2020, 1, 1), ymd(2020, 7, 2)), 7);
        assert_eq!(months_between(ymd(2019, 9, 15), ymd(2021, 10, 1)), 25);
        assert_eq!(months_between(ymd(2019, 11, 23), ymd(2020, 2, 22)), 4);
    }

    #[test]
    fn test_months_between_month_end() {
        assert_eq!(months_between(ymd(2019, 4, 30), ymd(2019, 5, 1)), 1);
        assert_eq!(months_between(ymd(2019, 4, 30), ymd(2019, 5, 2)), 2);
    }

    #[test]
    fn test_first_of_next_month() {
        assert_eq!(first_of_next_month(ymd(2019, 1, 31)), Some(ymd(2019, 2, 1)));
        assert_eq!(first_of_next_month(ymd(2019, 2, 1)), Some(ymd(2019, 3, 1)));
        assert_eq!(first_of_next_month(ymd(2019, 12, 15)), Some(ymd(2020, 1, 1)));
        assert_eq!(first_of_next_month(NaiveDate::MAX), None);
    }

    #[test]
    fn test_whole_days() {
        assert_eq!(whole_days(ymd(2019, 2, 27), ymd(2019, 3, 2)), 3);
        assert_eq!(whole_days(ymd(2020, 2, 27), ymd(2020, 3, 2)), 4);
        assert_eq!(whole_days(ymd(2019, 3, 2), ymd(2019, 2, 27)), -3);
    }
}

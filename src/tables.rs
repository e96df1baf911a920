use std::fmt::Display;

use chrono::Datelike;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{MonthlyStatistics, Series, Statistics},
    quantity::units::Units,
};

pub fn build_statistics_table(series: &Series, statistics: &MonthlyStatistics) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Month", "Year", "Days", "Consumption", "Costs"]);

    let mut previous_year = None;
    for month in statistics {
        let interval = month.interval();
        let year = interval.start.year();
        table.add_row(vec![
            Cell::new(interval.start.format("%B")),
            Cell::new(if previous_year == Some(year) { String::new() } else { year.to_string() })
                .add_attribute(Attribute::Dim),
            Cell::new(interval.n_days()).set_alignment(CellAlignment::Right),
            consumption_cell(series, month.consumption),
            Cell::new(with_unit(month.costs, series.currency.as_deref()))
                .set_alignment(CellAlignment::Right),
        ]);
        previous_year = Some(year);
    }

    let total = statistics.total();
    let n_days: i64 = statistics.iter().map(|month| month.interval().n_days()).sum();
    table.add_row(vec![
        Cell::new("TOTAL").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(n_days).set_alignment(CellAlignment::Right).add_attribute(Attribute::Bold),
        consumption_cell(series, total.consumption).add_attribute(Attribute::Bold),
        Cell::new(with_unit(total.costs, series.currency.as_deref()))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn build_bill_table(series: &Series, statistics: &Statistics) -> Table {
    let interval = statistics.interval();
    let mut table = new_table();
    table.set_header(vec!["From", "Until", "Days", "Consumption", "Costs"]);
    table.add_row(vec![
        Cell::new(interval.start),
        Cell::new(interval.end).add_attribute(Attribute::Dim),
        Cell::new(interval.n_days()).set_alignment(CellAlignment::Right),
        consumption_cell(series, statistics.consumption),
        Cell::new(with_unit(statistics.costs, series.currency.as_deref()))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

/// Meter running backwards usually means a replaced meter or a typo in the readings.
fn consumption_cell(series: &Series, consumption: Units) -> Cell {
    Cell::new(with_unit(consumption, series.unit.as_deref()))
        .set_alignment(CellAlignment::Right)
        .fg(if consumption < Units::ZERO { Color::Red } else { Color::Reset })
}

fn with_unit(amount: impl Display, unit: Option<&str>) -> String {
    unit.map_or_else(|| amount.to_string(), |unit| format!("{amount} {unit}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Interval, date::ymd};

    fn series() -> Series {
        toml::from_str(
            r#"
            name = "Electricity"
            unit = "kWh"
            currency = "EUR"

            [[plans]]
            name = "Basic"
            base_price = 10
            unit_price = 0.2

            [[readings]]
            date = "2018-12-01"
            count = 0

            [[readings]]
            date = "2019-04-01"
            count = 1200
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_statistics_table() {
        let series = series();
        let statistics =
            series.monthly_statistics(Interval::new(ymd(2018, 12, 1), ymd(2019, 3, 1))).unwrap();
        let table = build_statistics_table(&series, &statistics).to_string();

        assert!(table.contains("December"), "{table}");
        assert!(table.contains("2018"), "{table}");
        assert!(table.contains("February"), "{table}");
        assert!(table.contains("TOTAL"), "{table}");
        assert!(table.contains("kWh"), "{table}");
        assert!(table.contains("EUR"), "{table}");

        // The year is only printed when it changes.
        assert_eq!(table.matches("2019").count(), 1, "{table}");
    }

    #[test]
    fn test_bill_table() {
        let series = series();
        let interval = Interval::new(ymd(2019, 1, 1), ymd(2019, 2, 1));
        let statistics = Statistics::new(interval, series.costs(interval).unwrap());
        let table = build_bill_table(&series, &statistics).to_string();

        assert!(table.contains("2019-01-01"), "{table}");
        assert!(table.contains("2019-02-01"), "{table}");
        assert!(table.contains("31"), "{table}");
    }

    #[test]
    fn test_with_unit() {
        assert_eq!(with_unit(Units(1.5), Some("m³")), "1.50 m³");
        assert_eq!(with_unit(Units(1.5), None), "1.50");
    }
}

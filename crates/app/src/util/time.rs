use chrono::{Duration, Local, NaiveDate};

use cost_core::DEFAULT_DATE_FORMAT;

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DEFAULT_DATE_FORMAT).to_string()
}

/// The `n + 1` dates from `today - n` up to and including `today`, oldest first.
pub fn last_n_days(today: NaiveDate, n: u32) -> Vec<String> {
    (0..=n)
        .rev()
        .map(|offset| format_date(today - Duration::days(i64::from(offset))))
        .collect()
}

pub fn previous_day(today: NaiveDate) -> String {
    format_date(today - Duration::days(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn window_includes_both_ends() {
        let days = last_n_days(date(2024, 3, 2), 3);
        assert_eq!(days, vec!["2024-02-28", "2024-02-29", "2024-03-01", "2024-03-02"]);
    }

    #[test]
    fn zero_day_window_is_today_only() {
        assert_eq!(last_n_days(date(2024, 1, 1), 0), vec!["2024-01-01"]);
    }

    #[test]
    fn previous_day_crosses_year_boundary() {
        assert_eq!(previous_day(date(2025, 1, 1)), "2024-12-31");
    }
}

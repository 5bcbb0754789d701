use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Day of the month of today's date, 1-based.
pub fn today_day() -> u32 {
    today().day()
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let mut d = date.with_day(1).unwrap_or(date);
    let month = d.month();
    let mut n = 0;

    while d.month() == month {
        n += 1;
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    n
}

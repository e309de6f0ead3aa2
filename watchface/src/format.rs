use chrono::{Datelike, NaiveDate, NaiveTime};

/// Clock style preference, mirroring the system-wide user setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourCycle {
    H12,
    H24,
}

const WEEKDAYS: [&str; 7] = ["SUN", "MON", "TUES", "WED", "THURS", "FRI", "SAT"];

const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUNE", "JULY", "AUG", "SEPT", "OCT", "NOV", "DEC",
];

/// Renders the time string, always exactly five characters ("HH:MM").
pub fn time_text(time: NaiveTime, cycle: HourCycle) -> String {
    match cycle {
        HourCycle::H24 => time.format("%H:%M").to_string(),
        HourCycle::H12 => time.format("%I:%M").to_string(),
    }
}

/// Renders the date string, e.g. "WED, MAR 7". The day-of-month carries no
/// leading zero.
pub fn date_text(date: NaiveDate) -> String {
    let weekday = WEEKDAYS[date.weekday().num_days_from_sunday() as usize];
    let month = MONTHS[date.month0() as usize];

    format!("{}, {} {}", weekday, month, date.day())
}

//! Chronological-age resolution: whole and fractional ages in months, and the
//! mapping from an age to the standardized questionnaire intervals.

use super::domain::AsqInterval;
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};

/// Average month length used when converting between months and days.
pub const DAYS_PER_MONTH: f64 = 30.44;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Whole calendar months elapsed between `date_of_birth` and `today`.
///
/// The count drops by one when the monthly anniversary day has not yet been
/// reached in the current month, and is clamped to zero for future birth
/// dates. The reference date is injectable so callers control the clock.
pub fn age_in_months(date_of_birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut months = (today.year() - date_of_birth.year()) * 12
        + (today.month() as i32 - date_of_birth.month() as i32);
    if today.day() < date_of_birth.day() {
        months -= 1;
    }
    months.max(0) as u32
}

/// Fractional age in months, using the average month length.
pub fn precise_age_in_months(date_of_birth: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let elapsed = now.signed_duration_since(date_of_birth);
    let months = elapsed.num_seconds() as f64 / (DAYS_PER_MONTH * SECONDS_PER_DAY);
    months.max(0.0)
}

/// Midnight UTC for a calendar date, the reference instant used when only a
/// date is known.
pub fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    DateTime::from_naive_utc_and_offset(date.and_time(NaiveTime::MIN), Utc)
}

impl AsqInterval {
    /// The standardized interval closest to the given age.
    ///
    /// Ages under 2 months resolve to the 2-month questionnaire and ages of
    /// 60 months or more to the 60-month questionnaire. Between those, the
    /// nearest interval wins; an age exactly halfway between two intervals
    /// resolves to the older one, so a 3-month-old gets the 4-month form.
    pub fn nearest(age_in_months: f64) -> Self {
        if age_in_months < 2.0 {
            return AsqInterval::Month2;
        }
        if age_in_months >= 60.0 {
            return AsqInterval::Month60;
        }

        let mut closest = AsqInterval::ALL[0];
        let mut best = (age_in_months - f64::from(closest.months())).abs();
        for candidate in AsqInterval::ALL {
            let distance = (age_in_months - f64::from(candidate.months())).abs();
            if distance < best || (distance == best && candidate > closest) {
                best = distance;
                closest = candidate;
            }
        }
        closest
    }

    /// The smallest interval strictly above the given age, or the 60-month
    /// ceiling when none remains. Anticipates the upcoming questionnaire
    /// rather than the nearest match.
    pub fn next_after(age_in_months: f64) -> Self {
        AsqInterval::ALL
            .iter()
            .copied()
            .find(|interval| f64::from(interval.months()) > age_in_months)
            .unwrap_or(AsqInterval::Month60)
    }
}

/// Administration window around each interval's nominal age.
///
/// A questionnaire is considered valid to administer while the child's age,
/// expressed in days, sits within twice the half-window of the interval's
/// nominal age. Independent of which interval `nearest` would pick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdministrationWindow {
    pub half_window_days: f64,
}

impl Default for AdministrationWindow {
    fn default() -> Self {
        Self {
            half_window_days: 15.0,
        }
    }
}

impl AdministrationWindow {
    pub fn contains(self, age_in_months: f64, interval: AsqInterval) -> bool {
        let age_days = age_in_months * DAYS_PER_MONTH;
        let interval_days = f64::from(interval.months()) * DAYS_PER_MONTH;
        (age_days - interval_days).abs() <= self.half_window_days * 2.0
    }

    /// Every interval currently administrable at the given age. May be empty
    /// when the child sits between windows.
    pub fn available_intervals(self, age_in_months: f64) -> Vec<AsqInterval> {
        AsqInterval::ALL
            .iter()
            .copied()
            .filter(|interval| self.contains(age_in_months, *interval))
            .collect()
    }
}

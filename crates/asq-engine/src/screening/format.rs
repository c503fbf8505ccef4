//! Display helpers shared by the portal surfaces.

use super::domain::AsqInterval;

/// Human-readable age, e.g. "8 months", "1 year", "2 years, 3 months".
pub fn format_age(age_in_months: u32) -> String {
    if age_in_months < 12 {
        return format!("{} {}", age_in_months, plural(age_in_months, "month"));
    }

    let years = age_in_months / 12;
    let months = age_in_months % 12;

    if months == 0 {
        return format!("{} {}", years, plural(years, "year"));
    }

    format!(
        "{} {}, {} {}",
        years,
        plural(years, "year"),
        months,
        plural(months, "month")
    )
}

/// Questionnaire title as shown to parents, e.g. "8-Month ASQ-3".
pub fn questionnaire_title(interval: AsqInterval) -> String {
    format!("{}-Month ASQ-3", interval.months())
}

fn plural(count: u32, unit: &str) -> String {
    if count == 1 {
        unit.to_string()
    } else {
        format!("{unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_ages_under_a_year_in_months() {
        assert_eq!(format_age(0), "0 months");
        assert_eq!(format_age(1), "1 month");
        assert_eq!(format_age(8), "8 months");
    }

    #[test]
    fn formats_whole_and_mixed_years() {
        assert_eq!(format_age(12), "1 year");
        assert_eq!(format_age(24), "2 years");
        assert_eq!(format_age(27), "2 years, 3 months");
        assert_eq!(format_age(13), "1 year, 1 month");
    }

    #[test]
    fn titles_use_the_interval_month_count() {
        assert_eq!(questionnaire_title(AsqInterval::Month8), "8-Month ASQ-3");
        assert_eq!(questionnaire_title(AsqInterval::Month60), "60-Month ASQ-3");
    }
}

// Draw-date handling
//
// The feed serves "DD-MM" for draws in the last twelve months and only adds
// the year ("DD-MM-YYYY") for older archive entries. Draws are never listed
// ahead of their date, so a month/day in the future must belong to the
// previous year.

use chrono::{Datelike, NaiveDate};

/// A feed date split into components. Missing or malformed components parse
/// as zero rather than failing; a zeroed component sorts last among
/// descending dates, which is the harmless place for garbage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawDate {
    pub day: u32,
    pub month: u32,
    pub year: Option<i32>,
}

pub fn parse_draw_date(raw: &str) -> DrawDate {
    let mut parts = raw.split('-');
    let day = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
    let month = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
    let year = parts.next().and_then(|p| p.parse().ok());
    DrawDate { day, month, year }
}

impl DrawDate {
    /// The explicit year when present, otherwise inferred against `today`:
    /// on-or-before today's month/day means the current year, after it means
    /// last year.
    pub fn resolved_year(&self, today: NaiveDate) -> i32 {
        match self.year {
            Some(year) => year,
            None => {
                if (self.month, self.day) <= (today.month(), today.day()) {
                    today.year()
                } else {
                    today.year() - 1
                }
            }
        }
    }

    /// Sort key ordering most recent first
    pub fn descending_key(&self, today: NaiveDate) -> (i32, u32, u32) {
        (self.resolved_year(today), self.month, self.day)
    }
}

/// Display form with the year always present: "DD-MM" becomes
/// "DD-MM-YYYY" using the inferred year, already-complete dates pass through.
pub fn format_with_year(raw: &str, today: NaiveDate) -> String {
    if raw.split('-').count() >= 3 {
        return raw.to_string();
    }
    let date = parse_draw_date(raw);
    format!("{}-{}", raw, date.resolved_year(today))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn past_month_day_is_current_year() {
        let date = parse_draw_date("10-06");
        assert_eq!(date.resolved_year(today()), 2024);
    }

    #[test]
    fn future_month_day_is_previous_year() {
        let date = parse_draw_date("20-06");
        assert_eq!(date.resolved_year(today()), 2023);
        let date = parse_draw_date("01-12");
        assert_eq!(date.resolved_year(today()), 2023);
    }

    #[test]
    fn same_day_is_current_year() {
        let date = parse_draw_date("15-06");
        assert_eq!(date.resolved_year(today()), 2024);
    }

    #[test]
    fn explicit_year_wins() {
        let date = parse_draw_date("20-06-2019");
        assert_eq!(date.year, Some(2019));
        assert_eq!(date.resolved_year(today()), 2019);
    }

    #[test]
    fn formatting_appends_only_when_missing() {
        assert_eq!(format_with_year("10-06", today()), "10-06-2024");
        assert_eq!(format_with_year("20-06", today()), "20-06-2023");
        assert_eq!(format_with_year("20-06-2019", today()), "20-06-2019");
    }

    #[test]
    fn garbage_does_not_panic() {
        let date = parse_draw_date("quince de junio");
        assert_eq!(
            date,
            DrawDate {
                day: 0,
                month: 0,
                year: None
            }
        );
        // Zeroed month/day compares on-or-before any real date
        assert_eq!(date.resolved_year(today()), 2024);
    }
}

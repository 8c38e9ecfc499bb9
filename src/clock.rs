// Honduras wall clock
//
// The draw schedule runs on Honduras time (UTC-6, no DST), so the whole
// dashboard uses a constant offset instead of a timezone database.

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc};

/// Honduras is UTC-6 (CST) year-round.
const UTC_OFFSET_HOURS: i32 = 6;

/// Spanish month names for the banner date line
const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Current time shifted to the Honduras offset
pub fn local_now() -> DateTime<FixedOffset> {
    let offset =
        FixedOffset::west_opt(UTC_OFFSET_HOURS * 3600).expect("UTC-6 is a valid fixed offset");
    Utc::now().with_timezone(&offset)
}

/// Zero-padded HH:MM:SS for the clock display
pub fn format_clock(now: DateTime<FixedOffset>) -> String {
    format!("{:02}:{:02}:{:02}", now.hour(), now.minute(), now.second())
}

/// Long-form Spanish date, e.g. "15 de Junio de 2024"
pub fn format_long_date(now: DateTime<FixedOffset>) -> String {
    let month = MONTH_NAMES[now.month0() as usize];
    format!("{} de {} de {}", now.day(), month, now.year())
}

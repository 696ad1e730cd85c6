use chrono::{DateTime, Local, TimeZone};

/// Format used for registry dates, e.g. "Mar 2024" (lower-cased on output)
pub const MONTH_YEAR_FORMAT: &str = "%b %Y";

/// Format a timestamp as a lower-cased abbreviated month and year: "mar 2024"
pub fn format_month_year<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    timestamp.format(MONTH_YEAR_FORMAT).to_string().to_lowercase()
}

/// Current local month and year, used when a post has no recorded history
pub fn current_month_year() -> String {
    format_month_year(&Local::now())
}

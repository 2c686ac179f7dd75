use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses an ISO calendar date (`2024-03-18`).
pub fn parse_date(value: &str) -> crate::Result<Date> {
    Ok(Date::parse(value.trim(), ISO_DATE)?)
}

pub fn format_date(date: Date) -> String {
    date.format(ISO_DATE).unwrap_or_else(|_| date.to_string())
}

/// Parses an inclusive `[start, end]` range; both bounds are required and
/// `start` must not be after `end`.
pub fn parse_date_range(start: Option<&str>, end: Option<&str>) -> crate::Result<(Date, Date)> {
    let (Some(start), Some(end)) = (
        start.filter(|v| !v.trim().is_empty()),
        end.filter(|v| !v.trim().is_empty()),
    ) else {
        crate::user!("start_date and end_date are required");
    };

    let start = parse_date(start)?;
    let end = parse_date(end)?;

    if start > end {
        crate::user!("start_date must be on or before end_date");
    }

    Ok((start, end))
}

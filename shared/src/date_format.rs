use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

use crate::error::DateError;

/// Format produced by `<input type="date">`
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Parse a date picker value
pub fn parse_date_input(raw: &str) -> Result<NaiveDate, DateError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DateError::Empty);
    }
    NaiveDate::parse_from_str(trimmed, DATE_INPUT_FORMAT).map_err(|_| DateError::Unparseable {
        input: trimmed.to_string(),
    })
}

/// Reformat a date picker value for display, e.g. `1990-01-15` -> `15/Jan/1990`
///
/// The date is treated as a calendar date with no time zone, so it never
/// shifts by a day.
pub fn format_date_of_birth(raw: &str, display_format: &str) -> Result<String, DateError> {
    let date = parse_date_input(raw)?;
    let items: Vec<Item<'_>> = StrftimeItems::new(display_format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(DateError::InvalidFormat {
            format: display_format.to_string(),
        });
    }
    Ok(date.format_with_items(items.into_iter()).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISPLAY: &str = "%d/%b/%Y";

    #[test]
    fn test_format_date_of_birth() {
        assert_eq!(format_date_of_birth("1990-01-15", DISPLAY).unwrap(), "15/Jan/1990");
        assert_eq!(format_date_of_birth("2001-09-03", DISPLAY).unwrap(), "03/Sep/2001");
        assert_eq!(format_date_of_birth("2000-02-29", DISPLAY).unwrap(), "29/Feb/2000");
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(format_date_of_birth(" 1990-12-31 ", DISPLAY).unwrap(), "31/Dec/1990");
    }

    #[test]
    fn test_empty_and_invalid_dates() {
        assert_eq!(format_date_of_birth("", DISPLAY), Err(DateError::Empty));
        assert_eq!(format_date_of_birth("   ", DISPLAY), Err(DateError::Empty));
        assert!(matches!(
            format_date_of_birth("1999-02-29", DISPLAY),
            Err(DateError::Unparseable { .. })
        ));
        assert!(matches!(
            format_date_of_birth("15/01/1990", DISPLAY),
            Err(DateError::Unparseable { .. })
        ));
    }

    #[test]
    fn test_bad_display_format() {
        assert!(matches!(
            format_date_of_birth("1990-01-15", "%Q"),
            Err(DateError::InvalidFormat { .. })
        ));
    }
}

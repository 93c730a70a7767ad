use chrono::NaiveDate;

/// Wire format of booking dates (`CCYY-MM-DD`)
pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a calendar date the way the booking service expects it
pub fn format_api_date(date: NaiveDate) -> String {
    date.format(API_DATE_FORMAT).to_string()
}

/// Shape check only: four digits, dash, two digits, dash, two digits.
/// Does not check that the date exists on the calendar.
pub fn matches_api_date_pattern(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parse a `CCYY-MM-DD` string into a calendar date
pub fn parse_api_date(value: &str) -> Option<NaiveDate> {
    if !matches_api_date_pattern(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, API_DATE_FORMAT).ok()
}

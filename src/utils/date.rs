use chrono::Local;

use crate::consts::DATE_FORMAT;

/// Today's local date as `YYYY-MM-DD`, used when no session date is given
pub(crate) fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn today_uses_date_format() {
        let s = today();
        assert!(NaiveDate::parse_from_str(&s, DATE_FORMAT).is_ok(), "got {s}");
    }
}

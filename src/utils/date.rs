use crate::errors::ApiError;
use chrono::NaiveDate;

const APPEARANCE_DATE_FORMAT: &str = "%d-%m-%Y";

/// Parses an appearance date written `DD-MM-YYYY`.
///
/// The returned [`NaiveDate`] orders by calendar time, which is what both the
/// latest-appearance pick and the history sort compare on. Anything else,
/// including impossible days such as `31-02-2020`, is a
/// [`ApiError::MalformedDate`].
pub fn parse_appearance_date(value: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(value, APPEARANCE_DATE_FORMAT).map_err(|source| {
        ApiError::MalformedDate {
            value: value.to_string(),
            source,
        }
    })
}

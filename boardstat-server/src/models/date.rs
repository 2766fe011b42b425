//! Game date parsing
//!
//! Clients send dates either as ISO `YYYY-MM-DD` or as `DD/MM/YYYY`.
//! Both normalize to a `NaiveDate`; an empty string means "no date".

use chrono::NaiveDate;

use super::ValidationError;

/// Accepted input formats, tried in order, each with the accessor for
/// its year segment.
const DATE_FORMATS: [(&str, fn(&str) -> Option<&str>); 2] =
    [("%Y-%m-%d", iso_year), ("%d/%m/%Y", dmy_year)];

/// Reason reported when no format matches.
const INVALID_DATE: &str = "invalid date format, expected YYYY-MM-DD or DD/MM/YYYY";

/// Parse an optional game date.
///
/// `None` and `""` map to `Ok(None)`. Anything else must match one of
/// [`DATE_FORMATS`] exactly (no surrounding whitespace).
///
/// # Example
/// ```
/// use boardstat_server::models::parse_game_date;
///
/// let iso = parse_game_date(Some("2023-05-01")).unwrap();
/// let dmy = parse_game_date(Some("01/05/2023")).unwrap();
/// assert_eq!(iso, dmy);
/// assert_eq!(parse_game_date(Some("")).unwrap(), None);
/// assert!(parse_game_date(Some("05-2023-01")).is_err());
/// ```
pub fn parse_game_date(value: Option<&str>) -> Result<Option<NaiveDate>, ValidationError> {
    let raw = match value {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };

    for (format, year_of) in DATE_FORMATS {
        match NaiveDate::parse_from_str(raw, format) {
            // chrono's %Y takes any digit count and a sign; only YYYY is accepted
            Ok(date) if !year_of(raw).is_some_and(is_four_digit_year) => {
                tracing::debug!(value = raw, format, %date, "year is not four digits");
            }
            Ok(date) => {
                tracing::debug!(value = raw, format, %date, "parsed game date");
                return Ok(Some(date));
            }
            Err(err) => {
                tracing::debug!(value = raw, format, error = %err, "date format did not match");
            }
        }
    }

    tracing::debug!(value = raw, "rejected game date");
    Err(ValidationError::InvalidFormat {
        field: "date",
        reason: INVALID_DATE,
    })
}

fn iso_year(raw: &str) -> Option<&str> {
    raw.split('-').next()
}

fn dmy_year(raw: &str) -> Option<&str> {
    raw.rsplit('/').next()
}

fn is_four_digit_year(year: &str) -> bool {
    year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit())
}

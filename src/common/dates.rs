// src/common/dates.rs

use chrono::NaiveDate;
use serde::Deserialize;

use crate::common::error::AppError;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| AppError::InvalidInput("Invalid date format. Use YYYY-MM-DD.".to_string()))
}

// ?start_date=2024-07-10&end_date=2024-07-12
// Os campos chegam como texto para podermos distinguir "ausente" de "mal formatado".
#[derive(Debug, Default, Deserialize)]
pub struct DateRangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl DateRangeQuery {
    pub fn parse(&self) -> Result<(NaiveDate, NaiveDate), AppError> {
        match (self.start_date.as_deref(), self.end_date.as_deref()) {
            (Some(start), Some(end)) => Ok((parse_date(start)?, parse_date(end)?)),
            _ => Err(AppError::InvalidInput("Date range not provided".to_string())),
        }
    }
}

// ?stay_date=2024-07-10
#[derive(Debug, Default, Deserialize)]
pub struct StayDateQuery {
    pub stay_date: Option<String>,
}

impl StayDateQuery {
    pub fn parse(&self) -> Result<NaiveDate, AppError> {
        let raw = self
            .stay_date
            .as_deref()
            .ok_or_else(|| AppError::InvalidInput("Stay date not provided".to_string()))?;
        parse_date(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: Option<&str>, end: Option<&str>) -> DateRangeQuery {
        DateRangeQuery {
            start_date: start.map(str::to_string),
            end_date: end.map(str::to_string),
        }
    }

    fn message(err: AppError) -> String {
        err.to_string()
    }

    #[test]
    fn parses_iso_calendar_dates() {
        let (start, end) = range(Some("2024-07-10"), Some("2024-07-12")).parse().unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 7, 10).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 7, 12).unwrap());
    }

    #[test]
    fn reversed_range_is_not_an_error_here() {
        assert!(range(Some("2024-07-12"), Some("2024-07-10")).parse().is_ok());
    }

    #[test]
    fn missing_bound_is_reported() {
        for query in [range(None, Some("2024-07-12")), range(Some("2024-07-10"), None), range(None, None)] {
            assert_eq!(message(query.parse().unwrap_err()), "Date range not provided");
        }
    }

    #[test]
    fn malformed_dates_are_rejected() {
        for bad in ["10/07/2024", "2024-13-01", "2024-02-30", "tomorrow"] {
            let err = range(Some(bad), Some("2024-07-12")).parse().unwrap_err();
            assert_eq!(message(err), "Invalid date format. Use YYYY-MM-DD.");
        }
    }

    #[test]
    fn stay_date_is_required() {
        let err = StayDateQuery::default().parse().unwrap_err();
        assert_eq!(message(err), "Stay date not provided");

        let ok = StayDateQuery { stay_date: Some("2024-07-10".into()) }.parse().unwrap();
        assert_eq!(ok, NaiveDate::from_ymd_opt(2024, 7, 10).unwrap());
    }
}

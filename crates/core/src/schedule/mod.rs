//! Due-date arithmetic with time-zone normalization.
//!
//! The store records posted timestamps as naive UTC. Day arithmetic in
//! UTC is wrong for books kept in another zone: an invoice posted late
//! in the evening local time lands on the previous UTC day, shifting
//! the deadline. The timestamp is therefore normalized to the
//! configured zone before due-days are added.

use chrono::{DateTime, NaiveDateTime, TimeDelta};
use chrono_tz::Tz;
use thiserror::Error;

/// Errors raised by due-date computation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// The payment term's due-days value is outside the representable range.
    #[error("Due-days value out of range: {0}")]
    DueDaysOutOfRange(i32),
}

/// Computes the payment deadline for a posted invoice.
///
/// Interprets `posted` as UTC, converts it to `tz`, then adds the
/// payment term's `duedays` calendar days.
///
/// # Errors
///
/// Returns `ScheduleError::DueDaysOutOfRange` if adding `duedays`
/// cannot be represented.
pub fn due_date(posted: NaiveDateTime, duedays: i32, tz: Tz) -> Result<DateTime<Tz>, ScheduleError> {
    let local = posted.and_utc().with_timezone(&tz);
    let offset = TimeDelta::try_days(i64::from(duedays))
        .ok_or(ScheduleError::DueDaysOutOfRange(duedays))?;
    local
        .checked_add_signed(offset)
        .ok_or(ScheduleError::DueDaysOutOfRange(duedays))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn posted(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_fourteen_day_term() {
        // Posted 2020-01-01, 14 due-days: deadline 2020-01-15.
        let due = due_date(posted(2020, 1, 1, 12, 0), 14, chrono_tz::UTC).unwrap();
        assert_eq!(due.date_naive(), NaiveDate::from_ymd_opt(2020, 1, 15).unwrap());
    }

    #[test]
    fn test_zone_normalization_shifts_the_day() {
        // 23:30 UTC on Dec 31 is already Jan 1 in Oslo, so the local
        // deadline is Jan 15, not Jan 14.
        let ts = posted(2019, 12, 31, 23, 30);
        let oslo = due_date(ts, 14, chrono_tz::Europe::Oslo).unwrap();
        assert_eq!(oslo.date_naive(), NaiveDate::from_ymd_opt(2020, 1, 15).unwrap());
        let utc = due_date(ts, 14, chrono_tz::UTC).unwrap();
        assert_eq!(utc.date_naive(), NaiveDate::from_ymd_opt(2020, 1, 14).unwrap());
    }

    #[test]
    fn test_zero_due_days() {
        let due = due_date(posted(2020, 6, 1, 8, 0), 0, chrono_tz::UTC).unwrap();
        assert_eq!(due.date_naive(), NaiveDate::from_ymd_opt(2020, 6, 1).unwrap());
    }

    #[test]
    fn test_absurd_due_days_rejected() {
        let result = due_date(posted(2020, 1, 1, 0, 0), i32::MAX, chrono_tz::UTC);
        assert_eq!(result, Err(ScheduleError::DueDaysOutOfRange(i32::MAX)));
    }
}

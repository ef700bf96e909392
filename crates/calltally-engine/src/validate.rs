//! Row validation rules applied while loading.
//!
//! The two entities disagree on what "empty" means: user names are trimmed
//! before the check, call log fields are checked as read. Both rules are
//! kept as-is.

use calltally_index::{NewCallLog, NewUser};
use csv::StringRecord;
use std::fmt;

const USER_FIELDS: usize = 2;
const CALL_LOG_FIELDS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRejection {
    /// Row did not have exactly two fields.
    FieldCount(usize),
    /// A name was empty after trimming.
    BlankField,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallLogRejection {
    /// Row did not have exactly five fields.
    FieldCount(usize),
    /// At least one field was the empty string.
    EmptyField,
    /// A numeric column did not hold a 64-bit integer.
    NotInteger { column: &'static str },
}

impl fmt::Display for UserRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRejection::FieldCount(n) => {
                write!(f, "expected {} fields, found {}", USER_FIELDS, n)
            }
            UserRejection::BlankField => write!(f, "blank name field"),
        }
    }
}

impl fmt::Display for CallLogRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallLogRejection::FieldCount(n) => {
                write!(f, "expected {} fields, found {}", CALL_LOG_FIELDS, n)
            }
            CallLogRejection::EmptyField => write!(f, "empty field"),
            CallLogRejection::NotInteger { column } => write!(f, "{} is not an integer", column),
        }
    }
}

/// Accept a `firstName,lastName` row, trimming both names.
pub fn validate_user(record: &StringRecord) -> Result<NewUser, UserRejection> {
    if record.len() != USER_FIELDS {
        return Err(UserRejection::FieldCount(record.len()));
    }

    let first_name = record[0].trim();
    let last_name = record[1].trim();
    if first_name.is_empty() || last_name.is_empty() {
        return Err(UserRejection::BlankField);
    }

    Ok(NewUser {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    })
}

/// Accept a `phoneNumber,startTime,endTime,direction,userId` row.
///
/// Text fields are stored untrimmed.
pub fn validate_call_log(record: &StringRecord) -> Result<NewCallLog, CallLogRejection> {
    if record.len() != CALL_LOG_FIELDS {
        return Err(CallLogRejection::FieldCount(record.len()));
    }

    if record.iter().any(str::is_empty) {
        return Err(CallLogRejection::EmptyField);
    }

    Ok(NewCallLog {
        phone_number: record[0].to_string(),
        start_time: parse_integer(&record[1], "startTime")?,
        end_time: parse_integer(&record[2], "endTime")?,
        direction: record[3].to_string(),
        user_id: parse_integer(&record[4], "userId")?,
    })
}

// Surrounding whitespace and a leading sign are accepted, e.g. " +10 ".
fn parse_integer(value: &str, column: &'static str) -> Result<i64, CallLogRejection> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| CallLogRejection::NotInteger { column })
}

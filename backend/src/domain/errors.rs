use thiserror::Error;

/// Errors raised by calendar domain operations
#[derive(Debug, Error, PartialEq)]
pub enum CalendarError {
    #[error("Year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),

    #[error("Month index {month} from year {year} rolls past the supported calendar range")]
    MonthOutOfRange { year: i32, month: i64 },

    #[error("Invalid 'today' date '{0}'. Expected YYYY-MM-DD")]
    InvalidToday(String),

    #[error("Expected 7 weekday labels, got {0}")]
    InvalidWeekdayLabels(usize),
}

pub type CalendarResult<T> = Result<T, CalendarError>;

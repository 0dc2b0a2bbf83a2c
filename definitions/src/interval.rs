use num_derive::FromPrimitive;

/// Values for `SQL_DESC_DATETIME_INTERVAL_CODE`, distinguishing the concrete datetime/interval
/// subtype underneath the verbose `SQL_DATETIME`/`SQL_INTERVAL` SQL data types.
#[allow(non_camel_case_types)]
#[repr(i16)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, FromPrimitive)]
pub enum IntervalCode {
    SQL_CODE_DATE = 1,
    SQL_CODE_TIME = 2,
    SQL_CODE_TIMESTAMP = 3,
    SQL_CODE_YEAR = 4,
    SQL_CODE_MONTH = 5,
    SQL_CODE_DAY = 6,
    SQL_CODE_HOUR = 7,
    SQL_CODE_MINUTE = 8,
    SQL_CODE_SECOND = 9,
    SQL_CODE_YEAR_TO_MONTH = 10,
    SQL_CODE_DAY_TO_HOUR = 11,
    SQL_CODE_DAY_TO_MINUTE = 12,
    SQL_CODE_DAY_TO_SECOND = 13,
    SQL_CODE_HOUR_TO_MINUTE = 14,
    SQL_CODE_HOUR_TO_SECOND = 15,
    SQL_CODE_MINUTE_TO_SECOND = 16,
}

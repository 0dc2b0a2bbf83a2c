use crate::sqlstate::sql_state;
use crate::wire::WireError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Wire(#[from] WireError),
    #[error("invalid connection string: {0}")]
    InvalidUri(#[from] crate::odbc_uri::UriError),
    #[error("restricted data type: cannot convert {0} to {1}")]
    RestrictedDataType(&'static str, &'static str),
    #[error("integral truncation: {0} does not fit in the target type")]
    IntegralTruncation(String),
    #[error("fractional truncation: {0} has a non-zero fractional part")]
    FractionalTruncation(String),
    #[error("invalid character value for cast to {0}")]
    InvalidCharacterValue(&'static str),
    #[error("invalid column index {0}")]
    InvalidColumnIndex(u16),
    #[error("invalid descriptor index {0}")]
    InvalidDescriptorIndex(u16),
    #[error("no resultset for statement")]
    NoResultSet,
    #[error("function sequence error")]
    FunctionSequenceError,
    #[error("duplicate cursor name {0}")]
    DuplicateCursorName(String),
    #[error("general error: {0}")]
    General(String),
}

impl Error {
    /// Resolves to an ODBC 3.x SQLSTATE. Only reaches the `HY000` fallback
    /// for conditions the wire client genuinely did not classify -- unlike
    /// a driver that collapses every error to `HY000` regardless of cause.
    pub fn sql_state(&self) -> &'static str {
        match self {
            Error::Wire(e) => sql_state(e.kind),
            Error::InvalidUri(_) => "HY000",
            Error::RestrictedDataType(..) => "07006",
            Error::IntegralTruncation(_) => "22003",
            Error::FractionalTruncation(_) => "01S07",
            Error::InvalidCharacterValue(_) => "22018",
            Error::InvalidColumnIndex(_) => "07009",
            Error::InvalidDescriptorIndex(_) => "07009",
            Error::NoResultSet => "24000",
            Error::FunctionSequenceError => "HY010",
            Error::DuplicateCursorName(_) => "3C000",
            Error::General(_) => "HY000",
        }
    }

    /// Server- or transport-native error code, when the underlying cause
    /// carries one.
    pub fn native_code(&self) -> i32 {
        match self {
            Error::Wire(e) => e.native_code.unwrap_or(0),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod unit {
    use super::*;
    use crate::wire::WireErrorKind;

    #[test]
    fn wire_timeout_maps_to_hyt00() {
        let err = Error::Wire(WireError {
            native_code: None,
            message: "timed out".to_string(),
            kind: WireErrorKind::Timeout,
        });
        assert_eq!(err.sql_state(), "HYT00");
    }

    #[test]
    fn duplicate_cursor_name_is_3c000() {
        let err = Error::DuplicateCursorName("cur1".to_string());
        assert_eq!(err.sql_state(), "3C000");
    }

    #[test]
    fn restricted_data_type_is_07006() {
        let err = Error::RestrictedDataType("Binary", "Double");
        assert_eq!(err.sql_state(), "07006");
    }
}

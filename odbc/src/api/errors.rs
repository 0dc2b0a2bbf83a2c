use constants::VENDOR_IDENTIFIER;

// SQL states. Most of these mirror the full table in `odbc_driver_core::sqlstate`;
// they're duplicated locally as `&str` constants because `ODBCError::get_sql_state`
// needs to return a `&'static str` without reaching into that crate's row-lookup API
// for a single fixed string per variant.
pub const HYC00: &str = "HYC00";
pub const HY024: &str = "HY024";
pub const HY092: &str = "HY092";
pub const _01S02: &str = "01S02";
pub const _01004: &str = "01004";
pub const _22003: &str = "22003";
pub const _22007: &str = "22007";
pub const _22008: &str = "22008";
pub const _22018: &str = "22018";
pub const IM007: &str = "IM007";
pub const HY091: &str = "HY091";
pub const _22002: &str = "22002";
pub const _01S07: &str = "01S07";
pub const _07006: &str = "07006";
pub const HY010: &str = "HY010";
pub const _08003: &str = "08003";
pub const _07009: &str = "07009";
pub const HY106: &str = "HY106";

#[derive(Debug)]
pub enum ODBCError {
    Unimplemented(&'static str),
    InvalidAttrValue(&'static str),
    OptionValueChanged(&'static str, &'static str),
    InvalidHandleType(&'static str),
    MissingDriverOrDSNProperty,
    UnsupportedDriverConnectOption(String),
    OutStringTruncated(usize),
    UnsupportedFieldDescriptor(String),
    UnimplementedDataType(String),
    IndicatorVariableRequiredButNotSupplied,
    InvalidDatetimeFormat,
    InvalidCharacterValue(&'static str),
    IntegralTruncation(String),
    FractionalTruncation(String),
    FractionalSecondsTruncation(String),
    SecondsTruncation(String),
    TimeTruncation(String),
    RestrictedDataType(&'static str, &'static str),
    /// `SQLExecute`/`SQLExecDirect` issued against a connection that was
    /// never opened or has since been disconnected.
    ConnectionNotOpen,
    /// `SQLExecute` called without a preceding `SQLPrepare`.
    StatementNotPrepared,
    /// `SQLFetch`/`SQLGetData`/`SQLBindCol` called before `SQLExecDirect`/
    /// `SQLExecute` produced a result set.
    StatementNotExecuted,
    /// A descriptor record index outside `1..=SQL_DESC_COUNT` (or an
    /// explicit access to record 0 where bookmarks are off).
    InvalidDescriptorIndex(i16),
    /// `SQLFetchScroll` orientation not supported by the statement's
    /// current `SQL_ATTR_CURSOR_TYPE`.
    FetchTypeOutOfRange,
    /// `SQLParamData`/`SQLPutData` called out of the DAE sequence (e.g.
    /// `SQLPutData` with no parameter currently awaiting data).
    FunctionSequenceError,
    /// A connection, query, or catalog error surfaced by the core crate --
    /// covers everything from a failed `SQLDriverConnect` to a wire-level
    /// fetch error, without the API layer needing its own copy of the
    /// SQLSTATE/message mapping `odbc_driver_core::Error` already owns.
    Core(odbc_driver_core::Error),
}

pub type Result<T> = std::result::Result<T, ODBCError>;

impl From<odbc_driver_core::Error> for ODBCError {
    fn from(e: odbc_driver_core::Error) -> Self {
        ODBCError::Core(e)
    }
}

impl From<odbc_driver_core::UriError> for ODBCError {
    fn from(e: odbc_driver_core::UriError) -> Self {
        ODBCError::Core(odbc_driver_core::Error::from(e))
    }
}

impl From<odbc_driver_core::WireError> for ODBCError {
    fn from(e: odbc_driver_core::WireError) -> Self {
        ODBCError::Core(odbc_driver_core::Error::from(e))
    }
}

impl ODBCError {
    pub fn get_sql_state(&self) -> &str {
        match self {
            ODBCError::Unimplemented(_) => HYC00,
            ODBCError::InvalidAttrValue(_) => HY024,
            ODBCError::OptionValueChanged(_, _) => _01S02,
            ODBCError::InvalidHandleType(_) => HY092,
            ODBCError::MissingDriverOrDSNProperty => IM007,
            ODBCError::UnsupportedDriverConnectOption(_) => HYC00,
            ODBCError::OutStringTruncated(_) => _01004,
            ODBCError::UnsupportedFieldDescriptor(_) => HY091,
            ODBCError::UnimplementedDataType(_) => HYC00,
            ODBCError::IndicatorVariableRequiredButNotSupplied => _22002,
            ODBCError::InvalidDatetimeFormat => _22007,
            ODBCError::InvalidCharacterValue(_) => _22018,
            ODBCError::IntegralTruncation(_) => _22003,
            ODBCError::FractionalTruncation(_) => _01S07,
            ODBCError::FractionalSecondsTruncation(_) => _01S07,
            ODBCError::SecondsTruncation(_) => _01S07,
            ODBCError::TimeTruncation(_) => _22008,
            ODBCError::RestrictedDataType(_, _) => _07006,
            ODBCError::ConnectionNotOpen => _08003,
            ODBCError::StatementNotPrepared
            | ODBCError::StatementNotExecuted
            | ODBCError::FunctionSequenceError => HY010,
            ODBCError::InvalidDescriptorIndex(_) => _07009,
            ODBCError::FetchTypeOutOfRange => HY106,
            ODBCError::Core(e) => e.sql_state(),
        }
    }

    pub fn get_error_message(&self) -> String {
        match self {
            ODBCError::Unimplemented(fn_name) => format!(
                "[{VENDOR_IDENTIFIER}][API] The feature {fn_name} is not implemented"
            ),
            ODBCError::InvalidAttrValue(attr) => format!(
                "[{VENDOR_IDENTIFIER}][API] Invalid value for attribute {attr}"
            ),
            ODBCError::OptionValueChanged(attr, value) => format!(
                "[{VENDOR_IDENTIFIER}][API] Invalid value for attribute {attr}, changed to {value}"
            ),
            ODBCError::InvalidHandleType(msg) => {
                format!("[{VENDOR_IDENTIFIER}][API] {msg}")
            }
            ODBCError::MissingDriverOrDSNProperty => format!(
                "[{VENDOR_IDENTIFIER}][API] Missing property \"Driver\" or \"DSN\" in connection string"
            ),
            ODBCError::UnsupportedDriverConnectOption(opt) => format!(
                "[{VENDOR_IDENTIFIER}][API] The driver connect option {opt} is not supported"
            ),
            ODBCError::OutStringTruncated(len) => format!(
                "[{VENDOR_IDENTIFIER}][API] The buffer was too small for the result; truncated to {len} characters"
            ),
            ODBCError::UnsupportedFieldDescriptor(desc) => format!(
                "[{VENDOR_IDENTIFIER}][API] Unsupported field descriptor: {desc}"
            ),
            ODBCError::UnimplementedDataType(ty) => format!(
                "[{VENDOR_IDENTIFIER}][API] Unsupported data type: {ty}"
            ),
            ODBCError::IndicatorVariableRequiredButNotSupplied => format!(
                "[{VENDOR_IDENTIFIER}][API] Indicator variable required but not supplied"
            ),
            ODBCError::InvalidDatetimeFormat => format!(
                "[{VENDOR_IDENTIFIER}][API] Invalid datetime format"
            ),
            ODBCError::InvalidCharacterValue(ty) => format!(
                "[{VENDOR_IDENTIFIER}][API] Invalid character value for cast to {ty}"
            ),
            ODBCError::IntegralTruncation(value) => format!(
                "[{VENDOR_IDENTIFIER}][API] Integral truncation occurred on conversion of {value}"
            ),
            ODBCError::FractionalTruncation(value) => format!(
                "[{VENDOR_IDENTIFIER}][API] Fractional truncation occurred on conversion of {value}"
            ),
            ODBCError::FractionalSecondsTruncation(value) => format!(
                "[{VENDOR_IDENTIFIER}][API] Fractional seconds truncation occurred on conversion of {value}"
            ),
            ODBCError::SecondsTruncation(value) => format!(
                "[{VENDOR_IDENTIFIER}][API] Seconds truncation occurred on conversion of {value}"
            ),
            ODBCError::TimeTruncation(value) => format!(
                "[{VENDOR_IDENTIFIER}][API] Time information truncation occurred on conversion of {value}"
            ),
            ODBCError::RestrictedDataType(from, to) => format!(
                "[{VENDOR_IDENTIFIER}][API] Restricted data type attribute violation: cannot convert {from} to {to}"
            ),
            ODBCError::ConnectionNotOpen => format!(
                "[{VENDOR_IDENTIFIER}][API] Connection is not open"
            ),
            ODBCError::StatementNotPrepared => format!(
                "[{VENDOR_IDENTIFIER}][API] Statement is not prepared"
            ),
            ODBCError::StatementNotExecuted => format!(
                "[{VENDOR_IDENTIFIER}][API] Statement has not been executed"
            ),
            ODBCError::InvalidDescriptorIndex(idx) => format!(
                "[{VENDOR_IDENTIFIER}][API] Invalid descriptor index {idx}"
            ),
            ODBCError::FetchTypeOutOfRange => format!(
                "[{VENDOR_IDENTIFIER}][API] Fetch type out of range for the statement's cursor type"
            ),
            ODBCError::FunctionSequenceError => format!(
                "[{VENDOR_IDENTIFIER}][API] Function sequence error"
            ),
            ODBCError::Core(e) => format!("[{VENDOR_IDENTIFIER}][API] {e}"),
        }
    }

    pub fn get_native_err_code(&self) -> i32 {
        match self {
            // None of these interact with the dispatcher's wire client, so
            // there's no native error code to propagate.
            ODBCError::Unimplemented(_)
            | ODBCError::InvalidAttrValue(_)
            | ODBCError::OptionValueChanged(_, _)
            | ODBCError::InvalidHandleType(_)
            | ODBCError::MissingDriverOrDSNProperty
            | ODBCError::UnsupportedDriverConnectOption(_)
            | ODBCError::OutStringTruncated(_)
            | ODBCError::UnsupportedFieldDescriptor(_)
            | ODBCError::UnimplementedDataType(_)
            | ODBCError::IndicatorVariableRequiredButNotSupplied
            | ODBCError::InvalidDatetimeFormat
            | ODBCError::InvalidCharacterValue(_)
            | ODBCError::IntegralTruncation(_)
            | ODBCError::FractionalTruncation(_)
            | ODBCError::FractionalSecondsTruncation(_)
            | ODBCError::SecondsTruncation(_)
            | ODBCError::TimeTruncation(_)
            | ODBCError::RestrictedDataType(_, _)
            | ODBCError::ConnectionNotOpen
            | ODBCError::StatementNotPrepared
            | ODBCError::StatementNotExecuted
            | ODBCError::InvalidDescriptorIndex(_)
            | ODBCError::FetchTypeOutOfRange
            | ODBCError::FunctionSequenceError => 0,
            ODBCError::Core(e) => e.native_code(),
        }
    }
}

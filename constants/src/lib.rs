pub const VENDOR_IDENTIFIER: &str = "WireODBC";
pub const DRIVER_NAME: &str = "Wire ODBC Driver";

/// Name of the environment variable consulted as a last-resort source of
/// connection-string attributes, when neither the connection string nor a
/// named DSN supplies a given key.
pub const CONNECTION_ENV_VAR: &str = "WIRE_ODBC_CONNECTION";

// SQL states in frequent use directly by name in the dispatcher. The full
// ~120-row canonical table (with ODBC 2.x equivalents) lives in
// `odbc_driver_core::sqlstate`; these constants exist for call sites that
// only ever need the ODBC 3.x string for one specific, well-known condition.
pub const NOT_IMPLEMENTED: &str = "HYC00";
pub const TIMEOUT_EXPIRED: &str = "HYT00";
pub const GENERAL_ERROR: &str = "HY000";
pub const INVALID_ATTR_IDENTIFIER: &str = "HY092";
pub const INVALID_ATTR_VALUE: &str = "HY024";
pub const NO_DSN_OR_DRIVER: &str = "IM007";
pub const RIGHT_TRUNCATED: &str = "01004";
pub const OPTION_CHANGED: &str = "01S02";
pub const UNABLE_TO_CONNECT: &str = "08001";
pub const INVALID_DESCRIPTOR_INDEX: &str = "07009";
pub const INVALID_CURSOR_STATE: &str = "24000";
pub const FUNCTION_SEQUENCE_ERROR: &str = "HY010";
pub const UNSUPPORTED_FIELD_DESCRIPTOR: &str = "HY091";
pub const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";
pub const RESTRICTED_DATA_TYPE: &str = "07006";
pub const INVALID_CHARACTER_VALUE: &str = "22018";
pub const DUPLICATE_CURSOR_NAME: &str = "3C000";
pub const INVALID_CURSOR_NAME: &str = "34000";
pub const INVALID_TRANSACTION_STATE: &str = "25000";
pub const SERIALIZATION_FAILURE: &str = "40001";
pub const INTEGRITY_CONSTRAINT_VIOLATION: &str = "23000";
pub const CONNECTION_DOES_NOT_EXIST: &str = "08003";
pub const CONNECTION_FAILURE: &str = "08S01";
pub const INVALID_AUTH_SPEC: &str = "28000";
pub const SYNTAX_ERROR_OR_ACCESS_VIOLATION: &str = "42000";
pub const DATA_EXCEPTION: &str = "22000";
pub const GENERAL_WARNING: &str = "01000";
pub const STILL_EXECUTING: &str = "HY000";

pub const SQL_ALL_TABLE_TYPES: &str = "%";

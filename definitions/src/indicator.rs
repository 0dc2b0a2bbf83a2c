use crate::Len;

/// Written to the indicator/length buffer of a column or parameter to mean "the value is NULL".
pub const SQL_NULL_DATA: Len = -1;
/// The driver cannot determine the total octet length in advance (used while streaming data with
/// `SQLGetData`).
pub const SQL_NO_TOTAL: Len = -4;
/// The application will supply the parameter value later, via `SQLParamData`/`SQLPutData`.
pub const SQL_DATA_AT_EXEC: Len = -2;
/// Added to a known length to request that the value be supplied at execution time.
pub const SQL_LEN_DATA_AT_EXEC_OFFSET: Len = -100;

pub fn sql_len_data_at_exec(length: Len) -> Len {
    SQL_LEN_DATA_AT_EXEC_OFFSET - length
}

pub fn is_data_at_exec(indicator: Len) -> bool {
    indicator == SQL_DATA_AT_EXEC || indicator <= SQL_LEN_DATA_AT_EXEC_OFFSET
}

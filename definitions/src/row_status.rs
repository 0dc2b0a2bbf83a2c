use crate::SmallInt;

pub const SQL_ROW_SUCCESS: SmallInt = 0;
pub const SQL_ROW_SUCCESS_WITH_INFO: SmallInt = 1;
pub const SQL_ROW_ERROR: SmallInt = 2;
pub const SQL_ROW_NOROW: SmallInt = 3;

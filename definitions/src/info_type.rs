use num_derive::FromPrimitive;

/// `InfoType` argument to `SQLGetInfo`.
#[allow(non_camel_case_types)]
#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, FromPrimitive)]
pub enum InfoType {
    SQL_MAX_DRIVER_CONNECTIONS = 0,
    SQL_MAX_CONCURRENT_ACTIVITIES = 1,
    SQL_DATA_SOURCE_NAME = 2,
    SQL_DRIVER_HDBC = 3,
    SQL_DRIVER_HENV = 4,
    SQL_DRIVER_HSTMT = 5,
    SQL_DRIVER_NAME = 6,
    SQL_DRIVER_VER = 7,
    SQL_ODBC_API_CONFORMANCE = 9,
    SQL_DATA_SOURCE_READ_ONLY = 25,
    SQL_DEFAULT_TXN_ISOLATION = 26,
    SQL_IDENTIFIER_CASE = 28,
    SQL_IDENTIFIER_QUOTE_CHAR = 29,
    SQL_MAX_COLUMN_NAME_LEN = 30,
    SQL_MAX_CURSOR_NAME_LEN = 31,
    SQL_MAX_SCHEMA_NAME_LEN = 32,
    SQL_MAX_CATALOG_NAME_LEN = 34,
    SQL_MAX_TABLE_NAME_LEN = 35,
    SQL_SCROLL_CONCURRENCY = 43,
    SQL_TXN_CAPABLE = 46,
    SQL_USER_NAME = 47,
    SQL_TXN_ISOLATION_OPTION = 72,
    SQL_INTEGRITY = 73,
    SQL_GETDATA_EXTENSIONS = 81,
    SQL_NULL_COLLATION = 85,
    SQL_ALTER_TABLE = 86,
    SQL_ODBC_SAG_CLI_CONFORMANCE = 12,
    SQL_CATALOG_NAME_SEPARATOR = 41,
    SQL_CATALOG_TERM = 42,
    SQL_SCHEMA_TERM = 39,
    SQL_TABLE_TERM = 45,
    SQL_NEED_LONG_DATA_LEN = 111,
    SQL_MAX_COLUMNS_IN_TABLE = 114,
    SQL_MAX_COLUMNS_IN_SELECT = 100,
    SQL_TIMEDATE_ADD_INTERVALS = 109,
    SQL_TIMEDATE_DIFF_INTERVALS = 110,
    SQL_MAX_IDENTIFIER_LEN = 10005,
    SQL_SQL_CONFORMANCE = 118,
    SQL_KEYWORDS = 89,
    SQL_SPECIAL_CHARACTERS = 94,
    SQL_CONVERT_FUNCTIONS = 48,
    SQL_NUMERIC_FUNCTIONS = 49,
    SQL_STRING_FUNCTIONS = 50,
    SQL_SYSTEM_FUNCTIONS = 51,
    SQL_TIMEDATE_FUNCTIONS = 52,
    SQL_AGGREGATE_FUNCTIONS = 169,
    SQL_SQL92_PREDICATES = 160,
    SQL_SQL92_RELATIONAL_JOIN_OPERATORS = 161,
    SQL_CATALOG_USAGE = 98,
    SQL_DATABASE_NAME = 16,
    SQL_SERVER_NAME = 13,
    SQL_SEARCH_PATTERN_ESCAPE = 14,
    SQL_DBMS_NAME = 17,
    SQL_DBMS_VER = 18,
    SQL_ACCESSIBLE_TABLES = 19,
    SQL_ACCESSIBLE_PROCEDURES = 20,
    SQL_CURSOR_COMMIT_BEHAVIOR = 23,
    SQL_CURSOR_ROLLBACK_BEHAVIOR = 24,
    SQL_CONCAT_NULL_BEHAVIOR = 22,
    SQL_ORDER_BY_COLUMNS_IN_SELECT = 90,
    SQL_PROCEDURES = 21,
    SQL_EXPRESSIONS_IN_ORDERBY = 27,
    SQL_OUTER_JOINS = 38,
    SQL_QUOTED_IDENTIFIER_CASE = 93,
    SQL_COLUMN_ALIAS = 87,
    SQL_GROUP_BY = 88,
    SQL_MAX_STATEMENT_LEN = 105,
    SQL_MULT_RESULT_SETS = 36,
    SQL_MULTIPLE_ACTIVE_TXN = 37,
    SQL_OJ_CAPABILITIES = 115,
    SQL_POS_OPERATIONS = 141,
    SQL_STATIC_CURSOR_ATTRIBUTES1 = 167,
    SQL_STATIC_CURSOR_ATTRIBUTES2 = 168,
    SQL_FORWARD_ONLY_CURSOR_ATTRIBUTES1 = 149,
    SQL_FORWARD_ONLY_CURSOR_ATTRIBUTES2 = 150,
    SQL_BATCH_ROW_COUNT = 120,
    SQL_BATCH_SUPPORT = 121,
    SQL_PARAM_ARRAY_ROW_COUNTS = 153,
    SQL_PARAM_ARRAY_SELECTS = 154,
    SQL_ASYNC_MODE = 10021,
    SQL_MAX_ROW_SIZE = 104,
}

use crate::api::functions::util::set_output_string;
use crate::{
    api::{
        data::{self, format_cached_data, format_sql_value_data},
        definitions::*,
        errors::{ODBCError, Result},
        functions::util::{
            input_text_to_string, input_wtext_to_string, set_str_length, unsupported_function,
        },
        util::format_version,
    },
    handles::definitions::*,
    wire_client::wire_client_for,
};
use odbc_driver_core::{
    catalog_query_for, CatalogQuery, ColumnMetadata, Connection as WireConnection, OdbcUri,
    Row, SqlValue, Statement as WireStatement,
};
use num_traits::FromPrimitive;
use definitions::{
    AsyncEnable, AttrConnectionPooling, AttrCpMatch, AttrOdbcVersion, BulkOperation, CDataType,
    Char, Concurrency, CompletionType, ConnectionAttribute, CursorScrollable, CursorSensitivity,
    CursorType, Date, Desc, DriverConnectOption, EnvironmentAttribute, FetchOrientation,
    FreeStmtOption, HDbc, HDesc, HEnv, HStmt, HWnd, Handle, HandleType, InfoType, Integer, Len,
    NoScan, Nullability, ParamType, Pointer, RetCode, RetrieveData, SmallInt, SqlBool, SqlDataType,
    SqlReturn, StatementAttribute, Time, Timestamp, ULen, USmallInt, UseBookmarks, WChar,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::{collections::HashMap, mem::size_of, sync::RwLock};

const NULL_HANDLE_ERROR: &str = "handle cannot be null";
const HANDLE_MUST_BE_ENV_ERROR: &str = "handle must be env";
const HANDLE_MUST_BE_CONN_ERROR: &str = "handle must be conn";
const HANDLE_MUST_BE_STMT_ERROR: &str = "handle must be stmt";
const HANDLE_MUST_BE_DESC_ERROR: &str = "handle must be desc";

// `definitions` only carries SQL_TXN_SERIALIZABLE; the other three
// SQLGetInfo/SQLSetConnectAttr isolation bitmask values aren't exposed
// anywhere else this driver links against.
const SQL_TXN_READ_UNCOMMITTED: u32 = 0x0000_0001;
const SQL_TXN_READ_COMMITTED: u32 = 0x0000_0002;
const SQL_TXN_REPEATABLE_READ: u32 = 0x0000_0004;

macro_rules! must_be_valid {
    ($maybe_handle:expr) => {{
        // force the expression
        let maybe_handle = $maybe_handle;
        if maybe_handle.is_none() {
            return SqlReturn::INVALID_HANDLE;
        }
        maybe_handle.unwrap()
    }};
}

macro_rules! unsafe_must_be_env {
    ($handle:expr) => {{
        let env = unsafe { (*$handle).as_env() };
        must_be_valid!(env)
    }};
}

macro_rules! unsafe_must_be_conn {
    ($handle:expr) => {{
        let conn = unsafe { (*$handle).as_connection() };
        must_be_valid!(conn)
    }};
}

macro_rules! unsafe_must_be_stmt {
    ($handle:expr) => {{
        let stmt = unsafe { (*$handle).as_statement() };
        must_be_valid!(stmt)
    }};
}

macro_rules! unsafe_must_be_desc {
    ($handle:expr) => {{
        let desc = unsafe { (*$handle).as_descriptor() };
        must_be_valid!(desc)
    }};
}

macro_rules! odbc_unwrap {
    ($value:expr, $handle:expr) => {{
        // force the expression
        let value = $value;
        if let Err(error) = value {
            $handle.add_diag_info(error.into());
            return SqlReturn::ERROR;
        }
        value.unwrap()
    }};
}

#[no_mangle]
pub extern "C" fn SQLAllocHandle(
    handle_type: HandleType,
    input_handle: Handle,
    output_handle: *mut Handle,
) -> SqlReturn {
    match sql_alloc_handle(handle_type, input_handle as *mut _, output_handle) {
        Ok(_) => SqlReturn::SUCCESS,
        Err(_) => SqlReturn::INVALID_HANDLE,
    }
}

fn sql_alloc_handle(
    handle_type: HandleType,
    input_handle: *mut OdbcHandle,
    output_handle: *mut Handle,
) -> Result<()> {
    match handle_type {
        HandleType::Env => {
            let env = RwLock::new(Env::with_state(EnvState::Allocated));
            let mh = Box::new(OdbcHandle::Env(env));
            unsafe {
                *output_handle = Box::into_raw(mh) as *mut _;
            }
            Ok(())
        }
        HandleType::Dbc => {
            // input handle cannot be NULL
            if input_handle.is_null() {
                return Err(ODBCError::InvalidHandleType(NULL_HANDLE_ERROR));
            }
            // input handle must be an Env
            let env = unsafe {
                (*input_handle)
                    .as_env()
                    .ok_or(ODBCError::InvalidHandleType(HANDLE_MUST_BE_ENV_ERROR))?
            };
            let conn = RwLock::new(Connection::with_state(
                input_handle,
                ConnectionState::Allocated,
            ));
            let mut env_contents = (*env).write().unwrap();
            let mh = Box::new(OdbcHandle::Connection(conn));
            let mh_ptr = Box::into_raw(mh);
            env_contents.connections.insert(mh_ptr);
            env_contents.state = EnvState::ConnectionAllocated;
            unsafe { *output_handle = mh_ptr as *mut _ }
            Ok(())
        }
        HandleType::Stmt => {
            // input handle cannot be NULL
            if input_handle.is_null() {
                return Err(ODBCError::InvalidHandleType(NULL_HANDLE_ERROR));
            }
            // input handle must be an Connection
            let conn = unsafe {
                (*input_handle)
                    .as_connection()
                    .ok_or(ODBCError::InvalidHandleType(HANDLE_MUST_BE_CONN_ERROR))?
            };
            let stmt = RwLock::new(Statement::with_state(
                input_handle,
                StatementState::Allocated,
            ));
            let mut conn_contents = (*conn).write().unwrap();
            let mh = Box::new(OdbcHandle::Statement(stmt));
            let mh_ptr = Box::into_raw(mh);
            conn_contents.statements.insert(mh_ptr);
            conn_contents.state = ConnectionState::StatementAllocated;
            unsafe { *output_handle = mh_ptr as *mut _ }
            Ok(())
        }
        HandleType::Desc => {
            // input handle cannot be NULL
            if input_handle.is_null() {
                return Err(ODBCError::InvalidHandleType(NULL_HANDLE_ERROR));
            }
            // input handle must be a Connection
            unsafe {
                (*input_handle)
                    .as_connection()
                    .ok_or(ODBCError::InvalidHandleType(HANDLE_MUST_BE_CONN_ERROR))?
            };
            let desc = RwLock::new(Descriptor::with_state(
                input_handle,
                DescriptorState::ExplicitlyAllocated,
            ));
            let mh = Box::new(OdbcHandle::Descriptor(desc));
            unsafe { *output_handle = Box::into_raw(mh) as *mut _ }
            Ok(())
        }
    }
}

#[no_mangle]
pub extern "C" fn SQLBindCol(
    hstmt: HStmt,
    col_number: USmallInt,
    target_type: CDataType,
    target_value: Pointer,
    buffer_length: Len,
    length_or_indicatior: *mut Len,
) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(hstmt);
    let stmt = must_be_valid!((*odbc_handle).as_statement());
    let mut bound_cols = stmt.read().unwrap().bound_cols.write().unwrap();
    if target_value.is_null() {
        // A null target buffer unbinds the column.
        if let Some(map) = bound_cols.as_mut() {
            map.remove(&col_number);
        }
        return SqlReturn::SUCCESS;
    }
    bound_cols.get_or_insert_with(HashMap::new).insert(
        col_number,
        BoundColInfo {
            target_type: target_type as SmallInt,
            target_buffer: target_value,
            buffer_length,
            length_or_indicator: length_or_indicatior,
        },
    );
    SqlReturn::SUCCESS
}

#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub extern "C" fn SQLBindParameter(
    hstmt: HStmt,
    parameter_number: USmallInt,
    input_output_type: ParamType,
    value_type: CDataType,
    parameter_type: SqlDataType,
    column_size: ULen,
    decimal_digits: SmallInt,
    parameter_value_ptr: Pointer,
    buffer_length: Len,
    str_len_or_ind_ptr: *mut Len,
) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(hstmt);
    let stmt = must_be_valid!((*odbc_handle).as_statement());
    if parameter_number == 0 {
        odbc_handle.add_diag_info(ODBCError::InvalidDescriptorIndex(0));
        return SqlReturn::ERROR;
    }
    let mut bound_params = stmt.read().unwrap().bound_params.write().unwrap();
    if parameter_value_ptr.is_null() {
        // A null buffer unbinds the parameter, mirroring SQLBindCol's contract
        // for a null target buffer.
        if let Some(map) = bound_params.as_mut() {
            map.remove(&parameter_number);
        }
        return SqlReturn::SUCCESS;
    }
    bound_params.get_or_insert_with(HashMap::new).insert(
        parameter_number,
        BoundParamInfo {
            input_output_type,
            value_type: value_type as SmallInt,
            parameter_type,
            column_size,
            decimal_digits,
            parameter_value_ptr,
            buffer_length,
            str_len_or_ind_ptr,
        },
    );
    SqlReturn::SUCCESS
}

#[no_mangle]
pub extern "C" fn SQLBrowseConnect(
    connection_handle: HDbc,
    _in_connection_string: *const Char,
    _string_length: SmallInt,
    _out_connection_string: *mut Char,
    _buffer_length: SmallInt,
    _out_buffer_length: *mut SmallInt,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(connection_handle), "SQLBrowseConnect")
}

#[no_mangle]
pub extern "C" fn SQLBrowseConnectW(
    connection_handle: HDbc,
    _in_connection_string: *const WChar,
    _string_length: SmallInt,
    _out_connection_string: *mut WChar,
    _buffer_length: SmallInt,
    _out_buffer_length: *mut SmallInt,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(connection_handle), "SQLBrowseConnectW")
}

#[no_mangle]
pub extern "C" fn SQLBulkOperations(
    statement_handle: HStmt,
    _operation: BulkOperation,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(statement_handle), "SQLBulkOperations")
}

/// Aborts whatever the statement's connection is currently doing, per
/// `SQLCancel`/`SQLCancelHandle`'s shared semantics (the latter only adds a
/// `HandleType::Dbc` case, cancelling the connection itself rather than a
/// single statement on it).
fn sql_cancel_connection(conn: &RwLock<Connection>, odbc_handle: OdbcHandleRef) -> SqlReturn {
    let conn_contents = conn.read().unwrap();
    match conn_contents.wire_connection.as_ref() {
        Some(wire_connection) => {
            odbc_unwrap!(wire_connection.cancel().map_err(ODBCError::from), odbc_handle);
            SqlReturn::SUCCESS
        }
        None => odbc_unwrap!(Err::<(), _>(ODBCError::ConnectionNotOpen), odbc_handle),
    }
}

#[no_mangle]
pub extern "C" fn SQLCancel(statement_handle: HStmt) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(statement_handle);
    let stmt = unsafe_must_be_stmt!(odbc_handle);
    let connection = stmt.read().unwrap().connection;
    let conn = match unsafe { (*connection).as_connection() } {
        Some(c) => c,
        None => return SqlReturn::INVALID_HANDLE,
    };
    sql_cancel_connection(conn, odbc_handle)
}

#[no_mangle]
pub extern "C" fn SQLCancelHandle(handle_type: HandleType, handle: Handle) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(handle);
    match handle_type {
        HandleType::Stmt => {
            let stmt = unsafe_must_be_stmt!(odbc_handle);
            let connection = stmt.read().unwrap().connection;
            let conn = match unsafe { (*connection).as_connection() } {
                Some(c) => c,
                None => return SqlReturn::INVALID_HANDLE,
            };
            sql_cancel_connection(conn, odbc_handle)
        }
        HandleType::Dbc => {
            let conn = unsafe_must_be_conn!(odbc_handle);
            sql_cancel_connection(conn, odbc_handle)
        }
        HandleType::Env | HandleType::Desc => SqlReturn::INVALID_HANDLE,
    }
}

#[no_mangle]
pub extern "C" fn SQLCloseCursor(statement_handle: HStmt) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(statement_handle);
    let stmt = unsafe_must_be_stmt!(odbc_handle);
    let mut stmt_contents = stmt.write().unwrap();
    stmt_contents.statement = None;
    *stmt_contents.row_set.write().unwrap() = None;
    *stmt_contents.current_row_index.write().unwrap() = 0;
    SqlReturn::SUCCESS
}

#[no_mangle]
pub extern "C" fn SQLColAttribute(
    statement_handle: HStmt,
    _column_number: USmallInt,
    _field_identifier: Desc,
    _character_attribute_ptr: Pointer,
    _buffer_length: SmallInt,
    _string_length_ptr: *mut SmallInt,
    _numeric_attribute_ptr: *mut Len,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(statement_handle), "SQLColAttribute")
}

#[no_mangle]
pub extern "C" fn SQLColAttributeW(
    statement_handle: HStmt,
    column_number: USmallInt,
    field_identifier: Desc,
    character_attribute_ptr: Pointer,
    buffer_length: SmallInt,
    string_length_ptr: *mut SmallInt,
    numeric_attribute_ptr: *mut Len,
) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(statement_handle);
    let stmt = must_be_valid!((*odbc_handle).as_statement());
    let string_col_attr = |f: &dyn Fn(&ColumnMetadata) -> &str| {
        let stmt_contents = stmt.read().unwrap();
        if stmt_contents.statement.is_none() {
            return set_output_string(
                "",
                character_attribute_ptr as *mut WChar,
                buffer_length as usize,
                string_length_ptr,
            );
        }
        let col_metadata = stmt_contents
            .statement
            .as_ref()
            .unwrap()
            .get_col_metadata(column_number)
            .ok_or(ODBCError::InvalidAttrValue("column number"));
        set_output_string(
            &(*f)(odbc_unwrap!(
                col_metadata,
                OdbcHandleRef::from(statement_handle)
            )),
            character_attribute_ptr as *mut WChar,
            buffer_length as usize,
            string_length_ptr,
        )
    };
    let numeric_col_attr = |f: &dyn Fn(&ColumnMetadata) -> Len| {
        let stmt_contents = stmt.read().unwrap();
        if stmt_contents.statement.is_none() {
            unsafe {
                *numeric_attribute_ptr = 0 as Len;
            }
            return SqlReturn::SUCCESS;
        }
        let col_metadata = stmt_contents
            .statement
            .as_ref()
            .unwrap()
            .get_col_metadata(column_number)
            .ok_or(ODBCError::InvalidAttrValue("column number"));
        unsafe {
            *numeric_attribute_ptr = (*f)(odbc_unwrap!(
                col_metadata,
                OdbcHandleRef::from(statement_handle)
            ));
        }
        return SqlReturn::SUCCESS;
    };
    match field_identifier {
        Desc::SQL_DESC_AUTO_UNIQUE_VALUE => unsafe {
            *numeric_attribute_ptr = SqlBool::SQL_FALSE as Len;
            return SqlReturn::SUCCESS;
        },
        Desc::SQL_DESC_UNNAMED | Desc::SQL_DESC_UPDATABLE => unsafe {
            *numeric_attribute_ptr = 0 as Len;
            return SqlReturn::SUCCESS;
        },
        Desc::SQL_DESC_COUNT => unsafe {
            let stmt_contents = stmt.read().unwrap();
            if stmt_contents.statement.is_none() {
                *numeric_attribute_ptr = 0 as Len;
                return SqlReturn::SUCCESS;
            }
            *numeric_attribute_ptr = stmt_contents
                .statement
                .as_ref()
                .unwrap()
                .get_resultset_metadata()
                .len() as Len;
            return SqlReturn::SUCCESS;
        },
        Desc::SQL_DESC_CASE_SENSITIVE => numeric_col_attr(&|x: &ColumnMetadata| {
            (if x.type_name == "string" {
                SqlBool::SQL_TRUE
            } else {
                SqlBool::SQL_FALSE
            }) as Len
        }),
        Desc::SQL_DESC_BASE_COLUMN_NAME => string_col_attr(&|x: &ColumnMetadata| x.base_col_name.as_ref()),
        Desc::SQL_DESC_BASE_TABLE_NAME => string_col_attr(&|x: &ColumnMetadata| x.base_table_name.as_ref()),
        Desc::SQL_DESC_CATALOG_NAME => string_col_attr(&|x: &ColumnMetadata| x.catalog_name.as_ref()),
        Desc::SQL_DESC_DISPLAY_SIZE => {
            numeric_col_attr(&|x: &ColumnMetadata| x.display_size as Len)
        }
        Desc::SQL_DESC_FIXED_PREC_SCALE => numeric_col_attr(&|x: &ColumnMetadata| x.fixed_prec_scale as Len),
        Desc::SQL_DESC_LABEL => string_col_attr(&|x: &ColumnMetadata| x.label.as_ref()),
        Desc::SQL_DESC_LENGTH => numeric_col_attr(&|x: &ColumnMetadata| x.length as Len),
        Desc::SQL_DESC_LITERAL_PREFIX | Desc::SQL_DESC_LITERAL_SUFFIX | Desc::SQL_DESC_LOCAL_TYPE_NAME | Desc::SQL_DESC_SCHEMA_NAME => {
            string_col_attr(&|_| "")
        }
        Desc::SQL_DESC_NAME => string_col_attr(&|x: &ColumnMetadata| x.col_name.as_ref()),
        Desc::SQL_DESC_NULLABLE => numeric_col_attr(&|x: &ColumnMetadata| {
            definitions::Nullability::from(x.nullability) as Len
        }),
        Desc::SQL_DESC_OCTET_LENGTH => {
            numeric_col_attr(&|x: &ColumnMetadata| x.octet_length as Len)
        }
        Desc::SQL_DESC_PRECISION => {
            numeric_col_attr(&|x: &ColumnMetadata| x.precision as Len)
        }
        Desc::SQL_DESC_SCALE => numeric_col_attr(&|x: &ColumnMetadata| x.scale as Len),
        Desc::SQL_DESC_SEARCHABLE => numeric_col_attr(&|x: &ColumnMetadata| x.is_searchable as Len),
        Desc::SQL_DESC_TABLE_NAME => string_col_attr(&|x: &ColumnMetadata| x.table_name.as_ref()),
        Desc::SQL_DESC_TYPE_NAME => string_col_attr(&|x: &ColumnMetadata| x.type_name.as_ref()),
        Desc::SQL_DESC_TYPE | Desc::SQL_DESC_CONCISE_TYPE => {
            numeric_col_attr(&|x: &ColumnMetadata| x.sql_type as Len)
        }
        Desc::SQL_DESC_UNSIGNED => numeric_col_attr(&|x: &ColumnMetadata| x.is_unsigned as Len),
        desc @ (Desc::SQL_DESC_OCTET_LENGTH_PTR
        | Desc::SQL_DESC_DATETIME_INTERVAL_CODE
        | Desc::SQL_DESC_INDICATOR_PTR
        | Desc::SQL_DESC_DATA_PTR
        | Desc::SQL_DESC_ALLOC_TYPE
        | Desc::SQL_DESC_ARRAY_SIZE
        | Desc::SQL_DESC_ARRAY_STATUS_PTR
        | Desc::SQL_DESC_BIND_OFFSET_PTR
        | Desc::SQL_DESC_BIND_TYPE
        | Desc::SQL_DESC_DATETIME_INTERVAL_PRECISION
        | Desc::SQL_DESC_MAXIMUM_SCALE
        | Desc::SQL_DESC_MINIMUM_SCALE
        | Desc::SQL_DESC_NUM_PREC_RADIX
        | Desc::SQL_DESC_PARAMETER_TYPE
        | Desc::SQL_DESC_ROWS_PROCESSED_PTR
        | Desc::SQL_DESC_ROWVER) => {
            odbc_handle
                .add_diag_info(ODBCError::UnsupportedFieldDescriptor(format!("{:?}", desc)));
            return SqlReturn::ERROR;
        }
    }
}

#[no_mangle]
pub extern "C" fn SQLColumnPrivileges(
    statement_handle: HStmt,
    _catalog_name: *const Char,
    _catalog_name_length: SmallInt,
    _schema_name: *const Char,
    _schema_name_length: SmallInt,
    _table_name: *const Char,
    _table_name_length: SmallInt,
    _column_name: *const Char,
    _column_name_length: SmallInt,
) -> SqlReturn {
    unsupported_function(
        OdbcHandleRef::from(statement_handle),
        "SQLColumnPrivileges",
    )
}

#[no_mangle]
pub extern "C" fn SQLColumnPrivilegesW(
    statement_handle: HStmt,
    catalog_name: *const WChar,
    catalog_name_length: SmallInt,
    schema_name: *const WChar,
    schema_name_length: SmallInt,
    table_name: *const WChar,
    table_name_length: SmallInt,
    column_name: *const WChar,
    column_name_length: SmallInt,
) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(statement_handle);
    let stmt = must_be_valid!((*odbc_handle).as_statement());
    let catalog = input_wtext_to_string(catalog_name, catalog_name_length as usize);
    let schema = input_wtext_to_string(schema_name, schema_name_length as usize);
    let table = input_wtext_to_string(table_name, table_name_length as usize);
    let column = input_wtext_to_string(column_name, column_name_length as usize);
    let query = CatalogQuery::ColumnPrivileges {
        catalog: catalog_arg(&catalog),
        schema: catalog_arg(&schema),
        table,
        column: catalog_arg(&column),
    };
    run_catalog_query(odbc_handle, stmt, query)
}

#[no_mangle]
pub extern "C" fn SQLColumns(
    statement_handle: HStmt,
    _catalog_name: *const Char,
    _catalog_name_length: SmallInt,
    _schema_name: *const Char,
    _schema_name_length: SmallInt,
    _table_name: *const Char,
    _table_name_length: SmallInt,
    _column_name: *const Char,
    _column_name_length: SmallInt,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(statement_handle), "SQLColumns")
}

#[no_mangle]
pub extern "C" fn SQLColumnsW(
    statement_handle: HStmt,
    catalog_name: *const WChar,
    catalog_name_length: SmallInt,
    schema_name: *const WChar,
    schema_name_length: SmallInt,
    table_name: *const WChar,
    table_name_length: SmallInt,
    column_name: *const WChar,
    column_name_length: SmallInt,
) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(statement_handle);
    let stmt = must_be_valid!((*odbc_handle).as_statement());
    let catalog = input_wtext_to_string(catalog_name, catalog_name_length as usize);
    let schema = input_wtext_to_string(schema_name, schema_name_length as usize);
    let table = input_wtext_to_string(table_name, table_name_length as usize);
    let column = input_wtext_to_string(column_name, column_name_length as usize);
    let query = CatalogQuery::Columns {
        catalog: catalog_arg(&catalog),
        schema: catalog_arg(&schema),
        table: catalog_arg(&table),
        column: catalog_arg(&column),
    };
    run_catalog_query(odbc_handle, stmt, query)
}

#[no_mangle]
pub extern "C" fn SQLCompleteAsync(
    _handle_type: HandleType,
    handle: Handle,
    _async_ret_code_ptr: *mut RetCode,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(handle), "SQLCompleteAsync")
}

#[no_mangle]
pub extern "C" fn SQLConnect(
    connection_handle: HDbc,
    _server_name: *const Char,
    _name_length_1: SmallInt,
    _user_name: *const Char,
    _name_length_2: SmallInt,
    _authentication: *const Char,
    _name_length_3: SmallInt,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(connection_handle), "SQLConnect")
}

#[no_mangle]
pub extern "C" fn SQLConnectW(
    connection_handle: HDbc,
    _server_name: *const WChar,
    _name_length_1: SmallInt,
    _user_name: *const WChar,
    _name_length_2: SmallInt,
    _authentication: *const WChar,
    _name_length_3: SmallInt,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(connection_handle), "SQLConnectW")
}

#[no_mangle]
pub extern "C" fn SQLCopyDesc(source_desc_handle: HDesc, target_desc_handle: HDesc) -> SqlReturn {
    let source_ptr = source_desc_handle as *mut OdbcHandle;
    let target_ptr = target_desc_handle as *mut OdbcHandle;
    let source = unsafe_must_be_desc!(source_ptr);
    let target = unsafe_must_be_desc!(target_ptr);
    let copied = source.read().unwrap().attributes.read().unwrap().clone();
    *target.write().unwrap().attributes.write().unwrap() = copied;
    SqlReturn::SUCCESS
}

#[no_mangle]
pub extern "C" fn SQLDataSources(
    environment_handle: HEnv,
    _direction: FetchOrientation,
    _server_name: *mut Char,
    _buffer_length_1: SmallInt,
    _name_length_1: *mut SmallInt,
    _description: *mut Char,
    _buffer_length_2: SmallInt,
    _name_length_2: *mut SmallInt,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(environment_handle), "SQLDataSources")
}

#[no_mangle]
pub extern "C" fn SQLDataSourcesW(
    environment_handle: HEnv,
    _direction: FetchOrientation,
    _server_name: *mut WChar,
    _buffer_length_1: SmallInt,
    _name_length_1: *mut SmallInt,
    _description: *mut WChar,
    _buffer_length_2: SmallInt,
    _name_length_2: *mut SmallInt,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(environment_handle), "SQLDataSourcesW")
}

#[no_mangle]
pub extern "C" fn SQLDescribeCol(
    hstmt: HStmt,
    _col_number: USmallInt,
    _col_name: *mut Char,
    _buffer_length: SmallInt,
    _name_length: *mut SmallInt,
    _data_type: *mut SqlDataType,
    _col_size: *mut ULen,
    _decimal_digits: *mut SmallInt,
    _nullable: *mut Nullability,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(hstmt), "SQLDescribeCol")
}

#[no_mangle]
pub extern "C" fn SQLDescribeColW(
    hstmt: HStmt,
    col_number: USmallInt,
    col_name: *mut WChar,
    buffer_length: SmallInt,
    name_length: *mut SmallInt,
    data_type: *mut SqlDataType,
    col_size: *mut ULen,
    decimal_digits: *mut SmallInt,
    nullable: *mut Nullability,
) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(hstmt);
    let stmt = must_be_valid!((*odbc_handle).as_statement());
    let stmt_contents = stmt.read().unwrap();
    let metadata = stmt_contents
        .statement
        .as_ref()
        .ok_or(ODBCError::StatementNotExecuted)
        .and_then(|s| {
            s.get_col_metadata(col_number)
                .ok_or(ODBCError::InvalidAttrValue("column number"))
        });
    let metadata = odbc_unwrap!(metadata, odbc_handle);
    unsafe {
        if !data_type.is_null() {
            *data_type = metadata.sql_type;
        }
        if !col_size.is_null() {
            *col_size = metadata.length as ULen;
        }
        if !decimal_digits.is_null() {
            *decimal_digits = metadata.scale;
        }
        if !nullable.is_null() {
            *nullable = definitions::Nullability::from(metadata.nullability);
        }
    }
    set_output_string(&metadata.col_name, col_name, buffer_length as usize, name_length)
}

/// There is no SQL parser behind this driver, so an unbound parameter's
/// shape cannot be inferred from the statement text; only parameters a
/// prior `SQLBindParameter` call already described can be reported back.
#[no_mangle]
pub extern "C" fn SQLDescribeParam(
    statement_handle: HStmt,
    parameter_number: USmallInt,
    data_type_ptr: *mut SqlDataType,
    parameter_size_ptr: *mut ULen,
    decimal_digits_ptr: *mut SmallInt,
    nullable_ptr: *mut SmallInt,
) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(statement_handle);
    let stmt = must_be_valid!((*odbc_handle).as_statement());
    let stmt_contents = stmt.read().unwrap();
    let bound_params = stmt_contents.bound_params.read().unwrap();
    let info = match bound_params.as_ref().and_then(|m| m.get(&parameter_number)) {
        Some(info) => *info,
        None => {
            drop(bound_params);
            drop(stmt_contents);
            odbc_handle.add_diag_info(ODBCError::InvalidDescriptorIndex(parameter_number as i16));
            return SqlReturn::ERROR;
        }
    };
    unsafe {
        if !data_type_ptr.is_null() {
            *data_type_ptr = info.parameter_type;
        }
        if !parameter_size_ptr.is_null() {
            *parameter_size_ptr = info.column_size;
        }
        if !decimal_digits_ptr.is_null() {
            *decimal_digits_ptr = info.decimal_digits;
        }
        if !nullable_ptr.is_null() {
            *nullable_ptr = Nullability::SQL_NULLABLE_UNKNOWN as SmallInt;
        }
    }
    SqlReturn::SUCCESS
}

#[no_mangle]
pub extern "C" fn SQLDisconnect(connection_handle: HDbc) -> SqlReturn {
    let conn_handle = OdbcHandleRef::from(connection_handle);
    let conn = must_be_valid!((*conn_handle).as_connection());
    // set the wire_connection to None. This will cause the previous wire_connection
    // to drop and disconnect.
    conn.write().unwrap().wire_connection = None;
    SqlReturn::SUCCESS
}

#[no_mangle]
pub extern "C" fn SQLDriverConnect(
    connection_handle: HDbc,
    _window_handle: HWnd,
    _in_connection_string: *const Char,
    _string_length_1: SmallInt,
    _out_connection_string: *mut Char,
    _buffer_length: SmallInt,
    _string_length_2: *mut SmallInt,
    _drive_completion: DriverConnectOption,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(connection_handle), "SQLDriverConnect")
}

fn sql_driver_connect(
    conn_handle: &RwLock<Connection>,
    odbc_uri_string: &str,
) -> Result<WireConnection> {
    let conn_reader = conn_handle.read().unwrap();
    let odbc_uri = OdbcUri::new(odbc_uri_string)?;
    if odbc_uri.get("driver").is_none() && odbc_uri.get("dsn").is_none() {
        return Err(ODBCError::MissingDriverOrDSNProperty);
    }
    let settings = odbc_uri.into_settings()?;
    let current_catalog = conn_reader
        .attributes
        .current_catalog
        .clone()
        .or_else(|| settings.database.clone());
    let operation_timeout = conn_reader.attributes.connection_timeout;
    let login_timeout = conn_reader.attributes.login_timeout;
    let wire_client = wire_client_for(&settings)?;
    // ODBCError has an impl From odbc_driver_core::Error, but that does not
    // create an impl From Result<T, odbc_driver_core::Error> to Result<T, ODBCError>
    // hence this bizarre Ok(func?) pattern.
    Ok(WireConnection::connect(
        wire_client.as_ref(),
        current_catalog.as_deref(),
        operation_timeout,
        login_timeout,
    )?)
}

#[no_mangle]
pub extern "C" fn SQLDriverConnectW(
    connection_handle: HDbc,
    _window_handle: HWnd,
    in_connection_string: *const WChar,
    string_length_1: SmallInt,
    out_connection_string: *mut WChar,
    buffer_length: SmallInt,
    string_length_2: *mut SmallInt,
    driver_completion: DriverConnectOption,
) -> SqlReturn {
    let conn_handle = OdbcHandleRef::from(connection_handle);
    // SQL_NO_PROMPT is the only option supported for DriverCompletion
    if driver_completion != DriverConnectOption::NoPrompt {
        conn_handle.add_diag_info(ODBCError::UnsupportedDriverConnectOption(format!(
            "{:?}",
            driver_completion
        )));
        return SqlReturn::ERROR;
    }
    let conn = must_be_valid!((*conn_handle).as_connection());
    let odbc_uri_string = input_wtext_to_string(in_connection_string, string_length_1 as usize);
    let wire_connection = odbc_unwrap!(sql_driver_connect(conn, &odbc_uri_string), conn_handle);
    conn.write().unwrap().wire_connection = Some(wire_connection);
    let buffer_len = usize::try_from(buffer_length).unwrap();
    let sql_return = set_output_string(
        &odbc_uri_string,
        out_connection_string,
        buffer_len,
        string_length_2,
    );
    if sql_return == SqlReturn::SUCCESS_WITH_INFO {
        conn_handle.add_diag_info(ODBCError::OutStringTruncated(buffer_len));
    }
    sql_return
}

#[no_mangle]
pub extern "C" fn SQLDrivers(
    henv: HEnv,
    _direction: FetchOrientation,
    _driver_desc: *mut Char,
    _driver_desc_max: SmallInt,
    _out_driver_desc: *mut SmallInt,
    _driver_attributes: *mut Char,
    _drvr_attr_max: SmallInt,
    _out_drvr_attr: *mut SmallInt,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(henv), "SQLDrivers")
}

#[no_mangle]
pub extern "C" fn SQLDriversW(
    henv: HEnv,
    _direction: FetchOrientation,
    _driver_desc: *mut WChar,
    _driver_desc_max: SmallInt,
    _out_driver_desc: *mut SmallInt,
    _driver_attributes: *mut WChar,
    _drvr_attr_max: SmallInt,
    _out_drvr_attr: *mut SmallInt,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(henv), "SQLDriversW")
}

fn sql_end_tran_connection(
    conn: &RwLock<Connection>,
    odbc_handle: OdbcHandleRef,
    completion_type: CompletionType,
) -> SqlReturn {
    let conn_contents = conn.read().unwrap();
    let wire_connection = match conn_contents.wire_connection.as_ref() {
        Some(c) => c,
        None => return odbc_unwrap!(Err::<(), _>(ODBCError::ConnectionNotOpen), odbc_handle),
    };
    let result = match completion_type {
        CompletionType::SQL_COMMIT => wire_connection.commit(),
        CompletionType::SQL_ROLLBACK => wire_connection.rollback(),
    };
    odbc_unwrap!(result.map_err(ODBCError::from), odbc_handle);
    SqlReturn::SUCCESS
}

#[no_mangle]
pub extern "C" fn SQLEndTran(
    handle_type: HandleType,
    handle: Handle,
    completion_type: CompletionType,
) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(handle);
    match handle_type {
        HandleType::Dbc => {
            let conn = unsafe_must_be_conn!(odbc_handle);
            sql_end_tran_connection(conn, odbc_handle, completion_type)
        }
        HandleType::Env => {
            let env = unsafe_must_be_env!(odbc_handle);
            let connections: Vec<_> = env
                .read()
                .unwrap()
                .connections
                .read()
                .unwrap()
                .iter()
                .copied()
                .collect();
            for conn_ptr in connections {
                let conn = match unsafe { (*conn_ptr).as_connection() } {
                    Some(c) => c,
                    None => continue,
                };
                let ret = sql_end_tran_connection(
                    conn,
                    OdbcHandleRef::from(conn_ptr as Handle),
                    completion_type,
                );
                if ret != SqlReturn::SUCCESS {
                    return ret;
                }
            }
            SqlReturn::SUCCESS
        }
        HandleType::Stmt | HandleType::Desc => SqlReturn::INVALID_HANDLE,
    }
}

#[no_mangle]
pub extern "C" fn SQLExecDirect(
    statement_handle: HStmt,
    _statement_text: *const Char,
    _text_length: Integer,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(statement_handle), "SQLExecDirect")
}

#[no_mangle]
pub extern "C" fn SQLExecDirectW(
    statement_handle: HStmt,
    statement_text: *const WChar,
    text_length: Integer,
) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(statement_handle);
    let stmt = must_be_valid!((*odbc_handle).as_statement());
    let sql = input_wtext_to_string(statement_text, text_length as usize);
    run_statement(stmt, odbc_handle, sql)
}

/// Runs `sql` against the connection `stmt` was allocated under. Shared by
/// `SQLExecDirect` and `SQLExecute` (which replays the text a prior
/// `SQLPrepare` saved).
///
/// # Safety
/// `stmt`'s `connection` pointer must point to a live `OdbcHandle::Connection`.
unsafe fn sql_execute(
    stmt: &RwLock<Statement>,
    sql: &str,
    params: &Row,
) -> Result<Box<dyn WireStatement>> {
    let connection = stmt.read().unwrap().connection;
    let conn = (*connection)
        .as_connection()
        .ok_or(ODBCError::InvalidHandleType(HANDLE_MUST_BE_CONN_ERROR))?
        .read()
        .unwrap();
    let wire_connection = conn
        .wire_connection
        .as_ref()
        .ok_or(ODBCError::ConnectionNotOpen)?;
    Ok(wire_connection.query_statement(sql, params)?)
}

/// Resolves bound parameters into a row, executes if every parameter is
/// ready, or switches the statement into the data-at-execution sequence
/// (returning `SQL_NEED_DATA` for `SQLParamData` to pick up) when one or more
/// parameters carry a `SQL_DATA_AT_EXEC` indicator.
fn run_statement(stmt: &RwLock<Statement>, odbc_handle: &mut OdbcHandle, sql: String) -> SqlReturn {
    match prepare_params(stmt, &sql) {
        Ok(ParamsOutcome::NeedData) => {
            *stmt.read().unwrap().state.write().unwrap() = StatementState::FunctionNeedsDataNoParam;
            SqlReturn::NEED_DATA
        }
        Ok(ParamsOutcome::Ready(params)) => finish_execute(stmt, odbc_handle, &sql, &params),
        Err(e) => {
            odbc_handle.add_diag_info(e);
            SqlReturn::ERROR
        }
    }
}

/// The tail end of execution once every parameter has a value: run the
/// query, install the resulting wire statement, and -- for a
/// `SQL_CURSOR_STATIC` statement -- materialize the whole result set.
fn finish_execute(
    stmt: &RwLock<Statement>,
    odbc_handle: &mut OdbcHandle,
    sql: &str,
    params: &Row,
) -> SqlReturn {
    let statement = unsafe { sql_execute(stmt, sql, params) };
    let statement = odbc_unwrap!(statement, odbc_handle);
    stmt.write().unwrap().set_statement(statement);
    match materialize_static_cursor(stmt) {
        Ok(()) => SqlReturn::SUCCESS,
        Err(e) => {
            odbc_handle.add_diag_info(e);
            SqlReturn::ERROR
        }
    }
}

enum ParamsOutcome {
    Ready(Row),
    NeedData,
}

/// Builds the parameter row to execute `sql` with, from whatever
/// `SQLBindParameter` calls are currently on file. A `SQL_DATA_AT_EXEC`
/// indicator on any parameter stashes the partially-built row and the
/// pending ordinals on `stmt` and returns `NeedData` instead, so
/// `SQLParamData`/`SQLPutData` can finish the row later.
fn prepare_params(
    stmt: &RwLock<Statement>,
    sql: &str,
) -> std::result::Result<ParamsOutcome, ODBCError> {
    let bound: HashMap<USmallInt, BoundParamInfo> = {
        let contents = stmt.read().unwrap();
        match contents.bound_params.read().unwrap().as_ref() {
            Some(map) if !map.is_empty() => map.clone(),
            _ => return Ok(ParamsOutcome::Ready(vec![])),
        }
    };
    let max_ordinal = *bound.keys().max().unwrap();
    let mut row: Row = vec![None; max_ordinal as usize];
    let mut ordinals: Vec<USmallInt> = bound.keys().copied().collect();
    ordinals.sort_unstable();
    let mut pending = Vec::new();
    for ord in ordinals {
        let info = bound[&ord];
        if info.input_output_type == ParamType::SQL_PARAM_OUTPUT {
            continue;
        }
        let indicator = if info.str_len_or_ind_ptr.is_null() {
            0
        } else {
            unsafe { *info.str_len_or_ind_ptr }
        };
        if indicator == definitions::SQL_NULL_DATA {
            continue;
        }
        if definitions::is_data_at_exec(indicator) {
            pending.push(ord);
            continue;
        }
        let byte_len = if indicator > 0 {
            indicator as usize
        } else {
            info.buffer_length.max(0) as usize
        };
        let value_type = CDataType::from_i16(info.value_type).unwrap_or(CDataType::SQL_C_DEFAULT);
        let value = unsafe {
            c_buffer_to_sql_value(
                value_type,
                info.parameter_type,
                info.parameter_value_ptr,
                byte_len,
            )
        }?;
        row[ord as usize - 1] = Some(value);
    }
    if pending.is_empty() {
        return Ok(ParamsOutcome::Ready(row));
    }
    let contents = stmt.read().unwrap();
    *contents.dae_pending.write().unwrap() = pending;
    *contents.dae_row.write().unwrap() = Some(row);
    *contents.dae_sql.write().unwrap() = Some(sql.to_string());
    Ok(ParamsOutcome::NeedData)
}

/// Converts a bound parameter's application buffer into the `SqlValue` the
/// wire client expects, keyed by the `SQL_C_*` type the caller described it
/// as. `SQL_C_DEFAULT` (and anything else this driver doesn't model) falls
/// back to `parameter_type` to pick a reasonable representation.
unsafe fn c_buffer_to_sql_value(
    value_type: CDataType,
    parameter_type: SqlDataType,
    ptr: Pointer,
    byte_len: usize,
) -> std::result::Result<SqlValue, ODBCError> {
    match value_type {
        CDataType::SQL_C_CHAR => Ok(SqlValue::String(input_text_to_string(
            ptr as *const Char,
            byte_len,
        ))),
        CDataType::SQL_C_WCHAR => Ok(SqlValue::String(input_wtext_to_string(
            ptr as *const WChar,
            byte_len / size_of::<WChar>().max(1),
        ))),
        CDataType::SQL_C_BIT => Ok(SqlValue::Boolean(*(ptr as *const u8) != 0)),
        CDataType::SQL_C_STINYINT | CDataType::SQL_C_UTINYINT => {
            Ok(SqlValue::Integer(*(ptr as *const i8) as i32))
        }
        CDataType::SQL_C_SSHORT | CDataType::SQL_C_USHORT => {
            Ok(SqlValue::Integer(*(ptr as *const i16) as i32))
        }
        CDataType::SQL_C_SLONG | CDataType::SQL_C_ULONG => Ok(SqlValue::Integer(*(ptr as *const i32))),
        CDataType::SQL_C_SBIGINT | CDataType::SQL_C_UBIGINT => {
            Ok(SqlValue::BigInt(*(ptr as *const i64)))
        }
        CDataType::SQL_C_FLOAT => Ok(SqlValue::Double(*(ptr as *const f32) as f64)),
        CDataType::SQL_C_DOUBLE => Ok(SqlValue::Double(*(ptr as *const f64))),
        CDataType::SQL_C_BINARY => Ok(SqlValue::Binary(
            std::slice::from_raw_parts(ptr as *const u8, byte_len).to_vec(),
        )),
        CDataType::SQL_C_DATE | CDataType::SQL_C_TYPE_DATE => {
            let d = *(ptr as *const Date);
            NaiveDate::from_ymd_opt(d.year as i32, d.month as u32, d.day as u32)
                .map(SqlValue::Date)
                .ok_or(ODBCError::InvalidDatetimeFormat)
        }
        CDataType::SQL_C_TIME | CDataType::SQL_C_TYPE_TIME => {
            let t = *(ptr as *const Time);
            NaiveTime::from_hms_opt(t.hour as u32, t.minute as u32, t.second as u32)
                .map(SqlValue::Time)
                .ok_or(ODBCError::InvalidDatetimeFormat)
        }
        CDataType::SQL_C_TIMESTAMP | CDataType::SQL_C_TYPE_TIMESTAMP => {
            let ts = *(ptr as *const Timestamp);
            NaiveDate::from_ymd_opt(ts.year as i32, ts.month as u32, ts.day as u32)
                .and_then(|d| {
                    d.and_hms_nano_opt(ts.hour as u32, ts.minute as u32, ts.second as u32, ts.fraction)
                })
                .map(SqlValue::Timestamp)
                .ok_or(ODBCError::InvalidDatetimeFormat)
        }
        _ => match parameter_type {
            SqlDataType::SQL_DOUBLE | SqlDataType::SQL_FLOAT | SqlDataType::SQL_REAL => {
                Ok(SqlValue::Double(*(ptr as *const f64)))
            }
            SqlDataType::SQL_INTEGER | SqlDataType::SQL_SMALLINT | SqlDataType::SQL_TINYINT => {
                Ok(SqlValue::Integer(*(ptr as *const i32)))
            }
            SqlDataType::SQL_BIGINT => Ok(SqlValue::BigInt(*(ptr as *const i64))),
            _ => Ok(SqlValue::String(input_text_to_string(
                ptr as *const Char,
                byte_len,
            ))),
        },
    }
}

/// Eagerly pulls every row of a `SQL_CURSOR_STATIC` statement's result set
/// into `row_set` right after execution, so `SQLFetchScroll` can move freely
/// within it afterward. A no-op for any other cursor type.
fn materialize_static_cursor(stmt: &RwLock<Statement>) -> std::result::Result<(), ODBCError> {
    let mut contents = stmt.write().unwrap();
    if contents.attributes.cursor_type != CursorType::Static {
        return Ok(());
    }
    let batch = contents.attributes.row_array_size.max(1);
    let mut rows = Vec::new();
    loop {
        let page = contents
            .statement
            .as_mut()
            .ok_or(ODBCError::StatementNotExecuted)?
            .fetch(batch)?;
        let done = page.done;
        rows.extend(page.rows);
        if done {
            break;
        }
    }
    *contents.row_set.write().unwrap() = Some(odbc_driver_core::RowSet { rows, done: true });
    *contents.current_row_index.write().unwrap() = usize::MAX;
    Ok(())
}

/// Reads one cell of the current row. A `SQL_CURSOR_STATIC` statement reads
/// through the eagerly materialized `row_set` (so random-access scrolling
/// sees the whole result set); anything else reads through the wire
/// statement's own last-fetched page.
fn statement_row_value(
    contents: &Statement,
    row_in_set: usize,
    col_index: u16,
) -> std::result::Result<Option<SqlValue>, ODBCError> {
    if contents.attributes.cursor_type == CursorType::Static {
        let row_set = contents.row_set.read().unwrap();
        return row_set
            .as_ref()
            .and_then(|rs| rs.rows.get(row_in_set))
            .map(|row| row.get(col_index as usize).cloned().flatten())
            .ok_or(ODBCError::StatementNotExecuted);
    }
    contents
        .statement
        .as_ref()
        .ok_or(ODBCError::StatementNotExecuted)?
        .get_value(row_in_set, col_index)
        .map(|v| v.cloned())
        .map_err(ODBCError::from)
}

#[no_mangle]
pub extern "C" fn SQLExecute(statement_handle: HStmt) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(statement_handle);
    let stmt = must_be_valid!((*odbc_handle).as_statement());
    let sql = stmt.read().unwrap().prepared_sql.read().unwrap().clone();
    let sql = odbc_unwrap!(sql.ok_or(ODBCError::StatementNotPrepared), odbc_handle);
    run_statement(stmt, odbc_handle, sql)
}

#[no_mangle]
pub extern "C" fn SQLFetch(statement_handle: HStmt) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(statement_handle);
    let stmt = must_be_valid!((*odbc_handle).as_statement());
    sql_fetch(stmt, odbc_handle)
}

/// Advances to the next row of the current result set, pulling a fresh page
/// via `Statement::fetch` once the cached `row_set` is exhausted. Returns
/// `NO_DATA` once the underlying cursor reports `done` with nothing left.
/// A `SQL_CURSOR_STATIC` statement has its whole result set materialized
/// already, so it moves through `sql_fetch_scroll_static` instead.
fn sql_fetch(stmt: &RwLock<Statement>, odbc_handle: &mut OdbcHandle) -> SqlReturn {
    if stmt.read().unwrap().attributes.cursor_type == CursorType::Static {
        return sql_fetch_scroll_static(stmt, odbc_handle, FetchOrientation::SQL_FETCH_NEXT, 0);
    }
    let row_array_size = stmt.read().unwrap().attributes.row_array_size;
    {
        let mut contents = stmt.write().unwrap();
        let need_new_page = contents
            .row_set
            .read()
            .unwrap()
            .as_ref()
            .map(|rs| *contents.current_row_index.read().unwrap() + 1 >= rs.rows.len())
            .unwrap_or(true);
        if need_new_page {
            let already_done = contents
                .row_set
                .read()
                .unwrap()
                .as_ref()
                .map(|rs| rs.done)
                .unwrap_or(false);
            if already_done {
                return SqlReturn::NO_DATA;
            }
            let page = match contents
                .statement
                .as_mut()
                .ok_or(ODBCError::StatementNotExecuted)
                .and_then(|s| Ok(s.fetch(row_array_size.max(1))?))
            {
                Ok(page) => page,
                Err(e) => {
                    odbc_handle.add_diag_info(e);
                    return SqlReturn::ERROR;
                }
            };
            if page.rows.is_empty() {
                *contents.row_set.write().unwrap() = Some(page);
                return SqlReturn::NO_DATA;
            }
            *contents.current_row_index.write().unwrap() = 0;
            *contents.row_set.write().unwrap() = Some(page);
        } else {
            *contents.current_row_index.write().unwrap() += 1;
        }
    }
    *stmt.read().unwrap().var_data_cache.write().unwrap() = Some(HashMap::new());
    write_bound_columns(odbc_handle, stmt);
    SqlReturn::SUCCESS
}

/// Populates every column bound via `SQLBindCol` with the current row's
/// value, mirroring what `SQLGetData` would write for the same column.
fn write_bound_columns(odbc_handle: &mut OdbcHandle, stmt: &RwLock<Statement>) {
    let bound: Vec<(USmallInt, BoundColInfo)> = {
        let contents = stmt.read().unwrap();
        match contents.bound_cols.read().unwrap().as_ref() {
            Some(map) => map.iter().map(|(k, v)| (*k, *v)).collect(),
            None => return,
        }
    };
    for (col_num, info) in bound {
        let value: std::result::Result<Option<SqlValue>, ODBCError> = {
            let contents = stmt.read().unwrap();
            let row_in_set = *contents.current_row_index.read().unwrap();
            statement_row_value(&contents, row_in_set, col_num - 1)
        };
        let target_type =
            CDataType::from_i16(info.target_type).unwrap_or(CDataType::SQL_C_DEFAULT);
        match value {
            Ok(v) => unsafe {
                format_sql_value_data(
                    odbc_handle,
                    col_num,
                    target_type,
                    info.target_buffer,
                    info.buffer_length,
                    info.length_or_indicator,
                    v.as_ref(),
                    "SQLFetch",
                );
            },
            Err(e) => odbc_handle.add_diag_info(e),
        }
    }
}

#[no_mangle]
pub extern "C" fn SQLFetchScroll(
    statement_handle: HStmt,
    fetch_orientation: FetchOrientation,
    fetch_offset: Len,
) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(statement_handle);
    let stmt = must_be_valid!((*odbc_handle).as_statement());
    if stmt.read().unwrap().attributes.cursor_type == CursorType::Static {
        return sql_fetch_scroll_static(stmt, odbc_handle, fetch_orientation, fetch_offset);
    }
    if fetch_orientation != FetchOrientation::SQL_FETCH_NEXT {
        odbc_handle.add_diag_info(ODBCError::FetchTypeOutOfRange);
        return SqlReturn::ERROR;
    }
    sql_fetch(stmt, odbc_handle)
}

/// Moves a materialized `SQL_CURSOR_STATIC` statement's cursor according to
/// `orientation`, entirely within the `row_set` `materialize_static_cursor`
/// already pulled down. `current_row_index` holds `usize::MAX` before the
/// first row has been served.
fn sql_fetch_scroll_static(
    stmt: &RwLock<Statement>,
    odbc_handle: &mut OdbcHandle,
    orientation: FetchOrientation,
    offset: Len,
) -> SqlReturn {
    let len = stmt
        .read()
        .unwrap()
        .row_set
        .read()
        .unwrap()
        .as_ref()
        .map(|rs| rs.rows.len())
        .unwrap_or(0);
    let current = *stmt.read().unwrap().current_row_index.read().unwrap();
    let new_index = match orientation {
        FetchOrientation::SQL_FETCH_NEXT => {
            let next = if current == usize::MAX { 0 } else { current + 1 };
            (next < len).then_some(next)
        }
        FetchOrientation::SQL_FETCH_PRIOR => {
            (current != usize::MAX && current > 0).then(|| current - 1)
        }
        FetchOrientation::SQL_FETCH_FIRST => (len > 0).then_some(0),
        FetchOrientation::SQL_FETCH_LAST => (len > 0).then(|| len - 1),
        FetchOrientation::SQL_FETCH_ABSOLUTE => {
            if offset > 0 {
                let idx = offset as usize - 1;
                (idx < len).then_some(idx)
            } else if offset < 0 {
                let from_end = (-offset) as usize;
                (from_end <= len).then(|| len - from_end)
            } else {
                None
            }
        }
        FetchOrientation::SQL_FETCH_RELATIVE => {
            let current_row_number: isize = if current == usize::MAX {
                0
            } else {
                current as isize + 1
            };
            let new_row_number = current_row_number + offset as isize;
            (new_row_number >= 1 && (new_row_number as usize) <= len)
                .then_some(new_row_number as usize - 1)
        }
        _ => {
            odbc_handle.add_diag_info(ODBCError::FetchTypeOutOfRange);
            return SqlReturn::ERROR;
        }
    };
    match new_index {
        Some(idx) => {
            *stmt.read().unwrap().current_row_index.write().unwrap() = idx;
            *stmt.read().unwrap().var_data_cache.write().unwrap() = Some(HashMap::new());
            write_bound_columns(odbc_handle, stmt);
            SqlReturn::SUCCESS
        }
        None => SqlReturn::NO_DATA,
    }
}

#[no_mangle]
pub extern "C" fn SQLForeignKeys(
    statement_handle: HStmt,
    _pk_catalog_name: *const Char,
    _pk_catalog_name_length: SmallInt,
    _pk_schema_name: *const Char,
    _pk_schema_name_length: SmallInt,
    _pk_table_name: *const Char,
    _pk_table_name_length: SmallInt,
    _fk_catalog_name: *const Char,
    _fk_catalog_name_length: SmallInt,
    _fk_schema_name: *const Char,
    _fk_schema_name_length: SmallInt,
    _fk_table_name: *const Char,
    _fk_table_name_length: SmallInt,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(statement_handle), "SQLForeignKeys")
}

#[no_mangle]
pub extern "C" fn SQLForeignKeysW(
    statement_handle: HStmt,
    pk_catalog_name: *const WChar,
    pk_catalog_name_length: SmallInt,
    pk_schema_name: *const WChar,
    pk_schema_name_length: SmallInt,
    pk_table_name: *const WChar,
    pk_table_name_length: SmallInt,
    fk_catalog_name: *const WChar,
    fk_catalog_name_length: SmallInt,
    fk_schema_name: *const WChar,
    fk_schema_name_length: SmallInt,
    fk_table_name: *const WChar,
    fk_table_name_length: SmallInt,
) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(statement_handle);
    let stmt = must_be_valid!((*odbc_handle).as_statement());
    let pk_catalog = input_wtext_to_string(pk_catalog_name, pk_catalog_name_length as usize);
    let pk_schema = input_wtext_to_string(pk_schema_name, pk_schema_name_length as usize);
    let pk_table = input_wtext_to_string(pk_table_name, pk_table_name_length as usize);
    let fk_catalog = input_wtext_to_string(fk_catalog_name, fk_catalog_name_length as usize);
    let fk_schema = input_wtext_to_string(fk_schema_name, fk_schema_name_length as usize);
    let fk_table = input_wtext_to_string(fk_table_name, fk_table_name_length as usize);
    let query = CatalogQuery::ForeignKeys {
        pk_catalog: catalog_arg(&pk_catalog),
        pk_schema: catalog_arg(&pk_schema),
        pk_table: catalog_arg(&pk_table),
        fk_catalog: catalog_arg(&fk_catalog),
        fk_schema: catalog_arg(&fk_schema),
        fk_table: catalog_arg(&fk_table),
    };
    run_catalog_query(odbc_handle, stmt, query)
}

#[no_mangle]
pub extern "C" fn SQLFreeHandle(handle_type: HandleType, handle: Handle) -> SqlReturn {
    match sql_free_handle(handle_type, handle as *mut _) {
        Ok(_) => SqlReturn::SUCCESS,
        Err(_) => SqlReturn::INVALID_HANDLE,
    }
}

fn sql_free_handle(handle_type: HandleType, handle: *mut OdbcHandle) -> Result<()> {
    match handle_type {
        // By making Boxes to the types and letting them go out of
        // scope, they will be dropped.
        HandleType::Env => {
            let _ = unsafe {
                (*handle)
                    .as_env()
                    .ok_or(ODBCError::InvalidHandleType(HANDLE_MUST_BE_ENV_ERROR))?
            };
        }
        HandleType::Dbc => {
            let conn = unsafe {
                (*handle)
                    .as_connection()
                    .ok_or(ODBCError::InvalidHandleType(HANDLE_MUST_BE_CONN_ERROR))?
            };
            let mut env_contents = unsafe {
                (*conn.write().unwrap().env)
                    .as_env()
                    .ok_or(ODBCError::InvalidHandleType(HANDLE_MUST_BE_ENV_ERROR))?
                    .write()
                    .unwrap()
            };
            env_contents.connections.remove(&handle);
            if env_contents.connections.is_empty() {
                env_contents.state = EnvState::Allocated;
            }
        }
        HandleType::Stmt => {
            let stmt = unsafe {
                (*handle)
                    .as_statement()
                    .ok_or(ODBCError::InvalidHandleType(HANDLE_MUST_BE_STMT_ERROR))?
            };
            // Actually reading this value would make ASAN fail, but this
            // is what the ODBC standard expects.
            let mut conn_contents = unsafe {
                (*stmt.write().unwrap().connection)
                    .as_connection()
                    .ok_or(ODBCError::InvalidHandleType(HANDLE_MUST_BE_CONN_ERROR))?
                    .write()
                    .unwrap()
            };
            conn_contents.statements.remove(&handle);
            if conn_contents.statements.is_empty() {
                conn_contents.state = ConnectionState::Connected;
            }
        }
        HandleType::Desc => {
            let _ = unsafe {
                (*handle)
                    .as_descriptor()
                    .ok_or(ODBCError::InvalidHandleType(HANDLE_MUST_BE_DESC_ERROR))?
            };
        }
    }
    // create the Box at the end to ensure Drop only occurs when there are no errors due
    // to incorrect handle type.
    let _ = unsafe { Box::from_raw(handle) };
    Ok(())
}

#[no_mangle]
pub extern "C" fn SQLFreeStmt(statement_handle: HStmt, option: SmallInt) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(statement_handle);
    let stmt = must_be_valid!((*odbc_handle).as_statement());
    if option == FreeStmtOption::Close as SmallInt {
        let mut contents = stmt.write().unwrap();
        contents.statement = None;
        *contents.row_set.write().unwrap() = None;
        *contents.current_row_index.write().unwrap() = 0;
        *contents.var_data_cache.write().unwrap() = None;
    } else if option == FreeStmtOption::Unbind as SmallInt {
        *stmt.write().unwrap().bound_cols.write().unwrap() = None;
    } else if option == FreeStmtOption::ResetParams as SmallInt {
        *stmt.write().unwrap().bound_params.write().unwrap() = None;
    } else {
        odbc_handle.add_diag_info(ODBCError::InvalidAttrValue("SQLFreeStmt option"));
        return SqlReturn::ERROR;
    }
    SqlReturn::SUCCESS
}

#[no_mangle]
pub extern "C" fn SQLGetConnectAttr(
    connection_handle: HDbc,
    _attribute: ConnectionAttribute,
    _value_ptr: Pointer,
    _buffer_length: Integer,
    _string_length_ptr: *mut Integer,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(connection_handle), "SQLGetConnectAttr")
}

#[no_mangle]
pub extern "C" fn SQLGetConnectAttrW(
    connection_handle: HDbc,
    attribute: ConnectionAttribute,
    value_ptr: Pointer,
    buffer_length: Integer,
    string_length_ptr: *mut Integer,
) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(connection_handle);
    odbc_handle.clear_diagnostics();
    let conn = must_be_valid!((*odbc_handle).as_connection());
    let conn_contents = conn.read().unwrap();
    let wire_connection = conn_contents.wire_connection.as_ref();
    match attribute {
        ConnectionAttribute::SQL_ATTR_CURRENT_CATALOG => {
            let catalog = conn_contents.attributes.current_catalog.clone().unwrap_or_default();
            unsafe {
                data::i32_len::set_output_wstring_as_bytes(
                    &catalog,
                    value_ptr,
                    buffer_length as usize,
                    string_length_ptr,
                )
            }
        }
        ConnectionAttribute::SQL_ATTR_LOGIN_TIMEOUT => unsafe {
            *(value_ptr as *mut ULen) = conn_contents.attributes.login_timeout.unwrap_or(0) as ULen;
            set_str_length(string_length_ptr, size_of::<ULen>() as Integer);
            SqlReturn::SUCCESS
        },
        ConnectionAttribute::SQL_ATTR_CONNECTION_TIMEOUT => unsafe {
            *(value_ptr as *mut ULen) =
                conn_contents.attributes.connection_timeout.unwrap_or(0) as ULen;
            set_str_length(string_length_ptr, size_of::<ULen>() as Integer);
            SqlReturn::SUCCESS
        },
        ConnectionAttribute::SQL_ATTR_AUTOCOMMIT => unsafe {
            let autocommit = wire_connection.map(|c| c.autocommit).unwrap_or(true);
            *(value_ptr as *mut ULen) = autocommit as ULen;
            set_str_length(string_length_ptr, size_of::<ULen>() as Integer);
            SqlReturn::SUCCESS
        },
        ConnectionAttribute::SQL_ATTR_TXN_ISOLATION => unsafe {
            let bitmask = match wire_connection.map(|c| c.transaction_isolation) {
                Some(odbc_driver_core::TransactionIsolation::ReadUncommitted) => {
                    SQL_TXN_READ_UNCOMMITTED
                }
                Some(odbc_driver_core::TransactionIsolation::ReadCommitted) | None => {
                    SQL_TXN_READ_COMMITTED
                }
                Some(odbc_driver_core::TransactionIsolation::RepeatableRead) => {
                    SQL_TXN_REPEATABLE_READ
                }
                Some(odbc_driver_core::TransactionIsolation::Serializable) => {
                    definitions::SQL_TXN_SERIALIZABLE
                }
            };
            *(value_ptr as *mut ULen) = bitmask as ULen;
            set_str_length(string_length_ptr, size_of::<ULen>() as Integer);
            SqlReturn::SUCCESS
        },
        ConnectionAttribute::SQL_ATTR_CONNECTION_DEAD => unsafe {
            let is_dead = match wire_connection {
                Some(c) => c.is_dead(),
                None => true,
            };
            *(value_ptr as *mut ULen) = is_dead as ULen;
            set_str_length(string_length_ptr, size_of::<ULen>() as Integer);
            SqlReturn::SUCCESS
        },
        ConnectionAttribute::SQL_ATTR_AUTO_IPD => unsafe {
            *(value_ptr as *mut ULen) = SqlBool::SQL_TRUE as ULen;
            set_str_length(string_length_ptr, size_of::<ULen>() as Integer);
            SqlReturn::SUCCESS
        },
        other => {
            drop(conn_contents);
            odbc_handle.add_diag_info(ODBCError::Unimplemented(match other {
                ConnectionAttribute::SQL_ATTR_ACCESS_MODE => "SQL_ATTR_ACCESS_MODE",
                ConnectionAttribute::SQL_ATTR_ASYNC_ENABLE => "SQL_ATTR_ASYNC_ENABLE",
                ConnectionAttribute::SQL_ATTR_TRACE => "SQL_ATTR_TRACE",
                ConnectionAttribute::SQL_ATTR_TRACEFILE => "SQL_ATTR_TRACEFILE",
                ConnectionAttribute::SQL_ATTR_TRANSLATE_LIB => "SQL_ATTR_TRANSLATE_LIB",
                ConnectionAttribute::SQL_ATTR_TRANSLATE_OPTION => "SQL_ATTR_TRANSLATE_OPTION",
                ConnectionAttribute::SQL_ATTR_ODBC_CURSORS => "SQL_ATTR_ODBC_CURSORS",
                ConnectionAttribute::SQL_ATTR_QUIET_MODE => "SQL_ATTR_QUIET_MODE",
                ConnectionAttribute::SQL_ATTR_PACKET_SIZE => "SQL_ATTR_PACKET_SIZE",
                ConnectionAttribute::SQL_ATTR_DISCONNECT_BEHAVIOR => {
                    "SQL_ATTR_DISCONNECT_BEHAVIOR"
                }
                ConnectionAttribute::SQL_ATTR_ASYNC_DBC_FUNCTIONS_ENABLE => {
                    "SQL_ATTR_ASYNC_DBC_FUNCTIONS_ENABLE"
                }
                ConnectionAttribute::SQL_ATTR_ASYNC_DBC_EVENT => "SQL_ATTR_ASYNC_DBC_EVENT",
                ConnectionAttribute::SQL_ATTR_ENLIST_IN_DTC => "SQL_ATTR_ENLIST_IN_DTC",
                ConnectionAttribute::SQL_ATTR_ENLIST_IN_XA => "SQL_ATTR_ENLIST_IN_XA",
                ConnectionAttribute::SQL_ATTR_APP_WCHAR_TYPE => "SQL_ATTR_APP_WCHAR_TYPE",
                ConnectionAttribute::SQL_ATTR_METADATA_ID => "SQL_ATTR_METADATA_ID",
                ConnectionAttribute::SQL_ATTR_RESET_CONNECTION => "SQL_ATTR_RESET_CONNECTION",
                _ => "SQLGetConnectAttrW attribute",
            }));
            SqlReturn::ERROR
        }
    }
}

#[no_mangle]
pub extern "C" fn SQLGetCursorName(
    statement_handle: HStmt,
    _cursor_name: *mut Char,
    _buffer_length: SmallInt,
    _name_length_ptr: *mut SmallInt,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(statement_handle), "SQLGetCursorName")
}

#[no_mangle]
pub extern "C" fn SQLGetCursorNameW(
    statement_handle: HStmt,
    _cursor_name: *mut WChar,
    _buffer_length: SmallInt,
    _name_length_ptr: *mut SmallInt,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(statement_handle), "SQLGetCursorNameW")
}

#[no_mangle]
pub extern "C" fn SQLGetData(
    statement_handle: HStmt,
    col_or_param_num: USmallInt,
    target_type: CDataType,
    target_value_ptr: Pointer,
    buffer_length: Len,
    str_len_or_ind_ptr: *mut Len,
) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(statement_handle);
    let stmt = must_be_valid!((*odbc_handle).as_statement());
    unsafe {
        sql_get_data(
            odbc_handle,
            stmt,
            col_or_param_num,
            target_type,
            target_value_ptr,
            buffer_length,
            str_len_or_ind_ptr,
        )
    }
}

/// Writes one column's value for the current row, resuming a streamed
/// `Char`/`WChar`/`Bin` value left over from a previous call on the same
/// column before falling back to a fresh read off the underlying statement.
#[allow(clippy::too_many_arguments)]
unsafe fn sql_get_data(
    odbc_handle: &mut OdbcHandle,
    stmt: &RwLock<Statement>,
    col_or_param_num: USmallInt,
    target_type: CDataType,
    target_value_ptr: Pointer,
    buffer_length: Len,
    str_len_or_ind_ptr: *mut Len,
) -> SqlReturn {
    let cached = stmt
        .read()
        .unwrap()
        .var_data_cache
        .write()
        .unwrap()
        .as_mut()
        .and_then(|cache| cache.remove(&col_or_param_num));
    if let Some(cached_data) = cached {
        return format_cached_data(
            odbc_handle,
            cached_data,
            col_or_param_num,
            target_type,
            target_value_ptr,
            buffer_length,
            str_len_or_ind_ptr,
            "SQLGetData",
        );
    }
    if col_or_param_num == 0 {
        odbc_handle.add_diag_info(ODBCError::Unimplemented("SQLGetData (bookmark column)"));
        return SqlReturn::ERROR;
    }
    let col_index = col_or_param_num - 1;
    let value: std::result::Result<Option<SqlValue>, ODBCError> = {
        let contents = stmt.read().unwrap();
        let row_in_set = *contents.current_row_index.read().unwrap();
        statement_row_value(&contents, row_in_set, col_index)
    };
    match value {
        Ok(v) => format_sql_value_data(
            odbc_handle,
            col_or_param_num,
            target_type,
            target_value_ptr,
            buffer_length,
            str_len_or_ind_ptr,
            v.as_ref(),
            "SQLGetData",
        ),
        Err(e) => {
            odbc_handle.add_diag_info(e);
            SqlReturn::ERROR
        }
    }
}

#[no_mangle]
pub extern "C" fn SQLGetDescField(
    descriptor_handle: HDesc,
    _record_number: SmallInt,
    _field_identifier: SmallInt,
    _value_ptr: Pointer,
    _buffer_length: Integer,
    _string_length_ptr: *mut Integer,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(descriptor_handle), "SQLGetDescField")
}

#[no_mangle]
pub extern "C" fn SQLGetDescFieldW(
    descriptor_handle: HDesc,
    record_number: SmallInt,
    field_identifier: SmallInt,
    value_ptr: Pointer,
    buffer_length: Integer,
    string_length_ptr: *mut Integer,
) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(descriptor_handle);
    odbc_handle.clear_diagnostics();
    let desc = must_be_valid!((*odbc_handle).as_descriptor());
    let field = match Desc::from_i16(field_identifier) {
        Some(f) => f,
        None => {
            odbc_handle.add_diag_info(ODBCError::UnsupportedFieldDescriptor(format!(
                "{field_identifier}"
            )));
            return SqlReturn::ERROR;
        }
    };
    let desc_contents = desc.read().unwrap();
    let attrs = desc_contents.attributes.read().unwrap();

    match field {
        Desc::SQL_DESC_COUNT => unsafe {
            data::i32_len::set_output_fixed_data(
                &(attrs.records.len() as SmallInt),
                value_ptr,
                string_length_ptr,
            )
        },
        Desc::SQL_DESC_ARRAY_SIZE => unsafe {
            data::i32_len::set_output_fixed_data(&attrs.array_size, value_ptr, string_length_ptr)
        },
        Desc::SQL_DESC_ARRAY_STATUS_PTR => unsafe {
            *(value_ptr as *mut _) = attrs.array_status_ptr;
            set_str_length(string_length_ptr, size_of::<*mut USmallInt>() as Integer);
            SqlReturn::SUCCESS
        },
        Desc::SQL_DESC_BIND_OFFSET_PTR => unsafe {
            *(value_ptr as *mut _) = attrs.bind_offset_ptr;
            set_str_length(string_length_ptr, size_of::<*mut Len>() as Integer);
            SqlReturn::SUCCESS
        },
        Desc::SQL_DESC_BIND_TYPE => unsafe {
            data::i32_len::set_output_fixed_data(&attrs.bind_type, value_ptr, string_length_ptr)
        },
        Desc::SQL_DESC_ROWS_PROCESSED_PTR => unsafe {
            *(value_ptr as *mut _) = attrs.rows_processed_ptr;
            set_str_length(string_length_ptr, size_of::<*mut ULen>() as Integer);
            SqlReturn::SUCCESS
        },
        _ => {
            let record = match attrs.record(record_number) {
                Some(r) => r,
                None => {
                    odbc_handle.add_diag_info(ODBCError::InvalidDescriptorIndex(record_number));
                    return SqlReturn::ERROR;
                }
            };
            match field {
                Desc::SQL_DESC_TYPE => unsafe {
                    data::i32_len::set_output_fixed_data(
                        &record.r#type,
                        value_ptr,
                        string_length_ptr,
                    )
                },
                Desc::SQL_DESC_CONCISE_TYPE => unsafe {
                    data::i32_len::set_output_fixed_data(
                        &record.concise_type,
                        value_ptr,
                        string_length_ptr,
                    )
                },
                Desc::SQL_DESC_LENGTH => unsafe {
                    data::i32_len::set_output_fixed_data(
                        &record.length,
                        value_ptr,
                        string_length_ptr,
                    )
                },
                Desc::SQL_DESC_OCTET_LENGTH => unsafe {
                    data::i32_len::set_output_fixed_data(
                        &record.octet_length,
                        value_ptr,
                        string_length_ptr,
                    )
                },
                Desc::SQL_DESC_OCTET_LENGTH_PTR => unsafe {
                    *(value_ptr as *mut _) = record.octet_length_ptr;
                    set_str_length(string_length_ptr, size_of::<*mut Len>() as Integer);
                    SqlReturn::SUCCESS
                },
                Desc::SQL_DESC_PRECISION => unsafe {
                    data::i32_len::set_output_fixed_data(
                        &record.precision,
                        value_ptr,
                        string_length_ptr,
                    )
                },
                Desc::SQL_DESC_SCALE => unsafe {
                    data::i32_len::set_output_fixed_data(
                        &record.scale,
                        value_ptr,
                        string_length_ptr,
                    )
                },
                Desc::SQL_DESC_NULLABLE => unsafe {
                    data::i32_len::set_output_fixed_data(
                        &record.nullable,
                        value_ptr,
                        string_length_ptr,
                    )
                },
                Desc::SQL_DESC_INDICATOR_PTR => unsafe {
                    *(value_ptr as *mut _) = record.indicator_ptr;
                    set_str_length(string_length_ptr, size_of::<*mut Len>() as Integer);
                    SqlReturn::SUCCESS
                },
                Desc::SQL_DESC_DATA_PTR => unsafe {
                    *(value_ptr as *mut _) = record.data_ptr;
                    set_str_length(string_length_ptr, size_of::<Pointer>() as Integer);
                    SqlReturn::SUCCESS
                },
                Desc::SQL_DESC_NAME => unsafe {
                    data::i32_len::set_output_wstring_as_bytes(
                        &record.name,
                        value_ptr,
                        buffer_length as usize,
                        string_length_ptr,
                    )
                },
                Desc::SQL_DESC_UNNAMED => unsafe {
                    data::i32_len::set_output_fixed_data(
                        &record.unnamed,
                        value_ptr,
                        string_length_ptr,
                    )
                },
                Desc::SQL_DESC_PARAMETER_TYPE => unsafe {
                    data::i32_len::set_output_fixed_data(
                        &record.parameter_type,
                        value_ptr,
                        string_length_ptr,
                    )
                },
                other => {
                    odbc_handle
                        .add_diag_info(ODBCError::UnsupportedFieldDescriptor(format!("{other:?}")));
                    SqlReturn::ERROR
                }
            }
        }
    }
}

#[no_mangle]
pub extern "C" fn SQLGetDescRec(
    descriptor_handle: HDesc,
    _record_number: SmallInt,
    _name: *mut Char,
    _buffer_length: SmallInt,
    _string_length_ptr: *mut SmallInt,
    _type_ptr: *mut SmallInt,
    _sub_type_ptr: *mut SmallInt,
    _length_ptr: *mut Len,
    _precision_ptr: *mut SmallInt,
    _scale_ptr: *mut SmallInt,
    _nullable_ptr: *mut Nullability,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(descriptor_handle), "SQLGetDescRec")
}

#[no_mangle]
pub extern "C" fn SQLGetDescRecW(
    descriptor_handle: HDesc,
    record_number: SmallInt,
    name: *mut WChar,
    buffer_length: SmallInt,
    string_length_ptr: *mut SmallInt,
    type_ptr: *mut SmallInt,
    sub_type_ptr: *mut SmallInt,
    length_ptr: *mut Len,
    precision_ptr: *mut SmallInt,
    scale_ptr: *mut SmallInt,
    nullable_ptr: *mut Nullability,
) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(descriptor_handle);
    odbc_handle.clear_diagnostics();
    let desc = must_be_valid!((*odbc_handle).as_descriptor());
    let desc_contents = desc.read().unwrap();
    let attrs = desc_contents.attributes.read().unwrap();
    let record = match attrs.record(record_number) {
        Some(r) => r,
        None => {
            odbc_handle.add_diag_info(ODBCError::InvalidDescriptorIndex(record_number));
            return SqlReturn::ERROR;
        }
    };
    unsafe {
        data::ptr_safe_write(type_ptr, record.r#type);
        data::ptr_safe_write(sub_type_ptr, record.concise_type);
        data::ptr_safe_write(length_ptr, record.length as Len);
        data::ptr_safe_write(precision_ptr, record.precision);
        data::ptr_safe_write(scale_ptr, record.scale);
        data::ptr_safe_write(
            nullable_ptr,
            Nullability::from_i16(record.nullable).unwrap_or(Nullability::SQL_NULLABLE_UNKNOWN),
        );
    }
    set_output_string(
        &record.name,
        name,
        buffer_length as usize,
        string_length_ptr,
    )
}

#[no_mangle]
pub extern "C" fn SQLGetDiagField(
    _handle_type: HandleType,
    handle: Handle,
    _record_rumber: SmallInt,
    _diag_identifier: SmallInt,
    _diag_info_ptr: Pointer,
    _buffer_length: SmallInt,
    _string_length_ptr: *mut SmallInt,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(handle), "SQLGetDiagField")
}

#[no_mangle]
pub extern "C" fn SQLGetDiagFieldW(
    _handle_type: HandleType,
    handle: Handle,
    _record_rumber: SmallInt,
    _diag_identifier: SmallInt,
    _diag_info_ptr: Pointer,
    _buffer_length: SmallInt,
    _string_length_ptr: *mut SmallInt,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(handle), "SQLGetDiagFieldW")
}

#[no_mangle]
pub extern "C" fn SQLGetDiagRec(
    _handle_type: HandleType,
    handle: Handle,
    _rec_number: SmallInt,
    _state: *mut Char,
    _native_error_ptr: *mut Integer,
    _message_text: *mut Char,
    _buffer_length: SmallInt,
    _text_length_ptr: *mut SmallInt,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(handle), "SQLGetDiagRec")
}

#[no_mangle]
pub extern "C" fn SQLGetDiagRecW(
    handle_type: HandleType,
    handle: Handle,
    rec_number: SmallInt,
    state: *mut WChar,
    native_error_ptr: *mut Integer,
    message_text: *mut WChar,
    buffer_length: SmallInt,
    text_length_ptr: *mut SmallInt,
) -> SqlReturn {
    if rec_number < 1 || buffer_length < 0 {
        return SqlReturn::ERROR;
    }
    let odbc_handle = handle as *mut OdbcHandle;
    // Make the record number zero-indexed
    let rec_number = (rec_number - 1) as usize;

    let get_error = |errors: &Vec<ODBCError>| -> SqlReturn {
        match errors.get(rec_number) {
            Some(odbc_err) => util::get_diag_rec(
                odbc_err,
                state,
                message_text,
                buffer_length,
                text_length_ptr,
                native_error_ptr,
            ),
            None => SqlReturn::NO_DATA,
        }
    };

    match handle_type {
        HandleType::Env => {
            let env = unsafe_must_be_env!(odbc_handle);
            get_error(&(*env).read().unwrap().errors.read().unwrap())
        }
        HandleType::Dbc => {
            let dbc = unsafe_must_be_conn!(odbc_handle);
            get_error(&(*dbc).read().unwrap().errors.read().unwrap())
        }
        HandleType::Stmt => {
            let stmt = unsafe_must_be_stmt!(odbc_handle);
            get_error(&(*stmt).read().unwrap().errors.read().unwrap())
        }
        HandleType::Desc => {
            let desc = unsafe_must_be_desc!(odbc_handle);
            get_error(&(*desc).read().unwrap().errors.read().unwrap())
        }
    }
}

#[no_mangle]
pub extern "C" fn SQLGetEnvAttr(
    environment_handle: HEnv,
    _attribute: EnvironmentAttribute,
    _value_ptr: Pointer,
    _buffer_length: Integer,
    _string_length: *mut Integer,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(environment_handle), "SQLGetEnvAttr")
}

#[no_mangle]
pub extern "C" fn SQLGetEnvAttrW(
    environment_handle: HEnv,
    attribute: EnvironmentAttribute,
    value_ptr: Pointer,
    _buffer_length: Integer,
    string_length: *mut Integer,
) -> SqlReturn {
    let env_handle = OdbcHandleRef::from(environment_handle);
    env_handle.clear_diagnostics();
    let env = must_be_valid!(env_handle.as_env());
    let env_contents = env.read().unwrap();
    if value_ptr.is_null() {
        set_str_length(string_length, 0);
    } else {
        set_str_length(string_length, size_of::<Integer>() as Integer);
        match attribute {
            EnvironmentAttribute::SQL_ATTR_ODBC_VERSION => unsafe {
                *(value_ptr as *mut AttrOdbcVersion) = env_contents.attributes.odbc_ver;
            },
            EnvironmentAttribute::SQL_ATTR_OUTPUT_NTS => unsafe {
                *(value_ptr as *mut SqlBool) = env_contents.attributes.output_nts;
            },
            EnvironmentAttribute::SQL_ATTR_CONNECTION_POOLING => unsafe {
                *(value_ptr as *mut AttrConnectionPooling) = env_contents.attributes.connection_pooling;
            },
            EnvironmentAttribute::SQL_ATTR_CP_MATCH => unsafe {
                *(value_ptr as *mut AttrCpMatch) = env_contents.attributes.cp_match;
            },
        }
    }
    SqlReturn::SUCCESS
}

#[no_mangle]
pub extern "C" fn SQLGetInfo(
    connection_handle: HDbc,
    _info_type: InfoType,
    _info_value_ptr: Pointer,
    _buffer_length: SmallInt,
    _string_length_ptr: *mut SmallInt,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(connection_handle), "SQLGetInfo")
}

#[no_mangle]
pub extern "C" fn SQLGetInfoW(
    connection_handle: HDbc,
    info_type: InfoType,
    info_value_ptr: Pointer,
    buffer_length: SmallInt,
    string_length_ptr: *mut SmallInt,
) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(connection_handle);
    let conn = unsafe_must_be_conn!(odbc_handle);
    let conn_contents = conn.read().unwrap();
    let wire_connection = conn_contents.wire_connection.as_ref();

    let write_str = |s: &str| -> SqlReturn {
        set_output_string(s, info_value_ptr as *mut WChar, buffer_length as usize, string_length_ptr)
    };
    let write_u16 = |v: u16| -> SqlReturn {
        unsafe { data::i16_len::set_output_fixed_data(&v, info_value_ptr, string_length_ptr) }
    };
    let write_u32 = |v: u32| -> SqlReturn {
        unsafe { data::i16_len::set_output_fixed_data(&v, info_value_ptr, string_length_ptr) }
    };

    use InfoType::*;
    match info_type {
        SQL_DRIVER_NAME | SQL_DATA_SOURCE_NAME => write_str(constants::DRIVER_NAME),
        SQL_DRIVER_VER => write_str(&format_version(
            env!("CARGO_PKG_VERSION_MAJOR"),
            env!("CARGO_PKG_VERSION_MINOR"),
            env!("CARGO_PKG_VERSION_PATCH"),
        )),
        SQL_DBMS_NAME | SQL_SERVER_NAME => {
            write_str(wire_connection.map_or(constants::DRIVER_NAME, |c| c.dispatcher_name()))
        }
        SQL_DBMS_VER => write_str(&format_version(
            env!("CARGO_PKG_VERSION_MAJOR"),
            env!("CARGO_PKG_VERSION_MINOR"),
            env!("CARGO_PKG_VERSION_PATCH"),
        )),
        SQL_DATABASE_NAME => write_str(
            conn_contents
                .attributes
                .current_catalog
                .as_deref()
                .unwrap_or(""),
        ),
        SQL_USER_NAME => write_str(""),
        SQL_IDENTIFIER_QUOTE_CHAR => write_str("\""),
        SQL_CATALOG_NAME_SEPARATOR => write_str("."),
        SQL_CATALOG_TERM => write_str("catalog"),
        SQL_SCHEMA_TERM => write_str("schema"),
        SQL_TABLE_TERM => write_str("table"),
        SQL_SEARCH_PATTERN_ESCAPE => write_str("\\"),
        SQL_SPECIAL_CHARACTERS => write_str(""),
        SQL_KEYWORDS => write_str(""),
        SQL_ACCESSIBLE_TABLES | SQL_ACCESSIBLE_PROCEDURES | SQL_PROCEDURES
        | SQL_DATA_SOURCE_READ_ONLY | SQL_EXPRESSIONS_IN_ORDERBY | SQL_COLUMN_ALIAS
        | SQL_ORDER_BY_COLUMNS_IN_SELECT | SQL_OUTER_JOINS | SQL_MULT_RESULT_SETS
        | SQL_MULTIPLE_ACTIVE_TXN | SQL_INTEGRITY | SQL_PARAM_ARRAY_ROW_COUNTS
        | SQL_PARAM_ARRAY_SELECTS | SQL_NEED_LONG_DATA_LEN => write_str("N"),
        SQL_IDENTIFIER_CASE | SQL_QUOTED_IDENTIFIER_CASE => write_u16(1), // SQL_IC_UPPER
        SQL_MAX_COLUMN_NAME_LEN
        | SQL_MAX_CURSOR_NAME_LEN
        | SQL_MAX_SCHEMA_NAME_LEN
        | SQL_MAX_CATALOG_NAME_LEN
        | SQL_MAX_TABLE_NAME_LEN
        | SQL_MAX_IDENTIFIER_LEN => write_u16(128),
        SQL_MAX_DRIVER_CONNECTIONS | SQL_MAX_CONCURRENT_ACTIVITIES => write_u16(0), // unlimited
        SQL_MAX_COLUMNS_IN_TABLE | SQL_MAX_COLUMNS_IN_SELECT | SQL_MAX_STATEMENT_LEN
        | SQL_MAX_ROW_SIZE => write_u32(0), // no fixed limit
        SQL_TXN_CAPABLE => write_u16(2), // SQL_TC_ALL: statements and DDL share a transaction
        SQL_SCROLL_CONCURRENCY => write_u32(1), // SQL_SCCO_READ_ONLY
        SQL_ODBC_API_CONFORMANCE | SQL_ODBC_SAG_CLI_CONFORMANCE => write_u16(1), // SQL_OAC_LEVEL1
        SQL_SQL_CONFORMANCE => write_u32(0), // SQL_SC_SQL92_ENTRY
        SQL_CURSOR_COMMIT_BEHAVIOR | SQL_CURSOR_ROLLBACK_BEHAVIOR => write_u16(1), // SQL_CB_CLOSE
        SQL_CONCAT_NULL_BEHAVIOR => write_u16(0), // SQL_CB_NULL
        SQL_NULL_COLLATION => write_u16(0), // SQL_SC_AT_START
        SQL_GROUP_BY => write_u16(2), // SQL_GB_GROUP_BY_EQUALS_SELECT
        SQL_CATALOG_USAGE => write_u32(0),
        SQL_ALTER_TABLE | SQL_OJ_CAPABILITIES | SQL_POS_OPERATIONS | SQL_BATCH_SUPPORT
        | SQL_TIMEDATE_ADD_INTERVALS | SQL_TIMEDATE_DIFF_INTERVALS | SQL_CONVERT_FUNCTIONS
        | SQL_NUMERIC_FUNCTIONS | SQL_STRING_FUNCTIONS | SQL_SYSTEM_FUNCTIONS
        | SQL_TIMEDATE_FUNCTIONS | SQL_AGGREGATE_FUNCTIONS | SQL_SQL92_PREDICATES
        | SQL_SQL92_RELATIONAL_JOIN_OPERATORS | SQL_GETDATA_EXTENSIONS
        | SQL_STATIC_CURSOR_ATTRIBUTES1 | SQL_STATIC_CURSOR_ATTRIBUTES2
        | SQL_FORWARD_ONLY_CURSOR_ATTRIBUTES1 | SQL_FORWARD_ONLY_CURSOR_ATTRIBUTES2 => {
            write_u32(0)
        }
        SQL_DEFAULT_TXN_ISOLATION => write_u32(match wire_connection {
            Some(c) => match c.transaction_isolation {
                odbc_driver_core::TransactionIsolation::ReadUncommitted => {
                    SQL_TXN_READ_UNCOMMITTED
                }
                odbc_driver_core::TransactionIsolation::ReadCommitted => SQL_TXN_READ_COMMITTED,
                odbc_driver_core::TransactionIsolation::RepeatableRead => {
                    SQL_TXN_REPEATABLE_READ
                }
                odbc_driver_core::TransactionIsolation::Serializable => {
                    definitions::SQL_TXN_SERIALIZABLE
                }
            },
            None => SQL_TXN_READ_COMMITTED,
        }),
        SQL_TXN_ISOLATION_OPTION => write_u32(
            SQL_TXN_READ_UNCOMMITTED
                | SQL_TXN_READ_COMMITTED
                | SQL_TXN_REPEATABLE_READ
                | definitions::SQL_TXN_SERIALIZABLE,
        ),
        // Pointer-valued and async-mode info types this driver has no
        // backing value for.
        SQL_DRIVER_HDBC | SQL_DRIVER_HENV | SQL_DRIVER_HSTMT | SQL_ASYNC_MODE
        | SQL_BATCH_ROW_COUNT => write_u32(0),
    }
}

#[no_mangle]
pub extern "C" fn SQLGetStmtAttr(
    handle: HStmt,
    _attribute: StatementAttribute,
    _value_ptr: Pointer,
    _buffer_length: Integer,
    _string_length_ptr: *mut Integer,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(handle), "SQLGetStmtAttr")
}

#[no_mangle]
pub extern "C" fn SQLGetStmtAttrW(
    handle: HStmt,
    attribute: StatementAttribute,
    value_ptr: Pointer,
    _buffer_length: Integer,
    string_length_ptr: *mut Integer,
) -> SqlReturn {
    let stmt_handle = OdbcHandleRef::from(handle);
    stmt_handle.clear_diagnostics();
    let stmt = must_be_valid!(stmt_handle.as_statement());
    if value_ptr.is_null() {
        return SqlReturn::ERROR;
    }
    let stmt_contents = stmt.read().unwrap();
    // Most attributes have type SQLULEN, so default to the size of that
    // type.
    set_str_length(string_length_ptr, size_of::<ULen>() as Integer);
    match attribute {
        StatementAttribute::SQL_ATTR_APP_ROW_DESC => unsafe {
            *(value_ptr as *mut Pointer) = stmt_contents.attributes.app_row_desc;
            set_str_length(string_length_ptr, size_of::<Pointer>() as Integer);
        },
        StatementAttribute::SQL_ATTR_APP_PARAM_DESC => unsafe {
            *(value_ptr as *mut Pointer) = stmt_contents.attributes.app_param_desc;
            set_str_length(string_length_ptr, size_of::<Pointer>() as Integer);
        },
        StatementAttribute::SQL_ATTR_IMP_ROW_DESC => unsafe {
            *(value_ptr as *mut Pointer) = stmt_contents.attributes.imp_row_desc;
            set_str_length(string_length_ptr, size_of::<Pointer>() as Integer);
        },
        StatementAttribute::SQL_ATTR_IMP_PARAM_DESC => unsafe {
            *(value_ptr as *mut Pointer) = stmt_contents.attributes.imp_param_desc;
            set_str_length(string_length_ptr, size_of::<Pointer>() as Integer);
        },
        StatementAttribute::SQL_ATTR_FETCH_BOOKMARK_PTR => unsafe {
            *(value_ptr as *mut _) = stmt_contents.attributes.fetch_bookmark_ptr;
            set_str_length(string_length_ptr, size_of::<*mut Len>() as Integer);
        },
        StatementAttribute::SQL_ATTR_CURSOR_SCROLLABLE => unsafe {
            *(value_ptr as *mut CursorScrollable) = stmt_contents.attributes.cursor_scrollable;
        },
        StatementAttribute::SQL_ATTR_CURSOR_SENSITIVITY => unsafe {
            *(value_ptr as *mut CursorSensitivity) = stmt_contents.attributes.cursor_sensitivity;
        },
        StatementAttribute::SQL_ATTR_ASYNC_ENABLE => unsafe {
            *(value_ptr as *mut AsyncEnable) = stmt_contents.attributes.async_enable;
        },
        StatementAttribute::SQL_ATTR_CONCURRENCY => unsafe {
            *(value_ptr as *mut Concurrency) = stmt_contents.attributes.concurrency;
        },
        StatementAttribute::SQL_ATTR_CURSOR_TYPE => unsafe {
            *(value_ptr as *mut CursorType) = stmt_contents.attributes.cursor_type;
        },
        StatementAttribute::SQL_ATTR_ENABLE_AUTO_IPD => unsafe {
            *(value_ptr as *mut SqlBool) = stmt_contents.attributes.enable_auto_ipd;
        },
        StatementAttribute::SQL_ATTR_KEYSET_SIZE => unsafe {
            *(value_ptr as *mut ULen) = 0;
        },
        StatementAttribute::SQL_ATTR_MAX_LENGTH => unsafe {
            *(value_ptr as *mut ULen) = stmt_contents.attributes.max_length;
        },
        StatementAttribute::SQL_ATTR_MAX_ROWS => unsafe {
            *(value_ptr as *mut ULen) = stmt_contents.attributes.max_rows;
        },
        StatementAttribute::SQL_ATTR_NOSCAN => unsafe {
            *(value_ptr as *mut NoScan) = stmt_contents.attributes.no_scan;
        },
        StatementAttribute::SQL_ATTR_PARAM_BIND_OFFSET_PTR => unsafe {
            *(value_ptr as *mut _) = stmt_contents.attributes.param_bind_offset_ptr;
            set_str_length(string_length_ptr, size_of::<*mut ULen>() as Integer)
        },
        StatementAttribute::SQL_ATTR_PARAM_BIND_TYPE => unsafe {
            *(value_ptr as *mut ULen) = stmt_contents.attributes.param_bind_type;
        },
        StatementAttribute::SQL_ATTR_PARAM_OPERATION_PTR => unsafe {
            *(value_ptr as *mut _) = stmt_contents.attributes.param_operation_ptr;
            set_str_length(string_length_ptr, size_of::<*mut USmallInt>() as Integer)
        },
        StatementAttribute::SQL_ATTR_PARAM_STATUS_PTR => unsafe {
            *(value_ptr as *mut _) = stmt_contents.attributes.param_status_ptr;
            set_str_length(string_length_ptr, size_of::<*mut USmallInt>() as Integer)
        },
        StatementAttribute::SQL_ATTR_PARAMS_PROCESSED_PTR => unsafe {
            *(value_ptr as *mut _) = stmt_contents.attributes.param_processed_ptr;
            set_str_length(string_length_ptr, size_of::<*mut ULen>() as Integer)
        },
        StatementAttribute::SQL_ATTR_PARAMSET_SIZE => unsafe {
            *(value_ptr as *mut ULen) = stmt_contents.attributes.paramset_size;
        },
        StatementAttribute::SQL_ATTR_QUERY_TIMEOUT => unsafe {
            *(value_ptr as *mut ULen) = stmt_contents.attributes.query_timeout;
        },
        StatementAttribute::SQL_ATTR_RETRIEVE_DATA => unsafe {
            *(value_ptr as *mut RetrieveData) = stmt_contents.attributes.retrieve_data;
        },
        StatementAttribute::SQL_ATTR_ROW_BIND_OFFSET_PTR => unsafe {
            *(value_ptr as *mut _) = stmt_contents.attributes.row_bind_offset_ptr;
            set_str_length(string_length_ptr, size_of::<*mut ULen>() as Integer)
        },
        StatementAttribute::SQL_ATTR_ROW_BIND_TYPE => unsafe {
            *(value_ptr as *mut ULen) = stmt_contents.attributes.row_bind_type;
        },
        StatementAttribute::SQL_ATTR_ROW_NUMBER => unsafe {
            *(value_ptr as *mut ULen) = stmt_contents.attributes.row_number;
        },
        StatementAttribute::SQL_ATTR_ROW_OPERATION_PTR => unsafe {
            *(value_ptr as *mut _) = stmt_contents.attributes.row_operation_ptr;
            set_str_length(string_length_ptr, size_of::<*mut USmallInt>() as Integer)
        },
        StatementAttribute::SQL_ATTR_ROW_STATUS_PTR => unsafe {
            *(value_ptr as *mut _) = stmt_contents.attributes.row_status_ptr;
            set_str_length(string_length_ptr, size_of::<*mut USmallInt>() as Integer)
        },
        StatementAttribute::SQL_ATTR_ROWS_FETCHED_PTR => unsafe {
            *(value_ptr as *mut _) = stmt_contents.attributes.rows_fetched_ptr;
            set_str_length(string_length_ptr, size_of::<*mut ULen>() as Integer)
        },
        StatementAttribute::SQL_ATTR_ROW_ARRAY_SIZE => unsafe {
            *(value_ptr as *mut ULen) = stmt_contents.attributes.row_array_size;
        },
        StatementAttribute::SQL_ATTR_SIMULATE_CURSOR => unsafe {
            *(value_ptr as *mut ULen) = stmt_contents.attributes.simulate_cursor;
        },
        StatementAttribute::SQL_ATTR_USE_BOOKMARKS => unsafe {
            *(value_ptr as *mut UseBookmarks) = stmt_contents.attributes.use_bookmarks;
        },
        StatementAttribute::SQL_ATTR_ASYNC_STMT_EVENT => unsafe {
            *(value_ptr as *mut _) = stmt_contents.attributes.async_stmt_event;
        },
        StatementAttribute::SQL_ATTR_METADATA_ID => unsafe {
            *(value_ptr as *mut SqlBool) = stmt_contents.attributes.metadata_id;
        },
    }
    SqlReturn::SUCCESS
}

#[no_mangle]
pub extern "C" fn SQLGetTypeInfo(statement_handle: HStmt, data_type: SqlDataType) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(statement_handle);
    let stmt = must_be_valid!((*odbc_handle).as_statement());
    // SQL_ALL_TYPES and SQL_UNKNOWN_TYPE share the value 0; a caller asking
    // for "every type" arrives here indistinguishable from SQL_UNKNOWN_TYPE.
    let query = CatalogQuery::TypeInfo {
        data_type: (data_type != SqlDataType::SQL_UNKNOWN_TYPE).then_some(data_type),
    };
    run_catalog_query(odbc_handle, stmt, query)
}

#[no_mangle]
pub extern "C" fn SQLMoreResults(handle: HStmt) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(handle);
    let stmt = unsafe_must_be_stmt!(odbc_handle);
    let stmt_contents = stmt.read().unwrap();
    // Every statement this driver executes produces at most one result set;
    // there is never a second one to advance to.
    match stmt_contents.statement {
        Some(_) => SqlReturn::NO_DATA,
        None => odbc_unwrap!(Err::<(), _>(ODBCError::StatementNotExecuted), odbc_handle),
    }
}

#[no_mangle]
pub extern "C" fn SQLNativeSql(
    connection_handle: HDbc,
    _in_statement_text: *const Char,
    _in_statement_len: Integer,
    _out_statement_text: *mut Char,
    _buffer_len: Integer,
    _out_statement_len: *mut Integer,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(connection_handle), "SQLNativeSql")
}

#[no_mangle]
pub extern "C" fn SQLNativeSqlW(
    connection_handle: HDbc,
    in_statement_text: *const WChar,
    in_statement_len: Integer,
    out_statement_text: *mut WChar,
    buffer_len: Integer,
    out_statement_len: *mut Integer,
) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(connection_handle);
    odbc_handle.clear_diagnostics();
    must_be_valid!((*odbc_handle).as_connection());
    // This driver never rewrites SQL text before sending it to the wire
    // client, so the "native" form is whatever the application passed in.
    let sql = input_wtext_to_string(in_statement_text, in_statement_len as usize);
    unsafe {
        data::i32_len::set_output_wstring_as_bytes(
            &sql,
            out_statement_text as Pointer,
            buffer_len as usize,
            out_statement_len,
        )
    }
}

/// With no SQL parser behind this driver, the only parameters it knows about
/// are ones a prior `SQLBindParameter` call described; this reports that
/// count rather than the statement text's actual placeholder count.
#[no_mangle]
pub extern "C" fn SQLNumParams(statement_handle: HStmt, param_count_ptr: *mut SmallInt) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(statement_handle);
    let stmt = must_be_valid!((*odbc_handle).as_statement());
    let count = stmt
        .read()
        .unwrap()
        .bound_params
        .read()
        .unwrap()
        .as_ref()
        .map(|m| m.len())
        .unwrap_or(0);
    unsafe {
        *param_count_ptr = count as SmallInt;
    }
    SqlReturn::SUCCESS
}

#[no_mangle]
pub extern "C" fn SQLNumResultCols(
    statement_handle: HStmt,
    column_count_ptr: *mut SmallInt,
) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(statement_handle);
    let stmt = must_be_valid!((*odbc_handle).as_statement());
    let stmt_contents = stmt.read().unwrap();
    let statement = stmt_contents.statement.as_ref();
    if statement.is_none() {
        unsafe {
            *column_count_ptr = 0;
        }
        return SqlReturn::SUCCESS;
    }
    unsafe {
        *column_count_ptr = statement.unwrap().get_resultset_metadata().len() as SmallInt;
    }
    SqlReturn::SUCCESS
}

/// Drives the data-at-execution round trip: flushes whatever `SQLPutData`
/// accumulated for the previously-active parameter into `dae_row`, then
/// either hands back the next pending parameter's buffer address (returning
/// `SQL_NEED_DATA` again) or, once every parameter has a value, runs the
/// statement and returns its result.
#[no_mangle]
pub extern "C" fn SQLParamData(hstmt: HStmt, value_ptr_ptr: *mut Pointer) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(hstmt);
    let stmt = must_be_valid!((*odbc_handle).as_statement());
    let stmt_contents = stmt.read().unwrap();
    if let Some(ord) = stmt_contents.active_dae_param.write().unwrap().take() {
        let info = *stmt_contents.bound_params.read().unwrap().as_ref().unwrap().get(&ord).unwrap();
        let accum = std::mem::take(&mut *stmt_contents.dae_accum.write().unwrap());
        let value_type = CDataType::from_i16(info.value_type).unwrap_or(CDataType::SQL_C_DEFAULT);
        let value = unsafe {
            c_buffer_to_sql_value(value_type, info.parameter_type, accum.as_ptr() as Pointer, accum.len())
        };
        match value {
            Ok(v) => {
                if let Some(row) = stmt_contents.dae_row.write().unwrap().as_mut() {
                    row[ord as usize - 1] = Some(v);
                }
            }
            Err(e) => {
                drop(stmt_contents);
                odbc_handle.add_diag_info(e);
                return SqlReturn::ERROR;
            }
        }
    }
    let next_ord = stmt_contents.dae_pending.read().unwrap().first().copied();
    match next_ord {
        Some(ord) => {
            stmt_contents.dae_pending.write().unwrap().remove(0);
            *stmt_contents.active_dae_param.write().unwrap() = Some(ord);
            stmt_contents.dae_accum.write().unwrap().clear();
            *stmt_contents.state.write().unwrap() = StatementState::FunctionNeedsDataNoPut;
            let ptr = stmt_contents
                .bound_params
                .read()
                .unwrap()
                .as_ref()
                .unwrap()
                .get(&ord)
                .unwrap()
                .parameter_value_ptr;
            unsafe {
                *value_ptr_ptr = ptr;
            }
            SqlReturn::NEED_DATA
        }
        None => {
            let sql = stmt_contents.dae_sql.write().unwrap().take();
            let row = stmt_contents.dae_row.write().unwrap().take();
            drop(stmt_contents);
            let sql = match sql {
                Some(s) => s,
                None => {
                    odbc_handle.add_diag_info(ODBCError::FunctionSequenceError);
                    return SqlReturn::ERROR;
                }
            };
            finish_execute(stmt, odbc_handle, &sql, &row.unwrap_or_default())
        }
    }
}

#[no_mangle]
pub extern "C" fn SQLPrepare(
    hstmt: HStmt,
    _statement_text: *const Char,
    _text_length: Integer,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(hstmt), "SQLPrepare")
}

#[no_mangle]
pub extern "C" fn SQLPrepareW(
    hstmt: HStmt,
    statement_text: *const WChar,
    text_length: Integer,
) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(hstmt);
    let stmt = must_be_valid!((*odbc_handle).as_statement());
    let sql = input_wtext_to_string(statement_text, text_length as usize);
    *stmt.write().unwrap().prepared_sql.write().unwrap() = Some(sql);
    SqlReturn::SUCCESS
}

#[no_mangle]
pub extern "C" fn SQLPrimaryKeys(
    statement_handle: HStmt,
    _catalog_name: *const Char,
    _catalog_name_length: SmallInt,
    _schema_name: *const Char,
    _schema_name_length: SmallInt,
    _table_name: *const Char,
    _table_name_length: SmallInt,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(statement_handle), "SQLPrimaryKeys")
}

#[no_mangle]
pub extern "C" fn SQLPrimaryKeysW(
    statement_handle: HStmt,
    catalog_name: *const WChar,
    catalog_name_length: SmallInt,
    schema_name: *const WChar,
    schema_name_length: SmallInt,
    table_name: *const WChar,
    table_name_length: SmallInt,
) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(statement_handle);
    let stmt = must_be_valid!((*odbc_handle).as_statement());
    let catalog = input_wtext_to_string(catalog_name, catalog_name_length as usize);
    let schema = input_wtext_to_string(schema_name, schema_name_length as usize);
    let table = input_wtext_to_string(table_name, table_name_length as usize);
    let query = CatalogQuery::PrimaryKeys {
        catalog: catalog_arg(&catalog),
        schema: catalog_arg(&schema),
        table,
    };
    run_catalog_query(odbc_handle, stmt, query)
}

#[no_mangle]
pub extern "C" fn SQLProcedureColumns(
    statement_handle: HStmt,
    _catalog_name: *const Char,
    _catalog_name_length: SmallInt,
    _schema_name: *const Char,
    _schema_name_length: SmallInt,
    _proc_name: *const Char,
    _proc_name_length: SmallInt,
    _column_name: *const Char,
    _column_name_length: SmallInt,
) -> SqlReturn {
    unsupported_function(
        OdbcHandleRef::from(statement_handle),
        "SQLProcedureColumns",
    )
}

#[no_mangle]
pub extern "C" fn SQLProcedureColumnsW(
    statement_handle: HStmt,
    catalog_name: *const WChar,
    catalog_name_length: SmallInt,
    schema_name: *const WChar,
    schema_name_length: SmallInt,
    proc_name: *const WChar,
    proc_name_length: SmallInt,
    column_name: *const WChar,
    column_name_length: SmallInt,
) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(statement_handle);
    let stmt = must_be_valid!((*odbc_handle).as_statement());
    let catalog = input_wtext_to_string(catalog_name, catalog_name_length as usize);
    let schema = input_wtext_to_string(schema_name, schema_name_length as usize);
    let procedure = input_wtext_to_string(proc_name, proc_name_length as usize);
    let column = input_wtext_to_string(column_name, column_name_length as usize);
    let query = CatalogQuery::ProcedureColumns {
        catalog: catalog_arg(&catalog),
        schema: catalog_arg(&schema),
        procedure: catalog_arg(&procedure),
        column: catalog_arg(&column),
    };
    run_catalog_query(odbc_handle, stmt, query)
}

#[no_mangle]
pub extern "C" fn SQLProcedures(
    statement_handle: HStmt,
    _catalog_name: *const Char,
    _catalog_name_length: SmallInt,
    _schema_name: *const Char,
    _schema_name_length: SmallInt,
    _proc_name: *const Char,
    _proc_name_length: SmallInt,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(statement_handle), "SQLProcedures")
}

#[no_mangle]
pub extern "C" fn SQLProceduresW(
    statement_handle: HStmt,
    catalog_name: *const WChar,
    catalog_name_length: SmallInt,
    schema_name: *const WChar,
    schema_name_length: SmallInt,
    proc_name: *const WChar,
    proc_name_length: SmallInt,
) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(statement_handle);
    let stmt = must_be_valid!((*odbc_handle).as_statement());
    let catalog = input_wtext_to_string(catalog_name, catalog_name_length as usize);
    let schema = input_wtext_to_string(schema_name, schema_name_length as usize);
    let procedure = input_wtext_to_string(proc_name, proc_name_length as usize);
    let query = CatalogQuery::Procedures {
        catalog: catalog_arg(&catalog),
        schema: catalog_arg(&schema),
        procedure: catalog_arg(&procedure),
    };
    run_catalog_query(odbc_handle, stmt, query)
}

#[no_mangle]
pub extern "C" fn SQLPutData(
    statement_handle: HStmt,
    data_ptr: Pointer,
    str_len_or_ind_ptr: Len,
) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(statement_handle);
    let stmt = must_be_valid!((*odbc_handle).as_statement());
    let stmt_contents = stmt.read().unwrap();
    let ord = match *stmt_contents.active_dae_param.read().unwrap() {
        Some(ord) => ord,
        None => {
            drop(stmt_contents);
            odbc_handle.add_diag_info(ODBCError::FunctionSequenceError);
            return SqlReturn::ERROR;
        }
    };
    if str_len_or_ind_ptr == definitions::SQL_NULL_DATA {
        if let Some(row) = stmt_contents.dae_row.write().unwrap().as_mut() {
            row[ord as usize - 1] = None;
        }
        return SqlReturn::SUCCESS;
    }
    if data_ptr.is_null() {
        return SqlReturn::SUCCESS;
    }
    let buffer_length = stmt_contents
        .bound_params
        .read()
        .unwrap()
        .as_ref()
        .and_then(|m| m.get(&ord))
        .map(|info| info.buffer_length)
        .unwrap_or(0);
    let len = if str_len_or_ind_ptr >= 0 {
        str_len_or_ind_ptr as usize
    } else {
        buffer_length.max(0) as usize
    };
    if len > 0 {
        let bytes = unsafe { std::slice::from_raw_parts(data_ptr as *const u8, len) };
        stmt_contents.dae_accum.write().unwrap().extend_from_slice(bytes);
    }
    *stmt_contents.state.write().unwrap() = StatementState::FunctionNeedsDataPutCalled;
    SqlReturn::SUCCESS
}

#[no_mangle]
pub extern "C" fn SQLRowCount(statement_handle: HStmt, row_count_ptr: *mut Len) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(statement_handle);
    // even though we always return 0, we must still assert that the proper handle
    // type is sent by the client.
    let _ = must_be_valid!((*odbc_handle).as_statement());
    unsafe {
        *row_count_ptr = 0 as Len;
    }
    SqlReturn::SUCCESS
}

#[no_mangle]
pub extern "C" fn SQLSetConnectAttr(
    hdbc: HDbc,
    _attr: ConnectionAttribute,
    _value: Pointer,
    _str_length: Integer,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(hdbc), "SQLSetConnectAttr")
}

#[no_mangle]
pub extern "C" fn SQLSetConnectAttrW(
    hdbc: HDbc,
    attr: ConnectionAttribute,
    value: Pointer,
    str_length: Integer,
) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(hdbc);
    odbc_handle.clear_diagnostics();
    let conn = unsafe_must_be_conn!(odbc_handle);
    match attr {
        ConnectionAttribute::SQL_ATTR_CURRENT_CATALOG => {
            let catalog = input_wtext_to_string(value as *const WChar, str_length as usize);
            conn.write().unwrap().attributes.current_catalog = Some(catalog);
            SqlReturn::SUCCESS
        }
        ConnectionAttribute::SQL_ATTR_LOGIN_TIMEOUT => {
            conn.write().unwrap().attributes.login_timeout = Some(value as u32);
            SqlReturn::SUCCESS
        }
        ConnectionAttribute::SQL_ATTR_CONNECTION_TIMEOUT => {
            conn.write().unwrap().attributes.connection_timeout = Some(value as u32);
            SqlReturn::SUCCESS
        }
        ConnectionAttribute::SQL_ATTR_AUTOCOMMIT => {
            let mut conn_contents = conn.write().unwrap();
            match conn_contents.wire_connection.as_mut() {
                Some(wire_connection) => {
                    wire_connection.autocommit = value as usize != 0;
                    SqlReturn::SUCCESS
                }
                None => {
                    drop(conn_contents);
                    odbc_handle.add_diag_info(ODBCError::ConnectionNotOpen);
                    SqlReturn::ERROR
                }
            }
        }
        ConnectionAttribute::SQL_ATTR_TXN_ISOLATION => {
            let isolation = match value as u32 {
                SQL_TXN_READ_UNCOMMITTED => odbc_driver_core::TransactionIsolation::ReadUncommitted,
                SQL_TXN_READ_COMMITTED => odbc_driver_core::TransactionIsolation::ReadCommitted,
                SQL_TXN_REPEATABLE_READ => odbc_driver_core::TransactionIsolation::RepeatableRead,
                v if v == definitions::SQL_TXN_SERIALIZABLE => {
                    odbc_driver_core::TransactionIsolation::Serializable
                }
                _ => {
                    odbc_handle.add_diag_info(ODBCError::InvalidAttrValue("SQL_ATTR_TXN_ISOLATION"));
                    return SqlReturn::ERROR;
                }
            };
            let mut conn_contents = conn.write().unwrap();
            match conn_contents.wire_connection.as_mut() {
                Some(wire_connection) => {
                    wire_connection.transaction_isolation = isolation;
                    SqlReturn::SUCCESS
                }
                None => {
                    drop(conn_contents);
                    odbc_handle.add_diag_info(ODBCError::ConnectionNotOpen);
                    SqlReturn::ERROR
                }
            }
        }
        ConnectionAttribute::SQL_ATTR_RESET_CONNECTION => {
            conn.write().unwrap().attributes = ConnectionAttributes::default();
            SqlReturn::SUCCESS
        }
        ConnectionAttribute::SQL_ATTR_ACCESS_MODE => {
            odbc_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_ACCESS_MODE"));
            SqlReturn::ERROR
        }
        ConnectionAttribute::SQL_ATTR_ASYNC_ENABLE => {
            odbc_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_ASYNC_ENABLE"));
            SqlReturn::ERROR
        }
        ConnectionAttribute::SQL_ATTR_TRACE => {
            odbc_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_TRACE"));
            SqlReturn::ERROR
        }
        ConnectionAttribute::SQL_ATTR_TRACEFILE => {
            odbc_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_TRACEFILE"));
            SqlReturn::ERROR
        }
        ConnectionAttribute::SQL_ATTR_TRANSLATE_LIB => {
            odbc_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_TRANSLATE_LIB"));
            SqlReturn::ERROR
        }
        ConnectionAttribute::SQL_ATTR_TRANSLATE_OPTION => {
            odbc_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_TRANSLATE_OPTION"));
            SqlReturn::ERROR
        }
        ConnectionAttribute::SQL_ATTR_ODBC_CURSORS => {
            odbc_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_ODBC_CURSORS"));
            SqlReturn::ERROR
        }
        ConnectionAttribute::SQL_ATTR_QUIET_MODE => {
            odbc_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_QUIET_MODE"));
            SqlReturn::ERROR
        }
        ConnectionAttribute::SQL_ATTR_PACKET_SIZE => {
            odbc_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_PACKET_SIZE"));
            SqlReturn::ERROR
        }
        ConnectionAttribute::SQL_ATTR_DISCONNECT_BEHAVIOR => {
            odbc_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_DISCONNECT_BEHAVIOR"));
            SqlReturn::ERROR
        }
        ConnectionAttribute::SQL_ATTR_ASYNC_DBC_FUNCTIONS_ENABLE => {
            odbc_handle.add_diag_info(ODBCError::Unimplemented(
                "SQL_ATTR_ASYNC_DBC_FUNCTIONS_ENABLE",
            ));
            SqlReturn::ERROR
        }
        ConnectionAttribute::SQL_ATTR_ASYNC_DBC_EVENT => {
            odbc_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_ASYNC_DBC_EVENT"));
            SqlReturn::ERROR
        }
        ConnectionAttribute::SQL_ATTR_ENLIST_IN_DTC => {
            odbc_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_ENLIST_IN_DTC"));
            SqlReturn::ERROR
        }
        ConnectionAttribute::SQL_ATTR_ENLIST_IN_XA => {
            odbc_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_ENLIST_IN_XA"));
            SqlReturn::ERROR
        }
        ConnectionAttribute::SQL_ATTR_CONNECTION_DEAD => {
            odbc_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_CONNECTION_DEAD"));
            SqlReturn::ERROR
        }
        ConnectionAttribute::SQL_ATTR_APP_WCHAR_TYPE => {
            odbc_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_APP_WCHAR_TYPE"));
            SqlReturn::ERROR
        }
        ConnectionAttribute::SQL_ATTR_AUTO_IPD => {
            odbc_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_AUTO_IPD"));
            SqlReturn::ERROR
        }
        ConnectionAttribute::SQL_ATTR_METADATA_ID => {
            odbc_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_METADATA_ID"));
            SqlReturn::ERROR
        }
    }
}

#[no_mangle]
pub extern "C" fn SQLSetCursorName(
    statement_handle: HStmt,
    _cursor_name: *const Char,
    _name_length: SmallInt,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(statement_handle), "SQLSetCursorName")
}

#[no_mangle]
pub extern "C" fn SQLSetCursorNameW(
    statement_handle: HStmt,
    _cursor_name: *const WChar,
    _name_length: SmallInt,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(statement_handle), "SQLSetCursorNameW")
}

#[no_mangle]
pub extern "C" fn SQLSetDescField(
    desc_handle: HDesc,
    rec_number: SmallInt,
    field_identifier: SmallInt,
    value_ptr: Pointer,
    buffer_length: Integer,
) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(desc_handle);
    odbc_handle.clear_diagnostics();
    let desc = must_be_valid!((*odbc_handle).as_descriptor());
    let field = match Desc::from_i16(field_identifier) {
        Some(f) => f,
        None => {
            odbc_handle.add_diag_info(ODBCError::UnsupportedFieldDescriptor(format!(
                "{field_identifier}"
            )));
            return SqlReturn::ERROR;
        }
    };
    let desc_contents = desc.write().unwrap();
    let mut attrs = desc_contents.attributes.write().unwrap();

    match field {
        Desc::SQL_DESC_COUNT => {
            attrs.set_record_count(value_ptr as usize);
            SqlReturn::SUCCESS
        }
        Desc::SQL_DESC_ARRAY_SIZE => {
            attrs.array_size = value_ptr as ULen;
            SqlReturn::SUCCESS
        }
        Desc::SQL_DESC_ARRAY_STATUS_PTR => {
            attrs.array_status_ptr = value_ptr as *mut USmallInt;
            SqlReturn::SUCCESS
        }
        Desc::SQL_DESC_BIND_OFFSET_PTR => {
            attrs.bind_offset_ptr = value_ptr as *mut Len;
            SqlReturn::SUCCESS
        }
        Desc::SQL_DESC_BIND_TYPE => {
            attrs.bind_type = value_ptr as ULen;
            SqlReturn::SUCCESS
        }
        Desc::SQL_DESC_ROWS_PROCESSED_PTR => {
            attrs.rows_processed_ptr = value_ptr as *mut ULen;
            SqlReturn::SUCCESS
        }
        _ => {
            let record = match attrs.record_mut(rec_number) {
                Some(r) => r,
                None => {
                    odbc_handle.add_diag_info(ODBCError::InvalidDescriptorIndex(rec_number));
                    return SqlReturn::ERROR;
                }
            };
            match field {
                Desc::SQL_DESC_TYPE => {
                    record.r#type = value_ptr as SmallInt;
                    SqlReturn::SUCCESS
                }
                Desc::SQL_DESC_CONCISE_TYPE => {
                    record.concise_type = value_ptr as SmallInt;
                    SqlReturn::SUCCESS
                }
                Desc::SQL_DESC_LENGTH => {
                    record.length = value_ptr as ULen;
                    SqlReturn::SUCCESS
                }
                Desc::SQL_DESC_OCTET_LENGTH => {
                    record.octet_length = value_ptr as Len;
                    SqlReturn::SUCCESS
                }
                Desc::SQL_DESC_OCTET_LENGTH_PTR => {
                    record.octet_length_ptr = value_ptr as *mut Len;
                    SqlReturn::SUCCESS
                }
                Desc::SQL_DESC_PRECISION => {
                    record.precision = value_ptr as SmallInt;
                    SqlReturn::SUCCESS
                }
                Desc::SQL_DESC_SCALE => {
                    record.scale = value_ptr as SmallInt;
                    SqlReturn::SUCCESS
                }
                Desc::SQL_DESC_NULLABLE => {
                    record.nullable = value_ptr as SmallInt;
                    SqlReturn::SUCCESS
                }
                Desc::SQL_DESC_INDICATOR_PTR => {
                    record.indicator_ptr = value_ptr as *mut Len;
                    SqlReturn::SUCCESS
                }
                Desc::SQL_DESC_DATA_PTR => {
                    record.data_ptr = value_ptr;
                    SqlReturn::SUCCESS
                }
                Desc::SQL_DESC_NAME => {
                    record.name =
                        input_wtext_to_string(value_ptr as *const WChar, buffer_length as usize);
                    SqlReturn::SUCCESS
                }
                Desc::SQL_DESC_UNNAMED => {
                    record.unnamed = value_ptr as SmallInt;
                    SqlReturn::SUCCESS
                }
                Desc::SQL_DESC_PARAMETER_TYPE => {
                    record.parameter_type = value_ptr as SmallInt;
                    SqlReturn::SUCCESS
                }
                other => {
                    odbc_handle
                        .add_diag_info(ODBCError::UnsupportedFieldDescriptor(format!("{other:?}")));
                    SqlReturn::ERROR
                }
            }
        }
    }
}

#[no_mangle]
pub extern "C" fn SQLSetDescRec(
    desc_handle: HDesc,
    rec_number: SmallInt,
    desc_type: SmallInt,
    desc_sub_type: SmallInt,
    length: Len,
    precision: SmallInt,
    scale: SmallInt,
    data_ptr: Pointer,
    string_length_ptr: *const Len,
    indicator_ptr: *const Len,
) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(desc_handle);
    odbc_handle.clear_diagnostics();
    let desc = must_be_valid!((*odbc_handle).as_descriptor());
    let desc_contents = desc.write().unwrap();
    let mut attrs = desc_contents.attributes.write().unwrap();
    let record = match attrs.record_mut(rec_number) {
        Some(r) => r,
        None => {
            odbc_handle.add_diag_info(ODBCError::InvalidDescriptorIndex(rec_number));
            return SqlReturn::ERROR;
        }
    };
    record.r#type = desc_type;
    record.concise_type = if desc_sub_type != 0 {
        desc_sub_type
    } else {
        desc_type
    };
    record.length = length as ULen;
    record.precision = precision;
    record.scale = scale;
    record.data_ptr = data_ptr;
    record.octet_length_ptr = string_length_ptr as *mut Len;
    record.indicator_ptr = indicator_ptr as *mut Len;
    SqlReturn::SUCCESS
}

#[no_mangle]
pub extern "C" fn SQLSetPos(
    statement_handle: HStmt,
    _row_number: ULen,
    _operation: USmallInt,
    _lock_type: USmallInt,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(statement_handle), "SQLSetPos")
}

#[no_mangle]
pub extern "C" fn SQLSetEnvAttr(
    environment_handle: HEnv,
    attribute: EnvironmentAttribute,
    value: Pointer,
    _string_length: Integer,
) -> SqlReturn {
    SQLSetEnvAttrW(environment_handle, attribute, value, _string_length)
}

#[no_mangle]
pub extern "C" fn SQLSetEnvAttrW(
    environment_handle: HEnv,
    attribute: EnvironmentAttribute,
    value: Pointer,
    _string_length: Integer,
) -> SqlReturn {
    let env_handle = OdbcHandleRef::from(environment_handle);
    env_handle.clear_diagnostics();
    let env = must_be_valid!(env_handle.as_env());
    match attribute {
        EnvironmentAttribute::SQL_ATTR_ODBC_VERSION => match FromPrimitive::from_i32(value as i32) {
            Some(version) => {
                let mut env_contents = (*env).write().unwrap();
                env_contents.attributes.odbc_ver = version;
                SqlReturn::SUCCESS
            }
            None => {
                env_handle.add_diag_info(ODBCError::InvalidAttrValue("SQL_ATTR_ODBC_VERSION"));
                SqlReturn::ERROR
            }
        },
        EnvironmentAttribute::SQL_ATTR_OUTPUT_NTS => match FromPrimitive::from_i32(value as i32) {
            Some(SqlBool::SQL_TRUE) => SqlReturn::SUCCESS,
            _ => {
                env_handle.add_diag_info(ODBCError::Unimplemented("OUTPUT_NTS=SQL_FALSE"));
                SqlReturn::ERROR
            }
        },
        EnvironmentAttribute::SQL_ATTR_CONNECTION_POOLING => match FromPrimitive::from_i32(value as i32) {
            Some(AttrConnectionPooling::SQL_CP_OFF) => SqlReturn::SUCCESS,
            _ => {
                env_handle.add_diag_info(ODBCError::OptionValueChanged(
                    "SQL_ATTR_CONNECTION_POOLING",
                    "SQL_CP_OFF",
                ));
                SqlReturn::SUCCESS_WITH_INFO
            }
        },
        EnvironmentAttribute::SQL_ATTR_CP_MATCH => match FromPrimitive::from_i32(value as i32) {
            Some(AttrCpMatch::SQL_CP_STRICT_MATCH) => SqlReturn::SUCCESS,
            _ => {
                env_handle.add_diag_info(ODBCError::OptionValueChanged(
                    "SQL_ATTR_CP_MATCH",
                    "SQL_CP_STRICT_MATCH",
                ));
                SqlReturn::SUCCESS_WITH_INFO
            }
        },
    }
}

#[no_mangle]
pub extern "C" fn SQLSetStmtAttr(
    hstmt: HStmt,
    _attr: StatementAttribute,
    _value: Pointer,
    _str_length: Integer,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(hstmt), "SQLSetStmtAttr")
}

#[no_mangle]
pub extern "C" fn SQLSetStmtAttrW(
    hstmt: HStmt,
    attr: StatementAttribute,
    value: Pointer,
    _str_length: Integer,
) -> SqlReturn {
    let stmt_handle = OdbcHandleRef::from(hstmt);
    stmt_handle.clear_diagnostics();
    let stmt = must_be_valid!(stmt_handle.as_statement());
    match attr {
        StatementAttribute::SQL_ATTR_APP_ROW_DESC => {
            stmt_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_APP_ROW_DESC"));
            SqlReturn::ERROR
        }
        StatementAttribute::SQL_ATTR_APP_PARAM_DESC => {
            stmt_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_APP_PARAM_DESC"));
            SqlReturn::ERROR
        }
        StatementAttribute::SQL_ATTR_IMP_ROW_DESC => {
            // TODO: SQL_681, determine the correct SQL state
            stmt_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_IMP_ROW_DESC"));
            SqlReturn::ERROR
        }
        StatementAttribute::SQL_ATTR_IMP_PARAM_DESC => {
            // TODO: SQL_681, determine the correct SQL state
            stmt_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_IMP_PARAM_DESC"));
            SqlReturn::ERROR
        }
        StatementAttribute::SQL_ATTR_CURSOR_SCROLLABLE => match FromPrimitive::from_usize(value as usize) {
            Some(CursorScrollable::SQL_NONSCROLLABLE) => SqlReturn::SUCCESS,
            _ => {
                stmt_handle
                    .add_diag_info(ODBCError::InvalidAttrValue("SQL_ATTR_CURSOR_SCROLLABLE"));
                SqlReturn::ERROR
            }
        },
        StatementAttribute::SQL_ATTR_CURSOR_SENSITIVITY => match FromPrimitive::from_i32(value as i32) {
            Some(CursorSensitivity::SQL_INSENSITIVE) => SqlReturn::SUCCESS,
            _ => {
                stmt_handle
                    .add_diag_info(ODBCError::InvalidAttrValue("SQL_ATTR_CURSOR_SENSITIVITY"));
                SqlReturn::ERROR
            }
        },
        StatementAttribute::SQL_ATTR_ASYNC_ENABLE => {
            stmt_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_ASYNC_ENABLE"));
            SqlReturn::ERROR
        }
        StatementAttribute::SQL_ATTR_CONCURRENCY => match FromPrimitive::from_i32(value as i32) {
            Some(Concurrency::SQL_CONCUR_READ_ONLY) => SqlReturn::SUCCESS,
            _ => {
                stmt_handle.add_diag_info(ODBCError::OptionValueChanged(
                    "SQL_ATTR_CONCURRENCY",
                    "SQL_CONCUR_READ_ONLY",
                ));
                SqlReturn::SUCCESS_WITH_INFO
            }
        },
        StatementAttribute::SQL_ATTR_CURSOR_TYPE => match FromPrimitive::from_i32(value as i32) {
            Some(ct @ (CursorType::ForwardOnly | CursorType::Static)) => {
                stmt.write().unwrap().attributes.cursor_type = ct;
                SqlReturn::SUCCESS
            }
            _ => {
                stmt_handle.add_diag_info(ODBCError::OptionValueChanged(
                    "SQL_ATTR_CURSOR_TYPE",
                    "SQL_CURSOR_FORWARD_ONLY",
                ));
                stmt.write().unwrap().attributes.cursor_type = CursorType::ForwardOnly;
                SqlReturn::SUCCESS_WITH_INFO
            }
        },
        StatementAttribute::SQL_ATTR_ENABLE_AUTO_IPD => {
            stmt_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_ENABLE_AUTO_IPD"));
            SqlReturn::ERROR
        }
        StatementAttribute::SQL_ATTR_FETCH_BOOKMARK_PTR => {
            stmt_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_FETCH_BOOKMARK_PTR"));
            SqlReturn::ERROR
        }
        StatementAttribute::SQL_ATTR_KEYSET_SIZE => {
            stmt_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_KEYSET_SIZE"));
            SqlReturn::ERROR
        }
        StatementAttribute::SQL_ATTR_MAX_LENGTH => {
            stmt_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_MAX_LENGTH"));
            SqlReturn::ERROR
        }
        StatementAttribute::SQL_ATTR_MAX_ROWS => {
            let mut stmt_contents = stmt.write().unwrap();
            stmt_contents.attributes.max_rows = value as ULen;
            SqlReturn::SUCCESS
        }
        StatementAttribute::SQL_ATTR_NOSCAN => {
            match FromPrimitive::from_i32(value as i32) {
                Some(ns) => {
                    let mut stmt_contents = stmt.write().unwrap();
                    stmt_contents.attributes.no_scan = ns
                }
                None => stmt_handle.add_diag_info(ODBCError::InvalidAttrValue("SQL_ATTR_NOSCAN")),
            }
            SqlReturn::SUCCESS
        }
        StatementAttribute::SQL_ATTR_PARAM_BIND_OFFSET_PTR => {
            stmt_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_PARAM_BIND_OFFSET_PTR"));
            SqlReturn::ERROR
        }
        StatementAttribute::SQL_ATTR_PARAM_BIND_TYPE => {
            stmt_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_PARAM_BIND_TYPE"));
            SqlReturn::ERROR
        }
        StatementAttribute::SQL_ATTR_PARAM_OPERATION_PTR => {
            stmt_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_PARAM_OPERATION_PTR"));
            SqlReturn::ERROR
        }
        StatementAttribute::SQL_ATTR_PARAM_STATUS_PTR => {
            stmt_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_PARAM_STATUS_PTR"));
            SqlReturn::ERROR
        }
        StatementAttribute::SQL_ATTR_PARAMS_PROCESSED_PTR => {
            stmt_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_PARAMS_PROCESSED_PTR"));
            SqlReturn::ERROR
        }
        StatementAttribute::SQL_ATTR_PARAMSET_SIZE => {
            stmt_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_PARAMSET_SIZE"));
            SqlReturn::ERROR
        }
        StatementAttribute::SQL_ATTR_QUERY_TIMEOUT => {
            let mut stmt_contents = stmt.write().unwrap();
            stmt_contents.attributes.query_timeout = value as ULen;
            SqlReturn::SUCCESS
        }
        StatementAttribute::SQL_ATTR_RETRIEVE_DATA => match FromPrimitive::from_i32(value as i32) {
            Some(RetrieveData::Off) => SqlReturn::SUCCESS,
            _ => {
                stmt_handle.add_diag_info(ODBCError::InvalidAttrValue("SQL_ATTR_RETRIEVE_DATA"));
                SqlReturn::ERROR
            }
        },
        StatementAttribute::SQL_ATTR_ROW_BIND_OFFSET_PTR => {
            stmt_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_ROW_BIND_OFFSET_PTR"));
            SqlReturn::ERROR
        }
        StatementAttribute::SQL_ATTR_ROW_BIND_TYPE => {
            let mut stmt_contents = stmt.write().unwrap();
            stmt_contents.attributes.row_bind_type = value as ULen;
            SqlReturn::SUCCESS
        }
        StatementAttribute::SQL_ATTR_ROW_NUMBER => {
            let mut stmt_contents = stmt.write().unwrap();
            stmt_contents.attributes.row_number = value as ULen;
            SqlReturn::SUCCESS
        }
        StatementAttribute::SQL_ATTR_ROW_OPERATION_PTR => {
            stmt_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_ROW_OPERATION_PTR"));
            SqlReturn::ERROR
        }
        StatementAttribute::SQL_ATTR_ROW_STATUS_PTR => {
            let mut stmt_contents = stmt.write().unwrap();
            stmt_contents.attributes.row_status_ptr = value as *mut USmallInt;
            SqlReturn::SUCCESS
        }
        StatementAttribute::SQL_ATTR_ROWS_FETCHED_PTR => {
            let mut stmt_contents = stmt.write().unwrap();
            stmt_contents.attributes.rows_fetched_ptr = value as *mut ULen;
            SqlReturn::SUCCESS
        }
        StatementAttribute::SQL_ATTR_ROW_ARRAY_SIZE => match FromPrimitive::from_i32(value as i32) {
            Some(ras) => {
                let mut stmt_contents = stmt.write().unwrap();
                stmt_contents.attributes.row_array_size = ras;
                SqlReturn::SUCCESS
            }
            None => {
                stmt_handle.add_diag_info(ODBCError::InvalidAttrValue("SQL_ATTR_ROW_ARRAY_SIZE"));
                SqlReturn::ERROR
            }
        },
        StatementAttribute::SQL_ATTR_SIMULATE_CURSOR => {
            stmt_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_SIMULATE_CURSOR"));
            SqlReturn::ERROR
        }
        StatementAttribute::SQL_ATTR_USE_BOOKMARKS => match FromPrimitive::from_i32(value as i32) {
            Some(ub) => {
                let mut stmt_contents = stmt.write().unwrap();
                stmt_contents.attributes.use_bookmarks = ub;
                SqlReturn::SUCCESS
            }
            None => {
                stmt_handle.add_diag_info(ODBCError::InvalidAttrValue("SQL_ATTR_USE_BOOKMARKS"));
                SqlReturn::ERROR
            }
        },
        StatementAttribute::SQL_ATTR_ASYNC_STMT_EVENT => {
            stmt_handle.add_diag_info(ODBCError::Unimplemented("SQL_ATTR_ASYNC_STMT_EVENT"));
            SqlReturn::ERROR
        }
        StatementAttribute::SQL_ATTR_METADATA_ID => {
            match FromPrimitive::from_i32(value as i32) {
                Some(id) => {
                    stmt.write().unwrap().attributes.metadata_id = id;
                    SqlReturn::SUCCESS
                }
                None => {
                    stmt_handle.add_diag_info(ODBCError::InvalidAttrValue("SQL_ATTR_METADATA_ID"));
                    SqlReturn::ERROR
                }
            }
        }
    }
}

#[no_mangle]
pub extern "C" fn SQLSpecialColumns(
    statement_handle: HStmt,
    _identifier_type: SmallInt,
    _catalog_name: *const Char,
    _catalog_name_length: SmallInt,
    _schema_name: *const Char,
    _schema_name_length: SmallInt,
    _table_name: *const Char,
    _table_name_length: SmallInt,
    _scope: SmallInt,
    _nullable: Nullability,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(statement_handle), "SQLSpecialColumns")
}

#[no_mangle]
pub extern "C" fn SQLSpecialColumnsW(
    statement_handle: HStmt,
    _identifier_type: SmallInt,
    catalog_name: *const WChar,
    catalog_name_length: SmallInt,
    schema_name: *const WChar,
    schema_name_length: SmallInt,
    table_name: *const WChar,
    table_name_length: SmallInt,
    _scope: SmallInt,
    _nullable: Nullability,
) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(statement_handle);
    let stmt = must_be_valid!((*odbc_handle).as_statement());
    let catalog = input_wtext_to_string(catalog_name, catalog_name_length as usize);
    let schema = input_wtext_to_string(schema_name, schema_name_length as usize);
    let table = input_wtext_to_string(table_name, table_name_length as usize);
    let query = CatalogQuery::SpecialColumns {
        catalog: catalog_arg(&catalog),
        schema: catalog_arg(&schema),
        table,
    };
    run_catalog_query(odbc_handle, stmt, query)
}

#[no_mangle]
pub extern "C" fn SQLStatistics(
    statement_handle: HStmt,
    catalog_name: *const Char,
    catalog_name_length: SmallInt,
    schema_name: *const Char,
    schema_name_length: SmallInt,
    table_name: *const Char,
    table_name_length: SmallInt,
    unique: SmallInt,
    _reserved: SmallInt,
) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(statement_handle);
    let stmt = must_be_valid!((*odbc_handle).as_statement());
    let catalog = input_text_to_string(catalog_name, catalog_name_length as usize);
    let schema = input_text_to_string(schema_name, schema_name_length as usize);
    let table = input_text_to_string(table_name, table_name_length as usize);
    let query = CatalogQuery::Statistics {
        catalog: catalog_arg(&catalog),
        schema: catalog_arg(&schema),
        table,
        unique_only: unique == 0,
    };
    run_catalog_query(odbc_handle, stmt, query)
}

#[no_mangle]
pub extern "C" fn SQLTablePrivileges(
    statement_handle: HStmt,
    _catalog_name: *const Char,
    _name_length_1: SmallInt,
    _schema_name: *const Char,
    _name_length_2: SmallInt,
    _table_name: *const Char,
    _name_length_3: SmallInt,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(statement_handle), "SQLTablePrivileges")
}

#[no_mangle]
pub extern "C" fn SQLTablesPrivilegesW(
    statement_handle: HStmt,
    catalog_name: *const WChar,
    name_length_1: SmallInt,
    schema_name: *const WChar,
    name_length_2: SmallInt,
    table_name: *const WChar,
    name_length_3: SmallInt,
) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(statement_handle);
    let stmt = must_be_valid!((*odbc_handle).as_statement());
    let catalog = input_wtext_to_string(catalog_name, name_length_1 as usize);
    let schema = input_wtext_to_string(schema_name, name_length_2 as usize);
    let table = input_wtext_to_string(table_name, name_length_3 as usize);
    let query = CatalogQuery::TablePrivileges {
        catalog: catalog_arg(&catalog),
        schema: catalog_arg(&schema),
        table,
    };
    run_catalog_query(odbc_handle, stmt, query)
}

#[no_mangle]
pub extern "C" fn SQLTables(
    statement_handle: HStmt,
    _catalog_name: *const Char,
    _name_length_1: SmallInt,
    _schema_name: *const Char,
    _name_length_2: SmallInt,
    _table_name: *const Char,
    _name_length_3: SmallInt,
    _table_type: *const Char,
    _name_length_4: SmallInt,
) -> SqlReturn {
    unsupported_function(OdbcHandleRef::from(statement_handle), "SQLTables")
}

fn sql_tables(
    wire_connection: &WireConnection,
    _query_timeout: i32,
    catalog: &str,
    schema: &str,
    table: &str,
    table_type: &str,
) -> Result<Box<dyn WireStatement>> {
    let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
    let query = catalog_query_for(
        non_empty(catalog).as_deref(),
        non_empty(schema).as_deref(),
        non_empty(table).as_deref(),
        non_empty(table_type).as_deref(),
    );
    Ok(wire_connection.catalog_statement(query)?)
}

/// Shared by the nine catalog functions besides `SQLTables`: resolves the
/// handle's connection, runs `query` through `Connection::catalog_statement`,
/// and installs the result as the handle's active statement.
///
/// # Safety
/// `stmt`'s `connection` pointer must point to a live `OdbcHandle::Connection`.
unsafe fn sql_catalog(stmt: &RwLock<Statement>, query: CatalogQuery) -> Result<Box<dyn WireStatement>> {
    let connection = stmt.read().unwrap().connection;
    let conn = (*connection)
        .as_connection()
        .ok_or(ODBCError::InvalidHandleType(HANDLE_MUST_BE_CONN_ERROR))?
        .read()
        .unwrap();
    let wire_connection = conn
        .wire_connection
        .as_ref()
        .ok_or(ODBCError::ConnectionNotOpen)?;
    Ok(wire_connection.catalog_statement(query)?)
}

/// Installs the result of a catalog query as `stmt`'s active statement, or
/// records the diagnostic and returns `SqlReturn::ERROR` on failure. Shared
/// tail of every `SQLColumns`/`SQLPrimaryKeys`/... style function below.
fn run_catalog_query(
    odbc_handle: &mut OdbcHandle,
    stmt: &RwLock<Statement>,
    query: CatalogQuery,
) -> SqlReturn {
    let statement = unsafe { sql_catalog(stmt, query) };
    let statement = odbc_unwrap!(statement, odbc_handle);
    stmt.write().unwrap().set_statement(statement);
    SqlReturn::SUCCESS
}

/// `None` for an empty search pattern, matching how `SQLTables`'s own
/// `non_empty` closure treats an all-zero-length argument as "unrestricted".
fn catalog_arg(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

#[no_mangle]
pub extern "C" fn SQLTablesW(
    statement_handle: HStmt,
    catalog_name: *const WChar,
    name_length_1: SmallInt,
    schema_name: *const WChar,
    name_length_2: SmallInt,
    table_name: *const WChar,
    name_length_3: SmallInt,
    table_type: *const WChar,
    name_length_4: SmallInt,
) -> SqlReturn {
    let odbc_handle = OdbcHandleRef::from(statement_handle);
    let stmt = must_be_valid!((*odbc_handle).as_statement());
    let catalog = input_wtext_to_string(catalog_name, name_length_1 as usize);
    let schema = input_wtext_to_string(schema_name, name_length_2 as usize);
    let table = input_wtext_to_string(table_name, name_length_3 as usize);
    let table_t = input_wtext_to_string(table_type, name_length_4 as usize);
    let connection = (*(stmt.read().unwrap())).connection;
    let statement = unsafe {
        sql_tables(
            (*connection)
                .as_connection()
                .unwrap()
                .read()
                .unwrap()
                .wire_connection
                .as_ref()
                .unwrap(),
            (*(stmt.read().unwrap())).attributes.query_timeout as i32,
            &catalog,
            &schema,
            &table,
            &table_t,
        )
    };
    let statement = odbc_unwrap!(statement, odbc_handle);
    stmt.write().unwrap().set_statement(statement);
    SqlReturn::SUCCESS
}

mod util {
    use crate::{api::errors::ODBCError, handles::definitions::OdbcHandle};
    use definitions::{Char, Integer, SmallInt, SqlReturn, WChar};
    use std::{cmp::min, ptr::copy_nonoverlapping};

    /// input_wtext_to_string converts an input cstring to a rust String.
    /// It assumes nul termination if the supplied length is negative.
    #[allow(clippy::uninit_vec)]
    pub fn input_wtext_to_string(text: *const WChar, len: usize) -> String {
        if (len as isize) < 0 {
            let mut dst = Vec::new();
            let mut itr = text;
            unsafe {
                while *itr != 0 {
                    dst.push(*itr);
                    itr = itr.offset(1);
                }
            }
            return String::from_utf16_lossy(&dst);
        }

        let mut dst = Vec::with_capacity(len);
        unsafe {
            dst.set_len(len);
            copy_nonoverlapping(text, dst.as_mut_ptr(), len);
        }
        String::from_utf16_lossy(&dst)
    }

    /// ANSI counterpart of [`input_wtext_to_string`], for the handful of
    /// catalog functions (`SQLStatistics`) that never grew a wide-character
    /// entry point.
    #[allow(clippy::uninit_vec)]
    pub fn input_text_to_string(text: *const Char, len: usize) -> String {
        if (len as isize) < 0 {
            let mut dst = Vec::new();
            let mut itr = text;
            unsafe {
                while *itr != 0 {
                    dst.push(*itr);
                    itr = itr.offset(1);
                }
            }
            return String::from_utf8_lossy(&dst).into_owned();
        }

        let mut dst = Vec::with_capacity(len);
        unsafe {
            dst.set_len(len);
            copy_nonoverlapping(text, dst.as_mut_ptr(), len);
        }
        String::from_utf8_lossy(&dst).into_owned()
    }

    /// set_sql_state writes the given sql state to the [`output_ptr`].
    pub fn set_sql_state(sql_state: &str, output_ptr: *mut WChar) {
        if output_ptr.is_null() {
            return;
        }
        let sql_state = &format!("{}\0", sql_state);
        let state_u16 = sql_state.encode_utf16().collect::<Vec<u16>>();
        unsafe {
            copy_nonoverlapping(state_u16.as_ptr(), output_ptr, 6);
        }
    }

    /// set_output_string writes [`message`] to the [`output_ptr`]. [`buffer_len`] is the
    /// length of the [`output_ptr`] buffer in characters; the message should be truncated
    /// if it is longer than the buffer length. The number of characters written to [`output_ptr`]
    /// should be stored in [`text_length_ptr`].
    pub fn set_output_string(
        message: &str,
        output_ptr: *mut WChar,
        buffer_len: usize,
        text_length_ptr: *mut SmallInt,
    ) -> SqlReturn {
        unsafe {
            if output_ptr.is_null() {
                if !text_length_ptr.is_null() {
                    *text_length_ptr = 0 as SmallInt;
                } else {
                    // If the output_ptr is NULL, we should still return the length of the message.
                    let message_u16 = message.encode_utf16().collect::<Vec<u16>>();
                    *text_length_ptr = message_u16.len() as SmallInt;
                }
                return SqlReturn::SUCCESS_WITH_INFO;
            }
            // Check if the entire message plus a null terminator can fit in the buffer;
            // we should truncate the message if it's too long.
            let mut message_u16 = message.encode_utf16().collect::<Vec<u16>>();
            let message_len = message_u16.len();
            let num_chars = min(message_len + 1, buffer_len);
            // It is possible that no buffer space has been allocated.
            if num_chars == 0 {
                return SqlReturn::SUCCESS_WITH_INFO;
            }
            message_u16.resize(num_chars - 1, 0);
            message_u16.push('\u{0}' as u16);
            copy_nonoverlapping(message_u16.as_ptr(), output_ptr, num_chars);
            // Store the number of characters in the message string, excluding the
            // null terminator, in text_length_ptr
            if !text_length_ptr.is_null() {
                *text_length_ptr = (num_chars - 1) as SmallInt;
            }
            if num_chars < message_len {
                SqlReturn::SUCCESS_WITH_INFO
            } else {
                SqlReturn::SUCCESS
            }
        }
    }

    /// get_diag_rec copies the given ODBC error's diagnostic information
    /// into the provided pointers.
    pub fn get_diag_rec(
        error: &ODBCError,
        state: *mut WChar,
        message_text: *mut WChar,
        buffer_length: SmallInt,
        text_length_ptr: *mut SmallInt,
        native_error_ptr: *mut Integer,
    ) -> SqlReturn {
        if !native_error_ptr.is_null() {
            unsafe { *native_error_ptr = error.get_native_err_code() };
        }
        set_sql_state(error.get_sql_state(), state);
        let message = format!("{}", error);
        set_output_string(
            &message,
            message_text,
            buffer_length as usize,
            text_length_ptr,
        )
    }

    pub fn unsupported_function(handle: &mut OdbcHandle, name: &'static str) -> SqlReturn {
        handle.clear_diagnostics();
        handle.add_diag_info(ODBCError::Unimplemented(name));
        SqlReturn::ERROR
    }

    /// set_str_length writes the given length to [`string_length_ptr`].
    pub fn set_str_length(string_length_ptr: *mut Integer, length: Integer) {
        if !string_length_ptr.is_null() {
            unsafe { *string_length_ptr = length }
        }
    }
}

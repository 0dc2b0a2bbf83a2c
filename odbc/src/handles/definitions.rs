use crate::api::errors::ODBCError;
use cstr::{Charset, WideChar};
use definitions::{
    AsyncEnable, AttrConnectionPooling, AttrCpMatch, AttrOdbcVersion, BindType, Concurrency,
    CursorScrollable, CursorSensitivity, CursorType, HDbc, HDesc, HEnv, HStmt, Handle, Len, NoScan,
    ParamType, Pointer, RetrieveData, SimulateCursor, SmallInt, SqlBool, SqlDataType, ULen,
    USmallInt, UseBookmarks,
};
use std::{
    borrow::BorrowMut,
    collections::{HashMap, HashSet},
    ptr::null_mut,
    sync::RwLock,
};

#[derive(Debug)]
pub enum OdbcHandle {
    Env(RwLock<Env>),
    Connection(RwLock<Connection>),
    Statement(RwLock<Statement>),
    Descriptor(RwLock<Descriptor>),
}

impl OdbcHandle {
    pub fn as_env(&self) -> Option<&RwLock<Env>> {
        match self {
            OdbcHandle::Env(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_connection(&self) -> Option<&RwLock<Connection>> {
        match self {
            OdbcHandle::Connection(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_statement(&self) -> Option<&RwLock<Statement>> {
        match self {
            OdbcHandle::Statement(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_descriptor(&self) -> Option<&RwLock<Descriptor>> {
        match self {
            OdbcHandle::Descriptor(d) => Some(d),
            _ => None,
        }
    }

    /// Returns a reference to the statement's connection, if there is
    /// one.
    pub fn as_statement_connection(&self) -> Option<&RwLock<Connection>> {
        match self {
            OdbcHandle::Statement(stmt) => unsafe {
                stmt.read().unwrap().connection.as_ref().unwrap().as_connection()
            },
            _ => None,
        }
    }

    /// add_diag_info appends a new ODBCError object to the `errors` field.
    pub fn add_diag_info(&mut self, error: ODBCError) {
        match self {
            OdbcHandle::Env(e) => {
                e.read().unwrap().errors.write().unwrap().push(error);
            }
            OdbcHandle::Connection(c) => {
                c.read().unwrap().errors.write().unwrap().push(error);
            }
            OdbcHandle::Statement(s) => {
                s.read().unwrap().errors.write().unwrap().push(error);
            }
            OdbcHandle::Descriptor(d) => {
                d.read().unwrap().errors.write().unwrap().push(error);
            }
        }
    }

    pub fn clear_diagnostics(&mut self) {
        match self {
            OdbcHandle::Env(e) => {
                e.read().unwrap().errors.write().unwrap().clear();
            }
            OdbcHandle::Connection(c) => {
                c.read().unwrap().errors.write().unwrap().clear();
            }
            OdbcHandle::Statement(s) => {
                s.read().unwrap().errors.write().unwrap().clear();
            }
            OdbcHandle::Descriptor(d) => {
                d.read().unwrap().errors.write().unwrap().clear();
            }
        }
    }

    ///
    /// Generate a String containing the current handle and its parents address.
    ///
    pub(crate) unsafe fn get_handle_info(&mut self) -> String {
        let mut handle_info = String::new();
        let mut handle = self;
        loop {
            let handle_ptr: *mut OdbcHandle = handle;
            match handle {
                OdbcHandle::Env(_) => {
                    handle_info = format!("[Env_{handle_ptr:?}]{handle_info}");
                    return handle_info;
                }
                OdbcHandle::Connection(c) => {
                    let env = c.read().unwrap().env;
                    handle_info = format!("[Conn_{handle_ptr:?}]{handle_info}");
                    if env.is_null() {
                        return handle_info;
                    }
                    handle = &mut *env;
                }
                OdbcHandle::Statement(s) => {
                    let conn = s.read().unwrap().connection;
                    handle_info = format!("[Stmt_{handle_ptr:?}]{handle_info}");
                    if conn.is_null() {
                        return handle_info;
                    }
                    handle = &mut *conn;
                }
                OdbcHandle::Descriptor(d) => {
                    let conn = d.read().unwrap().connection;
                    handle_info = format!("[Desc_{handle_ptr:?}]{handle_info}");
                    if conn.is_null() {
                        return handle_info;
                    }
                    handle = &mut *conn;
                }
            }
        }
    }

    /// get the odbc_version from the underlying env handle, used to handle
    /// behavior that is different between odbc versions properly
    pub fn get_odbc_version(&mut self) -> AttrOdbcVersion {
        let env = match self {
            OdbcHandle::Env(_) => self,
            OdbcHandle::Connection(conn) => conn.read().unwrap().env,
            OdbcHandle::Descriptor(d) => d.read().unwrap().connection,
            OdbcHandle::Statement(s) => s.read().unwrap().connection,
        };
        unsafe {
            env.as_ref()
                .unwrap()
                .as_env()
                .unwrap()
                .read()
                .unwrap()
                .attributes
                .odbc_ver
        }
    }
}

#[macro_export]
/// A utility macro that returns a boolean on whether the handle exhibits odbc 3 behavior or not
macro_rules! has_odbc_3_behavior {
    ($handle:expr) => {{
        match (*$handle).get_odbc_version() {
            AttrOdbcVersion::SQL_OV_ODBC2 => false,
            AttrOdbcVersion::SQL_OV_ODBC3 | AttrOdbcVersion::SQL_OV_ODBC3_80 => true,
        }
    }};
}

pub type OdbcHandleRef = &'static mut OdbcHandle;

impl From<Handle> for OdbcHandleRef {
    fn from(handle: Handle) -> Self {
        unsafe { (*(handle as *mut OdbcHandle)).borrow_mut() }
    }
}

impl From<HEnv> for OdbcHandleRef {
    fn from(handle: HEnv) -> Self {
        unsafe { (*(handle as *mut OdbcHandle)).borrow_mut() }
    }
}

impl From<HStmt> for OdbcHandleRef {
    fn from(handle: HStmt) -> Self {
        unsafe { (*(handle as *mut OdbcHandle)).borrow_mut() }
    }
}

impl From<HDbc> for OdbcHandleRef {
    fn from(handle: HDbc) -> Self {
        unsafe { (*(handle as *mut OdbcHandle)).borrow_mut() }
    }
}

impl From<HDesc> for OdbcHandleRef {
    fn from(handle: HDesc) -> Self {
        unsafe { (*(handle as *mut OdbcHandle)).borrow_mut() }
    }
}

#[derive(Debug)]
pub struct Env {
    // attributes for this Env. We box the attributes so that the OdbcHandle type
    // remains fairly small regardless of underlying handle type.
    pub attributes: EnvAttributes,
    // state of this Env
    pub state: RwLock<EnvState>,
    pub connections: RwLock<HashSet<*mut OdbcHandle>>,
    pub errors: RwLock<Vec<ODBCError>>,
}

impl Env {
    pub fn with_state(state: EnvState) -> Self {
        Self {
            attributes: EnvAttributes::default(),
            state: RwLock::new(state),
            connections: RwLock::new(HashSet::new()),
            errors: RwLock::new(vec![]),
        }
    }
}

#[derive(Debug)]
pub struct EnvAttributes {
    pub odbc_ver: AttrOdbcVersion,
    pub output_nts: SqlBool,
    pub connection_pooling: AttrConnectionPooling,
    pub cp_match: AttrCpMatch,
    pub driver_unicode_type: Charset,
}

impl Default for EnvAttributes {
    fn default() -> Self {
        Self {
            odbc_ver: AttrOdbcVersion::SQL_OV_ODBC3_80,
            output_nts: SqlBool::SQL_TRUE,
            connection_pooling: AttrConnectionPooling::SQL_CP_OFF,
            cp_match: AttrCpMatch::SQL_CP_STRICT_MATCH,
            driver_unicode_type: cstr::CHARSET,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum EnvState {
    Allocated,
    ConnectionAllocated,
}

#[derive(Debug)]
pub struct Connection {
    // type of this handle for runtime checking purposes.
    // Pointer to the Env from which
    // this Connection was allocated
    pub env: *mut OdbcHandle,
    // wire_connection is the attached session to the remote server; it is
    // None when the Connection is closed.
    pub wire_connection: Option<odbc_driver_core::Connection>,
    // all the possible Connection settings
    pub attributes: ConnectionAttributes,
    // state of this connection
    pub state: RwLock<ConnectionState>,
    // all Statements allocated from this Connection
    pub statements: RwLock<HashSet<*mut OdbcHandle>>,
    pub errors: RwLock<Vec<ODBCError>>,
}

#[derive(Debug, Default)]
pub struct ConnectionAttributes {
    // SQL_ATTR_CURRENT_CATALOG: the current catalog/database
    // for this Connection.
    pub current_catalog: Option<String>,
    // SQL_ATTR_LOGIN_TIMEOUT: SQLUINTEGER, timeout in seconds
    // to wait for a login request to complete.
    pub login_timeout: Option<u32>,
    // SQL_ATTR_CONNECTION_TIMEOUT: SQLUINTER, timeout in seconds
    // to wait for any operation on a connection to timeout (other than
    // initial login).
    pub connection_timeout: Option<u32>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConnectionState {
    Allocated,
    _ConnectionFunctionNeedsDataEnv,
    Connected,
    StatementAllocated,
    _TransactionInProgress,
}

impl Connection {
    pub fn with_state(env: *mut OdbcHandle, state: ConnectionState) -> Self {
        Self {
            env,
            wire_connection: None,
            attributes: ConnectionAttributes::default(),
            state: RwLock::new(state),
            statements: RwLock::new(HashSet::new()),
            errors: RwLock::new(vec![]),
        }
    }
}

#[derive(Debug)]
pub enum CachedData {
    // we do not need an index into fixed data. Attempting to stream fixed data always fails.
    Fixed,
    Char(usize, Vec<u8>),
    Bin(usize, Vec<u8>),
    WChar(usize, Vec<WideChar>),
}

#[derive(Debug)]
pub struct Statement {
    pub connection: *mut OdbcHandle,
    pub statement: Option<Box<dyn odbc_driver_core::Statement>>,
    pub var_data_cache: RwLock<Option<HashMap<USmallInt, CachedData>>>,
    pub attributes: StatementAttributes,
    pub state: RwLock<StatementState>,
    pub errors: RwLock<Vec<ODBCError>>,
    pub bound_cols: RwLock<Option<HashMap<USmallInt, BoundColInfo>>>,
    /// SQL text saved by `SQLPrepare`, run once `SQLExecute` is called.
    pub prepared_sql: RwLock<Option<String>>,
    /// The page most recently returned by `Statement::fetch`, with a cursor
    /// into it for `SQLGetData`/`SQLBindCol` to read against. For a
    /// `SQL_CURSOR_STATIC` statement this holds every row the result set
    /// will ever produce, fetched eagerly at execute time so
    /// `SQLFetchScroll` can move freely within it.
    pub row_set: RwLock<Option<odbc_driver_core::RowSet>>,
    pub current_row_index: RwLock<usize>,
    /// Parameters bound via `SQLBindParameter`, keyed by 1-based ordinal.
    pub bound_params: RwLock<Option<HashMap<USmallInt, BoundParamInfo>>>,
    /// Ordinals (ascending) of parameters still needing data-at-execution
    /// input, populated when `SQLExecute`/`SQLExecDirect` finds a
    /// `SQL_DATA_AT_EXEC` indicator and consumed one at a time by
    /// `SQLParamData`.
    pub dae_pending: RwLock<Vec<USmallInt>>,
    /// The parameter row under construction across a DAE round trip;
    /// indexed the same way as `bound_params` (ordinal - 1).
    pub dae_row: RwLock<Option<Vec<Option<odbc_driver_core::SqlValue>>>>,
    /// SQL text to run once every DAE parameter has received its data.
    pub dae_sql: RwLock<Option<String>>,
    /// Ordinal most recently handed back by `SQLParamData`, i.e. the
    /// parameter `SQLPutData` is currently accumulating bytes for.
    pub active_dae_param: RwLock<Option<USmallInt>>,
    /// Raw bytes accumulated across one or more `SQLPutData` calls for
    /// `active_dae_param`, converted to a `SqlValue` once the application
    /// moves on to the next parameter (or to execution).
    pub dae_accum: RwLock<Vec<u8>>,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct BoundColInfo {
    pub target_type: SmallInt,
    pub target_buffer: Pointer,
    pub buffer_length: Len,
    pub length_or_indicator: *mut Len,
}

/// One parameter bound via `SQLBindParameter`, mirroring [`BoundColInfo`]'s
/// shape for the input direction.
#[derive(Debug, Clone, Copy)]
pub struct BoundParamInfo {
    pub input_output_type: ParamType,
    pub value_type: SmallInt,
    pub parameter_type: SqlDataType,
    pub column_size: ULen,
    pub decimal_digits: SmallInt,
    pub parameter_value_ptr: Pointer,
    pub buffer_length: Len,
    pub str_len_or_ind_ptr: *mut Len,
}

#[derive(Debug)]
pub struct StatementAttributes {
    pub app_row_desc: *mut OdbcHandle,
    pub app_param_desc: *mut OdbcHandle,
    pub async_enable: AsyncEnable,
    pub async_stmt_event: Pointer,
    pub cursor_scrollable: CursorScrollable,
    pub cursor_sensitivity: CursorSensitivity,
    pub concurrency: Concurrency,
    pub cursor_type: CursorType,
    pub enable_auto_ipd: SqlBool,
    pub fetch_bookmark_ptr: *mut Len,
    pub imp_row_desc: *mut OdbcHandle,
    pub imp_param_desc: *mut OdbcHandle,
    pub max_length: ULen,
    pub max_rows: ULen,
    pub metadata_id: SqlBool,
    pub no_scan: NoScan,
    pub param_bind_offset_ptr: *mut ULen,
    pub param_bind_type: ULen,
    pub param_operation_ptr: *mut USmallInt,
    pub param_processed_ptr: *mut ULen,
    pub param_status_ptr: *mut USmallInt,
    pub paramset_size: ULen,
    pub query_timeout: ULen,
    pub retrieve_data: RetrieveData,
    pub row_array_size: ULen,
    pub row_bind_offset_ptr: *mut ULen,
    pub row_bind_type: ULen,
    pub row_index_is_valid: bool,
    pub row_number: ULen,
    pub row_operation_ptr: *mut USmallInt,
    pub row_status_ptr: *mut USmallInt,
    pub rows_fetched_ptr: *mut ULen,
    pub simulate_cursor: ULen,
    pub use_bookmarks: UseBookmarks,
}

impl Drop for StatementAttributes {
    fn drop(&mut self) {
        unsafe {
            let _ = Box::from_raw(self.app_row_desc);
            let _ = Box::from_raw(self.app_param_desc);
            let _ = Box::from_raw(self.imp_row_desc);
            let _ = Box::from_raw(self.imp_param_desc);
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StatementState {
    Allocated,
    _Prepared,
    _PreparedHasResultSet,
    _ExecutedNoResultSet,
    _ExecutedHasResultSet,
    _CursorFetchSet,
    _CursorExtendedFetchSet,
    /// Entered by `SQLExecute`/`SQLExecDirect` when at least one bound
    /// parameter carries a `SQL_DATA_AT_EXEC` indicator; the application
    /// is expected to call `SQLParamData` next.
    FunctionNeedsDataNoParam,
    /// `SQLParamData` has handed back a parameter's buffer address; the
    /// application is expected to call `SQLPutData` (one or more times)
    /// next.
    FunctionNeedsDataNoPut,
    /// At least one `SQLPutData` call has been made for the current
    /// parameter; another `SQLPutData` call (more of the same piece) or
    /// `SQLParamData` (advance to the next parameter) is valid next.
    FunctionNeedsDataPutCalled,
    _Executing,
    SynchronousQueryExecuting,
    _AsyncCancelled,
}

impl Statement {
    pub fn with_state(connection: *mut OdbcHandle, state: StatementState) -> Self {
        let implicit_app_row_desc =
            Descriptor::with_state(connection, DescriptorState::ImplicitlyAllocated);

        let implicit_param_row_desc =
            Descriptor::with_state(connection, DescriptorState::ImplicitlyAllocated);

        let implicit_app_imp_desc =
            Descriptor::with_state(connection, DescriptorState::ImplicitlyAllocated);

        let implicit_param_imp_desc =
            Descriptor::with_state(connection, DescriptorState::ImplicitlyAllocated);

        Self {
            connection,
            state: RwLock::new(state),
            var_data_cache: RwLock::new(None),
            attributes: StatementAttributes {
                app_row_desc: Box::into_raw(Box::new(OdbcHandle::Descriptor(
                    implicit_app_row_desc,
                ))),
                app_param_desc: Box::into_raw(Box::new(OdbcHandle::Descriptor(
                    implicit_param_row_desc,
                ))),
                async_enable: AsyncEnable::SQL_ASYNC_ENABLE_OFF,
                async_stmt_event: null_mut(),
                cursor_scrollable: CursorScrollable::SQL_NONSCROLLABLE,
                cursor_sensitivity: CursorSensitivity::SQL_INSENSITIVE,
                concurrency: Concurrency::SQL_CONCUR_READ_ONLY,
                cursor_type: CursorType::ForwardOnly,
                enable_auto_ipd: SqlBool::SQL_FALSE,
                fetch_bookmark_ptr: null_mut(),
                imp_row_desc: Box::into_raw(Box::new(OdbcHandle::Descriptor(
                    implicit_app_imp_desc,
                ))),
                imp_param_desc: Box::into_raw(Box::new(OdbcHandle::Descriptor(
                    implicit_param_imp_desc,
                ))),
                max_length: 0,
                max_rows: 0,
                metadata_id: SqlBool::SQL_FALSE,
                no_scan: NoScan::SQL_NOSCAN_OFF,
                param_bind_offset_ptr: null_mut(),
                param_bind_type: BindType::SQL_BIND_BY_COLUMN as usize,
                param_operation_ptr: null_mut(),
                param_processed_ptr: null_mut(),
                param_status_ptr: null_mut(),
                paramset_size: 0,
                query_timeout: 0,
                retrieve_data: RetrieveData::Off,
                row_array_size: 1,
                row_bind_offset_ptr: null_mut(),
                row_bind_type: BindType::SQL_BIND_BY_COLUMN as usize,
                row_index_is_valid: false,
                row_number: 0,
                row_operation_ptr: null_mut(),
                row_status_ptr: null_mut(),
                rows_fetched_ptr: null_mut(),
                simulate_cursor: SimulateCursor::NonUnique as usize,
                use_bookmarks: UseBookmarks::Off,
            }),
            errors: RwLock::new(vec![]),
            statement: None,
            bound_cols: RwLock::new(None),
            prepared_sql: RwLock::new(None),
            row_set: RwLock::new(None),
            current_row_index: RwLock::new(0),
            bound_params: RwLock::new(None),
            dae_pending: RwLock::new(Vec::new()),
            dae_row: RwLock::new(None),
            dae_sql: RwLock::new(None),
            active_dae_param: RwLock::new(None),
            dae_accum: RwLock::new(Vec::new()),
        }
    }

    pub(crate) fn insert_var_data_cache(&self, col: u16, data: CachedData) {
        self.var_data_cache
            .write()
            .unwrap()
            .as_mut()
            .unwrap()
            .insert(col, data);
    }

    /// Installs a newly executed statement as this handle's active result
    /// set, resetting the per-column streaming cache and cursor state a
    /// previous execution may have left behind.
    pub fn set_statement(&mut self, statement: Box<dyn odbc_driver_core::Statement>) {
        self.statement = Some(statement);
        *self.var_data_cache.write().unwrap() = Some(HashMap::new());
        *self.row_set.write().unwrap() = None;
        *self.current_row_index.write().unwrap() = 0;
        *self.bound_cols.write().unwrap() = None;
        *self.dae_pending.write().unwrap() = Vec::new();
        *self.dae_row.write().unwrap() = None;
        *self.dae_sql.write().unwrap() = None;
        *self.active_dae_param.write().unwrap() = None;
        self.dae_accum.write().unwrap().clear();
    }
}

#[derive(Debug)]
pub struct Descriptor {
    pub connection: *mut OdbcHandle,
    pub attributes: RwLock<DescriptorAttributes>,
    pub state: RwLock<DescriptorState>,
    pub errors: RwLock<Vec<ODBCError>>,
}

/// See https://learn.microsoft.com/en-us/sql/odbc/reference/appendixes/descriptor-transitions for
/// states and transitions
#[derive(Debug, PartialEq, Eq)]
pub enum DescriptorState {
    ImplicitlyAllocated, // D1i
    ExplicitlyAllocated, // D1e
}

/// One descriptor record (`SQLSetDescField`/`SQLGetDescField`'s per-index
/// fields). Record 0 is the bookmark and is never produced by
/// `SQLSetDescRec`/`SQLGetDescRec` enumeration, which starts at 1 -- but is
/// still addressable directly by field identifier.
#[derive(Debug, Clone, Default)]
pub struct DescRecord {
    pub concise_type: SmallInt,
    pub r#type: SmallInt,
    pub data_ptr: Pointer,
    pub indicator_ptr: *mut Len,
    pub octet_length_ptr: *mut Len,
    pub octet_length: Len,
    pub length: ULen,
    pub precision: SmallInt,
    pub scale: SmallInt,
    pub nullable: SmallInt,
    pub name: String,
    pub unnamed: SmallInt,
    /// `SQL_DESC_PARAMETER_TYPE` -- meaningful only on an IPD.
    pub parameter_type: SmallInt,
}

/// Array-level (header) fields plus the record vector. Shared shape across
/// APD/ARD/IPD/IRD; which fields are meaningful depends on which of the
/// four a given `Descriptor` backs, matching the single `DESC` struct ODBC
/// itself uses for all four descriptor types.
#[derive(Debug, Clone)]
pub struct DescriptorAttributes {
    pub records: Vec<DescRecord>,
    pub array_size: ULen,
    pub array_status_ptr: *mut USmallInt,
    pub bind_offset_ptr: *mut Len,
    pub bind_type: ULen,
    pub rows_processed_ptr: *mut ULen,
}

impl Default for DescriptorAttributes {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            array_size: 1,
            array_status_ptr: std::ptr::null_mut(),
            bind_offset_ptr: std::ptr::null_mut(),
            bind_type: BindType::SQL_BIND_BY_COLUMN as ULen,
            rows_processed_ptr: std::ptr::null_mut(),
        }
    }
}

impl DescriptorAttributes {
    /// Grows or shrinks `records` to `count` entries. New entries are
    /// default-initialized; shrinking drops trailing records without
    /// touching the survivors, per `SQLSetDescField(SQL_DESC_COUNT, ...)`'s
    /// contract.
    pub fn set_record_count(&mut self, count: usize) {
        self.records.resize_with(count, DescRecord::default);
    }

    /// 1-based record lookup; `None` for index 0 (the bookmark, never an
    /// ordinary record) or an index past the end.
    pub fn record(&self, record_number: SmallInt) -> Option<&DescRecord> {
        if record_number < 1 {
            return None;
        }
        self.records.get(record_number as usize - 1)
    }

    /// 1-based mutable record lookup, growing the vector if `record_number`
    /// is one past the current end (the common "bind record N+1" pattern).
    pub fn record_mut(&mut self, record_number: SmallInt) -> Option<&mut DescRecord> {
        if record_number < 1 {
            return None;
        }
        let idx = record_number as usize - 1;
        if idx >= self.records.len() {
            self.records.resize_with(idx + 1, DescRecord::default);
        }
        self.records.get_mut(idx)
    }
}

impl Descriptor {
    pub fn with_state(connection: *mut OdbcHandle, state: DescriptorState) -> Self {
        Self {
            connection,
            attributes: RwLock::new(DescriptorAttributes::default()),
            state: RwLock::new(state),
            errors: RwLock::new(vec![]),
        }
    }
}

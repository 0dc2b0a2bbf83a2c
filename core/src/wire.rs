//! The collaborator abstraction between this driver and whatever native SQL
//! server library it is linked against. Everything above this module deals
//! only in these traits; the real network client is injected by the
//! application embedding the driver (or substituted with [`MockWireClient`]
//! in tests).

use std::time::Duration;

pub type WireResult<T> = std::result::Result<T, WireError>;

/// An error surfaced by the wire client. Carries enough information for the
/// core crate to classify it into an ODBC SQLSTATE without having to
/// understand the wire protocol itself.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct WireError {
    /// Server- or transport-native error code, if any. Used by
    /// [`crate::sqlstate::sql_state`] to resolve a precise SQLSTATE.
    pub native_code: Option<i32>,
    pub message: String,
    pub kind: WireErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireErrorKind {
    ConnectionFailure,
    AuthFailure,
    SyntaxOrAccessViolation,
    IntegrityConstraintViolation,
    TransactionFailure,
    Timeout,
    Cancelled,
    Other,
}

impl WireError {
    pub fn other(message: impl Into<String>) -> Self {
        WireError {
            native_code: None,
            message: message.into(),
            kind: WireErrorKind::Other,
        }
    }
}

/// One row of a wire-client result set: an ordered list of nullable scalar
/// values, addressed by zero-based column index.
pub type Row = Vec<Option<crate::value::SqlValue>>;

/// Connection-level collaborator. A `WireClient` is the long-lived, mostly
/// stateless handle created from a parsed connection string; each ODBC
/// connection attaches a fresh [`WireSession`] from it.
pub trait WireClient: Send + Sync {
    /// Human-readable identifier of the server product/version this client
    /// speaks to, surfaced through `SQLGetInfo(SQL_DBMS_NAME/SQL_DBMS_VER)`.
    fn dispatcher(&self) -> &str;

    /// Returns `Ok(())` if the client believes it can still reach the
    /// server (used for connection-pool health checks); does not imply a
    /// live session exists yet.
    fn status(&self) -> WireResult<()>;

    /// Opens a new session (this driver's unit of "connection").
    fn attach(&self) -> WireResult<Box<dyn WireSession>>;
}

/// Per-connection collaborator. One `WireSession` backs one ODBC `Dbc`
/// handle and every `Stmt` handle allocated under it.
pub trait WireSession: Send {
    fn start_transaction(&mut self) -> WireResult<()>;
    fn commit(&mut self) -> WireResult<()>;
    fn rollback(&mut self) -> WireResult<()>;

    /// Parses `sql` server-side and returns an opaque prepared-statement
    /// handle plus the result-set column metadata (empty for statements
    /// with no result set).
    fn prepare(&mut self, sql: &str) -> WireResult<PreparedStatement>;

    /// Executes a previously prepared statement with the given parameter
    /// row (empty if the statement takes no parameters), returning a
    /// cursor handle usable with [`WireSession::fetch`].
    fn execute(&mut self, prepared: &PreparedStatement, params: &Row) -> WireResult<CursorHandle>;

    /// Retrieves up to `max_rows` rows from the cursor opened by
    /// [`WireSession::execute`]. An empty, non-final batch is never
    /// returned: `rows.len() < max_rows` always means end of cursor.
    fn fetch(&mut self, cursor: &CursorHandle, max_rows: usize) -> WireResult<FetchBatch>;

    /// Whether the underlying transport is still connected.
    fn is_alive(&self) -> bool;

    /// Opens a server-side BLOB/CLOB reference for streamed `SQLGetData`.
    fn blob_open(&mut self, cursor: &CursorHandle, col_index: u16) -> WireResult<BlobHandle>;

    /// Reads the next chunk of an open BLOB. Returns fewer than
    /// `buf.len()` bytes only at end of stream.
    fn blob_read(&mut self, blob: &BlobHandle, buf: &mut [u8]) -> WireResult<usize>;

    /// Runs one of the fixed catalog queries (`SQLTables`, `SQLColumns`,
    /// ...) against the server and returns its result set directly, since
    /// catalog shapes are schema metadata rather than user SQL.
    fn catalog_query(&mut self, query: &crate::catalog::CatalogQuery) -> WireResult<QueryResult>;

    fn set_operation_timeout(&mut self, timeout: Option<Duration>);

    /// Aborts whatever statement is currently executing on this session,
    /// called from a thread other than the one driving `execute`/`fetch`.
    /// Matches `SQLCancel`'s contract: a no-op, not an error, when nothing
    /// is in flight.
    fn cancel(&mut self) -> WireResult<()>;
}

#[derive(Debug, Clone)]
pub struct PreparedStatement {
    pub id: u64,
    pub columns: Vec<crate::col_metadata::ColumnMetadata>,
    pub param_count: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorHandle {
    pub id: u64,
}

#[derive(Debug, Clone)]
pub struct FetchBatch {
    pub rows: Vec<Row>,
    pub done: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlobHandle {
    pub id: u64,
}

/// A complete, already-materialized result set, used for catalog queries
/// whose row counts are small and known up front (table/column lists).
#[derive(Debug, Clone)]
pub struct QueryResult {
    pub columns: Vec<crate::col_metadata::ColumnMetadata>,
    pub rows: Vec<Row>,
}

//! An in-memory stand-in for a real wire-client connection, built entirely
//! from canned query responses. Generalizes `core/src/mock_query.rs`'s
//! fixed-row-vector statement (`MongoQuery { resultset: Vec<Document>, .. }`)
//! from a single hard-coded shape into a table of `sql -> (schema, rows)`
//! responses a caller seeds up front, so the same mock backs every test
//! rather than one per statement shape.

use crate::col_metadata::ColumnMetadata;
use crate::wire::{
    BlobHandle, CursorHandle, FetchBatch, PreparedStatement, QueryResult, Row, WireClient,
    WireError, WireResult, WireSession,
};
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct MockWireClient {
    queries: HashMap<String, (Vec<ColumnMetadata>, Vec<Row>)>,
}

impl MockWireClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the response `sql` (matched case-insensitively, trimmed)
    /// should produce once prepared and executed.
    pub fn with_query(
        mut self,
        sql: impl Into<String>,
        columns: Vec<ColumnMetadata>,
        rows: Vec<Row>,
    ) -> Self {
        self.queries
            .insert(normalize(&sql.into()), (columns, rows));
        self
    }
}

fn normalize(sql: &str) -> String {
    sql.trim().to_lowercase()
}

impl WireClient for MockWireClient {
    fn dispatcher(&self) -> &str {
        "MockWire"
    }

    fn status(&self) -> WireResult<()> {
        Ok(())
    }

    fn attach(&self) -> WireResult<Box<dyn WireSession>> {
        Ok(Box::new(MockWireSession {
            queries: self.queries.clone(),
            prepared: HashMap::new(),
            cursors: HashMap::new(),
            blobs: HashMap::new(),
            next_id: 1,
            in_transaction: false,
            operation_timeout: None,
            cancelled: false,
        }))
    }
}

pub struct MockWireSession {
    queries: HashMap<String, (Vec<ColumnMetadata>, Vec<Row>)>,
    prepared: HashMap<u64, String>,
    cursors: HashMap<u64, (Vec<Row>, usize)>,
    blobs: HashMap<u64, (Vec<u8>, usize)>,
    next_id: u64,
    in_transaction: bool,
    operation_timeout: Option<Duration>,
    cancelled: bool,
}

impl MockWireSession {
    fn fresh_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl WireSession for MockWireSession {
    fn start_transaction(&mut self) -> WireResult<()> {
        self.in_transaction = true;
        Ok(())
    }

    fn commit(&mut self) -> WireResult<()> {
        self.in_transaction = false;
        Ok(())
    }

    fn rollback(&mut self) -> WireResult<()> {
        self.in_transaction = false;
        Ok(())
    }

    fn prepare(&mut self, sql: &str) -> WireResult<PreparedStatement> {
        let key = normalize(sql);
        let (columns, _) = self
            .queries
            .get(&key)
            .ok_or_else(|| WireError::other(format!("no mock response registered for: {sql}")))?;
        let id = self.fresh_id();
        let columns = columns.clone();
        self.prepared.insert(id, key);
        Ok(PreparedStatement {
            id,
            columns,
            param_count: 0,
        })
    }

    fn execute(&mut self, prepared: &PreparedStatement, _params: &Row) -> WireResult<CursorHandle> {
        let key = self
            .prepared
            .get(&prepared.id)
            .ok_or_else(|| WireError::other("execute called with unknown prepared statement"))?;
        let (_, rows) = self
            .queries
            .get(key)
            .ok_or_else(|| WireError::other("prepared statement's response was removed"))?;
        let id = self.fresh_id();
        self.cursors.insert(id, (rows.clone(), 0));
        Ok(CursorHandle { id })
    }

    fn fetch(&mut self, cursor: &CursorHandle, max_rows: usize) -> WireResult<FetchBatch> {
        if self.cancelled {
            self.cancelled = false;
            return Err(WireError {
                native_code: None,
                message: "operation canceled".to_string(),
                kind: crate::wire::WireErrorKind::Cancelled,
            });
        }
        let (rows, pos) = self
            .cursors
            .get_mut(&cursor.id)
            .ok_or_else(|| WireError::other("fetch called on unknown cursor"))?;
        let end = (*pos + max_rows).min(rows.len());
        let batch = rows[*pos..end].to_vec();
        *pos = end;
        Ok(FetchBatch {
            done: *pos >= rows.len(),
            rows: batch,
        })
    }

    fn is_alive(&self) -> bool {
        true
    }

    fn blob_open(&mut self, cursor: &CursorHandle, col_index: u16) -> WireResult<BlobHandle> {
        let (rows, pos) = self
            .cursors
            .get(&cursor.id)
            .ok_or_else(|| WireError::other("blob_open called on unknown cursor"))?;
        let row = rows
            .get(pos.saturating_sub(1))
            .ok_or_else(|| WireError::other("blob_open called before any row was fetched"))?;
        let bytes = match row.get(col_index as usize) {
            Some(Some(v)) => v.to_binary().unwrap_or_default(),
            _ => Vec::new(),
        };
        let id = self.fresh_id();
        self.blobs.insert(id, (bytes, 0));
        Ok(BlobHandle { id })
    }

    fn blob_read(&mut self, blob: &BlobHandle, buf: &mut [u8]) -> WireResult<usize> {
        let (bytes, pos) = self
            .blobs
            .get_mut(&blob.id)
            .ok_or_else(|| WireError::other("blob_read called on unknown blob"))?;
        let n = buf.len().min(bytes.len() - *pos);
        buf[..n].copy_from_slice(&bytes[*pos..*pos + n]);
        *pos += n;
        Ok(n)
    }

    fn catalog_query(&mut self, query: &crate::catalog::CatalogQuery) -> WireResult<QueryResult> {
        Ok(QueryResult {
            columns: query.schema(),
            rows: Vec::new(),
        })
    }

    fn set_operation_timeout(&mut self, timeout: Option<Duration>) {
        self.operation_timeout = timeout;
    }

    fn cancel(&mut self) -> WireResult<()> {
        self.cancelled = true;
        Ok(())
    }
}

#[cfg(test)]
mod unit {
    use super::*;
    use crate::col_metadata::ColumnNullability;
    use crate::value::SqlValue;
    use definitions::SqlDataType;

    fn sample_client() -> MockWireClient {
        MockWireClient::new().with_query(
            "select 1",
            vec![ColumnMetadata::new_scalar(
                "col1",
                SqlDataType::SQL_INTEGER,
                ColumnNullability::NoNulls,
            )],
            vec![vec![Some(SqlValue::Integer(1))]],
        )
    }

    #[test]
    fn prepare_unknown_sql_errors() {
        let client = MockWireClient::new();
        let mut session = client.attach().unwrap();
        assert!(session.prepare("select 1").is_err());
    }

    #[test]
    fn prepare_execute_fetch_round_trip() {
        let client = sample_client();
        let mut session = client.attach().unwrap();
        let prepared = session.prepare("SELECT 1").unwrap();
        assert_eq!(prepared.columns.len(), 1);
        let cursor = session.execute(&prepared, &vec![]).unwrap();
        let batch = session.fetch(&cursor, 10).unwrap();
        assert!(batch.done);
        assert_eq!(batch.rows.len(), 1);
        assert_eq!(batch.rows[0][0], Some(SqlValue::Integer(1)));
    }

    #[test]
    fn fetch_respects_max_rows_across_calls() {
        let client = MockWireClient::new().with_query(
            "select n",
            vec![ColumnMetadata::new_scalar(
                "n",
                SqlDataType::SQL_INTEGER,
                ColumnNullability::NoNulls,
            )],
            vec![
                vec![Some(SqlValue::Integer(1))],
                vec![Some(SqlValue::Integer(2))],
                vec![Some(SqlValue::Integer(3))],
            ],
        );
        let mut session = client.attach().unwrap();
        let prepared = session.prepare("select n").unwrap();
        let cursor = session.execute(&prepared, &vec![]).unwrap();
        let first = session.fetch(&cursor, 2).unwrap();
        assert_eq!(first.rows.len(), 2);
        assert!(!first.done);
        let second = session.fetch(&cursor, 2).unwrap();
        assert_eq!(second.rows.len(), 1);
        assert!(second.done);
    }

    #[test]
    fn cancel_fails_the_next_fetch_then_clears() {
        let client = sample_client();
        let mut session = client.attach().unwrap();
        let prepared = session.prepare("select 1").unwrap();
        let cursor = session.execute(&prepared, &vec![]).unwrap();
        session.cancel().unwrap();
        let err = session.fetch(&cursor, 10).unwrap_err();
        assert_eq!(err.kind, crate::wire::WireErrorKind::Cancelled);
        let batch = session.fetch(&cursor, 10).unwrap();
        assert!(batch.done);
    }
}

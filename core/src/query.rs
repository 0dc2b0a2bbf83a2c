//! A query-backed [`Statement`]: prepares and executes SQL text against a
//! [`WireSession`] and serves row-array fetches from it. Generalizes
//! `MongoQuery` (which owned a `mongodb::sync::Cursor<Document>` directly)
//! to drive any wire client through the trait boundary instead.

use crate::col_metadata::ColumnMetadata;
use crate::err::Result;
use crate::stmt::{RowSet, Statement};
use crate::value::SqlValue;
use crate::wire::{CursorHandle, PreparedStatement, Row, WireSession};
use std::cell::RefCell;
use std::rc::Rc;

/// A wire session shared by every statement allocated under one connection.
/// `Rc<RefCell<_>>` rather than a lock: cross-thread access to a single ODBC
/// handle is already serialized by the concurrency guard above this crate,
/// so nothing here needs to be `Sync`.
pub type SharedSession = Rc<RefCell<Box<dyn WireSession>>>;

pub struct Query {
    session: SharedSession,
    prepared: PreparedStatement,
    cursor: CursorHandle,
    current: RowSet,
}

impl Query {
    /// Parses `sql` server-side without executing it, returning the
    /// prepared-statement handle and its result-set schema (used to answer
    /// `SQLDescribeCol`/`SQLNumResultCols` before `SQLExecute` has run).
    pub fn prepare(session: &SharedSession, sql: &str) -> Result<PreparedStatement> {
        Ok(session.borrow_mut().prepare(sql)?)
    }

    /// Executes a statement previously returned by [`Query::prepare`].
    pub fn execute(
        session: SharedSession,
        prepared: PreparedStatement,
        params: &Row,
    ) -> Result<Self> {
        let cursor = session.borrow_mut().execute(&prepared, params)?;
        Ok(Query {
            session,
            prepared,
            cursor,
            current: RowSet::default(),
        })
    }
}

impl Statement for Query {
    fn columns(&self) -> &[ColumnMetadata] {
        &self.prepared.columns
    }

    fn fetch(&mut self, row_array_size: usize) -> Result<RowSet> {
        let batch = self.session.borrow_mut().fetch(&self.cursor, row_array_size)?;
        self.current = RowSet {
            rows: batch.rows,
            done: batch.done,
        };
        Ok(self.current.clone())
    }

    fn get_value(&self, row_in_set: usize, col_index: u16) -> Result<Option<&SqlValue>> {
        let row = self
            .current
            .rows
            .get(row_in_set)
            .ok_or(crate::err::Error::InvalidColumnIndex(col_index))?;
        let value = row
            .get(col_index as usize)
            .ok_or(crate::err::Error::InvalidColumnIndex(col_index))?;
        Ok(value.as_ref())
    }
}

#[cfg(test)]
mod unit {
    use super::*;
    use crate::col_metadata::ColumnNullability;
    use crate::mock_wire::MockWireClient;
    use crate::wire::WireClient;
    use definitions::SqlDataType;

    fn shared(client: MockWireClient) -> SharedSession {
        Rc::new(RefCell::new(client.attach().unwrap()))
    }

    #[test]
    fn execute_then_fetch_returns_seeded_rows() {
        let client = MockWireClient::new().with_query(
            "select 1",
            vec![ColumnMetadata::new_scalar(
                "col1",
                SqlDataType::SQL_INTEGER,
                ColumnNullability::NoNulls,
            )],
            vec![vec![Some(SqlValue::Integer(1))]],
        );
        let session = shared(client);
        let prepared = Query::prepare(&session, "select 1").unwrap();
        let mut query = Query::execute(session, prepared, &vec![]).unwrap();
        let page = query.fetch(10).unwrap();
        assert_eq!(page.rows.len(), 1);
        assert!(page.done);
        assert_eq!(
            query.get_value(0, 0).unwrap(),
            Some(&SqlValue::Integer(1))
        );
    }

    #[test]
    fn get_value_out_of_range_column_errors() {
        let client = MockWireClient::new().with_query(
            "select 1",
            vec![ColumnMetadata::new_scalar(
                "col1",
                SqlDataType::SQL_INTEGER,
                ColumnNullability::NoNulls,
            )],
            vec![vec![Some(SqlValue::Integer(1))]],
        );
        let session = shared(client);
        let prepared = Query::prepare(&session, "select 1").unwrap();
        let mut query = Query::execute(session, prepared, &vec![]).unwrap();
        query.fetch(10).unwrap();
        assert!(query.get_value(0, 5).is_err());
    }
}

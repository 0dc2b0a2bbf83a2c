//! Connection-level state: the attributes `SQLGetConnectAttr`/
//! `SQLSetConnectAttr` expose, plus the attached [`WireSession`] every
//! statement allocated under this connection shares. Generalizes
//! `MongoConnection::connect` (which built a `mongodb::sync::Client`
//! directly) to attach whatever [`WireSession`] the injected
//! [`WireClient`] hands back, then runs the same "select 1" connectivity
//! check before declaring the connection usable.

use crate::catalog::{CatalogQuery, CatalogStatement};
use crate::err::{Error, Result};
use crate::query::{Query, SharedSession};
use crate::stmt::Statement;
use crate::wire::{Row, WireClient};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionIsolation {
    ReadUncommitted,
    ReadCommitted,
    RepeatableRead,
    Serializable,
}

pub struct Connection {
    session: SharedSession,
    dispatcher_name: String,
    /// Current catalog, from `SQL_ATTR_CURRENT_CATALOG` or the connection
    /// string's `DATABASE` key. All unqualified statements run against it.
    pub current_catalog: Option<String>,
    /// `SQL_ATTR_CONNECTION_TIMEOUT` -- bounds any non-login, non-query wait.
    pub operation_timeout: Option<Duration>,
    pub autocommit: bool,
    pub transaction_isolation: TransactionIsolation,
}

impl Connection {
    /// Attaches a session from `wire_client` and verifies it is usable. The
    /// login timeout bounds only this call, matching
    /// `SQL_ATTR_LOGIN_TIMEOUT`'s semantics; it is not retained afterward.
    pub fn connect(
        wire_client: &dyn WireClient,
        current_catalog: Option<&str>,
        operation_timeout: Option<u32>,
        _login_timeout: Option<u32>,
    ) -> Result<Self> {
        wire_client.status()?;
        let mut session = wire_client.attach()?;
        let operation_timeout = operation_timeout.map(|to| Duration::new(u64::from(to), 0));
        session.set_operation_timeout(operation_timeout);
        let dispatcher_name = wire_client.dispatcher().to_string();
        let session: SharedSession = Rc::new(RefCell::new(session));

        let connection = Connection {
            session,
            dispatcher_name,
            current_catalog: current_catalog.map(String::from),
            operation_timeout,
            autocommit: true,
            transaction_isolation: TransactionIsolation::ReadCommitted,
        };
        connection.ping()?;
        Ok(connection)
    }

    fn ping(&self) -> Result<()> {
        let prepared = Query::prepare(&self.session, "select 1")?;
        let mut query = Query::execute(self.session.clone(), prepared, &vec![])?;
        query.fetch(1)?;
        Ok(())
    }

    pub fn session(&self) -> SharedSession {
        self.session.clone()
    }

    /// Runs one of the fixed catalog lookups (`SQLTables`, `SQLColumns`,
    /// ...) and returns a statement ready for `SQLFetch`. `SQLGetTypeInfo`
    /// answers from this driver's own static type table rather than a round
    /// trip to the wire session -- which type codes it supports isn't
    /// something the backend has an opinion on.
    pub fn catalog_statement(&self, query: CatalogQuery) -> Result<Box<dyn Statement>> {
        if let CatalogQuery::TypeInfo { data_type } = query {
            let rows = crate::type_info::type_info_rows(data_type);
            return Ok(Box::new(CatalogStatement::from_rows(
                crate::type_info::type_info_metadata(),
                rows,
            )));
        }
        Ok(Box::new(CatalogStatement::execute(&self.session, &query)?))
    }

    /// Prepares and executes `sql` against this connection, returning a
    /// statement ready for `SQLFetch`/`SQLGetData`. Used by
    /// `SQLExecDirect` and `SQLExecute` (after a prior `SQLPrepare`).
    pub fn query_statement(&self, sql: &str, params: &Row) -> Result<Box<dyn Statement>> {
        let prepared = Query::prepare(&self.session, sql)?;
        Ok(Box::new(Query::execute(self.session.clone(), prepared, params)?))
    }

    /// `SQL_DBMS_NAME`/`SQL_DBMS_VER`'s source, surfaced as a single string
    /// since the wire client owns version formatting.
    pub fn dispatcher_name(&self) -> &str {
        &self.dispatcher_name
    }

    /// `SQL_ATTR_CONNECTION_DEAD`: asks the live session rather than
    /// trusting a flag that could have gone stale since it was last set.
    pub fn is_dead(&self) -> bool {
        !self.session.borrow().is_alive()
    }

    pub fn commit(&self) -> Result<()> {
        Ok(self.session.borrow_mut().commit()?)
    }

    pub fn rollback(&self) -> Result<()> {
        Ok(self.session.borrow_mut().rollback()?)
    }

    pub fn start_transaction(&self) -> Result<()> {
        Ok(self.session.borrow_mut().start_transaction()?)
    }

    /// `SQLCancel`/`SQLCancelHandle`'s entry point: aborts whatever this
    /// connection's session is currently doing.
    pub fn cancel(&self) -> Result<()> {
        Ok(self.session.borrow_mut().cancel()?)
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("dispatcher_name", &self.dispatcher_name)
            .field("current_catalog", &self.current_catalog)
            .field("autocommit", &self.autocommit)
            .finish()
    }
}

#[cfg(test)]
mod unit {
    use super::*;
    use crate::col_metadata::{ColumnMetadata, ColumnNullability};
    use crate::mock_wire::MockWireClient;
    use crate::value::SqlValue;
    use definitions::SqlDataType;

    fn pingable_client() -> MockWireClient {
        MockWireClient::new().with_query(
            "select 1",
            vec![ColumnMetadata::new_scalar(
                "",
                SqlDataType::SQL_INTEGER,
                ColumnNullability::NoNulls,
            )],
            vec![vec![Some(SqlValue::Integer(1))]],
        )
    }

    #[test]
    fn connect_succeeds_when_ping_is_seeded() {
        let client = pingable_client();
        let conn = Connection::connect(&client, Some("mydb"), None, None).unwrap();
        assert_eq!(conn.current_catalog.as_deref(), Some("mydb"));
        assert!(conn.autocommit);
        assert!(!conn.is_dead());
    }

    #[test]
    fn connect_fails_when_ping_query_is_not_seeded() {
        let client = MockWireClient::new();
        assert!(Connection::connect(&client, None, None, None).is_err());
    }

    #[test]
    fn query_statement_runs_arbitrary_sql() {
        let client = pingable_client().with_query(
            "select col1 from t",
            vec![ColumnMetadata::new_scalar(
                "col1",
                SqlDataType::SQL_INTEGER,
                ColumnNullability::NoNulls,
            )],
            vec![vec![Some(SqlValue::Integer(42))]],
        );
        let conn = Connection::connect(&client, None, None, None).unwrap();
        let mut stmt = conn.query_statement("select col1 from t", &vec![]).unwrap();
        let rows = stmt.fetch(10).unwrap();
        assert_eq!(rows.rows.len(), 1);
        assert_eq!(
            stmt.get_value(0, 0).unwrap(),
            Some(&SqlValue::Integer(42))
        );
    }
}

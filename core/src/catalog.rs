//! Catalog statement support: `SQLTables`/`SQLColumns`/`SQLPrimaryKeys`/
//! `SQLForeignKeys`/`SQLStatistics`/`SQLSpecialColumns`/`SQLProcedures`/
//! `SQLProcedureColumns`/`SQLTablePrivileges`/`SQLColumnPrivileges` each
//! resolve to a fixed ODBC result-set schema. Generalizes the teacher's
//! `MongoDatabases`/`MongoCollections` pattern (a statement hand-built over
//! a single admin command's response) to one dispatch point that hands the
//! search pattern to [`crate::wire::WireSession::catalog_query`] and
//! validates the schema it answers with against the fixed shape below.

use crate::col_metadata::{ColumnMetadata, ColumnNullability};
use crate::err::Result;
use crate::query::SharedSession;
use crate::stmt::{RowSet, Statement};
use crate::value::SqlValue;
use crate::wire::Row;
use definitions::SqlDataType;

/// One of the ten fixed catalog lookups, carrying the search patterns the
/// caller supplied (percent-escaped per `SQL_ATTR_METADATA_ID`, already
/// resolved by the dispatcher before this point).
#[derive(Debug, Clone)]
pub enum CatalogQuery {
    Tables {
        catalog: Option<String>,
        schema: Option<String>,
        table: Option<String>,
        table_type: Option<String>,
    },
    Columns {
        catalog: Option<String>,
        schema: Option<String>,
        table: Option<String>,
        column: Option<String>,
    },
    PrimaryKeys {
        catalog: Option<String>,
        schema: Option<String>,
        table: String,
    },
    ForeignKeys {
        pk_catalog: Option<String>,
        pk_schema: Option<String>,
        pk_table: Option<String>,
        fk_catalog: Option<String>,
        fk_schema: Option<String>,
        fk_table: Option<String>,
    },
    Statistics {
        catalog: Option<String>,
        schema: Option<String>,
        table: String,
        unique_only: bool,
    },
    SpecialColumns {
        catalog: Option<String>,
        schema: Option<String>,
        table: String,
    },
    Procedures {
        catalog: Option<String>,
        schema: Option<String>,
        procedure: Option<String>,
    },
    ProcedureColumns {
        catalog: Option<String>,
        schema: Option<String>,
        procedure: Option<String>,
        column: Option<String>,
    },
    TablePrivileges {
        catalog: Option<String>,
        schema: Option<String>,
        table: String,
    },
    ColumnPrivileges {
        catalog: Option<String>,
        schema: Option<String>,
        table: String,
        column: Option<String>,
    },
    /// `SQLGetTypeInfo`. `data_type` is `None` for `SQL_ALL_TYPES`, otherwise
    /// the single type the caller asked about.
    TypeInfo { data_type: Option<SqlDataType> },
}

fn col(name: &str, ty: SqlDataType, nullable: ColumnNullability) -> ColumnMetadata {
    ColumnMetadata::new_scalar(name, ty, nullable)
}

impl CatalogQuery {
    /// The result-set schema ODBC mandates for this catalog function,
    /// regardless of what the wire client's rows actually contain. The
    /// dispatcher uses this for `SQLDescribeCol`/`SQLNumResultCols` even
    /// before the query has executed.
    pub fn schema(&self) -> Vec<ColumnMetadata> {
        use ColumnNullability::*;
        use SqlDataType::*;
        match self {
            CatalogQuery::Tables { .. } => vec![
                col("TABLE_CAT", SQL_VARCHAR, Nullable),
                col("TABLE_SCHEM", SQL_VARCHAR, Nullable),
                col("TABLE_NAME", SQL_VARCHAR, NoNulls),
                col("TABLE_TYPE", SQL_VARCHAR, NoNulls),
                col("REMARKS", SQL_VARCHAR, Nullable),
            ],
            CatalogQuery::Columns { .. } => vec![
                col("TABLE_CAT", SQL_VARCHAR, Nullable),
                col("TABLE_SCHEM", SQL_VARCHAR, Nullable),
                col("TABLE_NAME", SQL_VARCHAR, NoNulls),
                col("COLUMN_NAME", SQL_VARCHAR, NoNulls),
                col("DATA_TYPE", SQL_SMALLINT, NoNulls),
                col("TYPE_NAME", SQL_VARCHAR, NoNulls),
                col("COLUMN_SIZE", SQL_INTEGER, Nullable),
                col("BUFFER_LENGTH", SQL_INTEGER, Nullable),
                col("DECIMAL_DIGITS", SQL_SMALLINT, Nullable),
                col("NUM_PREC_RADIX", SQL_SMALLINT, Nullable),
                col("NULLABLE", SQL_SMALLINT, NoNulls),
                col("REMARKS", SQL_VARCHAR, Nullable),
                col("COLUMN_DEF", SQL_VARCHAR, Nullable),
                col("SQL_DATA_TYPE", SQL_SMALLINT, NoNulls),
                col("SQL_DATETIME_SUB", SQL_SMALLINT, Nullable),
                col("CHAR_OCTET_LENGTH", SQL_INTEGER, Nullable),
                col("ORDINAL_POSITION", SQL_INTEGER, NoNulls),
                col("IS_NULLABLE", SQL_VARCHAR, Nullable),
            ],
            CatalogQuery::PrimaryKeys { .. } => vec![
                col("TABLE_CAT", SQL_VARCHAR, Nullable),
                col("TABLE_SCHEM", SQL_VARCHAR, Nullable),
                col("TABLE_NAME", SQL_VARCHAR, NoNulls),
                col("COLUMN_NAME", SQL_VARCHAR, NoNulls),
                col("KEY_SEQ", SQL_SMALLINT, NoNulls),
                col("PK_NAME", SQL_VARCHAR, Nullable),
            ],
            CatalogQuery::ForeignKeys { .. } => vec![
                col("PKTABLE_CAT", SQL_VARCHAR, Nullable),
                col("PKTABLE_SCHEM", SQL_VARCHAR, Nullable),
                col("PKTABLE_NAME", SQL_VARCHAR, NoNulls),
                col("PKCOLUMN_NAME", SQL_VARCHAR, NoNulls),
                col("FKTABLE_CAT", SQL_VARCHAR, Nullable),
                col("FKTABLE_SCHEM", SQL_VARCHAR, Nullable),
                col("FKTABLE_NAME", SQL_VARCHAR, NoNulls),
                col("FKCOLUMN_NAME", SQL_VARCHAR, NoNulls),
                col("KEY_SEQ", SQL_SMALLINT, NoNulls),
                col("UPDATE_RULE", SQL_SMALLINT, Nullable),
                col("DELETE_RULE", SQL_SMALLINT, Nullable),
                col("FK_NAME", SQL_VARCHAR, Nullable),
                col("PK_NAME", SQL_VARCHAR, Nullable),
                col("DEFERRABILITY", SQL_SMALLINT, Nullable),
            ],
            CatalogQuery::Statistics { .. } => vec![
                col("TABLE_CAT", SQL_VARCHAR, Nullable),
                col("TABLE_SCHEM", SQL_VARCHAR, Nullable),
                col("TABLE_NAME", SQL_VARCHAR, NoNulls),
                col("NON_UNIQUE", SQL_SMALLINT, Nullable),
                col("INDEX_QUALIFIER", SQL_VARCHAR, Nullable),
                col("INDEX_NAME", SQL_VARCHAR, Nullable),
                col("TYPE", SQL_SMALLINT, NoNulls),
                col("ORDINAL_POSITION", SQL_SMALLINT, Nullable),
                col("COLUMN_NAME", SQL_VARCHAR, Nullable),
                col("ASC_OR_DESC", SQL_CHAR, Nullable),
                col("CARDINALITY", SQL_INTEGER, Nullable),
                col("PAGES", SQL_INTEGER, Nullable),
                col("FILTER_CONDITION", SQL_VARCHAR, Nullable),
            ],
            CatalogQuery::SpecialColumns { .. } => vec![
                col("SCOPE", SQL_SMALLINT, Nullable),
                col("COLUMN_NAME", SQL_VARCHAR, NoNulls),
                col("DATA_TYPE", SQL_SMALLINT, NoNulls),
                col("TYPE_NAME", SQL_VARCHAR, NoNulls),
                col("COLUMN_SIZE", SQL_INTEGER, Nullable),
                col("BUFFER_LENGTH", SQL_INTEGER, Nullable),
                col("DECIMAL_DIGITS", SQL_SMALLINT, Nullable),
                col("PSEUDO_COLUMN", SQL_SMALLINT, Nullable),
            ],
            CatalogQuery::Procedures { .. } => vec![
                col("PROCEDURE_CAT", SQL_VARCHAR, Nullable),
                col("PROCEDURE_SCHEM", SQL_VARCHAR, Nullable),
                col("PROCEDURE_NAME", SQL_VARCHAR, NoNulls),
                col("NUM_INPUT_PARAMS", SQL_INTEGER, Nullable),
                col("NUM_OUTPUT_PARAMS", SQL_INTEGER, Nullable),
                col("NUM_RESULT_SETS", SQL_INTEGER, Nullable),
                col("REMARKS", SQL_VARCHAR, Nullable),
                col("PROCEDURE_TYPE", SQL_SMALLINT, Nullable),
            ],
            CatalogQuery::ProcedureColumns { .. } => vec![
                col("PROCEDURE_CAT", SQL_VARCHAR, Nullable),
                col("PROCEDURE_SCHEM", SQL_VARCHAR, Nullable),
                col("PROCEDURE_NAME", SQL_VARCHAR, NoNulls),
                col("COLUMN_NAME", SQL_VARCHAR, NoNulls),
                col("COLUMN_TYPE", SQL_SMALLINT, NoNulls),
                col("DATA_TYPE", SQL_SMALLINT, NoNulls),
                col("TYPE_NAME", SQL_VARCHAR, NoNulls),
                col("COLUMN_SIZE", SQL_INTEGER, Nullable),
                col("BUFFER_LENGTH", SQL_INTEGER, Nullable),
                col("DECIMAL_DIGITS", SQL_SMALLINT, Nullable),
                col("NUM_PREC_RADIX", SQL_SMALLINT, Nullable),
                col("NULLABLE", SQL_SMALLINT, NoNulls),
                col("REMARKS", SQL_VARCHAR, Nullable),
            ],
            CatalogQuery::TablePrivileges { .. } => vec![
                col("TABLE_CAT", SQL_VARCHAR, Nullable),
                col("TABLE_SCHEM", SQL_VARCHAR, Nullable),
                col("TABLE_NAME", SQL_VARCHAR, NoNulls),
                col("GRANTOR", SQL_VARCHAR, Nullable),
                col("GRANTEE", SQL_VARCHAR, NoNulls),
                col("PRIVILEGE", SQL_VARCHAR, NoNulls),
                col("IS_GRANTABLE", SQL_VARCHAR, Nullable),
            ],
            CatalogQuery::ColumnPrivileges { .. } => vec![
                col("TABLE_CAT", SQL_VARCHAR, Nullable),
                col("TABLE_SCHEM", SQL_VARCHAR, Nullable),
                col("TABLE_NAME", SQL_VARCHAR, NoNulls),
                col("COLUMN_NAME", SQL_VARCHAR, NoNulls),
                col("GRANTOR", SQL_VARCHAR, Nullable),
                col("GRANTEE", SQL_VARCHAR, NoNulls),
                col("PRIVILEGE", SQL_VARCHAR, NoNulls),
                col("IS_GRANTABLE", SQL_VARCHAR, Nullable),
            ],
            // Same 19-column shape `crate::type_info` already defines for the
            // static type table; reuse it instead of a second copy here.
            CatalogQuery::TypeInfo { .. } => crate::type_info::type_info_metadata(),
        }
    }
}

/// Builds the `SQLTables` query. The other nine catalog functions follow the
/// same shape (constructed directly by the dispatcher since each one's
/// argument list is distinct) -- this helper exists because `SQLTables` is
/// also how `SQLGetInfo(SQL_ALL_CATALOGS/SQL_ALL_SCHEMAS/SQL_ALL_TABLE_TYPES)`-
/// style catalog enumeration requests collapse onto the same query.
pub fn catalog_query_for(
    catalog: Option<&str>,
    schema: Option<&str>,
    table: Option<&str>,
    table_type: Option<&str>,
) -> CatalogQuery {
    CatalogQuery::Tables {
        catalog: catalog.map(String::from),
        schema: schema.map(String::from),
        table: table.map(String::from),
        table_type: table_type.map(String::from),
    }
}

/// A catalog query executed against a [`crate::wire::WireSession`]. Unlike
/// [`crate::query::Query`], the full result set is materialized up front --
/// catalog shapes are schema metadata, not data, so there's no cursor to
/// page through on the wire side, only the row-array batching ODBC expects
/// out of `SQLFetch`.
pub struct CatalogStatement {
    schema: Vec<ColumnMetadata>,
    remaining: Vec<Row>,
    current: RowSet,
}

impl CatalogStatement {
    pub(crate) fn execute(session: &SharedSession, query: &CatalogQuery) -> Result<Self> {
        let result = session.borrow_mut().catalog_query(query)?;
        Ok(CatalogStatement {
            schema: query.schema(),
            remaining: result.rows,
            current: RowSet::default(),
        })
    }

    /// Builds a catalog statement from rows that are already in hand --
    /// `SQLGetTypeInfo`'s answer is this driver's own fixed type table, not
    /// something a round trip to the wire session would add anything to.
    pub(crate) fn from_rows(schema: Vec<ColumnMetadata>, rows: Vec<Row>) -> Self {
        CatalogStatement {
            schema,
            remaining: rows,
            current: RowSet::default(),
        }
    }
}

impl Statement for CatalogStatement {
    fn columns(&self) -> &[ColumnMetadata] {
        &self.schema
    }

    fn fetch(&mut self, row_array_size: usize) -> Result<RowSet> {
        let take = row_array_size.min(self.remaining.len());
        let rows: Vec<Row> = self.remaining.drain(..take).collect();
        let done = self.remaining.is_empty();
        self.current = RowSet { rows, done };
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

    #[test]
    fn tables_schema_has_five_columns() {
        let q = catalog_query_for(None, None, None, None);
        assert_eq!(q.schema().len(), 5);
    }

    #[test]
    fn columns_schema_matches_odbc_fixed_shape() {
        let q = CatalogQuery::Columns {
            catalog: None,
            schema: None,
            table: Some("t".to_string()),
            column: None,
        };
        let schema = q.schema();
        assert_eq!(schema.len(), 18);
        assert_eq!(schema[3].col_name, "COLUMN_NAME");
    }

    #[test]
    fn primary_keys_column_name_is_not_nullable() {
        let q = CatalogQuery::PrimaryKeys {
            catalog: None,
            schema: None,
            table: "t".to_string(),
        };
        let schema = q.schema();
        assert_eq!(schema[3].nullability, ColumnNullability::NoNulls);
    }
}

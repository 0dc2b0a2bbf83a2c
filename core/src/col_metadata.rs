//! Canonical result-set column metadata, as returned by `WireSession::prepare`
//! and consumed by `SQLDescribeCol`/`SQLColAttribute`. Reconciles two
//! near-duplicate definitions the source tree carried (one keyed on
//! `odbc_sys::Nullability`, one with a locally defined nullability enum) into
//! a single type owned by this crate.

use definitions::SqlDataType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnNullability {
    NoNulls,
    Nullable,
    Unknown,
}

impl From<ColumnNullability> for definitions::Nullability {
    fn from(n: ColumnNullability) -> Self {
        match n {
            ColumnNullability::NoNulls => definitions::Nullability::SQL_NO_NULLS,
            ColumnNullability::Nullable => definitions::Nullability::SQL_NULLABLE,
            ColumnNullability::Unknown => definitions::Nullability::SQL_NULLABLE_UNKNOWN,
        }
    }
}

/// One column of a result set. Field names follow `SQLColAttribute`'s
/// descriptor field names so the dispatcher's attribute lookup is a direct
/// field access rather than a remapping table.
#[derive(Debug, Clone)]
pub struct ColumnMetadata {
    pub base_col_name: String,
    pub base_table_name: String,
    pub catalog_name: String,
    pub display_size: i32,
    pub fixed_prec_scale: bool,
    pub label: String,
    pub length: u32,
    pub col_name: String,
    pub nullability: ColumnNullability,
    pub octet_length: i32,
    pub precision: u32,
    pub scale: i16,
    pub is_searchable: bool,
    pub table_name: String,
    pub type_name: String,
    pub sql_type: SqlDataType,
    pub is_unsigned: bool,
    pub is_updatable: bool,
}

impl ColumnMetadata {
    /// Builds the metadata for an unqualified, unnamed scalar column -- the
    /// shape most catalog result-set columns and computed expression columns
    /// take.
    pub fn new_scalar(
        col_name: impl Into<String>,
        sql_type: SqlDataType,
        nullability: ColumnNullability,
    ) -> Self {
        let col_name = col_name.into();
        let (precision, display_size, octet_length, type_name, is_unsigned) =
            column_size_defaults(sql_type);
        ColumnMetadata {
            base_col_name: col_name.clone(),
            base_table_name: String::new(),
            catalog_name: String::new(),
            display_size,
            fixed_prec_scale: false,
            label: col_name.clone(),
            length: precision,
            col_name,
            nullability,
            octet_length,
            precision,
            scale: 0,
            is_searchable: true,
            table_name: String::new(),
            type_name: type_name.to_string(),
            sql_type,
            is_unsigned,
            is_updatable: false,
        }
    }
}

fn column_size_defaults(sql_type: SqlDataType) -> (u32, i32, i32, &'static str, bool) {
    use SqlDataType::*;
    match sql_type {
        SQL_INTEGER => (10, 11, 4, "integer", false),
        SQL_BIGINT => (19, 20, 8, "bigint", false),
        SQL_SMALLINT => (5, 6, 2, "smallint", false),
        SQL_DOUBLE | SQL_FLOAT => (15, 24, 8, "double", false),
        SQL_REAL => (7, 14, 4, "real", false),
        SQL_BIT => (1, 1, 1, "boolean", false),
        SQL_TYPE_DATE => (10, 10, 6, "date", false),
        SQL_TYPE_TIME => (8, 8, 6, "time", false),
        SQL_TYPE_TIMESTAMP => (26, 26, 16, "timestamp", false),
        SQL_NUMERIC | SQL_DECIMAL => (34, 36, 16, "numeric", false),
        SQL_WVARCHAR | SQL_VARCHAR => (767, 767, 767 * 2, "varchar", false),
        SQL_WLONGVARCHAR | SQL_LONGVARCHAR => (0xFF_FFFF, 0xFF_FFFF, 0xFF_FFFF * 2, "text", false),
        SQL_VARBINARY | SQL_BINARY => (767, 767, 767, "varbinary", false),
        SQL_LONGVARBINARY => (0xFF_FFFF, 0xFF_FFFF, 0xFF_FFFF, "blob", false),
        SQL_GUID => (36, 36, 16, "guid", false),
        _ => (0, 0, 0, "unknown", false),
    }
}

#[cfg(test)]
mod unit {
    use super::*;

    #[test]
    fn scalar_column_defaults_label_to_name() {
        let col = ColumnMetadata::new_scalar(
            "TABLE_NAME",
            SqlDataType::SQL_VARCHAR,
            ColumnNullability::NoNulls,
        );
        assert_eq!(col.label, "TABLE_NAME");
        assert_eq!(col.type_name, "varchar");
        assert_eq!(col.octet_length, 767 * 2);
    }

    #[test]
    fn integer_column_has_fixed_precision() {
        let col = ColumnMetadata::new_scalar(
            "count",
            SqlDataType::SQL_INTEGER,
            ColumnNullability::Nullable,
        );
        assert_eq!(col.precision, 10);
        assert_eq!(col.octet_length, 4);
        assert_eq!(col.nullability, ColumnNullability::Nullable);
    }

    #[test]
    fn nullability_converts_to_definitions_enum() {
        let n: definitions::Nullability = ColumnNullability::Unknown.into();
        assert_eq!(n, definitions::Nullability::SQL_NULLABLE_UNKNOWN);
    }
}

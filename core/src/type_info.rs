//! The fixed `SQLGetTypeInfo` result set: one row per SQL data type this
//! driver supports, in the 19-column shape ODBC mandates. Generalizes
//! `MongoTypesInfo`'s `DATA_TYPES`/`TYPES_INFO_METADATA` pair (built from
//! BSON type descriptors) to a small static table of this driver's own
//! `SqlDataType` variants.

use crate::col_metadata::{ColumnMetadata, ColumnNullability};
use crate::value::SqlValue;
use crate::wire::Row;
use definitions::SqlDataType;

struct TypeEntry {
    sql_type: SqlDataType,
    type_name: &'static str,
    precision: Option<i32>,
    scale: Option<i16>,
    searchable: bool,
    case_sensitive: bool,
    unsigned: bool,
    quoted_literal: bool,
}

const TYPES: &[TypeEntry] = &[
    TypeEntry {
        sql_type: SqlDataType::SQL_BIGINT,
        type_name: "bigint",
        precision: Some(19),
        scale: Some(0),
        searchable: true,
        case_sensitive: false,
        unsigned: false,
        quoted_literal: false,
    },
    TypeEntry {
        sql_type: SqlDataType::SQL_INTEGER,
        type_name: "integer",
        precision: Some(10),
        scale: Some(0),
        searchable: true,
        case_sensitive: false,
        unsigned: false,
        quoted_literal: false,
    },
    TypeEntry {
        sql_type: SqlDataType::SQL_SMALLINT,
        type_name: "smallint",
        precision: Some(5),
        scale: Some(0),
        searchable: true,
        case_sensitive: false,
        unsigned: false,
        quoted_literal: false,
    },
    TypeEntry {
        sql_type: SqlDataType::SQL_DOUBLE,
        type_name: "double",
        precision: Some(15),
        scale: None,
        searchable: true,
        case_sensitive: false,
        unsigned: false,
        quoted_literal: false,
    },
    TypeEntry {
        sql_type: SqlDataType::SQL_REAL,
        type_name: "real",
        precision: Some(7),
        scale: None,
        searchable: true,
        case_sensitive: false,
        unsigned: false,
        quoted_literal: false,
    },
    TypeEntry {
        sql_type: SqlDataType::SQL_NUMERIC,
        type_name: "numeric",
        precision: Some(34),
        scale: Some(17),
        searchable: true,
        case_sensitive: false,
        unsigned: false,
        quoted_literal: false,
    },
    TypeEntry {
        sql_type: SqlDataType::SQL_BIT,
        type_name: "boolean",
        precision: Some(1),
        scale: None,
        searchable: true,
        case_sensitive: false,
        unsigned: false,
        quoted_literal: false,
    },
    TypeEntry {
        sql_type: SqlDataType::SQL_WVARCHAR,
        type_name: "varchar",
        precision: Some(767),
        scale: None,
        searchable: true,
        case_sensitive: true,
        unsigned: false,
        quoted_literal: true,
    },
    TypeEntry {
        sql_type: SqlDataType::SQL_WLONGVARCHAR,
        type_name: "text",
        precision: Some(0xFF_FFFF),
        scale: None,
        searchable: true,
        case_sensitive: true,
        unsigned: false,
        quoted_literal: true,
    },
    TypeEntry {
        sql_type: SqlDataType::SQL_VARBINARY,
        type_name: "varbinary",
        precision: Some(767),
        scale: None,
        searchable: false,
        case_sensitive: false,
        unsigned: false,
        quoted_literal: false,
    },
    TypeEntry {
        sql_type: SqlDataType::SQL_LONGVARBINARY,
        type_name: "blob",
        precision: Some(0xFF_FFFF),
        scale: None,
        searchable: false,
        case_sensitive: false,
        unsigned: false,
        quoted_literal: false,
    },
    TypeEntry {
        sql_type: SqlDataType::SQL_TYPE_DATE,
        type_name: "date",
        precision: Some(10),
        scale: None,
        searchable: true,
        case_sensitive: false,
        unsigned: false,
        quoted_literal: true,
    },
    TypeEntry {
        sql_type: SqlDataType::SQL_TYPE_TIME,
        type_name: "time",
        precision: Some(8),
        scale: None,
        searchable: true,
        case_sensitive: false,
        unsigned: false,
        quoted_literal: true,
    },
    TypeEntry {
        sql_type: SqlDataType::SQL_TYPE_TIMESTAMP,
        type_name: "timestamp",
        precision: Some(26),
        scale: Some(3),
        searchable: true,
        case_sensitive: false,
        unsigned: false,
        quoted_literal: true,
    },
    TypeEntry {
        sql_type: SqlDataType::SQL_GUID,
        type_name: "guid",
        precision: Some(36),
        scale: None,
        searchable: true,
        case_sensitive: false,
        unsigned: false,
        quoted_literal: true,
    },
];

/// Column metadata for `SQLGetTypeInfo`'s fixed result set, in ODBC's
/// mandated column order.
pub fn type_info_metadata() -> Vec<ColumnMetadata> {
    use SqlDataType::*;
    [
        ("TYPE_NAME", SQL_WVARCHAR, ColumnNullability::NoNulls),
        ("DATA_TYPE", SQL_SMALLINT, ColumnNullability::NoNulls),
        ("COLUMN_SIZE", SQL_INTEGER, ColumnNullability::Nullable),
        ("LITERAL_PREFIX", SQL_WVARCHAR, ColumnNullability::Nullable),
        ("LITERAL_SUFFIX", SQL_WVARCHAR, ColumnNullability::Nullable),
        ("CREATE_PARAMS", SQL_WVARCHAR, ColumnNullability::Nullable),
        ("NULLABLE", SQL_SMALLINT, ColumnNullability::NoNulls),
        ("CASE_SENSITIVE", SQL_SMALLINT, ColumnNullability::NoNulls),
        ("SEARCHABLE", SQL_SMALLINT, ColumnNullability::NoNulls),
        (
            "UNSIGNED_ATTRIBUTE",
            SQL_SMALLINT,
            ColumnNullability::Nullable,
        ),
        ("FIXED_PREC_SCALE", SQL_SMALLINT, ColumnNullability::NoNulls),
        (
            "AUTO_UNIQUE_VALUE",
            SQL_SMALLINT,
            ColumnNullability::Nullable,
        ),
        (
            "LOCAL_TYPE_NAME",
            SQL_WVARCHAR,
            ColumnNullability::Nullable,
        ),
        ("MINIMUM_SCALE", SQL_SMALLINT, ColumnNullability::Nullable),
        ("MAXIMUM_SCALE", SQL_SMALLINT, ColumnNullability::Nullable),
        ("SQL_DATA_TYPE", SQL_SMALLINT, ColumnNullability::NoNulls),
        (
            "SQL_DATETIME_SUB",
            SQL_SMALLINT,
            ColumnNullability::Nullable,
        ),
        ("NUM_PREC_RADIX", SQL_INTEGER, ColumnNullability::Nullable),
        (
            "INTERVAL_PRECISION",
            SQL_SMALLINT,
            ColumnNullability::Nullable,
        ),
    ]
    .into_iter()
    .map(|(name, ty, nullability)| ColumnMetadata::new_scalar(name, ty, nullability))
    .collect()
}

/// Rows for `SQLGetTypeInfo`, filtered to `filter` when it is
/// `Some(_)` (anything but `SQL_ALL_TYPES`), in the same 19-column order as
/// [`type_info_metadata`].
pub fn type_info_rows(filter: Option<SqlDataType>) -> Vec<Row> {
    TYPES
        .iter()
        .filter(|t| filter.is_none() || filter == Some(t.sql_type))
        .map(|t| {
            let quote = t.quoted_literal.then(|| SqlValue::String("'".to_string()));
            vec![
                Some(SqlValue::String(t.type_name.to_string())),
                Some(SqlValue::Integer(t.sql_type as i32)),
                t.precision.map(SqlValue::Integer),
                quote.clone(),
                quote,
                None,
                Some(SqlValue::Integer(
                    definitions::Nullability::SQL_NULLABLE_UNKNOWN as i32,
                )),
                Some(SqlValue::Integer(t.case_sensitive as i32)),
                Some(SqlValue::Integer(if t.searchable { 3 } else { 0 })),
                Some(SqlValue::Integer(t.unsigned as i32)),
                Some(SqlValue::Integer(
                    (t.scale.is_some() && t.precision.is_some()) as i32,
                )),
                None,
                Some(SqlValue::String(t.type_name.to_string())),
                t.scale.map(|s| SqlValue::Integer(i32::from(s))),
                t.scale.map(|s| SqlValue::Integer(i32::from(s))),
                Some(SqlValue::Integer(t.sql_type as i32)),
                None,
                Some(SqlValue::Integer(10)),
                None,
            ]
        })
        .collect()
}

#[cfg(test)]
mod unit {
    use super::*;

    #[test]
    fn metadata_has_nineteen_columns() {
        assert_eq!(type_info_metadata().len(), 19);
    }

    #[test]
    fn unfiltered_rows_cover_every_type() {
        assert_eq!(type_info_rows(None).len(), TYPES.len());
    }

    #[test]
    fn filtered_rows_match_a_single_type() {
        let rows = type_info_rows(Some(SqlDataType::SQL_INTEGER));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], Some(SqlValue::String("integer".to_string())));
    }
}

use crate::column::{ColumnDescriptor, ColumnKind};
use crate::error::DbError;
use crate::table::TableName;

/// Fallback name for the engine's numeric-to-text formatter when a backend
/// does not override it.
pub const DEFAULT_CAST_FUNCTION: &str = "CAST_TO_TEXT";

/// The metadata side of a database: reports a table's column names and kinds
/// without touching row data.
pub trait Catalog {
    /// all columns of the given kind, in catalog order
    fn list_columns(
        &mut self,
        table: &TableName,
        kind: ColumnKind,
    ) -> Result<Vec<ColumnDescriptor>, DbError>;
}

/// The execution side of a database: takes one generated statement and runs it.
pub trait Database {
    fn execute_sql(&mut self, sql: &str) -> Result<(), DbError>;

    /// the engine's best available "format number as display string" function
    fn cast_function(&self) -> &str {
        DEFAULT_CAST_FUNCTION
    }
}

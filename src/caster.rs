use crate::column::ColumnKind;
use crate::database::{Catalog, Database};
use crate::error::DbError;
use crate::statement;
use crate::table::TableName;
use log::debug;

/// Thin driver over one database object serving both collaborator roles:
/// two metadata lookups, one pure projection build, one statement execution.
pub struct TableCaster<D>(pub D);

impl<D> TableCaster<D>
where
    D: Catalog + Database,
{
    pub fn new(db: D) -> Self {
        TableCaster(db)
    }

    pub fn db(&mut self) -> &mut D {
        &mut self.0
    }

    /// The statement `cast_table` would execute, without executing it.
    ///
    /// The catalog is asked once per kind and the merged list places
    /// character columns before numeric ones, each group in catalog order.
    pub fn cast_statement(&mut self, table: &TableName) -> Result<String, DbError> {
        let mut columns = self.0.list_columns(table, ColumnKind::Textual)?;
        columns.extend(self.0.list_columns(table, ColumnKind::Numeric)?);
        let sql = statement::cast_select(table, &columns, self.0.cast_function())?;
        Ok(sql)
    }

    /// Materialize `<table>_casted` and return its name.
    pub fn cast_table(&mut self, table: &TableName) -> Result<TableName, DbError> {
        let sql = self.cast_statement(table)?;
        debug!("executing: {}", sql);
        self.0.execute_sql(&sql)?;
        Ok(table.casted())
    }
}

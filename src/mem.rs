//! In-memory backend: a schema map on the catalog side and a statement log
//! on the execution side. Understands only the casting statement shape this
//! crate emits, enough for the derived table to show up in later lookups.

use std::collections::BTreeMap;

use log::info;

use crate::column::{ColumnDescriptor, ColumnKind, ColumnName};
use crate::database::{Catalog, Database};
use crate::error::DbError;
use crate::table::TableName;

#[derive(Debug, Default)]
pub struct MemDb {
    tables: BTreeMap<String, Vec<ColumnDescriptor>>,
    executed: Vec<String>,
}

impl MemDb {
    pub fn new() -> Self {
        MemDb::default()
    }

    pub fn register_table(&mut self, table: &TableName, columns: Vec<ColumnDescriptor>) {
        self.tables.insert(table.complete_name(), columns);
    }

    /// every statement handed to `execute_sql`, in order
    pub fn executed_sql(&self) -> &[String] {
        &self.executed
    }

    /// derive and register the target table of a `CREATE TABLE .. AS SELECT`
    /// from its source's descriptors, mirroring what the statement selects:
    /// character columns first, then each numeric column as `<name>_char` text
    fn materialize(&mut self, sql: &str) -> Result<(), DbError> {
        let rest = match sql.strip_prefix("CREATE TABLE ") {
            Some(rest) => rest,
            None => return Ok(()),
        };
        let target = match rest.find(" AS SELECT ") {
            Some(end) => &rest[..end],
            None => return Ok(()),
        };
        let source = match rest.rfind(" FROM ") {
            Some(start) => &rest[start + " FROM ".len()..],
            None => return Ok(()),
        };
        let source_columns = match self.tables.get(source) {
            Some(columns) => columns,
            None => return Err(DbError::NoSuchTable(source.to_owned())),
        };
        let mut derived: Vec<ColumnDescriptor> = source_columns
            .iter()
            .filter(|column| column.kind == ColumnKind::Textual)
            .cloned()
            .collect();
        derived.extend(
            source_columns
                .iter()
                .filter(|column| column.is_numeric())
                .map(|column| ColumnDescriptor {
                    name: ColumnName::from(&format!("{}_char", column.name.name)),
                    kind: ColumnKind::Textual,
                }),
        );
        info!("materialized {} with {} columns", target, derived.len());
        self.tables.insert(target.to_owned(), derived);
        Ok(())
    }
}

impl Catalog for MemDb {
    fn list_columns(
        &mut self,
        table: &TableName,
        kind: ColumnKind,
    ) -> Result<Vec<ColumnDescriptor>, DbError> {
        let columns = self
            .tables
            .get(&table.complete_name())
            .ok_or_else(|| DbError::NoSuchTable(table.complete_name()))?;
        Ok(columns
            .iter()
            .filter(|column| column.kind == kind)
            .cloned()
            .collect())
    }
}

impl Database for MemDb {
    fn execute_sql(&mut self, sql: &str) -> Result<(), DbError> {
        self.materialize(sql)?;
        self.executed.push(sql.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::column::ColumnKind::*;

    #[test]
    fn list_columns_filters_by_kind() {
        let mut db = MemDb::new();
        db.register_table(
            &TableName::from("t"),
            vec![
                ColumnDescriptor::new("a", Numeric),
                ColumnDescriptor::new("b", Textual),
            ],
        );
        let numeric = db.list_columns(&TableName::from("t"), Numeric).unwrap();
        assert_eq!(numeric, vec![ColumnDescriptor::new("a", Numeric)]);
        let textual = db.list_columns(&TableName::from("t"), Textual).unwrap();
        assert_eq!(textual, vec![ColumnDescriptor::new("b", Textual)]);
    }

    #[test]
    fn unknown_table_is_reported_by_complete_name() {
        let mut db = MemDb::new();
        let err = db
            .list_columns(&TableName::from("work.gone"), Numeric)
            .unwrap_err();
        match err {
            DbError::NoSuchTable(name) => assert_eq!(name, "work.gone"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn non_casting_statements_are_only_logged() {
        let mut db = MemDb::new();
        db.execute_sql("DROP TABLE t").unwrap();
        assert_eq!(db.executed_sql(), &["DROP TABLE t".to_string()]);
        assert!(db.tables.is_empty());
    }

    #[test]
    fn casting_statement_registers_the_target() {
        let mut db = MemDb::new();
        db.register_table(
            &TableName::from("t"),
            vec![
                ColumnDescriptor::new("n", Numeric),
                ColumnDescriptor::new("c", Textual),
            ],
        );
        db.execute_sql("CREATE TABLE t_casted AS SELECT c, CAST_TO_TEXT(n) AS n_char FROM t")
            .unwrap();
        let columns = db.list_columns(&TableName::from("t_casted"), Textual).unwrap();
        assert_eq!(
            columns,
            vec![
                ColumnDescriptor::new("c", Textual),
                ColumnDescriptor::new("n_char", Textual),
            ]
        );
    }
}

//! Derive a `<table>_casted` table from a table's column metadata: numeric
//! columns are cast to formatted text aliased `<name>_char`, character
//! columns pass through unchanged. The catalog lookup and the statement
//! execution sit behind traits, the projection itself is pure.
//!
//! ```rust
//! use tablecast::{ColumnDescriptor, ColumnKind, MemDb, TableCaster, TableName};
//!
//! let mut db = MemDb::new();
//! let table = TableName::from("work.x");
//! db.register_table(
//!     &table,
//!     vec![
//!         ColumnDescriptor::new("id", ColumnKind::Numeric),
//!         ColumnDescriptor::new("label", ColumnKind::Textual),
//!     ],
//! );
//!
//! let mut caster = TableCaster::new(db);
//! let sql = caster.cast_statement(&table).unwrap();
//! assert_eq!(
//!     sql,
//!     "CREATE TABLE work.x_casted AS SELECT label, CAST_TO_TEXT(id) AS id_char FROM work.x"
//! );
//!
//! let casted = caster.cast_table(&table).unwrap();
//! assert_eq!(casted.complete_name(), "work.x_casted");
//! ```

pub mod column;
pub mod error;
pub mod projection;
pub mod statement;
pub mod table;
mod caster;
mod database;
mod mem;

pub use caster::TableCaster;
pub use column::{ColumnDescriptor, ColumnKind, ColumnName};
pub use database::{Catalog, Database, DEFAULT_CAST_FUNCTION};
pub use error::{DbError, PlatformError, ProjectionError};
pub use mem::MemDb;
pub use projection::{build_projection, ProjectionExpression};
pub use statement::cast_select;
pub use table::TableName;

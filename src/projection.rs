//! Build the projection list of the casting statement from column metadata.
//! Pure computation over descriptors, no catalog access.

use crate::column::{ColumnDescriptor, ColumnKind, ColumnName};
use crate::error::ProjectionError;
use std::collections::HashSet;

/// One output column of the generated SELECT clause.
#[derive(Debug, PartialEq, Clone)]
pub enum ProjectionExpression {
    /// character column, emitted verbatim and implicitly aliased to itself
    PassThrough(ColumnName),
    /// numeric column formatted to text and renamed `<name>_char`
    CastToText { column: ColumnName, alias: String },
}

impl ProjectionExpression {
    /// render to SQL text, `cast_function` being the engine's
    /// numeric-to-text formatter
    pub fn to_sql(&self, cast_function: &str) -> String {
        match *self {
            ProjectionExpression::PassThrough(ref column) => column.name.to_owned(),
            ProjectionExpression::CastToText {
                ref column,
                ref alias,
            } => format!("{}({}) AS {}", cast_function, column.name, alias),
        }
    }
}

/// Build one projection expression per descriptor, preserving input order.
/// Identifiers are emitted verbatim, never quoted nor escaped.
pub fn build_projection(
    columns: &[ColumnDescriptor],
) -> Result<Vec<ProjectionExpression>, ProjectionError> {
    if columns.is_empty() {
        return Err(ProjectionError::EmptyColumnList);
    }
    let mut seen: HashSet<&str> = HashSet::with_capacity(columns.len());
    for column in columns {
        if !seen.insert(column.name.name.as_str()) {
            return Err(ProjectionError::DuplicateColumn(column.name.name.to_owned()));
        }
    }
    let expressions = columns
        .iter()
        .map(|column| match column.kind {
            ColumnKind::Textual => ProjectionExpression::PassThrough(column.name.clone()),
            ColumnKind::Numeric => ProjectionExpression::CastToText {
                column: column.name.clone(),
                alias: format!("{}_char", column.name.name),
            },
        })
        .collect();
    Ok(expressions)
}

use crate::column::ColumnDescriptor;
use crate::error::ProjectionError;
use crate::projection::build_projection;
use crate::table::TableName;

/// Build the complete casting statement:
/// `CREATE TABLE <table>_casted AS SELECT <projections> FROM <table>`.
pub fn cast_select(
    table: &TableName,
    columns: &[ColumnDescriptor],
    cast_function: &str,
) -> Result<String, ProjectionError> {
    let expressions = build_projection(columns)?;
    let enumerated_columns = expressions
        .iter()
        .map(|expression| expression.to_sql(cast_function))
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!(
        "CREATE TABLE {} AS SELECT {} FROM {}",
        table.casted().complete_name(),
        enumerated_columns,
        table.complete_name()
    ))
}

use thiserror::Error;

/// Failure of the pure projection step, before any SQL is built.
#[derive(Debug, Error, PartialEq)]
pub enum ProjectionError {
    #[error("No columns to project, a SELECT list can not be empty")]
    EmptyColumnList,
    #[error("Duplicate column {0}, its alias would be ambiguous")]
    DuplicateColumn(String),
}

/// An error surfaced unchanged from a concrete catalog or execution engine.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct PlatformError(#[from] pub Box<dyn std::error::Error + Send + Sync>);

#[derive(Debug, Error)]
pub enum DbError {
    #[error("{0}")]
    ProjectionError(#[from] ProjectionError),
    #[error("{0}")]
    PlatformError(#[from] PlatformError),
    #[error("No such table: {0}")]
    NoSuchTable(String),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn platform_error_carries_the_source_unchanged() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "connection refused");
        let err: DbError = PlatformError::from(Box::from(io)).into();
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn projection_error_converts_to_db_error() {
        let err: DbError = ProjectionError::EmptyColumnList.into();
        match err {
            DbError::ProjectionError(ProjectionError::EmptyColumnList) => (),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}

use sea_orm::DbErr;
use thiserror::Error;

/// Shared service result type.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the employee service. The two not-found variants keep
/// the legacy message texts the HTTP layer exposes verbatim.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Employee not found with ID: {0}")]
    NotFound(i64),
    #[error("Cannot delete. Employee not found with ID: {0}")]
    CannotDelete(i64),
    #[error("database error: {0}")]
    Db(#[from] DbErr),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_messages_name_the_id() {
        assert_eq!(
            ApiError::NotFound(7).to_string(),
            "Employee not found with ID: 7"
        );
        assert_eq!(
            ApiError::CannotDelete(7).to_string(),
            "Cannot delete. Employee not found with ID: 7"
        );
    }
}

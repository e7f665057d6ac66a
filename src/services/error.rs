use diesel::result::Error as DieselError;
use validator::ValidationErrors;

use repos::error::RepoError;

/// Service layer Error
#[derive(Debug)]
pub enum ServiceError {
    NotFound,
    Rollback,
    Validate(ValidationErrors),
    Parse(String),
    Database(String),
    Connection(String),
    Unknown(String),
}

impl From<RepoError> for ServiceError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => ServiceError::NotFound,
            RepoError::Rollback => ServiceError::Rollback,
            RepoError::ConstraintViolation(msg) => ServiceError::Database(format!("Constraint violation: {}", msg)),
            RepoError::MismatchedType(msg) => ServiceError::Database(format!("Mismatched type: {}", msg)),
            RepoError::Connection(msg) => ServiceError::Database(format!("Connection error: {}", msg)),
            RepoError::Unknown(msg) => ServiceError::Database(format!("Unknown: {}", msg)),
        }
    }
}

impl From<DieselError> for ServiceError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => ServiceError::NotFound,
            _ => ServiceError::Database("Database error".into()),
        }
    }
}

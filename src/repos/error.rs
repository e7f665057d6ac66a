use diesel::result::Error as DieselError;

/// Repos layer Error
#[derive(Debug)]
pub enum RepoError {
    NotFound,
    Rollback,
    ConstraintViolation(String),
    MismatchedType(String),
    Connection(String),
    Unknown(String),
}

impl From<DieselError> for RepoError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::InvalidCString(e) => RepoError::Unknown(format!("{}", e)),
            DieselError::DatabaseError(kind, info) => RepoError::ConstraintViolation(format!("{:?}: {:?}", kind, info)),
            DieselError::NotFound => RepoError::NotFound,
            DieselError::QueryBuilderError(e) => RepoError::Unknown(format!("{}", e)),
            DieselError::SerializationError(e) => RepoError::MismatchedType(format!("{}", e)),
            DieselError::DeserializationError(e) => RepoError::MismatchedType(format!("{}", e)),
            DieselError::RollbackTransaction => RepoError::Rollback,
            _ => RepoError::Unknown("Unknown diesel error".to_string()),
        }
    }
}

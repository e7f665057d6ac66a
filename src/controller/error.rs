use failure::Error as FailureError;
use hyper::StatusCode;
use serde_json;
use validator::ValidationErrors;

use services::error::ServiceError;

#[derive(Debug, Fail)]
pub enum ControllerError {
    #[fail(display = "Not found")]
    NotFound,
    #[fail(display = "Parse error")]
    Parse(String),
    #[fail(display = "Validation error")]
    Validate(ValidationErrors),
    #[fail(display = "Internal server error")]
    InternalServerError(FailureError),
}

impl From<ServiceError> for ControllerError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound => ControllerError::NotFound,
            ServiceError::Rollback => ControllerError::InternalServerError(format_err!("Transaction rolled back")),
            ServiceError::Validate(errors) => ControllerError::Validate(errors),
            ServiceError::Parse(msg) => ControllerError::Parse(msg),
            ServiceError::Database(msg) => ControllerError::InternalServerError(format_err!("{}", msg)),
            ServiceError::Connection(msg) => ControllerError::InternalServerError(format_err!("{}", msg)),
            ServiceError::Unknown(msg) => ControllerError::InternalServerError(format_err!("{}", msg)),
        }
    }
}

impl From<serde_json::error::Error> for ControllerError {
    fn from(e: serde_json::error::Error) -> Self {
        ControllerError::InternalServerError(e.into())
    }
}

impl ControllerError {
    /// Converts `Error` to HTTP Status Code
    pub fn code(&self) -> StatusCode {
        match *self {
            ControllerError::NotFound => StatusCode::NotFound,
            ControllerError::Parse(_) | ControllerError::Validate(_) => StatusCode::BadRequest,
            ControllerError::InternalServerError(_) => StatusCode::InternalServerError,
        }
    }

    /// Converts `Error` to string
    pub fn message(&self) -> String {
        match *self {
            ControllerError::NotFound => "Not found".to_string(),
            ControllerError::Parse(_) => "Bad request".to_string(),
            ControllerError::Validate(ref valid_err) => match serde_json::to_string(valid_err) {
                Ok(res) => res,
                Err(_) => "Bad request".to_string(),
            },
            ControllerError::InternalServerError(_) => "Internal server error".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorMessage {
    pub code: u16,
    pub message: String,
}

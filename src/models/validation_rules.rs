use std::borrow::Cow;
use std::collections::HashMap;

use regex::Regex;
use validator::ValidationError;

pub fn validate_field_id(field_id: &str) -> Result<(), ValidationError> {
    lazy_static! {
        static ref FIELD_ID_VALIDATION_RE: Regex = Regex::new(r"^[a-z0-9][a-z0-9_-]*$").unwrap();
    }

    if FIELD_ID_VALIDATION_RE.is_match(field_id) {
        Ok(())
    } else {
        Err(ValidationError {
            code: Cow::from("field_id"),
            message: Some(Cow::from("Field id must be a lowercase slug")),
            params: HashMap::new(),
        })
    }
}

use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

use crate::shared::validation::{violations_of, FieldViolation};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorRto {
  pub message: String,
  pub violations: Vec<FieldViolation>,
}

impl From<ValidationErrors> for ValidationErrorRto {
  fn from(errors: ValidationErrors) -> Self {
    Self {
      message: String::from("Validation failed"),
      violations: violations_of(&errors),
    }
  }
}

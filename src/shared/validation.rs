use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
  pub field: String,
  pub message: String,
}

pub fn violations_of(errors: &ValidationErrors) -> Vec<FieldViolation> {
  let mut violations: Vec<FieldViolation> = errors
    .field_errors()
    .into_iter()
    .flat_map(|(field, field_errors)| {
      let field = camel_case(&field.to_string());
      field_errors.iter().map(move |error| FieldViolation {
        field: field.clone(),
        message: error
          .message
          .as_ref()
          .map(|message| message.to_string())
          .unwrap_or_else(|| error.code.to_string()),
      })
    })
    .collect();
  violations.sort_by(|a, b| a.field.cmp(&b.field));
  violations
}

/// `ride_option` -> `rideOption`. Already camelCased keys pass through.
pub fn camel_case(field: &str) -> String {
  let mut camel = String::with_capacity(field.len());
  let mut upper_next = false;
  for c in field.chars() {
    if c == '_' {
      upper_next = !camel.is_empty();
    } else if upper_next {
      camel.extend(c.to_uppercase());
      upper_next = false;
    } else {
      camel.push(c);
    }
  }
  camel
}

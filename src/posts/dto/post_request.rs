use serde::Deserialize;
use validator::ValidationError;
use validator_derive::Validate;

/// Test-drive request as received from the client. Values are stored
/// verbatim; the constraints only run when `Validate::validate` is called.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
  #[validate(
    required(message = "car name은 필수입니다!"),
    custom(function = "not_blank", message = "car name은 필수입니다!")
  )]
  car_name: Option<String>,
  #[validate(
    required(message = "ride option은 필수입니다!"),
    custom(function = "not_blank", message = "ride option은 필수입니다!")
  )]
  ride_option: Option<String>,
  requirement: Option<String>,
}

impl PostRequest {
  // Deserialization is the only non-test constructor
  #[cfg_attr(not(test), allow(dead_code))]
  pub fn new(
    car_name: Option<String>,
    ride_option: Option<String>,
    requirement: Option<String>,
  ) -> Self {
    Self {
      car_name,
      ride_option,
      requirement,
    }
  }

  #[cfg_attr(not(test), allow(dead_code))]
  pub fn builder() -> PostRequestBuilder {
    PostRequestBuilder::default()
  }

  pub fn car_name(&self) -> Option<&str> {
    self.car_name.as_deref()
  }

  pub fn ride_option(&self) -> Option<&str> {
    self.ride_option.as_deref()
  }

  pub fn requirement(&self) -> Option<&str> {
    self.requirement.as_deref()
  }

  pub fn into_parts(self) -> (Option<String>, Option<String>, Option<String>) {
    (self.car_name, self.ride_option, self.requirement)
  }
}

#[cfg_attr(not(test), allow(dead_code))]
#[derive(Debug, Default, Clone)]
pub struct PostRequestBuilder {
  car_name: Option<String>,
  ride_option: Option<String>,
  requirement: Option<String>,
}

#[cfg_attr(not(test), allow(dead_code))]
impl PostRequestBuilder {
  pub fn car_name(mut self, car_name: impl Into<String>) -> Self {
    self.car_name = Some(car_name.into());
    self
  }

  pub fn ride_option(mut self, ride_option: impl Into<String>) -> Self {
    self.ride_option = Some(ride_option.into());
    self
  }

  pub fn requirement(mut self, requirement: impl Into<String>) -> Self {
    self.requirement = Some(requirement.into());
    self
  }

  pub fn build(self) -> PostRequest {
    PostRequest::new(self.car_name, self.ride_option, self.requirement)
  }
}

// Absent values are reported by `required`, this only sees present ones.
fn not_blank(value: &str) -> Result<(), ValidationError> {
  if value.trim().is_empty() {
    return Err(ValidationError::new("blank"));
  }
  Ok(())
}

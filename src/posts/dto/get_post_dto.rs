use serde::Deserialize;
use validator_derive::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct GetPostDto {
  #[validate(length(min = 1, max = 64, message = "Invalid post uuid"))]
  pub uuid: String,
}

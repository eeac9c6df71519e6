use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
  pub uuid: String,
  pub created_at: DateTime<Utc>,
  pub car_name: String,
  pub ride_option: String,
  pub requirement: Option<String>,
}

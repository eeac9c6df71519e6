use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPostRto {
  pub uuid: String,
  pub car_name: String,
  pub ride_option: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub requirement: Option<String>,
  pub created_at: DateTime<Utc>,
}

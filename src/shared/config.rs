use std::env;

use serde::{Deserialize, Serialize};

const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3001";
const DEFAULT_REQUESTS_PER_SECOND: u64 = 2;
const DEFAULT_BURST_SIZE: u32 = 5;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
  pub server_address: String,
  pub requests_per_second: u64,
  pub burst_size: u32,
}

impl Default for Config {
  fn default() -> Self {
    let server_address = env::var("SERVER_ADDRESS")
      .unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string());
    let requests_per_second =
      positive_var("RATE_LIMIT_PER_SECOND").unwrap_or(DEFAULT_REQUESTS_PER_SECOND);
    let burst_size =
      positive_var("RATE_LIMIT_BURST").unwrap_or(DEFAULT_BURST_SIZE);
    Self {
      server_address,
      requests_per_second,
      burst_size,
    }
  }
}

// Zero would make the rate limiter reject every request.
fn positive_var<T>(name: &str) -> Option<T>
where
  T: std::str::FromStr + PartialOrd + Default,
{
  env::var(name)
    .ok()
    .and_then(|value| value.trim().parse::<T>().ok())
    .filter(|value| *value > T::default())
}

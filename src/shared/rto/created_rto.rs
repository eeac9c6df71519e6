use serde::{Deserialize, Serialize};

use crate::posts::model::Post;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedRto {
  pub uuid: String,
}

impl From<&Post> for CreatedRto {
  fn from(post: &Post) -> Self {
    Self {
      uuid: post.uuid.clone(),
    }
  }
}

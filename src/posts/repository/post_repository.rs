use std::sync::RwLock;

use chrono::Utc;
use thiserror::Error;

use crate::posts::model::Post;

#[derive(Debug, Error)]
pub enum PostRepositoryError {
  #[error("Post already exists: {0}")]
  Duplicate(String),

  #[error("Post store lock poisoned")]
  LockPoisoned,
}

pub trait PostRepository {
  async fn find_one(&self, uuid: &str) -> Option<Post>;
  async fn create(
    &self,
    create_post: CreatePost,
  ) -> Result<Post, PostRepositoryError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePost {
  pub uuid: String,
  pub car_name: String,
  pub ride_option: String,
  pub requirement: Option<String>,
}

#[derive(Debug, Default)]
pub struct InMemoryPostRepository {
  posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

impl PostRepository for InMemoryPostRepository {
  async fn find_one(&self, uuid: &str) -> Option<Post> {
    let posts = self.posts.read().ok()?;
    posts.iter().find(|post| post.uuid == uuid).cloned()
  }

  async fn create(
    &self,
    create_post: CreatePost,
  ) -> Result<Post, PostRepositoryError> {
    let mut posts = self
      .posts
      .write()
      .map_err(|_| PostRepositoryError::LockPoisoned)?;
    if posts.iter().any(|post| post.uuid == create_post.uuid) {
      return Err(PostRepositoryError::Duplicate(create_post.uuid));
    }
    let post = Post {
      uuid: create_post.uuid,
      created_at: Utc::now(),
      car_name: create_post.car_name,
      ride_option: create_post.ride_option,
      requirement: create_post.requirement,
    };
    posts.push(post.clone());
    Ok(post)
  }
}

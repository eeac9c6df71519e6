pub mod dto;
pub mod model;
pub mod repository;
pub mod rto;

use actix_web::{http::header, web, HttpResponse, Responder};
use dto::get_post_dto::GetPostDto;
use dto::post_request::PostRequest;
use model::Post;
use repository::post_repository::{CreatePost, PostRepository, PostRepositoryError};
use rto::get_post_rto::GetPostRto;
use validator::{Validate, ValidationErrors};

use crate::{
  custom_nanoid,
  shared::{
    http_error::HttpError,
    rto::{created_rto::CreatedRto, validation_error_rto::ValidationErrorRto},
  },
  AppState,
};

pub async fn get_post<PR: PostRepository + 'static>(
  data: web::Data<AppState<PR>>,
  path: web::Path<GetPostDto>,
) -> impl Responder {
  if let Err(validation_errors) = path.validate() {
    return HttpResponse::BadRequest()
      .json(ValidationErrorRto::from(validation_errors));
  }
  data
    .post_repository
    .find_one(&path.uuid)
    .await
    .map(post_found)
    .unwrap_or_else(post_not_found)
}

fn post_found(post: Post) -> HttpResponse {
  HttpResponse::Ok()
    .content_type("application/json")
    .json(GetPostRto::from(post))
}

fn post_not_found() -> HttpResponse {
  HttpResponse::NotFound()
    .content_type("application/json")
    .json(HttpError::from("Post not found"))
}

pub async fn create_post<PR: PostRepository + 'static>(
  data: web::Data<AppState<PR>>,
  payload: web::Json<PostRequest>,
) -> impl Responder {
  let post_request = payload.into_inner();
  log::debug!(
    "Received post request (car {:?}, option {:?}, requirement {:?})",
    post_request.car_name(),
    post_request.ride_option(),
    post_request.requirement()
  );
  // Blank required fields never reach the repository
  let command = match CreatePost::try_from(post_request) {
    Ok(command) => command,
    Err(validation_errors) => {
      let rto = ValidationErrorRto::from(validation_errors);
      log::debug!("Rejected post request: {:?}", rto.violations);
      return HttpResponse::BadRequest().json(rto);
    }
  };
  data
    .post_repository
    .create(command)
    .await
    .map(post_created)
    .unwrap_or_else(failed_create_post)
}

fn post_created(post: Post) -> HttpResponse {
  log::info!("Created post {} for car {}", post.uuid, post.car_name);
  HttpResponse::Created()
    .content_type("application/json")
    .append_header((header::LOCATION, format!("/v1/posts/{}", post.uuid)))
    .json(CreatedRto::from(&post))
}

fn failed_create_post(error: PostRepositoryError) -> HttpResponse {
  log::warn!("Failed to create post: {}", error);
  HttpResponse::InternalServerError()
    .content_type("application/json")
    .json(HttpError::from("Failed to create post"))
}

impl TryFrom<PostRequest> for CreatePost {
  type Error = ValidationErrors;

  fn try_from(post_request: PostRequest) -> Result<Self, Self::Error> {
    post_request.validate()?;
    match post_request.into_parts() {
      (Some(car_name), Some(ride_option), requirement) => Ok(Self {
        uuid: custom_nanoid(),
        car_name,
        ride_option,
        requirement,
      }),
      // `validate` already reports absent required fields
      _ => Err(ValidationErrors::new()),
    }
  }
}

// Transform Post domain to RTO
impl From<Post> for GetPostRto {
  fn from(post: Post) -> Self {
    Self {
      uuid: post.uuid,
      car_name: post.car_name,
      ride_option: post.ride_option,
      requirement: post.requirement,
      created_at: post.created_at,
    }
  }
}

mod helpers;
mod posts;
mod shared;

use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{error, middleware::Logger, web, App, HttpResponse, HttpServer};
use helpers::custom_nanoid;
use posts::repository::post_repository::{InMemoryPostRepository, PostRepository};
use posts::{create_post, get_post};
use shared::config::Config;
use shared::http_error::HttpError;

// This struct represents state
struct AppState<PR: PostRepository> {
  post_repository: PR,
  config: Config,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  env_logger::Builder::from_env(
    env_logger::Env::default().default_filter_or("info"),
  )
  .init();

  let app_config = Config::default();
  let server_address = app_config.server_address.clone();
  log::info!("Listening on http://{}", server_address);

  // One store for every worker
  let app_state = web::Data::new(AppState {
    post_repository: InMemoryPostRepository::new(),
    config: app_config,
  });

  HttpServer::new(move || {
    let app_state = app_state.clone();
    App::new()
      .wrap(Logger::default())
      .configure(|cfg| config(cfg, app_state))
  })
  .bind(server_address)?
  .run()
  .await
}

// Function to initialize the App
fn config<PR: PostRepository + 'static>(
  config: &mut web::ServiceConfig,
  app_state: web::Data<AppState<PR>>,
) {
  // Per peer IP rate limit, sized from the environment
  let governor_config = GovernorConfigBuilder::default()
    .requests_per_second(app_state.config.requests_per_second)
    .burst_size(app_state.config.burst_size)
    .finish()
    .unwrap_or_default();

  let json_config = web::JsonConfig::default().error_handler(|err, _req| {
    let body = HttpError::from(err.to_string());
    error::InternalError::from_response(err, HttpResponse::BadRequest().json(body))
      .into()
  });

  config.app_data(app_state).app_data(json_config).service(
    web::scope("/v1").service(
      web::scope("/posts")
        .wrap(Governor::new(&governor_config))
        .route("/{uuid}", web::get().to(get_post::<PR>))
        .route("", web::post().to(create_post::<PR>)),
    ),
  );
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::{
    http::{header, header::HeaderValue, StatusCode},
    test,
  };
  use crate::helpers::tests::test_config;
  use crate::posts::rto::get_post_rto::GetPostRto;
  use crate::shared::rto::{
    created_rto::CreatedRto, validation_error_rto::ValidationErrorRto,
  };
  use crate::shared::validation::FieldViolation;
  use std::{net::SocketAddr, str::FromStr};

  fn in_memory_state() -> web::Data<AppState<InMemoryPostRepository>> {
    web::Data::new(AppState {
      post_repository: InMemoryPostRepository::new(),
      config: test_config(),
    })
  }

  fn peer_addr() -> SocketAddr {
    SocketAddr::from_str("127.0.0.1:12345").unwrap()
  }

  #[actix_rt::test]
  async fn test_create_and_get_post_in_memory() {
    let app_state = in_memory_state();
    let app = test::init_service(
      App::new().configure(|cfg| config(cfg, app_state)),
    )
    .await;

    // 1) Create post
    let create_req = test::TestRequest::post()
      .uri("/v1/posts")
      .peer_addr(peer_addr())
      .append_header((
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
      ))
      .set_json(serde_json::json!({
          "carName": "Sonata",
          "rideOption": "comfort",
          "requirement": ""
      }))
      .to_request();

    let create_resp = test::call_service(&app, create_req).await;
    assert_eq!(create_resp.status(), StatusCode::CREATED, "Create post failed");
    let location = create_resp
      .headers()
      .get(header::LOCATION)
      .and_then(|value| value.to_str().ok())
      .map(String::from)
      .expect("Location header should be set");

    let created_rto: CreatedRto = test::read_body_json(create_resp).await;
    assert_eq!(location, format!("/v1/posts/{}", created_rto.uuid));

    // 2) Get post
    let get_req = test::TestRequest::get()
      .uri(&location)
      .peer_addr(peer_addr())
      .to_request();

    let get_resp = test::call_service(&app, get_req).await;
    assert!(get_resp.status().is_success(), "Get post failed");

    let get_post_rto: GetPostRto = test::read_body_json(get_resp).await;
    assert_eq!(get_post_rto.uuid, created_rto.uuid);
    assert_eq!(get_post_rto.car_name, "Sonata");
    assert_eq!(get_post_rto.ride_option, "comfort");
    assert_eq!(get_post_rto.requirement, Some(String::new()));
  }

  #[actix_rt::test]
  async fn test_create_post_rejects_whitespace_car_name() {
    let app_state = in_memory_state();
    let app = test::init_service(
      App::new().configure(|cfg| config(cfg, app_state)),
    )
    .await;

    let req = test::TestRequest::post()
      .uri("/v1/posts")
      .peer_addr(peer_addr())
      .set_json(serde_json::json!({
          "carName": "   ",
          "rideOption": "eco"
      }))
      .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let rto: ValidationErrorRto = test::read_body_json(resp).await;
    assert_eq!(rto.violations.len(), 1);
    assert_eq!(rto.violations[0].field, "carName");
    assert_eq!(rto.violations[0].message, "car name은 필수입니다!");
  }

  #[actix_rt::test]
  async fn test_create_post_with_null_fields() {
    let app_state = in_memory_state();
    let app = test::init_service(
      App::new().configure(|cfg| config(cfg, app_state)),
    )
    .await;

    let req = test::TestRequest::post()
      .uri("/v1/posts")
      .peer_addr(peer_addr())
      .set_json(serde_json::json!({
          "carName": null,
          "rideOption": null,
          "requirement": null
      }))
      .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let rto: ValidationErrorRto = test::read_body_json(resp).await;
    let messages: Vec<&str> = rto
      .violations
      .iter()
      .map(|violation| violation.message.as_str())
      .collect();
    assert_eq!(
      messages,
      vec!["car name은 필수입니다!", "ride option은 필수입니다!"]
    );
  }

  #[actix_rt::test]
  async fn test_malformed_json_is_bad_request() {
    let app_state = in_memory_state();
    let app = test::init_service(
      App::new().configure(|cfg| config(cfg, app_state)),
    )
    .await;

    let req = test::TestRequest::post()
      .uri("/v1/posts")
      .peer_addr(peer_addr())
      .append_header((
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
      ))
      .set_payload("{\"carName\": ")
      .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let rto: HttpError = test::read_body_json(resp).await;
    assert!(!rto.message.is_empty());
  }

  #[actix_rt::test]
  async fn test_get_post_rejects_overlong_uuid() {
    let app_state = in_memory_state();
    let app = test::init_service(
      App::new().configure(|cfg| config(cfg, app_state)),
    )
    .await;

    let req = test::TestRequest::get()
      .uri(&format!("/v1/posts/{}", "a".repeat(65)))
      .peer_addr(peer_addr())
      .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let rto: ValidationErrorRto = test::read_body_json(resp).await;
    assert_eq!(rto.message, "Validation failed");
    assert_eq!(
      rto.violations,
      vec![FieldViolation {
        field: String::from("uuid"),
        message: String::from("Invalid post uuid"),
      }]
    );
  }

  #[actix_rt::test]
  async fn test_rate_limit_follows_config() {
    let app_state = web::Data::new(AppState {
      post_repository: InMemoryPostRepository::new(),
      config: Config {
        requests_per_second: 1,
        burst_size: 2,
        ..test_config()
      },
    });
    let app = test::init_service(
      App::new().configure(|cfg| config(cfg, app_state)),
    )
    .await;

    let mut statuses = Vec::new();
    for _ in 0..3 {
      let req = test::TestRequest::get()
        .uri("/v1/posts/missing")
        .peer_addr(peer_addr())
        .to_request();
      // The limiter may answer with an error instead of a response
      let status = match test::try_call_service(&app, req).await {
        Ok(resp) => resp.status(),
        Err(err) => err.error_response().status(),
      };
      statuses.push(status);
    }

    assert_eq!(
      statuses,
      vec![
        StatusCode::NOT_FOUND,
        StatusCode::NOT_FOUND,
        StatusCode::TOO_MANY_REQUESTS
      ]
    );
  }
}

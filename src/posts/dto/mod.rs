pub mod get_post_dto;
pub mod post_request;

pub mod config;
pub mod http_error;
pub mod rto;
pub mod validation;

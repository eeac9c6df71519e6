pub mod created_rto;
pub mod validation_error_rto;

pub mod get_post_rto;

pub mod get_elapsed_time;
pub mod validation;

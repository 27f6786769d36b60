//! Data Transfer Objects

mod check_options;

pub use check_options::CheckOptions;

pub mod details;
pub mod summary;

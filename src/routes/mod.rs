pub mod health;
pub mod samples;
pub mod summary;

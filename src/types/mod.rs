pub mod summary;
pub mod workout;

pub mod batch;
pub mod package;
pub mod samples;
pub mod training;

pub mod resolution;
pub mod roi;

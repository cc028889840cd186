pub mod races;
pub mod roll;

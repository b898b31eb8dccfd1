pub mod vector;
pub mod vehicle;

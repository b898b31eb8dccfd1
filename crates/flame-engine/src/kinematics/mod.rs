pub mod segment;
pub mod lace;

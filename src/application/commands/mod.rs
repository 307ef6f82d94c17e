pub mod articles;
pub mod publishing;

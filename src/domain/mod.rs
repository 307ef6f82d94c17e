pub mod article;
pub mod errors;
pub mod platform;
pub mod publishing;

pub mod database;
pub mod markdown;
pub mod repositories;
pub mod security;
pub mod time;
pub mod wordpress;

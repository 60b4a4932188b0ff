pub mod models;
pub mod core;

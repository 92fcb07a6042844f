pub mod cli;
pub mod context;
pub mod models;
pub mod persist;
pub mod repository;
pub mod types;

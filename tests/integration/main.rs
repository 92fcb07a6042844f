mod booking;
mod common;
mod config;
mod core;

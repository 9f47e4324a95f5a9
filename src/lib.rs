pub mod api;
pub mod book;
pub mod config;

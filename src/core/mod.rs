pub mod catalog;
pub mod config;
pub mod download;
pub mod extract;
pub mod platform;

//! Minimalist Browser resource setup
//!
//! This library provides the fetch, extract and orchestration logic behind the
//! `browser-setup` CLI.

pub mod commands;
pub mod core;
pub mod error;
pub mod utils;

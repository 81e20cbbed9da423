//! Service Studio - customer service dashboard views for the terminal
//!
//! This library provides the core functionality for Service Studio, including:
//! - Presentation classification of status, priority and confidence labels
//! - Data models for customers, conversations, AI settings and integrations
//! - Fixture repositories backing each dashboard page
//! - CLI command parsing and page rendering
//!
//! # Example
//!
//! ```no_run
//! use service_studio::cli::run;
//!
//! fn main() {
//!     if let Err(e) = run() {
//!         eprintln!("Error: {}", e);
//!         std::process::exit(1);
//!     }
//! }
//! ```

pub mod classify;
pub mod config;
pub mod models;
pub mod repo;
pub mod cli;
pub mod utils;

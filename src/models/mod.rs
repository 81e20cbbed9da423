// Core data models for Service Studio
// These structs are the read-only records each dashboard page renders

pub mod customer;
pub mod conversation;
pub mod settings;
pub mod integration;
pub mod dashboard;

pub use customer::*;
pub use conversation::*;
pub use settings::*;
pub use integration::*;
pub use dashboard::*;

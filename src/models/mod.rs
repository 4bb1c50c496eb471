//! Core data models for diagram conversion

pub mod job;
pub mod catalog;

pub use job::*;
pub use catalog::*;

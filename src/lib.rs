//! filetimegen - Time-stamped file names and tiered retention
//!
//! Generates file names that embed the current time and, given the names
//! that already exist, decides which ones to delete under a keep-N-per
//! minute/hour/day/week/month policy.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::RotateError;

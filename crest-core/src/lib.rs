//! Core data models and shared utilities for the crest workspace.

pub mod errors;
pub mod models;
pub mod utils;

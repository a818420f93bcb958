//! Query Layer - target lookup over a scoped connection

pub mod engine;

pub use engine::{LookupOutcome, QueryEngine};

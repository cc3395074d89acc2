//! Tax module containing the line calculator and bill aggregator

pub mod engine;

pub use engine::*;

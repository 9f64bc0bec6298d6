//! Courier Core Library
//!
//! Graph model, relaxation engine and eccentricity reduction for courier,
//! plus the edge-list reader, configuration, errors and logging around them.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod parse;
pub mod survey;

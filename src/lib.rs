//! occi-text - OCCI Category text codec
//!
//! Parses `Category:` header lines into descriptors, validates them and
//! renders descriptors back to the same grammar.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod report;

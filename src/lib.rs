//! Nasaview - search and browse the NASA Image and Video Library
//!
//! This library crate exposes the core functionality for integration testing.

pub mod api;
pub mod config;
pub mod fetch;
pub mod shell;
pub mod views;

#[cfg(test)]
pub(crate) mod test_support;

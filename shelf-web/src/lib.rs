//! Shelf Web Library
//!
//! This module exports the shell components for testing and reuse.

pub mod handlers;
pub mod routes;
pub mod state;

//! Utility functions and helpers for the gateway.
//!
//! - `logging`: Tracing subscriber initialization.

pub mod logging;

//! Adapter implementations for the task board ports.

pub mod memory;

//! Core type definitions used across the seatbook workspace.

pub mod id;

pub use id::*;

//! Shared types for the backdrop engine.
//!
//! # Invariants
//! - These types are plain state holders; no logic beyond trivial derivation.
//! - All shared state has exactly one writer and one reader (same thread).

pub mod types;

pub use types::{PointerState, Spin, Viewport};

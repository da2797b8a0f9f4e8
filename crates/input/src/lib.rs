//! Input layer: raw windowing events mapped to shared actions.
//!
//! # Invariants
//! - The scene and camera consume actions, never raw input events, so the
//!   desktop host and headless host share the same update logic.
//! - Pointer state has exactly one writer and one reader (same thread).

pub mod action;
pub mod overlay;
pub mod pointer;

pub use action::Action;
pub use overlay::{Overlay, OverlaySignal};
pub use pointer::PointerTracker;

pub fn crate_info() -> &'static str {
    "backdrop-input v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("input"));
    }
}

//! Developer tooling: read-only scene inspection.
//!
//! # Invariants
//! - Inspection never mutates scene state.

pub mod inspector;

pub use inspector::{EntityReport, SceneInspector, SceneSummary};

pub fn crate_info() -> &'static str {
    "backdrop-tools v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("tools"));
    }
}

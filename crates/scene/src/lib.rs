//! Scene kernel: the fixed entity set, deterministic frame stepping, and the
//! explicit run loop for headless hosts.
//!
//! # Invariants
//! - Entity set membership is fixed after `Scene::build`; nothing is added or
//!   removed during a session.
//! - A tick is a pure function of `(elapsed_time, pointer_state)`; the only
//!   cross-frame smoothing state lives in the camera, outside this crate.
//! - Starfield generation is seeded and reproducible.

pub mod director;
pub mod scene;
pub mod ticker;

pub use director::{CancelToken, Director};
pub use scene::{Entity, EntityKind, Scene};
pub use ticker::advance;

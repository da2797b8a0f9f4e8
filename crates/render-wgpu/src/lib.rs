//! wgpu render backend for the backdrop scene.
//!
//! Renders the icosahedron core (wireframe), the pulsing inner solid, three
//! orbital ring tori, and a 3000-point billboard starfield with additive
//! blending, all under exponential fog.
//!
//! # Invariants
//! - The renderer never mutates scene state.
//! - All geometry is uploaded once; per frame only camera globals and the six
//!   entity transforms are rewritten.

mod gpu;
mod mesh;
mod shaders;

pub use gpu::{BackdropRenderer, FOG_COLOR, FOG_DENSITY, GpuError, acquire_device};
pub use mesh::{TriMesh, icosahedron, torus, wireframe_edges};

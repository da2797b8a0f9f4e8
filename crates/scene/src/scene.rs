use backdrop_common::Spin;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Number of points in the starfield.
pub const PARTICLE_COUNT: usize = 3000;
/// Side length of the cube the starfield is distributed in, centered at origin.
pub const PARTICLE_SPREAD: f32 = 100.0;

/// Core wireframe: icosahedron, subdivision 1, radius 4, translucent blue.
pub const CORE_RADIUS: f32 = 4.0;
pub const CORE_SUBDIVISIONS: u32 = 1;
pub const CORE_COLOR: [f32; 3] = [0.376, 0.647, 0.980]; // 0x60a5fa
pub const CORE_OPACITY: f32 = 0.3;

/// Inner solid: icosahedron, subdivision 0, radius 2, opaque white.
pub const INNER_RADIUS: f32 = 2.0;
pub const INNER_SUBDIVISIONS: u32 = 0;
pub const INNER_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// Particles: light blue, additive, fixed size and opacity.
pub const PARTICLE_SIZE: f32 = 0.15;
pub const PARTICLE_COLOR: [f32; 3] = [0.729, 0.902, 0.992]; // 0xbae6fd
pub const PARTICLE_OPACITY: f32 = 0.8;

/// Rings: tori, radius 12, tube 0.05, translucent slate.
pub const RING_RADIUS: f32 = 12.0;
pub const RING_TUBE_RADIUS: f32 = 0.05;
pub const RING_RADIAL_SEGMENTS: u32 = 16;
pub const RING_TUBULAR_SEGMENTS: u32 = 100;
pub const RING_COLOR: [f32; 3] = [0.200, 0.255, 0.333]; // 0x334155
pub const RING_OPACITY: f32 = 0.3;

/// Which fixed entity a transform belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    CoreWireframe,
    InnerSolid,
    ParticleField,
    Ring(u8),
}

/// One visual object in the scene graph.
///
/// The transform (spin + uniform scale) is the only mutable state; geometry
/// and material parameters are fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    pub kind: EntityKind,
    pub spin: Spin,
    pub scale: f32,
}

impl Entity {
    fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            spin: Spin::default(),
            scale: 1.0,
        }
    }

    fn with_spin(kind: EntityKind, spin: Spin) -> Self {
        Self {
            kind,
            spin,
            scale: 1.0,
        }
    }
}

/// The fixed scene graph: core, inner solid, particle field, three rings.
///
/// Built exactly once at startup. Entities live in named fields rather than a
/// keyed container because membership never changes. Starfield positions are
/// generated from the seed so identical seeds produce identical scenes.
#[derive(Debug, Clone)]
pub struct Scene {
    pub core: Entity,
    pub inner: Entity,
    pub particles: Entity,
    pub rings: [Entity; 3],
    starfield: Vec<Vec3>,
    tick: u64,
    seed: u64,
}

impl Scene {
    /// Construct the fixed entity set. Runs once per session.
    ///
    /// Ring tilts are chosen so the three tori read as intersecting orbital
    /// planes: 90 degrees, a 60/30 compound, and -60 degrees of pitch.
    pub fn build(seed: u64) -> Self {
        use std::f32::consts::PI;

        let starfield = starfield_positions(seed);
        tracing::debug!(seed, points = starfield.len(), "scene built");

        Self {
            core: Entity::new(EntityKind::CoreWireframe),
            inner: Entity::new(EntityKind::InnerSolid),
            particles: Entity::new(EntityKind::ParticleField),
            rings: [
                Entity::with_spin(EntityKind::Ring(0), Spin::new(0.0, PI / 2.0, 0.0)),
                Entity::with_spin(EntityKind::Ring(1), Spin::new(PI / 6.0, PI / 3.0, 0.0)),
                Entity::with_spin(EntityKind::Ring(2), Spin::new(0.0, -PI / 3.0, 0.0)),
            ],
            starfield,
            tick: 0,
            seed,
        }
    }

    /// Number of ticks advanced since construction.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Seed the starfield was generated from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of entities in the fixed set.
    pub fn entity_count(&self) -> usize {
        3 + self.rings.len()
    }

    /// Starfield point positions, fixed at construction.
    pub fn starfield(&self) -> &[Vec3] {
        &self.starfield
    }

    /// Iterate the fixed entity set in draw order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        [&self.core, &self.inner, &self.particles]
            .into_iter()
            .chain(self.rings.iter())
    }

    pub(crate) fn bump_tick(&mut self) {
        self.tick += 1;
    }
}

/// Generate the starfield: `PARTICLE_COUNT` points uniformly distributed in a
/// cube of side `PARTICLE_SPREAD` centered at the origin.
fn starfield_positions(seed: u64) -> Vec<Vec3> {
    let mut state = seed;
    let mut next = || {
        state = splitmix64(state);
        // Map to [-0.5, 0.5) then scale to the cube.
        (state as f64 / (u64::MAX as f64 + 1.0) - 0.5) as f32 * PARTICLE_SPREAD
    };
    (0..PARTICLE_COUNT)
        .map(|_| {
            let x = next();
            let y = next();
            let z = next();
            Vec3::new(x, y, z)
        })
        .collect()
}

/// Splitmix64 ... a fast, high-quality deterministic PRNG step function.
fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn build_fixed_entity_set() {
        let scene = Scene::build(42);
        assert_eq!(scene.entity_count(), 6);
        assert_eq!(scene.entities().count(), 6);
        assert_eq!(scene.tick(), 0);
    }

    #[test]
    fn starfield_within_cube() {
        let scene = Scene::build(42);
        assert_eq!(scene.starfield().len(), PARTICLE_COUNT);
        let half = PARTICLE_SPREAD / 2.0;
        for p in scene.starfield() {
            assert!(p.x >= -half && p.x < half);
            assert!(p.y >= -half && p.y < half);
            assert!(p.z >= -half && p.z < half);
        }
    }

    #[test]
    fn starfield_deterministic_per_seed() {
        let a = Scene::build(7);
        let b = Scene::build(7);
        assert_eq!(a.starfield(), b.starfield());
    }

    #[test]
    fn different_seeds_diverge() {
        let a = Scene::build(1);
        let b = Scene::build(2);
        assert_ne!(a.starfield()[0], b.starfield()[0]);
    }

    #[test]
    fn ring_initial_tilts() {
        let scene = Scene::build(0);
        assert_eq!(scene.rings[0].spin.pitch, PI / 2.0);
        assert_eq!(scene.rings[1].spin.pitch, PI / 3.0);
        assert_eq!(scene.rings[1].spin.yaw, PI / 6.0);
        assert_eq!(scene.rings[2].spin.pitch, -PI / 3.0);
    }

    #[test]
    fn entities_start_at_unit_scale() {
        let scene = Scene::build(0);
        for e in scene.entities() {
            assert_eq!(e.scale, 1.0);
        }
    }
}

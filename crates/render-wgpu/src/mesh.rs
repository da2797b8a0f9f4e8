//! Procedural geometry for the fixed scene: icosahedra (solid and wireframe)
//! and tori. Generated once at renderer construction.

use glam::Vec3;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Triangle mesh: positions plus triangle-list indices.
#[derive(Debug, Clone)]
pub struct TriMesh {
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl TriMesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Icosahedron of the given radius, optionally subdivided. Each subdivision
/// level splits every triangle in four and reprojects onto the sphere.
pub fn icosahedron(radius: f32, subdivisions: u32) -> TriMesh {
    // Golden-ratio construction of the 12 base vertices.
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let mut positions: Vec<Vec3> = [
        (-1.0, t, 0.0),
        (1.0, t, 0.0),
        (-1.0, -t, 0.0),
        (1.0, -t, 0.0),
        (0.0, -1.0, t),
        (0.0, 1.0, t),
        (0.0, -1.0, -t),
        (0.0, 1.0, -t),
        (t, 0.0, -1.0),
        (t, 0.0, 1.0),
        (-t, 0.0, -1.0),
        (-t, 0.0, 1.0),
    ]
    .into_iter()
    .map(|(x, y, z)| Vec3::new(x, y, z).normalize())
    .collect();

    #[rustfmt::skip]
    let mut indices: Vec<u32> = vec![
        0, 11, 5,   0, 5, 1,    0, 1, 7,    0, 7, 10,   0, 10, 11,
        1, 5, 9,    5, 11, 4,   11, 10, 2,  10, 7, 6,   7, 1, 8,
        3, 9, 4,    3, 4, 2,    3, 2, 6,    3, 6, 8,    3, 8, 9,
        4, 9, 5,    2, 4, 11,   6, 2, 10,   8, 6, 7,    9, 8, 1,
    ];

    for _ in 0..subdivisions {
        let mut midpoints: BTreeMap<(u32, u32), u32> = BTreeMap::new();
        let mut next_indices = Vec::with_capacity(indices.len() * 4);

        let mut midpoint = |a: u32, b: u32, positions: &mut Vec<Vec3>| -> u32 {
            let key = if a < b { (a, b) } else { (b, a) };
            *midpoints.entry(key).or_insert_with(|| {
                let mid = ((positions[a as usize] + positions[b as usize]) / 2.0).normalize();
                positions.push(mid);
                (positions.len() - 1) as u32
            })
        };

        for tri in indices.chunks_exact(3) {
            let (a, b, c) = (tri[0], tri[1], tri[2]);
            let ab = midpoint(a, b, &mut positions);
            let bc = midpoint(b, c, &mut positions);
            let ca = midpoint(c, a, &mut positions);
            next_indices.extend_from_slice(&[a, ab, ca, b, bc, ab, c, ca, bc, ab, bc, ca]);
        }
        indices = next_indices;
    }

    for p in &mut positions {
        *p *= radius;
    }

    TriMesh { positions, indices }
}

/// Unique-edge line list for a triangle mesh (wireframe rendering).
pub fn wireframe_edges(mesh: &TriMesh) -> Vec<u32> {
    let mut edges: BTreeSet<(u32, u32)> = BTreeSet::new();
    for tri in mesh.indices.chunks_exact(3) {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            edges.insert(if a < b { (a, b) } else { (b, a) });
        }
    }
    edges.into_iter().flat_map(|(a, b)| [a, b]).collect()
}

/// Torus in the XY plane: `radius` to the tube center, `tube` tube radius.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> TriMesh {
    use std::f32::consts::TAU;

    let mut positions = Vec::new();
    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * TAU;
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * TAU;
            positions.push(Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            ));
        }
    }

    let stride = tubular_segments + 1;
    let mut indices = Vec::new();
    for j in 1..=radial_segments {
        for i in 1..=tubular_segments {
            let a = (stride * j + i - 1) as u32;
            let b = (stride * (j - 1) + i - 1) as u32;
            let c = (stride * (j - 1) + i) as u32;
            let d = (stride * j + i) as u32;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    TriMesh { positions, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_icosahedron_shape() {
        let mesh = icosahedron(4.0, 0);
        assert_eq!(mesh.positions.len(), 12);
        assert_eq!(mesh.triangle_count(), 20);
        for p in &mesh.positions {
            assert!((p.length() - 4.0).abs() < 1e-4);
        }
    }

    #[test]
    fn subdivision_quadruples_triangles() {
        let mesh = icosahedron(4.0, 1);
        assert_eq!(mesh.triangle_count(), 80);
        // 12 originals + 30 unique edge midpoints.
        assert_eq!(mesh.positions.len(), 42);
        for p in &mesh.positions {
            assert!((p.length() - 4.0).abs() < 1e-4);
        }
    }

    #[test]
    fn wireframe_has_unique_edges() {
        let mesh = icosahedron(1.0, 0);
        let lines = wireframe_edges(&mesh);
        // An icosahedron has 30 edges, each contributing two indices.
        assert_eq!(lines.len(), 60);
    }

    #[test]
    fn torus_vertex_and_index_counts() {
        let mesh = torus(12.0, 0.05, 16, 100);
        assert_eq!(mesh.positions.len(), 17 * 101);
        assert_eq!(mesh.triangle_count(), (16 * 100 * 2) as usize);
    }

    #[test]
    fn torus_radii_bound_vertices() {
        let mesh = torus(12.0, 0.05, 16, 100);
        for p in &mesh.positions {
            let ring_dist = (p.x * p.x + p.y * p.y).sqrt();
            assert!(ring_dist >= 12.0 - 0.05 - 1e-4);
            assert!(ring_dist <= 12.0 + 0.05 + 1e-4);
            assert!(p.z.abs() <= 0.05 + 1e-4);
        }
    }
}

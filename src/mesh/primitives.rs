use crate::math::Vec3;

/// Indexed triangle mesh with positions and normals
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Interleave position(3) + normal(3) for upload
    pub fn vertex_data(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.positions.len() * 6);
        for (p, n) in self.positions.iter().zip(self.normals.iter()) {
            data.extend_from_slice(&p.to_array());
            data.extend_from_slice(&n.to_array());
        }
        data
    }

    pub fn index_data(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

/// Unit-radius UV sphere. `segments` around the equator, `rings` from pole
/// to pole. Normals equal positions on a unit sphere.
pub fn sphere(segments: usize, rings: usize) -> Mesh {
    let segments = segments.max(3);
    let rings = rings.max(2);

    let mut mesh = Mesh::default();

    for ring in 0..=rings {
        let v = ring as f32 / rings as f32;
        let phi = v * std::f32::consts::PI;
        let y = phi.cos();
        let ring_radius = phi.sin();

        for seg in 0..=segments {
            let u = seg as f32 / segments as f32;
            let theta = u * std::f32::consts::TAU;
            let p = Vec3::new(ring_radius * theta.cos(), y, ring_radius * theta.sin());
            mesh.positions.push(p);
            mesh.normals.push(p);
        }
    }

    let stride = (segments + 1) as u32;
    for ring in 0..rings as u32 {
        for seg in 0..segments as u32 {
            let a = ring * stride + seg;
            let b = a + stride;
            mesh.indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }

    mesh
}

/// Unit cube centered at the origin, half-extent 0.5, flat face normals
pub fn cube() -> Mesh {
    // (normal, two tangents spanning the face)
    let faces = [
        (Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0)),
        (Vec3::new(-1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, -1.0)),
        (Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0), Vec3::new(1.0, 0.0, 0.0)),
        (Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.0, 0.0, 1.0), Vec3::new(-1.0, 0.0, 0.0)),
        (Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 1.0, 0.0), Vec3::new(-1.0, 0.0, 0.0)),
        (Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 0.0, 0.0)),
    ];

    let mut mesh = Mesh::default();

    for (normal, up, right) in faces {
        let base = mesh.positions.len() as u32;
        let center = normal.scale(0.5);

        for (su, sv) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
            mesh.positions.push(center + right.scale(su) + up.scale(sv));
            mesh.normals.push(normal);
        }

        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    mesh
}

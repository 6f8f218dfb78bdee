use glam::{Mat4, Vec3};
use room_core::{SceneNode, Shape};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Per-instance data: model matrix, base color and hover emissive in `color.w`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Instance {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeshKind {
    Cube,
    Sphere,
}

pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

/// Cube spanning [-1, 1]³ with flat per-face normals, so an instance scale of
/// `half_extents` reproduces the cuboid.
pub fn unit_cube() -> MeshData {
    const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -1.0]),
        ([-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 1.0, 0.0], [0.0, 0.0, -1.0], [1.0, 0.0, 0.0]),
        ([0.0, -1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
        ([0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
        ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0]),
    ];
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (normal, up, right) in FACES {
        let (n, u, r) = (
            Vec3::from_array(normal),
            Vec3::from_array(up),
            Vec3::from_array(right),
        );
        let base = vertices.len() as u16;
        for (su, sr) in [(-1.0, -1.0), (-1.0, 1.0), (1.0, 1.0), (1.0, -1.0)] {
            vertices.push(Vertex {
                position: (n + u * su + r * sr).to_array(),
                normal,
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    MeshData { vertices, indices }
}

/// UV sphere of radius 1.
pub fn unit_sphere(segments: u32, rings: u32) -> MeshData {
    let segments = segments.max(3);
    let rings = rings.max(2);
    let mut vertices = Vec::with_capacity(((segments + 1) * (rings + 1)) as usize);
    for ring in 0..=rings {
        let phi = std::f32::consts::PI * ring as f32 / rings as f32;
        for seg in 0..=segments {
            let theta = std::f32::consts::TAU * seg as f32 / segments as f32;
            let p = Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());
            vertices.push(Vertex {
                position: p.to_array(),
                normal: p.to_array(),
            });
        }
    }
    let stride = segments + 1;
    let mut indices = Vec::with_capacity((segments * rings * 6) as usize);
    for ring in 0..rings {
        for seg in 0..segments {
            let a = (ring * stride + seg) as u16;
            let b = a + stride as u16;
            indices.extend_from_slice(&[a, a + 1, b, a + 1, b + 1, b]);
        }
    }
    MeshData { vertices, indices }
}

/// Instance for a solid scene node; `None` for pure groups.
pub fn instance_for(node: &SceneNode, emissive: f32) -> Option<(MeshKind, Instance)> {
    let (kind, scale) = match node.shape? {
        Shape::Cuboid { half_extents } => (MeshKind::Cube, half_extents),
        Shape::Sphere { radius } => (MeshKind::Sphere, Vec3::splat(radius)),
    };
    let model = node.world * Mat4::from_scale(scale);
    let [r, g, b] = node.color;
    Some((
        kind,
        Instance {
            model: model.to_cols_array_2d(),
            color: [r, g, b, emissive],
        },
    ))
}

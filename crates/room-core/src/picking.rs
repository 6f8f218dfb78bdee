//! Ray casting against the scene.
//!
//! Every solid node takes part, tagged or not, so untagged geometry occludes
//! interactive objects behind it. Intersections are ordered by distance with a
//! stable sort: at exactly equal distances the node inserted first wins.

use crate::camera::{Camera, Ray};
use crate::category::Category;
use crate::pointer::PointerState;
use crate::scene::{NodeId, Scene, Shape};
use glam::Vec3;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub node: NodeId,
    pub category: Option<Category>,
    pub distance: f32,
    pub point: Vec3,
}

/// Nearest intersection, known to be interactive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub node: NodeId,
    pub category: Category,
    pub distance: f32,
    pub point: Vec3,
}

pub type Intersections = SmallVec<[Intersection; 8]>;

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t_near = -b - sq;
    if t_near >= 0.0 {
        return Some(t_near);
    }
    // origin inside the sphere: report the exit
    let t_far = -b + sq;
    (t_far >= 0.0).then_some(t_far)
}

/// Slab test against an axis-aligned box centered at the origin. The ray does
/// not need a unit direction; the returned parameter is in units of `ray_dir`.
#[inline]
pub fn ray_box(ray_origin: Vec3, ray_dir: Vec3, half_extents: Vec3) -> Option<f32> {
    let inv = ray_dir.recip();
    let t1 = (-half_extents - ray_origin) * inv;
    let t2 = (half_extents - ray_origin) * inv;
    let t_min = t1.min(t2).max_element();
    let t_max = t1.max(t2).min_element();
    if t_max < t_min.max(0.0) {
        return None;
    }
    Some(if t_min >= 0.0 { t_min } else { t_max })
}

fn intersect_shape(ray: &Ray, world: &glam::Mat4, shape: Shape) -> Option<f32> {
    match shape {
        Shape::Sphere { radius } => {
            // uniform scale assumed for spheres
            let center = world.transform_point3(Vec3::ZERO);
            let scale = world.transform_vector3(Vec3::X).length();
            ray_sphere(ray.origin, ray.dir, center, radius * scale)
        }
        Shape::Cuboid { half_extents } => {
            if world.determinant().abs() < f32::EPSILON {
                return None;
            }
            // Affine maps keep the ray parameter, so t in local space is t in world space.
            let inv = world.inverse();
            let o = inv.transform_point3(ray.origin);
            let d = inv.transform_vector3(ray.dir);
            ray_box(o, d, half_extents)
        }
    }
}

/// All intersections of `ray` with solid nodes, nearest first.
pub fn intersect_scene(scene: &Scene, ray: &Ray) -> Intersections {
    let mut hits: Intersections = scene
        .iter()
        .filter_map(|(id, node)| {
            let shape = node.shape?;
            let t = intersect_shape(ray, &node.world, shape)?;
            Some(Intersection {
                node: id,
                category: node.category,
                distance: t,
                point: ray.at(t),
            })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

/// Nearest intersection if it belongs to an interactive object. A closer
/// untagged object blocks everything behind it.
pub fn pick(scene: &Scene, ray: &Ray) -> Option<Hit> {
    let first = intersect_scene(scene, ray).into_iter().next()?;
    Some(Hit {
        node: first.node,
        category: first.category?,
        distance: first.distance,
        point: first.point,
    })
}

/// Pick under the pointer. Pointers outside the viewport never hit.
pub fn pick_at(scene: &Scene, camera: &Camera, pointer: &PointerState) -> Option<Hit> {
    if !pointer.is_inside() {
        return None;
    }
    let ray = camera.ray_through(pointer.ndc);
    if ray.dir == Vec3::ZERO {
        return None;
    }
    pick(scene, &ray)
}

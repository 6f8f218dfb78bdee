// Hit testing against hand-built scenes and the shipped room.

mod common;

use common::*;
use glam::{Mat4, Quat, Vec2, Vec3};
use room_core::camera::Ray;
use room_core::picking::{intersect_scene, pick, pick_at, ray_box, ray_sphere};
use room_core::{Camera, Category, NewNode, PointerState, Scene, Shape};

fn cube(name: &str, at: Vec3, half: f32) -> NewNode {
    NewNode::solid(
        name,
        Mat4::from_translation(at),
        Shape::Cuboid {
            half_extents: Vec3::splat(half),
        },
        [0.5; 3],
    )
}

fn forward_ray() -> Ray {
    Ray {
        origin: Vec3::ZERO,
        dir: Vec3::NEG_Z,
    }
}

#[test]
fn ray_sphere_hits_front_face() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0).unwrap();
    assert!((t - 3.0).abs() < 1e-5);
}

#[test]
fn ray_sphere_from_inside_reports_exit() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::ZERO, 1.5).unwrap();
    assert!((t - 1.5).abs() < 1e-5);
}

#[test]
fn ray_sphere_behind_origin_misses() {
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 1.0).is_none());
}

#[test]
fn ray_box_axis_aligned() {
    let origin = Vec3::new(0.0, 0.0, 5.0);
    let t = ray_box(origin, Vec3::NEG_Z, Vec3::splat(1.0)).unwrap();
    assert!((t - 4.0).abs() < 1e-5);
    assert!(ray_box(Vec3::new(3.0, 0.0, 5.0), Vec3::NEG_Z, Vec3::splat(1.0)).is_none());
}

#[test]
fn untagged_geometry_occludes_tagged_object() {
    let mut scene = Scene::new();
    scene.insert(cube("papers", Vec3::new(0.0, 0.0, -5.0), 0.5).with_tag(Category::Papers));
    scene.insert(cube("wall", Vec3::new(0.0, 0.0, -2.0), 0.5));

    let all = intersect_scene(&scene, &forward_ray());
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].category, None);
    assert!(pick(&scene, &forward_ray()).is_none());
}

#[test]
fn nearest_tagged_object_wins() {
    let mut scene = Scene::new();
    scene.insert(cube("mirror", Vec3::new(0.0, 0.0, -6.0), 0.5).with_tag(Category::Mirror));
    scene.insert(cube("papers", Vec3::new(0.0, 0.0, -3.0), 0.5).with_tag(Category::Papers));

    let hit = pick(&scene, &forward_ray()).unwrap();
    assert_eq!(hit.category, Category::Papers);
    assert!((hit.distance - 2.5).abs() < 1e-5);
    assert!((hit.point - Vec3::new(0.0, 0.0, -2.5)).length() < 1e-5);
}

#[test]
fn equal_distances_resolve_to_first_inserted() {
    let mut scene = Scene::new();
    let first = scene.insert(cube("a", Vec3::new(0.0, 0.0, -3.0), 0.5).with_tag(Category::Agent));
    scene.insert(cube("b", Vec3::new(0.0, 0.0, -3.0), 0.5).with_tag(Category::Mirror));

    let hit = pick(&scene, &forward_ray()).unwrap();
    assert_eq!(hit.node, first);
    assert_eq!(hit.category, Category::Agent);
}

#[test]
fn child_of_tagged_group_reports_group_category() {
    let mut scene = Scene::new();
    let group = scene.insert(
        NewNode::group("typewriter", Mat4::from_translation(Vec3::new(0.0, 0.0, -4.0)))
            .with_tag(Category::Typewriter),
    );
    scene.insert(cube("Object_2", Vec3::ZERO, 0.3).with_parent(group));

    let hit = pick(&scene, &forward_ray()).unwrap();
    assert_eq!(hit.category, Category::Typewriter);
    assert!((hit.distance - 3.7).abs() < 1e-5);
}

#[test]
fn rotated_and_scaled_cuboid() {
    let mut scene = Scene::new();
    let world = Mat4::from_scale_rotation_translation(
        Vec3::splat(2.0),
        Quat::from_rotation_y(std::f32::consts::FRAC_PI_4),
        Vec3::new(0.0, 0.0, -10.0),
    );
    scene.insert(
        NewNode::solid(
            "crate",
            world,
            Shape::Cuboid {
                half_extents: Vec3::splat(0.5),
            },
            [0.5; 3],
        )
        .with_tag(Category::Agent),
    );

    // Edge-on after the 45 degree turn: the nearest corner sits at sqrt(2) * 0.5 * 2.
    let hit = pick(&scene, &forward_ray()).unwrap();
    assert!((hit.distance - (10.0 - 2f32.sqrt())).abs() < 1e-4);
}

#[test]
fn degenerate_transform_is_skipped() {
    let mut scene = Scene::new();
    scene.insert(
        NewNode::solid(
            "flat",
            Mat4::from_scale(Vec3::new(1.0, 0.0, 1.0)),
            Shape::Cuboid {
                half_extents: Vec3::splat(1.0),
            },
            [0.5; 3],
        )
        .with_tag(Category::Papers),
    );
    assert!(pick(&scene, &forward_ray()).is_none());
}

#[test]
fn pointer_outside_viewport_never_hits() {
    let mut scene = Scene::new();
    scene.insert(cube("big", Vec3::new(0.0, 0.0, -5.0), 2.0).with_tag(Category::Papers));
    let camera = Camera::looking_at(Vec3::ZERO, Vec3::NEG_Z, 16.0 / 9.0);

    let inside = PointerState { ndc: Vec2::ZERO };
    let outside = PointerState::from_pixels(-20.0, 100.0, VIEWPORT);
    assert!(pick_at(&scene, &camera, &inside).is_some());
    assert!(!outside.is_inside());
    assert!(pick_at(&scene, &camera, &outside).is_none());
}

#[test]
fn shipped_objects_are_pickable_from_base_pose() {
    let d = loaded_dispatcher();
    let camera = d.context().camera_view();
    for (point, category) in [
        (PAPERS_POINT, Category::Papers),
        (AGENT_HEAD, Category::Agent),
        (TYPEWRITER_BODY, Category::Typewriter),
        (Vec3::new(-0.7, 2.17, -2.2), Category::Mirror),
    ] {
        let ndc = camera.project(point);
        let pointer = PointerState { ndc: ndc.truncate() };
        let hit = pick_at(&d.context().scene, &camera, &pointer)
            .unwrap_or_else(|| panic!("{:?} not picked", category));
        assert_eq!(hit.category, category);
    }
}

#[test]
fn papers_hit_lands_on_the_sheet() {
    let d = loaded_dispatcher();
    let camera = d.context().camera_view();
    let pointer = PointerState {
        ndc: camera.project(PAPERS_POINT).truncate(),
    };
    let hit = pick_at(&d.context().scene, &camera, &pointer).unwrap();
    assert!((hit.point - PAPERS_POINT).length() < 0.02);
}

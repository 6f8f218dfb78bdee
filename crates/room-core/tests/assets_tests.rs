// Scene descriptors: the shipped files, mounting and the status board.

mod common;

use common::*;
use glam::Vec3;
use room_core::assets::{mount, Placement};
use room_core::{AssetBoard, AssetKind, AssetStatus, Category, Scene, SceneDescriptor, SceneError};

#[test]
fn shipped_descriptors_mount_with_categories() {
    let mut scene = Scene::new();
    for kind in AssetKind::ALL {
        let ids = mount(&mut scene, kind, &descriptor(kind)).unwrap();
        assert!(!ids.is_empty(), "{} has no nodes", kind.name());
        if let Some(category) = kind.root_category() {
            for id in ids {
                assert_eq!(scene.get(id).unwrap().category, Some(category));
            }
        }
    }
    for c in Category::ALL {
        assert!(scene.contains(c), "{} missing", c.name());
    }
}

#[test]
fn room_tags_only_the_papers() {
    let mut scene = Scene::new();
    mount(&mut scene, AssetKind::Room, &descriptor(AssetKind::Room)).unwrap();
    let tagged: Vec<_> = scene
        .iter()
        .filter(|(_, n)| n.category.is_some())
        .map(|(_, n)| n.name.as_str())
        .collect();
    assert_eq!(tagged, vec!["papers_3", "Object_8"]);
    let center = scene.center_of(Category::Papers).unwrap();
    assert!((center - Vec3::new(0.82, 1.2, 0.1)).length() < 1e-5);
}

#[test]
fn asset_placement_composes_with_children() {
    let mut scene = Scene::new();
    mount(&mut scene, AssetKind::Agent, &descriptor(AssetKind::Agent)).unwrap();
    let head = scene
        .iter()
        .find(|(_, n)| n.name == "head")
        .map(|(_, n)| n.center())
        .unwrap();
    assert!((head - AGENT_HEAD).length() < 1e-5);
}

#[test]
fn missing_fields_take_defaults() {
    let desc = SceneDescriptor::from_json(
        AssetKind::Mirror,
        r#"{ "nodes": [ { "name": "pane", "shape": { "kind": "sphere", "radius": 0.5 } } ] }"#,
    )
    .unwrap();
    assert_eq!(desc.placement, Placement::default());
    assert_eq!(desc.placement.scale, 1.0);
    assert_eq!(desc.nodes[0].color, [0.5, 0.5, 0.5]);
    assert_eq!(desc.nodes[0].category, None);
}

#[test]
fn bad_json_is_a_format_error() {
    let err = SceneDescriptor::from_json(AssetKind::Typewriter, "{ nodes: ").unwrap_err();
    assert!(matches!(
        err,
        SceneError::AssetFormat {
            asset: "typewriter",
            ..
        }
    ));

    let err = SceneDescriptor::from_json(
        AssetKind::Agent,
        r#"{ "nodes": [ { "name": "x", "category": "lamp" } ] }"#,
    )
    .unwrap_err();
    assert!(matches!(err, SceneError::AssetFormat { .. }));
}

#[test]
fn forward_parent_reference_is_rejected_untouched() {
    let desc = SceneDescriptor::from_json(
        AssetKind::Typewriter,
        r#"{ "nodes": [
            { "name": "platen", "parent": "body" },
            { "name": "body" }
        ] }"#,
    )
    .unwrap();
    let mut scene = Scene::new();
    let err = mount(&mut scene, AssetKind::Typewriter, &desc).unwrap_err();
    assert_eq!(
        err,
        SceneError::UnknownParent {
            asset: "typewriter",
            node: "platen".into(),
            parent: "body".into(),
        }
    );
    assert!(scene.is_empty());
}

#[test]
fn board_tracks_each_asset_independently() {
    let mut board = AssetBoard::default();
    assert!(!board.all_settled());
    board.set(AssetKind::Room, AssetStatus::Ready { nodes: 14 });
    board.set(
        AssetKind::Mirror,
        AssetStatus::Failed {
            reason: "404".into(),
        },
    );
    assert!(board.is_ready(AssetKind::Room));
    assert!(!board.is_ready(AssetKind::Mirror));
    assert_eq!(board.status(AssetKind::Agent), &AssetStatus::Pending);
    assert_eq!(
        board.failures().collect::<Vec<_>>(),
        vec![(AssetKind::Mirror, "404")]
    );
    board.set(AssetKind::Typewriter, AssetStatus::Ready { nodes: 2 });
    board.set(AssetKind::Agent, AssetStatus::Ready { nodes: 3 });
    assert!(board.all_settled());
}

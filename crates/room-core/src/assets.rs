//! Scene descriptors and per-asset load bookkeeping.
//!
//! Each asset is fetched independently; a failure is recorded against that
//! asset only and never affects the others.

use crate::category::Category;
use crate::error::{Result, SceneError};
use crate::scene::{NewNode, NodeId, Scene, Shape};
use fnv::{FnvHashMap, FnvHashSet};
use glam::{Mat4, Quat, Vec3};
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Room,
    Mirror,
    Typewriter,
    Agent,
}

impl AssetKind {
    pub const ALL: [AssetKind; 4] = [
        AssetKind::Room,
        AssetKind::Mirror,
        AssetKind::Typewriter,
        AssetKind::Agent,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            AssetKind::Room => "room",
            AssetKind::Mirror => "mirror",
            AssetKind::Typewriter => "typewriter",
            AssetKind::Agent => "agent",
        }
    }

    /// Descriptor file name, relative to the asset root.
    pub fn file_name(self) -> &'static str {
        match self {
            AssetKind::Room => "room.json",
            AssetKind::Mirror => "mirror.json",
            AssetKind::Typewriter => "typewriter.json",
            AssetKind::Agent => "agent.json",
        }
    }

    /// The loading overlay waits on the primary asset only.
    #[inline]
    pub fn is_primary(self) -> bool {
        matches!(self, AssetKind::Room)
    }

    /// Category stamped on the asset root, inherited by every node in it. The
    /// room carries its tags per node instead.
    pub fn root_category(self) -> Option<Category> {
        match self {
            AssetKind::Room => None,
            AssetKind::Mirror => Some(Category::Mirror),
            AssetKind::Typewriter => Some(Category::Typewriter),
            AssetKind::Agent => Some(Category::Agent),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Placement {
    pub translation: [f32; 3],
    pub rotation_y_deg: f32,
    pub scale: f32,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            translation: [0.0; 3],
            rotation_y_deg: 0.0,
            scale: 1.0,
        }
    }
}

impl Placement {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_rotation_y(self.rotation_y_deg.to_radians()),
            Vec3::from_array(self.translation),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeDescriptor {
    Cuboid { half_extents: [f32; 3] },
    Sphere { radius: f32 },
}

impl From<ShapeDescriptor> for Shape {
    fn from(s: ShapeDescriptor) -> Self {
        match s {
            ShapeDescriptor::Cuboid { half_extents } => Shape::Cuboid {
                half_extents: Vec3::from_array(half_extents),
            },
            ShapeDescriptor::Sphere { radius } => Shape::Sphere { radius },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NodeDescriptor {
    pub name: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(flatten)]
    pub placement: Placement,
    #[serde(default)]
    pub shape: Option<ShapeDescriptor>,
    #[serde(default = "default_color")]
    pub color: [f32; 3],
}

fn default_color() -> [f32; 3] {
    [0.5, 0.5, 0.5]
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SceneDescriptor {
    #[serde(default)]
    pub placement: Placement,
    pub nodes: Vec<NodeDescriptor>,
}

impl SceneDescriptor {
    pub fn from_json(kind: AssetKind, text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| SceneError::AssetFormat {
            asset: kind.name(),
            reason: e.to_string(),
        })
    }
}

/// Mount a descriptor under a new asset root. Parents must be declared before
/// their children; the whole descriptor is validated before anything is
/// inserted, so a bad file leaves the scene untouched.
pub fn mount(scene: &mut Scene, kind: AssetKind, desc: &SceneDescriptor) -> Result<Vec<NodeId>> {
    let mut seen: FnvHashSet<&str> = FnvHashSet::default();
    for n in &desc.nodes {
        if let Some(p) = n.parent.as_deref() {
            if !seen.contains(p) {
                return Err(SceneError::UnknownParent {
                    asset: kind.name(),
                    node: n.name.clone(),
                    parent: p.to_string(),
                });
            }
        }
        seen.insert(n.name.as_str());
    }

    let mut root = NewNode::group(kind.name(), desc.placement.matrix());
    root.tag = kind.root_category();
    let root = scene.insert(root);

    let mut by_name: FnvHashMap<&str, NodeId> = FnvHashMap::default();
    let mut ids = Vec::with_capacity(desc.nodes.len());
    for n in &desc.nodes {
        let parent = n
            .parent
            .as_deref()
            .and_then(|p| by_name.get(p).copied())
            .unwrap_or(root);
        let id = scene.insert(NewNode {
            name: n.name.clone(),
            parent: Some(parent),
            tag: n.category,
            local: n.placement.matrix(),
            shape: n.shape.map(Shape::from),
            color: n.color,
        });
        by_name.insert(n.name.as_str(), id);
        ids.push(id);
    }
    Ok(ids)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum AssetStatus {
    #[default]
    Pending,
    Ready {
        nodes: usize,
    },
    Failed {
        reason: String,
    },
}

#[derive(Clone, Debug, Default)]
pub struct AssetBoard {
    statuses: [AssetStatus; 4],
}

impl AssetBoard {
    #[inline]
    pub fn status(&self, kind: AssetKind) -> &AssetStatus {
        &self.statuses[kind.index()]
    }

    pub fn set(&mut self, kind: AssetKind, status: AssetStatus) {
        self.statuses[kind.index()] = status;
    }

    pub fn is_ready(&self, kind: AssetKind) -> bool {
        matches!(self.status(kind), AssetStatus::Ready { .. })
    }

    pub fn failures(&self) -> impl Iterator<Item = (AssetKind, &str)> + '_ {
        AssetKind::ALL.into_iter().filter_map(move |k| match self.status(k) {
            AssetStatus::Failed { reason } => Some((k, reason.as_str())),
            _ => None,
        })
    }

    pub fn all_settled(&self) -> bool {
        self.statuses
            .iter()
            .all(|s| !matches!(s, AssetStatus::Pending))
    }
}

//! Minimal static scene graph.
//!
//! Nodes are stored in insertion order and never removed. World transforms and
//! categories are resolved once when a node is inserted: a node inherits the
//! category of its nearest tagged ancestor unless it carries its own tag.

use crate::category::Category;
use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Pickable/renderable geometry in the node's local space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Cuboid { half_extents: Vec3 },
    Sphere { radius: f32 },
}

#[derive(Clone, Debug)]
pub struct SceneNode {
    pub name: String,
    pub parent: Option<NodeId>,
    pub category: Option<Category>,
    pub world: Mat4,
    /// `None` for grouping nodes that only carry a transform.
    pub shape: Option<Shape>,
    pub color: [f32; 3],
}

impl SceneNode {
    #[inline]
    pub fn center(&self) -> Vec3 {
        self.world.transform_point3(Vec3::ZERO)
    }
}

/// Insertion request; `local` is relative to `parent`.
#[derive(Clone, Debug)]
pub struct NewNode {
    pub name: String,
    pub parent: Option<NodeId>,
    pub tag: Option<Category>,
    pub local: Mat4,
    pub shape: Option<Shape>,
    pub color: [f32; 3],
}

impl NewNode {
    pub fn group(name: impl Into<String>, local: Mat4) -> Self {
        Self {
            name: name.into(),
            parent: None,
            tag: None,
            local,
            shape: None,
            color: [0.0; 3],
        }
    }

    pub fn solid(name: impl Into<String>, local: Mat4, shape: Shape, color: [f32; 3]) -> Self {
        Self {
            name: name.into(),
            parent: None,
            tag: None,
            local,
            shape: Some(shape),
            color,
        }
    }

    pub fn with_parent(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_tag(mut self, tag: Category) -> Self {
        self.tag = Some(tag);
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: NewNode) -> NodeId {
        // Unknown parents are treated as roots.
        let parent = node.parent.filter(|p| p.0 < self.nodes.len());
        let (world, category) = match parent.map(|p| &self.nodes[p.0]) {
            Some(p) => (p.world * node.local, node.tag.or(p.category)),
            None => (node.local, node.tag),
        };
        let id = NodeId(self.nodes.len());
        self.nodes.push(SceneNode {
            name: node.name,
            parent,
            category,
            world,
            shape: node.shape,
            color: node.color,
        });
        id
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, category: Category) -> bool {
        self.nodes
            .iter()
            .any(|n| n.shape.is_some() && n.category == Some(category))
    }

    /// Mean center of all solid nodes carrying `category`, or `None` while
    /// nothing of that category has been loaded.
    pub fn center_of(&self, category: Category) -> Option<Vec3> {
        let (sum, count) = self
            .nodes
            .iter()
            .filter(|n| n.shape.is_some() && n.category == Some(category))
            .fold((Vec3::ZERO, 0u32), |(s, c), n| (s + n.center(), c + 1));
        (count > 0).then(|| sum / count as f32)
    }
}

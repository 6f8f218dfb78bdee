use glam::Vec2;

/// Drawing surface size in the same units as pointer coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width.max(1.0) / self.height.max(1.0)
    }
}

/// Last pointer position in normalized device coordinates (+Y up).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub ndc: Vec2,
}

impl PointerState {
    /// Project pixel coordinates (origin top-left) into [-1, 1]². Points outside
    /// the viewport land outside that range; nothing is clamped.
    #[inline]
    pub fn from_pixels(px: f32, py: f32, viewport: Viewport) -> Self {
        let w = viewport.width.max(1.0);
        let h = viewport.height.max(1.0);
        Self {
            ndc: Vec2::new((px / w) * 2.0 - 1.0, -(py / h) * 2.0 + 1.0),
        }
    }

    #[inline]
    pub fn is_inside(&self) -> bool {
        self.ndc.x.abs() <= 1.0 && self.ndc.y.abs() <= 1.0
    }
}

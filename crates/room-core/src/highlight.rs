use crate::category::Category;

/// Pointer affordance shown over the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
}

impl Cursor {
    pub fn css(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Pointer => "pointer",
        }
    }
}

/// Per-category hover glow. At most one category is lit at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HighlightState {
    levels: [f32; Category::COUNT],
    cursor: Cursor,
}

impl HighlightState {
    pub fn reset(&mut self) {
        self.levels = [0.0; Category::COUNT];
        self.cursor = Cursor::Default;
    }

    /// Re-evaluate against the current hover target. Always clears first, so a
    /// pointer that leaves one object for another never leaves a stale glow.
    pub fn apply(&mut self, hovered: Option<Category>) -> Cursor {
        self.reset();
        if let Some(c) = hovered {
            self.levels[c.index()] = c.profile().highlight;
            self.cursor = Cursor::Pointer;
        }
        self.cursor
    }

    #[inline]
    pub fn level(&self, category: Category) -> f32 {
        self.levels[category.index()]
    }

    /// Emissive level for a node of the given category (untagged nodes never glow).
    #[inline]
    pub fn emissive(&self, category: Option<Category>) -> f32 {
        category.map(|c| self.level(c)).unwrap_or(0.0)
    }

    pub fn active(&self) -> Option<Category> {
        Category::ALL.into_iter().find(|c| self.level(*c) > 0.0)
    }

    #[inline]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
}

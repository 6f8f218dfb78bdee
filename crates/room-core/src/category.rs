//! Interaction roles and their per-category tuning.
//!
//! Every tagged scene object belongs to exactly one [`Category`]. All behavior
//! that differs between categories (how far the camera stops from the object,
//! which sound confirms a click, which panel opens) is looked up in a single
//! table instead of being branched on at each call site.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Papers,
    Mirror,
    Typewriter,
    Agent,
}

impl Category {
    pub const COUNT: usize = 4;
    pub const ALL: [Category; Category::COUNT] = [
        Category::Papers,
        Category::Mirror,
        Category::Typewriter,
        Category::Agent,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Papers => "papers",
            Category::Mirror => "mirror",
            Category::Typewriter => "typewriter",
            Category::Agent => "agent",
        }
    }

    #[inline]
    pub fn profile(self) -> &'static CategoryProfile {
        &PROFILES[self.index()]
    }
}

/// One-shot confirmation sounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Paper,
    Glass,
    TypewriterKey,
    Agent,
}

impl SoundCue {
    pub fn name(self) -> &'static str {
        match self {
            SoundCue::Paper => "paper",
            SoundCue::Glass => "glass",
            SoundCue::TypewriterKey => "typewriter-key",
            SoundCue::Agent => "agent",
        }
    }
}

/// Overlay panels. Papers opens a selection sub-menu which leads to the three
/// document panels; every other category owns exactly one panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayPanel {
    PapersSelection,
    Documentation,
    Team,
    Tokenomics,
    Social,
    Typewriter,
    AgentProfile,
}

impl OverlayPanel {
    pub const ALL: [OverlayPanel; 7] = [
        OverlayPanel::PapersSelection,
        OverlayPanel::Documentation,
        OverlayPanel::Team,
        OverlayPanel::Tokenomics,
        OverlayPanel::Social,
        OverlayPanel::Typewriter,
        OverlayPanel::AgentProfile,
    ];

    /// Category whose click leads to this panel.
    pub fn owner(self) -> Category {
        match self {
            OverlayPanel::PapersSelection
            | OverlayPanel::Documentation
            | OverlayPanel::Team
            | OverlayPanel::Tokenomics => Category::Papers,
            OverlayPanel::Social => Category::Mirror,
            OverlayPanel::Typewriter => Category::Typewriter,
            OverlayPanel::AgentProfile => Category::Agent,
        }
    }

    /// Panels reachable from the papers selection sub-menu.
    pub fn is_papers_document(self) -> bool {
        matches!(
            self,
            OverlayPanel::Documentation | OverlayPanel::Team | OverlayPanel::Tokenomics
        )
    }
}

/// A second object the zoom should keep in frame. The camera backs off along
/// its approach by `weight` times the distance between target and landmark.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Landmark {
    pub category: Category,
    pub weight: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CategoryProfile {
    /// Distance from the clicked point at which the zoom stops.
    pub standoff: f32,
    /// Added to the end position's height after the standoff is applied.
    pub vertical_offset: f32,
    /// Lower bound for the end position's height.
    pub min_height: Option<f32>,
    pub landmark: Option<Landmark>,
    /// Emissive grey level while hovered.
    pub highlight: f32,
    pub cue: SoundCue,
    pub cue_volume: f32,
    pub panel: OverlayPanel,
}

static PROFILES: [CategoryProfile; Category::COUNT] = [
    // Papers
    CategoryProfile {
        standoff: 1.7,
        vertical_offset: 0.0,
        min_height: None,
        landmark: None,
        highlight: 0.4,
        cue: SoundCue::Paper,
        cue_volume: 0.7,
        panel: OverlayPanel::PapersSelection,
    },
    // Mirror
    CategoryProfile {
        standoff: 2.6,
        vertical_offset: 0.0,
        min_height: Some(1.6),
        landmark: None,
        highlight: 0.267,
        cue: SoundCue::Glass,
        cue_volume: 0.6,
        panel: OverlayPanel::Social,
    },
    // Typewriter
    CategoryProfile {
        standoff: 1.7,
        vertical_offset: 0.1,
        min_height: Some(1.45),
        landmark: Some(Landmark {
            category: Category::Papers,
            weight: 0.15,
        }),
        highlight: 0.4,
        cue: SoundCue::TypewriterKey,
        cue_volume: 0.5,
        panel: OverlayPanel::Typewriter,
    },
    // Agent
    CategoryProfile {
        standoff: 1.4,
        vertical_offset: 0.15,
        min_height: None,
        landmark: None,
        highlight: 0.4,
        cue: SoundCue::Agent,
        cue_volume: 0.6,
        panel: OverlayPanel::AgentProfile,
    },
];

// DOM ids, render tuning and panel copy for the web front-end.
// Interaction constants (camera poses, durations, profiles) live in `room_core`.

// Host elements
pub const SCENE_CONTAINER_ID: &str = "scene-container";
pub const CANVAS_ID: &str = "scene-canvas";
pub const LOADING_SCREEN_ID: &str = "loading-screen";
pub const LOADING_TEXT_ID: &str = "loading-text";

// Panels (one per overlay, plus the papers sub-menu entries)
pub const PAPERS_SELECTION_ID: &str = "papers-selection";
pub const DOCUMENTATION_PANEL_ID: &str = "docs-panel";
pub const TEAM_PANEL_ID: &str = "team-panel";
pub const TOKENOMICS_PANEL_ID: &str = "tokenomics-panel";
pub const SOCIAL_PANEL_ID: &str = "social-panel";
pub const TYPEWRITER_PANEL_ID: &str = "typewriter-panel";
pub const TYPEWRITER_TEXT_ID: &str = "typewriter-text";
pub const AGENT_PANEL_ID: &str = "agent-panel";

// Papers sub-menu buttons
pub const OPEN_DOCUMENTATION_ID: &str = "open-docs";
pub const OPEN_TEAM_ID: &str = "open-team";
pub const OPEN_TOKENOMICS_ID: &str = "open-tokenomics";

// Every element with this class closes the open overlay.
pub const CLOSE_BUTTON_CLASS: &str = "close-overlay";
pub const BACK_BUTTON_CLASS: &str = "back-to-papers";
pub const HIDDEN_CLASS: &str = "hidden";

// <audio> elements
pub const PAPER_SOUND_ID: &str = "paper-sound";
pub const GLASS_SOUND_ID: &str = "glass-sound";
pub const TYPEWRITER_SOUND_ID: &str = "typewrite-sound";
pub const AGENT_SOUND_ID: &str = "agent-sound";

// Scene shading
pub const CLEAR_COLOR: [f64; 3] = [0.02, 0.02, 0.03];
pub const LIGHT_POSITION: [f32; 3] = [0.8, 1.9, -0.4]; // desk lamp
pub const AMBIENT_LIGHT: f32 = 0.35;
pub const SPHERE_SEGMENTS: u32 = 16;
pub const SPHERE_RINGS: u32 = 12;

pub const TYPEWRITER_TEXT: &str = "Welcome.\n\n\
The papers on the desk hold the documentation, the team and the tokenomics. \
The mirror leads to our socials. \
Close this sheet with Escape or the cross in the corner.";

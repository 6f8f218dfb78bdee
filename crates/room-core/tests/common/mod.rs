// Shared fixtures for the interaction tests: recording collaborators and the
// shipped scene descriptors.

#![allow(dead_code)]

use glam::Vec3;
use room_core::{
    AssetKind, Category, InteractionContext, InteractionDispatcher, OverlayHost, SceneConfig,
    SceneDescriptor, SceneError, SoundBoard, SoundCue, Viewport,
};

pub const VIEWPORT: Viewport = Viewport {
    width: 1280.0,
    height: 720.0,
};

pub const ROOM_JSON: &str = include_str!("../../../../assets/room.json");
pub const MIRROR_JSON: &str = include_str!("../../../../assets/mirror.json");
pub const TYPEWRITER_JSON: &str = include_str!("../../../../assets/typewriter.json");
pub const AGENT_JSON: &str = include_str!("../../../../assets/agent.json");

pub fn descriptor(kind: AssetKind) -> SceneDescriptor {
    let text = match kind {
        AssetKind::Room => ROOM_JSON,
        AssetKind::Mirror => MIRROR_JSON,
        AssetKind::Typewriter => TYPEWRITER_JSON,
        AssetKind::Agent => AGENT_JSON,
    };
    SceneDescriptor::from_json(kind, text).expect("shipped descriptor parses")
}

#[derive(Default)]
pub struct RecordingOverlays {
    pub opened: Vec<Category>,
    pub closed: Vec<Category>,
    pub loading_hidden: usize,
    pub loading_errors: Vec<String>,
    pub ticks: usize,
}

impl OverlayHost for RecordingOverlays {
    fn open(&mut self, category: Category, _now_ms: f64) {
        self.opened.push(category);
    }
    fn close(&mut self, category: Category) {
        self.closed.push(category);
    }
    fn hide_loading(&mut self) {
        self.loading_hidden += 1;
    }
    fn show_loading_error(&mut self, message: &str) {
        self.loading_errors.push(message.to_string());
    }
    fn tick(&mut self, _now_ms: f64) {
        self.ticks += 1;
    }
}

#[derive(Default)]
pub struct RecordingSounds {
    pub played: Vec<(SoundCue, f32)>,
    pub fail: bool,
}

impl SoundBoard for RecordingSounds {
    fn play(&mut self, cue: SoundCue, volume: f32) -> room_core::Result<()> {
        if self.fail {
            return Err(SceneError::AudioPlayback {
                cue: cue.name(),
                reason: "NotAllowedError".into(),
            });
        }
        self.played.push((cue, volume));
        Ok(())
    }
}

pub type TestDispatcher = InteractionDispatcher<RecordingOverlays, RecordingSounds>;

pub fn dispatcher() -> TestDispatcher {
    let ctx = InteractionContext::new(&SceneConfig::default(), VIEWPORT, 0.0);
    InteractionDispatcher::new(ctx, RecordingOverlays::default(), RecordingSounds::default())
}

/// Dispatcher with every shipped asset mounted.
pub fn loaded_dispatcher() -> TestDispatcher {
    let mut d = dispatcher();
    for kind in AssetKind::ALL {
        d.asset_loaded(kind, &descriptor(kind))
            .expect("shipped descriptor mounts");
    }
    d
}

/// Pixel position at which `world` appears from the current camera pose.
pub fn pixel_of(d: &TestDispatcher, world: Vec3) -> (f32, f32) {
    let ndc = d.context().camera_view().project(world);
    (
        (ndc.x + 1.0) * 0.5 * VIEWPORT.width,
        (1.0 - ndc.y) * 0.5 * VIEWPORT.height,
    )
}

/// Run frames at ~60 Hz from `from_ms` until `to_ms` inclusive, returning the
/// last timestamp used.
pub fn run_frames(d: &mut TestDispatcher, from_ms: f64, to_ms: f64) -> f64 {
    let mut now = from_ms;
    while now < to_ms {
        now = (now + 16.0).min(to_ms);
        d.frame(now, 0.016);
    }
    now
}

pub const PAPERS_POINT: Vec3 = Vec3::new(0.82, 1.2, 0.1);
pub const AGENT_HEAD: Vec3 = Vec3::new(2.0, 1.61, 0.3);
pub const TYPEWRITER_BODY: Vec3 = Vec3::new(1.15, 1.278, -1.63);

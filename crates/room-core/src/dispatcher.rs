//! Pointer, click and frame handling for the whole interaction subsystem.
//!
//! [`InteractionContext`] owns every piece of mutable scene state; the
//! [`InteractionDispatcher`] routes host events through it and calls out to the
//! overlay and sound collaborators.

use crate::assets::{self, AssetBoard, AssetKind, AssetStatus, SceneDescriptor};
use crate::camera::Camera;
use crate::category::{Category, SoundCue};
use crate::config::SceneConfig;
use crate::constants::{BASE_POSITION, BASE_TARGET};
use crate::director::{CameraDirector, Completion};
use crate::error::{Result, SceneError};
use crate::highlight::{Cursor, HighlightState};
use crate::loading::LoadingGate;
use crate::picking::{pick_at, Hit};
use crate::pointer::{PointerState, Viewport};
use crate::scene::Scene;
use glam::Vec3;

/// DOM-side panels and the loading screen.
pub trait OverlayHost {
    fn open(&mut self, category: Category, now_ms: f64);
    fn close(&mut self, category: Category);
    fn hide_loading(&mut self);
    fn show_loading_error(&mut self, message: &str);
    /// Per-frame hook for animated panel content.
    fn tick(&mut self, _now_ms: f64) {}
}

/// Fire-and-forget sound effects.
pub trait SoundBoard {
    fn play(&mut self, cue: SoundCue, volume: f32) -> Result<()>;
}

pub struct InteractionContext {
    pub scene: Scene,
    pub camera: CameraDirector,
    pub highlight: HighlightState,
    pub pointer: PointerState,
    pub viewport: Viewport,
    pub assets: AssetBoard,
    pub loading: LoadingGate,
    pub open_overlay: Option<Category>,
}

impl InteractionContext {
    pub fn new(config: &SceneConfig, viewport: Viewport, now_ms: f64) -> Self {
        Self {
            scene: Scene::new(),
            camera: CameraDirector::new(BASE_POSITION, BASE_TARGET),
            highlight: HighlightState::default(),
            pointer: PointerState::default(),
            viewport,
            assets: AssetBoard::default(),
            loading: LoadingGate::new(now_ms, config.loading_min_ms),
            open_overlay: None,
        }
    }

    /// Camera as currently posed by the director.
    pub fn camera_view(&self) -> Camera {
        let s = self.camera.state();
        Camera::looking_at(s.position, s.look_at, self.viewport.aspect())
    }

    pub fn hit_under_pointer(&self) -> Option<Hit> {
        pick_at(&self.scene, &self.camera_view(), &self.pointer)
    }
}

pub struct InteractionDispatcher<O, S> {
    ctx: InteractionContext,
    overlays: O,
    sounds: S,
}

impl<O: OverlayHost, S: SoundBoard> InteractionDispatcher<O, S> {
    pub fn new(ctx: InteractionContext, overlays: O, sounds: S) -> Self {
        Self {
            ctx,
            overlays,
            sounds,
        }
    }

    #[inline]
    pub fn context(&self) -> &InteractionContext {
        &self.ctx
    }

    #[inline]
    pub fn context_mut(&mut self) -> &mut InteractionContext {
        &mut self.ctx
    }

    #[inline]
    pub fn overlays(&self) -> &O {
        &self.overlays
    }

    #[inline]
    pub fn overlays_mut(&mut self) -> &mut O {
        &mut self.overlays
    }

    #[inline]
    pub fn sounds(&self) -> &S {
        &self.sounds
    }

    #[inline]
    pub fn sounds_mut(&mut self) -> &mut S {
        &mut self.sounds
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.ctx.camera.is_locked()
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.ctx.viewport = viewport;
    }

    /// Hover pass: clear every glow, then light the object under the pointer.
    pub fn pointer_moved(&mut self, px: f32, py: f32) -> Cursor {
        self.ctx.pointer = PointerState::from_pixels(px, py, self.ctx.viewport);
        self.ctx.camera.follow_pointer(self.ctx.pointer.ndc);
        // An open panel covers the canvas.
        let hovered = if self.ctx.open_overlay.is_some() {
            None
        } else {
            self.ctx.hit_under_pointer().map(|h| h.category)
        };
        self.ctx.highlight.apply(hovered)
    }

    /// Confirmed click. Returns the category whose zoom started, if any.
    pub fn clicked(&mut self, px: f32, py: f32, now_ms: f64) -> Option<Category> {
        if self.is_locked() {
            log::debug!("[click] ignored, camera in transition");
            return None;
        }
        if self.ctx.open_overlay.is_some() {
            return None;
        }
        self.ctx.pointer = PointerState::from_pixels(px, py, self.ctx.viewport);
        self.ctx.camera.follow_pointer(self.ctx.pointer.ndc);

        let hit = self.ctx.hit_under_pointer()?;
        let profile = hit.category.profile();
        log::info!("[click] {} at distance {:.2}", hit.category.name(), hit.distance);
        if let Err(e) = self.sounds.play(profile.cue, profile.cue_volume) {
            log::warn!("[audio] {}", e);
        }
        let landmark = self.landmark_point(hit.category);
        self.ctx
            .camera
            .start_zoom(now_ms, hit.category, hit.point, landmark);
        self.ctx.highlight.reset();
        Some(hit.category)
    }

    fn landmark_point(&self, category: Category) -> Option<Vec3> {
        let landmark = category.profile().landmark?;
        let point = self.ctx.scene.center_of(landmark.category);
        if point.is_none() {
            log::debug!("[click] {}", SceneError::ReferenceNotReady(landmark.category));
        }
        point
    }

    /// Close the open panel and glide back to the base pose.
    pub fn close_overlay(&mut self, now_ms: f64) -> bool {
        let Some(category) = self.ctx.open_overlay.take() else {
            return false;
        };
        log::info!("[overlay] close {}", category.name());
        self.overlays.close(category);
        self.ctx.camera.start_return(now_ms);
        true
    }

    /// One display frame: loading barrier, camera, then panel animation.
    pub fn frame(&mut self, now_ms: f64, dt_sec: f32) -> Option<Completion> {
        if self.ctx.loading.poll(now_ms) {
            log::info!("[assets] primary scene ready, hiding loading screen");
            self.overlays.hide_loading();
        }
        let done = self.ctx.camera.tick(now_ms, dt_sec);
        match done {
            Some(Completion::Zoomed(category)) => {
                log::info!("[overlay] open {}", category.name());
                self.ctx.camera.set_drift_enabled(false);
                // The panel covers the object; no pointermove will reach the canvas.
                self.ctx.highlight.reset();
                self.ctx.open_overlay = Some(category);
                self.overlays.open(category, now_ms);
            }
            Some(Completion::Returned) => self.ctx.camera.set_drift_enabled(true),
            None => {}
        }
        self.overlays.tick(now_ms);
        done
    }

    /// Mount a fetched descriptor. Returns the number of nodes added.
    pub fn asset_loaded(&mut self, kind: AssetKind, desc: &SceneDescriptor) -> Result<usize> {
        match assets::mount(&mut self.ctx.scene, kind, desc) {
            Ok(ids) => {
                log::info!("[assets] {} loaded ({} nodes)", kind.name(), ids.len());
                self.ctx
                    .assets
                    .set(kind, AssetStatus::Ready { nodes: ids.len() });
                if kind.is_primary() {
                    self.ctx.loading.mark_primary_ready();
                }
                Ok(ids.len())
            }
            Err(e) => {
                self.asset_failed(kind, e.clone());
                Err(e)
            }
        }
    }

    /// Record a failed load. Other assets are unaffected.
    pub fn asset_failed(&mut self, kind: AssetKind, error: SceneError) {
        log::error!("[assets] {}", error);
        self.ctx.assets.set(
            kind,
            AssetStatus::Failed {
                reason: error.to_string(),
            },
        );
        let message = format!("Error loading {} model", kind.name());
        if let Some(text) = self.ctx.loading.fail(kind.is_primary(), message) {
            self.overlays.show_loading_error(text);
        }
    }

    pub fn asset_progress(&self, kind: AssetKind, loaded: u64, total: Option<u64>) {
        match total {
            Some(t) if t > 0 => log::debug!(
                "[assets] {} {:.0}%",
                kind.name(),
                loaded as f64 / t as f64 * 100.0
            ),
            _ => log::debug!("[assets] {} {} bytes", kind.name(), loaded),
        }
    }
}

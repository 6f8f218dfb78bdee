//! Camera state machine.
//!
//! `Idle` drifts toward a pointer-derived parallax target every frame.
//! `ZoomingToTarget` and `ReturningToBase` run a single [`AnimationJob`]; a new
//! job replaces whatever job was in flight, nothing is queued or blended.
//! While a job exists the camera is locked: pointer-driven drift is ignored.

use crate::category::{Category, CategoryProfile};
use crate::constants::{
    DRIFT_FOLLOW_PER_FRAME, DRIFT_GAIN_X, DRIFT_GAIN_Y, DRIFT_MAX_DT_SEC, DRIFT_REFERENCE_HZ,
    RETURN_DURATION_MS, ZOOM_DURATION_MS,
};
use crate::easing::Easing;
use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraMode {
    #[default]
    Idle,
    ZoomingToTarget,
    ReturningToBase,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    pub position: Vec3,
    pub look_at: Vec3,
    pub mode: CameraMode,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationJob {
    pub start_position: Vec3,
    pub end_position: Vec3,
    pub start_look_at: Vec3,
    pub end_look_at: Vec3,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
    /// Category whose overlay opens when a zoom lands; `None` for returns.
    pub on_complete: Option<Category>,
}

impl AnimationJob {
    /// Linear progress in [0, 1].
    #[inline]
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    /// Camera position and look-at at `now_ms`. Exact endpoints at t = 1.
    pub fn sample(&self, now_ms: f64) -> (Vec3, Vec3) {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            return (self.end_position, self.end_look_at);
        }
        let e = self.easing.apply(t);
        (
            self.start_position.lerp(self.end_position, e),
            self.start_look_at.lerp(self.end_look_at, e),
        )
    }
}

/// What a finished one-shot transition hands back to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Zoomed(Category),
    Returned,
}

/// Where a zoom toward `target` should stop, starting from `start`.
///
/// The camera ends `standoff` short of the target along the start→target line,
/// then takes the category's height offset, backs off further when a landmark
/// must stay in frame, and finally respects the minimum height.
pub fn zoom_end_position(
    start: Vec3,
    target: Vec3,
    profile: &CategoryProfile,
    landmark: Option<Vec3>,
) -> Vec3 {
    let dir = (target - start).normalize_or_zero();
    if dir == Vec3::ZERO {
        return start;
    }
    let mut end = target - dir * profile.standoff;
    end.y += profile.vertical_offset;
    if let (Some(l), Some(point)) = (profile.landmark, landmark) {
        end -= dir * (point - target).length() * l.weight;
    }
    if let Some(min_y) = profile.min_height {
        end.y = end.y.max(min_y);
    }
    end
}

#[derive(Clone, Debug)]
pub struct CameraDirector {
    state: CameraState,
    base_position: Vec3,
    base_target: Vec3,
    job: Option<AnimationJob>,
    drift_target: Vec3,
    drift_enabled: bool,
}

impl CameraDirector {
    pub fn new(base_position: Vec3, base_target: Vec3) -> Self {
        Self {
            state: CameraState {
                position: base_position,
                look_at: base_target,
                mode: CameraMode::Idle,
            },
            base_position,
            base_target,
            job: None,
            drift_target: base_position,
            drift_enabled: true,
        }
    }

    #[inline]
    pub fn state(&self) -> &CameraState {
        &self.state
    }

    #[inline]
    pub fn job(&self) -> Option<&AnimationJob> {
        self.job.as_ref()
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.job.is_some()
    }

    #[inline]
    pub fn drift_target(&self) -> Vec3 {
        self.drift_target
    }

    #[inline]
    pub fn base(&self) -> (Vec3, Vec3) {
        (self.base_position, self.base_target)
    }

    /// Retarget the idle parallax from the pointer offset. Ignored while locked.
    pub fn follow_pointer(&mut self, ndc: Vec2) {
        if self.is_locked() {
            return;
        }
        self.drift_target =
            self.base_position + Vec3::new(ndc.x * DRIFT_GAIN_X, ndc.y * DRIFT_GAIN_Y, 0.0);
    }

    /// Suspend or resume the idle drift (held while an overlay is open).
    pub fn set_drift_enabled(&mut self, enabled: bool) {
        self.drift_enabled = enabled;
    }

    #[inline]
    pub fn drift_enabled(&self) -> bool {
        self.drift_enabled
    }

    /// Fly toward `target`, stopping per the category's profile. Replaces any
    /// job in flight.
    pub fn start_zoom(
        &mut self,
        now_ms: f64,
        category: Category,
        target: Vec3,
        landmark: Option<Vec3>,
    ) {
        let start = self.state.position;
        let end = zoom_end_position(start, target, category.profile(), landmark);
        log::info!(
            "[camera] zoom to {} ({:.2},{:.2},{:.2}) -> ({:.2},{:.2},{:.2})",
            category.name(),
            target.x,
            target.y,
            target.z,
            end.x,
            end.y,
            end.z
        );
        // The look-at snaps to the target and stays there for the whole flight.
        self.job = Some(AnimationJob {
            start_position: start,
            end_position: end,
            start_look_at: target,
            end_look_at: target,
            start_ms: now_ms,
            duration_ms: ZOOM_DURATION_MS,
            easing: Easing::Smoothstep,
            on_complete: Some(category),
        });
        self.state.look_at = target;
        self.state.mode = CameraMode::ZoomingToTarget;
    }

    /// Glide back to the base pose. Replaces any job in flight.
    pub fn start_return(&mut self, now_ms: f64) {
        log::info!("[camera] return to base");
        self.job = Some(AnimationJob {
            start_position: self.state.position,
            end_position: self.base_position,
            start_look_at: self.state.look_at,
            end_look_at: self.base_target,
            start_ms: now_ms,
            duration_ms: RETURN_DURATION_MS,
            easing: Easing::EaseOutCubic,
            on_complete: None,
        });
        self.state.mode = CameraMode::ReturningToBase;
    }

    /// Advance one frame. Returns the completion of a one-shot transition on
    /// the frame it lands, exactly once.
    pub fn tick(&mut self, now_ms: f64, dt_sec: f32) -> Option<Completion> {
        let Some(job) = self.job else {
            self.drift(dt_sec);
            return None;
        };
        let (position, look_at) = job.sample(now_ms);
        self.state.position = position;
        self.state.look_at = look_at;
        if job.progress(now_ms) < 1.0 {
            return None;
        }
        self.job = None;
        self.state.mode = CameraMode::Idle;
        Some(match job.on_complete {
            Some(c) => Completion::Zoomed(c),
            None => Completion::Returned,
        })
    }

    fn drift(&mut self, dt_sec: f32) {
        if !self.drift_enabled {
            return;
        }
        // Frame-rate independent form of "close 5% of the gap per 60 Hz frame".
        let frames = dt_sec.clamp(0.0, DRIFT_MAX_DT_SEC) * DRIFT_REFERENCE_HZ;
        let alpha = 1.0 - (1.0 - DRIFT_FOLLOW_PER_FRAME).powf(frames);
        self.state.position = self.state.position.lerp(self.drift_target, alpha);
        self.state.look_at = self.base_target;
    }
}

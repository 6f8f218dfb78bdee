use glam::Vec3;

// Camera tuning shared by the director, the picking camera and the renderer.

// Base pose the camera rests at and returns to after an overlay closes
pub const BASE_POSITION: Vec3 = Vec3::new(-1.5, 1.9, 0.8);
pub const BASE_TARGET: Vec3 = Vec3::new(0.2, 1.3, -0.3);

// Projection
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// One-shot transitions (milliseconds)
pub const ZOOM_DURATION_MS: f64 = 3000.0;
pub const RETURN_DURATION_MS: f64 = 1500.0;

// Idle parallax-follow
pub const DRIFT_GAIN_X: f32 = 0.5; // world units per unit of NDC x
pub const DRIFT_GAIN_Y: f32 = 0.3; // world units per unit of NDC y
pub const DRIFT_FOLLOW_PER_FRAME: f32 = 0.05; // fraction of the gap closed per reference frame
pub const DRIFT_REFERENCE_HZ: f32 = 60.0;
pub const DRIFT_MAX_DT_SEC: f32 = 0.25; // tab-switch guard

// Loading overlay stays up at least this long
pub const LOADING_MIN_MS: f64 = 3000.0;

// Typewriter panel reveal
pub const REVEAL_LEAD_IN_MS: f64 = 500.0;
pub const REVEAL_MIN_DELAY_MS: f64 = 20.0;
pub const REVEAL_MAX_DELAY_MS: f64 = 65.0;
pub const REVEAL_SOUND_EVERY: usize = 3;
pub const REVEAL_SOUND_VOLUME: f32 = 0.2;

// Where scene descriptors are fetched from, relative to the page
pub const DEFAULT_ASSET_ROOT: &str = "assets/";

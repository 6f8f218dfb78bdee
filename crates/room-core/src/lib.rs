//! Interaction core for the furnished-room scene.
//!
//! Pointer projection, hit testing, hover highlighting and the camera state
//! machine, plus the small amount of bookkeeping around them (asset loads,
//! the loading barrier, the typewriter reveal). Nothing here touches the DOM
//! or the GPU, so the web front-end drives it and tests run on the host.

pub mod assets;
pub mod camera;
pub mod category;
pub mod config;
pub mod constants;
pub mod director;
pub mod dispatcher;
pub mod easing;
pub mod error;
pub mod highlight;
pub mod loading;
pub mod picking;
pub mod pointer;
pub mod reveal;
pub mod scene;

pub use assets::{AssetBoard, AssetKind, AssetStatus, SceneDescriptor};
pub use camera::{Camera, Ray};
pub use category::{Category, CategoryProfile, OverlayPanel, SoundCue};
pub use config::SceneConfig;
pub use director::{AnimationJob, CameraDirector, CameraMode, CameraState, Completion};
pub use dispatcher::{InteractionContext, InteractionDispatcher, OverlayHost, SoundBoard};
pub use error::{Result, SceneError};
pub use highlight::{Cursor, HighlightState};
pub use loading::LoadingGate;
pub use picking::{Hit, Intersection};
pub use pointer::{PointerState, Viewport};
pub use reveal::{RevealStep, TypewriterReveal};
pub use scene::{NewNode, NodeId, Scene, SceneNode, Shape};

use crate::category::Category;
use thiserror::Error;

/// Everything that can go wrong in the scene, from fatal startup problems to
/// failures that are logged and tolerated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    /// A required DOM mount point is absent. Fatal at startup.
    #[error("missing host element #{0}")]
    MissingHostElement(String),

    #[error("failed to load {asset}: {reason}")]
    AssetLoad { asset: &'static str, reason: String },

    #[error("malformed {asset} descriptor: {reason}")]
    AssetFormat { asset: &'static str, reason: String },

    #[error("{asset} descriptor: node `{node}` names unknown parent `{parent}`")]
    UnknownParent {
        asset: &'static str,
        node: String,
        parent: String,
    },

    /// An interaction referenced an object whose asset has not loaded yet.
    #[error("{} is not loaded yet", .0.name())]
    ReferenceNotReady(Category),

    #[error("audio cue `{cue}` failed: {reason}")]
    AudioPlayback { cue: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, SceneError>;

//! Scene backend capability
//!
//! The sim never draws. It calls a backend to create, move, and delete the
//! visual proxies for the actor and the barriers, and reads back the extent
//! a proxy was realized with. Alternate implementations cover the
//! presentation variants (primitive shapes, imported models, headless); the
//! sim is written once against this trait.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

pub mod headless;

pub use headless::HeadlessScene;

/// Opaque handle to the actor's proxy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorHandle(pub u64);

/// Opaque handle to one barrier proxy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObstacleHandle(pub u64);

/// Width and height of a proxy as realized by the backend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Failure to materialize a proxy (e.g. an asset variant failed to load)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneError {
    message: String,
}

impl SceneError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scene backend: {}", self.message)
    }
}

impl std::error::Error for SceneError {}

/// Capability the sim consumes for visual representation.
///
/// Creates are fallible - a backend that loads assets may fail to produce a
/// proxy. Moves and deletes are fire-and-forget: the sim treats them as
/// synchronous, non-failing side effects and never retries.
pub trait SceneBackend {
    /// Create the actor proxy at the backend's default position
    fn create_actor(&mut self) -> Result<ActorHandle, SceneError>;

    fn move_actor(&mut self, handle: ActorHandle, pos: Vec2);

    fn delete_actor(&mut self, handle: ActorHandle);

    /// Create one barrier proxy with the requested extent at `pos`
    fn create_obstacle(&mut self, extent: Extent, pos: Vec2) -> Result<ObstacleHandle, SceneError>;

    fn move_obstacle(&mut self, handle: ObstacleHandle, pos: Vec2);

    fn delete_obstacle(&mut self, handle: ObstacleHandle);

    /// Extent the proxy was realized with. Backends that quantize or swap
    /// geometry report the real size here; collision uses this, not the
    /// requested extent.
    fn query_extent(&self, handle: ObstacleHandle) -> Extent;
}

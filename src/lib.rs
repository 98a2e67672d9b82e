//! Gap Glider - a side-scrolling gap-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, spawning, collisions, run state)
//! - `scene`: Scene backend capability the sim drives for its visual proxies
//! - `config`: Data-driven game tuning

pub mod config;
pub mod scene;
pub mod sim;

pub use config::SimConfig;
pub use scene::{ActorHandle, Extent, HeadlessScene, ObstacleHandle, SceneBackend, SceneError};
pub use sim::{EndReason, Engine, Phase, SimEvent, Snapshot, StartError};

/// Game configuration constants
pub mod consts {
    /// Tick period the host drives the engine at (milliseconds)
    pub const TICK_PERIOD_MS: u64 = 50;

    /// Course dimensions - the playfield spans y in [0, 15], actor at x = 0
    pub const COURSE_HEIGHT: f32 = 15.0;
    pub const FLOOR_Y: f32 = 0.0;

    /// Actor defaults
    pub const ACTOR_SPAWN_Y: f32 = 5.0;
    /// Half-extent margin around the actor center, both axes
    pub const ACTOR_MARGIN: f32 = 0.5;

    /// Vertical kinematics (units per tick)
    pub const GRAVITY: f32 = -0.3;
    pub const JUMP_FORCE: f32 = 0.8;

    /// Obstacle stream
    pub const SPAWN_INTERVAL_TICKS: u32 = 20;
    pub const SPAWN_X: f32 = 10.0;
    pub const RECYCLE_X: f32 = -10.0;
    pub const SCROLL_STEP: f32 = 0.5;
    pub const OBSTACLE_WIDTH: f32 = 2.0;

    /// Gap geometry
    pub const GAP_SIZE: f32 = 4.0;
    pub const GAP_CENTER_MIN: f32 = 5.0;
    pub const GAP_CENTER_MAX: f32 = 10.0;
}

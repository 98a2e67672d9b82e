//! Data-driven simulation tuning
//!
//! Every constant the sim consumes, gathered into one serializable struct so
//! hosts can load a tweaked JSON profile. `Default` is the canonical arcade
//! tuning from [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Simulation tuning knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Velocity change per tick (negative = down)
    pub gravity: f32,
    /// Velocity a jump overrides to (positive = up)
    pub jump_force: f32,
    /// Actor position at or below this ends the run
    pub floor_y: f32,
    /// Total course height; doubles as the ceiling
    pub course_height: f32,
    /// Actor spawn height at run start
    pub actor_spawn_y: f32,
    /// Half-extent collision margin around the actor center
    pub actor_margin: f32,
    /// Ticks between obstacle pair spawns
    pub spawn_interval_ticks: u32,
    /// Horizontal position new pairs appear at
    pub spawn_x: f32,
    /// Pairs at or past this x are recycled and scored
    pub recycle_x: f32,
    /// Horizontal distance every pair scrolls per tick
    pub scroll_step: f32,
    /// Vertical gap between the members of a pair
    pub gap_size: f32,
    /// Gap center sample range (clamped so the gap stays inside the course)
    pub gap_center_min: f32,
    pub gap_center_max: f32,
    /// Horizontal extent of each barrier
    pub obstacle_width: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            floor_y: FLOOR_Y,
            course_height: COURSE_HEIGHT,
            actor_spawn_y: ACTOR_SPAWN_Y,
            actor_margin: ACTOR_MARGIN,
            spawn_interval_ticks: SPAWN_INTERVAL_TICKS,
            spawn_x: SPAWN_X,
            recycle_x: RECYCLE_X,
            scroll_step: SCROLL_STEP,
            gap_size: GAP_SIZE,
            gap_center_min: GAP_CENTER_MIN,
            gap_center_max: GAP_CENTER_MAX,
            obstacle_width: OBSTACLE_WIDTH,
        }
    }
}

impl SimConfig {
    /// The ceiling is the top of the course
    #[inline]
    pub fn ceiling(&self) -> f32 {
        self.course_height
    }

    /// Parse a tuning profile from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize this profile to JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

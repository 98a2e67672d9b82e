//! Run state and core simulation types
//!
//! Everything the engine owns between ticks lives here. The scene backend
//! only ever sees handles and positions; these types are the source of truth.

use glam::Vec2;
use serde::Serialize;

use crate::scene::{ActorHandle, Extent, ObstacleHandle};

/// Current phase of the run state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// No run yet, or torn down by quit
    Idle,
    /// Active run
    Running,
    /// Run ended; the terminal frame stays in place until restart or quit
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EndReason {
    HitFloor,
    HitCeiling,
    HitObstacle,
}

/// The controlled falling body
#[derive(Debug, Clone)]
pub struct Actor {
    pub handle: ActorHandle,
    /// x stays fixed at 0; only y integrates
    pub pos: Vec2,
    /// Vertical velocity (units/tick, negative = falling)
    pub vel: f32,
}

impl Actor {
    pub fn new(handle: ActorHandle, spawn_y: f32) -> Self {
        Self {
            handle,
            pos: Vec2::new(0.0, spawn_y),
            vel: 0.0,
        }
    }
}

/// One barrier of a pair
#[derive(Debug, Clone)]
pub struct Barrier {
    pub handle: ObstacleHandle,
    /// Realized extent, read back from the backend at spawn
    pub extent: Extent,
    /// Vertical center, fixed for the pair's lifetime
    pub y: f32,
}

impl Barrier {
    /// Position of this barrier when its pair sits at `x`
    #[inline]
    pub fn pos(&self, x: f32) -> Vec2 {
        Vec2::new(x, self.y)
    }
}

/// Top and bottom barriers sharing one horizontal position and framing a gap.
///
/// The pair's `x` is the single source of truth for both members, so they
/// cannot desynchronize while scrolling.
#[derive(Debug, Clone)]
pub struct ObstaclePair {
    pub x: f32,
    pub gap_center: f32,
    pub top: Barrier,
    pub bottom: Barrier,
}

/// Mutable core state owned by the engine
#[derive(Debug, Clone)]
pub struct SimState {
    pub phase: Phase,
    pub score: u32,
    /// Ticks since the current run started
    pub time_ticks: u64,
    /// Ticks since the last spawn
    pub spawn_clock: u32,
    pub actor: Option<Actor>,
    /// Ordered by spawn time; front = oldest = leftmost
    pub pairs: Vec<ObstaclePair>,
    pub end_reason: Option<EndReason>,
}

impl SimState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            score: 0,
            time_ticks: 0,
            spawn_clock: 0,
            actor: None,
            pairs: Vec::new(),
            end_reason: None,
        }
    }
}

impl Default for SimState {
    fn default() -> Self {
        Self::new()
    }
}

/// Actor state as seen by the presentation host
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActorView {
    pub pos: Vec2,
    pub vel: f32,
}

/// Pair geometry as seen by the presentation host
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PairView {
    pub x: f32,
    pub gap_center: f32,
    pub top: Extent,
    pub bottom: Extent,
}

/// Read-only state snapshot, pulled by the host after every command and tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub score: u32,
    pub tick: u64,
    pub end_reason: Option<EndReason>,
    pub actor: Option<ActorView>,
    pub pairs: Vec<PairView>,
}

/// Discrete notification for the host, drained after commands and ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SimEvent {
    /// A run began (fresh actor, score reset)
    Started,
    /// A pair was recycled behind the actor
    Scored { total: u32 },
    /// The run ended; the terminal frame is still visible
    Ended { reason: EndReason, score: u32 },
    /// The session was torn down to idle
    Stopped,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state() {
        let state = SimState::new();
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.spawn_clock, 0);
        assert!(state.actor.is_none());
        assert!(state.pairs.is_empty());
        assert!(state.end_reason.is_none());
    }

    #[test]
    fn test_actor_spawns_at_rest() {
        let actor = Actor::new(ActorHandle(1), 5.0);
        assert_eq!(actor.pos, Vec2::new(0.0, 5.0));
        assert_eq!(actor.vel, 0.0);
    }

    #[test]
    fn test_barrier_pos_follows_pair_x() {
        let barrier = Barrier {
            handle: ObstacleHandle(7),
            extent: Extent::new(2.0, 5.5),
            y: 12.25,
        };
        assert_eq!(barrier.pos(10.0), Vec2::new(10.0, 12.25));
        assert_eq!(barrier.pos(-3.5), Vec2::new(-3.5, 12.25));
    }
}

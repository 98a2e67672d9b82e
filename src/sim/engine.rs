//! Engine command surface and fixed-timestep update
//!
//! One engine instance owns all run state; nothing lives in globals. The
//! presentation host drives it: `start`/`jump`/`quit` from input, `tick`
//! from a fixed cadence ([`crate::consts::TICK_PERIOD_MS`]). The engine
//! holds no timer of its own - only the logical tick contract.

use std::fmt;

use glam::Vec2;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::{first_hit, out_of_bounds};
use super::spawn::sample_pair;
use super::state::{
    Actor, ActorView, Barrier, EndReason, ObstaclePair, PairView, Phase, SimEvent, SimState,
    Snapshot,
};
use crate::config::SimConfig;
use crate::scene::{ActorHandle, Extent, SceneBackend, SceneError};

/// Failure to begin a run. The engine is left Idle with no live proxies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartError {
    /// The backend could not create the actor proxy
    Actor(SceneError),
}

impl fmt::Display for StartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartError::Actor(err) => write!(f, "failed to start: {err}"),
        }
    }
}

impl std::error::Error for StartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartError::Actor(err) => Some(err),
        }
    }
}

/// The simulation engine: run state machine, kinematics, obstacle stream,
/// collision, and scoring, wired to a scene backend for visual proxies.
pub struct Engine<B: SceneBackend> {
    config: SimConfig,
    backend: B,
    state: SimState,
    rng: Pcg32,
    events: Vec<SimEvent>,
}

impl<B: SceneBackend> Engine<B> {
    /// A given seed reproduces every gap sequence of the session.
    pub fn new(config: SimConfig, backend: B, seed: u64) -> Self {
        Self {
            config,
            backend,
            state: SimState::new(),
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// The scene backend, for hosts that render from it directly
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Begin a run. Callable from any phase; a start while Running is a
    /// full restart. On error the engine is Idle with no live proxies.
    pub fn start(&mut self) -> Result<(), StartError> {
        self.teardown();

        let handle = match self.backend.create_actor() {
            Ok(handle) => handle,
            Err(err) => {
                warn!("start refused: {err}");
                return Err(StartError::Actor(err));
            }
        };
        let spawn = Vec2::new(0.0, self.config.actor_spawn_y);
        self.backend.move_actor(handle, spawn);

        self.state.actor = Some(Actor::new(handle, self.config.actor_spawn_y));
        self.state.phase = Phase::Running;
        self.events.push(SimEvent::Started);
        info!("run started");
        Ok(())
    }

    /// Upward impulse: overrides the current velocity with the jump force,
    /// so jump height is independent of fall speed. No-op unless Running.
    pub fn jump(&mut self) {
        if self.state.phase != Phase::Running {
            return;
        }
        if let Some(actor) = &mut self.state.actor {
            actor.vel = self.config.jump_force;
        }
    }

    /// Tear the session down to Idle. Safe from any phase; a fresh `start`
    /// is always valid afterwards.
    pub fn quit(&mut self) {
        self.teardown();
        self.events.push(SimEvent::Stopped);
        info!("session reset");
    }

    /// Advance one fixed timestep. No-op unless Running.
    pub fn tick(&mut self) {
        if self.state.phase != Phase::Running {
            return;
        }
        self.state.time_ticks += 1;

        let Some((handle, pos)) = self.integrate_actor() else {
            return;
        };
        self.backend.move_actor(handle, pos);

        if let Some(reason) = out_of_bounds(pos.y, self.config.floor_y, self.config.ceiling()) {
            self.game_over(reason);
            return;
        }

        self.scroll_and_recycle();

        self.state.spawn_clock += 1;
        if self.state.spawn_clock >= self.config.spawn_interval_ticks {
            self.state.spawn_clock = 0;
            self.spawn_pair();
        }

        if let Some(hit) = first_hit(&self.state.pairs, pos, self.config.actor_margin) {
            debug!("actor hit barrier {:?}", hit.handle);
            self.game_over(EndReason::HitObstacle);
        }
    }

    /// Read-only state for the host's display refresh
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.state.phase,
            score: self.state.score,
            tick: self.state.time_ticks,
            end_reason: self.state.end_reason,
            actor: self.state.actor.as_ref().map(|actor| ActorView {
                pos: actor.pos,
                vel: actor.vel,
            }),
            pairs: self
                .state
                .pairs
                .iter()
                .map(|pair| PairView {
                    x: pair.x,
                    gap_center: pair.gap_center,
                    top: pair.top.extent,
                    bottom: pair.bottom.extent,
                })
                .collect(),
        }
    }

    /// Take every notification accumulated since the last drain
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    fn integrate_actor(&mut self) -> Option<(ActorHandle, Vec2)> {
        let actor = self.state.actor.as_mut()?;
        actor.vel += self.config.gravity;
        actor.pos.y += actor.vel;
        Some((actor.handle, actor.pos))
    }

    fn scroll_and_recycle(&mut self) {
        for pair in &mut self.state.pairs {
            pair.x -= self.config.scroll_step;
            self.backend.move_obstacle(pair.top.handle, pair.top.pos(pair.x));
            self.backend
                .move_obstacle(pair.bottom.handle, pair.bottom.pos(pair.x));
        }

        // Front of the sequence is oldest and leftmost; every pair at or
        // past the threshold scores exactly once, even several per tick.
        while let Some(front) = self.state.pairs.first() {
            if front.x > self.config.recycle_x {
                break;
            }
            let pair = self.state.pairs.remove(0);
            self.backend.delete_obstacle(pair.top.handle);
            self.backend.delete_obstacle(pair.bottom.handle);
            self.state.score += 1;
            self.events.push(SimEvent::Scored {
                total: self.state.score,
            });
            debug!("pair recycled, score {}", self.state.score);
        }
    }

    fn spawn_pair(&mut self) {
        let geom = sample_pair(&self.config, &mut self.rng);
        let x = self.config.spawn_x;
        let width = self.config.obstacle_width;

        let top = match self.backend.create_obstacle(
            Extent::new(width, geom.top_height),
            Vec2::new(x, geom.top_y),
        ) {
            Ok(handle) => handle,
            Err(err) => {
                warn!("spawn skipped: {err}");
                return;
            }
        };
        let bottom = match self.backend.create_obstacle(
            Extent::new(width, geom.bottom_height),
            Vec2::new(x, geom.bottom_y),
        ) {
            Ok(handle) => handle,
            Err(err) => {
                // No partial pair: drop the member that did materialize.
                self.backend.delete_obstacle(top);
                warn!("spawn skipped: {err}");
                return;
            }
        };

        self.state.pairs.push(ObstaclePair {
            x,
            gap_center: geom.gap_center,
            top: Barrier {
                handle: top,
                extent: self.backend.query_extent(top),
                y: geom.top_y,
            },
            bottom: Barrier {
                handle: bottom,
                extent: self.backend.query_extent(bottom),
                y: geom.bottom_y,
            },
        });
    }

    fn game_over(&mut self, reason: EndReason) {
        // Terminal frame stays visible: no teardown here.
        self.state.phase = Phase::GameOver;
        self.state.end_reason = Some(reason);
        self.events.push(SimEvent::Ended {
            reason,
            score: self.state.score,
        });
        info!("run over: {:?}, score {}", reason, self.state.score);
    }

    fn teardown(&mut self) {
        if let Some(actor) = self.state.actor.take() {
            self.backend.delete_actor(actor.handle);
        }
        for pair in self.state.pairs.drain(..) {
            self.backend.delete_obstacle(pair.top.handle);
            self.backend.delete_obstacle(pair.bottom.handle);
        }
        self.state = SimState::new();
    }
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, driven by the host's tick cadence
//! - Seeded RNG only
//! - Stable obstacle order (by spawn time)
//! - No rendering or platform dependencies beyond the scene capability

pub mod collision;
pub mod engine;
pub mod spawn;
pub mod state;

pub use collision::{barrier_overlaps_actor, first_hit, out_of_bounds};
pub use engine::{Engine, StartError};
pub use spawn::{PairGeometry, derive_geometry, sample_pair};
pub use state::{
    Actor, ActorView, Barrier, EndReason, ObstaclePair, PairView, Phase, SimEvent, SimState,
    Snapshot,
};

//! Obstacle pair geometry
//!
//! A pair is fully determined by its gap center: the top barrier fills the
//! course from the gap's upper edge to the ceiling, the bottom barrier from
//! the floor to the gap's lower edge, so
//! `top_height + gap_size + bottom_height == course_height` always holds.

use rand::Rng;

use crate::config::SimConfig;

/// Derived geometry of a pair before any proxies exist
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairGeometry {
    pub gap_center: f32,
    /// Height of the upper barrier
    pub top_height: f32,
    /// Vertical center of the upper barrier
    pub top_y: f32,
    /// Height of the lower barrier
    pub bottom_height: f32,
    /// Vertical center of the lower barrier
    pub bottom_y: f32,
}

/// Sample a gap center uniformly and derive both barrier extents.
///
/// The sample range is clamped so the gap never touches floor or ceiling,
/// whatever the configured range says.
pub fn sample_pair<R: Rng>(config: &SimConfig, rng: &mut R) -> PairGeometry {
    let half_gap = config.gap_size / 2.0;
    let min = config.gap_center_min.max(config.floor_y + half_gap);
    let max = config
        .gap_center_max
        .min(config.ceiling() - half_gap)
        .max(min);
    let gap_center = rng.random_range(min..=max);
    derive_geometry(config, gap_center)
}

/// Partition the course height around a gap center
pub fn derive_geometry(config: &SimConfig, gap_center: f32) -> PairGeometry {
    let half_gap = config.gap_size / 2.0;
    let top_height = config.course_height - (gap_center + half_gap);
    let bottom_height = gap_center - half_gap;
    PairGeometry {
        gap_center,
        top_height,
        top_y: config.course_height - top_height / 2.0,
        bottom_height,
        bottom_y: bottom_height / 2.0,
    }
}

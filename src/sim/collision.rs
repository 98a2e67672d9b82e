//! Axis-aligned collision tests
//!
//! The course is effectively 2D: overlap is checked on the horizontal and
//! vertical axes only, depth is ignored. Checks are discrete against the
//! current tick's post-move positions - a fast enough actor can tunnel
//! through a thin barrier. That is documented behavior, not a defect.

use glam::Vec2;

use super::state::{Barrier, EndReason, ObstaclePair};
use crate::scene::Extent;

/// True when a barrier's box overlaps the actor's collision margin
#[inline]
pub fn barrier_overlaps_actor(
    barrier_pos: Vec2,
    extent: Extent,
    actor_pos: Vec2,
    actor_margin: f32,
) -> bool {
    (barrier_pos.x - actor_pos.x).abs() < extent.width / 2.0 + actor_margin
        && (barrier_pos.y - actor_pos.y).abs() < extent.height / 2.0 + actor_margin
}

/// Bounds check after integration; floor and ceiling both end the run
#[inline]
pub fn out_of_bounds(y: f32, floor: f32, ceiling: f32) -> Option<EndReason> {
    if y <= floor {
        Some(EndReason::HitFloor)
    } else if y >= ceiling {
        Some(EndReason::HitCeiling)
    } else {
        None
    }
}

/// First barrier overlapping the actor, scanning pairs in spawn order and
/// top before bottom within a pair. Whether *some* hit exists does not
/// depend on the scan order; only which barrier is reported does.
pub fn first_hit<'a>(
    pairs: &'a [ObstaclePair],
    actor_pos: Vec2,
    actor_margin: f32,
) -> Option<&'a Barrier> {
    for pair in pairs {
        for barrier in [&pair.top, &pair.bottom] {
            if barrier_overlaps_actor(barrier.pos(pair.x), barrier.extent, actor_pos, actor_margin)
            {
                return Some(barrier);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::scene::ObstacleHandle;

    fn pair_at(x: f32, top_y: f32, top_h: f32, bottom_y: f32, bottom_h: f32) -> ObstaclePair {
        ObstaclePair {
            x,
            gap_center: (top_y - top_h / 2.0 + bottom_y + bottom_h / 2.0) / 2.0,
            top: Barrier {
                handle: ObstacleHandle(1),
                extent: Extent::new(2.0, top_h),
                y: top_y,
            },
            bottom: Barrier {
                handle: ObstacleHandle(2),
                extent: Extent::new(2.0, bottom_h),
                y: bottom_y,
            },
        }
    }

    #[test]
    fn test_overlap_both_axes_required() {
        let extent = Extent::new(2.0, 6.0);
        let barrier = Vec2::new(0.0, 12.0);

        // Horizontally aligned, vertically inside the barrier
        assert!(barrier_overlaps_actor(
            barrier,
            extent,
            Vec2::new(0.0, 10.0),
            0.5
        ));
        // Same height, too far to the side
        assert!(!barrier_overlaps_actor(
            barrier,
            extent,
            Vec2::new(2.0, 10.0),
            0.5
        ));
        // Same column, below the barrier
        assert!(!barrier_overlaps_actor(
            barrier,
            extent,
            Vec2::new(0.0, 7.0),
            0.5
        ));
    }

    #[test]
    fn test_overlap_is_strict_at_the_boundary() {
        let extent = Extent::new(2.0, 4.0);
        // Separation exactly equals width/2 + margin: no overlap
        assert!(!barrier_overlaps_actor(
            Vec2::new(1.5, 0.0),
            extent,
            Vec2::ZERO,
            0.5
        ));
        assert!(barrier_overlaps_actor(
            Vec2::new(1.49, 0.0),
            extent,
            Vec2::ZERO,
            0.5
        ));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert_eq!(out_of_bounds(0.0, 0.0, 15.0), Some(EndReason::HitFloor));
        assert_eq!(out_of_bounds(-1.3, 0.0, 15.0), Some(EndReason::HitFloor));
        assert_eq!(out_of_bounds(15.0, 0.0, 15.0), Some(EndReason::HitCeiling));
        assert_eq!(out_of_bounds(16.2, 0.0, 15.0), Some(EndReason::HitCeiling));
        assert_eq!(out_of_bounds(0.1, 0.0, 15.0), None);
        assert_eq!(out_of_bounds(14.9, 0.0, 15.0), None);
    }

    #[test]
    fn test_first_hit_scans_top_before_bottom() {
        // Actor overlaps both members of a degenerate pair
        let pair = pair_at(0.0, 6.0, 4.0, 4.0, 4.0);
        let pairs = [pair];
        let hit = first_hit(&pairs, Vec2::new(0.0, 5.0), 0.5).unwrap();
        assert_eq!(hit.handle, ObstacleHandle(1));
    }

    #[test]
    fn test_first_hit_in_gap_is_none() {
        // Default-like pair: gap center 7.5, members clear of y=7.5
        let pair = pair_at(0.0, 12.25, 5.5, 2.75, 5.5);
        assert!(first_hit(&[pair], Vec2::new(0.0, 7.5), 0.5).is_none());
    }

    #[test]
    fn test_detection_survives_reordering() {
        let far = pair_at(5.0, 12.25, 5.5, 2.75, 5.5);
        let hitting = pair_at(0.0, 12.25, 5.5, 2.75, 5.5);
        let actor = Vec2::new(0.0, 13.0);

        let forward_pairs = [far.clone(), hitting.clone()];
        let forward = first_hit(&forward_pairs, actor, 0.5);
        let reversed_pairs = [hitting, far];
        let reversed = first_hit(&reversed_pairs, actor, 0.5);
        assert!(forward.is_some());
        assert!(reversed.is_some());
    }

    proptest! {
        #[test]
        fn prop_hit_detection_order_independent(
            xs in proptest::collection::vec(-12.0f32..12.0, 0..8),
            actor_y in 0.5f32..14.5,
        ) {
            let pairs: Vec<ObstaclePair> = xs
                .iter()
                .map(|&x| pair_at(x, 12.25, 5.5, 2.75, 5.5))
                .collect();
            let mut reversed = pairs.clone();
            reversed.reverse();

            let actor = Vec2::new(0.0, actor_y);
            prop_assert_eq!(
                first_hit(&pairs, actor, 0.5).is_some(),
                first_hit(&reversed, actor, 0.5).is_some()
            );
        }
    }
}

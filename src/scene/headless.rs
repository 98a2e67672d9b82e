//! In-memory scene backend
//!
//! Tracks live proxies without drawing anything. Backs the demo host and
//! the engine tests; the bookkeeping it exposes (live proxy counts,
//! positions) is exactly what the state machine guarantees about teardown.

use std::collections::HashMap;

use glam::Vec2;

use super::{ActorHandle, Extent, ObstacleHandle, SceneBackend, SceneError};

#[derive(Debug, Clone)]
struct ObstacleProxy {
    extent: Extent,
    pos: Vec2,
}

/// Scene backend with no renderer behind it
#[derive(Debug, Default)]
pub struct HeadlessScene {
    next_id: u64,
    actor: Option<(ActorHandle, Vec2)>,
    obstacles: HashMap<u64, ObstacleProxy>,
    // Debug/testing hook: make the next create call fail once
    refuse_next_create: bool,
}

impl HeadlessScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live actor proxies (0 or 1)
    pub fn actor_count(&self) -> usize {
        usize::from(self.actor.is_some())
    }

    /// Number of live barrier proxies
    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    /// Last position the actor proxy was moved to
    pub fn actor_pos(&self) -> Option<Vec2> {
        self.actor.map(|(_, pos)| pos)
    }

    /// Last position a barrier proxy was moved to
    pub fn obstacle_pos(&self, handle: ObstacleHandle) -> Option<Vec2> {
        self.obstacles.get(&handle.0).map(|proxy| proxy.pos)
    }

    /// Fail the next create call (debug/testing)
    pub fn refuse_next_create(&mut self) {
        self.refuse_next_create = true;
    }

    fn take_refusal(&mut self) -> bool {
        std::mem::take(&mut self.refuse_next_create)
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl SceneBackend for HeadlessScene {
    fn create_actor(&mut self) -> Result<ActorHandle, SceneError> {
        if self.take_refusal() {
            return Err(SceneError::new("actor proxy unavailable"));
        }
        let handle = ActorHandle(self.next_id());
        self.actor = Some((handle, Vec2::ZERO));
        Ok(handle)
    }

    fn move_actor(&mut self, handle: ActorHandle, pos: Vec2) {
        if let Some((live, live_pos)) = &mut self.actor
            && *live == handle
        {
            *live_pos = pos;
        }
    }

    fn delete_actor(&mut self, handle: ActorHandle) {
        if self.actor.is_some_and(|(live, _)| live == handle) {
            self.actor = None;
        }
    }

    fn create_obstacle(&mut self, extent: Extent, pos: Vec2) -> Result<ObstacleHandle, SceneError> {
        if self.take_refusal() {
            return Err(SceneError::new("obstacle proxy unavailable"));
        }
        let handle = ObstacleHandle(self.next_id());
        self.obstacles.insert(handle.0, ObstacleProxy { extent, pos });
        Ok(handle)
    }

    fn move_obstacle(&mut self, handle: ObstacleHandle, pos: Vec2) {
        if let Some(proxy) = self.obstacles.get_mut(&handle.0) {
            proxy.pos = pos;
        }
    }

    fn delete_obstacle(&mut self, handle: ObstacleHandle) {
        self.obstacles.remove(&handle.0);
    }

    fn query_extent(&self, handle: ObstacleHandle) -> Extent {
        self.obstacles
            .get(&handle.0)
            .map(|proxy| proxy.extent)
            .unwrap_or(Extent::new(0.0, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_lifecycle() {
        let mut scene = HeadlessScene::new();
        assert_eq!(scene.actor_count(), 0);

        let handle = scene.create_actor().unwrap();
        assert_eq!(scene.actor_count(), 1);

        scene.move_actor(handle, Vec2::new(0.0, 5.0));
        assert_eq!(scene.actor_pos(), Some(Vec2::new(0.0, 5.0)));

        scene.delete_actor(handle);
        assert_eq!(scene.actor_count(), 0);
    }

    #[test]
    fn test_obstacle_lifecycle() {
        let mut scene = HeadlessScene::new();
        let extent = Extent::new(2.0, 5.5);
        let handle = scene
            .create_obstacle(extent, Vec2::new(10.0, 12.25))
            .unwrap();

        assert_eq!(scene.obstacle_count(), 1);
        assert_eq!(scene.query_extent(handle), extent);

        scene.move_obstacle(handle, Vec2::new(9.5, 12.25));
        assert_eq!(scene.obstacle_pos(handle), Some(Vec2::new(9.5, 12.25)));

        scene.delete_obstacle(handle);
        assert_eq!(scene.obstacle_count(), 0);
    }

    #[test]
    fn test_stale_handle_ignored() {
        let mut scene = HeadlessScene::new();
        let old = scene.create_actor().unwrap();
        scene.delete_actor(old);
        let fresh = scene.create_actor().unwrap();

        // A stale move or delete must not touch the live proxy.
        scene.move_actor(old, Vec2::new(1.0, 1.0));
        assert_eq!(scene.actor_pos(), Some(Vec2::ZERO));
        scene.delete_actor(old);
        assert_eq!(scene.actor_count(), 1);

        scene.move_actor(fresh, Vec2::new(0.0, 3.0));
        assert_eq!(scene.actor_pos(), Some(Vec2::new(0.0, 3.0)));
    }

    #[test]
    fn test_refusal_fires_once() {
        let mut scene = HeadlessScene::new();
        scene.refuse_next_create();
        assert!(scene.create_actor().is_err());
        assert!(scene.create_actor().is_ok());
    }

    #[test]
    fn test_query_extent_after_delete() {
        let mut scene = HeadlessScene::new();
        let handle = scene
            .create_obstacle(Extent::new(2.0, 3.0), Vec2::ZERO)
            .unwrap();
        scene.delete_obstacle(handle);
        assert_eq!(scene.query_extent(handle), Extent::new(0.0, 0.0));
    }
}

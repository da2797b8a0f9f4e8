use backdrop_common::Spin;
use backdrop_scene::{Entity, EntityKind, Scene};
use serde::Serialize;

/// Read-only queries against scene state for debugging and CLI output.
pub struct SceneInspector;

impl SceneInspector {
    /// Produce a summary of the scene state.
    pub fn summary(scene: &Scene) -> SceneSummary {
        SceneSummary {
            tick: scene.tick(),
            seed: scene.seed(),
            entity_count: scene.entity_count(),
            star_count: scene.starfield().len(),
            inner_scale: scene.inner.scale,
        }
    }

    /// Report a single entity's transform.
    pub fn inspect(scene: &Scene, kind: EntityKind) -> Option<EntityReport> {
        scene
            .entities()
            .find(|e| e.kind == kind)
            .map(EntityReport::from_entity)
    }

    /// List every entity in draw order.
    pub fn list(scene: &Scene) -> Vec<EntityReport> {
        scene.entities().map(EntityReport::from_entity).collect()
    }
}

/// Summary of scene state for the inspector.
#[derive(Debug, Clone, Serialize)]
pub struct SceneSummary {
    pub tick: u64,
    pub seed: u64,
    pub entity_count: usize,
    pub star_count: usize,
    pub inner_scale: f32,
}

impl std::fmt::Display for SceneSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Scene: tick={} seed={} entities={} stars={} inner_scale={:.4}",
            self.tick, self.seed, self.entity_count, self.star_count, self.inner_scale
        )
    }
}

/// Transform snapshot of a single entity.
#[derive(Debug, Clone, Serialize)]
pub struct EntityReport {
    pub kind: EntityKind,
    pub spin: Spin,
    pub scale: f32,
}

impl EntityReport {
    fn from_entity(e: &Entity) -> Self {
        Self {
            kind: e.kind,
            spin: e.spin,
            scale: e.scale,
        }
    }
}

impl std::fmt::Display for EntityReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?}: yaw={:+.4} pitch={:+.4} roll={:+.4} scale={:.4}",
            self.kind, self.spin.yaw, self.spin.pitch, self.spin.roll, self.scale
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backdrop_common::PointerState;

    #[test]
    fn summary_fresh_scene() {
        let scene = Scene::build(42);
        let summary = SceneInspector::summary(&scene);
        assert_eq!(summary.tick, 0);
        assert_eq!(summary.entity_count, 6);
        assert_eq!(summary.star_count, 3000);
        assert_eq!(summary.inner_scale, 1.0);
    }

    #[test]
    fn summary_reflects_ticks() {
        let mut scene = Scene::build(42);
        backdrop_scene::advance(&mut scene, 1.0, PointerState::default());
        let summary = SceneInspector::summary(&scene);
        assert_eq!(summary.tick, 1);
        assert!(summary.inner_scale > 1.0);
    }

    #[test]
    fn inspect_each_kind() {
        let scene = Scene::build(0);
        assert!(SceneInspector::inspect(&scene, EntityKind::CoreWireframe).is_some());
        assert!(SceneInspector::inspect(&scene, EntityKind::Ring(2)).is_some());
        assert!(SceneInspector::inspect(&scene, EntityKind::Ring(3)).is_none());
    }

    #[test]
    fn list_in_draw_order() {
        let scene = Scene::build(0);
        let reports = SceneInspector::list(&scene);
        assert_eq!(reports.len(), 6);
        assert_eq!(reports[0].kind, EntityKind::CoreWireframe);
        assert_eq!(reports[5].kind, EntityKind::Ring(2));
    }

    #[test]
    fn summary_display() {
        let scene = Scene::build(0);
        let s = format!("{}", SceneInspector::summary(&scene));
        assert!(s.contains("tick=0"));
        assert!(s.contains("stars=3000"));
    }
}

use crate::camera::ParallaxCamera;
use backdrop_scene::Scene;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer reads scene state and camera, then produces output. It never
/// mutates the scene.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given scene and camera.
    fn render(&self, scene: &Scene, camera: &ParallaxCamera) -> Self::Output;
}

/// Text renderer: a human-readable dump of one frame.
///
/// Used by the headless CLI, logging, and tests of the renderer seam.
#[derive(Debug, Default)]
pub struct TextFrameRenderer;

impl TextFrameRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for TextFrameRenderer {
    type Output = String;

    fn render(&self, scene: &Scene, camera: &ParallaxCamera) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "=== Frame (tick={}, seed={}) ===\n",
            scene.tick(),
            scene.seed()
        ));
        out.push_str(&format!(
            "Camera: yaw={:+.4} pitch={:+.4} aspect={:.3} fov={:.0}\n",
            camera.yaw,
            camera.pitch,
            camera.aspect,
            camera.fov.to_degrees()
        ));
        out.push_str(&format!(
            "Core: yaw={:+.3} pitch={:+.3}\n",
            scene.core.spin.yaw, scene.core.spin.pitch
        ));
        out.push_str(&format!("Inner: scale={:.4}\n", scene.inner.scale));
        for (i, ring) in scene.rings.iter().enumerate() {
            out.push_str(&format!("Ring{}: roll={:+.3}\n", i, ring.spin.roll));
        }
        out.push_str(&format!(
            "Particles: {} points, yaw={:+.3} pitch={:+.5}\n",
            scene.starfield().len(),
            scene.particles.spin.yaw,
            scene.particles.spin.pitch
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backdrop_common::PointerState;

    #[test]
    fn text_renderer_fresh_scene() {
        let scene = Scene::build(42);
        let out = TextFrameRenderer::new().render(&scene, &ParallaxCamera::default());
        assert!(out.contains("tick=0"));
        assert!(out.contains("3000 points"));
        assert!(out.contains("Inner: scale=1.0000"));
    }

    #[test]
    fn text_renderer_reflects_ticked_state() {
        let mut scene = Scene::build(42);
        backdrop_scene::advance(&mut scene, 1.0, PointerState::default());
        let out = TextFrameRenderer::new().render(&scene, &ParallaxCamera::default());
        assert!(out.contains("tick=1"));
        assert!(out.contains("Ring0"));
        assert!(out.contains("Ring2"));
    }
}

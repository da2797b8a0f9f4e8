use crate::overlay::OverlaySignal;
use backdrop_common::Viewport;

/// A high-level action produced by any host (desktop window, headless CLI).
///
/// Hosts translate their raw events into actions; the engine reacts to
/// actions only. This keeps the windowed and headless paths on one code path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Pointer moved; payload is the raw client-space position.
    PointerMoved { client_x: f32, client_y: f32 },
    /// The output surface changed size.
    ViewportResized(Viewport),
    /// A modal overlay transition was requested.
    Overlay(OverlaySignal),
    /// No-op (raw input that has no binding).
    Noop,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_action_carries_position() {
        let a = Action::PointerMoved {
            client_x: 10.0,
            client_y: 8.0,
        };
        assert!(matches!(a, Action::PointerMoved { client_x, .. } if client_x == 10.0));
    }

    #[test]
    fn resize_action_carries_viewport() {
        let a = Action::ViewportResized(Viewport::new(640, 480));
        assert!(matches!(a, Action::ViewportResized(v) if v.aspect() > 1.0));
    }

    #[test]
    fn overlay_action() {
        let a = Action::Overlay(OverlaySignal::Open);
        assert!(matches!(a, Action::Overlay(OverlaySignal::Open)));
    }
}

use backdrop_common::{PointerState, Viewport};

/// Records the pointer offset from viewport center on every move event.
///
/// Pure state holder: no smoothing, no validation, negative offsets allowed.
/// Tracks the current viewport so the center stays correct across resizes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    viewport: Viewport,
    state: PointerState,
}

impl PointerTracker {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            state: PointerState::default(),
        }
    }

    /// Overwrite pointer state with the offset of a client-space position
    /// from the viewport center.
    pub fn pointer_moved(&mut self, client_x: f32, client_y: f32) {
        self.state = PointerState::from_client(client_x, client_y, self.viewport);
    }

    /// Adopt a new viewport so subsequent moves recenter correctly.
    pub fn viewport_resized(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Latest pointer offset; read once per tick.
    pub fn state(&self) -> PointerState {
        self.state
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_yields_zero_offset() {
        let mut t = PointerTracker::new(Viewport::new(800, 600));
        t.pointer_moved(400.0, 300.0);
        assert_eq!(t.state(), PointerState::default());
    }

    #[test]
    fn offsets_may_be_negative() {
        let mut t = PointerTracker::new(Viewport::new(800, 600));
        t.pointer_moved(100.0, 50.0);
        assert_eq!(t.state().raw_x, -300.0);
        assert_eq!(t.state().raw_y, -250.0);
    }

    #[test]
    fn resize_recenters_future_moves() {
        let mut t = PointerTracker::new(Viewport::new(800, 600));
        t.pointer_moved(400.0, 300.0);
        assert_eq!(t.state(), PointerState::default());

        t.viewport_resized(Viewport::new(400, 300));
        t.pointer_moved(400.0, 300.0);
        assert_eq!(t.state().raw_x, 200.0);
        assert_eq!(t.state().raw_y, 150.0);
    }

    #[test]
    fn latest_move_wins() {
        let mut t = PointerTracker::new(Viewport::new(100, 100));
        t.pointer_moved(0.0, 0.0);
        t.pointer_moved(100.0, 100.0);
        assert_eq!(t.state().raw_x, 50.0);
        assert_eq!(t.state().raw_y, 50.0);
    }
}

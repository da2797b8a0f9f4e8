/// A transition request for the modal overlay.
///
/// Three event sources feed the overlay: an "apply" control opens it, a close
/// control dismisses it, and a press on the dimmed backdrop dismisses it only
/// when the press lands outside the dialog panel itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlaySignal {
    Open,
    Close,
    BackdropPressed { inside_panel: bool },
}

/// Two-state modal overlay.
///
/// Redundant signals (opening an open overlay, closing a closed one) are
/// accepted and do nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlay {
    visible: bool,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Apply a signal. Returns true if visibility changed.
    pub fn apply(&mut self, signal: OverlaySignal) -> bool {
        let next = match signal {
            OverlaySignal::Open => true,
            OverlaySignal::Close => false,
            OverlaySignal::BackdropPressed { inside_panel } => {
                // A press on the panel itself keeps the overlay open.
                self.visible && inside_panel
            }
        };
        let changed = next != self.visible;
        if changed {
            tracing::debug!(visible = next, "overlay transition");
        }
        self.visible = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert!(!Overlay::new().is_visible());
    }

    #[test]
    fn open_then_close() {
        let mut o = Overlay::new();
        assert!(o.apply(OverlaySignal::Open));
        assert!(o.is_visible());
        assert!(o.apply(OverlaySignal::Close));
        assert!(!o.is_visible());
    }

    #[test]
    fn redundant_signals_are_noops() {
        let mut o = Overlay::new();
        assert!(!o.apply(OverlaySignal::Close));
        o.apply(OverlaySignal::Open);
        assert!(!o.apply(OverlaySignal::Open));
    }

    #[test]
    fn backdrop_press_outside_panel_dismisses() {
        let mut o = Overlay::new();
        o.apply(OverlaySignal::Open);
        assert!(o.apply(OverlaySignal::BackdropPressed {
            inside_panel: false
        }));
        assert!(!o.is_visible());
    }

    #[test]
    fn backdrop_press_inside_panel_keeps_open() {
        let mut o = Overlay::new();
        o.apply(OverlaySignal::Open);
        assert!(!o.apply(OverlaySignal::BackdropPressed { inside_panel: true }));
        assert!(o.is_visible());
    }

    #[test]
    fn backdrop_press_while_hidden_is_noop() {
        let mut o = Overlay::new();
        assert!(!o.apply(OverlaySignal::BackdropPressed {
            inside_panel: false
        }));
        assert!(!o.is_visible());
    }
}

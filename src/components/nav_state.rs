//! Open/closed bookkeeping for the responsive site navigation.
//!
//! The state lives here; the DOM is a render target. Every transition hands
//! back a [`NavSnapshot`] describing what the document should look like, and
//! the controller in `site_nav` applies it. Nothing reads state back out of
//! the DOM.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportMode {
    Desktop,
    Mobile,
}

impl ViewportMode {
    /// Maps the `(min-width: 768px)` media query result to a mode.
    pub fn from_matches(matches: bool) -> Self {
        if matches {
            ViewportMode::Desktop
        } else {
            ViewportMode::Mobile
        }
    }
}

/// Where the nav panel is parked in the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelAttachment {
    /// Original position in the header, held by the placeholder node.
    InFlowAnchor,
    /// Appended to the body so the drawer renders above everything else.
    OverlayRoot,
}

impl PanelAttachment {
    pub fn for_mode(mode: ViewportMode) -> Self {
        match mode {
            ViewportMode::Desktop => PanelAttachment::InFlowAnchor,
            ViewportMode::Mobile => PanelAttachment::OverlayRoot,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisclosureState {
    Closed,
    Open,
}

/// What the document should look like after a transition.
///
/// `aria_hidden: None` means the attribute is removed outright (desktop, where
/// the panel is always visible), not written as "false".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSnapshot {
    pub attachment: PanelAttachment,
    /// `is-open` on the panel.
    pub panel_open: bool,
    /// `is-active` on the toggle.
    pub toggle_active: bool,
    pub aria_expanded: bool,
    pub aria_hidden: Option<bool>,
    /// `is-active` on the backdrop.
    pub backdrop_active: bool,
    /// `menu-open` on the body.
    pub scroll_locked: bool,
    /// Whether the outside-pointer dismissal listener should exist.
    pub outside_listener: bool,
    /// Move keyboard focus back to the toggle after applying this snapshot.
    pub focus_toggle: bool,
}

/// The authoritative navigation state. Invariants kept by the transitions:
/// desktop mode always implies a closed disclosure, and the outside-pointer
/// listener is wanted exactly when the drawer is open on mobile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavState {
    mode: ViewportMode,
    disclosure: DisclosureState,
}

impl NavState {
    pub fn new(mode: ViewportMode) -> Self {
        NavState {
            mode,
            disclosure: DisclosureState::Closed,
        }
    }

    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.disclosure == DisclosureState::Open
    }

    fn snapshot(&self, focus_toggle: bool) -> NavSnapshot {
        let open = self.disclosure == DisclosureState::Open;
        NavSnapshot {
            attachment: PanelAttachment::for_mode(self.mode),
            panel_open: open,
            toggle_active: open,
            aria_expanded: open,
            aria_hidden: (self.mode == ViewportMode::Mobile).then(|| !open),
            backdrop_active: open,
            scroll_locked: open,
            outside_listener: open && self.mode == ViewportMode::Mobile,
            focus_toggle,
        }
    }

    /// Crossing the breakpoint re-parks the panel; landing on desktop also
    /// force-closes the drawer.
    pub fn on_breakpoint_change(&mut self, mode: ViewportMode) -> NavSnapshot {
        self.mode = mode;
        if mode == ViewportMode::Desktop {
            self.disclosure = DisclosureState::Closed;
        }
        self.snapshot(false)
    }

    /// No-op on desktop, where the toggle is not part of the layout.
    pub fn open(&mut self) -> Option<NavSnapshot> {
        if self.mode == ViewportMode::Desktop {
            return None;
        }
        self.disclosure = DisclosureState::Open;
        Some(self.snapshot(false))
    }

    /// Closing is unconditional and idempotent.
    pub fn close(&mut self, focus_toggle: bool) -> NavSnapshot {
        self.disclosure = DisclosureState::Closed;
        self.snapshot(focus_toggle)
    }

    pub fn on_toggle_press(&mut self) -> Option<NavSnapshot> {
        if self.mode == ViewportMode::Desktop {
            return None;
        }
        match self.disclosure {
            DisclosureState::Open => Some(self.close(false)),
            DisclosureState::Closed => self.open(),
        }
    }

    /// `outside` is whether the pointer target sits outside both the panel
    /// and the toggle; containment is the caller's business.
    pub fn on_outside_pointer(&mut self, outside: bool) -> Option<NavSnapshot> {
        if self.mode == ViewportMode::Desktop || self.disclosure == DisclosureState::Closed {
            return None;
        }
        if !outside {
            return None;
        }
        Some(self.close(false))
    }

    /// Escape closes the drawer and hands focus back to the toggle.
    pub fn on_escape_key(&mut self) -> Option<NavSnapshot> {
        if self.disclosure != DisclosureState::Open || self.mode != ViewportMode::Mobile {
            return None;
        }
        Some(self.close(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_mobile() -> NavState {
        let mut state = NavState::new(ViewportMode::Mobile);
        state.open().unwrap();
        state
    }

    #[test]
    fn attachment_follows_mode() {
        assert_eq!(
            PanelAttachment::for_mode(ViewportMode::Desktop),
            PanelAttachment::InFlowAnchor
        );
        assert_eq!(
            PanelAttachment::for_mode(ViewportMode::Mobile),
            PanelAttachment::OverlayRoot
        );
    }

    #[test]
    fn breakpoint_to_desktop_forces_close() {
        let mut state = open_mobile();
        let snap = state.on_breakpoint_change(ViewportMode::Desktop);
        assert!(!state.is_open());
        assert_eq!(snap.attachment, PanelAttachment::InFlowAnchor);
        assert_eq!(snap.aria_hidden, None);
        assert!(!snap.panel_open);
        assert!(!snap.backdrop_active);
        assert!(!snap.scroll_locked);
        assert!(!snap.outside_listener);
    }

    #[test]
    fn breakpoint_to_mobile_keeps_closed_hidden() {
        let mut state = NavState::new(ViewportMode::Desktop);
        let snap = state.on_breakpoint_change(ViewportMode::Mobile);
        assert_eq!(snap.attachment, PanelAttachment::OverlayRoot);
        assert_eq!(snap.aria_hidden, Some(true));
        assert!(!snap.aria_expanded);
    }

    #[test]
    fn toggle_press_opens_closed_drawer() {
        let mut state = NavState::new(ViewportMode::Mobile);
        let snap = state.on_toggle_press().unwrap();
        assert!(state.is_open());
        assert!(snap.aria_expanded);
        assert!(snap.panel_open);
        assert!(snap.toggle_active);
        assert!(snap.backdrop_active);
        assert!(snap.scroll_locked);
        assert!(snap.outside_listener);
        assert_eq!(snap.aria_hidden, Some(false));
    }

    #[test]
    fn toggle_press_closes_open_drawer() {
        let mut state = open_mobile();
        let snap = state.on_toggle_press().unwrap();
        assert!(!state.is_open());
        assert!(!snap.panel_open);
        assert!(!snap.outside_listener);
        assert_eq!(snap.aria_hidden, Some(true));
    }

    #[test]
    fn toggle_press_ignored_on_desktop() {
        let mut state = NavState::new(ViewportMode::Desktop);
        assert!(state.on_toggle_press().is_none());
        assert!(!state.is_open());
    }

    #[test]
    fn open_refused_on_desktop() {
        let mut state = NavState::new(ViewportMode::Desktop);
        assert!(state.open().is_none());
        assert!(!state.is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut state = open_mobile();
        let first = state.close(false);
        let second = state.close(false);
        assert_eq!(first, second);
    }

    #[test]
    fn outside_pointer_closes_then_goes_quiet() {
        let mut state = open_mobile();
        let snap = state.on_outside_pointer(true).unwrap();
        assert!(!state.is_open());
        assert!(!snap.outside_listener);
        // Drawer is closed now, so further pointer events do nothing.
        assert!(state.on_outside_pointer(true).is_none());
    }

    #[test]
    fn outside_pointer_ignores_inside_targets() {
        let mut state = open_mobile();
        assert!(state.on_outside_pointer(false).is_none());
        assert!(state.is_open());
    }

    #[test]
    fn outside_pointer_ignored_when_closed_or_desktop() {
        let mut closed = NavState::new(ViewportMode::Mobile);
        assert!(closed.on_outside_pointer(true).is_none());

        let mut desktop = NavState::new(ViewportMode::Desktop);
        assert!(desktop.on_outside_pointer(true).is_none());
    }

    #[test]
    fn escape_closes_and_requests_focus() {
        let mut state = open_mobile();
        let snap = state.on_escape_key().unwrap();
        assert!(!state.is_open());
        assert!(snap.focus_toggle);
    }

    #[test]
    fn escape_ignored_when_closed() {
        let mut state = NavState::new(ViewportMode::Mobile);
        assert!(state.on_escape_key().is_none());
    }

    #[test]
    fn desktop_mode_always_reads_closed() {
        let mut state = open_mobile();
        state.on_breakpoint_change(ViewportMode::Desktop);
        state.on_breakpoint_change(ViewportMode::Mobile);
        // Reopening after a round trip starts from Closed again.
        assert!(!state.is_open());
        let snap = state.on_breakpoint_change(ViewportMode::Mobile);
        assert_eq!(snap.aria_hidden, Some(true));
    }
}

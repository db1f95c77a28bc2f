//! Infinite-scroll trigger.
//!
//! Watches one card (the last one in the gallery) and fires once each time
//! that card enters the visible window. Pointing it at a different card drops
//! the previous observation, so a grown list starts a fresh one. The first
//! check after attaching fires if the card is already visible.

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Sentinel {
    target: Option<String>,
    /// Visibility seen by the previous check; `None` right after attaching.
    was_visible: Option<bool>,
}

impl Sentinel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Watch `target`. No-op when it is already the watched card.
    pub fn observe(&mut self, target: Option<&str>) {
        if self.target.as_deref() == target {
            return;
        }
        self.target = target.map(str::to_string);
        self.was_visible = None;
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Report the watched card's visibility. Returns true on entering view.
    pub fn check(&mut self, target_visible: bool) -> bool {
        if self.target.is_none() {
            return false;
        }
        let entered = target_visible && self.was_visible != Some(true);
        self.was_visible = Some(target_visible);
        entered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_observed_never_fires() {
        let mut sentinel = Sentinel::new();
        assert!(!sentinel.check(true));
    }

    #[test]
    fn fires_immediately_when_attached_in_view() {
        let mut sentinel = Sentinel::new();
        sentinel.observe(Some("b"));
        assert!(sentinel.check(true));
    }

    #[test]
    fn fires_once_per_intersection() {
        let mut sentinel = Sentinel::new();
        sentinel.observe(Some("b"));
        assert!(!sentinel.check(false));
        assert!(sentinel.check(true));
        assert!(!sentinel.check(true));
        assert!(!sentinel.check(true));
        assert!(!sentinel.check(false));
        assert!(sentinel.check(true));
    }

    #[test]
    fn retargeting_resets_observation() {
        let mut sentinel = Sentinel::new();
        sentinel.observe(Some("b"));
        assert!(sentinel.check(true));
        sentinel.observe(Some("c"));
        assert_eq!(sentinel.target(), Some("c"));
        assert!(sentinel.check(true));
    }

    #[test]
    fn observing_same_target_keeps_state() {
        let mut sentinel = Sentinel::new();
        sentinel.observe(Some("b"));
        assert!(sentinel.check(true));
        sentinel.observe(Some("b"));
        assert!(!sentinel.check(true));
    }

    #[test]
    fn clearing_target_disconnects() {
        let mut sentinel = Sentinel::new();
        sentinel.observe(Some("b"));
        sentinel.observe(None);
        assert!(!sentinel.check(true));
    }
}

//! Scroll-driven presentation state
//!
//! `Reveal` is the one-shot visibility flag each animated section keeps. Once a
//! section has been seen it stays visible, even after scrolling away again.

/// Fraction of the element that must be on screen before it reveals
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// Vertical offset past which the navbar switches to its "scrolled" look
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 20.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Unobserved,
    Visible,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    state: RevealState,
    threshold: f64,
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_THRESHOLD)
    }
}

impl Reveal {
    pub fn new(threshold: f64) -> Self {
        Self {
            state: RevealState::Unobserved,
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == RevealState::Visible
    }

    /// Whether the caller should keep its observer attached
    pub fn needs_observation(&self) -> bool {
        self.state == RevealState::Unobserved
    }

    /// Feed one intersection report.
    ///
    /// Returns `true` only on the report that flips the flag, so the caller
    /// knows to disconnect its observer. Later reports are ignored.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.is_visible() || !is_intersecting || ratio < self.threshold {
            return false;
        }
        self.state = RevealState::Visible;
        true
    }
}

/// Navbar "scrolled" flag for a given window scroll offset
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

/// CSS transition delay for the `index`-th staggered item
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    index as u32 * step_ms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_flips_once() {
        let mut reveal = Reveal::default();
        assert!(!reveal.is_visible());
        assert!(reveal.needs_observation());

        assert!(reveal.observe(true, 0.25));
        assert!(reveal.is_visible());
        assert!(!reveal.needs_observation());

        assert!(!reveal.observe(true, 0.9));
    }

    #[test]
    fn test_reveal_never_reverts() {
        let mut reveal = Reveal::default();
        reveal.observe(true, 0.5);
        reveal.observe(false, 0.0);
        assert_eq!(reveal.state(), RevealState::Visible);
    }

    #[test]
    fn test_reveal_respects_threshold() {
        let mut reveal = Reveal::new(0.5);
        assert!(!reveal.observe(true, 0.2));
        assert!(!reveal.observe(false, 0.8));
        assert!(!reveal.is_visible());
        assert!(reveal.observe(true, 0.5));
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(Reveal::new(-1.0).threshold(), 0.0);
        assert_eq!(Reveal::new(3.0).threshold(), 1.0);
    }

    #[test]
    fn test_navbar_scrolled() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
        assert!(is_scrolled(400.0));
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay_ms(0, 150), 0);
        assert_eq!(stagger_delay_ms(2, 150), 300);
        assert_eq!(stagger_delay_ms(1, 200), 200);
    }
}

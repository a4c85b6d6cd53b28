//! One-shot entrance animation state.
//!
//! A block starts [`RevealState::Hidden`] and becomes [`RevealState::Visible`]
//! the first time it is seen. Nothing moves it back.

use std::rc::Rc;

use yew::functional::Reducible;

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    /// The block crossed the observer threshold (or its mount delay elapsed).
    Entered,
    /// No way to observe the block. Show it rather than leave it hidden forever.
    Unobservable,
}

impl RevealState {
    pub fn is_visible(self) -> bool {
        self == RevealState::Visible
    }

    pub fn apply(self, action: RevealAction) -> Self {
        match action {
            RevealAction::Entered | RevealAction::Unobservable => RevealState::Visible,
        }
    }

    /// Decide what an intersection entry means for this block.
    pub fn on_intersection(self, is_intersecting: bool, ratio: f64, threshold: f64) -> Self {
        if is_intersecting && ratio >= threshold {
            self.apply(RevealAction::Entered)
        } else {
            self
        }
    }
}

impl Reducible for RevealState {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// What starts the animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealTrigger {
    /// First intersection with the viewport.
    #[default]
    InView,
    /// Right after the block mounts.
    Mount,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub trigger: RevealTrigger,
    /// Fraction of the block that must be visible, 0.0..=1.0.
    pub threshold: f64,
    pub duration_ms: u32,
    pub delay_ms: u32,
    /// Vertical offset of the hidden state in px. Positive starts below.
    pub offset_px: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            trigger: RevealTrigger::InView,
            threshold: config::REVEAL_THRESHOLD,
            duration_ms: config::REVEAL_DURATION_MS,
            delay_ms: 0,
            offset_px: config::REVEAL_OFFSET_PX,
        }
    }
}

impl RevealOptions {
    /// Threshold clamped into what `IntersectionObserver` accepts.
    pub fn effective_threshold(&self) -> f64 {
        if self.threshold.is_nan() {
            return 0.0;
        }
        self.threshold.clamp(0.0, 1.0)
    }

    /// Inline style for `state`.
    pub fn style(&self, state: RevealState) -> String {
        let (opacity, offset) = match state {
            RevealState::Hidden => (0.0, self.offset_px),
            RevealState::Visible => (1.0, 0.0),
        };
        format!(
            "opacity: {opacity}; transform: translateY({offset}px); \
             transition: opacity {d}ms ease-out {delay}ms, transform {d}ms ease-out {delay}ms;",
            d = self.duration_ms,
            delay = self.delay_ms,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert_eq!(RevealState::default(), RevealState::Hidden);
    }

    #[test]
    fn visible_is_terminal() {
        let visible = RevealState::Hidden.apply(RevealAction::Entered);
        assert!(visible.is_visible());
        assert_eq!(visible.apply(RevealAction::Entered), RevealState::Visible);
        assert_eq!(visible.apply(RevealAction::Unobservable), RevealState::Visible);
        // Leaving the viewport again changes nothing.
        assert_eq!(visible.on_intersection(false, 0.0, 0.1), RevealState::Visible);
    }

    #[test]
    fn scroll_sequence_reveals_once() {
        let entries = [(false, 0.0), (true, 0.05), (true, 0.2), (false, 0.0), (true, 0.5)];
        let mut state = RevealState::Hidden;
        let mut transitions = 0;
        for (intersecting, ratio) in entries {
            let next = state.on_intersection(intersecting, ratio, 0.1);
            if next != state {
                transitions += 1;
            }
            state = next;
        }
        assert_eq!(state, RevealState::Visible);
        assert_eq!(transitions, 1);
    }

    #[test]
    fn below_threshold_stays_hidden() {
        assert_eq!(RevealState::Hidden.on_intersection(true, 0.09, 0.1), RevealState::Hidden);
        assert_eq!(RevealState::Hidden.on_intersection(false, 1.0, 0.1), RevealState::Hidden);
    }

    #[test]
    fn unobservable_falls_back_to_visible() {
        assert_eq!(RevealState::Hidden.apply(RevealAction::Unobservable), RevealState::Visible);
    }

    #[test]
    fn reducer_is_idempotent_once_visible() {
        let visible = Rc::new(RevealState::Hidden).reduce(RevealAction::Entered);
        let again = visible.clone().reduce(RevealAction::Entered);
        assert!(Rc::ptr_eq(&visible, &again));
    }

    #[test]
    fn styles() {
        let opts = RevealOptions { delay_ms: 200, ..RevealOptions::default() };
        let hidden = opts.style(RevealState::Hidden);
        assert!(hidden.starts_with("opacity: 0; transform: translateY(50px);"));
        assert!(hidden.contains("opacity 500ms ease-out 200ms"));

        let visible = opts.style(RevealState::Visible);
        assert!(visible.starts_with("opacity: 1; transform: translateY(0px);"));
        assert!(visible.contains("transform 500ms ease-out 200ms"));
    }

    #[test]
    fn negative_offset_starts_above() {
        let opts = RevealOptions { offset_px: -20.0, ..RevealOptions::default() };
        assert!(opts.style(RevealState::Hidden).contains("translateY(-20px)"));
    }

    #[test]
    fn threshold_is_clamped() {
        let mut opts = RevealOptions::default();
        assert_eq!(opts.effective_threshold(), 0.1);
        opts.threshold = 1.5;
        assert_eq!(opts.effective_threshold(), 1.0);
        opts.threshold = -0.2;
        assert_eq!(opts.effective_threshold(), 0.0);
        opts.threshold = f64::NAN;
        assert_eq!(opts.effective_threshold(), 0.0);
    }
}

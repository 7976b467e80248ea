//! Exclusive-open accordion state.
//!
//! A toggle runs one full cycle `Closing -> Opening -> Idle`. While
//! `Closing`, the old content fades out but the old panel keeps its size.
//! Entering `Opening` commits the new active panel, so the container resizes
//! straight from the old panel to the new one and the new content fades in
//! afterwards. Input is locked for the whole cycle and toggles that arrive
//! while locked are dropped.
//!
//! The timers themselves are owned by whoever renders the accordion: each
//! phase names the timer that must be running through [`DisclosureState::timer`].

/// Content opacity transition.
pub const CONTENT_FADE_MILLIS: u32 = 220;
/// Panel width/height transition.
pub const PANEL_RESIZE_MILLIS: u32 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Closing,
    Opening,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisclosureEvent {
    Toggle(usize),
    ContentFaded,
    PanelResized,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timer {
    pub after_ms: u32,
    pub fires: DisclosureEvent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisclosureState {
    panel_count: usize,
    active: Option<usize>,
    phase: Phase,
    pending: Option<usize>,
}

impl DisclosureState {
    /// An out-of-range `initially_open` starts with every panel closed.
    pub fn new(panel_count: usize, initially_open: Option<usize>) -> Self {
        Self {
            panel_count,
            active: initially_open.filter(|&i| i < panel_count),
            phase: Phase::Idle,
            pending: None,
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pending(&self) -> Option<usize> {
        self.pending
    }

    pub fn input_locked(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Content of the active panel is hidden while it fades out.
    pub fn shows_content(&self, index: usize) -> bool {
        self.is_active(index) && self.phase != Phase::Closing
    }

    pub fn is_closing(&self, index: usize) -> bool {
        self.is_active(index) && self.phase == Phase::Closing
    }

    /// The timer that has to be running for the current phase.
    pub fn timer(&self) -> Option<Timer> {
        match self.phase {
            Phase::Idle => None,
            Phase::Closing => Some(Timer {
                after_ms: CONTENT_FADE_MILLIS,
                fires: DisclosureEvent::ContentFaded,
            }),
            Phase::Opening => Some(Timer {
                after_ms: PANEL_RESIZE_MILLIS,
                fires: DisclosureEvent::PanelResized,
            }),
        }
    }

    /// Returns whether the event changed anything. Events that do not belong
    /// to the current phase are dropped.
    pub fn apply(&mut self, event: DisclosureEvent) -> bool {
        match (self.phase, event) {
            (Phase::Idle, DisclosureEvent::Toggle(index)) if index < self.panel_count => {
                self.pending = if self.active == Some(index) {
                    None
                } else {
                    Some(index)
                };
                self.phase = Phase::Closing;
                true
            }
            (Phase::Closing, DisclosureEvent::ContentFaded) => {
                self.active = self.pending.take();
                self.phase = Phase::Opening;
                true
            }
            (Phase::Opening, DisclosureEvent::PanelResized) => {
                self.phase = Phase::Idle;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drives a toggle through its timers and records every phase seen.
    fn run_cycle(state: &mut DisclosureState, index: usize) -> Vec<Phase> {
        let mut phases = Vec::new();
        assert!(state.apply(DisclosureEvent::Toggle(index)));
        phases.push(state.phase());
        while let Some(timer) = state.timer() {
            assert!(state.input_locked());
            assert!(state.apply(timer.fires));
            phases.push(state.phase());
        }
        phases
    }

    #[test]
    fn cycle_runs_closing_opening_idle() {
        let mut state = DisclosureState::new(5, Some(0));
        let phases = run_cycle(&mut state, 2);
        assert_eq!(phases, vec![Phase::Closing, Phase::Opening, Phase::Idle]);
        assert_eq!(state.active(), Some(2));
        assert!(!state.input_locked());
    }

    #[test]
    fn toggling_active_panel_closes_it() {
        let mut state = DisclosureState::new(5, Some(3));
        run_cycle(&mut state, 3);
        assert_eq!(state.active(), None);

        run_cycle(&mut state, 1);
        assert_eq!(state.active(), Some(1));
    }

    #[test]
    fn toggles_while_locked_are_dropped() {
        let mut state = DisclosureState::new(5, Some(0));
        assert!(state.apply(DisclosureEvent::Toggle(1)));
        assert!(!state.apply(DisclosureEvent::Toggle(4)));
        assert_eq!(state.pending(), Some(1));

        assert!(state.apply(DisclosureEvent::ContentFaded));
        assert!(!state.apply(DisclosureEvent::Toggle(4)));
        assert!(state.input_locked());

        assert!(state.apply(DisclosureEvent::PanelResized));
        assert_eq!(state.active(), Some(1));
    }

    #[test]
    fn switching_keeps_old_panel_active_until_content_faded() {
        let mut state = DisclosureState::new(3, Some(0));
        state.apply(DisclosureEvent::Toggle(2));
        assert!(state.is_active(0));
        assert!(state.is_closing(0));
        assert!(!state.shows_content(0));
        assert!(!state.is_active(2));

        state.apply(DisclosureEvent::ContentFaded);
        assert!(state.is_active(2));
        assert!(state.shows_content(2));
        assert!(!state.is_active(0));
    }

    #[test]
    fn collapsing_panel_stays_flagged_closing_until_faded() {
        let mut state = DisclosureState::new(2, Some(1));
        assert!(!state.is_closing(1));
        state.apply(DisclosureEvent::Toggle(1));
        assert!(state.is_closing(1));
        assert!(!state.is_closing(0));

        state.apply(DisclosureEvent::ContentFaded);
        assert!(!state.is_closing(1));
        assert_eq!(state.active(), None);
    }

    #[test]
    fn timers_match_phase() {
        let mut state = DisclosureState::new(2, None);
        assert_eq!(state.timer(), None);
        state.apply(DisclosureEvent::Toggle(0));
        assert_eq!(state.timer().map(|t| t.after_ms), Some(CONTENT_FADE_MILLIS));
        state.apply(DisclosureEvent::ContentFaded);
        assert_eq!(state.timer().map(|t| t.after_ms), Some(PANEL_RESIZE_MILLIS));
        assert!(CONTENT_FADE_MILLIS < PANEL_RESIZE_MILLIS);
    }

    #[test]
    fn stray_timer_events_are_ignored() {
        let mut state = DisclosureState::new(2, Some(0));
        let before = state.clone();
        assert!(!state.apply(DisclosureEvent::ContentFaded));
        assert!(!state.apply(DisclosureEvent::PanelResized));
        assert_eq!(state, before);

        state.apply(DisclosureEvent::Toggle(1));
        assert!(!state.apply(DisclosureEvent::PanelResized));
        assert_eq!(state.phase(), Phase::Closing);
    }

    #[test]
    fn out_of_range_indices_are_dropped() {
        let mut state = DisclosureState::new(2, Some(7));
        assert_eq!(state.active(), None);
        assert!(!state.apply(DisclosureEvent::Toggle(2)));
        assert!(!state.input_locked());
    }

    #[test]
    fn any_sequence_keeps_lock_until_idle() {
        let mut state = DisclosureState::new(4, Some(0));
        let script = [0usize, 1, 1, 3, 2, 2, 0];
        for &index in &script {
            let target = if state.active() == Some(index) { None } else { Some(index) };
            let phases = run_cycle(&mut state, index);
            assert_eq!(phases.last(), Some(&Phase::Idle));
            assert_eq!(state.active(), target);
        }
    }
}

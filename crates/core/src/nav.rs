//! Navigation state machine for the walkthrough.
//!
//! One [`NavState`] per session. All transitions are synchronous; callers fire
//! presentation side effects (scroll, etc.) strictly after a successful
//! mutation, which is why [`NavState::go_to`] reports whether it moved.
//!
//! Invariants, maintained by construction:
//! - `current` is always a valid deck index,
//! - `max_visited` never decreases,
//! - `current <= max_visited`,
//! - leaving a slide drops that slide's ephemeral flags.

use hashbrown::HashMap;

use crate::deck::{self, SlideKind};

/// Per-slide ephemeral state. Cleared centrally whenever the user navigates
/// away from the owning slide, so individual slides never have to remember
/// to reset themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepFlags {
    /// The user has confirmed this step (answered, pressed "lock in", ...).
    pub confirmed: bool,
    /// The slide's explanation / formula reveal has been shown.
    pub revealed: bool,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavState {
    current: usize,
    max_visited: usize,
    menu_open: bool,
    step_flags: HashMap<usize, StepFlags>,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavState {
    pub fn new() -> Self {
        Self {
            current: 0,
            max_visited: 0,
            menu_open: false,
            step_flags: HashMap::new(),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_kind(&self) -> SlideKind {
        deck::kind_of(self.current).expect("current is always a valid deck index")
    }

    /// High-water mark: the farthest slide ever reached this session.
    pub fn max_visited(&self) -> usize {
        self.max_visited
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Navigate to `target`. The single path by which `current` changes:
    /// menu clicks, per-slide "continue" actions, and shortcuts all funnel
    /// through here.
    ///
    /// Out-of-range targets are a silent no-op (stale input must degrade to
    /// "nothing happens", never corrupt state). On success the target's
    /// flags are kept, every other slide's flags are dropped, and the menu
    /// closes. Returns whether navigation happened.
    pub fn go_to(&mut self, target: isize) -> bool {
        if target < 0 || target as usize >= deck::count() {
            return false;
        }
        let target = target as usize;

        self.step_flags.retain(|&slide, _| slide == target);
        self.current = target;
        if target > self.max_visited {
            self.max_visited = target;
        }
        self.menu_open = false;
        true
    }

    /// Convenience for [`go_to`](Self::go_to) with a named slide.
    pub fn go_to_kind(&mut self, kind: SlideKind) -> bool {
        self.go_to(deck::index_of(kind) as isize)
    }

    /// Shortcut forward. Only replays already-unlocked ground: requires
    /// `current < max_visited`, so holding the key at the frontier cannot
    /// unlock new slides. New slides are unlocked only by a slide's own
    /// explicit `go_to`.
    pub fn step_forward(&mut self) -> bool {
        if self.current < self.max_visited {
            self.go_to(self.current as isize + 1)
        } else {
            false
        }
    }

    /// Shortcut backward, guarded at slide 0.
    pub fn step_backward(&mut self) -> bool {
        if self.current > 0 {
            self.go_to(self.current as isize - 1)
        } else {
            false
        }
    }

    /// Flip the navigation menu; independent of slide position.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Flags for `index`, defaulting to unset.
    pub fn flags(&self, index: usize) -> StepFlags {
        self.step_flags.get(&index).copied().unwrap_or_default()
    }

    pub fn current_flags(&self) -> StepFlags {
        self.flags(self.current)
    }

    /// Mark the current slide confirmed. Flag mutators are scoped to the
    /// current slide only; there is no way to set state on a slide the user
    /// is not looking at.
    pub fn confirm_current(&mut self) {
        self.step_flags.entry(self.current).or_default().confirmed = true;
    }

    /// Mark the current slide's explanation as revealed.
    pub fn reveal_current(&mut self) {
        self.step_flags.entry(self.current).or_default().revealed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_the_beginning() {
        let nav = NavState::new();
        assert_eq!(nav.current(), 0);
        assert_eq!(nav.max_visited(), 0);
        assert!(!nav.menu_open());
        assert_eq!(nav.current_kind(), SlideKind::Welcome);
    }

    #[test]
    fn out_of_range_targets_are_ignored() {
        let mut nav = NavState::new();
        nav.toggle_menu();

        assert!(!nav.go_to(-1));
        assert!(!nav.go_to(deck::count() as isize));
        assert!(!nav.go_to(isize::MAX));

        assert_eq!(nav.current(), 0);
        assert_eq!(nav.max_visited(), 0);
        // A failed navigation does not close the menu either.
        assert!(nav.menu_open());
    }

    #[test]
    fn high_water_mark_is_monotone_and_bounds_current() {
        let mut nav = NavState::new();
        let targets = [3isize, 1, 5, 2, 5, 0, 4, -7, 99];
        let mut prev_max = nav.max_visited();
        for t in targets {
            nav.go_to(t);
            assert!(nav.max_visited() >= prev_max);
            assert!(nav.current() <= nav.max_visited());
            assert!(nav.current() < deck::count());
            prev_max = nav.max_visited();
        }
        assert_eq!(nav.max_visited(), 5);
    }

    #[test]
    fn shortcut_cannot_unlock_new_slides() {
        let mut nav = NavState::new();
        nav.go_to(3);
        assert_eq!(nav.current(), 3);
        assert_eq!(nav.max_visited(), 3);

        // At the frontier the shortcut is a no-op.
        assert!(!nav.step_forward());
        assert_eq!(nav.current(), 3);

        // Only an explicit go_to advances the frontier.
        assert!(nav.go_to(4));
        assert_eq!(nav.max_visited(), 4);
    }

    #[test]
    fn step_backward_is_guarded_at_zero() {
        let mut nav = NavState::new();
        assert!(!nav.step_backward());
        assert_eq!(nav.current(), 0);

        nav.go_to(2);
        assert!(nav.step_backward());
        assert_eq!(nav.current(), 1);
        assert_eq!(nav.max_visited(), 2);
    }

    #[test]
    fn successful_navigation_closes_the_menu() {
        let mut nav = NavState::new();
        nav.toggle_menu();
        assert!(nav.menu_open());
        nav.go_to(1);
        assert!(!nav.menu_open());

        nav.toggle_menu();
        nav.toggle_menu();
        assert!(!nav.menu_open());
    }

    #[test]
    fn flags_reset_when_leaving_a_slide() {
        let mut nav = NavState::new();
        nav.go_to(2);
        nav.confirm_current();
        nav.reveal_current();
        assert_eq!(
            nav.flags(2),
            StepFlags {
                confirmed: true,
                revealed: true
            }
        );

        nav.go_to(3);
        assert_eq!(nav.flags(2), StepFlags::default());

        // Coming back, the slide starts fresh.
        nav.go_to(2);
        assert_eq!(nav.current_flags(), StepFlags::default());
    }

    #[test]
    fn renavigating_to_the_same_slide_keeps_its_flags() {
        let mut nav = NavState::new();
        nav.go_to(2);
        nav.confirm_current();
        nav.go_to(2);
        assert!(nav.current_flags().confirmed);
    }

    #[test]
    fn go_to_kind_resolves_deck_positions() {
        let mut nav = NavState::new();
        assert!(nav.go_to_kind(SlideKind::CurveLab));
        assert_eq!(nav.current_kind(), SlideKind::CurveLab);
        assert_eq!(nav.current(), deck::index_of(SlideKind::CurveLab));
    }

    #[test]
    fn end_to_end_scenario() {
        let mut nav = NavState::new();
        assert_eq!((nav.current(), nav.max_visited()), (0, 0));

        assert!(nav.go_to(1));
        assert_eq!((nav.current(), nav.max_visited()), (1, 1));

        // A slide's internal "jump" on answer submit.
        assert!(nav.go_to(5));
        assert_eq!((nav.current(), nav.max_visited()), (5, 5));
        nav.reveal_current();

        assert!(nav.step_backward());
        assert_eq!((nav.current(), nav.max_visited()), (4, 5));
        // Slide 5's ephemeral flags were cleared on departure.
        assert_eq!(nav.flags(5), StepFlags::default());

        // Replaying unlocked ground is allowed.
        assert!(nav.step_forward());
        assert_eq!(nav.current(), 5);

        // At the frontier the shortcut cannot advance.
        assert!(nav.go_to(5));
        assert!(!nav.step_forward());
        assert_eq!(nav.current(), 5);
    }
}

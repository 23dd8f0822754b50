//! The slide deck: a fixed, ordered catalog of slides.
//!
//! Configuration data, not runtime state. The deck is defined once here and
//! never mutated; navigation state lives in [`crate::nav`].

/// One variant per slide, in deck order.
///
/// Slides reference each other through [`index_of`] rather than raw indices,
/// so jump targets stay readable and the compiler checks exhaustiveness
/// wherever the deck is dispatched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlideKind {
    Welcome,
    WarmupGuess,
    TaskChoice,
    FirstAttempt,
    AbilityIntro,
    DifficultyQuiz,
    DifficultyIntro,
    PracticeIntro,
    CurveLab,
    OutcomeQuiz,
    OutcomeLab,
    HintLab,
    Recap,
    Finale,
}

impl SlideKind {
    /// Stable kebab-case id, used for DOM anchors and debugging.
    pub fn label(self) -> &'static str {
        match self {
            SlideKind::Welcome => "welcome",
            SlideKind::WarmupGuess => "warmup-guess",
            SlideKind::TaskChoice => "task-choice",
            SlideKind::FirstAttempt => "first-attempt",
            SlideKind::AbilityIntro => "ability",
            SlideKind::DifficultyQuiz => "difficulty-quiz",
            SlideKind::DifficultyIntro => "difficulty",
            SlideKind::PracticeIntro => "practice",
            SlideKind::CurveLab => "curve-lab",
            SlideKind::OutcomeQuiz => "outcome-quiz",
            SlideKind::OutcomeLab => "outcome-lab",
            SlideKind::HintLab => "hint-lab",
            SlideKind::Recap => "recap",
            SlideKind::Finale => "finale",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SlideKind::Welcome => "Welcome",
            SlideKind::WarmupGuess => "A first guess",
            SlideKind::TaskChoice => "Pick a skill",
            SlideKind::FirstAttempt => "The first attempt",
            SlideKind::AbilityIntro => "Ability (θ)",
            SlideKind::DifficultyQuiz => "Which is harder?",
            SlideKind::DifficultyIntro => "Difficulty (β)",
            SlideKind::PracticeIntro => "Practice (γ·T)",
            SlideKind::CurveLab => "The learning curve",
            SlideKind::OutcomeQuiz => "Do failures teach?",
            SlideKind::OutcomeLab => "Successes vs failures",
            SlideKind::HintLab => "Adding hints",
            SlideKind::Recap => "Recap",
            SlideKind::Finale => "You made it",
        }
    }

    /// Whether the slide appears in the quick-navigation menu.
    ///
    /// Only chapter heads are exposed; everything else is reached through
    /// normal forward progression.
    pub fn in_menu(self) -> bool {
        matches!(
            self,
            SlideKind::Welcome | SlideKind::AbilityIntro | SlideKind::CurveLab | SlideKind::Recap
        )
    }

    /// The full deck, in presentation order.
    pub fn all() -> &'static [SlideKind] {
        &[
            SlideKind::Welcome,
            SlideKind::WarmupGuess,
            SlideKind::TaskChoice,
            SlideKind::FirstAttempt,
            SlideKind::AbilityIntro,
            SlideKind::DifficultyQuiz,
            SlideKind::DifficultyIntro,
            SlideKind::PracticeIntro,
            SlideKind::CurveLab,
            SlideKind::OutcomeQuiz,
            SlideKind::OutcomeLab,
            SlideKind::HintLab,
            SlideKind::Recap,
            SlideKind::Finale,
        ]
    }
}

/// Number of slides in the deck.
pub fn count() -> usize {
    SlideKind::all().len()
}

/// The slide at `index`, if in range.
pub fn kind_of(index: usize) -> Option<SlideKind> {
    SlideKind::all().get(index).copied()
}

/// Deck position of `kind`.
pub fn index_of(kind: SlideKind) -> usize {
    SlideKind::all()
        .iter()
        .position(|&k| k == kind)
        .expect("every SlideKind appears in the deck")
}

pub fn title_of(index: usize) -> Option<&'static str> {
    kind_of(index).map(SlideKind::title)
}

/// Membership test against the curated menu allow-list.
pub fn is_menu_visible(index: usize) -> bool {
    kind_of(index).is_some_and(SlideKind::in_menu)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_inventory_is_stable() {
        let all = SlideKind::all();
        assert_eq!(all.len(), 14);
        assert_eq!(count(), all.len());

        let mut labels: Vec<&'static str> = all.iter().copied().map(SlideKind::label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), all.len());

        for &k in all {
            assert!(!k.label().trim().is_empty());
            assert!(!k.title().trim().is_empty());
            assert_eq!(kind_of(index_of(k)), Some(k));
        }
    }

    #[test]
    fn deck_starts_and_ends_where_expected() {
        assert_eq!(kind_of(0), Some(SlideKind::Welcome));
        assert_eq!(kind_of(count() - 1), Some(SlideKind::Finale));
        assert_eq!(kind_of(count()), None);
    }

    #[test]
    fn menu_exposes_only_chapter_heads() {
        let menu: Vec<SlideKind> = SlideKind::all()
            .iter()
            .copied()
            .filter(|k| k.in_menu())
            .collect();
        assert_eq!(
            menu,
            vec![
                SlideKind::Welcome,
                SlideKind::AbilityIntro,
                SlideKind::CurveLab,
                SlideKind::Recap,
            ]
        );
        assert!(is_menu_visible(0));
        assert!(!is_menu_visible(1));
        assert!(!is_menu_visible(count()));
    }

    #[test]
    fn titles_resolve_by_index() {
        assert_eq!(title_of(0), Some("Welcome"));
        assert_eq!(title_of(count()), None);
    }
}

//! Derived presentation state.
//!
//! Which version of the formula the floating helper shows is *computed* from
//! the authoritative navigation state on every render, never stored. That
//! removes the whole class of "forgot to reset this when navigating away"
//! bugs: there is nothing to reset.

use crate::deck::{index_of, SlideKind};
use crate::nav::StepFlags;

/// Progressive reveal of `p = σ(θ − β + γ·T)` and its outcome-split form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormulaStage {
    Hidden,
    /// `p = σ(θ)`
    Ability,
    /// `p = σ(θ − β)`
    AbilityDifficulty,
    /// `p = σ(θ − β + γ·T)`
    FullPractice,
    /// `p = σ(θ − β + γs·Ts + γf·Tf + γh·Th)`
    OutcomeSplit,
}

/// Map `(current slide, its flags)` to the formula stage to display.
///
/// An ordered set of range/condition checks over the deck, evaluated top to
/// bottom; the first match wins. Quiz slides gate their step on the slide's
/// own `revealed` flag so the formula grows only after the answer is shown.
pub fn formula_stage(current: usize, flags: StepFlags) -> FormulaStage {
    let ability = index_of(SlideKind::AbilityIntro);
    let difficulty_quiz = index_of(SlideKind::DifficultyQuiz);
    let practice = index_of(SlideKind::PracticeIntro);
    let outcome_quiz = index_of(SlideKind::OutcomeQuiz);
    let finale = index_of(SlideKind::Finale);

    if current < ability {
        FormulaStage::Hidden
    } else if current < difficulty_quiz {
        FormulaStage::Ability
    } else if current == difficulty_quiz {
        if flags.revealed {
            FormulaStage::AbilityDifficulty
        } else {
            FormulaStage::Ability
        }
    } else if current < practice {
        FormulaStage::AbilityDifficulty
    } else if current < outcome_quiz {
        FormulaStage::FullPractice
    } else if current == outcome_quiz {
        if flags.revealed {
            FormulaStage::OutcomeSplit
        } else {
            FormulaStage::FullPractice
        }
    } else if current < finale {
        FormulaStage::OutcomeSplit
    } else {
        FormulaStage::Hidden
    }
}

/// Whether the floating formula helper is shown at all.
///
/// Off before the formula is introduced and again from the recap onward,
/// where the full model is laid out inline.
pub fn helper_visible(current: usize, flags: StepFlags) -> bool {
    if current >= index_of(SlideKind::Recap) {
        return false;
    }
    formula_stage(current, flags) != FormulaStage::Hidden
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck;

    fn unset() -> StepFlags {
        StepFlags::default()
    }

    fn revealed() -> StepFlags {
        StepFlags {
            confirmed: false,
            revealed: true,
        }
    }

    #[test]
    fn hidden_before_the_formula_is_introduced() {
        for i in 0..deck::index_of(SlideKind::AbilityIntro) {
            assert_eq!(formula_stage(i, unset()), FormulaStage::Hidden);
            assert!(!helper_visible(i, unset()));
        }
    }

    #[test]
    fn quiz_slides_gate_on_their_reveal_flag() {
        let dq = deck::index_of(SlideKind::DifficultyQuiz);
        assert_eq!(formula_stage(dq, unset()), FormulaStage::Ability);
        assert_eq!(formula_stage(dq, revealed()), FormulaStage::AbilityDifficulty);

        let oq = deck::index_of(SlideKind::OutcomeQuiz);
        assert_eq!(formula_stage(oq, unset()), FormulaStage::FullPractice);
        assert_eq!(formula_stage(oq, revealed()), FormulaStage::OutcomeSplit);
    }

    #[test]
    fn stages_follow_deck_order() {
        assert_eq!(
            formula_stage(deck::index_of(SlideKind::AbilityIntro), unset()),
            FormulaStage::Ability
        );
        assert_eq!(
            formula_stage(deck::index_of(SlideKind::DifficultyIntro), unset()),
            FormulaStage::AbilityDifficulty
        );
        assert_eq!(
            formula_stage(deck::index_of(SlideKind::PracticeIntro), unset()),
            FormulaStage::FullPractice
        );
        assert_eq!(
            formula_stage(deck::index_of(SlideKind::CurveLab), unset()),
            FormulaStage::FullPractice
        );
        assert_eq!(
            formula_stage(deck::index_of(SlideKind::OutcomeLab), unset()),
            FormulaStage::OutcomeSplit
        );
        assert_eq!(
            formula_stage(deck::index_of(SlideKind::HintLab), unset()),
            FormulaStage::OutcomeSplit
        );
    }

    #[test]
    fn helper_is_hidden_from_the_recap_onward() {
        assert!(!helper_visible(deck::index_of(SlideKind::Recap), revealed()));
        assert!(!helper_visible(deck::index_of(SlideKind::Finale), revealed()));
        assert_eq!(
            formula_stage(deck::index_of(SlideKind::Finale), unset()),
            FormulaStage::Hidden
        );
    }

    #[test]
    fn stage_never_regresses_as_flags_accumulate_forward() {
        // Walking the deck forward with every slide revealed, the stage is
        // non-decreasing until it hides for the outro.
        let rank = |s: FormulaStage| match s {
            FormulaStage::Hidden => 0,
            FormulaStage::Ability => 1,
            FormulaStage::AbilityDifficulty => 2,
            FormulaStage::FullPractice => 3,
            FormulaStage::OutcomeSplit => 4,
        };
        let recap = deck::index_of(SlideKind::Recap);
        let mut prev = 0;
        for i in 0..recap {
            let r = rank(formula_stage(i, revealed()));
            assert!(r >= prev, "stage regressed at slide {i}");
            prev = r;
        }
    }
}

//! Cross-slide shared answers.
//!
//! The only state that survives navigation: two free-text guesses and one
//! task choice, written by early slides and read back by the recap. No
//! validation lives here; "non-empty to enable submit" is enforced by the
//! producing slide.

/// Which example skill the learner picked to follow through the walkthrough.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TaskChoice {
    #[default]
    Unset,
    Fractions,
    Equations,
}

impl TaskChoice {
    pub fn label(self) -> &'static str {
        match self {
            TaskChoice::Unset => "(not chosen yet)",
            TaskChoice::Fractions => "Adding fractions",
            TaskChoice::Equations => "Solving linear equations",
        }
    }

    pub fn is_set(self) -> bool {
        self != TaskChoice::Unset
    }
}

/// One instance per session, owned by the app alongside the navigation state.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SharedAnswers {
    /// Warm-up: "how many practice attempts until mastery?"
    pub guess_one: String,
    /// "Which of the two skills is harder, and why?"
    pub guess_two: String,
    pub task_choice: TaskChoice,
}

impl SharedAnswers {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_unset() {
        let a = SharedAnswers::new();
        assert!(a.guess_one.is_empty());
        assert!(a.guess_two.is_empty());
        assert_eq!(a.task_choice, TaskChoice::Unset);
        assert!(!a.task_choice.is_set());
    }

    #[test]
    fn task_choice_labels_are_distinct() {
        let labels = [
            TaskChoice::Unset.label(),
            TaskChoice::Fractions.label(),
            TaskChoice::Equations.label(),
        ];
        for l in labels {
            assert!(!l.trim().is_empty());
        }
        assert_ne!(labels[1], labels[2]);
    }
}
